//! MIDI input — device connection and raw-message normalization.

pub mod config;
pub mod event;
pub mod input;

pub use config::MidiConfig;
pub use event::{note_channel, NoteEvent, NoteParser, NoteReceiver, NoteSender};
pub use input::MidiInput;
