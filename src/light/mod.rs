//! Light control — note events to RGB datagrams for an addressable light bank.
//!
//! Every note-on/note-off becomes one fixed-layout UDP datagram: a light
//! index picked from the note's position in a 2-octave pattern, colored by
//! the note's octave-pair range, with brightness from velocity.

pub mod command;
pub mod config;
pub mod mapping;
pub mod sender;

pub use command::LightCommand;
pub use config::{LightConfig, OutOfRangePolicy};
pub use mapping::{light_index, ColorTheme};
pub use sender::{LightError, LightSender};
