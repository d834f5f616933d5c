//! Note events and raw MIDI normalization.
//!
//! The synth is monophonic, so normalization is stateful: a note-on with
//! velocity 0 only counts as note-off when it matches the note currently
//! sounding. Everything downstream sees clean `NoteEvent`s.

use std::sync::mpsc;

/// A normalized note event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteEvent {
    /// Note-on with a nonzero velocity (1..=127).
    On { note: u8, velocity: u8 },
    /// Note-off.
    Off { note: u8 },
}

/// Sender half — clone this for the MIDI callback thread.
pub type NoteSender = mpsc::Sender<NoteEvent>;

/// Receiver half — held by the main event loop.
pub struct NoteReceiver {
    rx: mpsc::Receiver<NoteEvent>,
}

impl NoteReceiver {
    /// Non-blocking poll for the next note event.
    pub fn poll(&self) -> Option<NoteEvent> {
        self.rx.try_recv().ok()
    }

    /// Drain all pending events.
    pub fn drain(&self) -> Vec<NoteEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            events.push(event);
        }
        events
    }
}

/// Create a new note channel pair.
pub fn note_channel() -> (NoteSender, NoteReceiver) {
    let (tx, rx) = mpsc::channel();
    (tx, NoteReceiver { rx })
}

/// Stateful normalizer from raw MIDI bytes to note events.
///
/// MIDI message format:
/// - Note On:  [0x90 | channel, note, velocity]
/// - Note Off: [0x80 | channel, note, velocity]
#[derive(Debug, Default)]
pub struct NoteParser {
    /// Only accept messages on this channel (0-15). None = all channels.
    channel_filter: Option<u8>,
    /// The note currently sounding, if any.
    current_note: Option<u8>,
}

impl NoteParser {
    pub fn new(channel_filter: Option<u8>) -> Self {
        Self {
            channel_filter,
            current_note: None,
        }
    }

    /// The note currently sounding, if any.
    pub fn current_note(&self) -> Option<u8> {
        self.current_note
    }

    /// Parse one raw MIDI message. Returns None for non-note messages,
    /// filtered channels, and velocity-0 note-ons for notes that are not
    /// currently sounding.
    pub fn handle(&mut self, msg: &[u8]) -> Option<NoteEvent> {
        if msg.len() < 3 {
            return None;
        }

        let status = msg[0] & 0xF0;
        let channel = msg[0] & 0x0F;
        if status != 0x90 && status != 0x80 {
            return None;
        }
        if let Some(filter) = self.channel_filter {
            if channel != filter {
                return None;
            }
        }

        let note = msg[1] & 0x7f;
        let velocity = if status == 0x80 { 0 } else { msg[2] & 0x7f };

        if velocity == 0 {
            // Only release the note that is actually sounding.
            if self.current_note == Some(note) {
                self.current_note = None;
                return Some(NoteEvent::Off { note });
            }
            return None;
        }

        self.current_note = Some(note);
        Some(NoteEvent::On { note, velocity })
    }
}
