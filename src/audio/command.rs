//! Commands sent from the main thread to the audio thread via ring buffer.

use crate::synth::VoiceParams;

/// Commands sent from the main thread to the audio thread via ring buffer.
#[derive(Debug)]
pub enum AudioCommand {
    /// Start a note on the voice, optionally delayed by frames.
    NoteOn {
        note: u8,
        velocity: u8,
        delta_frames: usize,
    },
    /// Release a note.
    NoteOff { note: u8 },
    /// Replace the voice parameters.
    SetParams(VoiceParams),
    /// Set master volume (0.0 to 1.0).
    SetVolume(f32),
}
