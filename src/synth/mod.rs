//! Wavetable synthesis — two-oscillator monophonic voice.

pub mod voice;
pub mod wavetable;

pub use voice::{MonoVoice, VoiceParams};
pub use wavetable::{freq_table, OscWave, Wavetables, WAVE_SIZE};
