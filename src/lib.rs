//! Lumisynth — a monophonic wavetable synth that drives addressable stage
//! lights over UDP.

pub mod audio;
pub mod color;
pub mod light;
pub mod midi;
pub mod synth;
