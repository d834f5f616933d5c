//! The monophonic two-oscillator voice.
//!
//! One note at a time: a new note-on steals the voice, note-off only
//! releases the note that is sounding. Oscillator 1 renders to the left
//! channel and oscillator 2 to the right. There is no envelope — the gate
//! opens and closes hard.

use super::wavetable::{freq_table, OscWave, Wavetables};

/// Per-voice parameters.
#[derive(Debug, Clone, Copy)]
pub struct VoiceParams {
    pub wave1: OscWave,
    pub wave2: OscWave,
    /// Frequency offset in Hz added to each oscillator.
    pub detune1: f32,
    pub detune2: f32,
    /// Per-oscillator gain.
    pub volume1: f32,
    pub volume2: f32,
    /// Master gain, scaled further by note velocity.
    pub volume: f32,
}

impl Default for VoiceParams {
    fn default() -> Self {
        Self {
            wave1: OscWave::Sawtooth,
            wave2: OscWave::Pulse,
            detune1: 0.0,
            detune2: 0.0,
            volume1: 1.0,
            volume2: 1.0,
            volume: 0.8,
        }
    }
}

/// Monophonic voice state. Lives on the audio thread.
pub struct MonoVoice {
    tables: Wavetables,
    freqs: Vec<f32>,
    params: VoiceParams,
    phase1: f32,
    phase2: f32,
    /// Table-index units per second of frequency: WAVE_SIZE / sample_rate.
    scaler: f32,
    note: u8,
    velocity: u8,
    gate: bool,
    /// Frames of silence to emit before the note starts sounding.
    delta: usize,
}

impl MonoVoice {
    pub fn new(sample_rate: u32) -> Self {
        Self {
            tables: Wavetables::new(),
            freqs: freq_table(),
            params: VoiceParams::default(),
            phase1: 0.0,
            phase2: 0.0,
            scaler: super::wavetable::WAVE_SIZE as f32 / sample_rate as f32,
            note: 0,
            velocity: 0,
            gate: false,
            delta: 0,
        }
    }

    pub fn set_sample_rate(&mut self, sample_rate: u32) {
        self.scaler = super::wavetable::WAVE_SIZE as f32 / sample_rate as f32;
    }

    pub fn params(&self) -> &VoiceParams {
        &self.params
    }

    pub fn set_params(&mut self, params: VoiceParams) {
        self.params = params;
    }

    pub fn is_active(&self) -> bool {
        self.gate
    }

    /// Start a note. `delta_frames` delays the onset within the next
    /// rendered block; phases are deliberately not reset, so the
    /// oscillators free-run across notes.
    pub fn note_on(&mut self, note: u8, velocity: u8, delta_frames: usize) {
        self.note = note & 0x7f;
        self.velocity = velocity & 0x7f;
        self.gate = true;
        self.delta = delta_frames;
    }

    /// Release the voice, but only if `note` is the one sounding.
    pub fn note_off(&mut self, note: u8) {
        if self.gate && self.note == note & 0x7f {
            self.gate = false;
        }
    }

    /// Render interleaved frames into `output`. Mono output mixes both
    /// oscillators; stereo and wider puts oscillator 1 left, 2 right.
    pub fn render(&mut self, output: &mut [f32], channels: u16) {
        let channels = channels.max(1) as usize;

        if !self.gate {
            output.fill(0.0);
            return;
        }

        let base = self.freqs[self.note as usize];
        let inc1 = (base + self.params.detune1) * self.scaler;
        let inc2 = (base + self.params.detune2) * self.scaler;
        let vol = self.params.volume * (self.velocity as f32 / 127.0);
        let wave_len = super::wavetable::WAVE_SIZE as f32;

        for frame in output.chunks_exact_mut(channels) {
            if self.delta > 0 {
                self.delta -= 1;
                frame.fill(0.0);
                continue;
            }

            let left = self.tables.sample(self.params.wave1, self.phase1 as usize)
                * self.params.volume1
                * vol;
            let right = self.tables.sample(self.params.wave2, self.phase2 as usize)
                * self.params.volume2
                * vol;

            if channels == 1 {
                frame[0] = 0.5 * (left + right);
            } else {
                frame[0] = left;
                frame[1] = right;
                for extra in frame.iter_mut().skip(2) {
                    *extra = 0.0;
                }
            }

            // Keep phases small so f32 precision holds over long notes.
            self.phase1 += inc1;
            if self.phase1 >= wave_len {
                self.phase1 -= wave_len;
            }
            self.phase2 += inc2;
            if self.phase2 >= wave_len {
                self.phase2 -= wave_len;
            }
        }
    }
}
