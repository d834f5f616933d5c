//! Wavetables and the note frequency table.
//!
//! Waveforms are precomputed 4096-sample tables read by a phase
//! accumulator; no bandlimiting, so expect aliasing high up. The
//! frequency table is built multiplicatively from the 12th root of 2,
//! anchored so MIDI note 69 lands on 440 Hz.

/// Samples per wavetable. Must be a power of 2 so the phase accumulator
/// can wrap with a mask.
pub const WAVE_SIZE: usize = 4096;

/// Mask for wrapping a phase index into the table.
pub const WAVE_MASK: usize = WAVE_SIZE - 1;

/// Number of MIDI notes in the frequency table.
pub const NUM_FREQUENCIES: usize = 128;

/// Available oscillator waveforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OscWave {
    Sawtooth,
    /// 1:3 pulse — low for the first quarter of the cycle.
    Pulse,
}

/// The precomputed waveform tables.
pub struct Wavetables {
    sawtooth: Vec<f32>,
    pulse: Vec<f32>,
}

impl Wavetables {
    pub fn new() -> Self {
        let mut sawtooth = Vec::with_capacity(WAVE_SIZE);
        let mut pulse = Vec::with_capacity(WAVE_SIZE);
        let pulse_width = WAVE_SIZE / 4;

        for i in 0..WAVE_SIZE {
            sawtooth.push((-1.0 + 2.0 * (i as f64 / WAVE_SIZE as f64)) as f32);
            pulse.push(if i < pulse_width { -1.0 } else { 1.0 });
        }

        Self { sawtooth, pulse }
    }

    /// Read a table at a raw phase index; wraps with the power-of-2 mask.
    pub fn sample(&self, wave: OscWave, phase_index: usize) -> f32 {
        let table = match wave {
            OscWave::Sawtooth => &self.sawtooth,
            OscWave::Pulse => &self.pulse,
        };
        table[phase_index & WAVE_MASK]
    }
}

impl Default for Wavetables {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the 128-entry note frequency table (Hz).
///
/// Multiplicative construction: start from 6.875 Hz (the A below MIDI 0),
/// step up three semitones to C (MIDI note 0), then one semitone ratio per
/// note.
pub fn freq_table() -> Vec<f32> {
    let semitone = 2.0_f64.powf(1.0 / 12.0);
    let mut a = 6.875 * semitone * semitone * semitone;
    let mut table = Vec::with_capacity(NUM_FREQUENCIES);
    for _ in 0..NUM_FREQUENCIES {
        table.push(a as f32);
        a *= semitone;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn sawtooth_spans_minus_one_to_one() {
        let tables = Wavetables::new();
        assert_approx_eq!(tables.sample(OscWave::Sawtooth, 0), -1.0, 1e-6);
        assert!(tables.sample(OscWave::Sawtooth, WAVE_SIZE - 1) > 0.99);
        assert_approx_eq!(tables.sample(OscWave::Sawtooth, WAVE_SIZE / 2), 0.0, 1e-3);
    }

    #[test]
    fn pulse_is_one_to_three() {
        let tables = Wavetables::new();
        assert_eq!(tables.sample(OscWave::Pulse, 0), -1.0);
        assert_eq!(tables.sample(OscWave::Pulse, WAVE_SIZE / 4 - 1), -1.0);
        assert_eq!(tables.sample(OscWave::Pulse, WAVE_SIZE / 4), 1.0);
        assert_eq!(tables.sample(OscWave::Pulse, WAVE_SIZE - 1), 1.0);
    }

    #[test]
    fn phase_index_wraps() {
        let tables = Wavetables::new();
        assert_eq!(
            tables.sample(OscWave::Sawtooth, 5),
            tables.sample(OscWave::Sawtooth, WAVE_SIZE + 5)
        );
    }

    #[test]
    fn note_69_is_concert_a() {
        let table = freq_table();
        assert_approx_eq!(table[69], 440.0, 0.01);
    }

    #[test]
    fn note_0_is_lowest_c() {
        let table = freq_table();
        assert_approx_eq!(table[0], 8.1758, 0.001);
    }

    #[test]
    fn octaves_double() {
        let table = freq_table();
        assert_approx_eq!(table[72] / table[60], 2.0, 1e-4);
    }

    #[test]
    fn table_is_strictly_increasing() {
        let table = freq_table();
        assert_eq!(table.len(), NUM_FREQUENCIES);
        for pair in table.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }
}
