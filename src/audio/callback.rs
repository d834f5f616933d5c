//! Audio callback — runs on the cpal audio thread.
//!
//! Drains commands from the ring buffer, then lets the monophonic voice
//! render directly into the output buffer. The voice is owned here; the
//! main thread only ever talks to it through commands.

use ringbuf::traits::Consumer;
use ringbuf::HeapCons;

use super::command::AudioCommand;
use crate::synth::MonoVoice;

/// State that lives on the audio thread. Accessed only from the cpal callback.
pub struct AudioCallback {
    consumer: HeapCons<AudioCommand>,
    voice: MonoVoice,
    volume: f32,
    channels: u16,
    sample_rate: u32,
}

impl AudioCallback {
    /// Create a new audio callback with the given ring buffer consumer.
    pub fn new(consumer: HeapCons<AudioCommand>, channels: u16, sample_rate: u32) -> Self {
        Self {
            consumer,
            voice: MonoVoice::new(sample_rate),
            volume: 1.0,
            channels,
            sample_rate,
        }
    }

    /// Called by cpal for each audio block. Fills `output` with samples.
    pub fn process(&mut self, output: &mut [f32]) {
        while let Some(cmd) = self.consumer.try_pop() {
            match cmd {
                AudioCommand::NoteOn {
                    note,
                    velocity,
                    delta_frames,
                } => {
                    self.voice.note_on(note, velocity, delta_frames);
                }
                AudioCommand::NoteOff { note } => {
                    self.voice.note_off(note);
                }
                AudioCommand::SetParams(params) => {
                    self.voice.set_params(params);
                }
                AudioCommand::SetVolume(v) => {
                    self.volume = v.clamp(0.0, 1.0);
                }
            }
        }

        self.voice.render(output, self.channels);

        if self.volume < 1.0 {
            for sample in output.iter_mut() {
                *sample *= self.volume;
            }
        }
    }

    /// Returns the sample rate.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Returns the channel count.
    pub fn channels(&self) -> u16 {
        self.channels
    }
}
