//! Audio engine — cpal output stream fed by the monophonic voice.
//!
//! The engine owns the cpal stream and communicates with the audio thread
//! via a lock-free ring buffer. The voice itself lives on the audio thread;
//! the main thread sends [`AudioCommand`]s, which the callback drains at
//! the top of each block.

pub mod callback;
pub mod command;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use ringbuf::{
    traits::{Producer, Split},
    HeapRb,
};

pub use command::AudioCommand;

use crate::synth::VoiceParams;
use callback::AudioCallback;

/// Ring buffer capacity (number of commands).
const RING_BUFFER_CAPACITY: usize = 1024;

/// Audio engine errors.
#[derive(Debug)]
pub enum AudioError {
    /// No audio output device found.
    NoOutputDevice,
    /// Failed to query device configuration.
    DeviceConfig(String),
    /// Failed to build the audio stream.
    StreamBuild(String),
    /// Failed to start the audio stream.
    StreamPlay(String),
    /// Ring buffer is full — audio thread is not draining fast enough.
    BufferFull,
}

impl std::fmt::Display for AudioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AudioError::NoOutputDevice => write!(f, "no audio output device found"),
            AudioError::DeviceConfig(e) => write!(f, "device config error: {e}"),
            AudioError::StreamBuild(e) => write!(f, "stream build error: {e}"),
            AudioError::StreamPlay(e) => write!(f, "stream play error: {e}"),
            AudioError::BufferFull => write!(f, "audio command ring buffer is full"),
        }
    }
}

impl std::error::Error for AudioError {}

/// The audio engine. Owns the cpal stream and ring buffer producer.
pub struct AudioEngine {
    _stream: cpal::Stream,
    producer: ringbuf::HeapProd<AudioCommand>,
    sample_rate: u32,
    channels: u16,
}

impl AudioEngine {
    /// Create and start the audio engine with the default output device.
    pub fn new() -> Result<Self, AudioError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(AudioError::NoOutputDevice)?;

        let config = device
            .default_output_config()
            .map_err(|e| AudioError::DeviceConfig(e.to_string()))?;

        let sample_rate = config.sample_rate().0;
        let channels = config.channels();

        let rb = HeapRb::<AudioCommand>::new(RING_BUFFER_CAPACITY);
        let (producer, consumer) = rb.split();

        let mut audio_callback = AudioCallback::new(consumer, channels, sample_rate);

        let stream_config = cpal::StreamConfig {
            channels,
            sample_rate: cpal::SampleRate(sample_rate),
            buffer_size: cpal::BufferSize::Default,
        };

        let err_fn = |err: cpal::StreamError| {
            eprintln!("audio stream error: {err}");
        };

        let stream = device
            .build_output_stream(
                &stream_config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    audio_callback.process(data);
                },
                err_fn,
                None,
            )
            .map_err(|e| AudioError::StreamBuild(e.to_string()))?;

        stream
            .play()
            .map_err(|e| AudioError::StreamPlay(e.to_string()))?;

        Ok(Self {
            _stream: stream,
            producer,
            sample_rate,
            channels,
        })
    }

    /// Start a note on the voice.
    pub fn note_on(&mut self, note: u8, velocity: u8) -> Result<(), AudioError> {
        self.producer
            .try_push(AudioCommand::NoteOn {
                note,
                velocity,
                delta_frames: 0,
            })
            .map_err(|_| AudioError::BufferFull)
    }

    /// Release a note.
    pub fn note_off(&mut self, note: u8) -> Result<(), AudioError> {
        self.producer
            .try_push(AudioCommand::NoteOff { note })
            .map_err(|_| AudioError::BufferFull)
    }

    /// Replace the voice parameters.
    pub fn set_params(&mut self, params: VoiceParams) -> Result<(), AudioError> {
        self.producer
            .try_push(AudioCommand::SetParams(params))
            .map_err(|_| AudioError::BufferFull)
    }

    /// Set master volume (clamped to 0.0..=1.0 on the audio thread).
    pub fn set_volume(&mut self, volume: f32) -> Result<(), AudioError> {
        self.producer
            .try_push(AudioCommand::SetVolume(volume))
            .map_err(|_| AudioError::BufferFull)
    }

    /// Get the sample rate of the audio stream.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Get the number of output channels.
    pub fn channels(&self) -> u16 {
        self.channels
    }
}
