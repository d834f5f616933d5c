//! Lumisynth — MIDI notes in, synth audio and light datagrams out.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use clap::Parser;

use lumisynth::audio::AudioEngine;
use lumisynth::light::{LightConfig, LightError, LightSender};
use lumisynth::midi::{note_channel, MidiConfig, MidiInput, NoteEvent};

#[derive(Parser)]
#[command(name = "lumisynth", version, about)]
struct Args {
    /// Light controller address (overrides ~/.lumisynth/lights.yaml)
    #[arg(long)]
    target: Option<String>,
    /// MIDI device name substring (overrides ~/.lumisynth/midi.yaml)
    #[arg(long)]
    midi_device: Option<String>,
    /// List available MIDI input devices and exit
    #[arg(long)]
    list_midi: bool,
    /// Lights only — skip audio output
    #[arg(long)]
    no_audio: bool,
    /// Master volume (0.0 to 1.0)
    #[arg(long, default_value_t = 0.8)]
    volume: f32,
}

fn main() {
    let args = Args::parse();

    if args.list_midi {
        let devices = MidiInput::list_devices();
        if devices.is_empty() {
            println!("no MIDI input devices found");
        }
        for name in devices {
            println!("{name}");
        }
        return;
    }

    println!("lumisynth v{}", env!("CARGO_PKG_VERSION"));

    let mut light_config = LightConfig::load().unwrap_or_default();
    if let Some(target) = args.target {
        light_config.target = target;
    }

    let mut midi_config = MidiConfig::load().unwrap_or_default();
    if args.midi_device.is_some() {
        midi_config.device_name = args.midi_device;
    }

    let mut lights = match LightSender::connect(&light_config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("failed to set up light sender: {e}");
            std::process::exit(1);
        }
    };
    println!("lights: {}", lights.target());

    // Audio is best-effort: a headless rig still gets light commands.
    let mut audio = if args.no_audio {
        None
    } else {
        match AudioEngine::new() {
            Ok(mut engine) => {
                let _ = engine.set_volume(args.volume);
                println!("audio: {} Hz, {} ch", engine.sample_rate(), engine.channels());
                Some(engine)
            }
            Err(e) => {
                eprintln!("audio disabled: {e}");
                None
            }
        }
    };

    let (tx, rx) = note_channel();
    let midi = match MidiInput::start(&midi_config, tx) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("failed to open MIDI input: {e}");
            std::process::exit(1);
        }
    };
    println!("midi: {}", midi.port_name());

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    if let Err(e) = ctrlc::set_handler(move || r.store(false, Ordering::SeqCst)) {
        eprintln!("failed to install signal handler: {e}");
    }

    while running.load(Ordering::SeqCst) {
        for event in rx.drain() {
            if let Some(engine) = audio.as_mut() {
                let result = match event {
                    NoteEvent::On { note, velocity } => engine.note_on(note, velocity),
                    NoteEvent::Off { note } => engine.note_off(note),
                };
                if let Err(e) = result {
                    eprintln!("audio: {e}");
                }
            }

            let result = match event {
                NoteEvent::On { note, velocity } => lights.note_on(note, velocity),
                NoteEvent::Off { note } => lights.note_off(note),
            };
            match result {
                Ok(()) => {}
                Err(e @ LightError::NoteOutOfRange(_)) => {
                    eprintln!("lights: {e}");
                }
                Err(e) => {
                    // Transmission failure is fatal for the rig.
                    eprintln!("lights: {e}");
                    std::process::exit(1);
                }
            }
        }
        thread::sleep(Duration::from_millis(1));
    }

    println!("shutting down");
}
