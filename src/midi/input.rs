//! MIDI input — connects to a device and routes note events to the channel.

use std::io;

use midir::{MidiInput as MidirInput, MidiInputConnection};

use super::config::MidiConfig;
use super::event::{NoteParser, NoteSender};

/// Active MIDI input connection.
pub struct MidiInput {
    _connection: MidiInputConnection<NoteParser>,
    port_name: String,
}

impl MidiInput {
    /// Start listening on a MIDI port.
    /// Finds a port matching the config's device_name (or the first
    /// available port). Messages are normalized and sent as NoteEvents.
    pub fn start(config: &MidiConfig, sender: NoteSender) -> io::Result<Self> {
        let midi_in = MidirInput::new("lumisynth")
            .map_err(|e| io::Error::other(format!("MIDI init: {e}")))?;

        let ports = midi_in.ports();
        if ports.is_empty() {
            return Err(io::Error::other("no MIDI input ports available"));
        }

        // Find matching port
        let (port, port_name) = if let Some(ref name_filter) = config.device_name {
            ports
                .iter()
                .find_map(|p| {
                    let name = midi_in.port_name(p).unwrap_or_default();
                    if name.contains(name_filter.as_str()) {
                        Some((p.clone(), name))
                    } else {
                        None
                    }
                })
                .ok_or_else(|| {
                    io::Error::other(format!("MIDI device matching '{name_filter}' not found"))
                })?
        } else {
            let p = ports[0].clone();
            let name = midi_in
                .port_name(&p)
                .unwrap_or_else(|_| "unknown".to_string());
            (p, name)
        };

        let parser = NoteParser::new(config.channel_filter);

        let connection = midi_in
            .connect(
                &port,
                "lumisynth-input",
                move |_timestamp, msg, parser| {
                    if let Some(event) = parser.handle(msg) {
                        let _ = sender.send(event);
                    }
                },
                parser,
            )
            .map_err(|e| io::Error::other(format!("MIDI connect: {e}")))?;

        Ok(Self {
            _connection: connection,
            port_name,
        })
    }

    /// Get the connected port name.
    pub fn port_name(&self) -> &str {
        &self.port_name
    }

    /// List all available MIDI input device names.
    pub fn list_devices() -> Vec<String> {
        let Ok(midi_in) = MidirInput::new("lumisynth-list") else {
            return Vec::new();
        };
        midi_in
            .ports()
            .iter()
            .filter_map(|p| midi_in.port_name(p).ok())
            .collect()
    }
}
