//! The wire command — a fixed 11-byte datagram payload.
//!
//! The light controller expects a fixed layout: bytes 0..=6 are reserved
//! and stay zero, byte 7 is the light index, bytes 8..=10 are R, G, B.
//! The buffer is allocated once and mutated in place for every command;
//! there is no per-event allocation.

/// Total payload length in bytes.
pub const COMMAND_LEN: usize = 11;

/// Offset of the light index byte.
const LIGHT_OFFSET: usize = 7;
/// Offset of the red byte; green and blue follow.
const RGB_OFFSET: usize = 8;

/// Reusable fixed-size command buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightCommand {
    buf: [u8; COMMAND_LEN],
}

impl LightCommand {
    /// Create a zeroed command buffer.
    pub fn new() -> Self {
        Self {
            buf: [0; COMMAND_LEN],
        }
    }

    /// Set the target light index.
    pub fn set_light(&mut self, light: u8) {
        self.buf[LIGHT_OFFSET] = light;
    }

    /// Set the RGB color. Channels are truncated to the low byte, matching
    /// the lenient integer color pipeline upstream.
    pub fn set_rgb(&mut self, r: i32, g: i32, b: i32) {
        self.buf[RGB_OFFSET] = r as u8;
        self.buf[RGB_OFFSET + 1] = g as u8;
        self.buf[RGB_OFFSET + 2] = b as u8;
    }

    /// The full payload, ready to hand to the socket.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }
}

impl Default for LightCommand {
    fn default() -> Self {
        Self::new()
    }
}
