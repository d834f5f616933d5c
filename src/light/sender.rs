//! Light sender — owns the UDP socket and the reusable command buffer.
//!
//! One datagram per note event, fire-and-forget: no acknowledgement, no
//! retry, no queueing. Errors are returned to the caller; whether a send
//! failure is fatal is the embedding application's call, not ours.

use std::fmt;
use std::io;
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};

use super::command::LightCommand;
use super::config::{LightConfig, OutOfRangePolicy};
use super::mapping::{light_index, ColorTheme};
use crate::color::hsv_to_rgb;

/// Light transmission errors.
#[derive(Debug)]
pub enum LightError {
    /// The configured target address could not be resolved.
    BadTarget(String),
    /// Socket creation or transmission failed.
    Socket(io::Error),
    /// Note above the themed ranges and the policy is `Reject`.
    NoteOutOfRange(u8),
}

impl fmt::Display for LightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightError::BadTarget(t) => write!(f, "bad light controller address: {t}"),
            LightError::Socket(e) => write!(f, "light socket error: {e}"),
            LightError::NoteOutOfRange(n) => write!(f, "note {n} outside themed light ranges"),
        }
    }
}

impl std::error::Error for LightError {}

impl From<io::Error> for LightError {
    fn from(e: io::Error) -> Self {
        LightError::Socket(e)
    }
}

/// Sends light commands for note events.
///
/// The socket is bound once and the 11-byte command buffer is reused for
/// every event. Single-threaded by design: calls mutate the buffer in
/// place, so share across threads only behind a mutex.
pub struct LightSender {
    socket: UdpSocket,
    target: SocketAddr,
    command: LightCommand,
    policy: OutOfRangePolicy,
    // Last themed hue/saturation, consulted by the HoldLast policy.
    last_color: (i32, i32),
}

impl LightSender {
    /// Bind a socket and resolve the controller address from config.
    pub fn connect(config: &LightConfig) -> Result<Self, LightError> {
        let target = config
            .target
            .to_socket_addrs()
            .map_err(|_| LightError::BadTarget(config.target.clone()))?
            .next()
            .ok_or_else(|| LightError::BadTarget(config.target.clone()))?;
        let socket = UdpSocket::bind("0.0.0.0:0")?;

        Ok(Self {
            socket,
            target,
            command: LightCommand::new(),
            policy: config.out_of_range,
            last_color: (0, 0),
        })
    }

    /// The resolved controller address.
    pub fn target(&self) -> SocketAddr {
        self.target
    }

    /// Note-on: velocity 0..=127 scales to brightness 0..=254.
    pub fn note_on(&mut self, note: u8, velocity: u8) -> Result<(), LightError> {
        self.send_note(note, (velocity & 0x7f) * 2)
    }

    /// Note-off: the light goes dark.
    pub fn note_off(&mut self, note: u8) -> Result<(), LightError> {
        self.send_note(note, 0)
    }

    /// Map a note and brightness to a command and transmit it.
    pub fn send_note(&mut self, note: u8, brightness: u8) -> Result<(), LightError> {
        let light = light_index(note);

        let (h, s, brightness) = match ColorTheme::from_note(note) {
            Some(theme) => {
                let (h, s) = theme.hue_sat();
                self.last_color = (h, s);
                (h, s, brightness)
            }
            // No theme: the light is forced dark regardless of velocity.
            None => match self.policy {
                OutOfRangePolicy::HoldLast => (self.last_color.0, self.last_color.1, 0),
                OutOfRangePolicy::Neutral => (0, 0, 0),
                OutOfRangePolicy::Reject => return Err(LightError::NoteOutOfRange(note)),
            },
        };

        let (r, g, b) = hsv_to_rgb(h, s, brightness as i32);
        self.command.set_light(light);
        self.command.set_rgb(r, g, b);
        self.socket.send_to(self.command.as_bytes(), self.target)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// Helper: loopback receiver socket plus a sender aimed at it.
    fn loopback_pair(policy: OutOfRangePolicy) -> (UdpSocket, LightSender) {
        let receiver = UdpSocket::bind("127.0.0.1:0").unwrap();
        receiver
            .set_read_timeout(Some(Duration::from_secs(2)))
            .unwrap();
        let config = LightConfig {
            target: receiver.local_addr().unwrap().to_string(),
            out_of_range: policy,
        };
        let sender = LightSender::connect(&config).unwrap();
        (receiver, sender)
    }

    fn recv(receiver: &UdpSocket) -> Vec<u8> {
        let mut buf = [0u8; 64];
        let (size, _) = receiver.recv_from(&mut buf).unwrap();
        buf[..size].to_vec()
    }

    #[test]
    fn note_on_sends_eleven_bytes() {
        let (receiver, mut sender) = loopback_pair(OutOfRangePolicy::Neutral);
        sender.note_on(0, 127).unwrap();
        let payload = recv(&receiver);
        assert_eq!(payload.len(), 11);
        assert_eq!(&payload[..7], &[0u8; 7]);
    }

    #[test]
    fn note_zero_is_yellow_at_full_velocity() {
        let (receiver, mut sender) = loopback_pair(OutOfRangePolicy::Neutral);
        sender.note_on(0, 127).unwrap();
        let payload = recv(&receiver);
        // Light 0 in the bank; color = hsv_to_rgb(40, 255, 254).
        assert_eq!(payload[7], 32);
        let (r, g, b) = hsv_to_rgb(40, 255, 254);
        assert_eq!(&payload[8..], &[r as u8, g as u8, b as u8]);
    }

    #[test]
    fn middle_c_is_achromatic() {
        let (receiver, mut sender) = loopback_pair(OutOfRangePolicy::Neutral);
        sender.note_on(60, 100).unwrap();
        let payload = recv(&receiver);
        // Range 2 is the white theme: s=0, so all channels = brightness.
        assert_eq!(&payload[8..], &[200, 200, 200]);
    }

    #[test]
    fn note_off_goes_dark() {
        let (receiver, mut sender) = loopback_pair(OutOfRangePolicy::Neutral);
        sender.note_off(60).unwrap();
        let payload = recv(&receiver);
        assert_eq!(&payload[8..], &[0, 0, 0]);
    }

    #[test]
    fn unthemed_note_neutral_sends_dark_command() {
        let (receiver, mut sender) = loopback_pair(OutOfRangePolicy::Neutral);
        sender.note_on(120, 127).unwrap();
        let payload = recv(&receiver);
        assert_eq!(payload[7], light_index(120));
        assert_eq!(&payload[8..], &[0, 0, 0]);
    }

    #[test]
    fn unthemed_note_hold_last_is_deterministic() {
        let (receiver, mut sender) = loopback_pair(OutOfRangePolicy::HoldLast);
        // Before any themed note the held color is (0, 0).
        sender.note_on(120, 127).unwrap();
        let first = recv(&receiver);
        assert_eq!(&first[8..], &[0, 0, 0]);

        // After a purple note the held hue/saturation is (225, 255), but
        // brightness is still forced to zero.
        sender.note_on(72, 100).unwrap();
        recv(&receiver);
        sender.note_on(120, 127).unwrap();
        let held = recv(&receiver);
        let (r, g, b) = hsv_to_rgb(225, 255, 0);
        assert_eq!(&held[8..], &[r as u8, g as u8, b as u8]);
    }

    #[test]
    fn unthemed_note_reject_sends_nothing() {
        let (receiver, mut sender) = loopback_pair(OutOfRangePolicy::Reject);
        receiver
            .set_read_timeout(Some(Duration::from_millis(100)))
            .unwrap();
        let err = sender.note_on(120, 127).unwrap_err();
        assert!(matches!(err, LightError::NoteOutOfRange(120)));
        let mut buf = [0u8; 16];
        assert!(receiver.recv_from(&mut buf).is_err());
    }

    #[test]
    fn one_datagram_per_event() {
        let (receiver, mut sender) = loopback_pair(OutOfRangePolicy::Neutral);
        sender.note_on(12, 64).unwrap();
        sender.note_off(12).unwrap();
        let on = recv(&receiver);
        let off = recv(&receiver);
        assert_eq!(on[7], off[7]);
        assert_ne!(&on[8..], &[0, 0, 0]);
        assert_eq!(&off[8..], &[0, 0, 0]);
    }

    #[test]
    fn bad_target_is_reported() {
        let config = LightConfig {
            target: "not an address".to_string(),
            out_of_range: OutOfRangePolicy::Neutral,
        };
        assert!(matches!(
            LightSender::connect(&config),
            Err(LightError::BadTarget(_))
        ));
    }
}
