//! Note-to-light mapping tables.
//!
//! A note's position within a repeating 2-octave pattern picks the physical
//! light; the octave pair it sits in (`note / 24`) picks a color theme. The
//! light bank is keyboard-shaped: sharps share a light with their
//! neighbouring natural, so each octave spans 7 lights.

/// Light bank base index; physical lights are addressed starting at 32.
pub const LIGHT_BANK_OFFSET: u8 = 32;

/// Semitone-within-pattern to light position. Paired entries group a sharp
/// onto its natural.
const NOTE_LIGHTS: [u8; 24] = [
    0, 0, 1, 1, 2, 3, 3, 4, 4, 5, 5, 6, // first octave
    7, 7, 8, 8, 9, 10, 10, 11, 11, 12, 12, 13, // second octave
];

/// Physical light index for a MIDI note.
pub fn light_index(note: u8) -> u8 {
    NOTE_LIGHTS[(note % 24) as usize] + LIGHT_BANK_OFFSET
}

/// Color theme for an octave pair. One theme per `note / 24` range across
/// the MIDI note space; notes beyond the highest range have no theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTheme {
    Yellow,
    Green,
    White,
    Purple,
    Red,
}

impl ColorTheme {
    /// Look up the theme for a range (`note / 24`). Returns `None` above
    /// range 4 — the light still gets a command, but forced dark.
    pub fn from_range(range: u8) -> Option<Self> {
        match range {
            0 => Some(ColorTheme::Yellow),
            1 => Some(ColorTheme::Green),
            2 => Some(ColorTheme::White),
            3 => Some(ColorTheme::Purple),
            4 => Some(ColorTheme::Red),
            _ => None,
        }
    }

    /// Theme for a MIDI note.
    pub fn from_note(note: u8) -> Option<Self> {
        Self::from_range(note / 24)
    }

    /// The theme's hue and saturation in the integer HSV domain.
    pub fn hue_sat(self) -> (i32, i32) {
        match self {
            ColorTheme::Yellow => (40, 255),
            ColorTheme::Green => (90, 255),
            ColorTheme::White => (0, 0),
            ColorTheme::Purple => (225, 255),
            ColorTheme::Red => (0, 255),
        }
    }
}
