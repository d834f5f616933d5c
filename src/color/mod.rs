//! Color conversion — integer-domain HSV to RGB.

pub mod hsv;

pub use hsv::hsv_to_rgb;
