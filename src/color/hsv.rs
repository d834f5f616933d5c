//! Integer HSV to RGB conversion.
//!
//! All arithmetic is truncating integer division so results are
//! bit-for-bit deterministic. Hue is in degree-like units with one
//! formula per 60-unit sector; saturation and value are scaled to
//! 0..=255 rather than percentages. Inputs are not validated: callers
//! that pass channels above 255 get arithmetically defined but
//! out-of-range output.

/// Convert an integer HSV triple to RGB.
///
/// `s == 0` short-circuits to the achromatic gray ramp `(v, v, v)`.
/// Hues of 300 and above (and anything negative) fall to the final
/// sector formula; callers wanting wraparound must normalize first.
pub fn hsv_to_rgb(h: i32, s: i32, v: i32) -> (i32, i32, i32) {
    if s == 0 {
        return (v, v, v);
    }

    let f = ((h % 60) * 255) / 60;
    let p = (v * (256 - s)) / 256;
    let q = (v * (256 - (s * f) / 256)) / 256;
    let t = (v * (256 - (s * (256 - f)) / 256)) / 256;

    match h / 60 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_saturation_is_gray_ramp() {
        for v in 0..=255 {
            for h in [0, 40, 90, 225, 359, 720, -60] {
                assert_eq!(hsv_to_rgb(h, 0, v), (v, v, v));
            }
        }
    }

    #[test]
    fn pure_red_at_sector_zero() {
        assert_eq!(hsv_to_rgb(0, 255, 255), (255, 0, 0));
    }

    #[test]
    fn sector_one_boundary_matches_formula() {
        // h=60: f=0, so q = (v * 256) / 256 = v. Truncation keeps the
        // red channel saturated here, not zeroed.
        assert_eq!(hsv_to_rgb(60, 255, 255), (255, 255, 0));
    }

    #[test]
    fn sector_two_boundary_is_green() {
        assert_eq!(hsv_to_rgb(120, 255, 255), (0, 255, 0));
    }

    #[test]
    fn sector_four_boundary_is_blue() {
        assert_eq!(hsv_to_rgb(240, 255, 255), (0, 0, 255));
    }

    #[test]
    fn hue_above_300_uses_default_sector() {
        // Sector 5 and beyond share the (v, p, q) formula.
        assert_eq!(hsv_to_rgb(300, 255, 255), hsv_to_rgb(360, 255, 255));
    }

    #[test]
    fn yellow_theme_at_full_velocity() {
        // h=40, s=255, v=254 — worked through the truncating formula:
        // f=170, p=0, q=86, t=169, sector 0.
        assert_eq!(hsv_to_rgb(40, 255, 254), (254, 169, 0));
    }

    #[test]
    fn value_channel_passes_through_in_sector_zero() {
        for v in 0..=255 {
            let (r, _, _) = hsv_to_rgb(30, 200, v);
            assert_eq!(r, v);
        }
    }

    #[test]
    fn green_ramp_monotonic_in_value() {
        // Sector 0 maps green to t, which must not decrease as v grows.
        let mut prev = 0;
        for v in 0..=255 {
            let (_, g, _) = hsv_to_rgb(40, 255, v);
            assert!(g >= prev, "g regressed at v={v}: {g} < {prev}");
            prev = g;
        }
    }

    #[test]
    fn all_channels_in_range_for_valid_input() {
        for h in (0..300).step_by(5) {
            for s in (0..=255).step_by(17) {
                for v in (0..=255).step_by(17) {
                    let (r, g, b) = hsv_to_rgb(h, s, v);
                    for c in [r, g, b] {
                        assert!((0..=255).contains(&c), "h={h} s={s} v={v}: {c}");
                    }
                }
            }
        }
    }

    #[test]
    fn oversized_saturation_is_not_clamped() {
        // Lenient by design: out-of-range input produces out-of-range
        // output rather than an error.
        let (_, _, b) = hsv_to_rgb(0, 512, 255);
        assert!(b < 0);
    }
}
