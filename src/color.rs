//! Six-sector HSV to RGB conversion.  Hue, saturation, and value are
//! all real numbers; the output is a triple of bytes ready to drop
//! into an RGBA buffer.

/// Convert an HSV triple to 8-bit RGB.  Hue nominally lives in
/// `[0, 1)` and wraps: any whole-number shift selects the same
/// sector, so callers that derive hue with a modulo are safe.  Each
/// channel is scaled by 255 and truncated toward zero; the `as` cast
/// saturates, so a value slightly over 1.0 pins at 255 rather than
/// wrapping around.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (u8, u8, u8) {
    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (rf, gf, bf) = match (i as i64) % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    ((rf * 255.0) as u8, (gf * 255.0) as u8, (bf * 255.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_sector_spot_checks() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), (255, 0, 0));
        assert_eq!(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0), (0, 255, 0));
        assert_eq!(hsv_to_rgb(2.0 / 3.0, 1.0, 1.0), (0, 0, 255));
    }

    #[test]
    fn hue_wraps_on_whole_number_shifts() {
        for &h in &[0.0, 0.06, 0.25, 0.66, 0.99] {
            assert_eq!(hsv_to_rgb(h, 0.85, 0.6), hsv_to_rgb(h + 1.0, 0.85, 0.6));
            assert_eq!(hsv_to_rgb(h, 0.85, 0.6), hsv_to_rgb(h + 2.0, 0.85, 0.6));
        }
    }

    #[test]
    fn zero_saturation_is_achromatic() {
        for &h in &[0.0, 0.1, 0.4, 0.7, 0.9] {
            let (r, g, b) = hsv_to_rgb(h, 0.0, 0.5);
            assert_eq!(r, g);
            assert_eq!(g, b);
        }
    }

    #[test]
    fn zero_value_is_black_and_full_value_is_white() {
        assert_eq!(hsv_to_rgb(0.3, 1.0, 0.0), (0, 0, 0));
        assert_eq!(hsv_to_rgb(0.3, 0.0, 1.0), (255, 255, 255));
    }

    // Values a shade over 1.0 can reach this function when the smooth
    // count clamps to the full range; the cast pins at 255 instead of
    // wrapping to a low byte.
    #[test]
    fn overdriven_value_saturates_the_byte() {
        assert_eq!(hsv_to_rgb(0.0, 0.0, 1.1), (255, 255, 255));
    }
}
