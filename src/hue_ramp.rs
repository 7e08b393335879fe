//! Hue ramp math — the colour a given slider position produces.
//!
//! The ramp is a six-segment piecewise-linear cycle R→Y→G→C→B→M→R over
//! `hue_position` 0–100. Brightness blends toward white, never toward black:
//! 0 is pure white, 100 is the raw ramp colour.

use crate::color::Rgb;

const SEGMENTS: u32 = 6;
const SEGMENT_LENGTH: f64 = 1.0 / SEGMENTS as f64;

/// Map a hue position (0–100) and brightness percentage (0–100) to RGB.
///
/// Inputs are not clamped. A hue outside `[0, 100)` lands outside the ramp
/// table and yields pure red before the white blend, which makes 100 wrap to
/// the same colour as 0.
pub fn compute_rgb(hue_position: f64, brightness_percent: f64) -> Rgb {
    let base = ramp_color(hue_position);
    let weight = brightness_percent / 100.0;
    let blend = |channel: f64| 255.0 * (1.0 - weight) + channel * weight;
    Rgb::new(blend(base.red), blend(base.green), blend(base.blue))
}

/// The unblended ramp colour at `hue_position` (brightness 100).
pub fn ramp_color(hue_position: f64) -> Rgb {
    let position = hue_position / 100.0;
    let scaled = (position / SEGMENT_LENGTH).floor();
    if !scaled.is_finite() {
        return Rgb::RED;
    }
    let segment = scaled as i64;
    let fraction = (position - segment as f64 * SEGMENT_LENGTH) / SEGMENT_LENGTH;
    let rising = 255.0 * fraction;
    let falling = 255.0 * (1.0 - fraction);

    match segment {
        0 => Rgb::new(255.0, rising, 0.0),
        1 => Rgb::new(falling, 255.0, 0.0),
        2 => Rgb::new(0.0, 255.0, rising),
        3 => Rgb::new(0.0, falling, 255.0),
        4 => Rgb::new(rising, 0.0, 255.0),
        5 => Rgb::new(255.0, 0.0, falling),
        _ => Rgb::RED,
    }
}

/// Format as `#RRGGBB`, uppercase, truncating each channel.
pub fn to_hex_string(rgb: Rgb) -> String {
    let (r, g, b) = rgb.to_u8();
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Format as `"R G B"`, truncating each channel.
pub fn to_decimal_string(rgb: Rgb) -> String {
    let (r, g, b) = rgb.to_u8();
    format!("{} {} {}", r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: Rgb, expected: (f64, f64, f64)) {
        assert!(
            (actual.red - expected.0).abs() < EPS
                && (actual.green - expected.1).abs() < EPS
                && (actual.blue - expected.2).abs() < EPS,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_zero_brightness_is_white() {
        for step in 0..=100 {
            let rgb = compute_rgb(step as f64, 0.0);
            assert_close(rgb, (255.0, 255.0, 255.0));
        }
    }

    #[test]
    fn test_full_brightness_is_raw_ramp() {
        for step in 0..=200 {
            let hue = step as f64 * 0.5;
            let expected = ramp_color(hue);
            let rgb = compute_rgb(hue, 100.0);
            assert_close(rgb, (expected.red, expected.green, expected.blue));
        }
    }

    #[test]
    fn test_ramp_endpoints_are_red() {
        assert_close(compute_rgb(0.0, 100.0), (255.0, 0.0, 0.0));
        assert_close(compute_rgb(100.0, 100.0), (255.0, 0.0, 0.0));
    }

    #[test]
    fn test_midpoint_is_segment_three() {
        // 0.5 sits at the start of the cyan→blue segment.
        let rgb = compute_rgb(50.0, 100.0);
        assert!(rgb.red.abs() < 1e-6);
        assert!((rgb.green - 255.0).abs() < 1e-6);
        assert!((rgb.blue - 255.0).abs() < 1e-6);

        // Halfway through the same segment the green channel is half down.
        let hue = (3.5 / 6.0) * 100.0;
        let rgb = compute_rgb(hue, 100.0);
        assert!(rgb.red.abs() < 1e-6);
        assert!((rgb.green - 127.5).abs() < 1e-6);
        assert!((rgb.blue - 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_segment_primaries() {
        let at = |segment: f64| {
            let rgb = compute_rgb(segment / 6.0 * 100.0 + 1e-9, 100.0);
            (
                rgb.red.round() as u8,
                rgb.green.round() as u8,
                rgb.blue.round() as u8,
            )
        };
        assert_eq!(at(0.0), (255, 0, 0));
        assert_eq!(at(1.0), (255, 255, 0));
        assert_eq!(at(2.0), (0, 255, 0));
        assert_eq!(at(3.0), (0, 255, 255));
        assert_eq!(at(4.0), (0, 0, 255));
        assert_eq!(at(5.0), (255, 0, 255));
    }

    #[test]
    fn test_out_of_range_hue_falls_back_to_red() {
        assert_close(ramp_color(150.0), (255.0, 0.0, 0.0));
        assert_close(ramp_color(-10.0), (255.0, 0.0, 0.0));
        assert_close(ramp_color(f64::NAN), (255.0, 0.0, 0.0));
        assert_close(ramp_color(f64::INFINITY), (255.0, 0.0, 0.0));
    }

    #[test]
    fn test_brightness_blends_toward_white() {
        // Pure blue at half brightness is a light blue, not a dark one.
        let rgb = compute_rgb(4.0 / 6.0 * 100.0, 50.0);
        assert!((rgb.red - 127.5).abs() < 1e-6);
        assert!((rgb.green - 127.5).abs() < 1e-6);
        assert!((rgb.blue - 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_hex_truncates() {
        assert_eq!(to_hex_string(Rgb::new(254.9, 0.4, 255.0)), "#FE00FF");
        assert_eq!(to_hex_string(Rgb::new(10.0, 171.99, 0.0)), "#0AAB00");
    }

    #[test]
    fn test_decimal_truncates() {
        assert_eq!(to_decimal_string(Rgb::new(254.9, 0.4, 255.0)), "254 0 255");
        assert_eq!(to_decimal_string(Rgb::new(7.0, 0.0, 99.999)), "7 0 99");
    }

    #[test]
    fn test_pure() {
        for step in 0..=100 {
            let hue = step as f64 * 0.97;
            let a = compute_rgb(hue, 70.0);
            let b = compute_rgb(hue, 70.0);
            assert_eq!(a.red.to_bits(), b.red.to_bits());
            assert_eq!(a.green.to_bits(), b.green.to_bits());
            assert_eq!(a.blue.to_bits(), b.blue.to_bits());
        }
    }

    #[test]
    fn test_brightness_monotonic() {
        for step in 0..=50 {
            let hue = step as f64 * 2.0;
            let base = ramp_color(hue);
            let mut prev = compute_rgb(hue, 0.0);
            for b in 1..=100 {
                let next = compute_rgb(hue, b as f64);
                for (p, n, target) in [
                    (prev.red, next.red, base.red),
                    (prev.green, next.green, base.green),
                    (prev.blue, next.blue, base.blue),
                ] {
                    // Each channel moves from 255 toward its base, never past it.
                    assert!(n <= p + EPS);
                    assert!(n >= target - EPS);
                }
                prev = next;
            }
        }
    }

    #[test]
    fn test_valid_domain_stays_in_range() {
        for h in 0..=100 {
            for b in 0..=20 {
                let rgb = compute_rgb(h as f64, b as f64 * 5.0);
                for c in [rgb.red, rgb.green, rgb.blue] {
                    assert!((-EPS..=255.0 + EPS).contains(&c));
                }
            }
        }
    }

    #[test]
    fn test_hex_and_decimal_agree() {
        for h in 0..=100 {
            let rgb = compute_rgb(h as f64 + 0.37, 63.0);
            let hex = to_hex_string(rgb);
            let decimal = to_decimal_string(rgb);
            let from_hex: Vec<u8> = (0..3)
                .map(|i| u8::from_str_radix(&hex[1 + i * 2..3 + i * 2], 16).unwrap())
                .collect();
            let from_decimal: Vec<u8> = decimal
                .split(' ')
                .map(|part| part.parse().unwrap())
                .collect();
            assert_eq!(from_hex, from_decimal);
        }
    }
}
