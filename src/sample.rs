//! ColorSample — an immutable record of a chosen light colour.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::hue_ramp;

/// A hue, brightness and backlight level captured at a point in time.
///
/// Fields are private; a sample never changes once created. The colour is
/// derived on demand from `hue_position` and `brightness_percent` only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSample {
    id: u64,
    hue_position: f64,
    brightness_percent: f64,
    screen_brightness: f64,
    captured_at: SystemTime,
}

impl ColorSample {
    /// Create a sample stamped with the current time.
    pub fn new(
        id: u64,
        hue_position: f64,
        brightness_percent: f64,
        screen_brightness: f64,
    ) -> Self {
        Self::captured(
            id,
            hue_position,
            brightness_percent,
            screen_brightness,
            SystemTime::now(),
        )
    }

    /// Create a sample with an explicit capture time.
    pub fn captured(
        id: u64,
        hue_position: f64,
        brightness_percent: f64,
        screen_brightness: f64,
        captured_at: SystemTime,
    ) -> Self {
        Self {
            id,
            hue_position,
            brightness_percent,
            screen_brightness,
            captured_at,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
    /// Hue position (0–100).
    pub fn hue_position(&self) -> f64 {
        self.hue_position
    }
    /// Brightness percentage (0–100).
    pub fn brightness_percent(&self) -> f64 {
        self.brightness_percent
    }
    /// Backlight level (0.0–1.0) at capture time.
    pub fn screen_brightness(&self) -> f64 {
        self.screen_brightness
    }
    pub fn captured_at(&self) -> SystemTime {
        self.captured_at
    }

    pub fn rgb(&self) -> Rgb {
        hue_ramp::compute_rgb(self.hue_position, self.brightness_percent)
    }

    pub fn hex_string(&self) -> String {
        hue_ramp::to_hex_string(self.rgb())
    }

    pub fn decimal_string(&self) -> String {
        hue_ramp::to_decimal_string(self.rgb())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_strings_ignore_screen_brightness_and_time() {
        let a = ColorSample::captured(1, 97.0, 70.0, 0.2, SystemTime::UNIX_EPOCH);
        let b = ColorSample::captured(
            2,
            97.0,
            70.0,
            1.0,
            SystemTime::UNIX_EPOCH + Duration::from_secs(3600),
        );
        assert_eq!(a.hex_string(), b.hex_string());
        assert_eq!(a.decimal_string(), b.decimal_string());
    }

    #[test]
    fn test_default_light_colour() {
        // The app's starting position: hue 97, brightness 70.
        let sample = ColorSample::new(1, 97.0, 70.0, 1.0);
        assert_eq!(sample.hex_string(), "#FF4C6C");
        assert_eq!(sample.decimal_string(), "255 76 108");
    }

    #[test]
    fn test_json_roundtrip_keeps_fields() {
        let sample = ColorSample::captured(
            7,
            12.5,
            40.0,
            0.75,
            SystemTime::UNIX_EPOCH + Duration::from_millis(1_700_000_000_123),
        );
        let json = serde_json::to_string(&sample).expect("serialize");
        let loaded: ColorSample = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(loaded, sample);
    }
}
