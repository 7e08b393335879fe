//! Rgb type — the channel triple produced by the hue ramp.
//!
//! Channels are stored unrounded as f64 in the 0.0–255.0 range. Conversion to
//! integers always clamps first and then truncates toward zero, so the hex and
//! decimal readouts never disagree.

use floem::peniko::Color;

/// RGB channels in the 0.0–255.0 range, not yet rounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255.0, 255.0, 255.0);
    pub const RED: Rgb = Rgb::new(255.0, 0.0, 0.0);

    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Truncated 0–255 channels.
    ///
    /// Each channel is clamped to `[0, 255]` before truncation; NaN maps to 0.
    pub fn to_u8(&self) -> (u8, u8, u8) {
        (
            channel_to_u8(self.red),
            channel_to_u8(self.green),
            channel_to_u8(self.blue),
        )
    }

    /// Convert to a paintable Floem color.
    pub fn to_color(&self) -> Color {
        let (r, g, b) = self.to_u8();
        Color::rgb8(r, g, b)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

fn channel_to_u8(value: f64) -> u8 {
    // `as` saturates and truncates toward zero; clamp keeps the contract explicit.
    value.clamp(0.0, 255.0) as u8
}
