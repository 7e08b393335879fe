//! Screen backlight control.

/// Reads and sets the device backlight level (0.0–1.0).
pub trait Backlight {
    fn level(&self) -> f64;

    /// Set the level, clamped to `[0, 1]`. NaN leaves the level unchanged.
    fn set_level(&mut self, level: f64);
}

/// Backlight for platforms without a brightness API.
///
/// Remembers the requested level so the slider round-trips, but does not touch
/// the hardware.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedBacklight {
    level: f64,
}

impl SimulatedBacklight {
    pub fn new(level: f64) -> Self {
        let mut backlight = Self { level: 1.0 };
        backlight.set_level(level);
        backlight
    }
}

impl Default for SimulatedBacklight {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Backlight for SimulatedBacklight {
    fn level(&self) -> f64 {
        self.level
    }

    fn set_level(&mut self, level: f64) {
        if level.is_nan() {
            log::warn!("Ignoring NaN backlight level");
            return;
        }
        self.level = level.clamp(0.0, 1.0);
        log::debug!("Backlight level set to {:.3}", self.level);
    }
}
