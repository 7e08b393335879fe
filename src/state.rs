//! Light panel state and the messages that change it.
//!
//! The panel's state is an immutable snapshot. Views turn user input into
//! [`Message`]s; [`LightState::apply`] returns the next snapshot plus the side
//! effect, if any, that the controller must carry out.

use crate::color::Rgb;
use crate::hue_ramp;

/// Hue the panel opens with.
pub const DEFAULT_HUE: f64 = 97.0;
/// Brightness the panel opens with.
pub const DEFAULT_BRIGHTNESS: f64 = 70.0;

/// Which page the tab bar shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Light,
    Favorites,
}

/// User intents produced by the views.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Hue slider moved (0–100)
    HueChanged(f64),
    /// Brightness slider moved (0–100)
    BrightnessChanged(f64),
    /// Backlight slider moved (0.0–1.0)
    ScreenBrightnessChanged(f64),
    /// Bookmark the current colour
    SaveRequested,
    /// Delete a saved favourite by id
    DeleteRequested(u64),
    /// Fill the window with a colour
    ShowFullScreen(Rgb),
    /// Close the full-screen overlay
    DismissFullScreen,
    /// Switch pages
    TabSelected(Tab),
}

/// Work a transition asks the outside world to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Save {
        hue_position: f64,
        brightness_percent: f64,
        screen_brightness: f64,
    },
    Delete(u64),
    SetBacklight(f64),
}

/// Snapshot of everything the panel renders.
#[derive(Debug, Clone, PartialEq)]
pub struct LightState {
    hue_position: f64,
    brightness_percent: f64,
    screen_brightness: f64,
    tab: Tab,
    overlay: Option<Rgb>,
}

impl Default for LightState {
    fn default() -> Self {
        Self::new(DEFAULT_HUE, DEFAULT_BRIGHTNESS, 1.0)
    }
}

impl LightState {
    pub fn new(hue_position: f64, brightness_percent: f64, screen_brightness: f64) -> Self {
        Self {
            hue_position: clamp_or(hue_position, 0.0, 100.0, DEFAULT_HUE),
            brightness_percent: clamp_or(brightness_percent, 0.0, 100.0, DEFAULT_BRIGHTNESS),
            screen_brightness: clamp_or(screen_brightness, 0.0, 1.0, 1.0),
            tab: Tab::Light,
            overlay: None,
        }
    }

    pub fn hue_position(&self) -> f64 {
        self.hue_position
    }
    pub fn brightness_percent(&self) -> f64 {
        self.brightness_percent
    }
    pub fn screen_brightness(&self) -> f64 {
        self.screen_brightness
    }
    pub fn tab(&self) -> Tab {
        self.tab
    }
    /// Colour of the full-screen overlay, when it is showing.
    pub fn overlay(&self) -> Option<Rgb> {
        self.overlay
    }

    /// The colour the current sliders select.
    pub fn sample_rgb(&self) -> Rgb {
        hue_ramp::compute_rgb(self.hue_position, self.brightness_percent)
    }

    /// Apply `message`, returning the next state and any effect to run.
    pub fn apply(&self, message: Message) -> (LightState, Option<Effect>) {
        let mut next = self.clone();
        let effect = match message {
            Message::HueChanged(value) => {
                next.hue_position = clamp_or(value, 0.0, 100.0, self.hue_position);
                None
            }
            Message::BrightnessChanged(value) => {
                next.brightness_percent = clamp_or(value, 0.0, 100.0, self.brightness_percent);
                None
            }
            Message::ScreenBrightnessChanged(value) => {
                next.screen_brightness = clamp_or(value, 0.0, 1.0, self.screen_brightness);
                Some(Effect::SetBacklight(next.screen_brightness))
            }
            Message::SaveRequested => Some(Effect::Save {
                hue_position: self.hue_position,
                brightness_percent: self.brightness_percent,
                screen_brightness: self.screen_brightness,
            }),
            Message::DeleteRequested(id) => Some(Effect::Delete(id)),
            Message::ShowFullScreen(rgb) => {
                next.overlay = Some(rgb);
                None
            }
            Message::DismissFullScreen => {
                next.overlay = None;
                None
            }
            Message::TabSelected(tab) => {
                next.tab = tab;
                None
            }
        };
        (next, effect)
    }
}

fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = LightState::default();
        assert_eq!(state.hue_position(), DEFAULT_HUE);
        assert_eq!(state.brightness_percent(), DEFAULT_BRIGHTNESS);
        assert_eq!(state.tab(), Tab::Light);
        assert!(state.overlay().is_none());
    }

    #[test]
    fn test_slider_messages_clamp() {
        let state = LightState::default();
        let (state, effect) = state.apply(Message::HueChanged(140.0));
        assert_eq!(state.hue_position(), 100.0);
        assert!(effect.is_none());

        let (state, _) = state.apply(Message::BrightnessChanged(-5.0));
        assert_eq!(state.brightness_percent(), 0.0);
        assert_eq!(state.sample_rgb(), Rgb::WHITE);
    }

    #[test]
    fn test_nan_keeps_previous_value() {
        let state = LightState::new(40.0, 60.0, 0.5);
        let (next, _) = state.apply(Message::HueChanged(f64::NAN));
        assert_eq!(next.hue_position(), 40.0);
        let (next, effect) = next.apply(Message::ScreenBrightnessChanged(f64::NAN));
        assert_eq!(next.screen_brightness(), 0.5);
        assert_eq!(effect, Some(Effect::SetBacklight(0.5)));
    }

    #[test]
    fn test_apply_leaves_original_untouched() {
        let state = LightState::default();
        let (next, _) = state.apply(Message::HueChanged(10.0));
        assert_eq!(state.hue_position(), DEFAULT_HUE);
        assert_eq!(next.hue_position(), 10.0);
    }

    #[test]
    fn test_save_captures_current_values() {
        let state = LightState::new(33.0, 44.0, 0.25);
        let (next, effect) = state.apply(Message::SaveRequested);
        assert_eq!(next, state);
        assert_eq!(
            effect,
            Some(Effect::Save {
                hue_position: 33.0,
                brightness_percent: 44.0,
                screen_brightness: 0.25,
            })
        );
    }

    #[test]
    fn test_delete_and_backlight_effects() {
        let state = LightState::default();
        let (_, effect) = state.apply(Message::DeleteRequested(5));
        assert_eq!(effect, Some(Effect::Delete(5)));

        let (next, effect) = state.apply(Message::ScreenBrightnessChanged(1.7));
        assert_eq!(next.screen_brightness(), 1.0);
        assert_eq!(effect, Some(Effect::SetBacklight(1.0)));
    }

    #[test]
    fn test_full_screen_and_tabs() {
        let state = LightState::default();
        let rgb = state.sample_rgb();
        let (state, _) = state.apply(Message::ShowFullScreen(rgb));
        assert_eq!(state.overlay(), Some(rgb));
        let (state, _) = state.apply(Message::DismissFullScreen);
        assert!(state.overlay().is_none());

        let (state, _) = state.apply(Message::TabSelected(Tab::Favorites));
        assert_eq!(state.tab(), Tab::Favorites);
    }
}
