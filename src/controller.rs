//! Controller — applies messages and carries out their effects.

use crate::backlight::Backlight;
use crate::favorites::FavoritesStore;
use crate::sample::ColorSample;
use crate::state::{Effect, LightState, Message};

/// Owns the panel state together with the store and backlight it drives.
///
/// Storage failures are logged and swallowed: the state snapshot is still
/// advanced so the live preview keeps working.
pub struct Controller<S, B> {
    state: LightState,
    store: S,
    backlight: B,
}

impl<S: FavoritesStore, B: Backlight> Controller<S, B> {
    pub fn new(state: LightState, store: S, backlight: B) -> Self {
        Self {
            state,
            store,
            backlight,
        }
    }

    /// Start from `state`, but with the backlight's current level.
    pub fn with_backlight_level(state: LightState, store: S, backlight: B) -> Self {
        let state = LightState::new(
            state.hue_position(),
            state.brightness_percent(),
            backlight.level(),
        );
        Self::new(state, store, backlight)
    }

    pub fn state(&self) -> &LightState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn backlight(&self) -> &B {
        &self.backlight
    }

    /// Saved samples, newest first.
    pub fn favorites(&self) -> Vec<ColorSample> {
        self.store.list_all()
    }

    /// Apply `message` and run its effect. Returns the new state.
    pub fn dispatch(&mut self, message: Message) -> &LightState {
        log::debug!("dispatch {:?}", message);
        let (next, effect) = self.state.apply(message);
        self.state = next;
        if let Some(effect) = effect {
            self.run(effect);
        }
        &self.state
    }

    fn run(&mut self, effect: Effect) {
        match effect {
            Effect::Save {
                hue_position,
                brightness_percent,
                screen_brightness,
            } => match self
                .store
                .save(hue_position, brightness_percent, screen_brightness)
            {
                Ok(sample) => log::info!(
                    "Saved favourite {} ({})",
                    sample.id(),
                    sample.hex_string()
                ),
                Err(e) => log::error!("Failed to save favourite: {}", e),
            },
            Effect::Delete(id) => match self.store.delete(id) {
                Ok(()) => log::info!("Deleted favourite {}", id),
                Err(e) => log::error!("Failed to delete favourite {}: {}", id, e),
            },
            Effect::SetBacklight(level) => self.backlight.set_level(level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backlight::SimulatedBacklight;
    use crate::favorites::{MemoryFavoritesStore, StorageError};
    use crate::state::Tab;

    /// Store whose writes always fail.
    struct BrokenStore;

    impl FavoritesStore for BrokenStore {
        fn save(&mut self, _: f64, _: f64, _: f64) -> Result<ColorSample, StorageError> {
            Err(StorageError::Io(std::io::Error::other("disk full")))
        }

        fn list_all(&self) -> Vec<ColorSample> {
            Vec::new()
        }

        fn delete(&mut self, id: u64) -> Result<(), StorageError> {
            Err(StorageError::NotFound(id))
        }
    }

    fn controller() -> Controller<MemoryFavoritesStore, SimulatedBacklight> {
        Controller::new(
            LightState::default(),
            MemoryFavoritesStore::new(),
            SimulatedBacklight::default(),
        )
    }

    #[test]
    fn test_save_then_delete() {
        let mut controller = controller();
        controller.dispatch(Message::HueChanged(12.0));
        controller.dispatch(Message::BrightnessChanged(80.0));
        controller.dispatch(Message::SaveRequested);

        let favorites = controller.favorites();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].hue_position(), 12.0);
        assert_eq!(favorites[0].brightness_percent(), 80.0);
        assert_eq!(
            favorites[0].hex_string(),
            crate::hue_ramp::to_hex_string(controller.state().sample_rgb())
        );

        controller.dispatch(Message::DeleteRequested(favorites[0].id()));
        assert!(controller.favorites().is_empty());
    }

    #[test]
    fn test_backlight_follows_slider() {
        let mut controller = controller();
        controller.dispatch(Message::ScreenBrightnessChanged(0.35));
        assert_eq!(controller.backlight().level(), 0.35);
        assert_eq!(controller.state().screen_brightness(), 0.35);
    }

    #[test]
    fn test_storage_failure_keeps_preview_running() {
        let mut controller = Controller::new(
            LightState::default(),
            BrokenStore,
            SimulatedBacklight::default(),
        );
        controller.dispatch(Message::SaveRequested);
        controller.dispatch(Message::DeleteRequested(3));
        let state = controller.dispatch(Message::HueChanged(50.0)).clone();
        assert_eq!(state.hue_position(), 50.0);
        assert_eq!(state.tab(), Tab::Light);
    }

    #[test]
    fn test_initial_level_from_backlight() {
        let controller = Controller::with_backlight_level(
            LightState::default(),
            MemoryFavoritesStore::new(),
            SimulatedBacklight::new(0.6),
        );
        assert_eq!(controller.state().screen_brightness(), 0.6);
    }
}
