//! # floem-light
//!
//! A colour-light panel for [Floem](https://github.com/lapce/floem): turn the
//! window into a light source of any hue and whiteness, and keep favourites.
//!
//! The colour itself comes from [`hue_ramp::compute_rgb`], a six-segment
//! hue ramp blended toward white by a brightness percentage. Everything else
//! is the panel around it: sliders, a favourites store, a backlight control
//! and a small message-driven state machine.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem_light::{light_panel, Controller, LightState, MemoryFavoritesStore, SimulatedBacklight};
//!
//! let controller = Controller::new(
//!     LightState::default(),
//!     MemoryFavoritesStore::new(),
//!     SimulatedBacklight::default(),
//! );
//! // Use `light_panel(controller)` in your Floem view tree.
//! ```

mod color;
pub mod hue_ramp;

pub mod backlight;
mod backlight_slider;
mod brightness_slider;
pub mod config;
mod constants;
pub mod controller;
pub mod favorites;
mod favorites_view;
mod hue_slider;
mod inputs;
mod light_view;
mod panel;
pub mod sample;
pub mod state;
mod thumb;

pub use backlight::{Backlight, SimulatedBacklight};
pub use color::Rgb;
pub use config::AppConfig;
pub use controller::Controller;
pub use favorites::{FavoritesStore, JsonFavoritesStore, MemoryFavoritesStore, StorageError};
pub use panel::Dispatcher;
pub use sample::ColorSample;
pub use state::{LightState, Message, Tab};

use std::sync::Once;

use floem::prelude::*;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the top-level light panel view.
///
/// The panel owns `controller`. Slider drags, saves, deletes and full-screen
/// toggles all go through [`Controller::dispatch`].
pub fn light_panel<S, B>(controller: Controller<S, B>) -> impl IntoView
where
    S: FavoritesStore + 'static,
    B: Backlight + 'static,
{
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    panel::light_panel(controller)
}
