//! Standalone app: opens a window with the light panel.
//!
//! Usage: `floem-light [--config PATH]`

use std::path::PathBuf;

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_light::config::ConfigError;
use floem_light::{
    light_panel, AppConfig, Controller, FavoritesStore, JsonFavoritesStore, LightState,
    MemoryFavoritesStore, SimulatedBacklight,
};

/// `--config PATH` or `--config=PATH`, else the platform default.
fn config_path(args: impl IntoIterator<Item = String>) -> Option<PathBuf> {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
        if let Some(path) = arg.strip_prefix("--config=") {
            return Some(PathBuf::from(path));
        }
    }
    AppConfig::default_path()
}

/// Falls back to the defaults on failure. The error is handed back so it can
/// be logged once the logger is up.
fn load_config(path: Option<&PathBuf>) -> (AppConfig, Option<ConfigError>) {
    let Some(path) = path else {
        return (AppConfig::default(), None);
    };
    match AppConfig::load(path) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}

fn open_store(config: &AppConfig) -> Box<dyn FavoritesStore> {
    let path = config.favorites_path();
    match JsonFavoritesStore::open(&path) {
        Ok(store) => {
            log::info!("Favourites at {}", store.path().display());
            Box::new(store)
        }
        Err(e) => {
            log::error!(
                "Failed to open favourites {}: {}; favourites will not be kept",
                path.display(),
                e
            );
            Box::new(MemoryFavoritesStore::new())
        }
    }
}

fn main() {
    let path = config_path(std::env::args().skip(1));
    let (config, config_error) = load_config(path.as_ref());

    // RUST_LOG overrides the configured level.
    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .parse_default_env()
        .init();

    if let (Some(path), Some(e)) = (path.as_ref(), config_error) {
        log::warn!(
            "Failed to load config {}: {}; using defaults",
            path.display(),
            e
        );
    }

    let store = open_store(&config);
    let backlight = SimulatedBacklight::new(config.initial_screen_brightness);
    let state = LightState::new(config.initial_hue, config.initial_brightness, 1.0);
    let controller = Controller::with_backlight_level(state, store, backlight);

    floem::Application::new()
        .window(
            move |_| {
                light_panel(controller).on_event_stop(
                    floem::event::EventListener::WindowClosed,
                    |_| floem::quit_app(),
                )
            },
            Some(
                WindowConfig::default()
                    .size((config.window_width, config.window_height))
                    .title("floem-light"),
            ),
        )
        .run();
}
