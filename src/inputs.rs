//! Small interactive pieces: icon buttons, the copy button and the colour
//! readout pill.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};
use lucide_icons::Icon;

use crate::color::Rgb;
use crate::constants;
use crate::hue_ramp;

/// A lucide glyph rendered as a label.
pub(crate) fn icon(icon: Icon, size: f32) -> impl IntoView {
    let glyph = icon.unicode().to_string();
    label(move || glyph.clone())
        .style(move |s| s.font_size(size).font_family("lucide".to_string()))
}

/// A white rounded button showing `icon`, calling `on_press` on release.
pub(crate) fn icon_button(glyph: Icon, on_press: impl Fn() + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(icon(glyph, constants::ICON_FONT).style(move |s| {
        let c = if pressed.get() {
            Color::rgb8(80, 80, 80)
        } else {
            Color::BLACK
        };
        s.color(c)
    }))
    .style(|s| {
        s.size(constants::BUTTON_SIZE, constants::BUTTON_SIZE)
            .items_center()
            .justify_center()
            .border_radius(constants::PILL_RADIUS)
            .background(Color::WHITE)
            .cursor(floem::style::CursorStyle::Pointer)
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        on_press();
    })
}

/// A small copy button that copies the result of `get_text` to the clipboard.
#[cfg(feature = "clipboard")]
pub(crate) fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(icon(Icon::Copy, constants::READOUT_FONT).style(move |s| {
        let c = if pressed.get() {
            Color::rgb8(80, 80, 80)
        } else {
            Color::rgb8(120, 120, 120)
        };
        s.color(c)
    }))
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        copy_to_clipboard(&get_text());
    })
}

#[cfg(feature = "clipboard")]
fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(text) {
                log::warn!("Failed to copy {}: {}", text, e);
            }
        }
        Err(e) => log::warn!("Clipboard unavailable: {}", e),
    }
}

/// The `#RRGGBB • R G B` pill shown over a colour.
pub(crate) fn readout(rgb: impl Fn() -> Rgb + Copy + 'static) -> impl IntoView {
    h_stack((
        empty().style(|s| s.flex_grow(1.0)),
        label(move || hue_ramp::to_hex_string(rgb())),
        empty().style(|s| {
            s.size(4.0, 4.0)
                .border_radius(2.0)
                .margin_horiz(6.0)
                .background(Color::BLACK)
        }),
        label(move || hue_ramp::to_decimal_string(rgb())),
        #[cfg(feature = "clipboard")]
        copy_button(move || hue_ramp::to_hex_string(rgb())).style(|s| s.margin_left(6.0)),
        empty().style(|s| s.flex_grow(1.0)),
    ))
    .style(|s| {
        s.flex_grow(1.0)
            .height(constants::BUTTON_SIZE)
            .items_center()
            .font_size(constants::READOUT_FONT)
            .font_family("monospace".to_string())
            .border_radius(constants::PILL_RADIUS)
            .background(Color::WHITE)
    })
}
