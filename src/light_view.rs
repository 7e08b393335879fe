//! Light page: colour preview with save / full-screen buttons, and the hue,
//! brightness and backlight sliders underneath.

use floem::prelude::*;
use floem::reactive::{create_memo, RwSignal, SignalGet};
use lucide_icons::Icon;

use crate::backlight_slider::backlight_slider;
use crate::brightness_slider::brightness_slider;
use crate::constants;
use crate::hue_slider::hue_slider;
use crate::inputs::{icon, icon_button, readout};
use crate::panel::Dispatcher;
use crate::state::{LightState, Message};

pub(crate) fn light_view(state: RwSignal<LightState>, send: Dispatcher) -> impl IntoView {
    let hue = create_memo(move |_| state.get().hue_position());
    let brightness = create_memo(move |_| state.get().brightness_percent());
    let level = create_memo(move |_| state.get().screen_brightness());
    let rgb = create_memo(move |_| state.get().sample_rgb());

    let save = send.clone();
    let full_screen = send.clone();
    let on_hue = send.clone();
    let on_brightness = send.clone();
    let on_level = send;

    v_stack((
        // Preview panel
        v_stack((
            h_stack((
                empty().style(|s| s.flex_grow(1.0)),
                icon_button(Icon::Bookmark, move || save.send(Message::SaveRequested)),
            )),
            empty().style(|s| s.flex_grow(1.0)),
            h_stack((
                readout(move || rgb.get()),
                icon_button(Icon::Maximize2, move || {
                    full_screen.send(Message::ShowFullScreen(rgb.get_untracked()))
                }),
            ))
            .style(|s| s.gap(constants::GAP).items_center()),
        ))
        .style(move |s| {
            s.flex_grow(1.0)
                .width_full()
                .padding(constants::PADDING)
                .border_radius(constants::PANEL_RADIUS)
                .background(rgb.get().to_color())
        }),
        hue_slider(
            move || hue.get(),
            move |value| on_hue.send(Message::HueChanged(value)),
        )
        .style(|s| s.width_full()),
        brightness_slider(
            move || hue.get(),
            move || brightness.get(),
            move |value| on_brightness.send(Message::BrightnessChanged(value)),
        )
        .style(|s| s.width_full()),
        h_stack((
            icon(Icon::SunDim, constants::ICON_FONT),
            backlight_slider(
                move || level.get(),
                move |value| on_level.send(Message::ScreenBrightnessChanged(value)),
            ),
            icon(Icon::Sun, constants::ICON_FONT),
        ))
        .style(|s| s.width_full().gap(8.0).items_center()),
    ))
    .style(|s| {
        s.size_full()
            .gap(constants::GAP)
            .padding_horiz(constants::PADDING)
            .padding_top(constants::PADDING)
            .padding_bottom(20.0)
    })
}
