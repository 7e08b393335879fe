//! Favourites page: saved colours as cards, newest first.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalWith};
use lucide_icons::Icon;

use crate::constants;
use crate::inputs::{icon, icon_button, readout};
use crate::panel::Dispatcher;
use crate::sample::ColorSample;
use crate::state::Message;

fn favorite_card(sample: ColorSample, send: Dispatcher) -> impl IntoView {
    let rgb = sample.rgb();
    let id = sample.id();
    let full_screen = send.clone();

    v_stack((
        empty().style(|s| s.flex_grow(1.0)),
        h_stack((
            readout(move || rgb),
            icon_button(Icon::Maximize2, move || {
                full_screen.send(Message::ShowFullScreen(rgb))
            }),
            icon_button(Icon::Trash2, move || send.send(Message::DeleteRequested(id))),
        ))
        .style(|s| s.gap(constants::GAP / 2.0).items_center()),
    ))
    .style(move |s| {
        s.width_full()
            .height(constants::CARD_HEIGHT)
            .padding(constants::PADDING)
            .border_radius(constants::PANEL_RADIUS)
            .background(rgb.to_color())
    })
}

fn empty_hint() -> impl IntoView {
    v_stack((
        h_stack((
            label(|| "Use"),
            icon(Icon::Bookmark, 24.0),
            label(|| "button"),
        ))
        .style(|s| s.gap(12.0).items_center().font_size(32.0)),
        label(|| "to save your favourite").style(|s| s.font_size(16.0).color(constants::MUTED)),
    ))
    .style(|s| s.gap(12.0).items_center().justify_center().size_full())
}

pub(crate) fn favorites_view(
    favorites: RwSignal<Vec<ColorSample>>,
    send: Dispatcher,
) -> impl IntoView {
    let is_empty = move || favorites.with(|f| f.is_empty());

    stack((
        scroll(
            dyn_stack(
                move || favorites.get(),
                |sample: &ColorSample| sample.id(),
                move |sample| favorite_card(sample, send.clone()),
            )
            .style(|s| {
                s.flex_col()
                    .width_full()
                    .gap(constants::GAP)
                    .padding(constants::PADDING)
            }),
        )
        .style(move |s| s.size_full().apply_if(is_empty(), |s| s.hide())),
        empty_hint().style(move |s| s.apply_if(!is_empty(), |s| s.hide())),
    ))
    .style(|s| s.size_full())
}
