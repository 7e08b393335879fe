//! Top-level panel: page switcher, tab bar and full-screen overlay.

use std::cell::RefCell;
use std::rc::Rc;

use floem::prelude::*;
use floem::reactive::{create_memo, RwSignal, SignalGet, SignalUpdate};
use lucide_icons::Icon;

use crate::backlight::Backlight;
use crate::constants;
use crate::controller::Controller;
use crate::favorites::FavoritesStore;
use crate::favorites_view::favorites_view;
use crate::inputs::icon;
use crate::light_view::light_view;
use crate::state::{LightState, Message, Tab};

/// Cloneable handle views use to send [`Message`]s to the controller.
#[derive(Clone)]
pub struct Dispatcher(Rc<dyn Fn(Message)>);

impl Dispatcher {
    pub fn new(f: impl Fn(Message) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn send(&self, message: Message) {
        (self.0)(message)
    }
}

fn tab_button(
    glyph: Icon,
    text: &'static str,
    tab: Tab,
    state: RwSignal<LightState>,
    send: Dispatcher,
) -> impl IntoView {
    let active = move || state.get().tab() == tab;
    v_stack((
        icon(glyph, 20.0),
        label(move || text).style(|s| s.font_size(constants::LABEL_FONT)),
    ))
    .style(move |s| {
        let c = if active() {
            constants::ACCENT
        } else {
            constants::MUTED
        };
        s.flex_grow(1.0)
            .items_center()
            .gap(2.0)
            .color(c)
            .cursor(floem::style::CursorStyle::Pointer)
    })
    .on_click_stop(move |_| send.send(Message::TabSelected(tab)))
}

fn tab_bar(state: RwSignal<LightState>, send: Dispatcher) -> impl IntoView {
    h_stack((
        tab_button(Icon::Flashlight, "Light", Tab::Light, state, send.clone()),
        tab_button(Icon::Layers, "Favorite", Tab::Favorites, state, send),
    ))
    .style(|s| {
        s.width_full()
            .padding_top(12.0)
            .padding_bottom(20.0)
            .background(Color::rgba8(250, 250, 250, 240))
    })
}

fn overlay(state: RwSignal<LightState>, send: Dispatcher) -> impl IntoView {
    empty()
        .style(move |s| {
            let s = s
                .position(floem::style::Position::Absolute)
                .inset_left(0.0)
                .inset_top(0.0)
                .size_full();
            match state.get().overlay() {
                Some(rgb) => s.background(rgb.to_color()),
                None => s.hide(),
            }
        })
        .on_click_stop(move |_| send.send(Message::DismissFullScreen))
}

/// Creates the light panel view.
///
/// The panel takes ownership of `controller`; every user action is routed
/// through it and the resulting state is published back to the views.
pub fn light_panel<S, B>(controller: Controller<S, B>) -> impl IntoView
where
    S: FavoritesStore + 'static,
    B: Backlight + 'static,
{
    let state = RwSignal::new(controller.state().clone());
    let favorites = RwSignal::new(controller.favorites());
    let controller = Rc::new(RefCell::new(controller));

    let send = Dispatcher::new(move |message| {
        let touches_store = matches!(
            message,
            Message::SaveRequested | Message::DeleteRequested(_)
        );
        let (next, saved) = {
            let mut controller = controller.borrow_mut();
            let next = controller.dispatch(message).clone();
            let saved = touches_store.then(|| controller.favorites());
            (next, saved)
        };
        if state.get_untracked() != next {
            state.set(next);
        }
        if let Some(saved) = saved {
            favorites.set(saved);
        }
    });

    let tab = create_memo(move |_| state.get().tab());
    let page_send = send.clone();
    let bar_send = send.clone();

    stack((
        v_stack((
            dyn_container(
                move || tab.get(),
                move |tab| match tab {
                    Tab::Light => light_view(state, page_send.clone()).into_any(),
                    Tab::Favorites => favorites_view(favorites, page_send.clone()).into_any(),
                },
            )
            .style(|s| s.flex_grow(1.0).min_height(0.0).width_full()),
            tab_bar(state, bar_send),
        ))
        .style(|s| s.size_full()),
        overlay(state, send),
    ))
    .style(|s| s.size_full().background(Color::WHITE))
}
