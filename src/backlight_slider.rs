//! Backlight slider (0.0–1.0).
//!
//! A grey track with a white bar that fills from the left up to the current
//! level. Unlike the colour sliders it has no thumb; the bar end is the handle.

use floem::kurbo::{Rect, Stroke};
use floem::peniko::Color;

use floem::reactive::create_effect;
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::constants;

const BAR_INSET: f64 = 4.0;
const MIN_BAR: f64 = 12.0;

/// Width of the filled bar for `level` inside a track `width` wide.
fn bar_width(level: f64, width: f64) -> f64 {
    (level * width).max(MIN_BAR).min(width - 2.0 * BAR_INSET)
}

struct LevelUpdate(f64);

pub struct BacklightSlider {
    id: ViewId,
    held: bool,
    level: f64,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Box<dyn Fn(f64)>,
}

/// Creates the backlight slider.
///
/// - `level`: tracked read of the backlight level (0.0–1.0).
/// - `on_change`: receives the dragged level, clamped to 0.0–1.0.
pub fn backlight_slider(
    level: impl Fn() -> f64 + 'static,
    on_change: impl Fn(f64) + 'static,
) -> BacklightSlider {
    let id = ViewId::new();

    create_effect(move |_| {
        id.update_state(LevelUpdate(level()));
    });

    BacklightSlider {
        id,
        held: false,
        level: 1.0,
        size: Default::default(),
        on_change: Box::new(on_change),
    }
    .style(|s| {
        s.height(constants::SLIDER_HEIGHT)
            .flex_grow(1.0)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl BacklightSlider {
    fn update_from_pointer(&mut self, x: f64) {
        let w = self.size.width as f64;
        if w > 0.0 {
            self.level = (x / w).clamp(0.0, 1.0);
            (self.on_change)(self.level);
            self.id.request_layout();
        }
    }
}

impl View for BacklightSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<LevelUpdate>() {
            self.level = update.0;
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.update_from_pointer(e.pos.x);
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    self.update_from_pointer(e.pos.x);
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) | Event::FocusLost => {
                self.held = false;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w <= 2.0 * BAR_INSET || h <= 2.0 * BAR_INSET {
            return;
        }
        let track = Rect::new(0.0, 0.0, w, h).to_rounded_rect(constants::RADIUS as f64);
        cx.fill(&track, constants::TRACK_GRAY, 0.0);

        let bar = Rect::new(
            BAR_INSET,
            BAR_INSET,
            BAR_INSET + bar_width(self.level, w),
            h - BAR_INSET,
        )
        .to_rounded_rect(constants::RADIUS as f64 - BAR_INSET);
        cx.fill(&bar, Color::WHITE, 0.0);
        cx.stroke(&bar, Color::rgba8(0, 0, 0, 20), &Stroke::new(1.0));
    }
}
