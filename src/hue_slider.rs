//! Hue slider (0–100).
//!
//! Renders the six-segment hue ramp as a rasterized image, red on both ends,
//! sampled from the same function that colours the light.

use std::sync::Arc;

use floem::kurbo::Rect;
use floem::peniko::{self, Blob};

use floem::reactive::create_effect;
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::constants;
use crate::hue_ramp;
use crate::thumb;

/// Rasterize the hue ramp left (0) to right (100).
fn rasterize_hue_ramp(width: u32, height: u32) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    for px in 0..width {
        let t = px as f64 / (width - 1).max(1) as f64;
        let (r, g, b) = hue_ramp::ramp_color(t * 100.0).to_u8();
        for py in 0..height {
            let offset = ((py * width + px) * 4) as usize;
            buf[offset] = r;
            buf[offset + 1] = g;
            buf[offset + 2] = b;
            buf[offset + 3] = 255;
        }
    }
    buf
}

struct HueUpdate(f64);

pub struct HueSlider {
    id: ViewId,
    held: bool,
    hue: f64,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Box<dyn Fn(f64)>,
    ramp_img: Option<peniko::Image>,
    ramp_hash: Vec<u8>,
    cached_dims: (u32, u32),
}

/// Creates a horizontal hue slider.
///
/// - `hue`: tracked read of the current hue position (0–100).
/// - `on_change`: receives the dragged position, already clamped to 0–100.
pub fn hue_slider(
    hue: impl Fn() -> f64 + 'static,
    on_change: impl Fn(f64) + 'static,
) -> HueSlider {
    let id = ViewId::new();

    create_effect(move |_| {
        id.update_state(HueUpdate(hue()));
    });

    HueSlider {
        id,
        held: false,
        hue: 0.0,
        size: Default::default(),
        on_change: Box::new(on_change),
        ramp_img: None,
        ramp_hash: Vec::new(),
        cached_dims: (0, 0),
    }
    .style(|s| {
        s.height(constants::SLIDER_HEIGHT)
            .border_radius(constants::RADIUS)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl HueSlider {
    fn update_from_pointer(&mut self, x: f64) {
        if let Some(fraction) = thumb::pointer_fraction(x, self.size.width as f64) {
            self.hue = fraction * 100.0;
        }
    }

    fn ensure_ramp_image(&mut self, scale: f64) {
        let s = scale.max(1.0);
        let pw = (self.size.width as f64 * s).round() as u32;
        let ph = (self.size.height as f64 * s).round() as u32;
        if pw == 0 || ph == 0 || self.cached_dims == (pw, ph) {
            return;
        }

        let pixels = rasterize_hue_ramp(pw, ph);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, pw, ph);

        self.ramp_hash = blob.id().to_le_bytes().to_vec();
        self.ramp_img = Some(img);
        self.cached_dims = (pw, ph);
    }

    fn notify(&mut self) {
        (self.on_change)(self.hue);
        self.id.request_layout();
    }
}

impl View for HueSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<HueUpdate>() {
            self.hue = update.0;
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.update_from_pointer(e.pos.x);
                self.notify();
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    self.update_from_pointer(e.pos.x);
                    self.notify();
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
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);
        let rrect = rect.to_rounded_rect(constants::RADIUS as f64);

        cx.save();
        cx.clip(&rrect);
        let scale = cx.scale();
        self.ensure_ramp_image(scale);
        if let Some(ref img) = self.ramp_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.ramp_hash,
                },
                rect,
            );
        }
        cx.restore();

        thumb::paint_thumb(cx, thumb::thumb_x(self.hue / 100.0, w), h);
    }
}
