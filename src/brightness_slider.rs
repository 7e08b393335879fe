//! Brightness slider (0–100).
//!
//! Renders a horizontal gradient from white (left, brightness 0) to the
//! current hue at full strength (right, brightness 100). Each column is the
//! exact colour the light would show at that brightness.

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

/// Rasterize a horizontal gradient: white on the left → `hue` at full
/// brightness on the right.
fn rasterize_brightness_gradient(width: u32, height: u32, hue: f64) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    for px in 0..width {
        let t = px as f64 / (width - 1).max(1) as f64; // 0 at left, 1 at right
        let (r, g, b) = hue_ramp::compute_rgb(hue, t * 100.0).to_u8();
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

enum BrightnessUpdate {
    Value(f64),
    Hue(f64),
}

pub struct BrightnessSlider {
    id: ViewId,
    held: bool,
    brightness: f64,
    hue: f64,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Box<dyn Fn(f64)>,
    /// Cached gradient image.
    grad_img: Option<peniko::Image>,
    grad_hash: Vec<u8>,
    cached_color: (u8, u8, u8),
    cached_dims: (u32, u32),
}

/// Creates a horizontal brightness slider.
///
/// - `hue`: tracked read of the hue position, used for the gradient's end colour.
/// - `brightness`: tracked read of the brightness, 0 (white, left) to 100 (right).
/// - `on_change`: receives the dragged brightness, clamped to 0–100.
pub fn brightness_slider(
    hue: impl Fn() -> f64 + 'static,
    brightness: impl Fn() -> f64 + 'static,
    on_change: impl Fn(f64) + 'static,
) -> BrightnessSlider {
    let id = ViewId::new();

    create_effect(move |_| {
        id.update_state(BrightnessUpdate::Value(brightness()));
    });

    create_effect(move |_| {
        id.update_state(BrightnessUpdate::Hue(hue()));
    });

    BrightnessSlider {
        id,
        held: false,
        brightness: 100.0,
        hue: 0.0,
        size: Default::default(),
        on_change: Box::new(on_change),
        grad_img: None,
        grad_hash: Vec::new(),
        cached_color: (0, 0, 0),
        cached_dims: (0, 0),
    }
    .style(|s| {
        s.height(constants::SLIDER_HEIGHT)
            .border_radius(constants::RADIUS)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl BrightnessSlider {
    fn update_from_pointer(&mut self, x: f64) {
        if let Some(fraction) = thumb::pointer_fraction(x, self.size.width as f64) {
            self.brightness = fraction * 100.0;
        }
    }

    fn ensure_gradient_image(&mut self, scale: f64) {
        let s = scale.max(1.0);
        let pw = (self.size.width as f64 * s).round() as u32;
        let ph = (self.size.height as f64 * s).round() as u32;
        if pw == 0 || ph == 0 {
            return;
        }

        // Keyed on the end colour so sub-pixel hue moves reuse the raster.
        let color_key = hue_ramp::ramp_color(self.hue).to_u8();
        let dims = (pw, ph);
        if self.cached_dims == dims && self.cached_color == color_key && self.grad_img.is_some() {
            return;
        }

        let pixels = rasterize_brightness_gradient(pw, ph, self.hue);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, pw, ph);

        self.grad_hash = blob.id().to_le_bytes().to_vec();
        self.grad_img = Some(img);
        self.cached_color = color_key;
        self.cached_dims = dims;
    }

    fn notify(&mut self) {
        (self.on_change)(self.brightness);
        self.id.request_layout();
    }
}

impl View for BrightnessSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<BrightnessUpdate>() {
            match *update {
                BrightnessUpdate::Value(val) => self.brightness = val,
                BrightnessUpdate::Hue(hue) => self.hue = hue,
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(
        &mut self,
        cx: &mut EventCx,
        event: &Event,
    ) -> EventPropagation {
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

        // Clip to rounded rect for rounded ends
        cx.save();
        cx.clip(&rrect);

        let scale = cx.scale();
        self.ensure_gradient_image(scale);
        if let Some(ref img) = self.grad_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.grad_hash,
                },
                rect,
            );
        }

        cx.restore();

        thumb::paint_thumb(cx, thumb::thumb_x(self.brightness / 100.0, w), h);
    }
}
