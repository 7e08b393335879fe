//! Slider thumb and track painting shared by the 1D sliders.

use floem::context::PaintCx;
use floem::kurbo::{Rect, RoundedRect, Stroke};
use floem::peniko::Color;
use floem_renderer::Renderer;

use crate::constants;

const THUMB_WIDTH: f64 = 16.0;
const THUMB_INSET: f64 = 4.0;
const SHADOW: Color = Color::rgba8(0, 0, 0, 34);

/// Horizontal centre of the thumb for `fraction` (0.0–1.0) of the track.
pub(crate) fn thumb_x(fraction: f64, width: f64) -> f64 {
    let r = constants::THUMB_RADIUS;
    r + fraction.clamp(0.0, 1.0) * (width - 2.0 * r)
}

/// Inverse of [`thumb_x`]: pointer `x` to a 0.0–1.0 fraction, or `None` when
/// the track has no usable width yet.
pub(crate) fn pointer_fraction(x: f64, width: f64) -> Option<f64> {
    let r = constants::THUMB_RADIUS;
    let usable = width - 2.0 * r;
    if usable > 0.0 {
        Some(((x - r) / usable).clamp(0.0, 1.0))
    } else {
        None
    }
}

/// Paint a rounded white pill thumb centred at `x`.
pub(crate) fn paint_thumb(cx: &mut PaintCx, x: f64, height: f64) {
    let half = THUMB_WIDTH / 2.0;
    let rect = Rect::new(x - half, THUMB_INSET, x + half, height - THUMB_INSET);
    let pill = RoundedRect::from_rect(rect, half);
    let shadow = RoundedRect::from_rect(rect.inflate(1.0, 1.0), half + 1.0);
    cx.fill(&shadow, SHADOW, 0.0);
    cx.fill(&pill, Color::WHITE, 0.0);
    cx.stroke(&pill, SHADOW, &Stroke::new(1.0));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_fraction_inverts_thumb_x() {
        let width = 300.0;
        for step in 0..=10 {
            let fraction = step as f64 / 10.0;
            let x = thumb_x(fraction, width);
            let back = pointer_fraction(x, width).unwrap();
            assert!((back - fraction).abs() < 1e-12);
        }
    }

    #[test]
    fn test_pointer_fraction_clamps() {
        assert_eq!(pointer_fraction(-50.0, 200.0), Some(0.0));
        assert_eq!(pointer_fraction(500.0, 200.0), Some(1.0));
        assert_eq!(pointer_fraction(5.0, 10.0), None);
    }
}
