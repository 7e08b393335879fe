//! Sizing, color, and styling constants for the light panel.

use floem::peniko::Color;

/// 1D slider track height
pub const SLIDER_HEIGHT: f32 = 40.0;

/// Thumb half-width on 1D sliders
pub const THUMB_RADIUS: f64 = 8.0;

/// Border radius for slider tracks
pub const RADIUS: f32 = 16.0;

/// Corner radius of the preview panel and favourite cards
pub const PANEL_RADIUS: f32 = 32.0;

/// Readout pill and icon button corner radius
pub const PILL_RADIUS: f32 = 20.0;

/// Icon button side length
pub const BUTTON_SIZE: f32 = 52.0;

/// Gap between panel elements
pub const GAP: f32 = 16.0;

/// Padding around the whole panel
pub const PADDING: f32 = 16.0;

/// Favourite card height
pub const CARD_HEIGHT: f32 = 180.0;

/// Readout font size
pub const READOUT_FONT: f32 = 14.0;

/// Icon font size
pub const ICON_FONT: f32 = 16.0;

/// Tab label font size
pub const LABEL_FONT: f32 = 12.0;

/// Backlight slider track
pub const TRACK_GRAY: Color = Color::rgb8(242, 242, 247);

/// Inactive tab
pub const MUTED: Color = Color::rgb8(142, 142, 147);

/// Active tab
pub const ACCENT: Color = Color::rgb8(88, 86, 214);
