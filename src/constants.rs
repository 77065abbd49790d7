use std::time::Duration;

use crate::color::Rgb;

pub const GUI_WINDOW_WIDTH: f32 = 380.0;
pub const GUI_WINDOW_HEIGHT: f32 = 520.0;

pub const GUI_SWATCH_HEIGHT: f32 = 140.0;
pub const GUI_CODE_INPUT_WIDTH: f32 = 140.0;
pub const GUI_SLIDER_WIDTH: f32 = 220.0;

/// Color shown before any user interaction.
pub const DEFAULT_COLOR: Rgb = Rgb::new(221, 222, 238);

/// How long a toast stays on screen before it starts to slide out.
pub const TOAST_VISIBLE_TIME: Duration = Duration::from_secs(4);
/// Duration of the slide-in and slide-out animations.
pub const TOAST_SLIDE_TIME: Duration = Duration::from_millis(400);
/// How far below its resting position a toast starts and ends, in points.
pub const TOAST_SLIDE_DISTANCE: f32 = 64.0;
