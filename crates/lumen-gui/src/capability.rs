//! Capability contracts controls implement to make a property animatable.
//!
//! Each trait exposes one mutable property plus a read-only direction
//! flag. The flag is owned and computed by the control (typically from
//! hover/visibility state); an effect reads it once per tick to decide
//! whether progress moves toward the `to` endpoint or back toward `from`.

use lumen_core::{Color, Vec2};

/// A control whose background color can be driven by a
/// [`ColorEffect`](crate::effects::ColorEffect).
pub trait ColorCapable {
    /// Current background color.
    fn background_color(&self) -> Color;

    /// Replace the background color.
    fn set_background_color(&mut self, color: Color);

    /// True while the control is blending toward the `to` endpoint.
    fn color_in(&self) -> bool;
}

/// A control whose fade level can be driven by a
/// [`FadeEffect`](crate::effects::FadeEffect).
pub trait FadeCapable {
    /// Current fade level, 0.0 (hidden) to 1.0 (opaque).
    fn fade(&self) -> f32;

    /// Replace the fade level.
    fn set_fade(&mut self, fade: f32);

    /// True while the control is fading in.
    fn fade_in(&self) -> bool;
}

/// A control whose position can be driven by a
/// [`SlideEffect`](crate::effects::SlideEffect).
pub trait SlideCapable {
    /// Current position.
    fn position(&self) -> Vec2;

    /// Replace the position.
    fn set_position(&mut self, position: Vec2);

    /// True while the control is sliding toward the `to` endpoint.
    fn slide_in(&self) -> bool;
}
