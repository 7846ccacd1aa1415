//! Background color interpolation effect.

use std::cell::RefCell;
use std::rc::Rc;

use lumen_core::{Color, TickTime};
use tracing::{debug, trace};

use crate::capability::ColorCapable;
use crate::effect::{Effect, EffectBinding};
use crate::speed::EffectSpeed;

/// Blends a control's background color between two endpoints.
///
/// Only the RGB channels are driven; the target's alpha channel is left
/// untouched so a fade running on the same control composes cleanly.
pub struct ColorEffect<C: ColorCapable> {
    binding: EffectBinding<C>,
    from: Color,
    to: Color,
}

impl<C: ColorCapable> ColorEffect<C> {
    /// Attach a color blend to `target`, driving its background color
    /// from `from` to `to`. The endpoints are fixed for the effect's
    /// lifetime.
    pub fn new(
        target: &Rc<RefCell<C>>,
        speed: EffectSpeed,
        from: Color,
        to: Color,
        looped: bool,
    ) -> Self {
        debug!(?speed, looped, "attaching color effect");
        Self {
            binding: EffectBinding::new(target, speed, looped),
            from,
            to,
        }
    }

    /// The fixed endpoints of the blend.
    pub fn endpoints(&self) -> (Color, Color) {
        (self.from, self.to)
    }

    /// Current progress in [0, 1].
    pub fn progress(&self) -> f32 {
        self.binding.progress()
    }
}

impl<C: ColorCapable> Effect for ColorEffect<C> {
    fn apply(&mut self, tick: &TickTime) {
        let Some(target) = self.binding.target() else {
            return;
        };
        let mut control = target.borrow_mut();
        let alpha = control.background_color().a;

        if self.binding.restart_pending() {
            control.set_background_color(Color { a: alpha, ..self.from });
            self.binding.rewind();
            trace!("color effect restarted");
            return;
        }

        let Some(t) = self.binding.advance(control.color_in(), tick) else {
            return;
        };
        control.set_background_color(Color {
            a: alpha,
            ..self.from.lerp_rgb(self.to, t)
        });
    }

    fn stop(&mut self) {
        self.binding.stop();
    }

    fn is_active(&self) -> bool {
        self.binding.is_active()
    }
}
