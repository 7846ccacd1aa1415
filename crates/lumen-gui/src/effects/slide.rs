//! Position slide effect.

use std::cell::RefCell;
use std::rc::Rc;

use lumen_core::{TickTime, Vec2};
use tracing::{debug, trace};

use crate::capability::SlideCapable;
use crate::effect::{Effect, EffectBinding};
use crate::speed::EffectSpeed;

/// Slides a control between two positions, component-wise.
pub struct SlideEffect<C: SlideCapable> {
    binding: EffectBinding<C>,
    from: Vec2,
    to: Vec2,
}

impl<C: SlideCapable> SlideEffect<C> {
    /// Attach a slide to `target`, moving it from `from` to `to`. The
    /// endpoints are fixed for the effect's lifetime.
    pub fn new(
        target: &Rc<RefCell<C>>,
        speed: EffectSpeed,
        from: Vec2,
        to: Vec2,
        looped: bool,
    ) -> Self {
        debug!(?speed, looped, "attaching slide effect");
        Self {
            binding: EffectBinding::new(target, speed, looped),
            from,
            to,
        }
    }

    /// The fixed endpoints of the slide.
    pub fn endpoints(&self) -> (Vec2, Vec2) {
        (self.from, self.to)
    }

    /// Current progress in [0, 1].
    pub fn progress(&self) -> f32 {
        self.binding.progress()
    }
}

impl<C: SlideCapable> Effect for SlideEffect<C> {
    fn apply(&mut self, tick: &TickTime) {
        let Some(target) = self.binding.target() else {
            return;
        };
        let mut control = target.borrow_mut();

        if self.binding.restart_pending() {
            control.set_position(self.from);
            self.binding.rewind();
            trace!("slide effect restarted");
            return;
        }

        let Some(t) = self.binding.advance(control.slide_in(), tick) else {
            return;
        };
        control.set_position(self.from.lerp(self.to, t));
    }

    fn stop(&mut self) {
        self.binding.stop();
    }

    fn is_active(&self) -> bool {
        self.binding.is_active()
    }
}
