//! Scalar fade effect.

use std::cell::RefCell;
use std::rc::Rc;

use lumen_core::TickTime;
use tracing::{debug, trace};

use crate::capability::FadeCapable;
use crate::effect::{Effect, EffectBinding};
use crate::speed::EffectSpeed;

/// Drives a control's fade level between two scalar endpoints.
pub struct FadeEffect<C: FadeCapable> {
    binding: EffectBinding<C>,
    from: f32,
    to: f32,
}

impl<C: FadeCapable> FadeEffect<C> {
    /// Attach a fade to `target`, driving its fade level from `from` to
    /// `to`. The endpoints are fixed for the effect's lifetime.
    pub fn new(
        target: &Rc<RefCell<C>>,
        speed: EffectSpeed,
        from: f32,
        to: f32,
        looped: bool,
    ) -> Self {
        debug!(?speed, looped, from, to, "attaching fade effect");
        Self {
            binding: EffectBinding::new(target, speed, looped),
            from,
            to,
        }
    }

    /// The fixed endpoints of the fade.
    pub fn endpoints(&self) -> (f32, f32) {
        (self.from, self.to)
    }

    /// Current progress in [0, 1].
    pub fn progress(&self) -> f32 {
        self.binding.progress()
    }
}

impl<C: FadeCapable> Effect for FadeEffect<C> {
    fn apply(&mut self, tick: &TickTime) {
        let Some(target) = self.binding.target() else {
            return;
        };
        let mut control = target.borrow_mut();

        if self.binding.restart_pending() {
            control.set_fade(self.from);
            self.binding.rewind();
            trace!("fade effect restarted");
            return;
        }

        let Some(t) = self.binding.advance(control.fade_in(), tick) else {
            return;
        };
        control.set_fade(self.from + (self.to - self.from) * t);
    }

    fn stop(&mut self) {
        self.binding.stop();
    }

    fn is_active(&self) -> bool {
        self.binding.is_active()
    }
}
