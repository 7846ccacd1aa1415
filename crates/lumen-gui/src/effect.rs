//! Effect lifecycle shared by every concrete effect.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use lumen_core::TickTime;

use crate::speed::EffectSpeed;

/// Per-frame entry point common to all effects.
///
/// Object-safe so a control can hold heterogeneous effects boxed in an
/// [`EffectSet`](crate::set::EffectSet). `apply` is a bounded-time
/// computation over resident state; it never blocks and never faults on a
/// target that has gone away.
pub trait Effect {
    /// Advance the effect by one tick and write the driven property.
    ///
    /// A no-op when the effect is stopped or its target has been dropped.
    fn apply(&mut self, tick: &TickTime);

    /// Deactivate the effect and drop its target handle. Terminal:
    /// subsequent `apply` calls are no-ops.
    fn stop(&mut self);

    /// Whether the effect still applies itself each tick.
    fn is_active(&self) -> bool;
}

/// Lifecycle state embedded by every concrete effect: the non-owning
/// target handle, playback rate, loop flag and the progress scalar.
///
/// `progress` is owned exclusively by the effect and is clamped to
/// [0, 1] after every advance. The target is held through a [`Weak`]
/// handle; the control (or its owner) owns the effect's lifetime, and a
/// dropped control simply makes the effect inert.
pub struct EffectBinding<C> {
    target: Weak<RefCell<C>>,
    speed: EffectSpeed,
    looped: bool,
    progress: f32,
    active: bool,
    settled: bool,
}

impl<C> EffectBinding<C> {
    /// Bind to a target control. Progress starts at 0 and the effect is
    /// active, but the target is not touched until the first apply.
    pub fn new(target: &Rc<RefCell<C>>, speed: EffectSpeed, looped: bool) -> Self {
        Self {
            target: Rc::downgrade(target),
            speed,
            looped,
            progress: 0.0,
            active: true,
            settled: false,
        }
    }

    /// The target control, if the effect is active and the control is
    /// still alive.
    pub fn target(&self) -> Option<Rc<RefCell<C>>> {
        if !self.active {
            return None;
        }
        self.target.upgrade()
    }

    /// Move progress toward the endpoint selected by the direction flag
    /// and clamp to [0, 1].
    ///
    /// Returns `None` once the effect sits settled at an endpoint with an
    /// unchanged value, so callers skip recomputing and rewriting the same
    /// property every frame. The first advance always yields a value.
    pub fn advance(&mut self, toward_to: bool, tick: &TickTime) -> Option<f32> {
        let delta = tick.elapsed_secs_f32() * self.speed.factor();
        let next = if toward_to {
            (self.progress + delta).min(1.0)
        } else {
            (self.progress - delta).max(0.0)
        };

        if self.settled && next == self.progress {
            return None;
        }

        self.progress = next;
        self.settled = next == 0.0 || next == 1.0;
        Some(next)
    }

    /// True when a looping effect has reached the `to` endpoint and must
    /// write the `from` value back on this tick.
    ///
    /// The restart keys off clamped progress reaching 1, not off
    /// recomputed value equality, so it is immune to interpolation
    /// round-off.
    pub fn restart_pending(&self) -> bool {
        self.looped && self.progress >= 1.0
    }

    /// Reset progress to 0 after a loop restart wrote the start value.
    pub fn rewind(&mut self) {
        self.progress = 0.0;
        self.settled = true;
    }

    /// Current progress in [0, 1].
    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Playback rate.
    #[inline]
    pub fn speed(&self) -> EffectSpeed {
        self.speed
    }

    /// Whether the effect restarts from `from` after reaching `to`.
    #[inline]
    pub fn looped(&self) -> bool {
        self.looped
    }

    /// Whether the effect still applies itself each tick.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Deactivate and drop the target handle.
    pub fn stop(&mut self) {
        self.active = false;
        self.target = Weak::new();
    }
}
