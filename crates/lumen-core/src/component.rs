//! Per-frame update contract for GUI components.

use crate::time::TickTime;

/// A component the update host calls once per tick.
///
/// The host itself lives outside this crate; it is expected to skip
/// components whose `enabled` returns false and to visit the rest in
/// ascending `update_order`. State changes are observed by re-reading the
/// getters each tick rather than through change notifications.
pub trait Updateable {
    /// Advance the component by one tick.
    fn update(&mut self, tick: &TickTime);

    /// Whether `update` should be called this frame.
    fn enabled(&self) -> bool {
        true
    }

    /// Relative update order; lower values are updated first.
    fn update_order(&self) -> i32 {
        0
    }
}
