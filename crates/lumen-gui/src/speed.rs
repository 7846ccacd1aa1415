//! Effect playback rates.

use serde::{Deserialize, Serialize};

/// Discrete rate multipliers for effect progress.
///
/// The discriminant is the progress-per-second multiplier: at `Slow` an
/// effect sweeps its full range in one second, at `Fast` in a quarter
/// second. The set is closed; fractional rates are not supported.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum EffectSpeed {
    Slow = 1,
    #[default]
    Normal = 2,
    Fast = 4,
}

impl EffectSpeed {
    /// Multiplier applied to elapsed seconds when advancing progress.
    #[inline]
    pub const fn factor(self) -> f32 {
        self as u8 as f32
    }
}
