//! Tick timing for the per-frame update loop.
//!
//! The update host hands every component a [`TickTime`] snapshot once per
//! frame; effects only ever consume the snapshot, they never drive the loop.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Snapshot of the update loop's timing state: total time since start and
/// time elapsed since the previous tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickTime {
    /// Time since the loop started.
    pub total: Duration,
    /// Time elapsed since the last tick.
    pub elapsed: Duration,
}

impl TickTime {
    /// The zero snapshot, before the first tick.
    pub const ZERO: Self = Self {
        total: Duration::ZERO,
        elapsed: Duration::ZERO,
    };

    /// Create a new timing snapshot.
    #[inline]
    pub const fn new(total: Duration, elapsed: Duration) -> Self {
        Self { total, elapsed }
    }

    /// The next snapshot in a tick stream, `elapsed` after this one.
    #[inline]
    pub fn advanced(self, elapsed: Duration) -> Self {
        Self {
            total: self.total + elapsed,
            elapsed,
        }
    }

    /// Elapsed time since the last tick, in fractional seconds.
    #[inline]
    pub fn elapsed_secs_f32(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    /// Total time since the loop started, in fractional seconds.
    #[inline]
    pub fn total_secs_f32(&self) -> f32 {
        self.total.as_secs_f32()
    }
}

impl fmt::Display for TickTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.3}s (+{:.3}s)",
            self.total.as_secs_f64(),
            self.elapsed.as_secs_f64()
        )
    }
}

/// Frame rate as a rational number (e.g. 60/1 for a 60 Hz display).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameRate {
    /// Numerator (e.g. 60)
    pub numerator: u32,
    /// Denominator (e.g. 1)
    pub denominator: u32,
}

impl FrameRate {
    /// Create a new frame rate.
    #[inline]
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Convert to frames per second as f64.
    #[inline]
    pub fn to_fps_f64(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Duration of a single frame, for fixed-step tick generation.
    #[inline]
    pub fn frame_duration(self) -> Duration {
        Duration::from_secs_f64(self.denominator as f64 / self.numerator as f64)
    }

    /// Common frame rates
    pub const FPS_24: Self = Self::new(24, 1);
    pub const FPS_30: Self = Self::new(30, 1);
    pub const FPS_60: Self = Self::new(60, 1);
    pub const FPS_120: Self = Self::new(120, 1);
}

impl Default for FrameRate {
    fn default() -> Self {
        Self::FPS_60
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fps = self.to_fps_f64();
        if (fps - fps.round()).abs() < 0.001 {
            write!(f, "{} fps", fps.round() as u32)
        } else {
            write!(f, "{fps:.3} fps")
        }
    }
}
