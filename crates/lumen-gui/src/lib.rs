//! Lumen GUI - Time-based property effects for controls
//!
//! An effect drives one animatable property of a GUI control (background
//! color, fade level, position) between two fixed endpoints over time.
//! Controls opt in per property by implementing a capability trait; effects
//! are written against the capability, never against a concrete control
//! type. The owning control applies its active effects once per tick with
//! the timing snapshot it is handed.

pub mod capability;
pub mod effect;
pub mod effects;
pub mod set;
pub mod speed;

pub use capability::{ColorCapable, FadeCapable, SlideCapable};
pub use effect::{Effect, EffectBinding};
pub use effects::{ColorEffect, FadeEffect, SlideEffect};
pub use set::EffectSet;
pub use speed::EffectSpeed;
