//! Lumen Core - Foundation types for the Lumen GUI toolkit
//!
//! This crate provides the fundamental types used throughout Lumen:
//! - Tick timing (TickTime, FrameRate)
//! - Color values and channel interpolation
//! - Geometric primitives
//! - The per-frame update contract for GUI components

pub mod color;
pub mod component;
pub mod error;
pub mod geometry;
pub mod time;

pub use color::Color;
pub use component::Updateable;
pub use error::{LumenError, Result};
pub use geometry::{Rect, Vec2};
pub use time::{FrameRate, TickTime};
