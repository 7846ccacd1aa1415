//! Integration test crate for the Lumen GUI toolkit.
//!
//! This crate exists solely to hold cross-crate integration tests. It
//! depends on lumen-core and lumen-gui to verify they work together.

#[cfg(test)]
mod effects;
