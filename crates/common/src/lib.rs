//! Shared types for the spindash demo: spatial transform and flat colors.
//!
//! # Invariants
//! - Transform composition is scale-rotation-translation, parent before child.
//! - Colors are linear RGBA.

mod types;

pub use types::{Color, Transform};
