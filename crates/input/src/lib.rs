//! Input mapping: digital movement keys to the shared tick input shape.
//!
//! # Invariants
//! - The kernel consumes pad state, never raw window events.
//! - Jump is delivered as a key-down edge, at most once per press.

pub mod pad;

pub use pad::{DigitalPad, PadKey};
