//! Movement Kernel: body state and the per-tick kinematic integrator.
//!
//! # Invariants
//! - Exactly one tick runs per frame; each tick is a pure synchronous
//!   calculation over the body's current state and the frame's dt.
//! - Grounded implies position.y == 0 and velocity.y == 0.
//! - Horizontal speed never exceeds the configured maximum after acceleration.

pub mod body;
pub mod sim;

pub use body::Body;
pub use sim::{MoveConfig, SimSummary, Simulation, TickInput};
