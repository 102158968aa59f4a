//! Rendering Adapter: renderer-agnostic interface.
//!
//! # Invariants
//! - Renderers never mutate simulation state; they read the body, resolve
//!   the rig, and produce output.
//! - The trait is stable; the wgpu backend and the debug text backend are
//!   interchangeable behind it.

mod renderer;

pub use renderer::{DebugTextRenderer, RenderView, Renderer};
