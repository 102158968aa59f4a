//! wgpu render backend for the spindash demo.
//!
//! Renders the grid floor, the green ground plane, and the character rig as
//! instanced primitives. The camera trails the body: fixed offset behind and
//! above, aimed at the body, recomputed every tick with no interpolation.
//!
//! # Invariants
//! - Renderer never mutates simulation state.
//! - The camera derives its heading from body yaw with the same x-over-z
//!   convention the kernel uses.

mod camera;
mod gpu;
mod mesh;
mod shaders;

pub use camera::FollowCamera;
pub use gpu::WgpuRenderer;
