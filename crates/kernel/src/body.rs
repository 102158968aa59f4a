use glam::Vec3;
use serde::{Deserialize, Serialize};

/// The single mobile body advanced by the integrator.
///
/// Created once at program start, grounded at the origin with zero velocity,
/// then mutated exactly once per tick for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// World-space position.
    pub position: Vec3,
    /// World-space velocity, persists across ticks.
    pub velocity: Vec3,
    /// True when pinned to the ground plane with zero vertical velocity.
    pub on_ground: bool,
    /// Heading about the vertical axis, in degrees. Derived from horizontal
    /// velocity when moving; retains its prior value when at rest.
    pub yaw_degrees: f32,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            on_ground: true,
            yaw_degrees: 0.0,
        }
    }
}

impl Body {
    /// Speed in the ground plane, ignoring vertical velocity.
    pub fn horizontal_speed(&self) -> f32 {
        (self.velocity.x * self.velocity.x + self.velocity.z * self.velocity.z).sqrt()
    }

    /// Unit vector the body is facing, from yaw. Uses the same x-over-z
    /// convention as the heading update, so facing and yaw always agree.
    pub fn facing(&self) -> Vec3 {
        let yaw = self.yaw_degrees.to_radians();
        Vec3::new(yaw.sin(), 0.0, yaw.cos())
    }
}
