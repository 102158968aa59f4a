use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Spatial transform: position, rotation, scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Matrix form, scale applied first, then rotation, then translation.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Compose with a child transform: the child's position is expressed in
    /// this transform's local space. Scale composes per-axis.
    pub fn mul(&self, child: &Transform) -> Transform {
        Transform {
            position: self.position + self.rotation * (self.scale * child.position),
            rotation: self.rotation * child.rotation,
            scale: self.scale * child.scale,
        }
    }
}

/// Linear RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const BLUE: Color = Color([0.1, 0.3, 0.9, 1.0]);
    pub const RED: Color = Color([0.9, 0.1, 0.1, 1.0]);
    pub const WHITE: Color = Color([1.0, 1.0, 1.0, 1.0]);
    pub const BLACK: Color = Color([0.02, 0.02, 0.02, 1.0]);
    pub const GREEN: Color = Color([0.2, 0.7, 0.2, 1.0]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_default_is_identity() {
        let t = Transform::default();
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(t.rotation, Quat::IDENTITY);
        assert_eq!(t.scale, Vec3::ONE);
    }

    #[test]
    fn mul_with_identity_is_noop() {
        let t = Transform::from_position(Vec3::new(1.0, 2.0, 3.0));
        let composed = t.mul(&Transform::default());
        assert_eq!(composed.position, t.position);
    }

    #[test]
    fn mul_offsets_child_position() {
        let parent = Transform::from_position(Vec3::new(0.0, 1.0, 0.0));
        let child = Transform::from_position(Vec3::new(0.0, 0.3, -0.5));
        let composed = parent.mul(&child);
        assert_eq!(composed.position, Vec3::new(0.0, 1.3, -0.5));
    }

    #[test]
    fn mul_applies_parent_rotation_to_child_offset() {
        let parent = Transform {
            rotation: Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
            ..Transform::default()
        };
        let child = Transform::from_position(Vec3::new(0.0, 0.0, 1.0));
        let composed = parent.mul(&child);
        // 90 degrees about Y carries +Z onto +X
        assert!((composed.position.x - 1.0).abs() < 1e-6);
        assert!(composed.position.z.abs() < 1e-6);
    }

    #[test]
    fn matrix_matches_components() {
        let t = Transform {
            position: Vec3::new(1.0, 0.0, 0.0),
            rotation: Quat::IDENTITY,
            scale: Vec3::splat(2.0),
        };
        let m = t.matrix();
        let p = m.transform_point3(Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(p, Vec3::new(3.0, 0.0, 0.0));
    }
}
