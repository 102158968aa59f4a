use glam::{Mat4, Vec3};
use spindash_kernel::Body;
use spindash_render::RenderView;

/// Trailing third-person camera: fixed offset behind and above the body,
/// always aimed at the body. Recomputed every tick, never interpolated.
/// Camera state is presentation-only and lives outside the kernel boundary.
pub struct FollowCamera {
    pub eye: Vec3,
    pub target: Vec3,
    /// Distance behind the body along its facing direction.
    pub distance: f32,
    /// Height above the body.
    pub height: f32,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 5.0, -10.0),
            target: Vec3::ZERO,
            distance: 10.0,
            height: 5.0,
            fov: 60.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl FollowCamera {
    /// Reposition behind the body and aim at it.
    pub fn follow(&mut self, body: &Body) {
        self.target = body.position;
        self.eye = body.position - body.facing() * self.distance + Vec3::new(0.0, self.height, 0.0);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// The renderer-agnostic view of this camera.
    pub fn render_view(&self) -> RenderView {
        RenderView {
            eye: self.eye,
            target: self.target,
            fov_degrees: self.fov.to_degrees(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trails_behind_default_facing() {
        let mut cam = FollowCamera::default();
        let body = Body::default();
        cam.follow(&body);
        // Default yaw faces +z, so the camera sits 10 behind on -z, 5 up.
        assert!((cam.eye.z + 10.0).abs() < 1e-5);
        assert!((cam.eye.y - 5.0).abs() < 1e-5);
        assert_eq!(cam.target, body.position);
    }

    #[test]
    fn follows_yawed_body() {
        let mut cam = FollowCamera::default();
        let body = Body {
            position: Vec3::new(3.0, 0.0, 7.0),
            yaw_degrees: 90.0,
            ..Body::default()
        };
        cam.follow(&body);
        // Facing +x, so the camera trails on -x.
        assert!((cam.eye.x - (3.0 - 10.0)).abs() < 1e-4);
        assert!((cam.eye.z - 7.0).abs() < 1e-4);
        assert_eq!(cam.target, body.position);
    }

    #[test]
    fn matrices_are_finite() {
        let mut cam = FollowCamera::default();
        cam.follow(&Body::default());
        let vp = cam.view_projection();
        assert!(!vp.col(0).x.is_nan());
    }

    #[test]
    fn render_view_mirrors_camera() {
        let cam = FollowCamera::default();
        let view = cam.render_view();
        assert_eq!(view.eye, cam.eye);
        assert!((view.fov_degrees - 60.0).abs() < 1e-4);
    }
}
