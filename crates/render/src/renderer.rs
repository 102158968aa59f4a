use glam::Vec3;
use spindash_common::Transform;
use spindash_kernel::Simulation;
use spindash_scene::Rig;

/// Camera/view configuration for rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Field of view in degrees.
    pub fov_degrees: f32,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 5.0, -10.0),
            target: Vec3::ZERO,
            fov_degrees: 60.0,
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads the simulation and rig, then produces output. It never
/// mutates either — body truth is kernel-owned.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given simulation state, rig, and view.
    fn render(&self, sim: &Simulation, rig: &Rig, view: &RenderView) -> Self::Output;
}

/// Debug text renderer for headless runs, logging, and tests.
///
/// Produces a human-readable string: tick, body state, camera, and the
/// world-space positions of every rig part.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, sim: &Simulation, rig: &Rig, view: &RenderView) -> String {
        let body = sim.body();
        let mut out = String::new();
        out.push_str(&format!("=== {} ===\n", sim.summary()));
        out.push_str(&format!(
            "body: vel=({:.2}, {:.2}, {:.2}) yaw={:.1}\n",
            body.velocity.x, body.velocity.y, body.velocity.z, body.yaw_degrees
        ));
        out.push_str(&format!(
            "camera: eye=({:.1}, {:.1}, {:.1}) target=({:.1}, {:.1}, {:.1}) fov={:.0}\n",
            view.eye.x,
            view.eye.y,
            view.eye.z,
            view.target.x,
            view.target.y,
            view.target.z,
            view.fov_degrees
        ));

        let root = Transform {
            position: body.position,
            rotation: glam::Quat::from_rotation_y(body.yaw_degrees.to_radians()),
            ..Transform::default()
        };
        for part in rig.resolve(root) {
            let p = part.world.position;
            out.push_str(&format!(
                "  [{:>2}] {:?} pos=({:.2}, {:.2}, {:.2})\n",
                part.id.0, part.primitive, p.x, p.y, p.z
            ));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use spindash_kernel::TickInput;

    #[test]
    fn debug_renderer_fresh_sim() {
        let sim = Simulation::default();
        let rig = Rig::hedgehog();
        let output = DebugTextRenderer::new().render(&sim, &rig, &RenderView::default());

        assert!(output.contains("tick=0"));
        assert!(output.contains("grounded=true"));
        assert!(output.contains("Sphere"));
        assert!(output.contains("Cone"));
    }

    #[test]
    fn debug_renderer_tracks_body_position() {
        let mut sim = Simulation::default();
        sim.start();
        for _ in 0..60 {
            sim.step(TickInput::direction(Vec2::new(1.0, 0.0)), 1.0 / 60.0);
        }
        let rig = Rig::hedgehog();
        let output = DebugTextRenderer::new().render(&sim, &rig, &RenderView::default());
        assert!(output.contains("tick=60"));
        // Every line with a position reflects the moved root.
        assert!(sim.body().position.x > 0.0);
    }

    #[test]
    fn render_does_not_mutate_sim() {
        let sim = Simulation::default();
        let hash = sim.state_hash();
        let rig = Rig::hedgehog();
        let _ = DebugTextRenderer::new().render(&sim, &rig, &RenderView::default());
        assert_eq!(sim.state_hash(), hash);
    }

    #[test]
    fn render_view_default() {
        let view = RenderView::default();
        assert_eq!(view.fov_degrees, 60.0);
        assert_eq!(view.target, Vec3::ZERO);
    }
}
