use crate::body::Body;
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Movement tuning constants. Fixed for the demo; owned by the caller and
/// passed in at construction, never read from globals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoveConfig {
    /// Horizontal acceleration while input is held, units/s^2.
    pub acceleration: f32,
    /// Hard cap on horizontal speed, units/s.
    pub max_speed: f32,
    /// Horizontal deceleration with no input, units/s^2.
    pub deceleration: f32,
    /// Vertical velocity set by a grounded jump, units/s.
    pub jump_velocity: f32,
    /// Downward acceleration while airborne, units/s^2.
    pub gravity: f32,
}

impl Default for MoveConfig {
    fn default() -> Self {
        Self {
            acceleration: 20.0,
            max_speed: 10.0,
            deceleration: 10.0,
            jump_velocity: 5.0,
            gravity: 9.8,
        }
    }
}

/// Per-tick input: a planar movement direction and an edge-triggered jump.
///
/// The direction is a raw digital axis pair (x = right, y = forward); the
/// integrator normalizes it, so callers need not. Jump must be a key-down
/// edge, not a held state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TickInput {
    pub direction: Vec2,
    pub jump: bool,
}

impl TickInput {
    /// No movement, no jump.
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn direction(direction: Vec2) -> Self {
        Self {
            direction,
            jump: false,
        }
    }
}

/// The kinematic integrator: advances one body by one time step per call.
///
/// Single-writer, cooperative step model. The simulation owns the body
/// between ticks; the frame driver supplies dt. Before `start` is called
/// every step is a no-op (the start button gates movement).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulation {
    config: MoveConfig,
    body: Body,
    started: bool,
    tick: u64,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(MoveConfig::default())
    }
}

impl Simulation {
    pub fn new(config: MoveConfig) -> Self {
        Self {
            config,
            body: Body::default(),
            started: false,
            tick: 0,
        }
    }

    pub fn config(&self) -> &MoveConfig {
        &self.config
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn started(&self) -> bool {
        self.started
    }

    /// Ticks completed since `start`.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// One-shot gate: enables movement computation. Idempotent.
    pub fn start(&mut self) {
        if !self.started {
            self.started = true;
            tracing::info!("simulation started");
        }
    }

    /// Advance the body by one time step.
    ///
    /// Order within a tick: jump trigger, horizontal acceleration or
    /// deceleration, gravity (airborne only), explicit Euler position
    /// integration, ground-plane resolution, heading update. Gravity is
    /// applied before integration, so a tick that starts airborne at rest
    /// falls by `gravity * dt * dt`.
    pub fn step(&mut self, input: TickInput, dt: f32) {
        if !self.started {
            return;
        }
        self.tick += 1;

        let cfg = self.config;
        let body = &mut self.body;

        // Jump replaces vertical velocity outright; only valid while grounded.
        // The body leaves the ground via resolution once position.y rises.
        if input.jump && body.on_ground {
            body.velocity.y = cfg.jump_velocity;
            tracing::debug!(tick = self.tick, "jump");
        }

        if input.direction.length_squared() > 0.0 {
            let dir = input.direction.normalize();
            body.velocity.x += dir.x * cfg.acceleration * dt;
            body.velocity.z += dir.y * cfg.acceleration * dt;

            // Hard clamp, acceleration branch only.
            let speed = body.horizontal_speed();
            if speed > cfg.max_speed {
                let ratio = cfg.max_speed / speed;
                body.velocity.x *= ratio;
                body.velocity.z *= ratio;
            }
        } else {
            // Shrink along the existing direction, floored at zero so
            // deceleration never reverses the body.
            let horizontal = Vec2::new(body.velocity.x, body.velocity.z);
            let speed = horizontal.length();
            if speed > 0.0 {
                let decel = (cfg.deceleration * dt).min(speed);
                let dir = horizontal / speed;
                body.velocity.x -= dir.x * decel;
                body.velocity.z -= dir.y * decel;
            }
        }

        // Discrete on/off gravity: no normal-force counter term while grounded.
        if !body.on_ground {
            body.velocity.y -= cfg.gravity * dt;
        }

        body.position += body.velocity * dt;

        // Ground plane at y = 0.
        if body.position.y <= 0.0 {
            body.position.y = 0.0;
            body.velocity.y = 0.0;
            body.on_ground = true;
        } else {
            body.on_ground = false;
        }

        // x-over-z atan2 ordering is deliberate; it matches the scene's axis
        // layout and the follow camera derives its heading the same way.
        let speed = body.horizontal_speed();
        if speed > 0.0 {
            body.yaw_degrees = body.velocity.x.atan2(body.velocity.z).to_degrees();
        }
    }

    /// Deterministic FNV-1a hash of tick and body state, for determinism
    /// checks in tests and the CLI.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325; // FNV offset basis
        let mut mix = |bytes: &[u8]| {
            for &b in bytes {
                h ^= b as u64;
                h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        mix(&self.tick.to_le_bytes());
        mix(&[self.started as u8, self.body.on_ground as u8]);
        mix(&self.body.position.x.to_le_bytes());
        mix(&self.body.position.y.to_le_bytes());
        mix(&self.body.position.z.to_le_bytes());
        mix(&self.body.velocity.x.to_le_bytes());
        mix(&self.body.velocity.y.to_le_bytes());
        mix(&self.body.velocity.z.to_le_bytes());
        mix(&self.body.yaw_degrees.to_le_bytes());
        h
    }

    pub fn summary(&self) -> SimSummary {
        SimSummary {
            tick: self.tick,
            position: self.body.position,
            horizontal_speed: self.body.horizontal_speed(),
            grounded: self.body.on_ground,
        }
    }
}

/// Snapshot of simulation state for HUD and CLI output.
#[derive(Debug, Clone, Copy)]
pub struct SimSummary {
    pub tick: u64,
    pub position: Vec3,
    pub horizontal_speed: f32,
    pub grounded: bool,
}

impl std::fmt::Display for SimSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "tick={} pos=({:.2}, {:.2}, {:.2}) speed={:.2} grounded={}",
            self.tick,
            self.position.x,
            self.position.y,
            self.position.z,
            self.horizontal_speed,
            self.grounded
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn started_sim() -> Simulation {
        let mut sim = Simulation::default();
        sim.start();
        sim
    }

    #[test]
    fn steps_are_noops_before_start() {
        let mut sim = Simulation::default();
        for _ in 0..10 {
            sim.step(TickInput::direction(Vec2::new(1.0, 0.0)), DT);
        }
        assert_eq!(sim.tick(), 0);
        assert_eq!(*sim.body(), Body::default());
    }

    #[test]
    fn start_is_idempotent() {
        let mut sim = started_sim();
        sim.start();
        assert!(sim.started());
        sim.step(TickInput::idle(), DT);
        assert_eq!(sim.tick(), 1);
    }

    #[test]
    fn held_input_converges_to_max_speed() {
        let mut sim = started_sim();
        let input = TickInput::direction(Vec2::new(1.0, 0.0));
        for _ in 0..600 {
            sim.step(input, DT);
            assert!(sim.body().horizontal_speed() <= sim.config().max_speed + 1e-4);
        }
        assert!((sim.body().horizontal_speed() - sim.config().max_speed).abs() < 1e-3);
    }

    #[test]
    fn clamp_is_exact_at_max_speed() {
        let mut sim = started_sim();
        let input = TickInput::direction(Vec2::new(0.6, 0.8));
        // One second at acceleration 20 overshoots max_speed 10 by 2x
        for _ in 0..60 {
            sim.step(input, DT);
        }
        assert!((sim.body().horizontal_speed() - 10.0).abs() < 1e-3);
    }

    #[test]
    fn diagonal_input_is_normalized() {
        let mut a = started_sim();
        let mut b = started_sim();
        a.step(TickInput::direction(Vec2::new(1.0, 1.0)), DT);
        b.step(TickInput::direction(Vec2::ONE.normalize()), DT);
        assert!((a.body().horizontal_speed() - b.body().horizontal_speed()).abs() < 1e-6);
    }

    #[test]
    fn deceleration_reaches_exactly_zero_without_reversal() {
        let mut sim = started_sim();
        for _ in 0..120 {
            sim.step(TickInput::direction(Vec2::new(0.0, 1.0)), DT);
        }
        let mut prev = sim.body().horizontal_speed();
        assert!(prev > 0.0);
        let heading_z = sim.body().velocity.z.signum();
        for _ in 0..600 {
            sim.step(TickInput::idle(), DT);
            let speed = sim.body().horizontal_speed();
            assert!(speed <= prev + 1e-6, "speed must decrease monotonically");
            // Never reverses: z velocity keeps its sign until it hits zero
            if sim.body().velocity.z != 0.0 {
                assert_eq!(sim.body().velocity.z.signum(), heading_z);
            }
            prev = speed;
        }
        assert_eq!(sim.body().horizontal_speed(), 0.0);
    }

    #[test]
    fn grounded_body_at_rest_stays_at_rest() {
        let mut sim = started_sim();
        for _ in 0..100 {
            sim.step(TickInput::idle(), DT);
            assert_eq!(sim.body().position.y, 0.0);
            assert_eq!(sim.body().velocity.y, 0.0);
            assert!(sim.body().on_ground);
        }
    }

    #[test]
    fn jump_sets_vertical_velocity_exactly() {
        let mut sim = started_sim();
        sim.step(
            TickInput {
                direction: Vec2::ZERO,
                jump: true,
            },
            DT,
        );
        // Jump tick: velocity replaced with jump_velocity, gravity skipped
        // (body was grounded at the airborne check), position rises.
        assert_eq!(sim.body().velocity.y, 5.0);
        assert!(sim.body().position.y > 0.0);
        assert!(!sim.body().on_ground);
    }

    #[test]
    fn jump_is_ignored_while_airborne() {
        let mut sim = started_sim();
        sim.step(
            TickInput {
                direction: Vec2::ZERO,
                jump: true,
            },
            DT,
        );
        let vy = sim.body().velocity.y;
        sim.step(
            TickInput {
                direction: Vec2::ZERO,
                jump: true,
            },
            DT,
        );
        // Second jump must not reset vy to 5; gravity has pulled it below.
        assert!(sim.body().velocity.y < vy);
    }

    #[test]
    fn jump_replaces_rather_than_adds() {
        let mut sim = started_sim();
        for _ in 0..2 {
            // Land, then jump again; velocity.y is exactly 5 each time.
            sim.step(
                TickInput {
                    direction: Vec2::ZERO,
                    jump: true,
                },
                DT,
            );
            assert_eq!(sim.body().velocity.y, 5.0);
            while !sim.body().on_ground {
                sim.step(TickInput::idle(), DT);
            }
        }
    }

    #[test]
    fn gravity_applies_before_integration() {
        let mut sim = started_sim();
        // Place the body high enough that one dt=1 tick stays airborne.
        sim.body.position.y = 20.0;
        sim.body.on_ground = false;
        sim.step(TickInput::idle(), 1.0);
        assert!((sim.body().velocity.y + 9.8).abs() < 1e-5);
        assert!((sim.body().position.y - (20.0 - 9.8)).abs() < 1e-4);
    }

    #[test]
    fn ground_resolution_snaps_and_zeroes() {
        let mut sim = started_sim();
        sim.body.position.y = 0.05;
        sim.body.velocity.y = -10.0;
        sim.body.on_ground = false;
        sim.step(TickInput::idle(), DT);
        assert_eq!(sim.body().position.y, 0.0);
        assert_eq!(sim.body().velocity.y, 0.0);
        assert!(sim.body().on_ground);
    }

    #[test]
    fn falling_body_lands_and_stays() {
        let mut sim = started_sim();
        sim.body.position.y = 3.0;
        sim.body.on_ground = false;
        for _ in 0..600 {
            sim.step(TickInput::idle(), DT);
        }
        assert_eq!(sim.body().position.y, 0.0);
        assert!(sim.body().on_ground);
    }

    #[test]
    fn heading_follows_movement_direction() {
        let mut sim = started_sim();
        sim.step(TickInput::direction(Vec2::new(1.0, 0.0)), DT);
        // Moving along +x: atan2(x, z) = atan2(v, 0) = 90 degrees
        assert!((sim.body().yaw_degrees - 90.0).abs() < 1e-4);

        let mut sim = started_sim();
        sim.step(TickInput::direction(Vec2::new(0.0, 1.0)), DT);
        assert!(sim.body().yaw_degrees.abs() < 1e-4);
    }

    #[test]
    fn heading_retained_at_zero_speed() {
        let mut sim = started_sim();
        sim.step(TickInput::direction(Vec2::new(1.0, 0.0)), DT);
        let yaw = sim.body().yaw_degrees;
        // Decelerate to a dead stop, then idle some more.
        for _ in 0..600 {
            sim.step(TickInput::idle(), DT);
        }
        assert_eq!(sim.body().horizontal_speed(), 0.0);
        assert_eq!(sim.body().yaw_degrees, yaw);
        assert!(!sim.body().yaw_degrees.is_nan());
    }

    #[test]
    fn zero_dt_is_harmless() {
        let mut sim = started_sim();
        sim.step(TickInput::direction(Vec2::new(1.0, 1.0)), 0.0);
        assert_eq!(sim.body().position, Vec3::ZERO);
        assert!(sim.body().on_ground);
    }

    #[test]
    fn identical_runs_hash_identically() {
        let script = |sim: &mut Simulation| {
            sim.start();
            for i in 0..240u32 {
                let input = TickInput {
                    direction: if i < 120 {
                        Vec2::new(1.0, 0.5)
                    } else {
                        Vec2::ZERO
                    },
                    jump: i == 60,
                };
                sim.step(input, DT);
            }
        };
        let mut a = Simulation::default();
        let mut b = Simulation::default();
        script(&mut a);
        script(&mut b);
        assert_eq!(a.state_hash(), b.state_hash());
    }

    #[test]
    fn diverging_runs_hash_differently() {
        let mut a = started_sim();
        let mut b = started_sim();
        a.step(TickInput::direction(Vec2::new(1.0, 0.0)), DT);
        b.step(TickInput::direction(Vec2::new(0.0, 1.0)), DT);
        assert_ne!(a.state_hash(), b.state_hash());
    }

    #[test]
    fn summary_reports_state() {
        let mut sim = started_sim();
        sim.step(TickInput::direction(Vec2::new(1.0, 0.0)), DT);
        let s = sim.summary();
        assert_eq!(s.tick, 1);
        assert!(s.grounded);
        assert!(s.horizontal_speed > 0.0);
        assert!(format!("{s}").contains("tick=1"));
    }
}
