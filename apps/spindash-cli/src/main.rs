use clap::{Parser, Subcommand};
use glam::Vec2;
use spindash_kernel::{MoveConfig, Simulation, TickInput};
use spindash_render::{DebugTextRenderer, RenderView, Renderer};
use spindash_scene::Rig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "spindash-cli", about = "Headless spindash runs and checks")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and movement constants
    Info,
    /// Run a scripted simulation and print the trajectory
    Run {
        /// Number of ticks to simulate
        #[arg(short, long, default_value = "120")]
        ticks: u64,
        /// Fixed time step in seconds
        #[arg(long, default_value = "0.016666668")]
        dt: f32,
        /// Held input, rightward component
        #[arg(long, default_value = "1.0")]
        dir_x: f32,
        /// Held input, forward component
        #[arg(long, default_value = "0.0")]
        dir_y: f32,
        /// Trigger a jump on this tick
        #[arg(long)]
        jump_at: Option<u64>,
    },
    /// Run the same script twice and compare state hashes
    Verify {
        /// Number of ticks to simulate
        #[arg(short, long, default_value = "600")]
        ticks: u64,
        /// Fixed time step in seconds
        #[arg(long, default_value = "0.016666668")]
        dt: f32,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("spindash-cli v{}", env!("CARGO_PKG_VERSION"));
            let cfg = MoveConfig::default();
            println!(
                "movement: accel={} max_speed={} decel={} jump={} gravity={}",
                cfg.acceleration, cfg.max_speed, cfg.deceleration, cfg.jump_velocity, cfg.gravity
            );
            println!("rig parts: {}", Rig::hedgehog().part_count());
        }
        Commands::Run {
            ticks,
            dt,
            dir_x,
            dir_y,
            jump_at,
        } => {
            println!("Scripted run: ticks={ticks} dt={dt} dir=({dir_x}, {dir_y})");

            let rig = Rig::hedgehog();
            let renderer = DebugTextRenderer::new();
            let mut sim = Simulation::new(MoveConfig::default());
            sim.start();
            for tick in 0..ticks {
                let input = TickInput {
                    direction: Vec2::new(dir_x, dir_y),
                    jump: jump_at == Some(tick),
                };
                sim.step(input, dt);
                if (tick + 1) % 30 == 0 || tick + 1 == ticks {
                    println!("{}", sim.summary());
                }
            }
            println!("{}", renderer.render(&sim, &rig, &RenderView::default()));
        }
        Commands::Verify { ticks, dt } => {
            println!("Determinism check: ticks={ticks} dt={dt}");

            let script = |sim: &mut Simulation| {
                sim.start();
                for tick in 0..ticks {
                    // Accelerate, jump mid-run, then coast to a stop.
                    let input = TickInput {
                        direction: if tick < ticks / 2 {
                            Vec2::new(1.0, 0.5)
                        } else {
                            Vec2::ZERO
                        },
                        jump: tick == ticks / 4,
                    };
                    sim.step(input, dt);
                }
            };

            let mut a = Simulation::new(MoveConfig::default());
            let mut b = Simulation::new(MoveConfig::default());
            script(&mut a);
            script(&mut b);

            println!("Run 1: {} hash={:#x}", a.summary(), a.state_hash());
            println!("Run 2: {} hash={:#x}", b.summary(), b.state_hash());
            println!(
                "Match: {}",
                if a.state_hash() == b.state_hash() {
                    "OK"
                } else {
                    "MISMATCH"
                }
            );
        }
    }

    Ok(())
}
