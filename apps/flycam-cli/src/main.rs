use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use flycam_camera::{CameraController, Viewport};
use flycam_common::{FlycamConfig, FrameTiming};
use flycam_input::{InputEvent, Key};
use flycam_render::{DebugTextRenderer, RenderFrame, Renderer};
use flycam_scene::Scene;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "flycam-cli", about = "Headless fly-camera tooling")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate versions
    Info,
    /// Print the effective configuration as JSON
    Config,
    /// Drive the camera with scripted input and print the final frame
    Simulate(SimulateArgs),
}

#[derive(Debug, Clone, clap::Args)]
struct SimulateArgs {
    /// Number of frames to run
    #[arg(short, long, default_value = "60")]
    frames: u32,

    /// Seconds per frame
    #[arg(long, default_value = "0.016666668")]
    dt: f32,

    /// Keys held for the whole run, e.g. `w,a`
    #[arg(long, value_delimiter = ',')]
    hold: Vec<HeldKey>,

    /// Cursor travel per frame in pixels, `DX,DY` (positive DY is down)
    #[arg(long, value_name = "DX,DY", default_value = "0,0", allow_hyphen_values = true)]
    look: LookStep,

    /// Viewport width (defaults to the configured window width)
    #[arg(long)]
    width: Option<u32>,

    /// Viewport height (defaults to the configured window height)
    #[arg(long)]
    height: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum HeldKey {
    W,
    A,
    S,
    D,
}

/// Per-frame cursor travel parsed from `DX,DY`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct LookStep {
    dx: f64,
    dy: f64,
}

impl FromStr for LookStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (dx, dy) = s
            .split_once(',')
            .ok_or_else(|| format!("expected DX,DY, got `{s}`"))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<f64>()
                .map_err(|e| format!("invalid look component `{v}`: {e}"))
        };
        Ok(Self {
            dx: parse(dx)?,
            dy: parse(dy)?,
        })
    }
}

impl From<HeldKey> for Key {
    fn from(k: HeldKey) -> Self {
        match k {
            HeldKey::W => Key::W,
            HeldKey::A => Key::A,
            HeldKey::S => Key::S,
            HeldKey::D => Key::D,
        }
    }
}

/// Run a scripted session. The cursor starts at the origin; its first sample
/// only sets the baseline, so rotation begins on the second frame.
fn simulate(config: &FlycamConfig, args: &SimulateArgs) -> (CameraController, RenderFrame) {
    let mut controller = CameraController::new(&config.camera);
    let scene = Scene::from_settings(&config.scene);
    let viewport = Viewport::new(
        args.width.unwrap_or(config.window.width),
        args.height.unwrap_or(config.window.height),
    );

    for key in &args.hold {
        controller.push(InputEvent::press((*key).into()));
    }

    let look = args.look != LookStep::default();
    let mut elapsed = 0.0_f32;
    for i in 0..args.frames {
        if look {
            let n = f64::from(i);
            controller.push(InputEvent::cursor(n * args.look.dx, n * args.look.dy));
        }
        elapsed += args.dt;
        let update = controller.update(FrameTiming::new(args.dt, elapsed));
        tracing::debug!(
            frame = i,
            yaw = controller.camera().yaw(),
            pitch = controller.camera().pitch(),
            events = update.events,
            "simulated frame"
        );
    }

    let transforms = controller.transforms(viewport);
    let frame = RenderFrame::new(
        transforms.view,
        transforms.projection,
        scene.world_matrices(elapsed),
    );
    (controller, frame)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config =
        FlycamConfig::load_or_default(cli.config.as_deref()).context("failed to load config")?;

    match cli.command {
        Commands::Info => {
            println!("flycam-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", flycam_common::crate_info());
            println!("input: {}", flycam_input::crate_info());
            println!("camera: {}", flycam_camera::crate_info());
            println!("scene: {}", flycam_scene::crate_info());
            println!("render: {}", flycam_render::crate_info());
        }
        Commands::Config => {
            println!("{}", config.to_json_pretty()?);
        }
        Commands::Simulate(args) => {
            println!(
                "Simulating {} frames at dt={}s, holding {:?}",
                args.frames, args.dt, args.hold
            );
            let (controller, frame) = simulate(&config, &args);
            let cam = controller.camera();
            println!(
                "Final pose: pos=({:.3}, {:.3}, {:.3}) yaw={:.2} pitch={:.2}",
                cam.position.x,
                cam.position.y,
                cam.position.z,
                cam.yaw(),
                cam.pitch()
            );
            print!("{}", DebugTextRenderer::new().render(&frame));
        }
    }

    Ok(())
}
