use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use glam::Vec2;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use world_camera::action::{ActionEvent, ActionRunner, Easing, Tween};
use world_camera::audit;
use world_camera::{Bounds, Camera, CameraConfig};

/// Headless driver for the world camera
#[derive(Debug, Parser)]
#[command(name = "world-camera", version)]
struct Cli {
    /// Configuration profile to load (falls back to CAMERA_PROFILE, then "release")
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Viewport size as WxH, overriding the configured one
    #[arg(long, global = true, value_parser = parse_size)]
    viewport: Option<Vec2>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check the camera invariants for a world and print a report
    Audit {
        /// World size as WxH
        #[arg(long, value_parser = parse_size)]
        world: Vec2,
    },
    /// Run a fit-to-rect transition and log the camera state every tick
    Simulate {
        /// World size as WxH
        #[arg(long, value_parser = parse_size)]
        world: Vec2,
        /// Target visible rect as X,Y,W,H
        #[arg(long, value_parser = parse_rect)]
        to_rect: Bounds,
        /// Transition length in seconds
        #[arg(long, default_value_t = 1.0)]
        duration: f32,
        #[arg(long, default_value_t = 60)]
        fps: u32,
        /// Easing name, e.g. ease_in_out; defaults to the configured one
        #[arg(long, value_parser = parse_easing)]
        easing: Option<Easing>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut config = load_config(cli.profile.as_deref());
    if let Some(viewport) = cli.viewport {
        config.viewport.width = viewport.x;
        config.viewport.height = viewport.y;
    }
    info!(profile = %config.profile, ?config.viewport, "Configuration loaded");

    match cli.command {
        Command::Audit { world } => {
            let camera = Camera::from_config(&world, &config).context("failed to create camera")?;
            let report = audit::run_all_checks(&camera);
            audit::print_report(&report);
            std::process::exit(report.exit_code());
        }
        Command::Simulate {
            world,
            to_rect,
            duration,
            fps,
            easing,
        } => simulate(&config, world, to_rect, duration, fps, easing),
    }
}

fn load_config(profile: Option<&str>) -> CameraConfig {
    let loaded = match profile {
        Some(profile) => CameraConfig::load(profile),
        None => CameraConfig::load_from_env(),
    };
    loaded.unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using built-in configuration");
        CameraConfig::builtin()
    })
}

fn simulate(
    config: &CameraConfig,
    world: Vec2,
    to_rect: Bounds,
    duration: f32,
    fps: u32,
    easing: Option<Easing>,
) -> Result<()> {
    if fps == 0 {
        bail!("fps must be positive");
    }

    let mut camera = Camera::from_config(&world, config).context("failed to create camera")?;
    let mut runner = ActionRunner::new();
    let mut tween = Tween::move_to_rect(to_rect, duration);
    if let Some(easing) = easing {
        tween = tween.with_easing(easing);
    }
    let id = runner.run(tween);

    let dt = 1.0 / fps as f32;
    let max_ticks = (duration.max(0.0) * fps as f32).ceil() as u64 + 2;

    for tick in 1..=max_ticks {
        let events = runner.tick(&mut camera, dt);
        let state = camera.state();
        info!(tick, zoom = state.zoom, x = state.position.x, y = state.position.y, "Camera state");

        if events.iter().any(|e| matches!(e, ActionEvent::Finished { id: done, .. } if *done == id)) {
            let visible = camera.visible_world_rect();
            println!(
                "finished after {tick} ticks: zoom {:.4}, visible [{:.2}, {:.2}] - [{:.2}, {:.2}]",
                state.zoom, visible.min.x, visible.min.y, visible.max.x, visible.max.y
            );
            return Ok(());
        }
    }

    bail!("transition did not finish within {max_ticks} ticks")
}

fn parse_size(s: &str) -> Result<Vec2, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got '{s}'"))?;
    let w: f32 = w.trim().parse().map_err(|e| format!("bad width '{w}': {e}"))?;
    let h: f32 = h.trim().parse().map_err(|e| format!("bad height '{h}': {e}"))?;
    Ok(Vec2::new(w, h))
}

fn parse_rect(s: &str) -> Result<Bounds, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f32>().map_err(|e| format!("bad number '{p}': {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    match parts.as_slice() {
        [x, y, w, h] => Ok(Bounds::from_origin_size(Vec2::new(*x, *y), Vec2::new(*w, *h))),
        _ => Err(format!("expected X,Y,W,H, got '{s}'")),
    }
}

fn parse_easing(s: &str) -> Result<Easing, String> {
    s.parse().map_err(|e: world_camera::CameraError| e.to_string())
}
