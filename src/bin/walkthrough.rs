// walkthrough - Headless run of the museum simulation
//
// Walks from the spawn point straight through the front door, crosses the
// room to the back wall, then turns around and walks back out. Logs door
// transitions (RUST_LOG=gallery_engine=debug) and the pose along the way.
//
// Usage: cargo run --bin walkthrough -- [config.json] [--dt S] [--frames N]

use std::env;
use std::f32::consts::PI;
use std::fs;

use anyhow::{Context, Result, bail};
use gallery_engine::scene::SceneConfig;
use gallery_engine::sim::MuseumSim;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("gallery_engine=debug".parse()?))
        .init();

    let args: Vec<String> = env::args().collect();

    // Parse arguments
    let mut config_path = None;
    let mut dt = 1.0f32 / 60.0;
    let mut frames = 900usize;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--dt" => { dt = parse_arg(&args, i)?; i += 2; }
            "--frames" => { frames = parse_arg(&args, i)?; i += 2; }
            flag if flag.starts_with("--") => bail!("unknown flag {flag}"),
            path => { config_path = Some(path.to_string()); i += 1; }
        }
    }

    let config = match &config_path {
        Some(path) => {
            let json = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
            SceneConfig::from_json(&json).with_context(|| format!("loading {path}"))?
        }
        None => SceneConfig::default(),
    };

    info!(dt, frames, config = config_path.as_deref().unwrap_or("<defaults>"), "starting walkthrough");

    let mut sim = MuseumSim::new(config);
    sim.key_event("KeyW", true);

    let turn_at = frames / 2;
    let report_every = ((0.5 / dt) as usize).max(1);

    for frame in 0..frames {
        if frame == turn_at {
            sim.camera_mut().yaw += PI;
            info!(frame, "turning around");
        }

        sim.tick(dt);

        if frame % report_every == 0 {
            let cam = sim.camera();
            info!(
                frame,
                x = cam.position.x,
                z = cam.position.z,
                door_open = sim.door().is_open(),
                "pose"
            );
        }
    }

    let cam = sim.camera();
    let (left, right) = sim.door().leaf_angles();
    info!(
        x = cam.position.x,
        y = cam.position.y,
        z = cam.position.z,
        door_open = sim.door().is_open(),
        left_leaf = left,
        right_leaf = right,
        "walkthrough finished"
    );

    Ok(())
}

fn parse_arg<T: std::str::FromStr>(args: &[String], i: usize) -> Result<T> {
    let flag = &args[i];
    let raw = args.get(i + 1).with_context(|| format!("{flag} needs a value"))?;
    raw.parse().map_err(|_| anyhow::anyhow!("bad value for {flag}: {raw}"))
}
