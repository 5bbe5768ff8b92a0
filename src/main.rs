//! Asteroids headless frame driver
//!
//! Runs the ship simulation at its logical frame rate with autopilot input,
//! logs a summary once per simulated second and prints the last frame as JSON.

use std::path::PathBuf;

use clap::Parser;

use asteroids::Tuning;
use asteroids::driver::Autopilot;
use asteroids::renderer::frame_vertices;
use asteroids::sim::{FrameSnapshot, Player, step};

#[derive(Parser, Debug)]
#[command(name = "asteroids")]
#[command(about = "Fly the ship headlessly under a seeded autopilot and print the final frame")]
struct Args {
    /// Frames to simulate
    #[arg(default_value_t = 300)]
    frames: u64,
    /// Autopilot seed
    #[arg(default_value_t = 1)]
    seed: u64,
    /// JSON tuning file (missing fields keep their defaults)
    tuning: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path),
        None => Tuning::default(),
    };

    log::info!("Asteroids starting: {} frames, seed {}", args.frames, args.seed);
    log::debug!("Tuning: {tuning:?}");

    let bounds = tuning.bounds();
    let mut player = Player::with_tuning(bounds.width / 2.0, bounds.height / 2.0, tuning);
    let mut pilot = Autopilot::new(args.seed);
    let mut last = FrameSnapshot::capture(&player, 0);

    for frame in 0..args.frames {
        let commands = pilot.next_commands(frame);
        last = step(&mut player, &commands, bounds, frame);

        let tuning = player.tuning();
        let geometry = frame_vertices(&last, tuning.ship_size, tuning.bullet_size);
        log::trace!(
            "frame {frame}: {} ship / {} bullet vertices",
            geometry.ship.len(),
            geometry.bullets.len()
        );

        let frame_rate = u64::from(tuning.frame_rate);
        if frame % frame_rate == 0 {
            log::info!(
                "t={}s pos=({:.1}, {:.1}) speed={:.2} heading={:.2} bullets={}",
                frame / frame_rate,
                last.pos.x,
                last.pos.y,
                last.vel.length(),
                last.heading,
                last.bullets.len()
            );
        }
    }

    match serde_json::to_string_pretty(&last) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize final frame: {e}"),
    }
}
