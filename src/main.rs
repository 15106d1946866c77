use std::time::Instant;
use anyhow::{bail, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use raylib::prelude::*;

mod bounce;
mod config;
mod constants;
mod sprite;
mod state;
mod texture_loader;

use crate::bounce::BounceSimulator;
use crate::config::{Args, BounceConfig, Canvas};
use crate::constants::*;
use crate::state::BounceState;
use crate::texture_loader::load_textures;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    // --- Window ---
    // A 0x0 window takes the monitor size
    let mut builder = raylib::init();
    builder.title("Bouncer").vsync();
    if args.windowed {
        builder.size(args.width, args.height);
    } else {
        builder.size(0, 0).fullscreen();
    }
    let (mut rl, thread) = builder.build();
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    rl.set_target_fps(FPS);
    rl.hide_cursor();
    let window_state = rl.get_window_state().set_window_always_run(true);
    rl.set_window_state(window_state);

    let (width, height) = (rl.get_screen_width(), rl.get_screen_height());
    if width <= 0 || height <= 0 {
        bail!("No display found");
    }
    let canvas = Canvas::new(width, height)?;
    let config = BounceConfig::from_args(&args, canvas)?;
    log::info!("Canvas {}x{}, speed {} px/frame, new image every {:?}", width, height, config.max_speed, config.session_duration);

    // --- Load Sprites ---
    let textures = load_textures(&mut rl, &thread, &args.image_dir)?;
    log::info!("Loaded {} image(s) from {}", textures.len(), args.image_dir.display());

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("Random seed: {}", seed);
    let mut sim = BounceSimulator::new(&textures, config, Pcg32::seed_from_u64(seed), Instant::now())?;

    // --- Main Loop ---
    let started = Instant::now();
    while !rl.window_should_close() {
        let now = Instant::now();
        if sim.advance(now) == BounceState::Resetting {
            let velocity = sim.velocity();
            log::info!(
                "Showing image #{} heading ({:.1}, {:.1}), {}s in",
                sim.current_index(), velocity.x, velocity.y,
                now.saturating_duration_since(started).as_secs()
            );
        }

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        d.draw_texture_v(sim.current_sprite(), sim.position(), Color::WHITE);
    }

    Ok(())
}
