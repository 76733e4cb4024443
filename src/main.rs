//! Dapper Dasher: a tiny side-scrolling runner
//!
//! Jump the nebulae with Space (or A on a gamepad) until the finish line
//! reaches you. Escape quits.
//!
//! The frame loop is the only place that touches the window: it polls input
//! and the clock, hands them to the pure simulation step, then draws.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod config;
mod game;
mod input;
mod texture;

use std::path::Path;
use macroquad::logging::{error, info, warn};
use macroquad::prelude::*;
use config::{GameConfig, CONFIG_FILE};
use game::{FrameInput, Simulation};
use input::{Action, InputState};
use texture::GameTextures;

/// Config for this run; falls back to defaults if the file is broken
fn load_config() -> GameConfig {
    match GameConfig::load_or_default(Path::new(CONFIG_FILE)) {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring {}: {}", CONFIG_FILE, e);
            GameConfig::default()
        }
    }
}

fn window_conf() -> Conf {
    // Window size has to be known before the window exists; main() reports
    // any problem with the file once logging is up
    let config = GameConfig::load_or_default(Path::new(CONFIG_FILE)).unwrap_or_default();
    Conf {
        window_title: config.window.title.clone(),
        window_width: config.window.width as i32,
        window_height: config.window.height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    info!("=== Dapper Dasher v{} ===", VERSION);

    let config = load_config();
    if Path::new(CONFIG_FILE).exists() {
        info!("Using {}", CONFIG_FILE);
    }

    let textures = match GameTextures::load(&config).await {
        Ok(textures) => textures,
        Err(e) => {
            error!("{}", e);
            return;
        }
    };

    let mut sim = match Simulation::new(&config, &textures.dims()) {
        Ok(sim) => sim,
        Err(e) => {
            error!("Cannot start run: {}", e);
            return;
        }
    };
    info!(
        "Spawned {} obstacles, finish line at x={}, fps limit {}",
        sim.obstacles.len(),
        sim.finish_line.x,
        config.fps_limit.label()
    );

    let mut input = InputState::new();
    if input.has_gamepad() {
        info!("Gamepad connected");
    }

    loop {
        let frame_start = get_time();

        input.poll();
        if input.action_pressed(Action::Quit) {
            break;
        }

        let previous = sim.outcome;
        let frame = FrameInput {
            delta_time: get_frame_time(),
            jump_held: input.action_down(Action::Jump),
        };
        sim = game::step(&config, sim, frame);
        if sim.outcome != previous {
            info!("Outcome: {:?} after {} ticks", sim.outcome, sim.tick);
        }

        game::draw_frame(&sim, &textures, &config);

        game::runtime::wait_for_next_frame(frame_start, config.fps_limit);
        next_frame().await;
    }

    info!("Bye");
}
