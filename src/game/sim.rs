//! Simulation step
//!
//! All run state lives in one `Simulation` value. `step` takes it by value
//! together with the immutable config and this frame's input, and returns
//! the next state. Nothing here touches the window, textures or the clock.

use macroquad::prelude::Vec2;
use crate::config::{ConfigError, GameConfig};
use super::collision::{self, Outcome};
use super::obstacle::{FinishLine, ObstacleSet, SpawnParams};
use super::parallax::{self, ScrollLayer};
use super::physics::{self, PlayerState};
use super::sprite::{self, AnimFrame, TextureDims};

/// Everything the core consumes from the platform each frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Seconds since the previous tick (>= 0)
    pub delta_time: f32,
    /// Jump key/button currently held
    pub jump_held: bool,
}

/// Texture sizes the geometry is derived from
#[derive(Debug, Clone, PartialEq)]
pub struct SceneDims {
    pub player: TextureDims,
    pub obstacle: TextureDims,
    /// One per configured layer, same order
    pub layers: Vec<TextureDims>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Simulation {
    pub player: PlayerState,
    pub obstacles: ObstacleSet,
    pub finish_line: FinishLine,
    pub layers: Vec<ScrollLayer>,
    pub outcome: Outcome,
    /// Ticks stepped so far
    pub tick: u64,
}

impl Simulation {
    /// Build the opening state. Fails fast on any config or texture size the
    /// step could not run with.
    pub fn new(config: &GameConfig, dims: &SceneDims) -> Result<Self, ConfigError> {
        config.validate()?;

        let window_w = config.window.width as f32;
        let window_h = config.window.height as f32;

        let (player_w, player_h) = config.player.sheet().cell_size(dims.player, "player")?;
        let player = PlayerState::new(AnimFrame::new(
            player_w,
            player_h,
            Vec2::new(window_w / 2.0 - player_w / 2.0, window_h - player_h),
            config.player.frame_duration,
        ));

        let (cell_w, cell_h) = config.obstacles.sheet().cell_size(dims.obstacle, "obstacles")?;
        let spawn = SpawnParams {
            count: config.obstacles.count,
            start_x: window_w,
            spacing: config.obstacles.spacing,
            ground_y: window_h,
            cell_w,
            cell_h,
            frame_duration: config.obstacles.frame_duration,
            velocity_x: config.obstacles.velocity,
        };

        if dims.layers.len() != config.layers.len() {
            return Err(ConfigError::ValidationError(format!(
                "layers: {} configured but {} textures provided",
                config.layers.len(),
                dims.layers.len()
            )));
        }
        let mut layers = Vec::with_capacity(dims.layers.len());
        for (i, layer) in dims.layers.iter().enumerate() {
            if layer.width == 0 {
                return Err(ConfigError::ValidationError(format!(
                    "layers[{}]: texture width must be non-zero", i
                )));
            }
            layers.push(ScrollLayer::new(layer.width as f32));
        }

        Ok(Self {
            player,
            obstacles: ObstacleSet::spawn(&spawn),
            finish_line: FinishLine::behind_last(&spawn),
            layers,
            outcome: Outcome::Playing,
            tick: 0,
        })
    }
}

/// Advance the whole run by one frame.
///
/// Order: layers, physics, obstacle/finish motion, animation timers, then
/// the outcome check against the *updated* positions.
pub fn step(config: &GameConfig, mut sim: Simulation, input: FrameInput) -> Simulation {
    let dt = input.delta_time;
    let window_h = config.window.height as f32;

    for (layer, layer_config) in sim.layers.iter_mut().zip(&config.layers) {
        *layer = parallax::advance_layer(*layer, layer_config.speed, dt);
    }

    let grounded = sim.player.is_grounded(window_h);
    sim.player = physics::physics_step(sim.player, &config.physics, grounded, input.jump_held, dt);

    sim.obstacles.advance_positions(dt);
    sim.finish_line.advance(config.obstacles.velocity, dt);

    // Runner's legs only cycle while on the ground
    if grounded {
        sim.player.sprite = sprite::advance(sim.player.sprite, dt, config.player.sheet().max_frame());
    }
    sim.obstacles.advance_animation(dt, config.obstacles.sheet().max_frame());

    let current = collision::evaluate(
        sim.player.sprite.bounds(),
        &sim.obstacles,
        &sim.finish_line,
        config.obstacles.pad,
    );
    sim.outcome = collision::resolve(sim.outcome, current, config.outcome);
    sim.tick += 1;
    sim
}
