//! Renderer
//!
//! Draws a `Simulation` with macroquad. Holds no state of its own.

use macroquad::prelude::*;
use crate::config::GameConfig;
use crate::texture::GameTextures;
use super::parallax::LAYER_SCALE;
use super::sim::Simulation;
use super::sprite::AnimFrame;

const BANNER_SIZE: f32 = 40.0;

/// Draw every layer twice, side by side, at 2x scale
fn draw_layers(sim: &Simulation, textures: &GameTextures) {
    for (layer, texture) in sim.layers.iter().zip(&textures.layers) {
        let size = vec2(texture.width(), texture.height()) * LAYER_SCALE;
        for x in layer.copy_positions() {
            draw_texture_ex(
                texture,
                x,
                0.0,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(size),
                    ..Default::default()
                },
            );
        }
    }
}

/// Draw the current sheet cell at the sprite's screen position
fn draw_sprite(texture: &Texture2D, anim: &AnimFrame) {
    draw_texture_ex(
        texture,
        anim.position.x,
        anim.position.y,
        WHITE,
        DrawTextureParams {
            source: Some(anim.rect.to_mq()),
            ..Default::default()
        },
    );
}

/// Draw one frame: backgrounds, then either the sprites or the end banner
pub fn draw_frame(sim: &Simulation, textures: &GameTextures, config: &GameConfig) {
    clear_background(WHITE);
    draw_layers(sim, textures);

    match sim.outcome.banner() {
        Some(text) => {
            let w = config.window.width as f32;
            let h = config.window.height as f32;
            draw_text(text, w / 4.0, h / 2.0, BANNER_SIZE, RED);
        }
        None => {
            for obstacle in sim.obstacles.iter() {
                draw_sprite(&textures.obstacle, &obstacle.sprite);
            }
            draw_sprite(&textures.player, &sim.player.sprite);
        }
    }
}
