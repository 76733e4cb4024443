//! Texture loading
//!
//! Loads every sprite sheet and background layer named in the config and
//! reports their sizes to the simulation.

use macroquad::logging::info;
use macroquad::prelude::*;
use crate::config::GameConfig;
use crate::game::{SceneDims, TextureDims};

/// Error type for texture loading
#[derive(Debug)]
pub enum AssetError {
    LoadError { path: String, source: macroquad::Error },
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::LoadError { path, source } => {
                write!(f, "Failed to load texture '{}': {}", path, source)
            }
        }
    }
}

impl std::error::Error for AssetError {}

/// All GPU textures for one run
pub struct GameTextures {
    pub player: Texture2D,
    pub obstacle: Texture2D,
    /// Same order as `GameConfig::layers`
    pub layers: Vec<Texture2D>,
}

/// Load a pixel-art texture (nearest filtering keeps edges crisp)
async fn load_pixel_texture(path: &str) -> Result<Texture2D, AssetError> {
    let texture = load_texture(path).await.map_err(|source| AssetError::LoadError {
        path: path.to_string(),
        source,
    })?;
    texture.set_filter(FilterMode::Nearest);
    info!("Loaded texture {} ({}x{})", path, texture.width(), texture.height());
    Ok(texture)
}

fn dims_of(texture: &Texture2D) -> TextureDims {
    TextureDims::new(texture.width() as u32, texture.height() as u32)
}

impl GameTextures {
    pub async fn load(config: &GameConfig) -> Result<Self, AssetError> {
        let player = load_pixel_texture(&config.player.texture).await?;
        let obstacle = load_pixel_texture(&config.obstacles.texture).await?;
        let mut layers = Vec::with_capacity(config.layers.len());
        for layer in &config.layers {
            layers.push(load_pixel_texture(&layer.texture).await?);
        }
        Ok(Self { player, obstacle, layers })
    }

    /// Sizes the simulation derives its geometry from
    pub fn dims(&self) -> SceneDims {
        SceneDims {
            player: dims_of(&self.player),
            obstacle: dims_of(&self.obstacle),
            layers: self.layers.iter().map(dims_of).collect(),
        }
    }
}
