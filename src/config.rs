//! Game configuration
//!
//! All tuning constants live in one immutable `GameConfig` that is built once
//! at startup and passed by reference into the simulation step. Defaults match
//! the classic Dapper Dasher numbers; a `dasher.ron` file in the working
//! directory can override any subset of them.
//!
//! Uses RON (Rusty Object Notation) so the file stays hand-editable.

use std::fs;
use std::path::Path;
use serde::{Serialize, Deserialize};
use crate::game::{FpsLimit, OutcomePolicy, SheetLayout};

/// File looked up next to the executable's working directory
pub const CONFIG_FILE: &str = "dasher.ron";

/// Error type for config loading and validation
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

fn invalid(msg: String) -> ConfigError {
    ConfigError::ValidationError(msg)
}

/// Reject NaN/Inf before it can poison the simulation
fn check_finite(value: f32, context: &str) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(invalid(format!("{}: not a finite number ({})", context, value)));
    }
    Ok(())
}

/// A zero frame duration would advance a frame on every tick forever
fn check_frame_duration(value: f32, context: &str) -> Result<(), ConfigError> {
    check_finite(value, context)?;
    if value <= 0.0 {
        return Err(invalid(format!("{}: frame_duration must be > 0 (got {})", context, value)));
    }
    Ok(())
}

fn check_sheet(sheet: SheetLayout, context: &str) -> Result<(), ConfigError> {
    if sheet.columns == 0 || sheet.rows == 0 {
        return Err(invalid(format!(
            "{}: sprite sheet needs at least one column and row (got {}x{})",
            context, sheet.columns, sheet.rows
        )));
    }
    Ok(())
}

// ============================================================================
// Sections
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 380,
            title: "Dapper Dasher!".to_string(),
        }
    }
}

/// Vertical motion. Screen space: +y points down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Gravity acceleration (pixels per second squared)
    pub gravity: f32,
    /// Velocity added on jump (pixels per second, negative = up)
    pub jump_velocity: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 1000.0,
            jump_velocity: -600.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub texture: String,
    pub columns: u32,
    pub rows: u32,
    /// Seconds each animation cell stays on screen
    pub frame_duration: f32,
}

impl PlayerConfig {
    pub fn sheet(&self) -> SheetLayout {
        SheetLayout::new(self.columns, self.rows)
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            texture: "textures/scarfy.png".to_string(),
            columns: 6,
            rows: 1,
            frame_duration: 1.0 / 12.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleConfig {
    pub texture: String,
    pub columns: u32,
    pub rows: u32,
    pub frame_duration: f32,
    /// Number of obstacles spawned at startup
    pub count: usize,
    /// Horizontal gap between consecutive spawns (pixels)
    pub spacing: f32,
    /// Horizontal velocity shared by obstacles and finish line (pixels/second)
    pub velocity: f32,
    /// Hitbox inset on every side (pixels)
    pub pad: f32,
}

impl ObstacleConfig {
    pub fn sheet(&self) -> SheetLayout {
        SheetLayout::new(self.columns, self.rows)
    }
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            texture: "textures/12_nebula_spritesheet.png".to_string(),
            columns: 8,
            rows: 8,
            frame_duration: 1.0 / 12.0,
            count: 2,
            spacing: 300.0,
            velocity: -200.0,
            pad: 40.0,
        }
    }
}

/// One parallax background layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerConfig {
    pub texture: String,
    /// Scroll speed (pixels/second, leftwards)
    pub speed: f32,
}

impl LayerConfig {
    fn new(texture: &str, speed: f32) -> Self {
        Self { texture: texture.to_string(), speed }
    }
}

/// Far-to-near layer stack
fn default_layers() -> Vec<LayerConfig> {
    vec![
        LayerConfig::new("textures/far-buildings.png", 20.0),
        LayerConfig::new("textures/back-buildings.png", 40.0),
        LayerConfig::new("textures/foreground.png", 80.0),
    ]
}

// ============================================================================
// Root
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub player: PlayerConfig,
    pub obstacles: ObstacleConfig,
    /// Drawn in order, so list the farthest layer first
    pub layers: Vec<LayerConfig>,
    pub outcome: OutcomePolicy,
    pub fps_limit: FpsLimit,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            physics: PhysicsConfig::default(),
            player: PlayerConfig::default(),
            obstacles: ObstacleConfig::default(),
            layers: default_layers(),
            outcome: OutcomePolicy::default(),
            fps_limit: FpsLimit::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a config from RON text
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_ron(&text)
    }

    /// Load `path` if it exists, otherwise fall back to the defaults.
    /// A file that exists but is malformed is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Fail-fast check of every value the simulation divides by or wraps on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(invalid(format!(
                "window: size must be non-zero (got {}x{})",
                self.window.width, self.window.height
            )));
        }

        check_finite(self.physics.gravity, "physics.gravity")?;
        check_finite(self.physics.jump_velocity, "physics.jump_velocity")?;

        check_sheet(self.player.sheet(), "player")?;
        check_frame_duration(self.player.frame_duration, "player")?;

        let obstacles = &self.obstacles;
        check_sheet(obstacles.sheet(), "obstacles")?;
        check_frame_duration(obstacles.frame_duration, "obstacles")?;
        if obstacles.count == 0 {
            return Err(invalid("obstacles: count must be at least 1".to_string()));
        }
        check_finite(obstacles.spacing, "obstacles.spacing")?;
        check_finite(obstacles.velocity, "obstacles.velocity")?;
        check_finite(obstacles.pad, "obstacles.pad")?;
        if obstacles.pad < 0.0 {
            return Err(invalid(format!("obstacles: pad must be >= 0 (got {})", obstacles.pad)));
        }

        if self.layers.is_empty() {
            return Err(invalid("layers: at least one background layer is required".to_string()));
        }
        for (i, layer) in self.layers.iter().enumerate() {
            check_finite(layer.speed, &format!("layers[{}].speed", i))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = GameConfig::from_ron("(physics: (gravity: 1200.0), outcome: Live)").unwrap();
        assert_eq!(config.physics.gravity, 1200.0);
        assert_eq!(config.physics.jump_velocity, -600.0);
        assert_eq!(config.outcome, OutcomePolicy::Live);
        assert_eq!(config.window, WindowConfig::default());
        assert_eq!(config.layers.len(), 3);
    }

    #[test]
    fn test_zero_frame_duration_rejected() {
        let mut config = GameConfig::default();
        config.player.frame_duration = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_nan_rejected() {
        let mut config = GameConfig::default();
        config.physics.gravity = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_sheet_and_layers_rejected() {
        let mut config = GameConfig::default();
        config.obstacles.columns = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.layers.clear();
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.obstacles.count = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            GameConfig::from_ron("(window: (width: \"wide\"))"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(obstacles: (count: 4, spacing: 250.0))").unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.obstacles.count, 4);
        assert_eq!(config.obstacles.spacing, 250.0);
        assert_eq!(config.obstacles.pad, 40.0);
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = GameConfig::load_or_default(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_missing_file_is_io_error_on_direct_load() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(matches!(
            GameConfig::load(&dir.path().join(CONFIG_FILE)),
            Err(ConfigError::IoError(_))
        ));
    }
}
