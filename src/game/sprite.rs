//! Sprite-sheet animation
//!
//! An `AnimFrame` selects one cell of a sprite sheet and tracks how long that
//! cell has been shown. The same `advance` is used for the player and every
//! obstacle; only the max frame differs per sheet.

use macroquad::prelude::Vec2;
use serde::{Serialize, Deserialize};
use crate::config::ConfigError;
use super::rect::Rect;

/// Pixel size of a loaded texture, as reported by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureDims {
    pub width: u32,
    pub height: u32,
}

impl TextureDims {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Grid layout of a sprite sheet. Animation walks the first row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetLayout {
    pub columns: u32,
    pub rows: u32,
}

impl SheetLayout {
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Last valid frame index along the animated row
    pub fn max_frame(&self) -> u32 {
        self.columns.saturating_sub(1)
    }

    /// Size of one cell in pixels (integer division, like the texture itself)
    pub fn cell_size(&self, dims: TextureDims, context: &str) -> Result<(f32, f32), ConfigError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(ConfigError::ValidationError(format!(
                "{}: sprite sheet has no cells", context
            )));
        }
        let w = dims.width / self.columns;
        let h = dims.height / self.rows;
        if w == 0 || h == 0 {
            return Err(ConfigError::ValidationError(format!(
                "{}: texture {}x{} is too small for a {}x{} sheet",
                context, dims.width, dims.height, self.columns, self.rows
            )));
        }
        Ok((w as f32, h as f32))
    }
}

/// Current animation cell plus screen position of one sprite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimFrame {
    /// Source rect of the current cell within the sheet
    pub rect: Rect,
    /// Top-left corner on screen
    pub position: Vec2,
    pub frame: u32,
    /// Seconds per frame (> 0)
    pub frame_duration: f32,
    /// Seconds since the last frame change
    pub elapsed: f32,
}

impl AnimFrame {
    /// Start at cell 0 with a fresh timer
    pub fn new(cell_w: f32, cell_h: f32, position: Vec2, frame_duration: f32) -> Self {
        debug_assert!(frame_duration > 0.0);
        Self {
            rect: Rect::new(0.0, 0.0, cell_w, cell_h),
            position,
            frame: 0,
            frame_duration,
            elapsed: 0.0,
        }
    }

    /// On-screen bounds (unpadded)
    pub fn bounds(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.rect.w, self.rect.h)
    }

    /// Bottom edge at or below the ground line
    pub fn is_on_ground(&self, ground_y: f32) -> bool {
        self.position.y >= ground_y - self.rect.h
    }
}

/// Accumulate `delta_time` and step to the next cell once `frame_duration`
/// has elapsed.
///
/// The source rect is moved to the cell of the *current* index before the
/// index increments, so cell 0 is shown for the first two periods. Leftover
/// time past the boundary is discarded.
pub fn advance(mut anim: AnimFrame, delta_time: f32, max_frame: u32) -> AnimFrame {
    anim.elapsed += delta_time;
    if anim.elapsed >= anim.frame_duration {
        anim.elapsed = 0.0;
        anim.rect.x = anim.frame as f32 * anim.rect.w;
        anim.frame += 1;
        if anim.frame > max_frame {
            anim.frame = 0;
        }
    }
    anim
}
