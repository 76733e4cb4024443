//! Obstacles and the finish line
//!
//! Obstacles are spawned once off the right edge of the window, evenly
//! spaced, and drift left at a constant speed for the whole run. The finish
//! line starts where the last obstacle starts and moves with them.

use macroquad::prelude::Vec2;
use super::rect::Rect;
use super::sprite::{self, AnimFrame};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub sprite: AnimFrame,
    /// Pixels per second (negative = leftwards)
    pub velocity_x: f32,
}

impl Obstacle {
    /// Hitbox inset by `pad` on every side
    pub fn hitbox(&self, pad: f32) -> Rect {
        self.sprite.bounds().pad(pad)
    }
}

/// Where obstacles spawn and how they move
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnParams {
    pub count: usize,
    /// First spawn x, usually the right edge of the window
    pub start_x: f32,
    pub spacing: f32,
    /// Ground line (bottom of the window)
    pub ground_y: f32,
    pub cell_w: f32,
    pub cell_h: f32,
    pub frame_duration: f32,
    pub velocity_x: f32,
}

impl SpawnParams {
    /// x of the i-th spawn
    pub fn spawn_x(&self, index: usize) -> f32 {
        self.start_x + self.spacing * index as f32
    }
}

/// Fixed-size collection, never grows or shrinks during a run
#[derive(Debug, Clone, PartialEq)]
pub struct ObstacleSet {
    obstacles: Vec<Obstacle>,
}

impl ObstacleSet {
    pub fn spawn(params: &SpawnParams) -> Self {
        let obstacles = (0..params.count)
            .map(|i| Obstacle {
                sprite: AnimFrame::new(
                    params.cell_w,
                    params.cell_h,
                    Vec2::new(params.spawn_x(i), params.ground_y - params.cell_h),
                    params.frame_duration,
                ),
                velocity_x: params.velocity_x,
            })
            .collect();
        Self { obstacles }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    /// Move every obstacle by its velocity
    pub fn advance_positions(&mut self, delta_time: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.sprite.position.x += obstacle.velocity_x * delta_time;
        }
    }

    /// Step every obstacle's animation timer
    pub fn advance_animation(&mut self, delta_time: f32, max_frame: u32) {
        for obstacle in &mut self.obstacles {
            obstacle.sprite = sprite::advance(obstacle.sprite, delta_time, max_frame);
        }
    }
}

/// Win threshold on the x axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinishLine {
    pub x: f32,
}

impl FinishLine {
    /// Starts level with the last obstacle's spawn point
    pub fn behind_last(params: &SpawnParams) -> Self {
        Self { x: params.spawn_x(params.count.saturating_sub(1)) }
    }

    pub fn advance(&mut self, velocity_x: f32, delta_time: f32) {
        self.x += velocity_x * delta_time;
    }

    pub fn is_reached_by(&self, x: f32) -> bool {
        x >= self.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> SpawnParams {
        SpawnParams {
            count: 3,
            start_x: 512.0,
            spacing: 300.0,
            ground_y: 380.0,
            cell_w: 100.0,
            cell_h: 100.0,
            frame_duration: 1.0 / 12.0,
            velocity_x: -200.0,
        }
    }

    #[test]
    fn test_spawn_layout() {
        let set = ObstacleSet::spawn(&params());
        assert_eq!(set.len(), 3);
        let xs: Vec<f32> = set.iter().map(|o| o.sprite.position.x).collect();
        assert_eq!(xs, vec![512.0, 812.0, 1112.0]);
        assert!(set.iter().all(|o| o.sprite.position.y == 280.0));
    }

    #[test]
    fn test_finish_line_starts_at_last_obstacle() {
        let line = FinishLine::behind_last(&params());
        assert_eq!(line.x, 512.0 + 300.0 * 2.0);
    }

    #[test]
    fn test_obstacles_and_finish_move_together() {
        let p = params();
        let mut set = ObstacleSet::spawn(&p);
        let mut line = FinishLine::behind_last(&p);
        for _ in 0..10 {
            set.advance_positions(0.25);
            line.advance(p.velocity_x, 0.25);
        }
        let last = set.iter().last().unwrap();
        assert_eq!(last.sprite.position.x, line.x);
        assert_eq!(line.x, 1112.0 - 500.0);
        // Only x moves
        assert!(set.iter().all(|o| o.sprite.position.y == 280.0));
    }

    #[test]
    fn test_hitbox_is_padded() {
        let set = ObstacleSet::spawn(&params());
        let hitbox = set.iter().next().unwrap().hitbox(40.0);
        assert_eq!(hitbox, Rect::new(552.0, 320.0, 20.0, 20.0));
    }

    #[test]
    fn test_finish_reached_at_equal_x() {
        let line = FinishLine { x: 192.0 };
        assert!(line.is_reached_by(192.0));
        assert!(!line.is_reached_by(191.9));
    }
}
