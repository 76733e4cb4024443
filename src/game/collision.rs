//! Collision & outcome
//!
//! Player bounds against each obstacle's padded hitbox, then player x
//! against the finish line. Losing wins over winning on the same tick.

use serde::{Serialize, Deserialize};
use super::obstacle::{FinishLine, ObstacleSet};
use super::rect::Rect;

/// Result of a run so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Playing,
    Lost,
    Won,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Playing)
    }

    /// End-of-run overlay text
    pub fn banner(self) -> Option<&'static str> {
        match self {
            Outcome::Playing => None,
            Outcome::Lost => Some("Game Over"),
            Outcome::Won => Some("You Win"),
        }
    }
}

/// What happens to a terminal outcome on later ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutcomePolicy {
    /// First Lost/Won sticks for the rest of the run
    #[default]
    Latch,
    /// Re-evaluate from scratch every tick
    Live,
}

/// Does the player overlap any obstacle hitbox?
pub fn hits_any_obstacle(player: Rect, obstacles: &ObstacleSet, pad: f32) -> bool {
    obstacles.iter().any(|o| player.overlaps(&o.hitbox(pad)))
}

/// This tick's outcome, ignoring history
pub fn evaluate(player: Rect, obstacles: &ObstacleSet, finish: &FinishLine, pad: f32) -> Outcome {
    if hits_any_obstacle(player, obstacles, pad) {
        Outcome::Lost
    } else if finish.is_reached_by(player.x) {
        Outcome::Won
    } else {
        Outcome::Playing
    }
}

/// Combine the previous outcome with this tick's evaluation
pub fn resolve(previous: Outcome, current: Outcome, policy: OutcomePolicy) -> Outcome {
    match policy {
        OutcomePolicy::Latch if previous.is_terminal() => previous,
        _ => current,
    }
}
