//! Player physics
//!
//! Gravity accumulation, ground velocity clamp and the jump impulse.
//! Screen space: +y points down, so gravity is positive and jumps negative.

use crate::config::PhysicsConfig;
use super::sprite::AnimFrame;

/// The runner: an animated sprite with vertical velocity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    pub sprite: AnimFrame,
    /// Pixels per second, signed
    pub velocity_y: f32,
}

impl PlayerState {
    pub fn new(sprite: AnimFrame) -> Self {
        Self { sprite, velocity_y: 0.0 }
    }

    /// Bottom edge at or below the bottom of the window
    pub fn is_grounded(&self, window_height: f32) -> bool {
        self.sprite.is_on_ground(window_height)
    }
}

/// Advance vertical motion by one tick.
///
/// `grounded` must be sampled before this tick's update: a grounded player
/// has its velocity zeroed and may jump, an airborne one only falls. The
/// position is integrated after the velocity change (semi-implicit Euler).
pub fn physics_step(
    mut player: PlayerState,
    physics: &PhysicsConfig,
    grounded: bool,
    jump_held: bool,
    delta_time: f32,
) -> PlayerState {
    if grounded {
        player.velocity_y = 0.0;
    } else {
        player.velocity_y += physics.gravity * delta_time;
    }

    if jump_held && grounded {
        player.velocity_y += physics.jump_velocity;
    }

    player.sprite.position.y += player.velocity_y * delta_time;
    player
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::prelude::Vec2;

    const GROUND: f32 = 380.0;
    const DT: f32 = 1.0 / 60.0;

    fn grounded_player() -> PlayerState {
        let sprite = AnimFrame::new(128.0, 128.0, Vec2::new(192.0, GROUND - 128.0), 1.0 / 12.0);
        PlayerState::new(sprite)
    }

    #[test]
    fn test_grounded_player_stays_put() {
        let physics = PhysicsConfig::default();
        let player = physics_step(grounded_player(), &physics, true, false, DT);
        assert_eq!(player.velocity_y, 0.0);
        assert_eq!(player.sprite.position.y, GROUND - 128.0);
    }

    #[test]
    fn test_jump_from_ground() {
        let physics = PhysicsConfig::default();
        let player = physics_step(grounded_player(), &physics, true, true, DT);
        assert_eq!(player.velocity_y, physics.jump_velocity);
        assert!((player.sprite.position.y - (GROUND - 128.0 - 10.0)).abs() < 1e-3);
    }

    #[test]
    fn test_no_jump_mid_air() {
        let physics = PhysicsConfig::default();
        let mut player = grounded_player();
        player.sprite.position.y -= 50.0;
        player.velocity_y = -100.0;

        let next = physics_step(player, &physics, false, true, DT);
        let expected = -100.0 + physics.gravity * DT;
        assert!((next.velocity_y - expected).abs() < 1e-4);
    }

    #[test]
    fn test_velocity_resets_on_landing() {
        let physics = PhysicsConfig::default();
        let mut player = grounded_player();
        player.sprite.position.y -= 1.0;
        player.velocity_y = 300.0;

        // Falls through the ground line this tick
        player = physics_step(player, &physics, player.is_grounded(GROUND), false, DT);
        assert!(player.velocity_y > 300.0);
        assert!(player.is_grounded(GROUND));

        // First grounded tick zeroes velocity exactly
        player = physics_step(player, &physics, player.is_grounded(GROUND), false, DT);
        assert_eq!(player.velocity_y, 0.0);
    }

    #[test]
    fn test_jump_parabola_matches_closed_form() {
        let physics = PhysicsConfig::default();
        let start_y = GROUND - 128.0;
        let mut player = grounded_player();

        for tick in 0..60u32 {
            let grounded = player.is_grounded(GROUND);
            player = physics_step(player, &physics, grounded, tick == 0, DT);

            // y_n = y_0 + n*J*dt + g*dt^2*n*(n-1)/2 while airborne
            let n = (tick + 1) as f32;
            let expected = start_y
                + n * physics.jump_velocity * DT
                + physics.gravity * DT * DT * n * (n - 1.0) / 2.0;
            assert!(
                (player.sprite.position.y - expected).abs() < 0.05,
                "tick {}: y={} expected={}", tick, player.sprite.position.y, expected
            );
        }
    }
}
