//! Input state management
//!
//! Polls both keyboard (macroquad) and gamepad input, combining them into a
//! unified action-based API.

use macroquad::prelude::*;
use super::Action;
use super::gamepad::{Gamepad, button};

/// Unified input state that handles both keyboard and gamepad
pub struct InputState {
    gamepad: Gamepad,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            gamepad: Gamepad::new(),
        }
    }

    /// Call once per frame before checking actions
    pub fn poll(&mut self) {
        self.gamepad.poll();
    }

    /// Check if action is currently held down
    pub fn action_down(&self, action: Action) -> bool {
        self.keyboard_down(action) || self.gamepad_down(action)
    }

    /// Check if action was just pressed this frame
    pub fn action_pressed(&self, action: Action) -> bool {
        self.keyboard_pressed(action) || self.gamepad_pressed(action)
    }

    fn keyboard_down(&self, action: Action) -> bool {
        match action {
            Action::Jump => is_key_down(KeyCode::Space),
            Action::Quit => is_key_down(KeyCode::Escape),
        }
    }

    fn keyboard_pressed(&self, action: Action) -> bool {
        match action {
            Action::Jump => is_key_pressed(KeyCode::Space),
            Action::Quit => is_key_pressed(KeyCode::Escape),
        }
    }

    fn gamepad_down(&self, action: Action) -> bool {
        match action {
            Action::Jump => self.gamepad.is_button_down(button::A),
            Action::Quit => self.gamepad.is_button_down(button::START),
        }
    }

    fn gamepad_pressed(&self, action: Action) -> bool {
        match action {
            Action::Jump => self.gamepad.is_button_pressed(button::A),
            Action::Quit => self.gamepad.is_button_pressed(button::START),
        }
    }

    /// Check if any gamepad is connected
    pub fn has_gamepad(&self) -> bool {
        self.gamepad.has_gamepad()
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
