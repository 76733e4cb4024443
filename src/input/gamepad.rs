//! Gamepad support
//!
//! Native: Uses gilrs crate for cross-platform gamepad input
//! WASM: No gamepad backend; every query reports "not pressed"

// Standard gamepad button indices (Xbox layout)
pub mod button {
    pub const A: u32 = 0;           // ActionDown / South
    pub const START: u32 = 9;       // Start/Options
}

// ============================================================================
// Native Implementation (gilrs)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use gilrs::{Gilrs, Button as GilrsButton};
    use macroquad::logging::warn;

    pub struct Gamepad {
        /// None when the platform has no gamepad backend
        gilrs: Option<Gilrs>,
        /// Button masks sampled by the last two polls
        current: u32,
        previous: u32,
    }

    impl Gamepad {
        pub fn new() -> Self {
            let gilrs = match Gilrs::new() {
                Ok(gilrs) => Some(gilrs),
                Err(e) => {
                    warn!("Gamepad support unavailable: {}", e);
                    None
                }
            };
            Self {
                gilrs,
                current: 0,
                previous: 0,
            }
        }

        pub fn poll(&mut self) {
            if let Some(gilrs) = self.gilrs.as_mut() {
                // Drain events so gilrs updates its cached button state
                while gilrs.next_event().is_some() {}
            }
            self.previous = self.current;
            self.current = self.get_button_mask();
        }

        pub fn has_gamepad(&self) -> bool {
            self.gilrs.as_ref().is_some_and(|g| g.gamepads().next().is_some())
        }

        fn get_button_mask(&self) -> u32 {
            let Some(gilrs) = self.gilrs.as_ref() else { return 0 };
            let Some((_, gp)) = gilrs.gamepads().next() else { return 0 };
            let mut mask = 0u32;

            if gp.is_pressed(GilrsButton::South) { mask |= 1 << super::button::A; }
            if gp.is_pressed(GilrsButton::Start) { mask |= 1 << super::button::START; }

            mask
        }

        pub fn is_button_down(&self, button: u32) -> bool {
            (self.current & (1 << button)) != 0
        }

        /// Down on this poll but not the one before
        pub fn is_button_pressed(&self, button: u32) -> bool {
            let was_down = (self.previous & (1 << button)) != 0;
            self.is_button_down(button) && !was_down
        }
    }
}

// ============================================================================
// WASM Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
mod platform {
    pub struct Gamepad;

    impl Gamepad {
        pub fn new() -> Self {
            Self
        }

        pub fn poll(&mut self) {}

        pub fn has_gamepad(&self) -> bool {
            false
        }

        pub fn is_button_down(&self, _button: u32) -> bool {
            false
        }

        pub fn is_button_pressed(&self, _button: u32) -> bool {
            false
        }
    }
}

// Re-export the platform-specific implementation
pub use platform::Gamepad;

impl Default for Gamepad {
    fn default() -> Self {
        Self::new()
    }
}
