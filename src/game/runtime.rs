//! Frame pacing
//!
//! The simulation uses the measured frame delta, so pacing only affects
//! smoothness and CPU use, never the outcome.

use macroquad::prelude::get_time;
use serde::{Serialize, Deserialize};

/// FPS limit setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FpsLimit {
    Fps30,
    #[default]
    Fps60,
    /// As fast as the platform presents frames
    Unlocked,
}

impl FpsLimit {
    /// Get the target frame time in seconds (None = unlocked)
    pub fn frame_time(&self) -> Option<f64> {
        match self {
            FpsLimit::Fps30 => Some(1.0 / 30.0),
            FpsLimit::Fps60 => Some(1.0 / 60.0),
            FpsLimit::Unlocked => None,
        }
    }

    /// Display name
    pub fn label(&self) -> &'static str {
        match self {
            FpsLimit::Fps30 => "30",
            FpsLimit::Fps60 => "60",
            FpsLimit::Unlocked => "Unlocked",
        }
    }
}

/// Block until `limit`'s frame time has passed since `frame_start`
/// (seconds from `get_time`).
pub fn wait_for_next_frame(frame_start: f64, limit: FpsLimit) {
    let Some(target_frame_time) = limit.frame_time() else { return };
    if get_time() - frame_start >= target_frame_time {
        return;
    }

    // Native: use sleep for bulk, then spin-wait for precision
    #[cfg(not(target_arch = "wasm32"))]
    {
        let spin_margin = 0.002; // 2ms
        while get_time() - frame_start + spin_margin < target_frame_time {
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
        while get_time() - frame_start < target_frame_time {
            std::hint::spin_loop();
        }
    }
    // WASM: the browser paces requestAnimationFrame, no thread::sleep available
    #[cfg(target_arch = "wasm32")]
    {
        while get_time() - frame_start < target_frame_time {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_times() {
        assert_eq!(FpsLimit::default(), FpsLimit::Fps60);
        assert_eq!(FpsLimit::Fps30.frame_time(), Some(1.0 / 30.0));
        assert_eq!(FpsLimit::Unlocked.frame_time(), None);
        assert_eq!(FpsLimit::Unlocked.label(), "Unlocked");
    }
}
