//! Runner game core
//!
//! A small, deterministic side-scroller simulation:
//! - Sprite: sprite-sheet frame timing
//! - Physics: gravity and jump for the runner
//! - Parallax: wrapping background layers
//! - Obstacle: drifting nebulae and the finish line
//! - Collision: padded AABB hits and the win/lose outcome
//! - Sim: the per-frame step tying them together
//!
//! Everything except `renderer` and `runtime` is pure and window-free.

pub mod rect;
pub mod sprite;
pub mod physics;
pub mod parallax;
pub mod obstacle;
pub mod collision;
pub mod sim;
pub mod runtime;
pub mod renderer;

// Re-export main types
pub use sprite::{SheetLayout, TextureDims};
pub use collision::OutcomePolicy;
pub use sim::{FrameInput, SceneDims, Simulation, step};
pub use runtime::FpsLimit;
pub use renderer::draw_frame;
