//! A CPU-based software-rendered raycasting engine.
//!
//! This crate draws a first-person view of a 2D tile map the classic way:
//! one ray marched per screen column, each hit projected to a vertical
//! wall strip sized by distance. SDL2 is used only for window management
//! and display; all rendering is done on the CPU.
//!
//! # Quick Start
//!
//! ```ignore
//! use raywalk::prelude::*;
//!
//! let mut window = Window::new("My App", 320, 240)?;
//! let mut engine = Engine::new(320, 240);
//! engine.render();
//! window.present(engine.frame_buffer())?;
//! ```

// Public API - exposed to library consumers
pub mod capture;
pub mod colors;
pub mod engine;
pub mod map;
pub mod math;
pub mod player;
pub mod projection;
pub mod raycaster;
pub mod renderer;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use engine::Engine;
pub use map::TileMap;
pub use player::{PlayerController, Pose};
pub use projection::{ShadingMode, Strip, StripProjection};
pub use raycaster::{RayCaster, RaySample};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use raywalk::prelude::*;
/// ```
pub mod prelude {
    // Engine
    pub use crate::engine::Engine;

    // Map & player
    pub use crate::map::TileMap;
    pub use crate::player::{PlayerController, Pose};

    // Ray pipeline
    pub use crate::projection::{ShadingMode, Strip, StripProjection};
    pub use crate::raycaster::{RayCaster, RaySample};

    // Math
    pub use crate::math::vec2::Vec2;

    // Window & Input
    pub use crate::window::{FpsCounter, FrameLimiter, InputState, Window, WindowEvent};
}
