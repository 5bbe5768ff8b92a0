//! Asteroids - ship and bullet physics for a 2D wrap-around arena
//!
//! Core modules:
//! - `sim`: Kinematic bodies, player ship, bullets and the per-frame step
//! - `tuning`: Data-driven movement constants
//! - `renderer`: Vertex geometry derived from simulation snapshots
//! - `driver`: Deterministic input source for headless runs

pub mod driver;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Window dimensions
    pub const WINDOW_WIDTH: f32 = 640.0;
    pub const WINDOW_HEIGHT: f32 = 480.0;
    /// Frames per second the driver targets
    pub const FRAME_RATE: u32 = 30;

    /// Ship defaults
    pub const SHIP_SIZE: f32 = 20.0;
    /// Velocity multiplier applied after every integration step
    pub const SHIP_DAMPING: f32 = 0.90;
    /// Acceleration added per thrust command
    pub const SHIP_THRUST: f32 = 0.6;
    /// Radians per rotate command
    pub const SHIP_ROTATION_SPEED: f32 = 0.1;

    /// Bullet defaults
    pub const BULLET_SPEED: f32 = 10.0;
    /// Fraction of ship velocity a bullet inherits at spawn
    pub const BULLET_INHERIT: f32 = 0.3;
    pub const BULLET_SIZE: f32 = 4.0;
    /// Bullets kept alive at once; the oldest is evicted past this
    pub const MAX_BULLETS: usize = 10;
}

/// Screen-space "up" (y grows downwards)
pub const UP: Vec2 = Vec2::new(0.0, -1.0);

/// Rotate `v` by `angle` radians
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(v)
}

/// Unit vector the ship faces at `heading`
#[inline]
pub fn forward(heading: f32) -> Vec2 {
    rotate(UP, heading)
}
