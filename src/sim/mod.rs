//! Ship and bullet simulation
//!
//! This module is pure and deterministic:
//! - One tick per frame, no timestep
//! - No rendering or platform dependencies
//! - Bounds are always passed in, never global

pub mod body;
pub mod bullet;
pub mod frame;
pub mod player;
pub mod queue;

pub use body::{Bounds, KinematicBody};
pub use bullet::Bullet;
pub use frame::{BulletSnapshot, Command, FrameSnapshot, step};
pub use player::{Player, Rotation, Thrust};
pub use queue::BoundedQueue;
