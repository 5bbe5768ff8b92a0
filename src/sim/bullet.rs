//! Bullets fired by the ship

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Bounds, KinematicBody};
use crate::consts::*;
use crate::forward;

/// A bullet in flight
///
/// Bullets never accelerate after spawning and never expire on their own;
/// they wrap around the arena until evicted from the ship's queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub body: KinematicBody,
}

impl Bullet {
    /// Spawn with the default speed, inheritance and size
    pub fn new(ship_pos: Vec2, ship_heading: f32, ship_vel: Vec2) -> Self {
        Self::with_tuning(
            ship_pos,
            ship_heading,
            ship_vel,
            BULLET_SPEED,
            BULLET_INHERIT,
            BULLET_SIZE,
        )
    }

    /// Spawn at `ship_pos` travelling along `ship_heading` at `speed`, plus
    /// `inherit` times the ship's velocity
    pub fn with_tuning(
        ship_pos: Vec2,
        ship_heading: f32,
        ship_vel: Vec2,
        speed: f32,
        inherit: f32,
        size: f32,
    ) -> Self {
        let vel = ship_vel * inherit + forward(ship_heading) * speed;
        Self {
            body: KinematicBody::new(ship_pos, vel, Vec2::ZERO, size),
        }
    }

    pub fn position(&self) -> Vec2 {
        self.body.pos
    }

    pub fn velocity(&self) -> Vec2 {
        self.body.vel
    }

    pub fn integrate(&mut self) {
        self.body.integrate();
    }

    pub fn wrap_to_bounds(&mut self, bounds: Bounds) {
        self.body.wrap_to_bounds(bounds);
    }
}
