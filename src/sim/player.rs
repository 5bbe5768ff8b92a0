//! The player's ship

use glam::Vec2;

use super::body::{Bounds, KinematicBody};
use super::bullet::Bullet;
use super::frame::Command;
use super::queue::BoundedQueue;
use crate::forward;
use crate::tuning::Tuning;

/// Rotation command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// Counter-clockwise on screen
    Left,
    /// Clockwise on screen
    Right,
}

/// Thrust command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Thrust {
    Forward,
    Backward,
}

/// Ship with a heading and a bounded queue of bullets in flight
#[derive(Debug, Clone)]
pub struct Player {
    pub body: KinematicBody,
    /// Radians, accumulates without wrapping
    heading: f32,
    /// Oldest bullet at the front
    bullets: BoundedQueue<Bullet>,
    tuning: Tuning,
}

impl Player {
    /// Create a ship whose top-left corner is offset half a ship from `(x, y)`
    pub fn new(x: f32, y: f32) -> Self {
        Self::with_tuning(x, y, Tuning::default())
    }

    pub fn with_tuning(x: f32, y: f32, tuning: Tuning) -> Self {
        let size = tuning.ship_size;
        let pos = Vec2::new(x, y) + Vec2::splat(size / 2.0);
        Self {
            body: KinematicBody::at(pos, size),
            heading: 0.0,
            bullets: BoundedQueue::with_capacity(tuning.max_bullets),
            tuning,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.body.pos
    }

    pub fn velocity(&self) -> Vec2 {
        self.body.vel
    }

    pub fn heading(&self) -> f32 {
        self.heading
    }

    pub fn size(&self) -> f32 {
        self.body.size
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Bullets in flight, oldest first
    pub fn bullets(&self) -> impl Iterator<Item = &Bullet> + '_ {
        self.bullets.iter()
    }

    pub fn bullet_count(&self) -> usize {
        self.bullets.len()
    }

    pub fn rotate(&mut self, direction: Rotation) {
        match direction {
            Rotation::Left => self.heading -= self.tuning.rotation_speed,
            Rotation::Right => self.heading += self.tuning.rotation_speed,
        }
    }

    /// Queue thrust along the current heading for the next tick
    pub fn thrust(&mut self, direction: Thrust) {
        let impulse = forward(self.heading) * self.tuning.thrust;
        match direction {
            Thrust::Forward => self.body.apply_acceleration(impulse),
            Thrust::Backward => self.body.apply_acceleration(-impulse),
        }
    }

    /// Apply a single decoded command
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Forward => self.thrust(Thrust::Forward),
            Command::Backward => self.thrust(Thrust::Backward),
            Command::Left => self.rotate(Rotation::Left),
            Command::Right => self.rotate(Rotation::Right),
            Command::Fire => {
                self.fire();
            }
        }
    }

    /// Spawn a bullet from the ship's centre
    ///
    /// Returns the oldest bullet if it had to be evicted to stay within
    /// `max_bullets`.
    pub fn fire(&mut self) -> Option<Bullet> {
        let bullet = Bullet::with_tuning(
            self.body.mid(),
            self.heading,
            self.body.vel,
            self.tuning.bullet_speed,
            self.tuning.bullet_inherit,
            self.tuning.bullet_size,
        );
        let evicted = self.bullets.push_back(bullet);
        if evicted.is_some() {
            log::trace!("bullet queue full, evicted oldest");
        }
        evicted
    }

    /// Advance the ship and every bullet by one tick
    ///
    /// Damping is applied after integration, so it only affects the next tick.
    pub fn tick(&mut self) {
        self.body.integrate();
        self.body.vel *= self.tuning.damping;

        for bullet in self.bullets.iter_mut() {
            bullet.integrate();
        }
    }

    /// Wrap the ship, then each bullet independently
    pub fn wrap_all(&mut self, bounds: Bounds) {
        self.body.wrap_to_bounds(bounds);
        for bullet in self.bullets.iter_mut() {
            bullet.wrap_to_bounds(bounds);
        }
    }
}
