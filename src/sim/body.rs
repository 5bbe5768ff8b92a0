//! Kinematic body shared by the ship and its bullets

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Rectangular arena that bodies wrap around
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};
        Self::new(WINDOW_WIDTH, WINDOW_HEIGHT)
    }
}

/// Position, velocity and per-tick acceleration of a square body
///
/// `position` is the top-left corner; the body's centre sits `size / 2`
/// along both axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KinematicBody {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Only holds what was applied since the last `integrate`
    pub acc: Vec2,
    pub size: f32,
}

impl KinematicBody {
    pub fn new(pos: Vec2, vel: Vec2, acc: Vec2, size: f32) -> Self {
        Self { pos, vel, acc, size }
    }

    /// A body at rest
    pub fn at(pos: Vec2, size: f32) -> Self {
        Self::new(pos, Vec2::ZERO, Vec2::ZERO, size)
    }

    /// Centre point of the body
    #[inline]
    pub fn mid(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    /// Add to this tick's acceleration
    #[inline]
    pub fn apply_acceleration(&mut self, delta: Vec2) {
        self.acc += delta;
    }

    /// Advance one tick and consume the accumulated acceleration
    #[inline]
    pub fn integrate(&mut self) {
        self.vel += self.acc;
        self.pos += self.vel;
        self.acc = Vec2::ZERO;
    }

    /// Teleport to the opposite edge once the centre leaves the bounds
    ///
    /// Each axis is tested on its own with strict comparisons, so a centre
    /// sitting exactly on an edge stays put and a corner exit flips both axes.
    pub fn wrap_to_bounds(&mut self, bounds: Bounds) {
        let half = self.size / 2.0;
        let mid = self.mid();

        if mid.x > bounds.width {
            self.pos.x = -half;
        } else if mid.x < 0.0 {
            self.pos.x = bounds.width - half;
        }

        if mid.y > bounds.height {
            self.pos.y = -half;
        } else if mid.y < 0.0 {
            self.pos.y = bounds.height - half;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Bounds = Bounds::new(640.0, 480.0);

    #[test]
    fn test_integrate_at_rest_is_stationary() {
        let mut body = KinematicBody::at(Vec2::new(12.0, 34.0), 20.0);
        for _ in 0..100 {
            body.integrate();
        }
        assert_eq!(body.pos, Vec2::new(12.0, 34.0));
        assert_eq!(body.vel, Vec2::ZERO);
    }

    #[test]
    fn test_integrate_consumes_acceleration() {
        let mut body = KinematicBody::at(Vec2::ZERO, 20.0);
        body.apply_acceleration(Vec2::new(1.0, 0.0));
        body.apply_acceleration(Vec2::new(1.0, 2.0));
        assert_eq!(body.acc, Vec2::new(2.0, 2.0));

        body.integrate();
        assert_eq!(body.vel, Vec2::new(2.0, 2.0));
        assert_eq!(body.pos, Vec2::new(2.0, 2.0));
        assert_eq!(body.acc, Vec2::ZERO);

        // Velocity persists, acceleration does not
        body.integrate();
        assert_eq!(body.vel, Vec2::new(2.0, 2.0));
        assert_eq!(body.pos, Vec2::new(4.0, 4.0));
    }

    #[test]
    fn test_wrap_right_edge() {
        // mid.x = 645
        let mut body = KinematicBody::at(Vec2::new(635.0, 100.0), 20.0);
        body.wrap_to_bounds(BOUNDS);
        assert_eq!(body.pos, Vec2::new(-10.0, 100.0));
    }

    #[test]
    fn test_wrap_left_edge() {
        // mid.x = -1
        let mut body = KinematicBody::at(Vec2::new(-11.0, 100.0), 20.0);
        body.wrap_to_bounds(BOUNDS);
        assert_eq!(body.pos, Vec2::new(630.0, 100.0));
    }

    #[test]
    fn test_wrap_exact_edge_does_not_move() {
        // mid.x = 640, mid.y = 480
        let mut body = KinematicBody::at(Vec2::new(630.0, 470.0), 20.0);
        body.wrap_to_bounds(BOUNDS);
        assert_eq!(body.pos, Vec2::new(630.0, 470.0));

        // mid = (0, 0)
        let mut body = KinematicBody::at(Vec2::new(-10.0, -10.0), 20.0);
        body.wrap_to_bounds(BOUNDS);
        assert_eq!(body.pos, Vec2::new(-10.0, -10.0));
    }

    #[test]
    fn test_wrap_corner_flips_both_axes() {
        let mut body = KinematicBody::at(Vec2::new(640.0, -30.0), 20.0);
        body.wrap_to_bounds(BOUNDS);
        assert_eq!(body.pos, Vec2::new(-10.0, 470.0));
    }

    #[test]
    fn test_wrap_keeps_velocity() {
        let mut body = KinematicBody::new(
            Vec2::new(700.0, 200.0),
            Vec2::new(3.0, -1.0),
            Vec2::ZERO,
            20.0,
        );
        body.wrap_to_bounds(BOUNDS);
        assert_eq!(body.vel, Vec2::new(3.0, -1.0));
    }
}
