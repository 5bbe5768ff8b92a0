//! One frame of simulation
//!
//! Applies already-decoded commands to the player, advances every body by a
//! single tick, wraps to the arena and hands back a read-only snapshot.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Bounds;
use super::player::Player;

/// Decoded input for the ship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Forward,
    Backward,
    Left,
    Right,
    Fire,
}

/// Bullet state handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BulletSnapshot {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub pos: Vec2,
    /// Centre of the ship
    pub mid: Vec2,
    pub vel: Vec2,
    pub heading: f32,
    /// Oldest first
    pub bullets: Vec<BulletSnapshot>,
}

impl FrameSnapshot {
    pub fn capture(player: &Player, frame: u64) -> Self {
        Self {
            frame,
            pos: player.position(),
            mid: player.body.mid(),
            vel: player.velocity(),
            heading: player.heading(),
            bullets: player
                .bullets()
                .map(|b| BulletSnapshot {
                    pos: b.position(),
                    vel: b.velocity(),
                })
                .collect(),
        }
    }
}

/// Advance the player by one frame
///
/// Commands are applied in order before the tick, so repeated thrust
/// commands stack and a fire sees the pre-tick velocity.
pub fn step(player: &mut Player, commands: &[Command], bounds: Bounds, frame: u64) -> FrameSnapshot {
    for &command in commands {
        player.apply(command);
    }
    player.tick();
    player.wrap_all(bounds);
    FrameSnapshot::capture(player, frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MAX_BULLETS;

    #[test]
    fn test_step_without_input_is_idle() {
        let mut player = Player::new(320.0, 240.0);
        let snap = step(&mut player, &[], Bounds::default(), 0);
        assert_eq!(snap.pos, Vec2::new(330.0, 250.0));
        assert_eq!(snap.vel, Vec2::ZERO);
        assert!(snap.bullets.is_empty());
    }

    #[test]
    fn test_step_applies_commands_before_tick() {
        let mut player = Player::new(320.0, 240.0);
        let snap = step(
            &mut player,
            &[Command::Forward, Command::Forward, Command::Right],
            Bounds::default(),
            1,
        );
        assert_eq!(snap.frame, 1);
        assert!((snap.heading - 0.1).abs() < 1e-6);
        // Thrust was computed before the rotation was applied
        assert!((snap.pos - Vec2::new(330.0, 248.8)).length() < 1e-4);
    }

    #[test]
    fn test_step_fire_then_tick_moves_bullet() {
        let mut player = Player::new(320.0, 240.0);
        let snap = step(&mut player, &[Command::Fire], Bounds::default(), 0);
        assert_eq!(snap.bullets.len(), 1);
        // Spawned at the centre (340, 260), then integrated once
        assert!((snap.bullets[0].pos - Vec2::new(340.0, 250.0)).length() < 1e-4);
    }

    #[test]
    fn test_step_wraps_after_tick() {
        let mut player = Player::new(0.0, 0.0);
        player.body.pos = Vec2::new(-10.0, 100.0);
        player.body.vel = Vec2::new(-1.0, 0.0);
        let snap = step(&mut player, &[], Bounds::default(), 0);
        assert_eq!(snap.pos.x, 640.0 - 10.0);
    }

    #[test]
    fn test_snapshot_respects_bullet_bound() {
        let mut player = Player::new(320.0, 240.0);
        let mut snap = None;
        for frame in 0..30 {
            snap = Some(step(&mut player, &[Command::Fire], Bounds::default(), frame));
        }
        let snap = snap.unwrap();
        assert_eq!(snap.bullets.len(), MAX_BULLETS);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut player = Player::new(320.0, 240.0);
        let snap = step(&mut player, &[Command::Fire], Bounds::default(), 7);
        let json = serde_json::to_string(&snap).unwrap();
        let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
