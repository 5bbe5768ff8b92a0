//! Deterministic stand-in for keyboard input
//!
//! Drives the ship in headless runs. Same seed, same command stream.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::Command;

/// Frames between automatic shots
pub const FIRE_INTERVAL: u64 = 6;

/// Longest a held input lasts before a new one is rolled
const MAX_HOLD_FRAMES: u32 = 45;

/// Seeded random "player" that holds keys for a while, then changes its mind
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    /// Rotation currently held (if any)
    turn: Option<Command>,
    /// Thrust currently held (if any)
    throttle: Option<Command>,
    /// Frames left before rolling new inputs
    hold: u32,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            turn: None,
            throttle: None,
            hold: 0,
        }
    }

    fn roll(&mut self) {
        self.turn = match self.rng.random_range(0..3) {
            0 => Some(Command::Left),
            1 => Some(Command::Right),
            _ => None,
        };
        // Forward is most common, otherwise the ship barely moves
        self.throttle = match self.rng.random_range(0..4) {
            0 | 1 => Some(Command::Forward),
            2 => Some(Command::Backward),
            _ => None,
        };
        self.hold = self.rng.random_range(1..=MAX_HOLD_FRAMES);
    }

    /// Commands for `frame`
    pub fn next_commands(&mut self, frame: u64) -> Vec<Command> {
        if self.hold == 0 {
            self.roll();
        }
        self.hold -= 1;

        let mut commands = Vec::with_capacity(3);
        commands.extend(self.turn);
        commands.extend(self.throttle);
        if frame % FIRE_INTERVAL == 0 {
            commands.push(Command::Fire);
        }
        commands
    }
}
