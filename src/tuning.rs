//! Data-driven movement tuning
//!
//! Every field has a default, so a tuning file only needs to name the values
//! it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Bounds;

/// Failure to read or parse a tuning file
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("failed to read tuning: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ship, bullet and arena constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Ship ===
    /// Velocity multiplier applied after each tick
    pub damping: f32,
    /// Acceleration per thrust command
    pub thrust: f32,
    /// Radians per rotate command
    pub rotation_speed: f32,
    pub ship_size: f32,

    // === Bullets ===
    pub bullet_speed: f32,
    /// Fraction of ship velocity added to a new bullet
    pub bullet_inherit: f32,
    pub bullet_size: f32,
    /// Bullets alive at once (at least 1)
    pub max_bullets: usize,

    // === Arena ===
    pub width: f32,
    pub height: f32,
    pub frame_rate: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            damping: SHIP_DAMPING,
            thrust: SHIP_THRUST,
            rotation_speed: SHIP_ROTATION_SPEED,
            ship_size: SHIP_SIZE,

            bullet_speed: BULLET_SPEED,
            bullet_inherit: BULLET_INHERIT,
            bullet_size: BULLET_SIZE,
            max_bullets: MAX_BULLETS,

            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            frame_rate: FRAME_RATE,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    /// Read and parse a tuning file
    pub fn read(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load a tuning file, falling back to defaults on any error
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::read(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("{e} ({}), using default tuning", path.display());
                Self::default()
            }
        }
    }

    /// Replace values the simulation cannot honour with defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Tuning::default();

        if self.max_bullets == 0 {
            log::warn!("max_bullets must be at least 1, clamping");
            self.max_bullets = 1;
        }
        if self.frame_rate == 0 {
            log::warn!("frame_rate must be at least 1, using {FRAME_RATE}");
            self.frame_rate = FRAME_RATE;
        }
        if !(self.damping > 0.0 && self.damping < 1.0) {
            log::warn!("damping {} outside (0, 1), using {}", self.damping, defaults.damping);
            self.damping = defaults.damping;
        }

        let positive = [
            ("width", &mut self.width, defaults.width),
            ("height", &mut self.height, defaults.height),
            ("ship_size", &mut self.ship_size, defaults.ship_size),
            ("bullet_size", &mut self.bullet_size, defaults.bullet_size),
        ];
        for (name, value, default) in positive {
            if !(*value > 0.0 && value.is_finite()) {
                log::warn!("{name} must be positive, using {default}");
                *value = default;
            }
        }
        self
    }

    /// Arena the ship and bullets wrap around
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }
}
