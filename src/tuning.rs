//! Data-driven game balance
//!
//! Every number that shapes a run lives here so a presentation layer can ship
//! its own JSON overrides. Missing fields fall back to the reference values.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{FLOOR_Y, PIPE_GAP};

/// Errors raised while loading tuning overrides
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Half-open `[min, max)` range of seconds used for random draws
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SecsRange {
    pub min: f32,
    pub max: f32,
}

impl SecsRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    fn check(&self, field: &'static str) -> Result<(), TuningError> {
        if !(self.min > 0.0) {
            return Err(TuningError::Invalid {
                field,
                reason: "range minimum must be positive",
            });
        }
        if !(self.max > self.min) {
            return Err(TuningError::Invalid {
                field,
                reason: "range maximum must exceed its minimum",
            });
        }
        Ok(())
    }
}

/// Game balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration (px/tick, added to velocity every tick)
    pub gravity: f32,
    /// Velocity set by a flap (negative = upward)
    pub jump_impulse: f32,
    /// Horizontal scroll speed of pipes and coins (px/tick)
    pub scroll_speed: f32,
    /// Forgiveness margin shaved off every hitbox edge (px)
    pub hitbox_margin: f32,

    /// Seconds between pipe spawns
    pub pipe_interval_secs: f32,
    /// Seconds between pipe spawns while SlowMotion is active
    pub slow_pipe_interval_secs: f32,
    /// Smallest gap offset from the top of the board
    pub min_gap_top: f32,

    /// Delay before a bonus coin appears
    pub bonus_coin_delay: SecsRange,
    /// Delay between score coins
    pub score_coin_delay: SecsRange,

    /// Power-up lifetime, drawn at activation
    pub power_up_duration: SecsRange,
    /// Seconds removed from the power-up clock every countdown period
    pub power_up_step_secs: f32,
    /// Scroll speed multiplier during SlowMotion
    pub slow_motion_factor: f32,
    /// Hitbox scale during SizeReduction
    pub size_reduction_scale: f32,

    /// Score that triggers the one-shot celebration
    pub celebration_score: u32,
    /// How long the celebration flag stays raised
    pub celebration_secs: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            jump_impulse: -8.0,
            scroll_speed: 3.0,
            hitbox_margin: 5.0,

            pipe_interval_secs: 2.0,
            slow_pipe_interval_secs: 3.0,
            min_gap_top: 50.0,

            bonus_coin_delay: SecsRange::new(8.0, 15.0),
            score_coin_delay: SecsRange::new(3.0, 6.0),

            power_up_duration: SecsRange::new(3.0, 10.0),
            power_up_step_secs: 0.1,
            slow_motion_factor: 0.5,
            size_reduction_scale: 0.6,

            celebration_score: 69,
            celebration_secs: 1.0,
        }
    }
}

impl Tuning {
    /// Parse overrides from JSON and validate the result
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load overrides from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject values that would make random draws or timers misbehave
    pub fn validate(&self) -> Result<(), TuningError> {
        fn positive(value: f32, field: &'static str) -> Result<(), TuningError> {
            if value > 0.0 {
                Ok(())
            } else {
                Err(TuningError::Invalid {
                    field,
                    reason: "must be positive",
                })
            }
        }

        fn unit_factor(value: f32, field: &'static str) -> Result<(), TuningError> {
            if value > 0.0 && value <= 1.0 {
                Ok(())
            } else {
                Err(TuningError::Invalid {
                    field,
                    reason: "must be within (0, 1]",
                })
            }
        }

        positive(self.gravity, "gravity")?;
        if !(self.jump_impulse < 0.0) {
            return Err(TuningError::Invalid {
                field: "jump_impulse",
                reason: "must be negative (upward)",
            });
        }
        positive(self.scroll_speed, "scroll_speed")?;
        if !(self.hitbox_margin >= 0.0) {
            return Err(TuningError::Invalid {
                field: "hitbox_margin",
                reason: "must not be negative",
            });
        }
        positive(self.pipe_interval_secs, "pipe_interval_secs")?;
        positive(self.slow_pipe_interval_secs, "slow_pipe_interval_secs")?;
        if !(self.min_gap_top >= 0.0 && self.min_gap_top < FLOOR_Y - PIPE_GAP) {
            return Err(TuningError::Invalid {
                field: "min_gap_top",
                reason: "gap must fit between the ceiling and the ground",
            });
        }
        self.bonus_coin_delay.check("bonus_coin_delay")?;
        self.score_coin_delay.check("score_coin_delay")?;
        self.power_up_duration.check("power_up_duration")?;
        positive(self.power_up_step_secs, "power_up_step_secs")?;
        unit_factor(self.slow_motion_factor, "slow_motion_factor")?;
        unit_factor(self.size_reduction_scale, "size_reduction_scale")?;
        if self.celebration_score == 0 {
            return Err(TuningError::Invalid {
                field: "celebration_score",
                reason: "runs start at zero, so it must be positive",
            });
        }
        positive(self.celebration_secs, "celebration_secs")?;
        Ok(())
    }
}
