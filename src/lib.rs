//! Flappy Bird - a single-screen arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawners, collisions, power-ups)
//! - `engine`: Core-facing API driven by `on_jump` / `on_tick`
//! - `highscores`: Best-score persistence collaborator
//! - `audio`: Sound-cue collaborator
//! - `tuning`: Data-driven game balance
//! - `autopilot`: Demo player for the headless runner

pub mod audio;
pub mod autopilot;
pub mod engine;
pub mod highscores;
pub mod sim;
pub mod tuning;

pub use audio::{CueSink, SoundCue};
pub use engine::Engine;
pub use highscores::{BestScoreStore, JsonFileStore, MemoryStore, StoreError};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Logical tick rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;

    /// Board dimensions
    pub const BOARD_WIDTH: f32 = 400.0;
    pub const BOARD_HEIGHT: f32 = 600.0;
    pub const GROUND_HEIGHT: f32 = 50.0;
    /// Top of the ground strip; the bird dies below this
    pub const FLOOR_Y: f32 = BOARD_HEIGHT - GROUND_HEIGHT;

    /// Bird defaults - the bird never moves horizontally
    pub const BIRD_X: f32 = 50.0;
    pub const BIRD_SIZE: f32 = 50.0;
    pub const BIRD_START_Y: f32 = 250.0;

    /// Pipe pair geometry
    pub const PIPE_WIDTH: f32 = 60.0;
    pub const PIPE_GAP: f32 = 150.0;

    /// Coins (bonus and score) are square
    pub const COIN_SIZE: f32 = 30.0;

    /// Power-up countdown runs on its own 100ms clock
    pub const POWER_UP_PERIOD_TICKS: u64 = 6;
}

/// Convert a duration in seconds to whole logical ticks (at least one)
#[inline]
pub fn secs_to_ticks(secs: f32) -> u64 {
    ((secs * consts::TICK_RATE as f32).round() as u64).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secs_to_ticks() {
        assert_eq!(secs_to_ticks(2.0), 120);
        assert_eq!(secs_to_ticks(3.0), 180);
        assert_eq!(secs_to_ticks(0.1), 6);
        assert_eq!(secs_to_ticks(0.0), 1);
    }

    #[test]
    fn test_floor_position() {
        assert_eq!(consts::FLOOR_Y, 550.0);
    }
}
