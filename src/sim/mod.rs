//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Timers advance on the logical tick counter, never wall-clock time
//! - No rendering, audio or storage dependencies

pub mod collision;
pub mod content;
pub mod schedule;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{Rect, bird_rect, coin_rect, pipe_cleared, pipe_hits_bird};
pub use content::{CoinTier, PowerUpKind};
pub use schedule::{Scheduler, Timer};
pub use snapshot::Snapshot;
pub use state::{
    ActivePowerUp, Bird, BonusCoin, GameEvent, GamePhase, Obstacle, ScoreCoin, World,
};
pub use tick::{
    TickInput, activate_power_up, jump, spawn_bonus_coin, spawn_obstacle, spawn_score_coin, tick,
};
