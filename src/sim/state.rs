//! Game state and core simulation types
//!
//! One `World` per process. It owns every entity, the timer scheduler and the
//! seeded RNG, so a run is fully reproducible from its seed and inputs.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::content::{CoinTier, PowerUpKind};
use super::schedule::Scheduler;
use crate::consts::*;
use crate::tuning::{Tuning, TuningError};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the first flap
    NotStarted,
    /// Active gameplay
    Running,
    /// Run ended, waiting for the restart flap
    GameOver,
}

/// Things that happened during a stimulus, drained by the engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Flapped,
    PipePassed { points: u32 },
    ScoreCoinCollected { tier: CoinTier, points: u32 },
    PowerUpActivated { kind: PowerUpKind, duration_secs: f32 },
    PowerUpExpired { kind: PowerUpKind },
    Celebration,
    GameOver { score: u32, new_best: bool },
    ReturnedToTitle,
}

/// The player's bird
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Top edge (px, y grows downward)
    pub y: f32,
    /// Vertical velocity (px/tick, negative = up)
    pub vel: f32,
}

impl Default for Bird {
    fn default() -> Self {
        Self {
            y: BIRD_START_Y,
            vel: 0.0,
        }
    }
}

/// A pipe pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Left edge
    pub x: f32,
    /// Top of the gap
    pub gap_top: f32,
    /// Set once when the bird clears the pipe
    pub passed: bool,
}

/// Bonus coin granting a random power-up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusCoin {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
}

/// Tiered score coin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreCoin {
    pub id: u32,
    pub pos: Vec2,
    pub tier: CoinTier,
}

/// The currently running power-up
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivePowerUp {
    pub kind: PowerUpKind,
    pub remaining_secs: f32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct World {
    /// Balance values for this session, validated at construction
    pub(crate) tuning: Tuning,
    /// Injected RNG; every random draw goes through it
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Ticks elapsed in the current run
    pub time_ticks: u64,
    pub bird: Bird,
    pub score: u32,
    /// Best score seen this process (seeded from the store)
    pub best_score: u32,
    /// Active pipes (ordered by id)
    pub obstacles: Vec<Obstacle>,
    /// At most one entry
    pub bonus_coins: Vec<BonusCoin>,
    pub score_coins: Vec<ScoreCoin>,
    pub power_up: Option<ActivePowerUp>,
    /// Spawner and countdown timers
    pub scheduler: Scheduler,
    /// Celebration already fired this run
    pub celebrated: bool,
    /// Ticks left on the celebration flag
    pub celebration_ticks: u64,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl World {
    /// Create a world with default tuning and an RNG seeded from `seed`
    pub fn new(seed: u64) -> Self {
        Self::build(Pcg32::seed_from_u64(seed), Tuning::default())
    }

    /// Create a world around an injected RNG.
    /// Fails if `tuning` would let a random draw or timer misbehave.
    pub fn with_rng(rng: Pcg32, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::build(rng, tuning))
    }

    fn build(rng: Pcg32, tuning: Tuning) -> Self {
        Self {
            tuning,
            rng,
            phase: GamePhase::NotStarted,
            time_ticks: 0,
            bird: Bird::default(),
            score: 0,
            best_score: 0,
            obstacles: Vec::new(),
            bonus_coins: Vec::new(),
            score_coins: Vec::new(),
            power_up: None,
            scheduler: Scheduler::new(),
            celebrated: false,
            celebration_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Whether `kind` is the active power-up
    pub fn is_active(&self, kind: PowerUpKind) -> bool {
        self.power_up.is_some_and(|p| p.kind == kind)
    }

    /// Scroll speed after SlowMotion
    pub fn effective_speed(&self) -> f32 {
        if self.is_active(PowerUpKind::SlowMotion) {
            self.tuning.scroll_speed * self.tuning.slow_motion_factor
        } else {
            self.tuning.scroll_speed
        }
    }

    /// Hitbox size after SizeReduction
    pub fn effective_bird_size(&self) -> f32 {
        if self.is_active(PowerUpKind::SizeReduction) {
            BIRD_SIZE * self.tuning.size_reduction_scale
        } else {
            BIRD_SIZE
        }
    }

    /// Pipe spawn interval after SlowMotion
    pub fn pipe_interval_secs(&self) -> f32 {
        if self.is_active(PowerUpKind::SlowMotion) {
            self.tuning.slow_pipe_interval_secs
        } else {
            self.tuning.pipe_interval_secs
        }
    }

    /// Points for a base award after DoublePoints
    pub fn scaled_points(&self, base: u32) -> u32 {
        if self.is_active(PowerUpKind::DoublePoints) {
            base * 2
        } else {
            base
        }
    }

    pub fn celebrating(&self) -> bool {
        self.celebration_ticks > 0
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Wipe everything a run owns, keeping best score, tuning and RNG
    pub fn reset_run(&mut self) {
        self.time_ticks = 0;
        self.bird = Bird::default();
        self.score = 0;
        self.obstacles.clear();
        self.bonus_coins.clear();
        self.score_coins.clear();
        self.power_up = None;
        self.scheduler.clear();
        self.celebrated = false;
        self.celebration_ticks = 0;
    }
}
