//! Tick-based timer scheduler
//!
//! Spawners and the power-up countdown never run on their own clocks. Each
//! timer class holds the tick it next fires on; the tick pipeline polls them in
//! a fixed order and re-arms with `now + delay`.

use serde::{Deserialize, Serialize};

/// Timer classes driven by the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timer {
    Obstacle,
    BonusCoin,
    ScoreCoin,
    PowerUpCountdown,
}

impl Timer {
    pub const ALL: [Timer; 4] = [
        Timer::Obstacle,
        Timer::BonusCoin,
        Timer::ScoreCoin,
        Timer::PowerUpCountdown,
    ];

    fn index(self) -> usize {
        match self {
            Timer::Obstacle => 0,
            Timer::BonusCoin => 1,
            Timer::ScoreCoin => 2,
            Timer::PowerUpCountdown => 3,
        }
    }
}

/// Next-fire tick per timer class (`None` = unarmed)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheduler {
    next: [Option<u64>; 4],
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) a timer to fire at tick `at`
    pub fn arm(&mut self, timer: Timer, at: u64) {
        self.next[timer.index()] = Some(at);
    }

    pub fn disarm(&mut self, timer: Timer) {
        self.next[timer.index()] = None;
    }

    pub fn next_fire(&self, timer: Timer) -> Option<u64> {
        self.next[timer.index()]
    }

    pub fn is_armed(&self, timer: Timer) -> bool {
        self.next_fire(timer).is_some()
    }

    /// Whether an armed timer has reached its fire tick
    pub fn due(&self, timer: Timer, now: u64) -> bool {
        self.next_fire(timer).is_some_and(|at| now >= at)
    }

    /// Disarm everything
    pub fn clear(&mut self) {
        self.next = [None; 4];
    }

    pub fn any_armed(&self) -> bool {
        Timer::ALL.iter().any(|t| self.is_armed(*t))
    }
}
