//! Power-up and coin tier tables
//!
//! Closed enums with their display and balance data resolved by match.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::SecsRange;

/// Power-up types granted by bonus coins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Pipe hits are ignored
    Invincibility,
    /// Scroll speed halved, pipes spawn less often
    SlowMotion,
    /// Smaller bird hitbox
    SizeReduction,
    /// Pipe passes and score coins are worth double
    DoublePoints,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::Invincibility,
        PowerUpKind::SlowMotion,
        PowerUpKind::SizeReduction,
        PowerUpKind::DoublePoints,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PowerUpKind::Invincibility => "Invincibility",
            PowerUpKind::SlowMotion => "Slow Motion",
            PowerUpKind::SizeReduction => "Size Reduction",
            PowerUpKind::DoublePoints => "Double Points",
        }
    }

    /// HUD color (0xRRGGBB)
    pub fn color(&self) -> u32 {
        match self {
            PowerUpKind::Invincibility => 0xFFD700,
            PowerUpKind::SlowMotion => 0x00BFFF,
            PowerUpKind::SizeReduction => 0xFF69B4,
            PowerUpKind::DoublePoints => 0x32CD32,
        }
    }

    /// Uniform pick among all kinds
    pub fn random(rng: &mut Pcg32) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Draw a uniform duration from `[min, max)`
pub fn random_duration(rng: &mut Pcg32, range: SecsRange) -> f32 {
    rng.random_range(range.min..range.max)
}

/// Score coin tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoinTier {
    Bronze,
    Silver,
    Gold,
}

impl CoinTier {
    pub const ALL: [CoinTier; 3] = [CoinTier::Bronze, CoinTier::Silver, CoinTier::Gold];

    /// Points awarded on pickup (before DoublePoints)
    pub fn value(&self) -> u32 {
        match self {
            CoinTier::Bronze => 1,
            CoinTier::Silver => 2,
            CoinTier::Gold => 3,
        }
    }

    /// Spawn weight out of 100
    pub fn weight(&self) -> u32 {
        match self {
            CoinTier::Bronze => 60,
            CoinTier::Silver => 30,
            CoinTier::Gold => 10,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CoinTier::Bronze => "Bronze",
            CoinTier::Silver => "Silver",
            CoinTier::Gold => "Gold",
        }
    }

    pub fn color(&self) -> u32 {
        match self {
            CoinTier::Bronze => 0xCD7F32,
            CoinTier::Silver => 0xC0C0C0,
            CoinTier::Gold => 0xFFD700,
        }
    }

    /// Map a roll in `0..100` onto the cumulative weight table
    pub fn from_roll(roll: u32) -> Self {
        let mut acc = 0;
        for tier in Self::ALL {
            acc += tier.weight();
            if roll < acc {
                return tier;
            }
        }
        CoinTier::Gold
    }

    /// Weighted 60/30/10 draw
    pub fn random(rng: &mut Pcg32) -> Self {
        Self::from_roll(rng.random_range(0..100))
    }
}
