//! Read-only view of the world for renderers

use glam::Vec2;
use serde::Serialize;

use super::content::{CoinTier, PowerUpKind};
use super::state::{GamePhase, World};
use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirdView {
    pub x: f32,
    pub y: f32,
    /// Effective (possibly reduced) size
    pub size: f32,
    pub velocity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObstacleView {
    pub x: f32,
    pub width: f32,
    pub gap_top: f32,
    pub gap_height: f32,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoinView {
    pub pos: Vec2,
    pub size: f32,
    /// `None` for bonus coins
    pub tier: Option<CoinTier>,
    pub color: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerUpView {
    pub kind: PowerUpKind,
    pub name: &'static str,
    pub color: u32,
    pub remaining_secs: f32,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub time_ticks: u64,
    pub bird: BirdView,
    pub obstacles: Vec<ObstacleView>,
    pub bonus_coins: Vec<CoinView>,
    pub score_coins: Vec<CoinView>,
    pub score: u32,
    pub best_score: u32,
    pub power_up: Option<PowerUpView>,
    pub celebrating: bool,
}

/// Bonus coins render in a neutral mystery color
const BONUS_COIN_COLOR: u32 = 0x9370DB;

impl Snapshot {
    pub fn of(world: &World) -> Self {
        Self {
            phase: world.phase,
            time_ticks: world.time_ticks,
            bird: BirdView {
                x: BIRD_X,
                y: world.bird.y,
                size: world.effective_bird_size(),
                velocity: world.bird.vel,
            },
            obstacles: world
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    x: o.x,
                    width: PIPE_WIDTH,
                    gap_top: o.gap_top,
                    gap_height: PIPE_GAP,
                    passed: o.passed,
                })
                .collect(),
            bonus_coins: world
                .bonus_coins
                .iter()
                .map(|c| CoinView {
                    pos: c.pos,
                    size: COIN_SIZE,
                    tier: None,
                    color: BONUS_COIN_COLOR,
                })
                .collect(),
            score_coins: world
                .score_coins
                .iter()
                .map(|c| CoinView {
                    pos: c.pos,
                    size: COIN_SIZE,
                    tier: Some(c.tier),
                    color: c.tier.color(),
                })
                .collect(),
            score: world.score,
            best_score: world.best_score,
            power_up: world.power_up.map(|p| PowerUpView {
                kind: p.kind,
                name: p.kind.name(),
                color: p.kind.color(),
                remaining_secs: p.remaining_secs,
            }),
            celebrating: world.celebrating(),
        }
    }
}
