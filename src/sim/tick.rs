//! Fixed timestep simulation tick
//!
//! Core game loop that advances the world deterministically. Within one tick
//! the order is always: physics, entity scroll, pipe collisions and scoring,
//! coin pickups, spawners, power-up countdown.

use glam::Vec2;
use rand::Rng;

use super::collision::{bird_rect, coin_rect, pipe_cleared, pipe_hits_bird};
use super::content::{CoinTier, PowerUpKind, random_duration};
use super::schedule::Timer;
use super::state::{
    ActivePowerUp, BonusCoin, GameEvent, GamePhase, Obstacle, ScoreCoin, World,
};
use crate::consts::*;
use crate::secs_to_ticks;
use crate::tuning::SecsRange;

/// Coins keep this far from the ceiling and the ground
const COIN_SPAWN_MARGIN: f32 = 50.0;

/// Slack for float drift in the 0.1s power-up countdown
const POWER_UP_EXPIRY_EPSILON: f32 = 1e-4;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Flap / start / restart (click, tap or space)
    pub jump: bool,
}

/// Advance the world by one logical tick
pub fn tick(world: &mut World, input: &TickInput) {
    // The celebration flag is purely visual and fades in every phase
    world.celebration_ticks = world.celebration_ticks.saturating_sub(1);

    if input.jump {
        jump(world);
    }

    if world.phase != GamePhase::Running {
        return;
    }

    world.time_ticks += 1;

    if !step_bird(world) {
        return;
    }
    advance_entities(world);
    if !resolve_obstacles(world) {
        return;
    }
    collect_coins(world);
    run_spawners(world);
    run_power_up_countdown(world);
}

/// Handle the single player action
pub fn jump(world: &mut World) {
    match world.phase {
        GamePhase::NotStarted => start_run(world),
        GamePhase::Running => {
            world.bird.vel = world.tuning.jump_impulse;
            world.emit(GameEvent::Flapped);
        }
        GamePhase::GameOver => {
            world.scheduler.clear();
            world.phase = GamePhase::NotStarted;
            log::info!("Back to title screen (best {})", world.best_score);
            world.emit(GameEvent::ReturnedToTitle);
        }
    }
}

fn start_run(world: &mut World) {
    world.reset_run();
    world.phase = GamePhase::Running;

    let now = world.time_ticks;
    let pipe_at = now + secs_to_ticks(world.pipe_interval_secs());
    world.scheduler.arm(Timer::Obstacle, pipe_at);
    let (coin_delay, bonus_delay) = (world.tuning.score_coin_delay, world.tuning.bonus_coin_delay);
    let coin_at = now + random_delay_ticks(world, coin_delay);
    world.scheduler.arm(Timer::ScoreCoin, coin_at);
    let bonus_at = now + random_delay_ticks(world, bonus_delay);
    world.scheduler.arm(Timer::BonusCoin, bonus_at);

    log::info!("Run started");
    world.emit(GameEvent::Started);
}

fn end_run(world: &mut World, cause: &str) {
    world.phase = GamePhase::GameOver;
    world.scheduler.clear();

    let new_best = world.score > world.best_score;
    if new_best {
        world.best_score = world.score;
    }
    log::info!(
        "Game over ({}) at tick {}: score {}, best {}",
        cause,
        world.time_ticks,
        world.score,
        world.best_score
    );
    world.emit(GameEvent::GameOver {
        score: world.score,
        new_best,
    });
}

/// Gravity, integration and the ceiling/ground check.
/// Bounds use the full sprite size; SizeReduction only shrinks hitboxes.
/// Returns false if the run ended.
fn step_bird(world: &mut World) -> bool {
    let prev_y = world.bird.y;
    world.bird.vel += world.tuning.gravity;
    let new_y = prev_y + world.bird.vel;

    let margin = world.tuning.hitbox_margin;
    let lowest = FLOOR_Y - BIRD_SIZE + margin;
    if new_y < -margin || new_y > lowest {
        // Death frame shows the last in-bounds position
        world.bird.y = prev_y;
        end_run(world, "out of bounds");
        return false;
    }

    world.bird.y = new_y;
    true
}

/// Scroll pipes and coins left, dropping whatever left the board
fn advance_entities(world: &mut World) {
    let speed = world.effective_speed();

    for obstacle in &mut world.obstacles {
        obstacle.x -= speed;
    }
    world.obstacles.retain(|o| o.x > -PIPE_WIDTH);

    for coin in &mut world.bonus_coins {
        coin.pos.x -= speed;
    }
    world.bonus_coins.retain(|c| c.pos.x > -COIN_SIZE);

    for coin in &mut world.score_coins {
        coin.pos.x -= speed;
    }
    world.score_coins.retain(|c| c.pos.x > -COIN_SIZE);
}

/// Pipe hits and pass scoring. Returns false if the run ended.
fn resolve_obstacles(world: &mut World) -> bool {
    let bird = bird_rect(world.bird.y, world.effective_bird_size());
    let margin = world.tuning.hitbox_margin;
    let invincible = world.is_active(PowerUpKind::Invincibility);

    let mut hit = false;
    let mut passes = 0;
    for obstacle in &mut world.obstacles {
        if !invincible && pipe_hits_bird(&bird, obstacle.x, obstacle.gap_top, margin) {
            hit = true;
        }
        if !obstacle.passed && pipe_cleared(obstacle.x) {
            obstacle.passed = true;
            passes += 1;
        }
    }

    for _ in 0..passes {
        let points = world.scaled_points(1);
        world.emit(GameEvent::PipePassed { points });
        award_points(world, points);
    }

    if hit {
        end_run(world, "hit a pipe");
        return false;
    }
    true
}

fn collect_coins(world: &mut World) {
    let bird = bird_rect(world.bird.y, world.effective_bird_size());

    let before = world.bonus_coins.len();
    world
        .bonus_coins
        .retain(|coin| !bird.overlaps(&coin_rect(coin.pos)));
    if world.bonus_coins.len() < before {
        let kind = PowerUpKind::random(&mut world.rng);
        let duration = random_duration(&mut world.rng, world.tuning.power_up_duration);
        activate_power_up(world, kind, duration);
    }

    let mut collected: Vec<CoinTier> = Vec::new();
    world.score_coins.retain(|coin| {
        if bird.overlaps(&coin_rect(coin.pos)) {
            collected.push(coin.tier);
            false
        } else {
            true
        }
    });
    for tier in collected {
        let points = world.scaled_points(tier.value());
        world.emit(GameEvent::ScoreCoinCollected { tier, points });
        award_points(world, points);
    }
}

/// Add points and fire the one-shot celebration on an exact hit
fn award_points(world: &mut World, points: u32) {
    world.score += points;
    if !world.celebrated && world.score == world.tuning.celebration_score {
        world.celebrated = true;
        world.celebration_ticks = secs_to_ticks(world.tuning.celebration_secs);
        log::info!("Celebration at score {}", world.score);
        world.emit(GameEvent::Celebration);
    }
}

/// Start (or replace) the active power-up
pub fn activate_power_up(world: &mut World, kind: PowerUpKind, duration_secs: f32) {
    if let Some(prev) = world.power_up {
        log::debug!("{} replaced by {}", prev.kind.name(), kind.name());
    }
    world.power_up = Some(ActivePowerUp {
        kind,
        remaining_secs: duration_secs,
    });
    let at = world.time_ticks + POWER_UP_PERIOD_TICKS;
    world.scheduler.arm(Timer::PowerUpCountdown, at);
    log::info!("Power-up {} for {:.1}s", kind.name(), duration_secs);
    world.emit(GameEvent::PowerUpActivated {
        kind,
        duration_secs,
    });
}

fn run_spawners(world: &mut World) {
    let now = world.time_ticks;

    if world.scheduler.due(Timer::Obstacle, now) {
        spawn_obstacle(world);
        let at = now + secs_to_ticks(world.pipe_interval_secs());
        world.scheduler.arm(Timer::Obstacle, at);
    }

    // The bonus timer only runs while nothing blocks it
    let bonus_blocked = world.power_up.is_some() || !world.bonus_coins.is_empty();
    if bonus_blocked {
        world.scheduler.disarm(Timer::BonusCoin);
    } else if !world.scheduler.is_armed(Timer::BonusCoin) {
        let delay = world.tuning.bonus_coin_delay;
        let at = now + random_delay_ticks(world, delay);
        world.scheduler.arm(Timer::BonusCoin, at);
    } else if world.scheduler.due(Timer::BonusCoin, now) {
        spawn_bonus_coin(world);
        world.scheduler.disarm(Timer::BonusCoin);
    }

    if world.scheduler.due(Timer::ScoreCoin, now) {
        spawn_score_coin(world);
        let delay = world.tuning.score_coin_delay;
        let at = now + random_delay_ticks(world, delay);
        world.scheduler.arm(Timer::ScoreCoin, at);
    }
}

fn run_power_up_countdown(world: &mut World) {
    let now = world.time_ticks;
    if !world.scheduler.due(Timer::PowerUpCountdown, now) {
        return;
    }

    let step = world.tuning.power_up_step_secs;
    let Some(power_up) = world.power_up.as_mut() else {
        world.scheduler.disarm(Timer::PowerUpCountdown);
        return;
    };

    power_up.remaining_secs -= step;
    if power_up.remaining_secs <= POWER_UP_EXPIRY_EPSILON {
        let kind = power_up.kind;
        world.power_up = None;
        world.scheduler.disarm(Timer::PowerUpCountdown);
        log::info!("Power-up {} expired", kind.name());
        world.emit(GameEvent::PowerUpExpired { kind });
    } else {
        world
            .scheduler
            .arm(Timer::PowerUpCountdown, now + POWER_UP_PERIOD_TICKS);
    }
}

fn random_delay_ticks(world: &mut World, range: SecsRange) -> u64 {
    secs_to_ticks(random_duration(&mut world.rng, range))
}

/// Spawn a pipe pair at the right edge with a random gap
pub fn spawn_obstacle(world: &mut World) {
    let gap_top = world
        .rng
        .random_range(world.tuning.min_gap_top..FLOOR_Y - PIPE_GAP);
    let id = world.next_entity_id();
    log::debug!("Spawn pipe {} gap_top={:.1}", id, gap_top);
    world.obstacles.push(Obstacle {
        id,
        x: BOARD_WIDTH,
        gap_top,
        passed: false,
    });
}

/// Spawn a bonus coin at the right edge
pub fn spawn_bonus_coin(world: &mut World) {
    let y = random_coin_y(world);
    let id = world.next_entity_id();
    log::debug!("Spawn bonus coin {} y={:.1}", id, y);
    world.bonus_coins.push(BonusCoin {
        id,
        pos: Vec2::new(BOARD_WIDTH, y),
    });
}

/// Spawn a weighted-tier score coin at the right edge
pub fn spawn_score_coin(world: &mut World) {
    let tier = CoinTier::random(&mut world.rng);
    let y = random_coin_y(world);
    let id = world.next_entity_id();
    log::debug!("Spawn {} coin {} y={:.1}", tier.name(), id, y);
    world.score_coins.push(ScoreCoin {
        id,
        pos: Vec2::new(BOARD_WIDTH, y),
        tier,
    });
}

fn random_coin_y(world: &mut World) -> f32 {
    world
        .rng
        .random_range(COIN_SPAWN_MARGIN..FLOOR_Y - COIN_SIZE - COIN_SPAWN_MARGIN)
}
