//! Demo player
//!
//! Keeps the bird near the centre of the next gap. Good enough to show the
//! game off in headless runs; it makes no attempt to chase coins.

use crate::consts::*;
use crate::sim::{GamePhase, World};

/// Flap when the bird sinks this far below its target
const TARGET_SLACK: f32 = 8.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot;

impl Autopilot {
    /// Height the bird's centre should track
    pub fn target_y(world: &World) -> f32 {
        world
            .obstacles
            .iter()
            .filter(|o| o.x + PIPE_WIDTH >= BIRD_X)
            .min_by(|a, b| a.x.total_cmp(&b.x))
            .map(|o| o.gap_top + PIPE_GAP / 2.0)
            .unwrap_or(FLOOR_Y / 2.0)
    }

    /// Decide whether to flap this tick
    pub fn should_jump(&self, world: &World) -> bool {
        match world.phase {
            GamePhase::Running => {
                let center = world.bird.y + world.effective_bird_size() / 2.0;
                // Peek one tick ahead so a flap lands before the bird overshoots
                let next_center = center + world.bird.vel + world.tuning.gravity;
                next_center > Self::target_y(world) + TARGET_SLACK && world.bird.vel >= 0.0
            }
            GamePhase::NotStarted | GamePhase::GameOver => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Bird, Obstacle, jump};

    fn running() -> World {
        let mut world = World::new(3);
        jump(&mut world);
        world
    }

    #[test]
    fn test_targets_board_centre_without_pipes() {
        let world = running();
        assert_eq!(Autopilot::target_y(&world), 275.0);
    }

    #[test]
    fn test_targets_nearest_gap_ahead() {
        let mut world = running();
        world.obstacles.push(Obstacle {
            id: 1,
            x: -20.0,
            gap_top: 50.0,
            passed: true,
        });
        world.obstacles.push(Obstacle {
            id: 2,
            x: 300.0,
            gap_top: 300.0,
            passed: false,
        });
        world.obstacles.push(Obstacle {
            id: 3,
            x: 120.0,
            gap_top: 100.0,
            passed: false,
        });
        assert_eq!(Autopilot::target_y(&world), 175.0);
    }

    #[test]
    fn test_flaps_when_falling_below_target() {
        let mut world = running();
        world.bird = Bird { y: 300.0, vel: 1.0 };
        assert!(Autopilot.should_jump(&world));
    }

    #[test]
    fn test_holds_when_above_target_or_rising() {
        let mut world = running();
        world.bird = Bird { y: 150.0, vel: 2.0 };
        assert!(!Autopilot.should_jump(&world));

        world.bird = Bird { y: 300.0, vel: -4.0 };
        assert!(!Autopilot.should_jump(&world));
    }

    #[test]
    fn test_never_flaps_outside_a_run() {
        let mut world = World::new(3);
        world.bird = Bird { y: 400.0, vel: 5.0 };
        assert!(!Autopilot.should_jump(&world));
    }
}
