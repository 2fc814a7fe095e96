//! Core-facing game API
//!
//! Wraps the world with its two collaborators. A presentation layer calls
//! `on_jump` on input and `on_tick` at the logical rate, then draws the
//! returned snapshot.

use crate::audio::{CueSink, SoundCue};
use crate::highscores::BestScoreStore;
use crate::sim::{GameEvent, Snapshot, TickInput, World, jump, tick};

/// The simulation engine plus its best-score store and cue sink
pub struct Engine<S: BestScoreStore, C: CueSink> {
    world: World,
    store: S,
    sink: C,
}

impl<S: BestScoreStore, C: CueSink> Engine<S, C> {
    /// Build an engine, seeding the world's best score from the store
    pub fn new(mut world: World, mut store: S, sink: C) -> Self {
        let stored = store.read();
        world.best_score = world.best_score.max(stored);
        log::info!("Engine ready (best {})", world.best_score);
        Self { world, store, sink }
    }

    /// Player input: start, flap or restart depending on phase
    pub fn on_jump(&mut self) {
        jump(&mut self.world);
        self.dispatch_events();
    }

    /// Advance one logical tick
    pub fn on_tick(&mut self) -> Snapshot {
        tick(&mut self.world, &TickInput::default());
        self.dispatch_events();
        self.snapshot()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(&self.world)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn sink(&self) -> &C {
        &self.sink
    }

    /// Persist new bests and forward sound cues
    fn dispatch_events(&mut self) {
        for event in self.world.drain_events() {
            log::trace!("event {:?}", event);

            if let GameEvent::GameOver {
                score,
                new_best: true,
            } = event
            {
                if let Err(e) = self.store.write(score) {
                    log::warn!("Could not save best score {}: {}", score, e);
                }
            }

            if let Some(cue) = SoundCue::for_event(&event) {
                self.sink.play(cue);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::{MemoryStore, StoreError};
    use crate::sim::GamePhase;

    /// Store whose writes always fail
    struct BrokenStore;

    impl BestScoreStore for BrokenStore {
        fn read(&mut self) -> u32 {
            0
        }

        fn write(&mut self, _score: u32) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("disk full")))
        }
    }

    fn crash(engine: &mut Engine<impl BestScoreStore, impl CueSink>) {
        // Free fall into the ground
        for _ in 0..200 {
            engine.on_tick();
            if engine.world().phase == GamePhase::GameOver {
                return;
            }
        }
        panic!("bird never hit the ground");
    }

    #[test]
    fn test_reads_best_at_startup() {
        let engine = Engine::new(World::new(1), MemoryStore::with_best(33), Vec::new());
        assert_eq!(engine.snapshot().best_score, 33);
    }

    #[test]
    fn test_start_and_game_over_cues() {
        let mut engine = Engine::new(World::new(1), MemoryStore::new(), Vec::new());
        engine.on_jump();
        assert_eq!(engine.sink(), &vec![SoundCue::Start]);

        crash(&mut engine);
        assert_eq!(engine.sink().last(), Some(&SoundCue::GameOver));
    }

    #[test]
    fn test_best_written_only_when_beaten() {
        let mut world = World::new(1);
        world.best_score = 0;
        let mut engine = Engine::new(world, MemoryStore::with_best(5), Vec::new());

        // Score 0 never beats 5
        engine.on_jump();
        crash(&mut engine);
        assert_eq!(engine.store().writes, 0);
        assert_eq!(engine.snapshot().best_score, 5);
    }

    #[test]
    fn test_new_best_is_persisted() {
        let mut engine = Engine::new(World::new(1), MemoryStore::new(), Vec::new());
        engine.on_jump();
        engine.world.score = 9;
        crash(&mut engine);

        assert_eq!(engine.store().writes, 1);
        let mut store = engine.store().clone();
        assert_eq!(store.read(), 9);
        assert_eq!(engine.snapshot().best_score, 9);
    }

    #[test]
    fn test_store_failure_is_not_fatal() {
        let mut engine = Engine::new(World::new(1), BrokenStore, Vec::new());
        engine.on_jump();
        engine.world.score = 4;
        crash(&mut engine);
        assert_eq!(engine.world().phase, GamePhase::GameOver);
        assert_eq!(engine.snapshot().best_score, 4);

        // Restart still works
        engine.on_jump();
        engine.on_jump();
        assert_eq!(engine.world().phase, GamePhase::Running);
        assert_eq!(engine.world().score, 0);
    }

    #[test]
    fn test_on_tick_returns_current_snapshot() {
        let mut engine = Engine::new(World::new(1), MemoryStore::new(), Vec::new());
        engine.on_jump();
        let snap = engine.on_tick();
        assert_eq!(snap.phase, GamePhase::Running);
        assert_eq!(snap.time_ticks, 1);
        assert_eq!(snap, engine.snapshot());
    }
}
