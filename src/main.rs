//! Flappy Bird headless runner
//!
//! Plays the game with the autopilot at the logical tick rate (without
//! sleeping), restarting after every crash, then prints the final frame as
//! JSON. Environment:
//! - `FLAPPY_SEED`: RNG seed (default 42)
//! - `FLAPPY_TICKS`: ticks to simulate (default one minute of play)
//! - `FLAPPY_TUNING`: path to a JSON tuning override
//! - `FLAPPY_BEST_FILE`: path of the best-score file (in-memory if unset)

fn main() {
    use flappy_bird::sim::World;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    env_logger::init();
    log::info!("Flappy Bird (headless) starting...");

    let seed = env_or("FLAPPY_SEED", 42u64);
    let ticks = env_or("FLAPPY_TICKS", 60 * flappy_bird::consts::TICK_RATE as u64);
    let tuning = load_tuning();

    let world = match World::with_rng(Pcg32::seed_from_u64(seed), tuning) {
        Ok(world) => world,
        Err(e) => {
            log::warn!("{}; using default tuning", e);
            World::new(seed)
        }
    };

    let snapshot = match std::env::var("FLAPPY_BEST_FILE") {
        Ok(path) => {
            let store = flappy_bird::JsonFileStore::new(path);
            run(flappy_bird::Engine::new(world, store, flappy_bird::audio::LogSink), ticks)
        }
        Err(_) => {
            let store = flappy_bird::MemoryStore::new();
            run(flappy_bird::Engine::new(world, store, flappy_bird::audio::LogSink), ticks)
        }
    };

    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to encode snapshot: {}", e),
    }
}

fn run<S, C>(mut engine: flappy_bird::Engine<S, C>, ticks: u64) -> flappy_bird::sim::Snapshot
where
    S: flappy_bird::BestScoreStore,
    C: flappy_bird::CueSink,
{
    use flappy_bird::autopilot::Autopilot;
    use flappy_bird::sim::GamePhase;

    let pilot = Autopilot;
    let mut runs = 0u32;

    for _ in 0..ticks {
        match engine.world().phase {
            GamePhase::NotStarted => {
                runs += 1;
                engine.on_jump();
            }
            GamePhase::GameOver => {
                log::info!("Run {} scored {}", runs, engine.world().score);
                engine.on_jump();
            }
            GamePhase::Running => {
                if pilot.should_jump(engine.world()) {
                    engine.on_jump();
                }
            }
        }
        engine.on_tick();
    }

    let snapshot = engine.snapshot();
    log::info!(
        "Finished after {} run(s): score {}, best {}",
        runs,
        snapshot.score,
        snapshot.best_score
    );
    snapshot
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                log::warn!("Invalid {} '{}', using default", key, raw);
                default
            }
        },
        Err(_) => default,
    }
}

fn load_tuning() -> flappy_bird::Tuning {
    let Ok(path) = std::env::var("FLAPPY_TUNING") else {
        return flappy_bird::Tuning::default();
    };
    match flappy_bird::Tuning::load(&path) {
        Ok(tuning) => {
            log::info!("Loaded tuning from {}", path);
            tuning
        }
        Err(e) => {
            log::warn!("{}; using default tuning", e);
            flappy_bird::Tuning::default()
        }
    }
}
