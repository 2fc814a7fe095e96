//! Best score persistence
//!
//! The engine reads the stored best once at startup and writes it back when a
//! run beats it. Stores must never panic; failures are reported and the game
//! carries on.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors a store can report on write
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("best score I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("best score encoding failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Storage backend for the best score
pub trait BestScoreStore {
    /// Stored best, or 0 if nothing usable is stored
    fn read(&mut self) -> u32;

    /// Persist a new best
    fn write(&mut self, score: u32) -> Result<(), StoreError>;
}

/// In-process store (tests, headless runs without a file)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    best: u32,
    /// Number of successful writes
    pub writes: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(best: u32) -> Self {
        Self { best, writes: 0 }
    }
}

impl BestScoreStore for MemoryStore {
    fn read(&mut self) -> u32 {
        self.best
    }

    fn write(&mut self, score: u32) -> Result<(), StoreError> {
        self.best = score;
        self.writes += 1;
        Ok(())
    }
}

/// On-disk document
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BestScoreFile {
    best: u32,
}

/// JSON file store: `{ "best": n }`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BestScoreStore for JsonFileStore {
    fn read(&mut self) -> u32 {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No best score at {}, starting fresh", self.path.display());
                return 0;
            }
            Err(e) => {
                log::warn!("Failed to read {}: {}", self.path.display(), e);
                return 0;
            }
        };

        match serde_json::from_str::<BestScoreFile>(&json) {
            Ok(file) => {
                log::info!("Loaded best score {}", file.best);
                file.best
            }
            Err(e) => {
                log::warn!("Corrupt best score file {}: {}", self.path.display(), e);
                0
            }
        }
    }

    fn write(&mut self, score: u32) -> Result<(), StoreError> {
        let json = serde_json::to_string(&BestScoreFile { best: score })?;
        // Write beside the target then swap it in
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        log::info!("Best score {} saved", score);
        Ok(())
    }
}
