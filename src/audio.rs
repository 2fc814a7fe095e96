//! Sound cues
//!
//! The simulation only names what should be heard. Playback belongs to
//! whatever implements `CueSink`, and a sink that cannot play simply drops
//! the cue.

use serde::{Deserialize, Serialize};

use crate::sim::GameEvent;

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    /// Run started
    Start,
    /// Run ended
    GameOver,
    /// Bonus or score coin collected
    Bonus,
    /// Bird cleared a pipe
    PipePass,
    /// Celebration score reached
    Celebration,
}

impl SoundCue {
    /// Cue to play for a simulation event, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Started => Some(SoundCue::Start),
            GameEvent::GameOver { .. } => Some(SoundCue::GameOver),
            GameEvent::PowerUpActivated { .. } | GameEvent::ScoreCoinCollected { .. } => {
                Some(SoundCue::Bonus)
            }
            GameEvent::PipePassed { .. } => Some(SoundCue::PipePass),
            GameEvent::Celebration => Some(SoundCue::Celebration),
            GameEvent::Flapped | GameEvent::PowerUpExpired { .. } | GameEvent::ReturnedToTitle => {
                None
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::Start => "start",
            SoundCue::GameOver => "gameOver",
            SoundCue::Bonus => "bonus",
            SoundCue::PipePass => "pipePass",
            SoundCue::Celebration => "celebration",
        }
    }
}

/// Fire-and-forget cue receiver
pub trait CueSink {
    fn play(&mut self, cue: SoundCue);
}

/// Records cues in order
impl CueSink for Vec<SoundCue> {
    fn play(&mut self, cue: SoundCue) {
        self.push(cue);
    }
}

/// Logs cues instead of playing them (headless runs)
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl CueSink for LogSink {
    fn play(&mut self, cue: SoundCue) {
        log::debug!("♪ {}", cue.as_str());
    }
}

/// Drops every cue
#[derive(Debug, Clone, Copy, Default)]
pub struct MutedSink;

impl CueSink for MutedSink {
    fn play(&mut self, _cue: SoundCue) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{CoinTier, PowerUpKind};

    #[test]
    fn test_event_cue_mapping() {
        assert_eq!(SoundCue::for_event(&GameEvent::Started), Some(SoundCue::Start));
        assert_eq!(
            SoundCue::for_event(&GameEvent::PipePassed { points: 1 }),
            Some(SoundCue::PipePass)
        );
        assert_eq!(
            SoundCue::for_event(&GameEvent::ScoreCoinCollected {
                tier: CoinTier::Gold,
                points: 3
            }),
            Some(SoundCue::Bonus)
        );
        assert_eq!(
            SoundCue::for_event(&GameEvent::PowerUpActivated {
                kind: PowerUpKind::SlowMotion,
                duration_secs: 4.0
            }),
            Some(SoundCue::Bonus)
        );
        assert_eq!(
            SoundCue::for_event(&GameEvent::GameOver {
                score: 3,
                new_best: false
            }),
            Some(SoundCue::GameOver)
        );
        assert_eq!(SoundCue::for_event(&GameEvent::Flapped), None);
        assert_eq!(
            SoundCue::for_event(&GameEvent::PowerUpExpired {
                kind: PowerUpKind::DoublePoints
            }),
            None
        );
    }

    #[test]
    fn test_vec_sink_records() {
        let mut sink: Vec<SoundCue> = Vec::new();
        sink.play(SoundCue::Start);
        sink.play(SoundCue::Celebration);
        assert_eq!(sink, vec![SoundCue::Start, SoundCue::Celebration]);
    }
}
