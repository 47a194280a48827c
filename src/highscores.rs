//! Recent results and best score
//!
//! The core never touches storage; the host serializes this with
//! `to_json`/`from_json` and keeps it wherever it likes.

use serde::{Deserialize, Serialize};

use crate::sim::GameEvent;

/// Maximum number of recent results to keep
pub const MAX_RECENT_SCORES: usize = 10;

/// A single finished round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Final score
    pub score: u64,
    /// Round reached
    pub round: u32,
    /// Whether the round was cleared
    pub won: bool,
    /// Unix timestamp (ms) supplied by the host
    pub timestamp: f64,
}

/// Recent results (newest first) plus the best score seen
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScoreHistory {
    pub recent: Vec<ScoreEntry>,
    #[serde(default)]
    pub high_score: u64,
}

impl ScoreHistory {
    pub fn new() -> Self {
        Self {
            recent: Vec::new(),
            high_score: 0,
        }
    }

    /// Record a finished round. Returns true if it set a new high score.
    pub fn record(&mut self, score: u64, round: u32, won: bool, timestamp: f64) -> bool {
        self.recent.insert(
            0,
            ScoreEntry {
                score,
                round,
                won,
                timestamp,
            },
        );
        self.recent.truncate(MAX_RECENT_SCORES);

        if score > self.high_score {
            self.high_score = score;
            true
        } else {
            false
        }
    }

    /// Record the payload of a terminal event; other events are ignored
    pub fn record_event(&mut self, event: &GameEvent, timestamp: f64) -> Option<bool> {
        match *event {
            GameEvent::RoundWon { score, round } => Some(self.record(score, round, true, timestamp)),
            GameEvent::RoundLost { score, round } => {
                Some(self.record(score, round, false, timestamp))
            }
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }

    /// Most recent result (if any)
    pub fn latest(&self) -> Option<&ScoreEntry> {
        self.recent.first()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut history: ScoreHistory = serde_json::from_str(json)?;
        history.recent.truncate(MAX_RECENT_SCORES);
        let best = history.recent.iter().map(|e| e.score).max().unwrap_or(0);
        history.high_score = history.high_score.max(best);
        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_newest_first_and_caps_length() {
        let mut history = ScoreHistory::new();
        for i in 0..15u64 {
            history.record(i * 10, 1, false, i as f64);
        }
        assert_eq!(history.recent.len(), MAX_RECENT_SCORES);
        assert_eq!(history.latest().map(|e| e.score), Some(140));
        assert_eq!(history.recent.last().map(|e| e.score), Some(50));
        assert_eq!(history.high_score, 140);
    }

    #[test]
    fn test_high_score_only_on_improvement() {
        let mut history = ScoreHistory::new();
        assert!(history.record(500, 2, true, 0.0));
        assert!(!history.record(300, 3, false, 1.0));
        assert!(!history.record(500, 3, false, 2.0));
        assert_eq!(history.high_score, 500);
    }

    #[test]
    fn test_record_event_filters_terminal_events() {
        let mut history = ScoreHistory::new();
        assert_eq!(history.record_event(&GameEvent::PaddleHit, 0.0), None);
        assert_eq!(
            history.record_event(&GameEvent::RoundLost { score: 1200, round: 2 }, 0.0),
            Some(true)
        );
        let entry = history.latest().cloned();
        assert_eq!(
            entry,
            Some(ScoreEntry {
                score: 1200,
                round: 2,
                won: false,
                timestamp: 0.0
            })
        );
    }

    #[test]
    fn test_json_round_trip_repairs_high_score() {
        let json = r#"{"recent":[{"score":900,"round":4,"won":false,"timestamp":1.0}]}"#;
        let history = ScoreHistory::from_json(json).unwrap();
        assert_eq!(history.high_score, 900);

        let back = ScoreHistory::from_json(&history.to_json().unwrap()).unwrap();
        assert_eq!(back.recent, history.recent);
        assert!(ScoreHistory::from_json("not json").is_err());
    }
}
