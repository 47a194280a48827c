//! Difficulty presets
//!
//! The host stores the player's choice; the core only turns it into
//! paddle width, speed cap and score multiplier.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "medium" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Paddle width for this level (20% wider on easy, 20% narrower on hard)
    pub fn paddle_width(&self) -> f32 {
        match self {
            Difficulty::Easy => PADDLE_WIDTH * 1.2,
            Difficulty::Normal => PADDLE_WIDTH,
            Difficulty::Hard => PADDLE_WIDTH * 0.8,
        }
    }

    /// Adjust a base speed cap
    pub fn adjusted_speed(&self, base_speed: f32) -> f32 {
        match self {
            Difficulty::Easy => base_speed - 15.0,
            Difficulty::Normal => base_speed,
            Difficulty::Hard => base_speed + 15.0,
        }
    }

    /// Score multiplier applied per destroyed brick
    pub fn score_multiplier(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.8,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.2,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_round_trips_names() {
        for d in Difficulty::ALL {
            assert_eq!(Difficulty::from_str(d.as_str()), Some(d));
        }
        assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("nightmare"), None);
    }

    #[test]
    fn test_difficulty_adjustments() {
        assert!((Difficulty::Easy.paddle_width() - 120.0).abs() < 0.001);
        assert!((Difficulty::Hard.paddle_width() - 80.0).abs() < 0.001);
        assert_eq!(Difficulty::Easy.adjusted_speed(40.0), 25.0);
        assert_eq!(Difficulty::Hard.adjusted_speed(40.0), 55.0);
        assert_eq!(Difficulty::Normal.score_multiplier(), 1.0);
        assert!(Difficulty::Hard.score_multiplier() > Difficulty::Easy.score_multiplier());
    }
}
