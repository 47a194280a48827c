//! Configuration errors
//!
//! The simulation itself never fails: losses and wins are state transitions.
//! Bad configuration is rejected once, up front.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("play field must have positive size, got {width}x{height}")]
    InvalidField { width: f32, height: f32 },

    #[error("{name} must be positive and finite, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("extra ball speed cap {cap} is below the main ball cap {max_speed}")]
    ExtraBallCapTooLow { cap: f32, max_speed: f32 },

    #[error("ball spawn acceleration ({x}, {y}) must be finite")]
    NonFiniteSpawnAccel { x: f32, y: f32 },

    #[error("{slots} extra ball slots requested, at most {max} supported")]
    TooManyExtraBalls { slots: usize, max: usize },

    #[error("brick grid is empty")]
    EmptyBrickGrid,

    #[error("brick grid needs at least one brick per row")]
    EmptyBrickRow,

    #[error("brick grid bottom {grid_bottom} overlaps paddle top {paddle_top}")]
    GridOverlapsPaddle { grid_bottom: f32, paddle_top: f32 },

    #[error("paddle width {paddle_width} exceeds field width {field_width}")]
    PaddleTooWide { paddle_width: f32, field_width: f32 },

    #[error("paddle at y={paddle_y} does not fit inside field height {field_height}")]
    PaddleOutsideField { paddle_y: f32, field_height: f32 },

    #[error("ball spawn point ({x}, {y}) lies outside the play field")]
    SpawnOutsideField { x: f32, y: f32 },

    #[error("win threshold {threshold} outside 1..={total}")]
    InvalidWinThreshold { threshold: usize, total: usize },

    #[error("score multiplier must be finite and non-negative, got {0}")]
    InvalidScoreMultiplier(f32),

    #[error("at least one life is required")]
    NoLives,
}

impl ConfigError {
    /// Short machine-friendly code for host-side logging
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::InvalidField { .. } => "INVALID_FIELD",
            ConfigError::NonPositive { .. } => "NON_POSITIVE",
            ConfigError::ExtraBallCapTooLow { .. } => "EXTRA_BALL_CAP",
            ConfigError::NonFiniteSpawnAccel { .. } => "SPAWN_ACCEL",
            ConfigError::TooManyExtraBalls { .. } => "EXTRA_BALL_SLOTS",
            ConfigError::EmptyBrickGrid => "EMPTY_GRID",
            ConfigError::EmptyBrickRow => "EMPTY_ROW",
            ConfigError::GridOverlapsPaddle { .. } => "GRID_OVERLAP",
            ConfigError::PaddleTooWide { .. } => "PADDLE_WIDTH",
            ConfigError::PaddleOutsideField { .. } => "PADDLE_Y",
            ConfigError::SpawnOutsideField { .. } => "SPAWN_POINT",
            ConfigError::InvalidWinThreshold { .. } => "WIN_THRESHOLD",
            ConfigError::InvalidScoreMultiplier(_) => "SCORE_MULTIPLIER",
            ConfigError::NoLives => "NO_LIVES",
        }
    }
}
