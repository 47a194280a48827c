//! Brick Breaker - physics and collision core for a 2D brick breaker
//!
//! Core modules:
//! - `sim`: Tick-driven simulation (integration, collisions, extra balls, rounds)
//! - `settings`: Difficulty presets the host picks between rounds
//! - `highscores`: Recent results and best score, serialized by the host
//! - `error`: Configuration errors raised at initialization

pub mod error;
pub mod highscores;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use highscores::ScoreHistory;
pub use settings::Difficulty;

/// Game configuration constants
pub mod consts {
    /// Converts elapsed frame milliseconds to engine time units
    pub const TIME_SCALE: f32 = 0.15 / 16.0;

    /// Default play field (portrait phone layout)
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 800.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Base speed cap before difficulty adjustment
    pub const BALL_MAX_SPEED: f32 = 40.0;
    /// Main ball spawn point and initial acceleration
    pub const BALL_SPAWN_X: f32 = 100.0;
    pub const BALL_SPAWN_Y: f32 = 450.0;
    pub const BALL_SPAWN_AX: f32 = 0.5;
    pub const BALL_SPAWN_AY: f32 = 1.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 40.0;
    /// Paddle top sits this far above the bottom edge
    pub const PADDLE_BOTTOM_MARGIN: f32 = 100.0;

    /// Brick wall defaults
    pub const TOTAL_BRICKS: usize = 60;
    pub const BRICK_ROW_LENGTH: usize = 12;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_START_Y: f32 = 100.0;
    pub const BRICK_SCORE: u64 = 100;

    /// Session defaults
    pub const START_LIVES: u8 = 3;
    pub const EXTRA_BALL_SLOTS: usize = 9;
    /// Upper bound accepted for a custom slot count
    pub const MAX_EXTRA_BALL_SLOTS: usize = 64;
}
