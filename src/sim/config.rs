//! Simulation configuration
//!
//! Plain values handed in by the host. Validated once at initialization so
//! the tick loop never has to second-guess them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::settings::Difficulty;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Play field size (y grows downward)
    pub width: f32,
    pub height: f32,

    /// Ball radius shared by every ball
    pub ball_radius: f32,
    /// Main ball spawn point and initial acceleration
    pub ball_spawn: Vec2,
    pub ball_spawn_accel: Vec2,
    /// Speed cap for the main ball (difficulty adjusted)
    pub max_speed: f32,
    /// Looser cap for extra balls so they can't accelerate forever
    pub extra_ball_max_speed: f32,

    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Paddle top edge
    pub paddle_y: f32,

    pub total_bricks: usize,
    pub bricks_per_row: usize,
    pub brick_height: f32,
    pub brick_top: f32,
    /// Destroyed bricks needed to clear a round
    pub win_threshold: usize,

    pub per_brick_score: u64,
    pub score_multiplier: f32,

    pub lives: u8,
    /// Extra-ball power-ups owned by the player
    pub power_ups: u32,
    pub extra_ball_slots: usize,

    /// Elapsed milliseconds to engine time units
    pub time_scale: f32,
    /// RNG seed for extra-ball spread
    pub seed: u64,
    pub difficulty: Difficulty,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::for_difficulty(Difficulty::Normal)
    }
}

impl SimConfig {
    /// Default field with the given difficulty applied
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        let mut config = Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            ball_radius: BALL_RADIUS,
            ball_spawn: Vec2::new(BALL_SPAWN_X, BALL_SPAWN_Y),
            ball_spawn_accel: Vec2::new(BALL_SPAWN_AX, BALL_SPAWN_AY),
            max_speed: BALL_MAX_SPEED,
            extra_ball_max_speed: BALL_MAX_SPEED * 2.0,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_y: FIELD_HEIGHT - PADDLE_BOTTOM_MARGIN,
            total_bricks: TOTAL_BRICKS,
            bricks_per_row: BRICK_ROW_LENGTH,
            brick_height: BRICK_HEIGHT,
            brick_top: BRICK_START_Y,
            win_threshold: TOTAL_BRICKS,
            per_brick_score: BRICK_SCORE,
            score_multiplier: 1.0,
            lives: START_LIVES,
            power_ups: 0,
            extra_ball_slots: EXTRA_BALL_SLOTS,
            time_scale: TIME_SCALE,
            seed: 0,
            difficulty,
        };
        config.apply_difficulty(difficulty);
        config
    }

    /// Re-derive the difficulty dependent fields
    pub fn apply_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.paddle_width = difficulty.paddle_width();
        self.max_speed = difficulty.adjusted_speed(BALL_MAX_SPEED);
        self.extra_ball_max_speed = self.max_speed * 2.0;
        self.score_multiplier = difficulty.score_multiplier();
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_power_ups(mut self, power_ups: u32) -> Self {
        self.power_ups = power_ups;
        self
    }

    /// Uniform brick width (the wall spans the whole field)
    pub fn brick_width(&self) -> f32 {
        self.width / self.bricks_per_row as f32
    }

    pub fn brick_rows(&self) -> usize {
        self.total_bricks.div_ceil(self.bricks_per_row.max(1))
    }

    /// Points for one destroyed brick at the current multiplier
    pub fn brick_score(&self) -> u64 {
        (self.per_brick_score as f32 * self.score_multiplier).round() as u64
    }

    /// Paddle left edge when centered
    pub fn paddle_home_x(&self) -> f32 {
        (self.width - self.paddle_width) / 2.0
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite())
        {
            return Err(ConfigError::InvalidField {
                width: self.width,
                height: self.height,
            });
        }

        for (name, value) in [
            ("ball_radius", self.ball_radius),
            ("max_speed", self.max_speed),
            ("extra_ball_max_speed", self.extra_ball_max_speed),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("brick_height", self.brick_height),
            ("time_scale", self.time_scale),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        if !(self.extra_ball_max_speed >= self.max_speed) {
            return Err(ConfigError::ExtraBallCapTooLow {
                cap: self.extra_ball_max_speed,
                max_speed: self.max_speed,
            });
        }

        let accel = self.ball_spawn_accel;
        if !accel.is_finite() {
            return Err(ConfigError::NonFiniteSpawnAccel {
                x: accel.x,
                y: accel.y,
            });
        }

        if self.extra_ball_slots > MAX_EXTRA_BALL_SLOTS {
            return Err(ConfigError::TooManyExtraBalls {
                slots: self.extra_ball_slots,
                max: MAX_EXTRA_BALL_SLOTS,
            });
        }

        if self.total_bricks == 0 {
            return Err(ConfigError::EmptyBrickGrid);
        }
        if self.bricks_per_row == 0 {
            return Err(ConfigError::EmptyBrickRow);
        }

        if self.paddle_width > self.width {
            return Err(ConfigError::PaddleTooWide {
                paddle_width: self.paddle_width,
                field_width: self.width,
            });
        }
        if !(self.paddle_y >= 0.0 && self.paddle_y + self.paddle_height <= self.height) {
            return Err(ConfigError::PaddleOutsideField {
                paddle_y: self.paddle_y,
                field_height: self.height,
            });
        }

        let grid_bottom = self.brick_top + self.brick_rows() as f32 * self.brick_height;
        if !(self.brick_top >= 0.0 && grid_bottom <= self.paddle_y) {
            return Err(ConfigError::GridOverlapsPaddle {
                grid_bottom,
                paddle_top: self.paddle_y,
            });
        }

        let spawn = self.ball_spawn;
        let r = self.ball_radius;
        if !(spawn.x >= r && spawn.x <= self.width - r && spawn.y >= r && spawn.y <= self.height - r)
        {
            return Err(ConfigError::SpawnOutsideField {
                x: spawn.x,
                y: spawn.y,
            });
        }

        if self.win_threshold == 0 || self.win_threshold > self.total_bricks {
            return Err(ConfigError::InvalidWinThreshold {
                threshold: self.win_threshold,
                total: self.total_bricks,
            });
        }

        if !(self.score_multiplier >= 0.0 && self.score_multiplier.is_finite()) {
            return Err(ConfigError::InvalidScoreMultiplier(self.score_multiplier));
        }

        if self.lives == 0 {
            return Err(ConfigError::NoLives);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        for d in Difficulty::ALL {
            assert_eq!(SimConfig::for_difficulty(d).validate(), Ok(()));
        }
    }

    #[test]
    fn test_default_wall_geometry() {
        let config = SimConfig::default();
        assert_eq!(config.brick_rows(), 5);
        assert!((config.brick_width() - 400.0 / 12.0).abs() < 0.001);
        assert_eq!(config.brick_score(), 100);
        assert_eq!(SimConfig::for_difficulty(Difficulty::Easy).brick_score(), 80);
        assert_eq!(SimConfig::for_difficulty(Difficulty::Hard).brick_score(), 120);
    }

    #[test]
    fn test_rejects_bad_speed() {
        let mut config = SimConfig::default();
        config.max_speed = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { name: "max_speed", .. })
        ));

        config.max_speed = -5.0;
        assert!(config.validate().is_err());

        config.max_speed = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_grid_and_bad_field() {
        let mut config = SimConfig::default();
        config.total_bricks = 0;
        assert_eq!(config.validate(), Err(ConfigError::EmptyBrickGrid));

        let mut config = SimConfig::default();
        config.width = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidField { .. })));

        let mut config = SimConfig::default();
        config.height = -10.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidField { .. })));
    }

    #[test]
    fn test_rejects_inconsistent_layout() {
        let mut config = SimConfig::default();
        config.win_threshold = 61;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWinThreshold { .. })
        ));

        let mut config = SimConfig::default();
        config.ball_spawn = Vec2::new(-20.0, 100.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SpawnOutsideField { .. })
        ));

        let mut config = SimConfig::default();
        config.brick_top = 650.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GridOverlapsPaddle { .. })
        ));

        let mut config = SimConfig::default();
        config.lives = 0;
        assert_eq!(config.validate(), Err(ConfigError::NoLives));
    }

    #[test]
    fn test_rejects_non_finite_geometry() {
        let mut config = SimConfig::default();
        config.brick_top = f32::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GridOverlapsPaddle { .. })
        ));

        let mut config = SimConfig::default();
        config.paddle_y = f32::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddleOutsideField { .. })
        ));

        let mut config = SimConfig::default();
        config.ball_spawn_accel.x = f32::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFiniteSpawnAccel { .. })
        ));

        let mut config = SimConfig::default();
        config.ball_spawn_accel.y = f32::INFINITY;
        assert!(config.validate().is_err());

        let mut config = SimConfig::default();
        config.extra_ball_max_speed = f32::INFINITY;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                name: "extra_ball_max_speed",
                ..
            })
        ));
    }

    #[test]
    fn test_extra_ball_slots_bounded() {
        let mut config = SimConfig::default();
        config.extra_ball_slots = 0;
        assert_eq!(config.validate(), Ok(()));

        config.extra_ball_slots = MAX_EXTRA_BALL_SLOTS;
        assert_eq!(config.validate(), Ok(()));

        config.extra_ball_slots = usize::MAX;
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooManyExtraBalls {
                slots: usize::MAX,
                max: MAX_EXTRA_BALL_SLOTS
            })
        );
    }
}
