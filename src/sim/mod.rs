//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - No rendering, audio or platform dependencies
//! - Seeded RNG only
//! - Stable iteration order (balls by slot, then paddle, then bricks by index)
//! - Results reported as events, never polled flags

pub mod collision;
pub mod config;
pub mod motion;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{BoundaryOutcome, Contact, Target};
pub use config::SimConfig;
pub use rect::{Face, Rect};
pub use spawn::ExtraBallSpawner;
pub use state::{
    Ball, Brick, GameEvent, GamePhase, GameState, MAIN_BALL_ID, PARKED_POS, Paddle, ShapeRef,
};
pub use tick::{TickInput, tick};

use crate::error::ConfigError;

/// Validate `config` and build the initial game state
pub fn initialize(config: SimConfig) -> Result<GameState, ConfigError> {
    GameState::new(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_fresh_state() {
        let state = initialize(SimConfig::default()).unwrap();
        assert_eq!(state.phase, GamePhase::Active);
        assert_eq!(state.score, 0);
        assert_eq!(state.brick_count, 0);
        assert_eq!(state.time_ticks, 0);
        assert!(state.balls[1..].iter().all(Ball::is_parked));
        assert!(state.bricks.iter().all(Brick::can_collide));
    }

    #[test]
    fn test_initialize_rejects_bad_config() {
        let config = SimConfig {
            extra_ball_max_speed: 1.0,
            ..SimConfig::default()
        };
        assert!(matches!(
            initialize(config),
            Err(ConfigError::ExtraBallCapTooLow { .. })
        ));
    }
}
