//! Game state and core simulation types
//!
//! Every mutable field the tick touches lives on `GameState`. The host reads
//! it between ticks and never writes it directly.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::config::SimConfig;
use super::rect::Rect;
use super::spawn::ExtraBallSpawner;
use crate::error::ConfigError;
use crate::settings::Difficulty;

/// Off-field position of a parked (inactive) ball
pub const PARKED_POS: Vec2 = Vec2::new(-1000.0, -1000.0);

/// Id reserved for the main ball
pub const MAIN_BALL_ID: u32 = 0;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball in play
    Active,
    /// Main ball left through the bottom edge this tick
    LossPending,
    /// Win threshold reached, waiting for `next_round` or `reset`
    Won,
    /// Out of lives, waiting for `reset`
    Lost,
}

impl GamePhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// Things the host reacts to (haptics, HUD, persistence, round screens)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    BrickDestroyed { index: usize },
    /// Top-face paddle bounce (haptic cue)
    PaddleHit,
    ExtraBallsSpawned { count: usize },
    LifeLost { remaining: u8 },
    RoundWon { score: u64, round: u32 },
    RoundLost { score: u64, round: u32 },
}

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub acc: Vec2,
    pub radius: f32,
    /// Informational only, the bounce model is kinematic
    pub mass: f32,
}

impl Ball {
    /// New ball, parked off the field
    pub fn new(id: u32, radius: f32) -> Self {
        Self {
            id,
            pos: PARKED_POS,
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            radius,
            mass: radius * 10.0,
        }
    }

    #[inline]
    pub fn is_main(&self) -> bool {
        self.id == MAIN_BALL_ID
    }

    #[inline]
    pub fn is_parked(&self) -> bool {
        self.pos == PARKED_POS
    }

    /// Move off the field and stop
    pub fn park(&mut self) {
        self.pos = PARKED_POS;
        self.vel = Vec2::ZERO;
        self.acc = Vec2::ZERO;
    }

    /// Put the ball at rest on its spawn point
    pub fn place_at(&mut self, pos: Vec2, acc: Vec2) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
        self.acc = acc;
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner; only x changes during play
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    /// Center the paddle on `target_x`, kept fully inside the field
    pub fn move_center_to(&mut self, target_x: f32, field_width: f32) {
        if !target_x.is_finite() {
            return;
        }
        let half = self.width / 2.0;
        let center = target_x.clamp(half, (field_width - half).max(half));
        self.pos.x = center - half;
    }
}

/// A brick in the wall
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub index: usize,
    pub row: usize,
    pub col: usize,
    pub rect: Rect,
    can_collide: bool,
}

impl Brick {
    pub fn new(index: usize, bricks_per_row: usize, width: f32, height: f32, top: f32) -> Self {
        let row = index / bricks_per_row;
        let col = index % bricks_per_row;
        Self {
            index,
            row,
            col,
            rect: Rect::new(col as f32 * width, top + row as f32 * height, width, height),
            can_collide: true,
        }
    }

    /// False once the brick has been hit this round
    #[inline]
    pub fn can_collide(&self) -> bool {
        self.can_collide
    }

    /// Mark as hit. Returns true if it was still standing.
    pub(crate) fn disable(&mut self) -> bool {
        std::mem::replace(&mut self.can_collide, false)
    }

    pub(crate) fn restore(&mut self) {
        self.can_collide = true;
    }
}

/// Tagged reference to one shape in the state, used for pair enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeRef {
    Ball(usize),
    Paddle,
    Brick(usize),
}

/// Complete simulation state for one game session
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: SimConfig,
    pub phase: GamePhase,
    /// Main ball at index 0, extra ball slots after it
    pub balls: Vec<Ball>,
    pub paddle: Paddle,
    pub bricks: Vec<Brick>,
    /// Bricks destroyed during the current life
    pub brick_count: u32,
    pub score: u64,
    pub lives: u8,
    /// Current round (1-based)
    pub round: u32,
    /// Extra-ball power-ups owned by the player
    pub power_ups: u32,
    /// Accumulated simulation time in milliseconds
    pub clock_ms: f64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub spawner: ExtraBallSpawner,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Validate the configuration and build a fresh session
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let balls = (0..=config.extra_ball_slots as u32)
            .map(|id| Ball::new(id, config.ball_radius))
            .collect();
        let paddle = Paddle {
            pos: Vec2::new(config.paddle_home_x(), config.paddle_y),
            width: config.paddle_width,
            height: config.paddle_height,
        };

        let mut state = Self {
            bricks: build_bricks(&config),
            rng: Pcg32::seed_from_u64(config.seed),
            phase: GamePhase::Active,
            balls,
            paddle,
            brick_count: 0,
            score: 0,
            lives: config.lives,
            round: 1,
            power_ups: config.power_ups,
            clock_ms: 0.0,
            time_ticks: 0,
            spawner: ExtraBallSpawner::default(),
            config,
        };
        state.respawn();
        Ok(state)
    }

    /// Advance one frame. See [`super::tick::tick`].
    pub fn step(&mut self, elapsed_ms: f32, paddle_target_x: Option<f32>) -> Vec<GameEvent> {
        super::tick::tick(
            self,
            &super::tick::TickInput {
                elapsed_ms,
                paddle_target_x,
            },
        )
    }

    pub fn main_ball(&self) -> &Ball {
        &self.balls[0]
    }

    /// Extra balls currently in play
    pub fn active_extra_balls(&self) -> impl Iterator<Item = &Ball> {
        self.balls[1..].iter().filter(|b| !b.is_parked())
    }

    /// Bricks knocked out of the wall this round (across lives)
    pub fn bricks_destroyed(&self) -> usize {
        self.bricks.iter().filter(|b| !b.can_collide()).count()
    }

    pub fn bricks_remaining(&self) -> usize {
        self.bricks.len() - self.bricks_destroyed()
    }

    /// Start a new life: wall untouched, balls and paddle back home
    pub fn respawn(&mut self) {
        self.paddle.pos.x = self.config.paddle_home_x();
        let (spawn, accel) = (self.config.ball_spawn, self.config.ball_spawn_accel);
        for ball in &mut self.balls {
            if ball.is_main() {
                ball.place_at(spawn, accel);
            } else {
                ball.park();
            }
        }
        self.spawner.reset();
        self.brick_count = 0;
        self.phase = GamePhase::Active;
    }

    /// Begin the next round with a fresh wall; score and lives carry over
    pub fn next_round(&mut self) {
        self.round += 1;
        for brick in &mut self.bricks {
            brick.restore();
        }
        self.respawn();
        log::info!("Round {} started (score {}, lives {})", self.round, self.score, self.lives);
    }

    /// Full game reset back to the initial state
    pub fn reset(&mut self) {
        self.bricks = build_bricks(&self.config);
        self.rng = Pcg32::seed_from_u64(self.config.seed);
        self.score = 0;
        self.lives = self.config.lives;
        self.round = 1;
        self.power_ups = self.config.power_ups;
        self.clock_ms = 0.0;
        self.time_ticks = 0;
        self.respawn();
        log::info!("Game reset ({} difficulty)", self.config.difficulty);
    }

    /// Switch difficulty; paddle width applies immediately
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<(), ConfigError> {
        let mut config = self.config.clone();
        config.apply_difficulty(difficulty);
        config.validate()?;

        let center = self.paddle.center_x();
        self.paddle.width = config.paddle_width;
        self.paddle.move_center_to(center, config.width);
        self.config = config;
        Ok(())
    }

    pub fn set_power_ups(&mut self, power_ups: u32) {
        self.power_ups = power_ups;
    }
}

/// Lay out the wall row by row from the top-left corner
fn build_bricks(config: &SimConfig) -> Vec<Brick> {
    let width = config.brick_width();
    (0..config.total_bricks)
        .map(|i| {
            Brick::new(
                i,
                config.bricks_per_row,
                width,
                config.brick_height,
                config.brick_top,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_layout() {
        let state = GameState::new(SimConfig::default()).unwrap();
        assert_eq!(state.phase, GamePhase::Active);
        assert_eq!(state.balls.len(), 10);
        assert!(state.main_ball().is_main());
        assert_eq!(state.main_ball().pos, Vec2::new(100.0, 450.0));
        assert_eq!(state.main_ball().acc, Vec2::new(0.5, 1.0));
        assert_eq!(state.active_extra_balls().count(), 0);
        assert_eq!(state.bricks.len(), 60);
        assert!(state.bricks.iter().all(|b| b.can_collide()));
        assert_eq!(state.lives, 3);
        assert_eq!(state.round, 1);
        assert_eq!(state.paddle.center_x(), 200.0);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = SimConfig::default();
        config.total_bricks = 0;
        assert_eq!(GameState::new(config).err(), Some(ConfigError::EmptyBrickGrid));
    }

    #[test]
    fn test_brick_grid_positions() {
        let state = GameState::new(SimConfig::default()).unwrap();
        let brick = &state.bricks[13];
        assert_eq!((brick.row, brick.col), (1, 1));
        assert!((brick.rect.left() - 400.0 / 12.0).abs() < 0.001);
        assert_eq!(brick.rect.top(), 120.0);
        assert_eq!(state.bricks[59].row, 4);
    }

    #[test]
    fn test_brick_disable_is_one_shot() {
        let mut state = GameState::new(SimConfig::default()).unwrap();
        assert!(state.bricks[5].disable());
        assert!(!state.bricks[5].disable());
        assert!(!state.bricks[5].can_collide());
        state.bricks[5].restore();
        assert!(state.bricks[5].can_collide());
    }

    #[test]
    fn test_paddle_clamped_inside_field() {
        let mut state = GameState::new(SimConfig::default()).unwrap();
        state.paddle.move_center_to(-500.0, 400.0);
        assert_eq!(state.paddle.pos.x, 0.0);
        state.paddle.move_center_to(1000.0, 400.0);
        assert_eq!(state.paddle.pos.x, 300.0);
        state.paddle.move_center_to(f32::NAN, 400.0);
        assert_eq!(state.paddle.pos.x, 300.0);
    }

    #[test]
    fn test_respawn_keeps_wall() {
        let mut state = GameState::new(SimConfig::default()).unwrap();
        state.bricks[0].disable();
        state.brick_count = 4;
        state.balls[0].pos = Vec2::new(10.0, 10.0);
        state.balls[2].pos = Vec2::new(50.0, 50.0);
        state.respawn();
        assert!(!state.bricks[0].can_collide());
        assert_eq!(state.brick_count, 0);
        assert_eq!(state.main_ball().pos, Vec2::new(100.0, 450.0));
        assert!(state.balls[2].is_parked());
    }

    #[test]
    fn test_set_difficulty_resizes_paddle() {
        let mut state = GameState::new(SimConfig::default()).unwrap();
        state.set_difficulty(Difficulty::Easy).unwrap();
        assert!((state.paddle.width - 120.0).abs() < 0.001);
        assert!((state.paddle.center_x() - 200.0).abs() < 0.001);
        assert_eq!(state.config.max_speed, 25.0);
        assert_eq!(state.config.brick_score(), 80);
    }
}
