//! Extra-ball spawning
//!
//! Parked extra balls are dropped onto the paddle on the first paddle contact
//! of a life. A short while later, once the main ball has left the paddle,
//! they pick up the main ball's speed at a random angle around its heading.

use std::f32::consts::PI;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Ball, Paddle};

/// Delay between spawning and copying the main ball's velocity (ms)
pub const VELOCITY_COPY_DELAY_MS: f64 = 150.0;

/// Full width of the random spread around the main heading (±60°)
pub const HEADING_SPREAD: f32 = PI / 1.5;

/// One-shot spawn state, cleared on every respawn/reset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtraBallSpawner {
    /// Spawn already used this life
    pub spawned: bool,
    /// Set at spawn, cleared once the velocity copy has run
    pub spawned_at_ms: Option<f64>,
}

impl ExtraBallSpawner {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the delayed velocity copy should run at `now_ms`
    pub fn copy_due(&self, now_ms: f64) -> bool {
        matches!(self.spawned_at_ms, Some(t) if now_ms - t >= VELOCITY_COPY_DELAY_MS)
    }

    /// Activate up to `power_ups` parked balls next to the paddle.
    ///
    /// `balls[0]` must be the main ball. Returns the number of balls
    /// activated, or `None` when the spawn is not available.
    pub fn try_spawn<R: Rng>(
        &mut self,
        balls: &mut [Ball],
        paddle: &Paddle,
        power_ups: u32,
        now_ms: f64,
        max_speed: f32,
        rng: &mut R,
    ) -> Option<usize> {
        if power_ups == 0 || self.spawned {
            return None;
        }
        self.spawned = true;
        self.spawned_at_ms = Some(now_ms);

        let (main, extras) = balls.split_first_mut()?;
        let center_x = paddle.center_x();
        let top = paddle.top();
        let mut count = 0;

        for (i, ball) in extras
            .iter_mut()
            .filter(|b| b.is_parked())
            .take(power_ups as usize)
            .enumerate()
        {
            // Alternate right/left of center, moving outward
            let side = if i % 2 == 0 { 1.0 } else { -1.0 };
            let offset_x = side * ball.radius * (i / 2 + 1) as f32;

            // Just touching the paddle top and heading into it
            ball.pos = Vec2::new(center_x + offset_x, top - ball.radius + 2.0);
            ball.vel = Vec2::new(
                (rng.random::<f32>() - 0.5) * max_speed * 0.5,
                main.vel.y.abs() * 0.8,
            );
            ball.acc = main.acc;
            count += 1;
        }

        Some(count)
    }

    /// Retarget active extra balls to the main ball's speed. Runs once per
    /// spawn; returns how many balls were retargeted.
    pub fn apply_velocity_copy<R: Rng>(
        &mut self,
        balls: &mut [Ball],
        now_ms: f64,
        rng: &mut R,
    ) -> usize {
        if !self.copy_due(now_ms) {
            return 0;
        }
        self.spawned_at_ms = None;

        let Some((main, extras)) = balls.split_first_mut() else {
            return 0;
        };
        let speed = main.vel.length();
        let heading = main.vel.y.atan2(main.vel.x);

        let mut retargeted = 0;
        for ball in extras.iter_mut().filter(|b| !b.is_parked()) {
            let angle = heading + (rng.random::<f32>() - 0.5) * HEADING_SPREAD;
            ball.vel = Vec2::from_angle(angle) * speed;
            ball.acc = main.acc;
            retargeted += 1;
        }
        retargeted
    }
}
