//! Ball integration
//!
//! Semi-implicit Euler with no sub-stepping. A very long frame (app resumed
//! from background) can move a ball straight through a brick; that is accepted.

use super::state::Ball;

/// Convert elapsed frame time to engine time units
#[inline]
pub fn frame_dt(elapsed_ms: f32, time_scale: f32) -> f32 {
    elapsed_ms * time_scale
}

/// Advance one ball by `dt`, capping its speed at `speed_cap`
pub fn integrate_ball(ball: &mut Ball, dt: f32, speed_cap: f32) {
    // Parked balls would drift off forever
    if ball.is_parked() {
        return;
    }
    ball.vel += ball.acc * dt;
    ball.vel = ball.vel.clamp_length_max(speed_cap);
    ball.pos += ball.vel * dt;
}

/// Integrate every ball. The main ball uses the gameplay cap, extra balls
/// only the looser safety cap.
pub fn integrate_balls(balls: &mut [Ball], dt: f32, max_speed: f32, extra_ball_max_speed: f32) {
    for ball in balls {
        let cap = if ball.is_main() {
            max_speed
        } else {
            extra_ball_max_speed
        };
        integrate_ball(ball, dt, cap);
    }
}
