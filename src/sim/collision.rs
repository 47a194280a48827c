//! Collision detection and response
//!
//! Balls against the field edges, the paddle and the bricks. Balls never
//! collide with each other and the paddle never touches the bricks.

use glam::Vec2;

use super::rect::{Face, Rect};
use super::state::{Ball, GameEvent, GameState, ShapeRef};

/// Extra gap left between a ball and the face it bounced off
pub const SEPARATION_NUDGE: f32 = 0.1;

/// Vertical speed below which the paddle top-face rule does not apply
pub const MIN_PADDLE_VY: f32 = 0.01;

/// Largest horizontal kick from paddle aim, as a fraction of max speed
pub const PADDLE_AIM_FRACTION: f32 = 0.5;

/// What a ball touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Paddle,
    Brick(usize),
}

/// A detected ball contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    /// Index into `GameState::balls`
    pub ball: usize,
    pub target: Target,
}

/// Result of the field edge check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryOutcome {
    Inside,
    Bounced,
    /// Main ball crossed the bottom edge
    MainBallLost,
    /// Extra ball crossed the bottom edge and was parked
    ExtraBallParked,
}

/// Keep a ball inside [0,width]×[0,height]
pub fn resolve_boundary(ball: &mut Ball, width: f32, height: f32) -> BoundaryOutcome {
    if ball.is_parked() {
        return BoundaryOutcome::Inside;
    }
    let r = ball.radius;

    if ball.pos.y + r > height {
        if ball.is_main() {
            return BoundaryOutcome::MainBallLost;
        }
        ball.park();
        return BoundaryOutcome::ExtraBallParked;
    }

    let mut bounced = false;
    if ball.pos.x - r < 0.0 {
        ball.pos.x = r;
        ball.vel.x = ball.vel.x.abs();
        ball.acc.x = ball.acc.x.abs();
        bounced = true;
    } else if ball.pos.x + r > width {
        ball.pos.x = width - r;
        ball.vel.x = -ball.vel.x.abs();
        ball.acc.x = -ball.acc.x.abs();
        bounced = true;
    }

    if ball.pos.y - r < 0.0 {
        ball.pos.y = r;
        ball.vel.y = ball.vel.y.abs();
        ball.acc.y = ball.acc.y.abs();
        bounced = true;
    }

    if bounced {
        BoundaryOutcome::Bounced
    } else {
        BoundaryOutcome::Inside
    }
}

/// Circle vs axis-aligned rectangle overlap (touching counts)
#[inline]
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    center.distance_squared(rect.closest_point(center)) <= radius * radius
}

/// Ball well above the paddle and already leaving: skip the test so a
/// fresh bounce can't be caught again
#[inline]
pub fn paddle_guard_skips(ball: &Ball, paddle: &Rect) -> bool {
    paddle.top() - ball.pos.y > 2.0 * ball.radius && ball.vel.y < 0.0
}

/// Narrow-phase test for one unordered shape pair
pub fn detect(state: &GameState, a: ShapeRef, b: ShapeRef) -> Option<Contact> {
    let (ball_idx, target) = match (a, b) {
        (ShapeRef::Ball(i), ShapeRef::Paddle) | (ShapeRef::Paddle, ShapeRef::Ball(i)) => {
            (i, Target::Paddle)
        }
        (ShapeRef::Ball(i), ShapeRef::Brick(j)) | (ShapeRef::Brick(j), ShapeRef::Ball(i)) => {
            (i, Target::Brick(j))
        }
        _ => return None,
    };

    let ball = state.balls.get(ball_idx)?;
    if ball.is_parked() {
        return None;
    }

    let rect = match target {
        Target::Paddle => {
            let rect = state.paddle.rect();
            if paddle_guard_skips(ball, &rect) {
                return None;
            }
            rect
        }
        Target::Brick(j) => {
            let brick = state.bricks.get(j)?;
            if !brick.can_collide() {
                return None;
            }
            brick.rect
        }
    };

    circle_rect_overlap(ball.pos, ball.radius, &rect).then_some(Contact {
        ball: ball_idx,
        target,
    })
}

/// Top-face paddle bounce with player aim.
///
/// Applies when the ball center sits above the paddle top by at most one
/// radius and is moving vertically. Returns false if it did not apply.
pub fn paddle_top_bounce(ball: &mut Ball, paddle: &Rect, max_speed: f32) -> bool {
    let above_by = paddle.top() - ball.pos.y;
    if !(0.0..=ball.radius).contains(&above_by) || ball.vel.y.abs() <= MIN_PADDLE_VY {
        return false;
    }

    ball.pos.y = paddle.top() - ball.radius - SEPARATION_NUDGE;
    // Sign forced, not negated, so the ball always leaves upward
    ball.vel.y = -ball.vel.y.abs();
    ball.acc.y = -ball.acc.y.abs();

    let half_width = paddle.size.x * 0.5;
    let offset = ((ball.pos.x - paddle.center().x) / half_width).clamp(-1.0, 1.0);
    ball.vel.x += offset * max_speed * PADDLE_AIM_FRACTION;
    true
}

/// Bounce off the rectangle face nearest the ball center
pub fn bounce_off_rect(ball: &mut Ball, rect: &Rect) -> Face {
    let face = rect.nearest_face(ball.pos);
    let gap = ball.radius + SEPARATION_NUDGE;

    match face {
        Face::Left => {
            ball.pos.x = rect.left() - gap;
            ball.vel.x = -ball.vel.x.abs();
            ball.acc.x = -ball.acc.x.abs();
        }
        Face::Right => {
            ball.pos.x = rect.right() + gap;
            ball.vel.x = ball.vel.x.abs();
            ball.acc.x = ball.acc.x.abs();
        }
        Face::Top => {
            ball.pos.y = rect.top() - gap;
            ball.vel.y = -ball.vel.y.abs();
            ball.acc.y = -ball.acc.y.abs();
        }
        Face::Bottom => {
            ball.pos.y = rect.bottom() + gap;
            ball.vel.y = ball.vel.y.abs();
            ball.acc.y = ball.acc.y.abs();
        }
    }
    face
}

/// Update kinematics for a detected contact.
///
/// Brick flags are already cleared when the contact was detected; this only
/// moves the ball. Returns `PaddleHit` for a top-face paddle bounce.
pub fn resolve(state: &mut GameState, contact: Contact) -> Option<GameEvent> {
    let max_speed = state.config.max_speed;
    let rect = match contact.target {
        Target::Paddle => state.paddle.rect(),
        Target::Brick(j) => state.bricks.get(j)?.rect,
    };
    let ball = state.balls.get_mut(contact.ball)?;

    if contact.target == Target::Paddle && paddle_top_bounce(ball, &rect, max_speed) {
        return Some(GameEvent::PaddleHit);
    }
    bounce_off_rect(ball, &rect);
    None
}
