//! Per-frame simulation tick
//!
//! Integrate, keep balls in the field, find contacts, resolve them in the
//! order they were found, then settle the round. Everything the host needs to
//! react to comes back as a list of events.

use super::collision::{self, BoundaryOutcome, Contact, Target};
use super::motion;
use super::state::{GameEvent, GamePhase, GameState, ShapeRef};

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Real time since the previous frame
    pub elapsed_ms: f32,
    /// Where the player wants the paddle center (pointer x)
    pub paddle_target_x: Option<f32>,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Won/Lost stay frozen until the host resets
    if state.phase.is_terminal() || !(input.elapsed_ms.is_finite() && input.elapsed_ms > 0.0) {
        return events;
    }
    let destroyed_before = state.bricks_destroyed();

    state.time_ticks += 1;
    state.clock_ms += f64::from(input.elapsed_ms);

    if let Some(target_x) = input.paddle_target_x {
        state.paddle.move_center_to(target_x, state.config.width);
    }

    // 1. Motion
    let dt = motion::frame_dt(input.elapsed_ms, state.config.time_scale);
    motion::integrate_balls(
        &mut state.balls,
        dt,
        state.config.max_speed,
        state.config.extra_ball_max_speed,
    );

    // 2. Field edges
    let (width, height) = (state.config.width, state.config.height);
    for ball in &mut state.balls {
        if collision::resolve_boundary(ball, width, height) == BoundaryOutcome::MainBallLost {
            state.phase = GamePhase::LossPending;
        }
    }

    // 3. Contacts
    let contacts = detect_contacts(state);

    // 4. Responses
    for contact in contacts {
        match contact.target {
            // Any ball may trigger this; extra balls are all parked until
            // the spawn, so in practice it is the main ball
            Target::Paddle => spawn_extra_balls(state, &mut events),
            Target::Brick(index) => {
                state.brick_count += 1;
                state.score += state.config.brick_score();
                events.push(GameEvent::BrickDestroyed { index });
            }
        }
        if let Some(event) = collision::resolve(state, contact) {
            events.push(event);
        }
    }

    // 5. Delayed extra-ball retarget
    let retargeted =
        state
            .spawner
            .apply_velocity_copy(&mut state.balls, state.clock_ms, &mut state.rng);
    if retargeted > 0 {
        log::debug!("Extra balls took main ball velocity: {}", retargeted);
    }

    // 6. Round flow
    settle(state, destroyed_before, &mut events);

    events
}

/// Check every unordered pair of live shapes once.
///
/// A brick is claimed as soon as it is detected so a second ball touching it
/// in the same tick finds it already gone.
fn detect_contacts(state: &mut GameState) -> Vec<Contact> {
    let shapes: Vec<ShapeRef> = state
        .balls
        .iter()
        .enumerate()
        .filter(|(_, b)| !b.is_parked())
        .map(|(i, _)| ShapeRef::Ball(i))
        .chain(std::iter::once(ShapeRef::Paddle))
        .chain(
            state
                .bricks
                .iter()
                .enumerate()
                .filter(|(_, b)| b.can_collide())
                .map(|(i, _)| ShapeRef::Brick(i)),
        )
        .collect();

    let mut contacts = Vec::new();
    for (i, &a) in shapes.iter().enumerate() {
        for &b in &shapes[i + 1..] {
            let Some(contact) = collision::detect(state, a, b) else {
                continue;
            };
            if let Target::Brick(index) = contact.target {
                if !state.bricks[index].disable() {
                    continue;
                }
            }
            contacts.push(contact);
        }
    }
    contacts
}

fn spawn_extra_balls(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let spawned = state.spawner.try_spawn(
        &mut state.balls,
        &state.paddle,
        state.power_ups,
        state.clock_ms,
        state.config.max_speed,
        &mut state.rng,
    );
    if let Some(count) = spawned {
        log::debug!(
            "Extra balls spawned: {} (power-ups {}, t={:.0}ms)",
            count,
            state.power_ups,
            state.clock_ms
        );
        if count > 0 {
            events.push(GameEvent::ExtraBallsSpawned { count });
        }
    }
}

/// Win first, then loss. The win fires only on the tick that crosses the
/// threshold, so a respawn onto an already cleared wall stays quiet.
fn settle(state: &mut GameState, destroyed_before: usize, events: &mut Vec<GameEvent>) {
    let threshold = state.config.win_threshold;
    if destroyed_before < threshold && state.bricks_destroyed() >= threshold {
        state.phase = GamePhase::Won;
        log::info!("Round {} won with score {}", state.round, state.score);
        events.push(GameEvent::RoundWon {
            score: state.score,
            round: state.round,
        });
        return;
    }

    if state.phase != GamePhase::LossPending {
        return;
    }

    if state.lives > 1 {
        state.lives -= 1;
        state.respawn();
        log::info!("Life lost, {} remaining", state.lives);
        events.push(GameEvent::LifeLost {
            remaining: state.lives,
        });
    } else {
        state.phase = GamePhase::Lost;
        log::info!("Game over in round {} with score {}", state.round, state.score);
        events.push(GameEvent::RoundLost {
            score: state.score,
            round: state.round,
        });
    }
}
