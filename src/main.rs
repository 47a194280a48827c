//! Brick Breaker headless driver
//!
//! Plays the simulation with a paddle that follows the main ball and prints
//! the resulting score history as JSON.
//!
//! Usage: `brick-breaker [easy|normal|hard] [power-ups] [seed]`

#[cfg(not(target_arch = "wasm32"))]
use brick_breaker::{
    Difficulty, ScoreHistory,
    sim::{self, GameEvent, SimConfig},
};

/// Frame length fed to the simulation (~60 fps)
#[cfg(not(target_arch = "wasm32"))]
const FRAME_MS: f32 = 16.0;

/// Give up on a round after this many frames (about five minutes)
#[cfg(not(target_arch = "wasm32"))]
const MAX_FRAMES_PER_ROUND: u32 = 18_750;

/// Stop after this many cleared rounds
#[cfg(not(target_arch = "wasm32"))]
const MAX_ROUNDS: u32 = 5;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let difficulty = match args.next() {
        Some(arg) => Difficulty::from_str(&arg).unwrap_or_else(|| {
            log::warn!("Unknown difficulty '{}', using normal", arg);
            Difficulty::Normal
        }),
        None => Difficulty::Normal,
    };
    let power_ups = args.next().and_then(|s| s.parse().ok()).unwrap_or(3);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or_else(now_ms_seed);

    let config = SimConfig::for_difficulty(difficulty)
        .with_power_ups(power_ups)
        .with_seed(seed);
    let mut state = match sim::initialize(config) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Invalid configuration ({}): {}", e.code(), e);
            std::process::exit(1);
        }
    };
    log::info!(
        "Brick Breaker starting: {} difficulty, {} power-ups, seed {}",
        difficulty,
        power_ups,
        seed
    );

    let mut history = ScoreHistory::new();
    let mut frames = 0u32;

    'game: loop {
        let target_x = state.main_ball().pos.x;
        for event in state.step(FRAME_MS, Some(target_x)) {
            log::debug!("{:?}", event);
            if history.record_event(&event, timestamp_ms()) == Some(true) {
                log::info!("New high score: {}", history.high_score);
            }
            match event {
                GameEvent::RoundWon { round, .. } if round < MAX_ROUNDS => {
                    state.next_round();
                    frames = 0;
                }
                GameEvent::RoundWon { .. } | GameEvent::RoundLost { .. } => break 'game,
                _ => {}
            }
        }

        frames += 1;
        if frames >= MAX_FRAMES_PER_ROUND {
            log::warn!(
                "Round {} stalled after {} frames, stopping",
                state.round,
                frames
            );
            history.record(state.score, state.round, false, timestamp_ms());
            break;
        }
    }

    match history.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => {
            log::error!("Failed to serialize score history: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn timestamp_ms() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms_seed() -> u64 {
    timestamp_ms() as u64
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The library is driven by the host page on wasm
}
