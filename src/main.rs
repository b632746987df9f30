//! Astro Jump entry point
//!
//! Runs a headless autoplay session: a trivial policy steers toward the
//! nearest platform above and the run is ticked until the player falls out.
//! Useful for balance checks and as a reference host for the simulation.

use std::time::{SystemTime, UNIX_EPOCH};

use astro_jump::consts::*;
use astro_jump::highscores::{HighScores, LoggingSink, ScoreRecord, ScoreSink};
use astro_jump::sim::{Bounds, GamePhase, GameState, TickInput, TierTable, tick};

/// Hard cap so a lucky run cannot spin forever
const MAX_TICKS: u64 = 500_000;

/// Steer toward the nearest platform above the player.
fn steer(state: &GameState, input: &mut TickInput) {
    let player_center = state.player.pos.x + PLAYER_SIZE / 2.0;
    let target = state
        .platforms
        .iter()
        .filter(|p| p.pos.y < state.player.pos.y)
        .max_by(|a, b| {
            a.pos
                .y
                .partial_cmp(&b.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|p| p.pos.x + PLATFORM_WIDTH / 2.0);

    input.left = false;
    input.right = false;
    if let Some(target_x) = target {
        let delta = target_x - player_center;
        if delta < -4.0 {
            input.left = true;
        } else if delta > 4.0 {
            input.right = true;
        }
    }
}

fn now_ms() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as f64)
        .unwrap_or(0.0)
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);

    let mut state = GameState::new(seed, Bounds::default(), TierTable::standard());
    let mut sink = LoggingSink;
    let mut board = HighScores::new();

    tick(
        &mut state,
        &TickInput {
            start: true,
            ..Default::default()
        },
    );

    let mut input = TickInput::default();
    let mut ticks = 0u64;
    while state.phase == GamePhase::Playing && ticks < MAX_TICKS {
        steer(&state, &mut input);
        tick(&mut state, &input);
        ticks += 1;
    }

    let record = ScoreRecord {
        name: "autopilot".into(),
        score: state.player.score,
        timestamp: now_ms(),
    };
    if let Err(err) = sink.submit(&record) {
        log::warn!("score submit failed: {err}");
    }
    board.add_score(&record.name, record.score, state.player.tier, record.timestamp);

    println!(
        "seed {} finished after {} ticks: score {} at tier {} ({})",
        seed,
        ticks,
        state.player.score,
        state.player.tier,
        state.tier_config().name
    );
}
