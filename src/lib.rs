//! Astro Jump - an endless vertical platform jumper
//!
//! Core modules:
//! - `sim`: Deterministic simulation (difficulty tiers, procedural generation,
//!   physics, game state)
//! - `highscores`: Local leaderboard and the score persistence boundary
//!
//! Rendering and input devices live outside this crate: the simulation polls a
//! [`sim::TickInput`] once per tick and exposes its state read-only.

pub mod highscores;
pub mod sim;

pub use highscores::{HighScores, ScoreRecord, ScoreSink};

/// Game configuration constants
pub mod consts {
    /// Logical playfield width (the original capped its canvas at 500px)
    pub const SCREEN_WIDTH: f32 = 500.0;
    /// Default playfield height
    pub const SCREEN_HEIGHT: f32 = 800.0;

    /// Player bounding box (square)
    pub const PLAYER_SIZE: f32 = 50.0;
    /// Base jump impulse. Negative because screen y grows downward.
    pub const JUMP_FORCE: f32 = -16.0;

    /// Platform dimensions
    pub const PLATFORM_WIDTH: f32 = 80.0;
    pub const PLATFORM_HEIGHT: f32 = 15.0;
    /// Generated platforms are clamped this far inside the screen edges
    pub const EDGE_MARGIN: f32 = 10.0;

    /// Item bounding box (square)
    pub const ITEM_SIZE: f32 = 20.0;
    /// Score awarded per star pickup
    pub const STAR_SCORE: u64 = 100;

    /// Ghost platforms flip visibility every this many ticks
    pub const GHOST_TOGGLE_TICKS: u32 = 60;

    /// Platforms are pruned this far below the bottom edge
    pub const PRUNE_MARGIN: f32 = 100.0;
    /// Target number of live platforms
    pub const MAX_PLATFORMS: usize = 8;
    /// Platforms created at once when the world is found empty
    pub const BULK_REGEN_COUNT: usize = 10;
    /// Platforms present at the start of a run (base platform included)
    pub const INITIAL_PLATFORMS: usize = 6;
    /// Fraction of screen height above the top edge to keep stocked
    pub const SPAWN_AHEAD_FACTOR: f32 = 0.4;

    /// Side-spring push: horizontal displacement per tick, and duration
    pub const SPRING_PUSH_STEP: f32 = 8.0;
    pub const SPRING_PUSH_TICKS: u32 = 15;

    /// Score needed to advance one difficulty tier
    pub const SCORE_PER_TIER: u64 = 10_000;
    /// Highest difficulty tier
    pub const MAX_TIER: u8 = 10;
}
