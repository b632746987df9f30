//! Game state and core simulation types
//!
//! The whole session lives in one [`GameState`]: player, world collections,
//! RNG, and phase. No ambient globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::level::{TierTable, tier_for_score};
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Idle menu, waiting for a start action
    Start,
    /// Active simulation
    Playing,
    /// Run ended, terminal until restart
    GameOver,
}

/// Which way a side spring throws the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpringDirection {
    Left,
    Right,
}

impl SpringDirection {
    pub fn sign(self) -> f32 {
        match self {
            SpringDirection::Left => -1.0,
            SpringDirection::Right => 1.0,
        }
    }
}

/// Platform variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlatformKind {
    #[default]
    Normal,
    /// Slides horizontally, reflecting off the screen edges
    Moving,
    /// Removed after a single landing
    Fragile,
    /// Strong upward impulse, consumed on use
    Boost,
    /// Upward impulse plus a gradual horizontal push over following ticks
    SpringSide,
    /// Flickers in and out; intangible while invisible
    Ghost,
    /// Only catches a falling player
    Cloud,
    /// Survives one landing, breaks on the second
    Cracked,
}

/// A platform entity. Width/height are fixed (`PLATFORM_WIDTH`/`PLATFORM_HEIGHT`)
/// and the kind never changes after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub pos: Vec2,
    pub kind: PlatformKind,
    /// Horizontal velocity, nonzero only for Moving platforms
    pub dx: f32,
    /// Remove after any resolved collision. Only Fragile sets this today;
    /// kept as its own flag rather than folded into the kind.
    pub disappear: bool,
    /// Landing count for Cracked platforms (0 -> 1 -> removed)
    pub hits: u8,
    /// Ghost flicker state
    pub ghost_visible: bool,
    pub ghost_timer: u32,
    /// Set for SpringSide platforms
    pub spring_direction: Option<SpringDirection>,
    /// Remaining jiggle ticks after a cracked platform takes its first hit
    pub shake: u8,
}

impl Platform {
    pub fn new(pos: Vec2, kind: PlatformKind) -> Self {
        Self {
            pos,
            kind,
            dx: 0.0,
            disappear: false,
            hits: 0,
            ghost_visible: true,
            ghost_timer: 0,
            spring_direction: None,
            shake: 0,
        }
    }

    /// Whether a player with the given vertical velocity may land here.
    /// Invisible ghosts never collide; clouds only catch a falling player.
    pub fn landable(&self, player_dy: f32) -> bool {
        match self.kind {
            PlatformKind::Ghost => self.ghost_visible,
            PlatformKind::Cloud => player_dy > 0.0,
            _ => true,
        }
    }
}

/// Item variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// Immediate score pickup
    Star,
    /// Arms the one-shot double-jump flag
    Jetpack,
}

/// A pickup entity, spawned above some platforms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub pos: Vec2,
    pub kind: ItemKind,
}

/// The player. Mutated only by the tick handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Vertical velocity (positive = falling)
    pub dy: f32,
    /// Monotonic; grows from camera scroll and star pickups
    pub score: u64,
    /// One-shot boost flag, cleared by the next platform collision
    pub jetpack: bool,
    /// Difficulty tier derived from score (1..=10)
    pub tier: u8,
}

impl Player {
    /// Fresh player centered near the bottom of the screen
    pub fn spawn(bounds: &Bounds) -> Self {
        Self {
            pos: Vec2::new(
                bounds.width / 2.0 - PLAYER_SIZE / 2.0,
                bounds.height - 150.0,
            ),
            dy: 0.0,
            score: 0,
            jetpack: false,
            tier: 1,
        }
    }
}

/// Active horizontal displacement from a side spring.
///
/// The original scheduled this as a detached timer that could outlive a
/// restart; modeling it as state on the session removes that bug while
/// keeping the gradual-push feel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpringPush {
    pub direction: f32,
    pub remaining: u32,
}

/// Playfield dimensions in logical pixels
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        }
    }
}

/// Complete game state. Owns everything a tick mutates; the renderer reads
/// it as an immutable snapshot.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Session RNG; all randomness flows through here
    pub rng: Pcg32,
    pub bounds: Bounds,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    /// Ordered by creation; iteration order matters only for pruning
    pub platforms: Vec<Platform>,
    pub items: Vec<Item>,
    /// In-flight side-spring push, if any
    pub spring_push: Option<SpringPush>,
    /// Shake magnitude for the renderer, decays each tick
    pub screen_shake: f32,
    /// Read-only difficulty lookup, validated at construction
    pub tiers: TierTable,
}

impl GameState {
    /// Create a session in the Start phase with a seeded world
    pub fn new(seed: u64, bounds: Bounds, tiers: TierTable) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            bounds,
            phase: GamePhase::Start,
            time_ticks: 0,
            player: Player::spawn(&bounds),
            platforms: Vec::new(),
            items: Vec::new(),
            spring_push: None,
            screen_shake: 0.0,
            tiers,
        };
        state.build_world();
        state
    }

    /// Reinitialize for a fresh run: player, world, score, and any
    /// leftover spring push from the previous session.
    pub fn reset(&mut self) {
        self.player = Player::spawn(&self.bounds);
        self.platforms.clear();
        self.items.clear();
        self.spring_push = None;
        self.screen_shake = 0.0;
        self.build_world();
    }

    /// Diagnostic level-jump entry: reset, pre-seed the score for `tier`,
    /// and go straight to Playing.
    pub fn start_at_tier(&mut self, tier: u8) {
        let tier = tier.clamp(1, MAX_TIER);
        self.reset();
        self.player.score = (tier as u64 - 1) * SCORE_PER_TIER;
        self.player.tier = tier_for_score(self.player.score);
        self.phase = GamePhase::Playing;
    }

    /// The tier config for the player's current tier
    pub fn tier_config(&self) -> &super::level::TierConfig {
        self.tiers.config_for(self.player.tier)
    }

    /// Base platform directly under the spawn position, then the rest
    /// generated above it.
    fn build_world(&mut self) {
        let base = Platform::new(
            Vec2::new(self.player.pos.x - 15.0, self.player.pos.y + PLAYER_SIZE),
            PlatformKind::Normal,
        );
        self.platforms.push(base);
        for _ in 1..INITIAL_PLATFORMS {
            self.spawn_platform();
        }
    }
}
