//! Per-tick simulation
//!
//! One call to [`tick`] advances the session by a single frame: input and
//! spring push, gravity, platform collision dispatch, item pickups, camera
//! scroll, tier re-derivation, and the phase machine. The host invokes it at
//! its natural refresh cadence; there are no internal timers.

use super::collision;
use super::level::tier_for_score;
use super::state::{GamePhase, GameState, ItemKind, PlatformKind, SpringDirection, SpringPush};
use crate::consts::*;
use glam::Vec2;

/// Input state polled once per tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Move-left is held
    pub left: bool,
    /// Move-right is held
    pub right: bool,
    /// Start/restart action (click, tap, Enter)
    pub start: bool,
}

/// Advance the session by one tick.
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::Start | GamePhase::GameOver => {
            if input.start {
                state.reset();
                state.phase = GamePhase::Playing;
                log::info!("session started (seed {})", state.seed);
            }
            return;
        }
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;

    // Decay screen shake
    state.screen_shake *= 0.9;
    if state.screen_shake < 0.01 {
        state.screen_shake = 0.0;
    }

    move_player(state, input);

    // World upkeep still runs on the tick the player falls out, matching the
    // original loop which checked the phase only once per frame.
    state.update_platforms();
    state.prune();
    state.maintain();
}

/// Integrate the player and resolve all collisions for this tick.
fn move_player(state: &mut GameState, input: &TickInput) {
    let config = *state.tiers.config_for(state.player.tier);

    // 1. Horizontal input, active spring push, screen wrap
    if input.left {
        state.player.pos.x -= config.player_speed;
    }
    if input.right {
        state.player.pos.x += config.player_speed;
    }
    if let Some(push) = &mut state.spring_push {
        state.player.pos.x += push.direction * SPRING_PUSH_STEP;
        push.remaining -= 1;
        if push.remaining == 0 {
            state.spring_push = None;
        }
    }
    let width = state.bounds.width;
    if state.player.pos.x + PLAYER_SIZE < 0.0 {
        state.player.pos.x = width;
    }
    if state.player.pos.x > width {
        state.player.pos.x = -PLAYER_SIZE;
    }

    // 2. Gravity
    state.player.dy += config.gravity;
    state.player.pos.y += state.player.dy;

    // 3-4. Platform collisions
    resolve_platform_collisions(state);

    // 5. Item pickups (any motion direction)
    resolve_item_pickups(state);

    // 6. Camera scroll: net upward progress is the score driver
    let midline = state.bounds.height / 2.0;
    if state.player.pos.y < midline {
        let offset = midline - state.player.pos.y;
        state.player.pos.y = midline;
        state.apply_scroll(offset);
        state.player.score += offset.floor() as u64;
    }

    // 7. Tier re-derivation and fall-through detection
    let tier = tier_for_score(state.player.score);
    if tier != state.player.tier {
        log::info!("tier up: {} -> {}", state.player.tier, tier);
        state.player.tier = tier;
    }
    if state.player.pos.y > state.bounds.height {
        state.phase = GamePhase::GameOver;
        log::info!(
            "game over at tier {} with score {}",
            state.player.tier,
            state.player.score
        );
    }
}

/// Dispatch collisions by platform kind.
///
/// Every overlapping platform is tested in iteration order against the live
/// player state; the first bounce flips `dy` negative, which naturally gates
/// the rest of the list this tick. Positions are post-move, so a fast fall
/// can tunnel straight through a platform.
fn resolve_platform_collisions(state: &mut GameState) {
    let tier = state.player.tier;
    let mut removed: Vec<usize> = Vec::new();

    for (i, plat) in state.platforms.iter_mut().enumerate() {
        if state.player.dy <= 0.0 {
            continue;
        }
        if !plat.landable(state.player.dy) {
            continue;
        }
        if !collision::lands_on(state.player.pos, plat.pos) {
            continue;
        }

        match plat.kind {
            PlatformKind::Boost => {
                state.screen_shake = 12.0;
                let multiplier = if tier == MAX_TIER { 2.0 } else { 2.5 };
                state.player.dy = JUMP_FORCE * multiplier;
                removed.push(i);
            }
            PlatformKind::SpringSide => {
                state.screen_shake = 10.0;
                state.player.dy = JUMP_FORCE * 1.2;
                let direction = plat
                    .spring_direction
                    .unwrap_or(SpringDirection::Right)
                    .sign();
                state.spring_push = Some(SpringPush {
                    direction,
                    remaining: SPRING_PUSH_TICKS,
                });
                removed.push(i);
            }
            PlatformKind::Cracked => {
                if plat.hits == 0 {
                    plat.hits = 1;
                    plat.shake = 10;
                    state.screen_shake = 4.0;
                    state.player.dy = JUMP_FORCE;
                } else {
                    state.screen_shake = 10.0;
                    state.player.dy = JUMP_FORCE;
                    removed.push(i);
                }
            }
            PlatformKind::Fragile => {
                state.screen_shake = 10.0;
                state.player.dy = JUMP_FORCE;
                removed.push(i);
            }
            PlatformKind::Normal
            | PlatformKind::Moving
            | PlatformKind::Ghost
            | PlatformKind::Cloud => {
                state.player.dy = if state.player.jetpack {
                    JUMP_FORCE * 2.0
                } else {
                    JUMP_FORCE
                };
            }
        }

        // Cleared after any resolved collision, whatever the kind
        state.player.jetpack = false;

        if plat.disappear && removed.last() != Some(&i) {
            removed.push(i);
        }
    }

    // Indices were pushed in ascending order
    for i in removed.into_iter().rev() {
        state.platforms.remove(i);
    }
}

fn resolve_item_pickups(state: &mut GameState) {
    let player_pos = state.player.pos;
    let player_size = Vec2::splat(PLAYER_SIZE);
    let item_size = Vec2::splat(ITEM_SIZE);
    let mut gained = 0u64;
    let mut jetpack = false;

    state.items.retain(|item| {
        if collision::aabb_overlap(player_pos, player_size, item.pos, item_size) {
            match item.kind {
                ItemKind::Star => gained += STAR_SCORE,
                ItemKind::Jetpack => jetpack = true,
            }
            false
        } else {
            true
        }
    });

    state.player.score += gained;
    if jetpack {
        state.player.jetpack = true;
    }
}
