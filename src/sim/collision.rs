//! Overlap tests
//!
//! Pure geometry helpers shared by the tick handler. Everything is a plain
//! AABB check against positions as they stand after this tick's movement;
//! there is no swept test, so a fast-falling player can skip a platform
//! entirely. Accepted behavior, not corrected here.

use glam::Vec2;

use crate::consts::{PLATFORM_WIDTH, PLAYER_SIZE};

/// Axis-aligned overlap between two boxes.
pub fn aabb_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    a_pos.x < b_pos.x + b_size.x
        && a_pos.x + a_size.x > b_pos.x
        && a_pos.y < b_pos.y + b_size.y
        && a_pos.y + a_size.y > b_pos.y
}

/// Landing test: horizontal overlap with the player's bottom edge inside the
/// platform's top band. The band is one player-height tall, matching the
/// original tuning.
pub fn lands_on(player_pos: Vec2, plat_pos: Vec2) -> bool {
    let bottom = player_pos.y + PLAYER_SIZE;
    player_pos.x < plat_pos.x + PLATFORM_WIDTH
        && player_pos.x + PLAYER_SIZE > plat_pos.x
        && bottom > plat_pos.y
        && bottom < plat_pos.y + PLAYER_SIZE
}
