//! World upkeep
//!
//! Per-tick platform behavior (movement, ghost flicker, cracked shake),
//! pruning of entities that scrolled out below the camera, and topping up
//! the visible platform set via the generator.

use super::r#gen;
use super::state::{GameState, PlatformKind};
use crate::consts::*;

impl GameState {
    /// Advance platform-side behavior for one tick.
    pub(crate) fn update_platforms(&mut self) {
        let jiggle_phase = self.time_ticks as f32 * 0.8;
        for plat in &mut self.platforms {
            // Cracked platforms jiggle for a few ticks after the first hit
            if plat.shake > 0 {
                plat.pos.y += jiggle_phase.sin() * 1.5;
                plat.shake -= 1;
            }

            if plat.kind == PlatformKind::Ghost {
                plat.ghost_timer += 1;
                if plat.ghost_timer >= GHOST_TOGGLE_TICKS {
                    plat.ghost_visible = !plat.ghost_visible;
                    plat.ghost_timer = 0;
                }
            }

            if plat.dx != 0.0 {
                plat.pos.x += plat.dx;
                if plat.pos.x <= 0.0 || plat.pos.x + PLATFORM_WIDTH >= self.bounds.width {
                    plat.dx = -plat.dx;
                }
            }
        }
    }

    /// Drop entities that fell behind the camera. Platforms get a grace
    /// margin below the screen; items are cut at the bottom edge.
    pub(crate) fn prune(&mut self) {
        let platform_cutoff = self.bounds.height + PRUNE_MARGIN;
        self.platforms.retain(|p| p.pos.y <= platform_cutoff);
        let item_cutoff = self.bounds.height;
        self.items.retain(|i| i.pos.y <= item_cutoff);
    }

    /// Keep the upcoming stretch of the world stocked: generate while the
    /// topmost platform is below the look-ahead line and the set is under
    /// target. An empty set (everything pruned at once) is recovered with a
    /// bulk batch; never surfaced as an error.
    pub(crate) fn maintain(&mut self) {
        if self.platforms.is_empty() {
            log::debug!("world empty, bulk-regenerating {BULK_REGEN_COUNT} platforms");
            for _ in 0..BULK_REGEN_COUNT {
                self.spawn_platform();
            }
            return;
        }

        let look_ahead = -(self.bounds.height * SPAWN_AHEAD_FACTOR);
        loop {
            let topmost = self
                .platforms
                .iter()
                .map(|p| p.pos.y)
                .fold(f32::INFINITY, f32::min);
            if topmost <= look_ahead || self.platforms.len() >= MAX_PLATFORMS {
                break;
            }
            self.spawn_platform();
        }
    }

    /// Append one platform (and possibly its item) above the newest one.
    pub(crate) fn spawn_platform(&mut self) {
        let config = *self.tiers.config_for(self.player.tier);
        let (platform, item) = match self.platforms.last() {
            None => (r#gen::center_platform(&self.bounds), None),
            Some(last) => {
                let platform =
                    r#gen::next_platform(&mut self.rng, last, &config, self.bounds.width);
                let item = r#gen::attach_item(&mut self.rng, &platform, self.player.tier);
                (platform, item)
            }
        };
        self.platforms.push(platform);
        if let Some(item) = item {
            self.items.push(item);
        }
    }

    /// Shift every world entity down by `offset` (the camera moved up).
    /// Net idempotent: +o then -o restores all y coordinates.
    pub fn apply_scroll(&mut self, offset: f32) {
        for plat in &mut self.platforms {
            plat.pos.y += offset;
        }
        for item in &mut self.items {
            item.pos.y += offset;
        }
    }
}
