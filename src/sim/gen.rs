//! Procedural platform generation
//!
//! Places each platform relative to the previous one using the current tier
//! config, picks its kind by weighted draw, and rolls the optional item drop.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::level::TierConfig;
use super::state::{Bounds, Item, ItemKind, Platform, PlatformKind, SpringDirection};
use crate::consts::*;

/// Pick a platform kind for a uniform draw `r` in [0, 1).
///
/// Walks the tier's hazard list in its fixed order, accumulating each weight
/// into a running threshold; the first kind whose threshold exceeds `r` wins,
/// otherwise Normal. Weights are not normalized, so the walk order is part of
/// the contract (see [`TierConfig::hazard_chances`]).
pub fn select_kind(r: f32, config: &TierConfig) -> PlatformKind {
    let mut cumulative = 0.0;
    for (kind, chance) in config.hazard_chances() {
        if chance <= 0.0 {
            continue;
        }
        cumulative += chance;
        if r < cumulative {
            return kind;
        }
    }
    PlatformKind::Normal
}

/// Generate the platform above `last`.
///
/// Vertical gap is the tier's spacing exactly; horizontal placement wanders
/// 60-260px to a random side of the predecessor, clamped inside the margins.
pub fn next_platform(
    rng: &mut Pcg32,
    last: &Platform,
    config: &TierConfig,
    screen_width: f32,
) -> Platform {
    let range: f32 = rng.random_range(60.0..260.0);
    let direction = if rng.random::<f32>() > 0.5 { 1.0 } else { -1.0 };
    let target_x = last.pos.x + direction * range;
    let x = target_x.clamp(EDGE_MARGIN, screen_width - PLATFORM_WIDTH - EDGE_MARGIN);
    let y = last.pos.y - config.max_spacing;

    let r: f32 = rng.random();
    let kind = select_kind(r, config);
    let mut platform = Platform::new(Vec2::new(x, y), kind);
    match kind {
        PlatformKind::Fragile => platform.disappear = true,
        PlatformKind::Moving => {
            let sign = if rng.random::<f32>() < 0.5 { 1.0 } else { -1.0 };
            platform.dx = sign * config.platform_speed;
        }
        PlatformKind::SpringSide => {
            platform.spring_direction = Some(if rng.random::<f32>() < 0.5 {
                SpringDirection::Left
            } else {
                SpringDirection::Right
            });
        }
        _ => {}
    }
    platform
}

/// Roll the per-platform item drop. Drops get rarer as tiers rise and the
/// roll never goes negative.
pub fn attach_item(rng: &mut Pcg32, platform: &Platform, tier: u8) -> Option<Item> {
    let chance = (0.12 - 0.01 * tier as f32).max(0.0);
    if rng.random::<f32>() >= chance {
        return None;
    }
    let kind = if rng.random::<f32>() < 0.7 {
        ItemKind::Star
    } else {
        ItemKind::Jetpack
    };
    Some(Item {
        pos: Vec2::new(
            platform.pos.x + PLATFORM_WIDTH / 2.0 - ITEM_SIZE / 2.0,
            platform.pos.y - ITEM_SIZE,
        ),
        kind,
    })
}

/// Seed platform for an empty world, centered mid-screen.
pub fn center_platform(bounds: &Bounds) -> Platform {
    Platform::new(
        Vec2::new(
            bounds.width / 2.0 - PLATFORM_WIDTH / 2.0,
            bounds.height / 2.0,
        ),
        PlatformKind::Normal,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::TierTable;
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn flat_config() -> TierConfig {
        TierConfig {
            tier: 5,
            name: "test",
            chance_fragile: 0.3,
            chance_moving: 0.2,
            chance_boost: 0.1,
            chance_spring_side: 0.1,
            chance_ghost: 0.1,
            chance_cloud: 0.1,
            chance_cracked: 0.05,
            max_spacing: 135.0,
            player_speed: 7.1,
            platform_speed: 1.9,
            gravity: 0.37,
        }
    }

    #[test]
    fn test_select_kind_thresholds() {
        let config = flat_config();
        // Cumulative walk: fragile 0.3, moving 0.5, boost 0.6, spring 0.7,
        // ghost 0.8, cloud 0.9, cracked 0.95.
        assert_eq!(select_kind(0.0, &config), PlatformKind::Fragile);
        assert_eq!(select_kind(0.29, &config), PlatformKind::Fragile);
        assert_eq!(select_kind(0.3, &config), PlatformKind::Moving);
        assert_eq!(select_kind(0.55, &config), PlatformKind::Boost);
        assert_eq!(select_kind(0.65, &config), PlatformKind::SpringSide);
        assert_eq!(select_kind(0.75, &config), PlatformKind::Ghost);
        assert_eq!(select_kind(0.85, &config), PlatformKind::Cloud);
        assert_eq!(select_kind(0.94, &config), PlatformKind::Cracked);
        assert_eq!(select_kind(0.96, &config), PlatformKind::Normal);
    }

    #[test]
    fn test_select_kind_order_is_load_bearing() {
        // Equal weights: a draw in the first bucket must resolve to the first
        // kind in the fixed order, not an arbitrary one.
        let mut config = flat_config();
        config.chance_fragile = 0.2;
        config.chance_moving = 0.2;
        config.chance_boost = 0.2;
        assert_eq!(select_kind(0.15, &config), PlatformKind::Fragile);
        assert_eq!(select_kind(0.35, &config), PlatformKind::Moving);
        assert_eq!(select_kind(0.55, &config), PlatformKind::Boost);
    }

    #[test]
    fn test_disabled_kinds_are_skipped() {
        let table = TierTable::standard();
        // Tier 1 enables only moving; everything else falls through to Normal.
        let config = table.config_for(1);
        assert_eq!(select_kind(0.1, config), PlatformKind::Moving);
        assert_eq!(select_kind(0.2, config), PlatformKind::Normal);
        assert_eq!(select_kind(0.99, config), PlatformKind::Normal);
    }

    #[test]
    fn test_next_platform_gap_and_fields() {
        let mut rng = Pcg32::seed_from_u64(7);
        let config = flat_config();
        let last = center_platform(&Bounds::default());

        for _ in 0..200 {
            let plat = next_platform(&mut rng, &last, &config, SCREEN_WIDTH);
            assert_eq!(plat.pos.y, last.pos.y - config.max_spacing);
            assert_eq!(plat.hits, 0);
            match plat.kind {
                PlatformKind::Fragile => assert!(plat.disappear),
                PlatformKind::Moving => {
                    assert_eq!(plat.dx.abs(), config.platform_speed);
                }
                PlatformKind::SpringSide => assert!(plat.spring_direction.is_some()),
                PlatformKind::Ghost => {
                    assert!(plat.ghost_visible);
                    assert_eq!(plat.ghost_timer, 0);
                }
                _ => {
                    assert!(!plat.disappear);
                    assert_eq!(plat.dx, 0.0);
                }
            }
        }
    }

    #[test]
    fn test_attach_item_positions_and_kinds() {
        let mut rng = Pcg32::seed_from_u64(11);
        let plat = center_platform(&Bounds::default());
        let mut stars = 0;
        let mut jetpacks = 0;
        for _ in 0..5000 {
            if let Some(item) = attach_item(&mut rng, &plat, 1) {
                assert_eq!(
                    item.pos.x,
                    plat.pos.x + PLATFORM_WIDTH / 2.0 - ITEM_SIZE / 2.0
                );
                assert_eq!(item.pos.y, plat.pos.y - ITEM_SIZE);
                match item.kind {
                    ItemKind::Star => stars += 1,
                    ItemKind::Jetpack => jetpacks += 1,
                }
            }
        }
        // Tier 1 drop chance is 0.11; both kinds should show up over 5000 rolls
        assert!(stars > 0);
        assert!(jetpacks > 0);
        assert!(stars > jetpacks);
    }

    proptest! {
        /// Generated x always lands inside the margins regardless of seed
        /// and predecessor position.
        #[test]
        fn prop_platform_x_in_bounds(seed in 0u64..10_000, last_x in -200.0f32..700.0) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let config = flat_config();
            let mut last = center_platform(&Bounds::default());
            last.pos.x = last_x;
            let plat = next_platform(&mut rng, &last, &config, SCREEN_WIDTH);
            prop_assert!(plat.pos.x >= EDGE_MARGIN);
            prop_assert!(plat.pos.x <= SCREEN_WIDTH - PLATFORM_WIDTH - EDGE_MARGIN);
        }
    }
}
