//! Difficulty tiers
//!
//! Maps cumulative score to a tier (1..=10) and holds the per-tier balance
//! table: which platform kinds can spawn, their weights, spacing, speeds,
//! and gravity. The table is read-only at runtime and validated up front;
//! a table with gaps is a configuration defect, not something the
//! simulation tolerates mid-session.

use thiserror::Error;

use super::state::PlatformKind;
use crate::consts::{MAX_TIER, SCORE_PER_TIER};

/// Map cumulative score to a difficulty tier, capped at `MAX_TIER`.
/// Pure and monotone non-decreasing in `score`.
pub fn tier_for_score(score: u64) -> u8 {
    (1 + score / SCORE_PER_TIER).min(MAX_TIER as u64) as u8
}

/// Immutable per-tier balance record.
///
/// The `chance_*` weights are spawn probabilities for the hazard kinds; they
/// do not sum to 1, the remainder falls through to Normal. Boost probability
/// deliberately shrinks as tiers rise (the helpful platform gets rarer);
/// every other hazard only grows.
#[derive(Debug, Clone, Copy)]
pub struct TierConfig {
    pub tier: u8,
    pub name: &'static str,
    pub chance_fragile: f32,
    pub chance_moving: f32,
    pub chance_boost: f32,
    pub chance_spring_side: f32,
    pub chance_ghost: f32,
    pub chance_cloud: f32,
    pub chance_cracked: f32,
    /// Fixed vertical gap between consecutive platforms
    pub max_spacing: f32,
    pub player_speed: f32,
    pub platform_speed: f32,
    pub gravity: f32,
}

impl TierConfig {
    /// Hazard weights in spawn-selection order.
    ///
    /// The order is load-bearing: selection walks this list accumulating
    /// unnormalized probabilities, so reordering changes the observed
    /// distribution. Keep it as fragile, moving, boost, spring_side, ghost,
    /// cloud, cracked.
    pub fn hazard_chances(&self) -> [(PlatformKind, f32); 7] {
        [
            (PlatformKind::Fragile, self.chance_fragile),
            (PlatformKind::Moving, self.chance_moving),
            (PlatformKind::Boost, self.chance_boost),
            (PlatformKind::SpringSide, self.chance_spring_side),
            (PlatformKind::Ghost, self.chance_ghost),
            (PlatformKind::Cloud, self.chance_cloud),
            (PlatformKind::Cracked, self.chance_cracked),
        ]
    }
}

/// Validation failure for an externally supplied tier table
#[derive(Debug, Error)]
pub enum TierTableError {
    #[error("expected {expected} tier entries, got {got}")]
    WrongCount { expected: usize, got: usize },
    #[error("entry {index} has tier {got}, expected {expected}")]
    MisplacedTier { index: usize, expected: u8, got: u8 },
    #[error("tier {tier}: {kind:?} probability {value} is outside [0, 1]")]
    InvalidChance {
        tier: u8,
        kind: PlatformKind,
        value: f32,
    },
}

/// Read-only tier lookup table, indexed by tier (1..=10)
#[derive(Debug, Clone)]
pub struct TierTable {
    entries: Vec<TierConfig>,
}

impl TierTable {
    /// Build a table from external entries, rejecting gaps and bad weights.
    pub fn new(entries: Vec<TierConfig>) -> Result<Self, TierTableError> {
        if entries.len() != MAX_TIER as usize {
            return Err(TierTableError::WrongCount {
                expected: MAX_TIER as usize,
                got: entries.len(),
            });
        }
        for (index, entry) in entries.iter().enumerate() {
            let expected = index as u8 + 1;
            if entry.tier != expected {
                return Err(TierTableError::MisplacedTier {
                    index,
                    expected,
                    got: entry.tier,
                });
            }
            for (kind, chance) in entry.hazard_chances() {
                if !(0.0..=1.0).contains(&chance) || chance.is_nan() {
                    return Err(TierTableError::InvalidChance {
                        tier: entry.tier,
                        kind,
                        value: chance,
                    });
                }
            }
        }
        Ok(Self { entries })
    }

    /// Config lookup; out-of-range tiers clamp to the nearest valid tier.
    pub fn config_for(&self, tier: u8) -> &TierConfig {
        let index = tier.clamp(1, MAX_TIER) as usize - 1;
        &self.entries[index]
    }

    /// The stock 10-tier progression.
    pub fn standard() -> Self {
        let entries = vec![
            TierConfig {
                tier: 1,
                name: "Rookie",
                chance_fragile: 0.0,
                chance_moving: 0.15,
                chance_boost: 0.0,
                chance_spring_side: 0.0,
                chance_ghost: 0.0,
                chance_cloud: 0.0,
                chance_cracked: 0.0,
                max_spacing: 115.0,
                player_speed: 6.0,
                platform_speed: 1.5,
                gravity: 0.33,
            },
            TierConfig {
                tier: 2,
                name: "Apprentice",
                chance_fragile: 0.1,
                chance_moving: 0.2,
                chance_boost: 0.0,
                chance_spring_side: 0.0,
                chance_ghost: 0.0,
                chance_cloud: 0.0,
                chance_cracked: 0.0,
                max_spacing: 120.0,
                player_speed: 6.2,
                platform_speed: 1.6,
                gravity: 0.34,
            },
            TierConfig {
                tier: 3,
                name: "Adventurer",
                chance_fragile: 0.15,
                chance_moving: 0.22,
                chance_boost: 0.08,
                chance_spring_side: 0.0,
                chance_ghost: 0.0,
                chance_cloud: 0.0,
                chance_cracked: 0.0,
                max_spacing: 125.0,
                player_speed: 6.5,
                platform_speed: 1.7,
                gravity: 0.35,
            },
            TierConfig {
                tier: 4,
                name: "Explorer",
                chance_fragile: 0.18,
                chance_moving: 0.25,
                chance_boost: 0.08,
                chance_spring_side: 0.1,
                chance_ghost: 0.0,
                chance_cloud: 0.0,
                chance_cracked: 0.0,
                max_spacing: 130.0,
                player_speed: 6.8,
                platform_speed: 1.8,
                gravity: 0.36,
            },
            TierConfig {
                tier: 5,
                name: "Challenger",
                chance_fragile: 0.2,
                chance_moving: 0.28,
                chance_boost: 0.08,
                chance_spring_side: 0.1,
                chance_ghost: 0.12,
                chance_cloud: 0.0,
                chance_cracked: 0.0,
                max_spacing: 135.0,
                player_speed: 7.1,
                platform_speed: 1.9,
                gravity: 0.37,
            },
            TierConfig {
                tier: 6,
                name: "Veteran",
                chance_fragile: 0.22,
                chance_moving: 0.3,
                chance_boost: 0.07,
                chance_spring_side: 0.1,
                chance_ghost: 0.13,
                chance_cloud: 0.12,
                chance_cracked: 0.0,
                max_spacing: 140.0,
                player_speed: 7.5,
                platform_speed: 2.0,
                gravity: 0.38,
            },
            TierConfig {
                tier: 7,
                name: "Master",
                chance_fragile: 0.24,
                chance_moving: 0.32,
                chance_boost: 0.07,
                chance_spring_side: 0.1,
                chance_ghost: 0.14,
                chance_cloud: 0.12,
                chance_cracked: 0.1,
                max_spacing: 145.0,
                player_speed: 7.8,
                platform_speed: 2.1,
                gravity: 0.39,
            },
            TierConfig {
                tier: 8,
                name: "Legendary",
                chance_fragile: 0.26,
                chance_moving: 0.33,
                chance_boost: 0.04,
                chance_spring_side: 0.1,
                chance_ghost: 0.15,
                chance_cloud: 0.13,
                chance_cracked: 0.12,
                max_spacing: 155.0,
                player_speed: 8.5,
                platform_speed: 2.2,
                gravity: 0.45,
            },
            TierConfig {
                tier: 9,
                name: "Epic",
                chance_fragile: 0.28,
                chance_moving: 0.35,
                chance_boost: 0.03,
                chance_spring_side: 0.1,
                chance_ghost: 0.17,
                chance_cloud: 0.14,
                chance_cracked: 0.14,
                max_spacing: 160.0,
                player_speed: 9.0,
                platform_speed: 2.4,
                gravity: 0.54,
            },
            TierConfig {
                tier: 10,
                name: "Impossible",
                chance_fragile: 0.3,
                chance_moving: 0.38,
                chance_boost: 0.02,
                chance_spring_side: 0.1,
                chance_ghost: 0.2,
                chance_cloud: 0.15,
                chance_cracked: 0.15,
                max_spacing: 165.0,
                player_speed: 10.0,
                platform_speed: 2.6,
                gravity: 0.55,
            },
        ];
        Self { entries }
    }
}
