//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick cadence driven by the host
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! The host calls [`tick`] once per display refresh with the polled input
//! state; everything else is internal.

pub mod collision;
pub mod r#gen;
pub mod level;
pub mod state;
pub mod tick;
pub mod world;

pub use level::{TierConfig, TierTable, TierTableError, tier_for_score};
pub use state::{
    Bounds, GamePhase, GameState, Item, ItemKind, Platform, PlatformKind, Player, SpringDirection,
    SpringPush,
};
pub use tick::{TickInput, tick};
