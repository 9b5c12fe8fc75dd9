//! Game rules for skirmish.
//!
//! Implements the duel rules:
//! - Two fixed players with energy clamped to `[0, 100]`
//! - Per-player inventories of consumable food and weapon items
//! - A tagged action type consumed by a single reducer
//! - Win detection and the terminal game-over phase
//! - Invariant checks over the whole state

mod actions;
mod invariants;
mod item;
mod player;
mod state;

pub use actions::{Action, Event};
pub use invariants::{InvariantViolation, assert_invariants, check_invariants};
pub use item::{Inventory, Item, ItemKind};
pub use player::{MAX_ENERGY, Player, PlayerId, START_ENERGY};
pub use state::{ATTACK_AMOUNT, EAT_AMOUNT, GameState, Phase};
