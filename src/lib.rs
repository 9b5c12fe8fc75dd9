// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Skirmish: a two-player terminal energy duel.
//!
//! Each player has an energy value in `[0, 100]` and can eat to gain
//! energy, attack to drain the opponent, or consume single-use food and
//! weapon items. The game ends when a player's energy reaches zero;
//! restart resets energies (but not inventories) for another round.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │      CLI / TUI (clap, ratatui)      │
//! ├─────────────────────────────────────┤
//! │  Text rendering + scripted runner   │
//! ├─────────────────────────────────────┤
//! │  Game core (players, items, rules)  │
//! └─────────────────────────────────────┘
//! ```
//!
//! The game core is pure and UI-free: presentation layers hold a
//! [`GameState`], feed it [`Action`]s, and observe the returned
//! [`Event`] descriptors.

pub mod game;
pub mod render;
pub mod script;

// Re-export key game types at crate root for convenience
pub use game::{
    ATTACK_AMOUNT, Action, EAT_AMOUNT, Event, GameState, Inventory, Item, ItemKind, MAX_ENERGY,
    Phase, Player, PlayerId, START_ENERGY,
};
