//! Game invariants - sanity checks that detect bugs.
//!
//! Every reducer path clamps energy and removes exhausted items, so these
//! should NEVER trigger in a correctly implemented game. If they do, it
//! indicates a bug, not a gameplay situation.

use crate::game::{GameState, MAX_ENERGY, Phase, PlayerId};

/// Invariant violation report.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all game invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(state: &GameState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    for id in [PlayerId::One, PlayerId::Two] {
        let player = state.player(id);
        if player.energy() > MAX_ENERGY {
            violations.push(InvariantViolation {
                message: format!(
                    "{} has energy {} > max {MAX_ENERGY}",
                    player.name,
                    player.energy()
                ),
            });
        }

        let items = state.inventory(id).items();
        for (idx, item) in items.iter().enumerate() {
            if item.remaining_uses == 0 {
                violations.push(InvariantViolation {
                    message: format!(
                        "{} holds exhausted item '{}' (0 uses left)",
                        player.name, item.id
                    ),
                });
            }
            if items[..idx].iter().any(|other| other.id == item.id) {
                violations.push(InvariantViolation {
                    message: format!("{} holds duplicate item id '{}'", player.name, item.id),
                });
            }
        }
    }

    if let Phase::Over { winner } = state.phase {
        let loser = winner.opponent();
        if state.player(loser).energy() != 0 {
            violations.push(InvariantViolation {
                message: format!(
                    "game is over but loser {} has energy {}",
                    state.player(loser).name,
                    state.player(loser).energy()
                ),
            });
        }
        if state.player(winner).is_defeated() {
            violations.push(InvariantViolation {
                message: format!(
                    "game is over but winner {} has zero energy",
                    state.player(winner).name
                ),
            });
        }
    }

    violations
}

/// Assert all game invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with a detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(state: &GameState) {
    let violations = check_invariants(state);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Game invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_state: &GameState) {}
