//! Player actions and the events they produce.
//!
//! Every UI control maps to one [`Action`] variant; the reducer in
//! [`GameState::apply`](crate::game::GameState::apply) consumes actions and
//! returns [`Event`] descriptors for presentation layers to observe. The
//! rules never live in a UI callback.

use serde::{Deserialize, Serialize};

use crate::game::{ItemKind, PlayerId};

/// A player-issued command consumed by the reducer.
///
/// Serializes with a `type` tag, which is also the script wire format:
/// `{"type": "use_item", "player": "one", "item": "laser"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Eat to gain a fixed amount of energy.
    Eat {
        /// The player eating.
        player: PlayerId,
    },
    /// Attack the opponent for a fixed amount of damage.
    Attack {
        /// The player attacking; the target is always the opponent.
        attacker: PlayerId,
    },
    /// Consume an inventory item by id.
    UseItem {
        /// The player spending the item.
        player: PlayerId,
        /// Id of the item in that player's inventory.
        item: String,
    },
    /// Reset both players' energy and resume play.
    Restart,
}

/// Descriptor of a state change.
///
/// Presentation layers turn these into log lines and UI updates; the
/// descriptors carry enough to display without re-deriving game rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A player ate.
    Ate {
        /// Who ate.
        player: PlayerId,
        /// Energy gained (before clamping).
        amount: u8,
        /// The player's energy after the meal.
        energy: u8,
    },
    /// A player attacked the opponent.
    Attacked {
        /// Who attacked.
        attacker: PlayerId,
        /// Who was hit.
        target: PlayerId,
        /// Damage dealt (before clamping).
        amount: u8,
        /// The target's energy after the hit.
        target_energy: u8,
    },
    /// A player consumed an inventory item.
    ItemUsed {
        /// Who spent the item.
        player: PlayerId,
        /// Who was affected: the player itself for food, the opponent for
        /// a weapon.
        target: PlayerId,
        /// Display name of the item.
        item: String,
        /// Whether it healed or damaged.
        kind: ItemKind,
        /// Heal or damage amount (before clamping).
        magnitude: u8,
        /// The affected player's energy afterwards.
        energy: u8,
        /// Whether this use exhausted the item.
        depleted: bool,
    },
    /// A player's energy reached zero and the game ended.
    GameOver {
        /// The surviving player.
        winner: PlayerId,
        /// The player at zero energy.
        loser: PlayerId,
    },
    /// The game was reset for another round.
    Restarted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_json_wire_format() {
        let action = Action::UseItem {
            player: PlayerId::One,
            item: "laser".to_string(),
        };
        let json = serde_json::to_string(&action).unwrap();
        assert_eq!(json, r#"{"type":"use_item","player":"one","item":"laser"}"#);
    }

    #[test]
    fn test_action_json_round_trip() {
        let actions = vec![
            Action::Eat {
                player: PlayerId::One,
            },
            Action::Attack {
                attacker: PlayerId::Two,
            },
            Action::UseItem {
                player: PlayerId::Two,
                item: "dagger".to_string(),
            },
            Action::Restart,
        ];
        let json = serde_json::to_string(&actions).unwrap();
        let parsed: Vec<Action> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, actions);
    }

    #[test]
    fn test_restart_has_no_payload() {
        let parsed: Action = serde_json::from_str(r#"{"type":"restart"}"#).unwrap();
        assert_eq!(parsed, Action::Restart);
    }
}
