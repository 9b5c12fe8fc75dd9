//! Scripted, headless match execution.
//!
//! A script is a JSON document listing actions to feed through the
//! reducer, in order, against a fresh game with the default loadouts:
//!
//! ```json
//! {
//!   "players": ["Yad", "Diks"],
//!   "actions": [
//!     { "type": "eat", "player": "one" },
//!     { "type": "attack", "attacker": "two" },
//!     { "type": "use_item", "player": "one", "item": "laser" }
//!   ]
//! }
//! ```
//!
//! This drives the exact same rules as the interactive TUI, which makes
//! whole matches reproducible and testable without a terminal.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::game::{Action, GameState, PlayerId};
use crate::render;

/// Default player names.
pub const DEFAULT_NAMES: [&str; 2] = ["Yad", "Diks"];

/// A JSON-encoded sequence of actions to run without a UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    /// Optional display names for the two players.
    #[serde(default)]
    pub players: Option<[String; 2]>,
    /// Actions applied in order.
    pub actions: Vec<Action>,
}

impl Script {
    /// Parse a script from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON of the expected
    /// shape.
    pub fn from_json(text: &str) -> Result<Self, ScriptError> {
        serde_json::from_str(text).map_err(ScriptError::Json)
    }

    /// Load a script from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let text = fs::read_to_string(path).map_err(ScriptError::Io)?;
        Self::from_json(&text)
    }
}

/// Error loading or parsing a script.
#[derive(Debug)]
pub enum ScriptError {
    /// Reading the script file failed.
    Io(std::io::Error),
    /// The script was not valid JSON of the expected shape.
    Json(serde_json::Error),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read script: {e}"),
            Self::Json(e) => write!(f, "invalid script: {e}"),
        }
    }
}

impl std::error::Error for ScriptError {}

/// Outcome of a scripted match.
#[derive(Debug, Clone)]
pub struct MatchResult {
    /// Winner, if the script ended the game (and no later restart reopened
    /// it).
    pub winner: Option<PlayerId>,
    /// Actions that changed state.
    pub actions_applied: u32,
    /// Actions ignored: issued after game over, or stale item ids.
    pub actions_ignored: u32,
    /// Chronological log of everything that happened.
    pub log: Vec<String>,
    /// Final game state.
    pub state: GameState,
}

/// Run a script against a fresh game with the default loadouts.
#[must_use]
pub fn run_script(script: &Script) -> MatchResult {
    let [p1_name, p2_name] = match &script.players {
        Some(names) => [names[0].clone(), names[1].clone()],
        None => [DEFAULT_NAMES[0].to_string(), DEFAULT_NAMES[1].to_string()],
    };

    let mut state = GameState::new(p1_name, p2_name);
    let mut log = Vec::new();
    let mut actions_applied = 0u32;
    let mut actions_ignored = 0u32;

    for action in &script.actions {
        let events = state.apply(action);
        if events.is_empty() {
            actions_ignored += 1;
        } else {
            actions_applied += 1;
        }
        for event in &events {
            log.push(render::describe(&state, event));
        }
    }

    MatchResult {
        winner: state.winner(),
        actions_applied,
        actions_ignored,
        log,
        state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attack_script(count: usize) -> Script {
        Script {
            players: None,
            actions: vec![
                Action::Attack {
                    attacker: PlayerId::One,
                };
                count
            ],
        }
    }

    #[test]
    fn test_from_json_full_document() {
        let script = Script::from_json(
            r#"{
                "players": ["Alice", "Bob"],
                "actions": [
                    { "type": "eat", "player": "one" },
                    { "type": "use_item", "player": "two", "item": "dagger" },
                    { "type": "restart" }
                ]
            }"#,
        )
        .expect("valid script");

        assert_eq!(
            script.players,
            Some(["Alice".to_string(), "Bob".to_string()])
        );
        assert_eq!(script.actions.len(), 3);
        assert_eq!(script.actions[2], Action::Restart);
    }

    #[test]
    fn test_from_json_names_are_optional() {
        let script = Script::from_json(r#"{ "actions": [] }"#).expect("valid script");
        assert_eq!(script.players, None);
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(Script::from_json("not json").is_err());
        assert!(Script::from_json(r#"{ "actions": [{ "type": "fly" }] }"#).is_err());
    }

    #[test]
    fn test_run_script_to_victory() {
        // Ten fixed-strength attacks drain 50 energy exactly
        let result = run_script(&attack_script(10));

        assert_eq!(result.winner, Some(PlayerId::One));
        assert_eq!(result.actions_applied, 10);
        assert_eq!(result.actions_ignored, 0);
        assert_eq!(result.state.player(PlayerId::Two).energy(), 0);
        // 10 attack lines plus the defeat line
        assert_eq!(result.log.len(), 11);
        assert_eq!(result.log[10], "Diks is defeated!");
    }

    #[test]
    fn test_run_script_counts_ignored_actions() {
        // Two extra attacks after the game is decided
        let result = run_script(&attack_script(12));

        assert_eq!(result.actions_applied, 10);
        assert_eq!(result.actions_ignored, 2);
        assert_eq!(result.winner, Some(PlayerId::One));
    }

    #[test]
    fn test_run_script_restart_reopens_match() {
        let mut script = attack_script(10);
        script.actions.push(Action::Restart);
        let result = run_script(&script);

        assert_eq!(result.winner, None);
        assert_eq!(result.state.player(PlayerId::Two).energy(), 50);
        assert_eq!(result.actions_applied, 11);
    }

    #[test]
    fn test_run_script_uses_custom_names() {
        let script = Script {
            players: Some(["Alice".to_string(), "Bob".to_string()]),
            actions: vec![Action::Eat {
                player: PlayerId::Two,
            }],
        };
        let result = run_script(&script);

        assert_eq!(result.log, vec!["Bob eats (+10) - energy: 60"]);
    }
}
