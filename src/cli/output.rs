//! Output formatting utilities for CLI.

use serde::Serialize;
use skirmish::PlayerId;
use skirmish::render;
use skirmish::script::MatchResult;

/// JSON-serializable match result.
#[derive(Debug, Serialize)]
pub(super) struct JsonMatchResult {
    /// Winner slot ("one"/"two"), null if the match is still open.
    winner: Option<PlayerId>,
    /// Actions that changed state.
    actions_applied: u32,
    /// Actions ignored after game over or with stale item ids.
    actions_ignored: u32,
    /// Final per-player state.
    players: Vec<JsonPlayerResult>,
    /// Chronological transcript.
    log: Vec<String>,
}

/// JSON-serializable per-player state.
#[derive(Debug, Serialize)]
pub(super) struct JsonPlayerResult {
    /// Display name.
    name: String,
    /// Final energy.
    energy: u8,
    /// Items still held, by id.
    items: Vec<String>,
}

impl JsonMatchResult {
    /// Create from a match result.
    pub(super) fn from_result(result: &MatchResult) -> Self {
        Self {
            winner: result.winner,
            actions_applied: result.actions_applied,
            actions_ignored: result.actions_ignored,
            players: [PlayerId::One, PlayerId::Two]
                .into_iter()
                .map(|id| {
                    let player = result.state.player(id);
                    JsonPlayerResult {
                        name: player.name.clone(),
                        energy: player.energy(),
                        items: result
                            .state
                            .inventory(id)
                            .items()
                            .iter()
                            .map(|item| item.id.clone())
                            .collect(),
                    }
                })
                .collect(),
            log: result.log.clone(),
        }
    }
}

/// Format a match result as human-readable text.
pub(super) fn format_text(result: &MatchResult, quiet: bool) -> String {
    let mut output = String::new();

    if !quiet {
        for line in &result.log {
            output.push_str(line);
            output.push('\n');
        }
        output.push('\n');
    }

    output.push_str(&render::render_text(&result.state));
    output.push('\n');

    match result.winner {
        Some(id) => {
            output.push_str(&format!("Winner: {}\n", result.state.player(id).name));
        }
        None => output.push_str("Winner: none (match still open)\n"),
    }
    output.push_str(&format!(
        "Actions: {} applied, {} ignored\n",
        result.actions_applied, result.actions_ignored
    ));

    output
}
