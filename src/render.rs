//! Plain-text rendering of game state and events.
//!
//! This is the presentation side of the core: it observes event
//! descriptors and state snapshots and produces strings. No game rules
//! live here.

use crate::game::{Event, GameState, ItemKind, MAX_ENERGY, Phase, PlayerId};

/// Width of the ASCII energy bar in characters.
const BAR_WIDTH: usize = 20;

/// Render the current state as a small text scoreboard.
///
/// Output format:
/// ```text
/// Yad         60/100 [############........]
/// Diks         0/100 [....................]
///
/// GAME OVER - Yad wins, Diks is defeated
/// ```
#[must_use]
pub fn render_text(state: &GameState) -> String {
    let mut output = String::new();

    for id in [PlayerId::One, PlayerId::Two] {
        let player = state.player(id);
        output.push_str(&format!(
            "{:<10} {:>3}/{MAX_ENERGY} [{}]\n",
            player.name,
            player.energy(),
            energy_bar(player.energy())
        ));
    }

    if let Phase::Over { winner } = state.phase {
        let winner_name = &state.player(winner).name;
        let loser_name = &state.player(winner.opponent()).name;
        output.push_str(&format!(
            "\nGAME OVER - {winner_name} wins, {loser_name} is defeated\n"
        ));
    }

    output
}

/// Proportional bar: energy 0-100 maps to 0-`BAR_WIDTH` filled cells.
fn energy_bar(energy: u8) -> String {
    let filled = usize::from(energy) * BAR_WIDTH / usize::from(MAX_ENERGY);
    let mut bar = String::with_capacity(BAR_WIDTH);
    for cell in 0..BAR_WIDTH {
        bar.push(if cell < filled { '#' } else { '.' });
    }
    bar
}

/// One human-readable log line for an event.
#[must_use]
pub fn describe(state: &GameState, event: &Event) -> String {
    match event {
        Event::Ate {
            player,
            amount,
            energy,
        } => {
            let name = &state.player(*player).name;
            format!("{name} eats (+{amount}) - energy: {energy}")
        }
        Event::Attacked {
            attacker,
            target,
            amount,
            target_energy,
        } => {
            let from = &state.player(*attacker).name;
            let to = &state.player(*target).name;
            format!("{from} attacks {to} (-{amount}) - {to} energy: {target_energy}")
        }
        Event::ItemUsed {
            player,
            target,
            item,
            kind,
            magnitude,
            energy,
            ..
        } => {
            let name = &state.player(*player).name;
            match kind {
                ItemKind::Food => format!("{name} uses {item} (+{magnitude}) - energy: {energy}"),
                ItemKind::Weapon => {
                    let to = &state.player(*target).name;
                    format!("{name} strikes {to} with {item} (-{magnitude}) - {to} energy: {energy}")
                }
            }
        }
        Event::GameOver { loser, .. } => {
            format!("{} is defeated!", state.player(*loser).name)
        }
        Event::Restarted => "Game restarted - ready for another round.".to_string(),
    }
}
