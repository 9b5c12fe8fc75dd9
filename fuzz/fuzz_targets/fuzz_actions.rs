#![no_main]

//! Action-sequence fuzzer.
//!
//! Feeds arbitrary action sequences through the reducer and asserts the
//! state invariants after every step. This catches clamping and
//! item-accounting bugs that single-action tests miss.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use skirmish::game::{Action, GameState, MAX_ENERGY, PlayerId, check_invariants};

/// Item ids covering both loadouts plus an id nobody holds.
const ITEM_IDS: [&str; 5] = ["apple", "burger", "laser", "dagger", "bogus"];

/// A fuzzer-generated action.
#[derive(Arbitrary, Debug, Clone)]
enum FuzzAction {
    Eat { second_player: bool },
    Attack { second_player: bool },
    UseItem { second_player: bool, item: u8 },
    Restart,
}

fn player(second: bool) -> PlayerId {
    if second { PlayerId::Two } else { PlayerId::One }
}

fuzz_target!(|input: Vec<FuzzAction>| {
    let mut state = GameState::new("Yad", "Diks");

    for fuzz_action in input.into_iter().take(256) {
        let action = match fuzz_action {
            FuzzAction::Eat { second_player } => Action::Eat {
                player: player(second_player),
            },
            FuzzAction::Attack { second_player } => Action::Attack {
                attacker: player(second_player),
            },
            FuzzAction::UseItem {
                second_player,
                item,
            } => Action::UseItem {
                player: player(second_player),
                item: ITEM_IDS[item as usize % ITEM_IDS.len()].to_string(),
            },
            FuzzAction::Restart => Action::Restart,
        };

        let events = state.apply(&action);

        // Ignored actions must not change anything observable
        if events.is_empty() {
            assert!(state.is_over() || matches!(action, Action::UseItem { .. }));
        }

        let violations = check_invariants(&state);
        assert!(violations.is_empty(), "Invariants violated: {violations:?}");
        assert!(state.player(PlayerId::One).energy() <= MAX_ENERGY);
        assert!(state.player(PlayerId::Two).energy() <= MAX_ENERGY);
    }
});
