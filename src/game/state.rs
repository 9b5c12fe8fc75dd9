//! Game state and the action reducer.

use crate::game::{Action, Event, Inventory, ItemKind, Player, PlayerId, assert_invariants};

/// Energy gained by the fixed "eat" control.
pub const EAT_AMOUNT: u8 = 10;

/// Damage dealt by the fixed "attack" control.
pub const ATTACK_AMOUNT: u8 = 5;

/// Whether the game is in progress or decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Both players can act.
    Playing,
    /// A player has been reduced to zero energy; only restart is accepted.
    Over {
        /// The player whose opponent was defeated.
        winner: PlayerId,
    },
}

/// Complete game state: two players, their inventories, and the phase.
///
/// All mutation goes through [`GameState::apply`] or the granular
/// operations it dispatches to; every path clamps energy to `[0, 100]` and
/// is a silent no-op once the game is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Both players, indexed by [`PlayerId::index`].
    pub players: [Player; 2],
    /// Per-player inventories, indexed by [`PlayerId::index`].
    pub inventories: [Inventory; 2],
    /// Current phase.
    pub phase: Phase,
}

impl GameState {
    /// Create a fresh game with the default starting loadouts.
    #[must_use]
    pub fn new(p1_name: impl Into<String>, p2_name: impl Into<String>) -> Self {
        Self::with_loadouts(
            p1_name,
            p2_name,
            Inventory::starter_one(),
            Inventory::starter_two(),
        )
    }

    /// Create a fresh game with custom loadouts.
    #[must_use]
    pub fn with_loadouts(
        p1_name: impl Into<String>,
        p2_name: impl Into<String>,
        p1_items: Inventory,
        p2_items: Inventory,
    ) -> Self {
        Self {
            players: [Player::new(p1_name), Player::new(p2_name)],
            inventories: [p1_items, p2_items],
            phase: Phase::Playing,
        }
    }

    /// Get a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Get a player's inventory.
    #[must_use]
    pub fn inventory(&self, id: PlayerId) -> &Inventory {
        &self.inventories[id.index()]
    }

    /// Check if the game has been decided.
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Over { .. })
    }

    /// The winner, if the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::Playing => None,
            Phase::Over { winner } => Some(winner),
        }
    }

    /// Eat: gain `amount` energy, clamped to 100.
    ///
    /// Returns `None` without touching state while the game is over.
    pub fn eat(&mut self, player: PlayerId, amount: u8) -> Option<Event> {
        if self.is_over() {
            return None;
        }
        let energy = self.player_mut(player).gain(amount);
        Some(Event::Ate {
            player,
            amount,
            energy,
        })
    }

    /// Attack the opponent: drain `amount` energy, clamped to 0.
    ///
    /// Emits `Attacked`, followed by `GameOver` when the hit decides the
    /// game. Returns no events while the game is over.
    pub fn attack(&mut self, attacker: PlayerId, amount: u8) -> Vec<Event> {
        if self.is_over() {
            return Vec::new();
        }
        let target = attacker.opponent();
        let target_energy = self.player_mut(target).lose(amount);
        let mut events = vec![Event::Attacked {
            attacker,
            target,
            amount,
            target_energy,
        }];
        self.check_defeat(target, &mut events);
        events
    }

    /// Consume an inventory item by id.
    ///
    /// Food heals the user; a weapon damages the opponent and can decide
    /// the game. An id that is not in the player's inventory (a stale
    /// selection after depletion) is a silent no-op. Returns no events
    /// while the game is over.
    pub fn use_item(&mut self, player: PlayerId, item_id: &str) -> Vec<Event> {
        if self.is_over() {
            return Vec::new();
        }
        let Some(used) = self.inventories[player.index()].consume(item_id) else {
            return Vec::new();
        };

        let mut events = Vec::new();
        match used.kind {
            ItemKind::Food => {
                let energy = self.player_mut(player).gain(used.magnitude);
                events.push(Event::ItemUsed {
                    player,
                    target: player,
                    item: used.name,
                    kind: used.kind,
                    magnitude: used.magnitude,
                    energy,
                    depleted: used.depleted,
                });
            }
            ItemKind::Weapon => {
                let target = player.opponent();
                let energy = self.player_mut(target).lose(used.magnitude);
                events.push(Event::ItemUsed {
                    player,
                    target,
                    item: used.name,
                    kind: used.kind,
                    magnitude: used.magnitude,
                    energy,
                    depleted: used.depleted,
                });
                self.check_defeat(target, &mut events);
            }
        }
        events
    }

    /// Reset both players to the starting energy and resume play.
    ///
    /// Inventories are untouched: consumed items stay consumed across
    /// rounds.
    pub fn restart(&mut self) -> Event {
        for player in &mut self.players {
            player.reset();
        }
        self.phase = Phase::Playing;
        Event::Restarted
    }

    /// The reducer: apply one action with the fixed UI amounts.
    ///
    /// Returns the events the action produced; an empty list means the
    /// action was ignored (game over, or a stale item id).
    pub fn apply(&mut self, action: &Action) -> Vec<Event> {
        let events = match action {
            Action::Eat { player } => self.eat(*player, EAT_AMOUNT).into_iter().collect(),
            Action::Attack { attacker } => self.attack(*attacker, ATTACK_AMOUNT),
            Action::UseItem { player, item } => self.use_item(*player, item),
            Action::Restart => vec![self.restart()],
        };
        assert_invariants(self);
        events
    }

    fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    fn check_defeat(&mut self, target: PlayerId, events: &mut Vec<Event>) {
        if self.players[target.index()].is_defeated() {
            let winner = target.opponent();
            self.phase = Phase::Over { winner };
            events.push(Event::GameOver {
                winner,
                loser: target,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Item;

    fn new_game() -> GameState {
        GameState::new("Yad", "Diks")
    }

    #[test]
    fn test_new_game_is_playing() {
        let game = new_game();
        assert_eq!(game.phase, Phase::Playing);
        assert!(!game.is_over());
        assert_eq!(game.winner(), None);
        assert_eq!(game.player(PlayerId::One).energy(), 50);
        assert_eq!(game.player(PlayerId::Two).energy(), 50);
    }

    #[test]
    fn test_eat_gains_energy() {
        let mut game = new_game();
        let event = game.eat(PlayerId::One, EAT_AMOUNT);

        assert_eq!(
            event,
            Some(Event::Ate {
                player: PlayerId::One,
                amount: EAT_AMOUNT,
                energy: 60,
            })
        );
        assert_eq!(game.player(PlayerId::One).energy(), 60);
        assert_eq!(game.player(PlayerId::Two).energy(), 50);
    }

    #[test]
    fn test_eat_clamps_at_full_energy() {
        let mut game = new_game();
        for _ in 0..10 {
            game.eat(PlayerId::One, EAT_AMOUNT);
        }
        assert_eq!(game.player(PlayerId::One).energy(), 100);

        // Eating at full energy still emits an event (and a log line)
        let event = game.eat(PlayerId::One, EAT_AMOUNT);
        assert!(event.is_some());
        assert_eq!(game.player(PlayerId::One).energy(), 100);
    }

    #[test]
    fn test_attack_drains_opponent() {
        let mut game = new_game();
        let events = game.attack(PlayerId::One, ATTACK_AMOUNT);

        assert_eq!(
            events,
            vec![Event::Attacked {
                attacker: PlayerId::One,
                target: PlayerId::Two,
                amount: ATTACK_AMOUNT,
                target_energy: 45,
            }]
        );
        assert_eq!(game.player(PlayerId::One).energy(), 50);
        assert_eq!(game.player(PlayerId::Two).energy(), 45);
    }

    #[test]
    fn test_attack_to_zero_ends_game() {
        let mut game = new_game();
        let events = game.attack(PlayerId::Two, 200);

        assert_eq!(game.player(PlayerId::One).energy(), 0);
        assert!(game.is_over());
        assert_eq!(game.winner(), Some(PlayerId::Two));
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[1],
            Event::GameOver {
                winner: PlayerId::Two,
                loser: PlayerId::One,
            }
        );
    }

    #[test]
    fn test_actions_ignored_while_over() {
        let mut game = new_game();
        game.attack(PlayerId::One, 200);
        assert!(game.is_over());
        let snapshot = game.clone();

        assert!(game.eat(PlayerId::One, EAT_AMOUNT).is_none());
        assert!(game.attack(PlayerId::Two, ATTACK_AMOUNT).is_empty());
        assert!(game.use_item(PlayerId::One, "laser").is_empty());
        assert_eq!(game, snapshot);
    }

    #[test]
    fn test_food_item_heals_user() {
        let mut game = new_game();
        let events = game.use_item(PlayerId::One, "apple");

        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0],
            Event::ItemUsed {
                player: PlayerId::One,
                target: PlayerId::One,
                item: "Apple +20".to_string(),
                kind: ItemKind::Food,
                magnitude: 20,
                energy: 70,
                depleted: false,
            }
        );
        assert_eq!(
            game.inventory(PlayerId::One)
                .get("apple")
                .map(|i| i.remaining_uses),
            Some(2)
        );
    }

    #[test]
    fn test_weapon_item_damages_opponent() {
        let mut game = new_game();
        let events = game.use_item(PlayerId::One, "laser");

        assert_eq!(events.len(), 1);
        assert_eq!(game.player(PlayerId::Two).energy(), 25);
        assert!(matches!(
            &events[0],
            Event::ItemUsed {
                kind: ItemKind::Weapon,
                target: PlayerId::Two,
                energy: 25,
                ..
            }
        ));
    }

    #[test]
    fn test_weapon_item_can_end_game() {
        let mut game = new_game();
        game.use_item(PlayerId::One, "laser");
        let events = game.use_item(PlayerId::One, "laser");

        assert_eq!(game.player(PlayerId::Two).energy(), 0);
        assert!(game.is_over());
        assert_eq!(game.winner(), Some(PlayerId::One));
        assert_eq!(events.len(), 2);
        // The second use exhausted the laser
        assert!(matches!(&events[0], Event::ItemUsed { depleted: true, .. }));
        assert!(game.inventory(PlayerId::One).get("laser").is_none());
    }

    #[test]
    fn test_use_item_unknown_id_is_silent_noop() {
        let mut game = new_game();
        let snapshot = game.clone();

        // Player one does not hold a burger
        assert!(game.use_item(PlayerId::One, "burger").is_empty());
        assert_eq!(game, snapshot);
    }

    #[test]
    fn test_restart_resets_energy_only() {
        let mut game = new_game();
        game.use_item(PlayerId::Two, "burger");
        game.attack(PlayerId::One, 200);
        assert!(game.is_over());

        let event = game.restart();
        assert_eq!(event, Event::Restarted);
        assert_eq!(game.phase, Phase::Playing);
        assert_eq!(game.player(PlayerId::One).energy(), 50);
        assert_eq!(game.player(PlayerId::Two).energy(), 50);
        // The burger stays consumed across rounds
        assert!(game.inventory(PlayerId::Two).get("burger").is_none());
    }

    #[test]
    fn test_apply_uses_fixed_amounts() {
        let mut game = new_game();
        game.apply(&Action::Eat {
            player: PlayerId::One,
        });
        assert_eq!(game.player(PlayerId::One).energy(), 50 + EAT_AMOUNT);

        game.apply(&Action::Attack {
            attacker: PlayerId::One,
        });
        assert_eq!(game.player(PlayerId::Two).energy(), 50 - ATTACK_AMOUNT);
    }

    #[test]
    fn test_apply_reports_ignored_actions_as_empty() {
        let mut game = new_game();
        game.attack(PlayerId::One, 200);

        let events = game.apply(&Action::Eat {
            player: PlayerId::Two,
        });
        assert!(events.is_empty());

        let events = game.apply(&Action::Restart);
        assert_eq!(events, vec![Event::Restarted]);
    }

    #[test]
    fn test_custom_loadouts() {
        let game = GameState::with_loadouts(
            "Yad",
            "Diks",
            Inventory::new(vec![Item::apple()]),
            Inventory::new(Vec::new()),
        );
        assert_eq!(game.inventory(PlayerId::One).len(), 1);
        assert!(game.inventory(PlayerId::Two).is_empty());
    }
}
