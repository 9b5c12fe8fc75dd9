//! Consumable items and per-player inventories.
//!
//! Items are owned by exactly one player. The built-in templates are
//! constructor functions, so assigning an item to an inventory always
//! produces an independent copy: one player using up a laser never touches
//! the other player's laser.

/// Classification of a consumable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Heals the player who uses it.
    Food,
    /// Damages the opponent of the player who uses it.
    Weapon,
}

/// A consumable owned by one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Identifier, unique within an inventory.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Whether the item heals or damages.
    pub kind: ItemKind,
    /// Heal or damage amount.
    pub magnitude: u8,
    /// Uses left before the item disappears. Always at least 1 while the
    /// item sits in an inventory.
    pub remaining_uses: u32,
}

impl Item {
    fn new(id: &str, name: &str, kind: ItemKind, magnitude: u8, uses: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            magnitude,
            remaining_uses: uses,
        }
    }

    /// Food template: heals 20, good for 3 uses.
    #[must_use]
    pub fn apple() -> Self {
        Self::new("apple", "Apple +20", ItemKind::Food, 20, 3)
    }

    /// Food template: heals 35, single use.
    #[must_use]
    pub fn burger() -> Self {
        Self::new("burger", "Burger +35", ItemKind::Food, 35, 1)
    }

    /// Weapon template: damages 25, good for 2 uses.
    #[must_use]
    pub fn laser() -> Self {
        Self::new("laser", "Laser Gun -25", ItemKind::Weapon, 25, 2)
    }

    /// Weapon template: damages 12, good for 4 uses.
    #[must_use]
    pub fn dagger() -> Self {
        Self::new("dagger", "Dagger -12", ItemKind::Weapon, 12, 4)
    }
}

/// Record of a single item use, captured before any removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ItemUse {
    /// Display name of the item used.
    pub(crate) name: String,
    /// Whether it healed or damaged.
    pub(crate) kind: ItemKind,
    /// Heal or damage amount.
    pub(crate) magnitude: u8,
    /// Whether this use exhausted the item and removed it.
    pub(crate) depleted: bool,
}

/// Ordered collection of items owned by one player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Create an inventory from a list of items.
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Starting loadout for player one: an apple and a laser gun.
    #[must_use]
    pub fn starter_one() -> Self {
        Self::new(vec![Item::apple(), Item::laser()])
    }

    /// Starting loadout for player two: a burger and a dagger.
    #[must_use]
    pub fn starter_two() -> Self {
        Self::new(vec![Item::burger(), Item::dagger()])
    }

    /// All items, in order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the inventory holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Spend one use of the item with the given id.
    ///
    /// Decrements `remaining_uses`, removing the item when it hits zero.
    /// Returns `None` when no item with that id is held (a stale
    /// selection), leaving the inventory untouched.
    pub(crate) fn consume(&mut self, id: &str) -> Option<ItemUse> {
        let idx = self.items.iter().position(|item| item.id == id)?;
        let item = &mut self.items[idx];
        item.remaining_uses = item.remaining_uses.saturating_sub(1);
        let used = ItemUse {
            name: item.name.clone(),
            kind: item.kind,
            magnitude: item.magnitude,
            depleted: item.remaining_uses == 0,
        };
        if used.depleted {
            self.items.remove(idx);
        }
        Some(used)
    }
}
