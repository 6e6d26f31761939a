//! The hunter: gold ledger, item kit, and treasure collection.

use crate::item::Item;
use std::fmt;

/// Treasures a town search can turn up. Dust is not a treasure; a dusty
/// search simply adds nothing to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Treasure {
    Crown,
    Trophy,
    Gem,
}

impl Treasure {
    /// Name with article, as it reads in narration ("You found a crown!").
    pub fn name(&self) -> &'static str {
        match self {
            Treasure::Crown => "a crown",
            Treasure::Trophy => "a trophy",
            Treasure::Gem => "a gem",
        }
    }
}

impl fmt::Display for Treasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The visiting actor. Towns mutate the hunter's gold, kit, and treasures
/// as actions resolve; the driver owns the hunter between towns.
#[derive(Debug, Clone)]
pub struct Hunter {
    name: String,
    gold: i32,
    kit: Vec<Item>,
    treasures: Vec<Treasure>,
}

impl Hunter {
    pub fn new(name: impl Into<String>, starting_gold: i32) -> Self {
        Self {
            name: name.into(),
            gold: starting_gold,
            kit: Vec::new(),
            treasures: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gold(&self) -> i32 {
        self.gold
    }

    /// Applies a gold delta. Returns false once the balance has gone
    /// negative; the driver treats that as the end of the game.
    pub fn change_gold(&mut self, delta: i32) -> bool {
        self.gold += delta;
        self.gold >= 0
    }

    pub fn has_item(&self, item: Item) -> bool {
        self.kit.contains(&item)
    }

    /// Adds an item to the kit. The kit holds at most one of each tool;
    /// returns false if the item was already carried.
    pub fn add_item(&mut self, item: Item) -> bool {
        if self.has_item(item) {
            return false;
        }
        self.kit.push(item);
        true
    }

    /// Removes an item from the kit. Returns false if it was not carried.
    pub fn remove_item(&mut self, item: Item) -> bool {
        match self.kit.iter().position(|k| *k == item) {
            Some(idx) => {
                self.kit.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn kit(&self) -> &[Item] {
        &self.kit
    }

    pub fn add_treasure(&mut self, treasure: Treasure) {
        self.treasures.push(treasure);
    }

    pub fn treasures(&self) -> &[Treasure] {
        &self.treasures
    }
}

impl fmt::Display for Hunter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} has {} gold", self.name, self.gold)?;
        if self.kit.is_empty() {
            write!(f, " and an empty kit")?;
        } else {
            let items: Vec<&str> = self.kit.iter().map(|i| i.name()).collect();
            write!(f, " and a kit of: {}", items.join(", "))?;
        }
        if !self.treasures.is_empty() {
            let found: Vec<&str> = self.treasures.iter().map(|t| t.name()).collect();
            write!(f, "; treasures: {}", found.join(", "))?;
        }
        Ok(())
    }
}
