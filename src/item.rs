//! Purchasable tools and their shop price table.

use std::fmt;
use std::str::FromStr;

/// Every tool the shop trades in. Terrain crossings and town actions
/// check the hunter's kit for these by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Item {
    Water,
    Rope,
    Machete,
    Shovel,
    Boots,
    Horse,
    Boat,
    Sword,
}

impl Item {
    /// All items in price order, used for the shop catalog.
    pub const ALL: [Item; 8] = [
        Item::Water,
        Item::Rope,
        Item::Machete,
        Item::Shovel,
        Item::Boots,
        Item::Horse,
        Item::Boat,
        Item::Sword,
    ];

    /// Display name, lowercase as it appears in narration.
    pub fn name(&self) -> &'static str {
        match self {
            Item::Water => "water",
            Item::Rope => "rope",
            Item::Machete => "machete",
            Item::Shovel => "shovel",
            Item::Boots => "boots",
            Item::Horse => "horse",
            Item::Boat => "boat",
            Item::Sword => "sword",
        }
    }

    /// Shop list price in gold.
    pub fn price(&self) -> i32 {
        match self {
            Item::Water => 2,
            Item::Rope => 4,
            Item::Machete => 6,
            Item::Shovel => 8,
            Item::Boots => 10,
            Item::Horse => 12,
            Item::Boat => 20,
            Item::Sword => 25,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Item {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "water" => Ok(Item::Water),
            "rope" => Ok(Item::Rope),
            "machete" => Ok(Item::Machete),
            "shovel" => Ok(Item::Shovel),
            "boots" => Ok(Item::Boots),
            "horse" => Ok(Item::Horse),
            "boat" => Ok(Item::Boat),
            "sword" => Ok(Item::Sword),
            _ => Err(()),
        }
    }
}
