//! Shop transaction logic.

use crate::hunter::Hunter;
use crate::item::Item;
use std::fmt;
use std::str::FromStr;

/// Whether the hunter is buying from or selling to the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopAction {
    Buy,
    Sell,
}

impl FromStr for ShopAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "b" | "buy" => Ok(ShopAction::Buy),
            "s" | "sell" => Ok(ShopAction::Sell),
            _ => Err(()),
        }
    }
}

/// Result of a shop transaction. Rejections are ordinary outcomes for the
/// driver to narrate, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopOutcome {
    Bought { item: Item, price: i32 },
    Sold { item: Item, price: i32 },
    InsufficientGold { item: Item, price: i32 },
    AlreadyOwned { item: Item },
    NotInKit { item: Item },
}

impl fmt::Display for ShopOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShopOutcome::Bought { item, price } => {
                write!(f, "You bought a {} for {} gold.", item, price)
            }
            ShopOutcome::Sold { item, price } => {
                write!(f, "You sold your {} for {} gold.", item, price)
            }
            ShopOutcome::InsufficientGold { item, price } => {
                write!(f, "You can't afford a {}; it costs {} gold.", item, price)
            }
            ShopOutcome::AlreadyOwned { item } => {
                write!(f, "You already have a {}.", item)
            }
            ShopOutcome::NotInKit { item } => {
                write!(f, "You don't have a {} to sell.", item)
            }
        }
    }
}

/// The town shoppe. Sells at list price and buys back at a marked-down
/// fraction of it.
#[derive(Debug, Clone)]
pub struct Shop {
    markdown: f64,
}

impl Shop {
    /// Creates a shop with the given sell-back markdown in [0, 1].
    pub fn new(markdown: f64) -> Self {
        Self { markdown }
    }

    /// Gold credited when the hunter sells an item back.
    pub fn sell_price(&self, item: Item) -> i32 {
        (item.price() as f64 * self.markdown) as i32
    }

    /// The full price list, for the driver's shop screen.
    pub fn catalog(&self) -> Vec<(Item, i32)> {
        Item::ALL.iter().map(|i| (*i, i.price())).collect()
    }

    /// Runs one buy/sell transaction against the hunter.
    pub fn transact(&self, hunter: &mut Hunter, action: ShopAction, item: Item) -> ShopOutcome {
        match action {
            ShopAction::Buy => {
                if hunter.has_item(item) {
                    return ShopOutcome::AlreadyOwned { item };
                }
                let price = item.price();
                if hunter.gold() < price {
                    return ShopOutcome::InsufficientGold { item, price };
                }
                hunter.change_gold(-price);
                hunter.add_item(item);
                ShopOutcome::Bought { item, price }
            }
            ShopAction::Sell => {
                if !hunter.has_item(item) {
                    return ShopOutcome::NotInKit { item };
                }
                let price = self.sell_price(item);
                hunter.change_gold(price);
                hunter.remove_item(item);
                ShopOutcome::Sold { item, price }
            }
        }
    }
}
