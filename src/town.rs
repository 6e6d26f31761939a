//! The town state machine and its randomized action resolvers.
//!
//! A town fixes its terrain and toughness at construction and hosts at most
//! one hunter at a time. Most actions narrate through a pending news buffer
//! the driver drains with [`Town::latest_news`]; treasure searches and digs
//! return their outcome directly instead.

use crate::constants::{
    DIG_GOLD_MAX, DIG_GOLD_MIN, FIGHT_GOLD_MAX, FIGHT_GOLD_MIN, ITEM_BREAK_CHANCE,
    MILD_NO_TROUBLE_CHANCE, TOUGH_NO_TROUBLE_CHANCE,
};
use crate::difficulty::Difficulty;
use crate::hunter::{Hunter, Treasure};
use crate::item::Item;
use crate::shop::{Shop, ShopAction, ShopOutcome};
use crate::terrain::{roll_terrain, Terrain};
use rand::Rng;
use std::fmt;
use std::mem;
use thiserror::Error;

/// Invalid-state error for hunter-dependent operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TownError {
    #[error("no hunter is in town; call hunter_arrives first")]
    NoHunter,
}

/// Outcome of a treasure search, handed straight back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Treasure),
    Dust,
    AlreadySearched,
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchOutcome::Found(treasure) => write!(f, "You found {}!", treasure),
            SearchOutcome::Dust => write!(f, "You found dust!"),
            SearchOutcome::AlreadySearched => write!(f, "You have already searched this town"),
        }
    }
}

/// Outcome of digging for gold, handed straight back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigOutcome {
    Gold(i32),
    Dirt,
    NoShovel,
    AlreadyDug,
}

impl fmt::Display for DigOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigOutcome::Gold(amount) => write!(f, "You dug up {} gold!", amount),
            DigOutcome::Dirt => write!(f, "You dug but only found dirt."),
            DigOutcome::NoShovel => write!(f, "You can't dig for gold without a shovel!"),
            DigOutcome::AlreadyDug => write!(f, "You have already dug for gold in this town."),
        }
    }
}

/// One visitable town.
#[derive(Debug, Clone)]
pub struct Town {
    terrain: Terrain,
    shop: Shop,
    hunter: Option<Hunter>,
    tough_town: bool,
    no_trouble_chance: f64,
    searched: bool,
    news: String,
    difficulty: Difficulty,
}

impl Town {
    /// Creates a town. Terrain and the tough-town flag are rolled here,
    /// once, and never change afterwards. `toughness` is the probability
    /// in [0, 1] that the town comes up tough.
    pub fn new(shop: Shop, toughness: f64, difficulty: Difficulty, rng: &mut impl Rng) -> Self {
        let terrain = roll_terrain(rng);
        let tough_town = rng.gen::<f64>() < toughness;
        let no_trouble_chance = if tough_town {
            TOUGH_NO_TROUBLE_CHANCE
        } else {
            MILD_NO_TROUBLE_CHANCE
        };
        Self {
            terrain,
            shop,
            hunter: None,
            tough_town,
            no_trouble_chance,
            searched: false,
            news: String::new(),
            difficulty,
        }
    }

    pub fn terrain(&self) -> Terrain {
        self.terrain
    }

    pub fn is_tough(&self) -> bool {
        self.tough_town
    }

    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    pub fn hunter(&self) -> Option<&Hunter> {
        self.hunter.as_ref()
    }

    /// Takes a hunter into town, overwriting any prior occupant, and queues
    /// the greeting. The tone of the second line follows the town's temper.
    pub fn hunter_arrives(&mut self, hunter: Hunter) {
        let mut news = format!("Welcome to town, {}.", hunter.name());
        if self.tough_town {
            news.push_str("\nIt's pretty rough around here, so watch yourself.");
        } else {
            news.push_str("\nWe're just a sleepy little town with mild mannered folk.");
        }
        self.news = news;
        self.hunter = Some(hunter);
    }

    /// Hands the hunter back to the driver when it is time to move on.
    pub fn hunter_departs(&mut self) -> Option<Hunter> {
        self.hunter.take()
    }

    /// Attempts to leave across the surrounding terrain.
    ///
    /// Returns `Ok(true)` when the hunter's kit holds the crossing item;
    /// the item then breaks half the time (never on Easy) and is lost from
    /// the kit. Returns `Ok(false)` when the crossing item is missing.
    pub fn leave_town(&mut self, rng: &mut impl Rng) -> Result<bool, TownError> {
        let hunter = self.hunter.as_mut().ok_or(TownError::NoHunter)?;
        if !self.terrain.can_cross(hunter) {
            self.news = format!(
                "You can't leave town, {}. You don't have a {}.",
                hunter.name(),
                self.terrain.needed_item()
            );
            return Ok(false);
        }

        let item = self.terrain.needed_item();
        let mut news = format!("You used your {} to cross the {}.", item, self.terrain);
        if check_item_break(self.difficulty, rng) {
            hunter.remove_item(item);
            news.push_str(&format!("\nUnfortunately, you lost your {}.", item));
        }
        self.news = news;
        Ok(true)
    }

    /// Thin delegation to the town shop with the current hunter.
    pub fn enter_shop(&mut self, action: ShopAction, item: Item) -> Result<ShopOutcome, TownError> {
        let hunter = self.hunter.as_mut().ok_or(TownError::NoHunter)?;
        Ok(self.shop.transact(hunter, action, item))
    }

    /// Picks a fight for gold.
    ///
    /// Stage one rolls against the town's no-trouble chance; a roll at or
    /// under it finds no fight. Stage two draws the stake and rolls the
    /// brawl against the same chance. A sword pays out on both sides of
    /// that roll, and a lost swordless brawl keeps the winner's narration
    /// while the gold goes the other way. Both quirks are load-bearing
    /// game rules, not accidents to clean up.
    pub fn look_for_trouble(&mut self, rng: &mut impl Rng) -> Result<(), TownError> {
        let hunter = self.hunter.as_mut().ok_or(TownError::NoHunter)?;
        let no_trouble_chance = self.no_trouble_chance;

        if rng.gen::<f64>() <= no_trouble_chance {
            self.news = String::from("You couldn't find any trouble");
            return Ok(());
        }

        let mut news = String::from("You want trouble, stranger!  You got it!\nOof! Umph! Ow!\n");
        let gold_diff: i32 = rng.gen_range(FIGHT_GOLD_MIN..=FIGHT_GOLD_MAX);
        let won_roll = rng.gen::<f64>() > no_trouble_chance;

        if won_roll {
            if hunter.has_item(Item::Sword) {
                news = String::from(
                    "The brawler, seeing your sword, realizes he picked a losing fight \
                     and gives you his gold.",
                );
                hunter.change_gold(gold_diff);
            } else {
                news.push_str("Okay, stranger! You proved yer mettle. Here, take my gold.");
                news.push_str(&format!(
                    "\nYou won the brawl and receive {} gold.",
                    gold_diff
                ));
                hunter.change_gold(gold_diff);
            }
        } else if hunter.has_item(Item::Sword) {
            // A lost roll with a sword still pays out.
            news = format!(
                "The brawler, seeing your sword, realizes he picked a losing fight \
                 and gives you his gold.\nYou receive {} gold.",
                gold_diff
            );
            hunter.change_gold(gold_diff);
        } else {
            // Winner's narration, loser's purse.
            news.push_str(&format!(
                "\nYou won the brawl and receive {} gold.",
                gold_diff
            ));
            hunter.change_gold(-gold_diff);
        }
        self.news = news;
        Ok(())
    }

    /// Searches the town for treasure. The first of this or
    /// [`Town::dig_for_gold`] to resolve consumes the town's one search.
    pub fn find_treasure(&mut self, rng: &mut impl Rng) -> Result<SearchOutcome, TownError> {
        let hunter = self.hunter.as_mut().ok_or(TownError::NoHunter)?;
        if self.searched {
            return Ok(SearchOutcome::AlreadySearched);
        }

        let chance: f64 = rng.gen();
        let outcome = if chance < 0.25 {
            SearchOutcome::Found(Treasure::Crown)
        } else if chance < 0.5 {
            SearchOutcome::Found(Treasure::Trophy)
        } else if chance < 0.75 {
            SearchOutcome::Found(Treasure::Gem)
        } else {
            SearchOutcome::Dust
        };
        if let SearchOutcome::Found(treasure) = outcome {
            hunter.add_treasure(treasure);
        }
        self.searched = true;
        Ok(outcome)
    }

    /// Digs for gold. Shares its one-shot gate with [`Town::find_treasure`];
    /// a dig without a shovel is refused and leaves the gate open.
    pub fn dig_for_gold(&mut self, rng: &mut impl Rng) -> Result<DigOutcome, TownError> {
        let hunter = self.hunter.as_mut().ok_or(TownError::NoHunter)?;
        if self.searched {
            return Ok(DigOutcome::AlreadyDug);
        }
        if !hunter.has_item(Item::Shovel) {
            return Ok(DigOutcome::NoShovel);
        }

        // Draws 3 through 6; only a 3 strikes gold.
        let outcome = if rng.gen_range(3..=6) == 3 {
            let gold = rng.gen_range(DIG_GOLD_MIN..=DIG_GOLD_MAX);
            hunter.change_gold(gold);
            DigOutcome::Gold(gold)
        } else {
            DigOutcome::Dirt
        };
        self.searched = true;
        Ok(outcome)
    }

    /// Reads and clears the pending news buffer.
    pub fn latest_news(&mut self) -> String {
        mem::take(&mut self.news)
    }
}

impl fmt::Display for Town {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "This nice little town is surrounded by {}.",
            self.terrain
        )
    }
}

/// Rolls whether a used crossing item breaks. Easy mode never breaks items
/// and draws nothing from the generator.
fn check_item_break(difficulty: Difficulty, rng: &mut impl Rng) -> bool {
    if !difficulty.items_break() {
        return false;
    }
    rng.gen::<f64>() < ITEM_BREAK_CHANCE
}
