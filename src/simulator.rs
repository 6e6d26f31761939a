//! Monte Carlo harness for town outcome distributions.
//!
//! Runs thousands of one-visit trials to check that the town resolvers
//! converge where they should: terrain evenly split six ways, tough-town
//! fraction tracking the toughness probability, treasure at 25% per kind,
//! dig strikes at 25%, breakage at 50% outside easy mode.

use crate::constants::SHOP_MARKDOWN;
use crate::difficulty::Difficulty;
use crate::hunter::{Hunter, Treasure};
use crate::item::Item;
use crate::shop::Shop;
use crate::town::{DigOutcome, SearchOutcome, Town};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Gold each simulated hunter carries; large enough that a losing streak
/// never drives the balance negative mid-trial.
const SIM_STARTING_GOLD: i32 = 1_000;

/// Simulation parameters.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub trials: u32,
    pub toughness: f64,
    pub difficulty: Difficulty,
    /// Give the simulated hunter a sword, exercising the intimidation
    /// branches of the fight resolver.
    pub with_sword: bool,
    /// Seed for reproducible runs; entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            trials: 10_000,
            toughness: 0.5,
            difficulty: Difficulty::Normal,
            with_sword: false,
            seed: None,
        }
    }
}

/// Treasure search outcome tallies.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct TreasureCounts {
    pub crown: u32,
    pub trophy: u32,
    pub gem: u32,
    pub dust: u32,
}

/// Aggregated results from a batch of simulated town visits.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub trials: u32,
    pub toughness: f64,
    pub tough_towns: u32,
    pub terrain_counts: BTreeMap<&'static str, u32>,

    // Fight resolver
    pub quiet_visits: u32,
    pub brawls_won: u32,
    pub brawls_lost: u32,

    // Search actions (treasure on even trials, dig on odd)
    pub treasure_counts: TreasureCounts,
    pub digs: u32,
    pub gold_strikes: u32,
    pub dig_gold_total: i64,

    // Terrain crossings
    pub crossings: u32,
    pub items_broken: u32,
}

impl SimReport {
    fn new(config: &SimConfig) -> Self {
        Self {
            trials: config.trials,
            toughness: config.toughness,
            tough_towns: 0,
            terrain_counts: BTreeMap::new(),
            quiet_visits: 0,
            brawls_won: 0,
            brawls_lost: 0,
            treasure_counts: TreasureCounts::default(),
            digs: 0,
            gold_strikes: 0,
            dig_gold_total: 0,
            crossings: 0,
            items_broken: 0,
        }
    }

    pub fn tough_fraction(&self) -> f64 {
        self.tough_towns as f64 / self.trials.max(1) as f64
    }

    pub fn quiet_fraction(&self) -> f64 {
        self.quiet_visits as f64 / self.trials.max(1) as f64
    }

    pub fn strike_rate(&self) -> f64 {
        self.gold_strikes as f64 / self.digs.max(1) as f64
    }

    pub fn break_rate(&self) -> f64 {
        self.items_broken as f64 / self.crossings.max(1) as f64
    }

    /// Renders the report as plain text for the console.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Trials:            {}", self.trials);
        let _ = writeln!(
            out,
            "Tough towns:       {} ({:.1}% at toughness {:.2})",
            self.tough_towns,
            self.tough_fraction() * 100.0,
            self.toughness
        );
        let _ = writeln!(out, "\nTerrain:");
        for (name, count) in &self.terrain_counts {
            let _ = writeln!(
                out,
                "  {:<10} {:>6} ({:.1}%)",
                name,
                count,
                *count as f64 / self.trials.max(1) as f64 * 100.0
            );
        }
        let _ = writeln!(out, "\nTrouble:");
        let _ = writeln!(
            out,
            "  quiet      {:>6} ({:.1}%)",
            self.quiet_visits,
            self.quiet_fraction() * 100.0
        );
        let _ = writeln!(out, "  won        {:>6}", self.brawls_won);
        let _ = writeln!(out, "  lost       {:>6}", self.brawls_lost);
        let _ = writeln!(out, "\nTreasure searches:");
        let _ = writeln!(out, "  crown      {:>6}", self.treasure_counts.crown);
        let _ = writeln!(out, "  trophy     {:>6}", self.treasure_counts.trophy);
        let _ = writeln!(out, "  gem        {:>6}", self.treasure_counts.gem);
        let _ = writeln!(out, "  dust       {:>6}", self.treasure_counts.dust);
        let _ = writeln!(
            out,
            "\nDigs:              {} ({} strikes, {:.1}%, {} gold total)",
            self.digs,
            self.gold_strikes,
            self.strike_rate() * 100.0,
            self.dig_gold_total
        );
        let _ = writeln!(
            out,
            "Crossings:         {} ({} items broken, {:.1}%)",
            self.crossings,
            self.items_broken,
            self.break_rate() * 100.0
        );
        out
    }

    /// Renders the report as pretty JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Items every simulated hunter carries, enough to cross any terrain and
/// to dig.
const SIM_KIT: [Item; 7] = [
    Item::Water,
    Item::Rope,
    Item::Machete,
    Item::Shovel,
    Item::Boots,
    Item::Horse,
    Item::Boat,
];

/// Runs one full visit per trial: arrive, look for trouble, search or dig
/// (alternating by trial), then leave across the terrain.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut report = SimReport::new(config);

    for trial in 0..config.trials {
        let mut town = Town::new(
            Shop::new(SHOP_MARKDOWN),
            config.toughness,
            config.difficulty,
            &mut rng,
        );
        *report
            .terrain_counts
            .entry(town.terrain().name())
            .or_insert(0) += 1;
        if town.is_tough() {
            report.tough_towns += 1;
        }

        let mut hunter = Hunter::new("Sim", SIM_STARTING_GOLD);
        for item in SIM_KIT {
            hunter.add_item(item);
        }
        if config.with_sword {
            hunter.add_item(Item::Sword);
        }
        town.hunter_arrives(hunter);
        let _ = town.latest_news();

        let gold_before = town.hunter().map(|h| h.gold()).unwrap_or(0);
        let _ = town.look_for_trouble(&mut rng);
        let gold_after = town.hunter().map(|h| h.gold()).unwrap_or(0);
        match gold_after - gold_before {
            0 => report.quiet_visits += 1,
            delta if delta > 0 => report.brawls_won += 1,
            _ => report.brawls_lost += 1,
        }

        if trial % 2 == 0 {
            if let Ok(outcome) = town.find_treasure(&mut rng) {
                match outcome {
                    SearchOutcome::Found(Treasure::Crown) => report.treasure_counts.crown += 1,
                    SearchOutcome::Found(Treasure::Trophy) => report.treasure_counts.trophy += 1,
                    SearchOutcome::Found(Treasure::Gem) => report.treasure_counts.gem += 1,
                    SearchOutcome::Dust => report.treasure_counts.dust += 1,
                    SearchOutcome::AlreadySearched => {}
                }
            }
        } else if let Ok(outcome) = town.dig_for_gold(&mut rng) {
            report.digs += 1;
            if let DigOutcome::Gold(amount) = outcome {
                report.gold_strikes += 1;
                report.dig_gold_total += i64::from(amount);
            }
        }

        let needed = town.terrain().needed_item();
        if let Ok(true) = town.leave_town(&mut rng) {
            report.crossings += 1;
            let still_carried = town.hunter().map(|h| h.has_item(needed)).unwrap_or(true);
            if !still_carried {
                report.items_broken += 1;
            }
        }
    }

    report
}
