// Town toughness policy. A tough town rolls against the higher bar.
pub const TOUGH_NO_TROUBLE_CHANCE: f64 = 0.66;
pub const MILD_NO_TROUBLE_CHANCE: f64 = 0.33;

// Terrain crossing
pub const ITEM_BREAK_CHANCE: f64 = 0.5;

// Brawl payout range (gold)
pub const FIGHT_GOLD_MIN: i32 = 1;
pub const FIGHT_GOLD_MAX: i32 = 10;

// Dig payout range (gold)
pub const DIG_GOLD_MIN: i32 = 1;
pub const DIG_GOLD_MAX: i32 = 20;

// Session defaults used by the interactive driver
pub const DEFAULT_TOUGHNESS: f64 = 0.5;
pub const SHOP_MARKDOWN: f64 = 0.5;
