//! Integration test: a hunter's full pass through town.
//!
//! Covers the arrival news channel, the one-shot search gate shared by
//! treasure hunting and digging, shop transactions, crossing into the
//! next town, and the fail-fast guard on hunter-dependent actions.

use prospect::{
    DigOutcome, Difficulty, Hunter, Item, SearchOutcome, Shop, ShopAction, ShopOutcome, Town,
    TownError,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn sleepy_town(rng: &mut ChaCha8Rng) -> Town {
    // Toughness 0.0 can never produce a tough town.
    Town::new(Shop::new(0.5), 0.0, Difficulty::Normal, rng)
}

fn hunter_with(items: &[Item]) -> Hunter {
    let mut hunter = Hunter::new("Dusty", 100);
    for item in items {
        hunter.add_item(*item);
    }
    hunter
}

// =============================================================================
// Arrival and the news channel
// =============================================================================

#[test]
fn test_sleepy_town_greeting() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut town = sleepy_town(&mut rng);
    assert!(!town.is_tough());

    town.hunter_arrives(hunter_with(&[]));
    let news = town.latest_news();
    assert!(news.starts_with("Welcome to town, Dusty."));
    assert!(news.contains("sleepy little town"));

    // The buffer is cleared on read.
    assert!(town.latest_news().is_empty());
}

#[test]
fn test_search_outcomes_bypass_the_news_buffer() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let mut town = sleepy_town(&mut rng);
    town.hunter_arrives(hunter_with(&[Item::Shovel]));
    let _ = town.latest_news();

    // Searching returns its outcome directly and leaves the buffer alone.
    let outcome = town.find_treasure(&mut rng).unwrap();
    assert_ne!(outcome, SearchOutcome::AlreadySearched);
    assert!(town.latest_news().is_empty());

    let outcome = town.dig_for_gold(&mut rng).unwrap();
    assert_eq!(outcome, DigOutcome::AlreadyDug);
    assert!(town.latest_news().is_empty());
}

// =============================================================================
// The one-shot search gate
// =============================================================================

#[test]
fn test_second_treasure_search_is_refused() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut town = sleepy_town(&mut rng);
    town.hunter_arrives(hunter_with(&[]));

    let first = town.find_treasure(&mut rng).unwrap();
    let treasures_after_first = town.hunter().unwrap().treasures().len();
    match first {
        SearchOutcome::Found(_) => assert_eq!(treasures_after_first, 1),
        SearchOutcome::Dust => assert_eq!(treasures_after_first, 0),
        SearchOutcome::AlreadySearched => unreachable!("fresh town"),
    }

    let second = town.find_treasure(&mut rng).unwrap();
    assert_eq!(second, SearchOutcome::AlreadySearched);
    assert_eq!(
        town.hunter().unwrap().treasures().len(),
        treasures_after_first
    );
}

#[test]
fn test_dig_scenario_with_forced_strike() {
    // Probe the seed stream for a strike rather than forcing the
    // generator; roughly one seed in four digs up gold.
    let mut struck = false;
    for seed in 0..100 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut town = sleepy_town(&mut rng);
        town.hunter_arrives(hunter_with(&[Item::Shovel]));

        if let DigOutcome::Gold(amount) = town.dig_for_gold(&mut rng).unwrap() {
            struck = true;
            assert!((1..=20).contains(&amount));
            assert_eq!(town.hunter().unwrap().gold(), 100 + amount);

            // The gate is consumed; a second dig changes nothing.
            assert_eq!(town.dig_for_gold(&mut rng).unwrap(), DigOutcome::AlreadyDug);
            assert_eq!(town.hunter().unwrap().gold(), 100 + amount);
            break;
        }
    }
    assert!(struck, "no gold strike in 100 seeds");
}

#[test]
fn test_shovelless_dig_leaves_the_gate_open() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let mut town = sleepy_town(&mut rng);
    town.hunter_arrives(hunter_with(&[]));

    assert_eq!(town.dig_for_gold(&mut rng).unwrap(), DigOutcome::NoShovel);
    assert_eq!(town.hunter().unwrap().gold(), 100);

    // The refusal did not consume the town's one search.
    let outcome = town.find_treasure(&mut rng).unwrap();
    assert_ne!(outcome, SearchOutcome::AlreadySearched);
}

// =============================================================================
// Preconditions
// =============================================================================

#[test]
fn test_hunter_dependent_actions_fail_fast_before_arrival() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut town = sleepy_town(&mut rng);

    assert_eq!(town.leave_town(&mut rng), Err(TownError::NoHunter));
    assert_eq!(town.look_for_trouble(&mut rng), Err(TownError::NoHunter));
    assert_eq!(town.find_treasure(&mut rng), Err(TownError::NoHunter));
    assert_eq!(town.dig_for_gold(&mut rng), Err(TownError::NoHunter));
    assert_eq!(
        town.enter_shop(ShopAction::Buy, Item::Water),
        Err(TownError::NoHunter)
    );
}

// =============================================================================
// Shopping
// =============================================================================

#[test]
fn test_shop_buy_then_sell() {
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    let mut town = sleepy_town(&mut rng);
    town.hunter_arrives(hunter_with(&[]));

    let bought = town.enter_shop(ShopAction::Buy, Item::Shovel).unwrap();
    assert_eq!(
        bought,
        ShopOutcome::Bought {
            item: Item::Shovel,
            price: 8
        }
    );
    assert_eq!(town.hunter().unwrap().gold(), 92);

    // Selling back refunds half at the default markdown.
    let sold = town.enter_shop(ShopAction::Sell, Item::Shovel).unwrap();
    assert_eq!(
        sold,
        ShopOutcome::Sold {
            item: Item::Shovel,
            price: 4
        }
    );
    assert_eq!(town.hunter().unwrap().gold(), 96);
    assert!(!town.hunter().unwrap().has_item(Item::Shovel));
}

// =============================================================================
// Moving on
// =============================================================================

#[test]
fn test_crossing_into_the_next_town() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut town = sleepy_town(&mut rng);

    // Easy-mode towns never break crossing items, so the kit survives.
    let mut easy_town = Town::new(Shop::new(0.5), 0.0, Difficulty::Easy, &mut rng);
    let needed = easy_town.terrain().needed_item();
    easy_town.hunter_arrives(hunter_with(&[needed]));
    let _ = easy_town.latest_news();

    assert_eq!(easy_town.leave_town(&mut rng), Ok(true));
    let news = easy_town.latest_news();
    assert!(news.contains("to cross the"));
    assert!(!news.contains("lost your"));

    let hunter = easy_town.hunter_departs().unwrap();
    assert!(hunter.has_item(needed));

    town.hunter_arrives(hunter);
    assert!(town.latest_news().contains("Welcome to town, Dusty."));
    assert!(town.hunter().is_some());
    assert!(easy_town.hunter().is_none());
}

#[test]
fn test_missing_crossing_item_blocks_the_road() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let mut town = sleepy_town(&mut rng);
    town.hunter_arrives(hunter_with(&[]));
    let _ = town.latest_news();

    assert_eq!(town.leave_town(&mut rng), Ok(false));
    let news = town.latest_news();
    assert!(news.contains("You can't leave town, Dusty."));
    assert!(news.contains(town.terrain().needed_item().name()));
    assert!(town.hunter().is_some(), "the hunter stays when the road is blocked");
}
