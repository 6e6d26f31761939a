//! Interactive treasure hunting console game.
//!
//! The driver owns all console I/O and rendering. Town narration comes
//! through two channels: the pending news buffer (arrival, crossings,
//! brawls), drained after each action, and outcome values (searches,
//! digs) rendered on the spot.

use crossterm::style::Stylize;
use prospect::build_info;
use prospect::constants::{DEFAULT_TOUGHNESS, SHOP_MARKDOWN};
use prospect::{DigOutcome, Difficulty, Hunter, SearchOutcome, Shop, ShopAction, Town};
use rand::Rng;
use std::io::{self, Write};

fn main() -> io::Result<()> {
    println!("{}", "WELCOME TO PROSPECT".bold());
    println!("Going gold hunting in the wild west, eh? You've come to the right place.");
    println!(
        "prospect {} ({})",
        build_info::BUILD_DATE,
        build_info::BUILD_COMMIT
    );
    println!();

    let name = prompt("What's your name, Hunter? ")?;
    let name = if name.is_empty() {
        "Stranger".to_string()
    } else {
        name
    };

    let difficulty = loop {
        let answer = prompt("(E)asy or (N)ormal mode? ")?;
        match answer.parse::<Difficulty>() {
            Ok(difficulty) => break difficulty,
            Err(()) => println!("Pick e or n."),
        }
    };

    let mut rng = rand::thread_rng();
    let hunter = Hunter::new(name, difficulty.starting_gold());
    let mut town = new_town(difficulty, &mut rng);
    town.hunter_arrives(hunter);
    println!("\n{}", town.latest_news());

    loop {
        if let Some(hunter) = town.hunter() {
            if hunter.gold() < 0 {
                println!();
                println!("{}", "You've run out of gold. The hunt is over.".red());
                break;
            }
            println!();
            println!("{}", hunter);
        }
        println!("{}", town);
        print_menu();

        let choice = prompt("What's your next move? ")?.to_lowercase();
        match choice.as_str() {
            "b" | "s" => {
                let action = if choice == "b" {
                    ShopAction::Buy
                } else {
                    ShopAction::Sell
                };
                run_shop(&mut town, action)?;
            }
            "m" => match town.leave_town(&mut rng) {
                Ok(true) => {
                    println!("\n{}", town.latest_news());
                    if let Some(hunter) = town.hunter_departs() {
                        town = new_town(difficulty, &mut rng);
                        town.hunter_arrives(hunter);
                        println!("{}", town.latest_news());
                    }
                }
                Ok(false) => println!("\n{}", town.latest_news()),
                Err(err) => println!("{}", err),
            },
            "l" => match town.look_for_trouble(&mut rng) {
                Ok(()) => println!("\n{}", town.latest_news()),
                Err(err) => println!("{}", err),
            },
            "h" => match town.find_treasure(&mut rng) {
                Ok(outcome @ SearchOutcome::Found(_)) => {
                    println!("\n{}", outcome.to_string().green())
                }
                Ok(outcome) => println!("\n{}", outcome),
                Err(err) => println!("{}", err),
            },
            "d" => match town.dig_for_gold(&mut rng) {
                Ok(outcome @ DigOutcome::Gold(_)) => {
                    println!("\n{}", outcome.to_string().yellow())
                }
                Ok(outcome) => println!("\n{}", outcome),
                Err(err) => println!("{}", err),
            },
            "x" => {
                println!("\nFare thee well!");
                break;
            }
            "" => {}
            _ => println!("Yikes! That's an invalid option! Try again."),
        }
    }
    Ok(())
}

fn new_town(difficulty: Difficulty, rng: &mut impl Rng) -> Town {
    Town::new(Shop::new(SHOP_MARKDOWN), DEFAULT_TOUGHNESS, difficulty, rng)
}

fn print_menu() {
    println!("(B)uy something at the shop.");
    println!("(S)ell something at the shop.");
    println!("(M)ove on to a different town.");
    println!("(L)ook for trouble.");
    println!("(H)unt for treasure.");
    println!("(D)ig for gold.");
    println!("Give up the hunt and e(X)it.");
}

fn run_shop(town: &mut Town, action: ShopAction) -> io::Result<()> {
    println!("\nThe shoppe trades in:");
    for (item, list_price) in town.shop().catalog() {
        let price = match action {
            ShopAction::Buy => list_price,
            ShopAction::Sell => town.shop().sell_price(item),
        };
        println!("  {:<8} {} gold", item.name(), price.to_string().yellow());
    }

    let wanted = prompt("Which item? ")?;
    match wanted.parse() {
        Ok(item) => match town.enter_shop(action, item) {
            Ok(outcome) => println!("{}", outcome),
            Err(err) => println!("{}", err),
        },
        Err(()) => println!("The shoppe doesn't deal in that."),
    }
    Ok(())
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
