//! Town distribution simulator CLI.
//!
//! Run Monte Carlo simulations over many town visits to check outcome
//! distributions.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                      # Default: 10000 trials
//!   cargo run --bin simulate -- -n 1000 -t 0.8   # 1000 trials, toughness 0.8
//!   cargo run --bin simulate -- --seed 42        # Reproducible run

use prospect::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════╗");
    println!("║           PROSPECT TOWN SIMULATOR             ║");
    println!("╚═══════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Trials:      {}", config.trials);
    println!("  Toughness:   {}", config.toughness);
    println!("  Difficulty:  {}", config.difficulty.name());
    println!("  Sword:       {}", config.with_sword);
    if let Some(seed) = config.seed {
        println!("  Seed:        {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    if args.iter().any(|a| a == "--json") {
        println!("{}", report.to_json());
    } else {
        println!("{}", report.to_text());
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--trials" => {
                if i + 1 < args.len() {
                    config.trials = args[i + 1].parse().unwrap_or(10_000);
                    i += 1;
                }
            }
            "-t" | "--toughness" => {
                if i + 1 < args.len() {
                    config.toughness = args[i + 1].parse().unwrap_or(0.5);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--easy" => {
                config.difficulty = prospect::Difficulty::Easy;
            }
            "--sword" => {
                config.with_sword = true;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Prospect Town Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --trials <N>       Number of town visits (default: 10000)");
    println!("    -t, --toughness <P>    Tough-town probability (default: 0.5)");
    println!("    -s, --seed <S>         Random seed for reproducibility");
    println!("    --easy                 Easy mode (no item breakage)");
    println!("    --sword                Hunter carries a sword");
    println!("    --json                 Print the report as JSON");
    println!("    -h, --help             Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                     # Default run");
    println!("    cargo run --bin simulate -- -n 1000 -t 0.8  # Mostly tough towns");
    println!("    cargo run --bin simulate -- --seed 42       # Reproducible");
}
