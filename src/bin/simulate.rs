//! Cookie economy simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                           # Greedy, 300 ticks
//!   cargo run --bin simulate -- -t 3600 -s cheapest    # Cheapest-first for an hour
//!   cargo run --bin simulate -- -s random --seed 42    # Reproducible random run
//!   cargo run --bin simulate -- --clicks 5 --json      # Also save a JSON report

use clap::Parser;
use clicker::build_info;
use clicker::simulator::{run_simulation, SimConfig, Strategy};
use std::process::ExitCode;

/// Simulate the cookie economy without a terminal UI.
#[derive(Parser)]
#[command(name = "simulate", version = build_info::BUILD_VERSION)]
struct Cli {
    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = SimConfig::default().ticks)]
    ticks: u64,

    /// Purchase strategy
    #[arg(short, long, value_enum, default_value_t = Strategy::Greedy)]
    strategy: Strategy,

    /// Cookie balance at tick 0
    #[arg(long, default_value_t = SimConfig::default().starting_cookies)]
    starting_cookies: u64,

    /// Manual clicks before every tick
    #[arg(long, default_value_t = 0)]
    clicks: u64,

    /// Random seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Record a history sample every N ticks
    #[arg(long, default_value_t = SimConfig::default().sample_every)]
    sample_every: u64,

    /// Save a JSON report next to the text output
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = SimConfig {
        ticks: cli.ticks,
        starting_cookies: cli.starting_cookies,
        strategy: cli.strategy,
        clicks_per_tick: cli.clicks,
        seed: cli.seed,
        sample_every: cli.sample_every,
    };

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              COOKIE CLICKER SIMULATOR                         ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Ticks:          {}", config.ticks);
    println!("  Strategy:       {:?}", config.strategy);
    println!("  Start Cookies:  {}", config.starting_cookies);
    println!("  Clicks/Tick:    {}", config.clicks_per_tick);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();

    let report = match run_simulation(&config) {
        Ok(report) => report,
        Err(e) => {
            log::error!("Simulation failed: {}", e);
            eprintln!("Simulation failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", report.to_text());

    if cli.json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        if let Err(e) = std::fs::write(&filename, report.to_json()) {
            eprintln!("Failed to write JSON report: {}", e);
            return ExitCode::FAILURE;
        }
        println!("JSON report saved to: {}", filename);
    }

    ExitCode::SUCCESS
}
