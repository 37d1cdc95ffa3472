//! `mighty`: command-log replay and a random-play soak simulator for the
//! Mighty rule engine.

mod config;
mod error;
mod output;
mod replay;
mod simulator;
mod telemetry;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{error, info, warn};

use crate::error::CliError;
use crate::output::OutputWriter;
use crate::simulator::{HandSummary, Simulator};

#[derive(Parser)]
#[command(name = "mighty")]
#[command(about = "Replay and soak-test Mighty hands")]
struct Cli {
    /// JSON rules file; omitted fields keep the base rules
    #[arg(long, env = "MIGHTY_RULES", global = true)]
    rules: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Deal with SEED, apply a JSONL command log, print the final state
    Replay {
        #[arg(long)]
        seed: u64,

        /// One JSON command per line
        #[arg(long)]
        log: PathBuf,

        /// Print this seat's perspective instead of the full state
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..5))]
        viewer: Option<u8>,
    },
    /// Play complete hands with random legal moves
    Simulate {
        /// Number of hands to play
        #[arg(short, long, default_value = "1")]
        games: u32,

        /// Master seed for deals and players
        #[arg(long)]
        seed: Option<u64>,

        /// Output directory for results
        #[arg(long, default_value = "./simulation-results")]
        output_dir: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.verbose, cli.json_logs);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "mighty failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let rules = config::load_rules(cli.rules.as_deref())?;

    match cli.command {
        Cmd::Replay { seed, log, viewer } => {
            let commands = replay::read_log(&log)?;
            let game = replay::run_replay(seed, rules, &commands)?;
            println!("{}", replay::render(&game, viewer)?);
        }
        Cmd::Simulate {
            games,
            seed,
            output_dir,
        } => {
            let mut rng = match seed {
                Some(s) => ChaCha20Rng::seed_from_u64(s),
                None => ChaCha20Rng::from_os_rng(),
            };
            let simulator = Simulator::new(rules, rng.random());
            let mut writer = OutputWriter::new(&output_dir)?;

            let start = Instant::now();
            let mut results = Vec::new();
            let mut errors = 0;
            for game_no in 1..=games {
                let hand_seed: u64 = rng.random();
                match simulator.play_hand(game_no, hand_seed) {
                    Ok(summary) => {
                        writer.write_hand(&summary)?;
                        results.push(summary);
                    }
                    Err(e) => {
                        errors += 1;
                        warn!(game = game_no, seed = hand_seed, error = %e, "hand failed");
                    }
                }
            }
            let path = writer.finish()?;
            info!(path = %path.display(), "results written");
            print_summary(&results, errors, start.elapsed(), games);
            if errors > 0 {
                return Err(CliError::SimulationFailed {
                    failed: errors,
                    total: games,
                });
            }
        }
    }
    Ok(())
}

fn print_summary(results: &[HandSummary], errors: u32, elapsed: Duration, total: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Hands completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per hand: {:?}",
        elapsed / results.len() as u32
    );

    let n = results.len() as f64;
    let won = results.iter().filter(|r| r.declarer_won).count();
    let redeals: u32 = results.iter().map(|r| r.deals - 1).sum();
    let avg_bid = results.iter().map(|r| f64::from(r.bid)).sum::<f64>() / n;
    let avg_points = results.iter().map(|r| f64::from(r.declarer_points)).sum::<f64>() / n;
    println!(
        "Declarer won: {} ({:.1}%), avg bid {:.1}, avg points {:.1}, redeals {}",
        won,
        won as f64 / n * 100.0,
        avg_bid,
        avg_points,
        redeals
    );

    let mut totals = [0i64; 5];
    for result in results {
        for (seat, &p) in result.payouts.iter().enumerate() {
            totals[seat] += i64::from(p);
        }
    }
    println!("\n=== Payouts by Seat ===");
    for (seat, total) in totals.iter().enumerate() {
        println!("Seat {}: total={}, avg={:.2}", seat, total, *total as f64 / n);
    }
}
