mod report;

use std::io::{Write, stdout};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::OsRng;
use rand_chacha::ChaCha20Rng;
use serde::Serialize;

use dicehall_game::constants::{
    DEFAULT_BASE_WAGER, DEFAULT_PROGRESS_INTERVAL, DEFAULT_STARTING_BALANCE, DEFAULT_TOTAL_ROUNDS,
    NORMAL_MEAN, NORMAL_STDDEV,
};
use dicehall_game::{
    DiceParams, ProgressSink, SimConfig, SummaryStats, run_simulation, summarize,
};

#[derive(Debug, Parser)]
#[command(name = "dicehall", version)]
#[command(about = "Monte Carlo simulator for the Dicehall dice betting game")]
struct Args {
    /// Number of rounds to simulate
    #[arg(long, default_value_t = DEFAULT_TOTAL_ROUNDS)]
    rounds: u32,

    /// Base wager risked each round
    #[arg(long, default_value_t = DEFAULT_BASE_WAGER)]
    wager: i64,

    /// Starting balance for both player and broker
    #[arg(long, default_value_t = DEFAULT_STARTING_BALANCE)]
    balance: i64,

    /// Mean of the normal die approximation
    #[arg(long, default_value_t = NORMAL_MEAN)]
    mean: f64,

    /// Standard deviation of the normal die approximation
    #[arg(long, default_value_t = NORMAL_STDDEV)]
    stddev: f64,

    /// RNG seed; omitted means a fresh seed from OS entropy
    #[arg(long)]
    seed: Option<u64>,

    /// Show a live balance line while the simulation runs
    #[arg(long)]
    live: bool,

    /// Rounds between live updates
    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    refresh: u32,

    /// Emit the summary as JSON instead of the console report
    #[arg(long)]
    json: bool,
}

/// Console sink: optional live balance line plus bankruptcy notices.
struct LiveDisplay {
    live: bool,
}

impl ProgressSink for LiveDisplay {
    fn on_round(&mut self, round: u32, player: &[i64], broker: &[i64]) {
        if !self.live {
            return;
        }
        let player = player.last().copied().unwrap_or(0);
        let broker = broker.last().copied().unwrap_or(0);
        print!(
            "\rround {round:>7}  player {:>12}  broker {:>12}",
            format!("${player}").blue(),
            format!("${broker}").red()
        );
        let _ = stdout().flush();
    }

    fn on_bankruptcy(&mut self, round: u32, games_played: u32) {
        if self.live {
            println!();
        }
        log::info!("player bankrupt at round {round}; starting game {games_played}");
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    seed: u64,
    config: &'a SimConfig,
    rounds_played: u32,
    games_played: u32,
    summary: &'a SummaryStats,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| OsRng.next_u64());
    let cfg = SimConfig {
        total_rounds: args.rounds,
        base_wager: args.wager,
        starting_balance: args.balance,
        dice: DiceParams {
            mean: args.mean,
            stddev: args.stddev,
        },
        progress_interval: args.refresh,
    };

    log::info!("simulating {} rounds with seed {seed}", cfg.total_rounds);
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut display = LiveDisplay { live: args.live };
    let result = run_simulation(&cfg, &mut rng, Some(&mut display))
        .context("simulation configuration rejected")?;
    if args.live {
        println!();
    }

    let summary = summarize(&result);
    if args.json {
        let payload = JsonReport {
            seed,
            config: &cfg,
            rounds_played: result.rounds_played,
            games_played: result.games_played,
            summary: &summary,
        };
        let stdout = stdout();
        serde_json::to_writer_pretty(stdout.lock(), &payload)
            .context("failed to serialize summary")?;
        println!();
    } else {
        report::print_report(seed, &result, &summary);
    }

    Ok(())
}
