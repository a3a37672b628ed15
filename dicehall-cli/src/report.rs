//! Console rendering of a finished simulation.
use colored::Colorize;

use dicehall_game::{SimulationResult, SummaryStats};

const HISTOGRAM_WIDTH: usize = 40;

pub fn print_report(seed: u64, result: &SimulationResult, summary: &SummaryStats) {
    println!();
    println!("{}", "====== SIMULATION SUMMARY ======".bold());
    println!("Total rounds simulated: {}", result.rounds_played);
    println!("Total games (resets) played: {}", result.games_played);
    println!(
        "Overall win rate: {}",
        format!("{:.2}%", summary.win_rate).bold()
    );
    println!("Avg win amount: ${:.2}", summary.avg_win_amount);
    println!("Avg lose amount: ${:.2}", summary.avg_lose_amount);
    println!(
        "Avg broker gain per game: {}",
        format!("${:.2}", summary.avg_broker_gain_per_game).red()
    );
    println!("Avg losing streak: {:.2}", summary.avg_losing_streak);
    println!(
        "Final balances: player {} / broker {}",
        format!("${}", result.player_series.last().copied().unwrap_or(0)).blue(),
        format!("${}", result.broker_series.last().copied().unwrap_or(0)).red()
    );

    println!();
    println!("{}", "-- Strategy performance --".bold());
    for entry in &summary.per_strategy {
        println!(
            "  {:<9} ({:>5} attempts): win rate {}",
            entry.strategy.name().cyan(),
            entry.attempts,
            format!("{:.2}%", entry.win_rate).bold()
        );
    }

    println!();
    println!("{}", "-- Losing streak distribution --".bold());
    if result.losing_streaks.is_empty() {
        println!("  no losing streaks recorded");
    } else {
        for line in histogram_lines(&result.losing_streaks, HISTOGRAM_WIDTH) {
            println!("  {line}");
        }
    }

    println!();
    println!("Replay this run with --seed {seed}");
}

/// Text histogram of streak lengths, one line per length, bars scaled to
/// the most common length.
fn histogram_lines(streaks: &[u32], width: usize) -> Vec<String> {
    let Some(&max_len) = streaks.iter().max() else {
        return Vec::new();
    };

    let mut counts = vec![0usize; max_len as usize + 1];
    for &streak in streaks {
        counts[streak as usize] += 1;
    }
    let peak = counts.iter().copied().max().unwrap_or(1).max(1);

    (1..=max_len as usize)
        .map(|len| {
            let count = counts[len];
            let bar_len = count * width / peak;
            format!("{len:>3} | {:<width$} {count}", "#".repeat(bar_len))
        })
        .collect()
}
