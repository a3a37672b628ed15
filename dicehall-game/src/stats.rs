//! Per-strategy accumulators, the frozen simulation result, and the
//! post-loop statistics reducer.
use serde::Serialize;

use crate::strategy::Strategy;

fn percent(wins: u64, attempts: u64) -> f64 {
    if attempts == 0 {
        0.0
    } else {
        wins as f64 / attempts as f64 * 100.0
    }
}

fn ratio(amount: i64, count: u64) -> f64 {
    if count == 0 {
        0.0
    } else {
        amount as f64 / count as f64
    }
}

/// Running tally for one strategy.
///
/// `win_rate_series` gets one entry per simulated round, whether or not the
/// strategy was chosen that round, so every series shares the round axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StrategyStats {
    pub attempts: u64,
    pub wins: u64,
    pub win_rate_series: Vec<f64>,
    // Last-known-rate cache: carries the rate forward on rounds where this
    // strategy was not chosen. Stays 0 until the first attempt.
    last_rate: f64,
}

impl StrategyStats {
    pub(crate) fn record_attempt(&mut self, won: bool) {
        self.attempts += 1;
        if won {
            self.wins += 1;
        }
        self.last_rate = percent(self.wins, self.attempts);
    }

    pub(crate) fn push_rate(&mut self) {
        self.win_rate_series.push(self.last_rate);
    }

    /// Cumulative win rate as of the latest attempt, in percent.
    #[must_use]
    pub fn cumulative_rate(&self) -> f64 {
        self.last_rate
    }

    /// Last entry of the aligned series, or 0 if the simulation ran for
    /// zero rounds.
    #[must_use]
    pub fn final_rate(&self) -> f64 {
        self.win_rate_series.last().copied().unwrap_or(0.0)
    }
}

/// Fixed table of one [`StrategyStats`] per strategy.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StrategyTable {
    entries: [StrategyStats; Strategy::COUNT],
}

impl StrategyTable {
    #[must_use]
    pub fn get(&self, strategy: Strategy) -> &StrategyStats {
        &self.entries[strategy.index()]
    }

    pub(crate) fn get_mut(&mut self, strategy: Strategy) -> &mut StrategyStats {
        &mut self.entries[strategy.index()]
    }

    /// Iterate in [`Strategy::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Strategy, &StrategyStats)> {
        Strategy::ALL
            .iter()
            .map(move |&strategy| (strategy, self.get(strategy)))
    }
}

/// Everything the simulation accumulated, frozen once the loop ends.
///
/// The balance series start at the seeded balances and contain a synthetic
/// re-seed point after every bankruptcy, so they can run longer than
/// `rounds_played + 1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    pub player_series: Vec<i64>,
    pub broker_series: Vec<i64>,
    /// Lengths of completed losing streaks, each >= 1.
    pub losing_streaks: Vec<u32>,
    pub total_wins: u64,
    pub total_losses: u64,
    pub total_win_amount: i64,
    pub total_lose_amount: i64,
    /// Bankruptcy resets + 1.
    pub games_played: u32,
    pub rounds_played: u32,
    pub strategies: StrategyTable,
}

impl SimulationResult {
    pub(crate) fn seeded(starting_balance: i64) -> Self {
        Self {
            player_series: vec![starting_balance],
            broker_series: vec![starting_balance],
            losing_streaks: Vec::new(),
            total_wins: 0,
            total_losses: 0,
            total_win_amount: 0,
            total_lose_amount: 0,
            games_played: 1,
            rounds_played: 0,
            strategies: StrategyTable::default(),
        }
    }
}

/// Final standing of one strategy for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrategyFinal {
    pub strategy: Strategy,
    pub attempts: u64,
    pub win_rate: f64,
}

/// Aggregate statistics over a finished simulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    /// Overall win rate in percent.
    pub win_rate: f64,
    pub avg_win_amount: f64,
    pub avg_lose_amount: f64,
    pub avg_broker_gain_per_game: f64,
    pub avg_losing_streak: f64,
    /// Final per-strategy win rates, in [`Strategy::ALL`] order.
    pub per_strategy: Vec<StrategyFinal>,
}

/// Reduce a frozen result to its summary statistics.
///
/// Pure function; every division is zero-guarded and defined as 0.
#[must_use]
pub fn summarize(result: &SimulationResult) -> SummaryStats {
    let rounds = result.total_wins + result.total_losses;
    let streak_total: u64 = result.losing_streaks.iter().map(|&s| u64::from(s)).sum();

    SummaryStats {
        win_rate: percent(result.total_wins, rounds),
        avg_win_amount: ratio(result.total_win_amount, result.total_wins),
        avg_lose_amount: ratio(result.total_lose_amount, result.total_losses),
        avg_broker_gain_per_game: ratio(
            result.total_lose_amount - result.total_win_amount,
            u64::from(result.games_played),
        ),
        avg_losing_streak: ratio(
            i64::try_from(streak_total).unwrap_or(i64::MAX),
            result.losing_streaks.len() as u64,
        ),
        per_strategy: result
            .strategies
            .iter()
            .map(|(strategy, stats)| StrategyFinal {
                strategy,
                attempts: stats.attempts,
                win_rate: stats.final_rate(),
            })
            .collect(),
    }
}
