//! Round engine: drives the betting loop and owns all mutable game state.
//!
//! The loop is strictly sequential and runs a fixed round budget to
//! completion. Bankruptcy is not an error path; it is a designed reset that
//! re-seeds the player balance and starts the next game.
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BASE_WAGER, DEFAULT_PROGRESS_INTERVAL, DEFAULT_STARTING_BALANCE, DEFAULT_TOTAL_ROUNDS,
};
use crate::dice::{DiceParams, DiceSource, NormalDice};
use crate::error::ConfigError;
use crate::outcome::{RoundOutcome, evaluate};
use crate::stats::SimulationResult;
use crate::strategy::Strategy;

/// Configuration for a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    pub total_rounds: u32,
    /// Fixed stake risked on every round.
    pub base_wager: i64,
    /// Seed balance for both the player and the broker, and the re-seed
    /// value after a bankruptcy.
    pub starting_balance: i64,
    pub dice: DiceParams,
    /// Rounds between progress-sink notifications; 0 disables them.
    pub progress_interval: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_rounds: DEFAULT_TOTAL_ROUNDS,
            base_wager: DEFAULT_BASE_WAGER,
            starting_balance: DEFAULT_STARTING_BALANCE,
            dice: DiceParams::default(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl SimConfig {
    /// Reject malformed configuration before any round runs.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero round count, a non-positive wager or
    /// starting balance, or unusable dice parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_rounds == 0 {
            return Err(ConfigError::NonPositiveRounds);
        }
        if self.base_wager <= 0 {
            return Err(ConfigError::NonPositiveWager(self.base_wager));
        }
        if self.starting_balance <= 0 {
            return Err(ConfigError::NonPositiveBalance(self.starting_balance));
        }
        self.dice.validate()
    }
}

/// Optional display collaborator, notified from the simulation thread.
///
/// Implementations must not assume they can influence the simulation;
/// the engine ignores everything a sink does.
pub trait ProgressSink {
    /// Called every `progress_interval` rounds with the in-progress
    /// balance series.
    fn on_round(&mut self, _round: u32, _player: &[i64], _broker: &[i64]) {}

    /// Called when the player goes bankrupt and the balance is re-seeded.
    /// `games_played` already counts the freshly started game.
    fn on_bankruptcy(&mut self, _round: u32, _games_played: u32) {}
}

/// Mutable state owned by the engine for the lifetime of one run.
struct RoundLedger {
    player: i64,
    broker: i64,
    streak: u32,
    result: SimulationResult,
}

impl RoundLedger {
    fn new(cfg: &SimConfig) -> Self {
        Self {
            player: cfg.starting_balance,
            broker: cfg.starting_balance,
            streak: 0,
            result: SimulationResult::seeded(cfg.starting_balance),
        }
    }

    /// Book one round's verdict: move the stake, update totals and streaks,
    /// append the aligned per-strategy rates and the balance pair, then run
    /// the bankruptcy check.
    fn settle(
        &mut self,
        cfg: &SimConfig,
        round: u32,
        strategy: Strategy,
        outcome: RoundOutcome,
        sink: &mut Option<&mut dyn ProgressSink>,
    ) {
        if outcome.won {
            let stake = cfg.base_wager * outcome.multiplier;
            self.player += stake;
            self.broker -= stake;
            self.result.total_wins += 1;
            self.result.total_win_amount += stake;
            if self.streak > 0 {
                self.result.losing_streaks.push(self.streak);
                self.streak = 0;
            }
        } else {
            self.player -= cfg.base_wager;
            self.broker += cfg.base_wager;
            self.result.total_losses += 1;
            self.result.total_lose_amount += cfg.base_wager;
            self.streak += 1;
        }

        self.result.strategies.get_mut(strategy).record_attempt(outcome.won);
        // Every strategy appends each round so the series stay aligned to
        // the shared round axis.
        for s in Strategy::ALL {
            self.result.strategies.get_mut(s).push_rate();
        }

        self.result.player_series.push(self.player);
        self.result.broker_series.push(self.broker);

        if cfg.progress_interval > 0
            && round % cfg.progress_interval == 0
            && let Some(sink) = sink.as_mut()
        {
            sink.on_round(round, &self.result.player_series, &self.result.broker_series);
        }

        if self.player <= 0 {
            self.player = cfg.starting_balance;
            self.result.player_series.push(self.player);
            self.result.broker_series.push(self.broker);
            self.result.games_played += 1;
            if let Some(sink) = sink.as_mut() {
                sink.on_bankruptcy(round, self.result.games_played);
            }
        }
    }

    fn finish(mut self, rounds: u32) -> SimulationResult {
        // A streak still open at the final round is a completed streak.
        if self.streak > 0 {
            self.result.losing_streaks.push(self.streak);
        }
        self.result.rounds_played = rounds;
        self.result
    }
}

/// Run the full simulation against one shared random source.
///
/// The source feeds strategy selection, the round rolls and the extra rolls
/// the evaluator draws, in that order, so a fixed seed reproduces the run
/// bit for bit.
///
/// # Errors
///
/// Returns an error if `cfg` fails validation; nothing else can fail.
pub fn run_simulation<R: Rng>(
    cfg: &SimConfig,
    rng: &mut R,
    mut sink: Option<&mut dyn ProgressSink>,
) -> Result<SimulationResult, ConfigError> {
    cfg.validate()?;
    let dist = cfg.dice.distribution()?;
    let mut ledger = RoundLedger::new(cfg);

    for round in 1..=cfg.total_rounds {
        let strategy = Strategy::sample(rng);
        let mut source = NormalDice::from_dist(dist, rng);
        let dice = source.roll();
        let outcome = evaluate(strategy, dice, &mut source);
        ledger.settle(cfg, round, strategy, outcome, &mut sink);
    }

    Ok(ledger.finish(cfg.total_rounds))
}
