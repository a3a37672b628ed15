//! Dicehall Game Engine
//!
//! Platform-agnostic core logic for the Dicehall dice betting simulation.
//! This crate runs the Monte Carlo loop and accumulates the raw statistics;
//! rendering and console reporting live in the CLI collaborator. All
//! randomness is injected, so seeded runs are reproducible bit for bit.

pub mod constants;
pub mod dice;
pub mod engine;
pub mod error;
pub mod outcome;
pub mod stats;
pub mod strategy;

// Re-export commonly used types
pub use dice::{DiceParams, DiceRoll, DiceSource, NormalDice};
pub use engine::{ProgressSink, SimConfig, run_simulation};
pub use error::ConfigError;
pub use outcome::{RoundOutcome, evaluate};
pub use stats::{
    SimulationResult, StrategyFinal, StrategyStats, StrategyTable, SummaryStats, summarize,
};
pub use strategy::Strategy;
