//! Configuration validation errors.

use thiserror::Error;

/// Rejected simulation configuration.
///
/// The simulation itself is a total function over its inputs; the only
/// failure surface is malformed configuration, which is rejected up front.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("total rounds must be greater than zero")]
    NonPositiveRounds,
    #[error("base wager must be greater than zero (got {0})")]
    NonPositiveWager(i64),
    #[error("starting balance must be greater than zero (got {0})")]
    NonPositiveBalance(i64),
    #[error("dice mean must be finite (got {0})")]
    InvalidMean(f64),
    #[error("dice stddev must be finite and positive (got {0})")]
    InvalidStdDev(f64),
}
