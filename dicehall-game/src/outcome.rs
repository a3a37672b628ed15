//! Outcome evaluation: strategy-specific games of chance.
//!
//! Each strategy is an independent rule, not a variation of one formula.
//! High, Low and Exact draw fresh rolls through the shared [`DiceSource`],
//! consuming extra entropy beyond the round's nominal roll; that draw order
//! is part of the game's seeded behavior.
use serde::{Deserialize, Serialize};

use crate::constants::{
    DIE_HIGH_MULTIPLIER, DIE_HIGH_THRESHOLD, DIE_LOW_MULTIPLIER, DIE_LOW_THRESHOLD,
    EXACT_MULTIPLIER, HIGH_GUESS_ATTEMPTS, HIGH_MULTIPLIER, LOW_GUESS_ATTEMPTS, LOW_MULTIPLIER,
    PATTERN_MULTIPLIER,
};
use crate::dice::{DiceRoll, DiceSource};
use crate::strategy::Strategy;

/// Verdict for a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub won: bool,
    /// Payout factor on a win; always 1 on a loss (only the base wager
    /// is forfeited).
    pub multiplier: i64,
}

impl RoundOutcome {
    pub(crate) const LOSS: Self = Self {
        won: false,
        multiplier: 1,
    };

    pub(crate) const fn win(multiplier: i64) -> Self {
        Self {
            won: true,
            multiplier,
        }
    }
}

/// Apply a strategy's rule to the round's roll.
///
/// `dice` is the round's nominal roll. DieHigh, DieLow and Pattern read it
/// directly; High and Low ignore it entirely; Exact compares a fresh guess
/// against its sum.
pub fn evaluate<S: DiceSource>(strategy: Strategy, dice: DiceRoll, source: &mut S) -> RoundOutcome {
    match strategy {
        Strategy::High => {
            let guess = source.roll().sum();
            for _ in 0..HIGH_GUESS_ATTEMPTS {
                if source.roll().sum() == guess {
                    return RoundOutcome::win(HIGH_MULTIPLIER);
                }
            }
            RoundOutcome::LOSS
        }
        Strategy::Low => {
            let guess = source.roll().sum_front_pair();
            for _ in 0..LOW_GUESS_ATTEMPTS {
                if source.roll().sum() == guess {
                    return RoundOutcome::win(LOW_MULTIPLIER);
                }
            }
            RoundOutcome::LOSS
        }
        Strategy::Exact => {
            if source.roll().sum() == dice.sum() {
                RoundOutcome::win(EXACT_MULTIPLIER)
            } else {
                RoundOutcome::LOSS
            }
        }
        Strategy::DieHigh => {
            if dice.first() >= DIE_HIGH_THRESHOLD {
                RoundOutcome::win(DIE_HIGH_MULTIPLIER)
            } else {
                RoundOutcome::LOSS
            }
        }
        Strategy::DieLow => {
            if dice.first() <= DIE_LOW_THRESHOLD {
                RoundOutcome::win(DIE_LOW_MULTIPLIER)
            } else {
                RoundOutcome::LOSS
            }
        }
        Strategy::Pattern => {
            if dice.all_equal() {
                RoundOutcome::win(PATTERN_MULTIPLIER)
            } else {
                RoundOutcome::LOSS
            }
        }
    }
}
