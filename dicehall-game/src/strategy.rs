//! The six fixed betting strategies.
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A betting rule chosen once per round.
///
/// The set is closed: the evaluator matches exhaustively, so adding a
/// variant forces a rule, a weight and a stats slot everywhere at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Guess a 3-dice sum, then match it against up to 3 fresh rolls.
    High,
    /// Guess a 2-dice sum, then match it against up to 2 fresh rolls.
    Low,
    /// Guess a 3-dice sum and match it against the round's roll.
    Exact,
    /// Win when the first die shows 5 or 6.
    DieHigh,
    /// Win when the first die shows 1 or 2.
    DieLow,
    /// Win when all three dice match.
    Pattern,
}

impl Strategy {
    /// Canonical ordering used for stats tables and reports.
    pub const ALL: [Self; 6] = [
        Self::High,
        Self::Low,
        Self::Exact,
        Self::DieHigh,
        Self::DieLow,
        Self::Pattern,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Stable position within [`Self::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::High => 0,
            Self::Low => 1,
            Self::Exact => 2,
            Self::DieHigh => 3,
            Self::DieLow => 4,
            Self::Pattern => 5,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Low => "LOW",
            Self::Exact => "EXACT",
            Self::DieHigh => "DIE_HIGH",
            Self::DieLow => "DIE_LOW",
            Self::Pattern => "PATTERN",
        }
    }

    /// Uniform categorical draw over all six variants.
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::COUNT)]
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
