//! Centralized balance and tuning constants for Dicehall game logic.
//!
//! These values define the deterministic math for the betting simulation.
//! Keeping them together ensures the game can only be rebalanced via code
//! changes reviewed in version control.

// Table defaults -----------------------------------------------------------
pub const DEFAULT_STARTING_BALANCE: i64 = 10_000;
pub const DEFAULT_BASE_WAGER: i64 = 100;
pub const DEFAULT_TOTAL_ROUNDS: u32 = 10_000;
pub const DEFAULT_PROGRESS_INTERVAL: u32 = 10;

// Dice tuning --------------------------------------------------------------
// The dice are a clamped normal approximation of a d6, not a uniform die.
// Central sums are deliberately over-represented.
pub const NORMAL_MEAN: f64 = 3.5;
pub const NORMAL_STDDEV: f64 = 1.2;
pub const DICE_PER_ROLL: usize = 3;
pub(crate) const DIE_MIN: u8 = 1;
pub(crate) const DIE_MAX: u8 = 6;

// Strategy rules -----------------------------------------------------------
pub(crate) const HIGH_GUESS_ATTEMPTS: u32 = 3;
pub(crate) const LOW_GUESS_ATTEMPTS: u32 = 2;
pub(crate) const HIGH_MULTIPLIER: i64 = 2;
pub(crate) const LOW_MULTIPLIER: i64 = 3;
pub(crate) const EXACT_MULTIPLIER: i64 = 5;
pub(crate) const DIE_HIGH_MULTIPLIER: i64 = 2;
pub(crate) const DIE_LOW_MULTIPLIER: i64 = 2;
pub(crate) const PATTERN_MULTIPLIER: i64 = 3;
pub(crate) const DIE_HIGH_THRESHOLD: u8 = 5;
pub(crate) const DIE_LOW_THRESHOLD: u8 = 2;
