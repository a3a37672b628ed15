//! Dice generation via a clamped, rounded normal approximation.
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::constants::{DICE_PER_ROLL, DIE_MAX, DIE_MIN, NORMAL_MEAN, NORMAL_STDDEV};
use crate::error::ConfigError;

/// One roll of three dice. Immutable once created.
// Deserialization funnels through `From`, so external data cannot bypass
// the face clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; DICE_PER_ROLL]")]
pub struct DiceRoll([u8; DICE_PER_ROLL]);

impl From<[u8; DICE_PER_ROLL]> for DiceRoll {
    fn from(faces: [u8; DICE_PER_ROLL]) -> Self {
        Self::new(faces)
    }
}

impl DiceRoll {
    /// Build a roll from raw faces, clamping each into `1..=6`.
    #[must_use]
    pub fn new(faces: [u8; DICE_PER_ROLL]) -> Self {
        Self(faces.map(|f| f.clamp(DIE_MIN, DIE_MAX)))
    }

    #[must_use]
    pub const fn values(&self) -> [u8; DICE_PER_ROLL] {
        self.0
    }

    /// Sum of all three faces.
    #[must_use]
    pub fn sum(&self) -> u32 {
        self.0.iter().map(|&f| u32::from(f)).sum()
    }

    /// Sum of the first two faces (the LOW guess drops the last die).
    #[must_use]
    pub fn sum_front_pair(&self) -> u32 {
        u32::from(self.0[0]) + u32::from(self.0[1])
    }

    #[must_use]
    pub const fn first(&self) -> u8 {
        self.0[0]
    }

    /// True when all three faces show the same value.
    #[must_use]
    pub fn all_equal(&self) -> bool {
        self.0.iter().all(|&f| f == self.0[0])
    }
}

/// Parameters of the normal approximation used to roll a die.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiceParams {
    pub mean: f64,
    pub stddev: f64,
}

impl Default for DiceParams {
    fn default() -> Self {
        Self {
            mean: NORMAL_MEAN,
            stddev: NORMAL_STDDEV,
        }
    }
}

impl DiceParams {
    /// Check that the parameters describe a usable distribution.
    ///
    /// # Errors
    ///
    /// Returns an error if the mean is not finite or the stddev is not
    /// finite and positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.mean.is_finite() {
            return Err(ConfigError::InvalidMean(self.mean));
        }
        if !self.stddev.is_finite() || self.stddev <= 0.0 {
            return Err(ConfigError::InvalidStdDev(self.stddev));
        }
        Ok(())
    }

    pub(crate) fn distribution(&self) -> Result<Normal<f64>, ConfigError> {
        self.validate()?;
        Normal::new(self.mean, self.stddev).map_err(|_| ConfigError::InvalidStdDev(self.stddev))
    }
}

/// Source of dice rolls. The evaluator draws extra rolls through this seam,
/// so tests can script exact sequences.
pub trait DiceSource {
    fn roll(&mut self) -> DiceRoll;
}

/// Production dice source: each face is an independent normal draw,
/// rounded to the nearest integer, then clamped into `1..=6`.
///
/// Rounding happens before clamping, matching the distribution shape the
/// game was balanced around.
pub struct NormalDice<'a, R: Rng> {
    dist: Normal<f64>,
    rng: &'a mut R,
}

impl<'a, R: Rng> NormalDice<'a, R> {
    /// Bind a dice source to a random stream.
    ///
    /// # Errors
    ///
    /// Returns an error if `params` fails validation.
    pub fn new(params: DiceParams, rng: &'a mut R) -> Result<Self, ConfigError> {
        Ok(Self {
            dist: params.distribution()?,
            rng,
        })
    }

    pub(crate) fn from_dist(dist: Normal<f64>, rng: &'a mut R) -> Self {
        Self { dist, rng }
    }
}

impl<R: Rng> DiceSource for NormalDice<'_, R> {
    fn roll(&mut self) -> DiceRoll {
        let mut faces = [DIE_MIN; DICE_PER_ROLL];
        for face in &mut faces {
            let draw = self.dist.sample(self.rng).round();
            *face = clamp_face(draw);
        }
        DiceRoll(faces)
    }
}

fn clamp_face(rounded: f64) -> u8 {
    // `as` saturates, so extreme tail draws land on the clamp bounds anyway.
    (rounded as i64).clamp(i64::from(DIE_MIN), i64::from(DIE_MAX)) as u8
}

/// Replays a fixed sequence of rolls. Panics when the script runs dry.
#[cfg(test)]
pub(crate) struct ScriptedDice {
    queue: std::collections::VecDeque<DiceRoll>,
}

#[cfg(test)]
impl ScriptedDice {
    pub(crate) fn new(rolls: &[[u8; DICE_PER_ROLL]]) -> Self {
        Self {
            queue: rolls.iter().map(|&faces| DiceRoll::new(faces)).collect(),
        }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> DiceRoll {
        self.queue.pop_front().expect("scripted roll available")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn new_clamps_out_of_range_faces() {
        let roll = DiceRoll::new([0, 7, 3]);
        assert_eq!(roll.values(), [1, 6, 3]);
    }

    #[test]
    fn deserialization_clamps_out_of_range_faces() {
        let roll: DiceRoll = serde_json::from_str("[9,0,3]").unwrap();
        assert_eq!(roll.values(), [6, 1, 3]);
    }

    #[test]
    fn roll_accessors() {
        let roll = DiceRoll::new([5, 2, 4]);
        assert_eq!(roll.sum(), 11);
        assert_eq!(roll.sum_front_pair(), 7);
        assert_eq!(roll.first(), 5);
        assert!(!roll.all_equal());
        assert!(DiceRoll::new([3, 3, 3]).all_equal());
    }

    #[test]
    fn normal_rolls_stay_in_bounds() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut dice = NormalDice::new(DiceParams::default(), &mut rng).unwrap();
        for _ in 0..2_000 {
            for face in dice.roll().values() {
                assert!((1..=6).contains(&face), "face {face} out of range");
            }
        }
    }

    #[test]
    fn extreme_params_clamp_to_bounds() {
        let mut rng = SmallRng::seed_from_u64(7);
        let low = DiceParams {
            mean: -50.0,
            stddev: 0.5,
        };
        let mut dice = NormalDice::new(low, &mut rng).unwrap();
        assert_eq!(dice.roll().values(), [1, 1, 1]);

        let high = DiceParams {
            mean: 50.0,
            stddev: 0.5,
        };
        let mut dice = NormalDice::new(high, &mut rng).unwrap();
        assert_eq!(dice.roll().values(), [6, 6, 6]);
    }

    #[test]
    fn invalid_params_are_rejected() {
        assert!(matches!(
            DiceParams {
                mean: f64::NAN,
                stddev: 1.0
            }
            .validate(),
            Err(ConfigError::InvalidMean(_))
        ));
        assert!(matches!(
            DiceParams {
                mean: 3.5,
                stddev: 0.0
            }
            .validate(),
            Err(ConfigError::InvalidStdDev(_))
        ));
        assert!(matches!(
            DiceParams {
                mean: 3.5,
                stddev: -1.2
            }
            .validate(),
            Err(ConfigError::InvalidStdDev(_))
        ));
    }
}
