//! Preference score model.
//!
//! Scores live on a fixed scale from −1 (unavailable) to 3 (most preferred).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a raw score falls outside the preference scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("preference score {score} is outside {min}..={max}", min = PreferenceScore::MIN_VALUE, max = PreferenceScore::MAX_VALUE)]
pub struct ScoreOutOfRange {
    /// The rejected score.
    pub score: i8,
}

/// A worker's desirability score for one slot.
///
/// Construction goes through [`PreferenceScore::new`] (or `TryFrom<i8>`
/// during deserialization), so every value is on the scale.
///
/// # Example
///
/// ```
/// use shift_engine::models::PreferenceScore;
///
/// let score = PreferenceScore::new(3).unwrap();
/// assert!(score.is_top());
/// assert!(score.is_available());
/// assert_eq!(score.cost(), 1);
///
/// assert!(!PreferenceScore::UNAVAILABLE.is_available());
/// assert!(PreferenceScore::new(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub struct PreferenceScore(i8);

impl PreferenceScore {
    /// Lowest score on the scale.
    pub const MIN_VALUE: i8 = -1;
    /// Highest score on the scale.
    pub const MAX_VALUE: i8 = 3;
    /// Cost offset: a score `s` costs `COST_BASE - s` to assign.
    pub const COST_BASE: i8 = 4;

    /// The worker cannot take the slot.
    pub const UNAVAILABLE: PreferenceScore = PreferenceScore(Self::MIN_VALUE);
    /// The strongest preference.
    pub const TOP: PreferenceScore = PreferenceScore(Self::MAX_VALUE);

    /// Creates a score, rejecting values off the scale.
    pub fn new(score: i8) -> Result<Self, ScoreOutOfRange> {
        if (Self::MIN_VALUE..=Self::MAX_VALUE).contains(&score) {
            Ok(Self(score))
        } else {
            Err(ScoreOutOfRange { score })
        }
    }

    /// Returns the raw score.
    pub fn value(self) -> i8 {
        self.0
    }

    /// Returns false only for the unavailable score.
    pub fn is_available(self) -> bool {
        self != Self::UNAVAILABLE
    }

    /// Returns true for the strongest preference.
    pub fn is_top(self) -> bool {
        self == Self::TOP
    }

    /// Assignment cost: strictly decreasing in the score, always positive.
    pub fn cost(self) -> u32 {
        // COST_BASE exceeds MAX_VALUE, so the difference is in 1..=5.
        (Self::COST_BASE - self.0) as u32
    }
}

impl TryFrom<i8> for PreferenceScore {
    type Error = ScoreOutOfRange;

    fn try_from(score: i8) -> Result<Self, Self::Error> {
        Self::new(score)
    }
}

impl From<PreferenceScore> for i8 {
    fn from(score: PreferenceScore) -> Self {
        score.0
    }
}

impl std::fmt::Display for PreferenceScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_bounds() {
        assert!(PreferenceScore::new(-1).is_ok());
        assert!(PreferenceScore::new(3).is_ok());
        assert_eq!(
            PreferenceScore::new(-2),
            Err(ScoreOutOfRange { score: -2 })
        );
        assert!(PreferenceScore::new(4).is_err());
    }

    #[test]
    fn test_cost_strictly_decreases_with_score() {
        let costs: Vec<u32> = (-1..=3)
            .map(|s| PreferenceScore::new(s).unwrap().cost())
            .collect();
        assert_eq!(costs, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        let ok: PreferenceScore = serde_json::from_str("2").unwrap();
        assert_eq!(ok.value(), 2);
        let err = serde_json::from_str::<PreferenceScore>("7").unwrap_err();
        assert!(err.to_string().contains("outside -1..=3"));
    }

    #[test]
    fn test_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&PreferenceScore::TOP).unwrap(), "3");
    }
}
