//! Strength types shared by the classifier and the field model.

use std::fmt;

/// Strength tier shown by the three-segment indicator.
///
/// Ordered from weakest to strongest, so tiers can be compared directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
}

impl StrengthTier {
    /// Number of indicator segments lit for this tier (1..=3).
    pub fn lit_segments(&self) -> usize {
        match self {
            StrengthTier::Weak => 1,
            StrengthTier::Medium => 2,
            StrengthTier::Strong => 3,
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrengthTier::Weak => "weak",
            StrengthTier::Medium => "medium",
            StrengthTier::Strong => "strong",
        };
        f.write_str(name)
    }
}

/// Raw strength score, signed since penalties are subtracted from the
/// running total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score(i64);

impl Score {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// Detailed result of an evaluation.
///
/// `score` and `tier` are `None` when the evaluation was cancelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthEvaluation {
    pub score: Option<Score>,
    pub tier: Option<StrengthTier>,
    pub reasons: Vec<String>,
}

impl StrengthEvaluation {
    /// Returns true if the evaluation ran to completion.
    pub fn is_evaluated(&self) -> bool {
        self.tier.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ordering() {
        assert!(StrengthTier::Weak < StrengthTier::Medium);
        assert!(StrengthTier::Medium < StrengthTier::Strong);
    }

    #[test]
    fn test_lit_segments() {
        assert_eq!(StrengthTier::Weak.lit_segments(), 1);
        assert_eq!(StrengthTier::Medium.lit_segments(), 2);
        assert_eq!(StrengthTier::Strong.lit_segments(), 3);
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(StrengthTier::Medium.to_string(), "medium");
    }
}
