//! Scoring policies: which sections run and how scores map to tiers.

use serde::Deserialize;

use crate::sections::{
    Section, duplicate_section, length_section, mixed_case_section, special_section,
};
use crate::strength::StrengthTier;

const COMPOSITE_SECTIONS: &[(&str, Section)] = &[
    ("length", length_section),
    ("duplicates", duplicate_section),
    ("mixed_case", mixed_case_section),
    ("special", special_section),
];

const LENGTH_ONLY_SECTIONS: &[(&str, Section)] = &[("length", length_section)];

/// Scoring rule set.
///
/// `Composite` is the default and uses character classes and duplicate
/// penalties. `LengthOnly` is the older rule that only counts characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPolicy {
    #[default]
    Composite,
    LengthOnly,
}

impl ScoringPolicy {
    /// Sections run in order by the evaluator.
    pub(crate) fn sections(&self) -> &'static [(&'static str, Section)] {
        match self {
            ScoringPolicy::Composite => COMPOSITE_SECTIONS,
            ScoringPolicy::LengthOnly => LENGTH_ONLY_SECTIONS,
        }
    }

    /// Maps a score to a tier. Where the tier ranges share a boundary
    /// value, the lower tier wins.
    pub fn tier_for(&self, score: i64) -> StrengthTier {
        let (weak_max, medium_max) = match self {
            ScoringPolicy::Composite => (10, 19),
            ScoringPolicy::LengthOnly => (10, 20),
        };

        if score <= weak_max {
            StrengthTier::Weak
        } else if score <= medium_max {
            StrengthTier::Medium
        } else {
            StrengthTier::Strong
        }
    }
}
