//! Password scoring sections
//!
//! Each section contributes one adjustment to the running score.

mod duplicates;
mod length;
mod mixed_case;
mod special;

pub use duplicates::duplicate_section;
pub use length::length_section;
pub use mixed_case::mixed_case_section;
pub use special::special_section;

use crate::classes::CharacterClasses;

/// Score change produced by a section, with the reason shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjustment {
    pub points: i64,
    pub reason: String,
}

impl Adjustment {
    pub(crate) fn new(points: i64, label: &str) -> Self {
        Self {
            points,
            reason: format!("{} ({:+})", label, points),
        }
    }
}

/// Result type for section functions.
/// - `Some(adjustment)` - Section changed the score
/// - `None` - Section had no effect
pub type SectionResult = Option<Adjustment>;

/// Signature shared by every section.
pub type Section = fn(&CharacterClasses) -> SectionResult;
