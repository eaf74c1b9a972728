//! Duplicate section - penalizes repeated characters within a class.

use super::{Adjustment, SectionResult};
use crate::classes::CharacterClasses;

/// Subtracts one point for every repeat of an already seen lowercase letter,
/// capital letter or digit. Special characters are not penalized.
///
/// # Returns
/// - `Some(adjustment)` with negative points if any class has repeats
/// - `None` if all classed characters are distinct
pub fn duplicate_section(classes: &CharacterClasses) -> SectionResult {
    let counts = [
        ("lowercase letters", classes.lower_dups()),
        ("capital letters", classes.capital_dups()),
        ("numbers", classes.number_dups()),
    ];

    let penalty: usize = counts.iter().map(|(_, dups)| dups).sum();
    if penalty == 0 {
        return None;
    }

    let repeated: Vec<_> = counts
        .iter()
        .filter(|(_, dups)| *dups > 0)
        .map(|(name, _)| *name)
        .collect();

    Some(Adjustment::new(
        -(penalty as i64),
        &format!("Repeated {}", repeated.join(", ")),
    ))
}
