//! Special character section.

use super::{Adjustment, SectionResult};
use crate::classes::CharacterClasses;

const MAX_SPECIAL_BONUS: usize = 7;

/// One point for the first special character, plus one per ten specials,
/// capped at seven.
pub fn special_section(classes: &CharacterClasses) -> SectionResult {
    if classes.special.is_empty() {
        return None;
    }
    let bonus = (classes.special.len() / 10 + 1).min(MAX_SPECIAL_BONUS);
    Some(Adjustment::new(bonus as i64, "Special characters"))
}
