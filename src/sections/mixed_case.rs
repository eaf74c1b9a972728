//! Mixed case section - rewards using both capital and lowercase letters.

use super::{Adjustment, SectionResult};
use crate::classes::CharacterClasses;

const MIXED_CASE_BONUS: i64 = 5;
const LONG_LETTERS_BONUS: i64 = 5;
const LONG_LETTERS_MIN: usize = 9;

/// Adds 5 points when both cases are present, and 5 more when there are
/// more than eight letters and fewer than half of them are repeats.
///
/// # Returns
/// - `Some(adjustment)` if both cases are present
/// - `None` otherwise
pub fn mixed_case_section(classes: &CharacterClasses) -> SectionResult {
    if classes.lowers.is_empty() || classes.capitals.is_empty() {
        return None;
    }

    let mut points = MIXED_CASE_BONUS;
    let letter_dups = classes.capital_dups() + classes.lower_dups();
    if classes.letters.len() >= LONG_LETTERS_MIN && classes.letters.len() / 2 > letter_dups {
        points += LONG_LETTERS_BONUS;
    }

    Some(Adjustment::new(points, "Mixed upper and lower case"))
}
