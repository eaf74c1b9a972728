//! Length section - every character is worth one point.

use super::{Adjustment, SectionResult};
use crate::classes::CharacterClasses;

/// Base score: one point per character.
///
/// # Returns
/// - `Some(adjustment)` for any non-empty password
/// - `None` for the empty password
pub fn length_section(classes: &CharacterClasses) -> SectionResult {
    if classes.length == 0 {
        return None;
    }
    Some(Adjustment::new(classes.length as i64, "Length"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_counts_chars() {
        let classes = CharacterClasses::from_password("Passw0rd!");
        let result = length_section(&classes);
        assert_eq!(result, Some(Adjustment::new(9, "Length")));
    }

    #[test]
    fn test_length_section_counts_scalars_not_bytes() {
        let classes = CharacterClasses::from_password("ééé");
        let result = length_section(&classes).expect("Expected adjustment");
        assert_eq!(result.points, 3);
    }

    #[test]
    fn test_length_section_empty() {
        let classes = CharacterClasses::from_password("");
        assert_eq!(length_section(&classes), None);
    }

    #[test]
    fn test_length_section_reason_format() {
        let classes = CharacterClasses::from_password("abc");
        let result = length_section(&classes).expect("Expected adjustment");
        assert_eq!(result.reason, "Length (+3)");
    }
}
