//! Character class partitioning used by the scoring sections.

use std::collections::HashSet;

use unicode_segmentation::UnicodeSegmentation;

/// Password characters bucketed into the classes the scorer works on.
///
/// Letter and digit membership is ASCII-based and tested per `char`.
/// Everything else is special. `length` and `special` are counted in
/// user-perceived characters (extended grapheme clusters), so an emoji or a
/// base letter with its combining marks counts once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterClasses {
    pub length: usize,
    /// Graphemes of the text left after removing ASCII letters and digits.
    pub special: Vec<String>,
    pub letters: Vec<char>,
    pub capitals: Vec<char>,
    pub lowers: Vec<char>,
    pub numbers: Vec<char>,
}

impl CharacterClasses {
    pub fn from_password(password: &str) -> Self {
        let mut classes = CharacterClasses {
            length: password.graphemes(true).count(),
            ..CharacterClasses::default()
        };
        let mut remainder = String::new();

        for c in password.chars() {
            if c.is_ascii_digit() {
                classes.numbers.push(c);
            } else if c.is_ascii_alphabetic() {
                classes.letters.push(c);
                if c.is_ascii_uppercase() {
                    classes.capitals.push(c);
                } else {
                    classes.lowers.push(c);
                }
            } else {
                remainder.push(c);
            }
        }

        classes.special = remainder.graphemes(true).map(str::to_string).collect();
        classes
    }

    pub fn lower_dups(&self) -> usize {
        duplicates(&self.lowers)
    }

    pub fn capital_dups(&self) -> usize {
        duplicates(&self.capitals)
    }

    pub fn number_dups(&self) -> usize {
        duplicates(&self.numbers)
    }
}

/// Occurrences beyond the first of each distinct character.
fn duplicates(chars: &[char]) -> usize {
    let distinct: HashSet<&char> = chars.iter().collect();
    chars.len() - distinct.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_mixed_password() {
        let classes = CharacterClasses::from_password("Ab1!c");
        assert_eq!(classes.length, 5);
        assert_eq!(classes.letters, vec!['A', 'b', 'c']);
        assert_eq!(classes.capitals, vec!['A']);
        assert_eq!(classes.lowers, vec!['b', 'c']);
        assert_eq!(classes.numbers, vec!['1']);
        assert_eq!(classes.special, vec!["!"]);
    }

    #[test]
    fn test_non_ascii_letters_are_special() {
        let classes = CharacterClasses::from_password("pässwörd");
        assert_eq!(classes.length, 8);
        assert_eq!(classes.special, vec!["ä", "ö"]);
        assert_eq!(classes.lowers.len(), 6);
    }

    #[test]
    fn test_emoji_counts_once() {
        let classes = CharacterClasses::from_password(&"🦀".repeat(10));
        assert_eq!(classes.length, 10);
        assert_eq!(classes.special.len(), 10);

        // Family emoji joined with zero-width joiners is a single grapheme
        let classes = CharacterClasses::from_password("👨\u{200d}👩\u{200d}👧");
        assert_eq!(classes.length, 1);
        assert_eq!(classes.special.len(), 1);
    }

    #[test]
    fn test_combining_marks_leave_base_letter() {
        // Decomposed "é": the base 'e' stays a lowercase letter and the
        // stripped combining marks run together into one special grapheme
        let classes = CharacterClasses::from_password(&"e\u{301}".repeat(10));
        assert_eq!(classes.length, 10);
        assert_eq!(classes.lowers.len(), 10);
        assert_eq!(classes.special.len(), 1);
    }

    #[test]
    fn test_duplicate_counts() {
        let classes = CharacterClasses::from_password("aabbbCC112");
        assert_eq!(classes.lower_dups(), 3);
        assert_eq!(classes.capital_dups(), 1);
        assert_eq!(classes.number_dups(), 1);
    }

    #[test]
    fn test_empty_password() {
        let classes = CharacterClasses::from_password("");
        assert_eq!(classes, CharacterClasses::default());
        assert_eq!(classes.lower_dups(), 0);
    }
}
