//! Addressed-Character Detection
//!
//! Finds the guinea pig, if any, the user named in their latest message.
//! Matching is case-insensitive and word-boundary bounded. Precedence is
//! fixed (Nimbus, then Dr. Stoffels, then o͞ki); the first match wins.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::Character;

static RE_NIMBUS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bnimbus\b").expect("valid regex"));
static RE_STOFFELS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(dr\.?\s*stoffels|stoffels)\b").expect("valid regex"));
static RE_OKI: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(oki|o\u{35e}ki)\b").expect("valid regex"));

/// The character explicitly named in `message`, or `None`.
pub fn addressed_character(message: &str) -> Option<Character> {
    if RE_NIMBUS.is_match(message) {
        Some(Character::Nimbus)
    } else if RE_STOFFELS.is_match(message) {
        Some(Character::DrStoffels)
    } else if RE_OKI.is_match(message) {
        Some(Character::Oki)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_nimbus() {
        assert_eq!(
            addressed_character("Hey Nimbus, how are you?"),
            Some(Character::Nimbus)
        );
    }

    #[test]
    fn test_detects_stoffels_case_insensitive() {
        assert_eq!(
            addressed_character("DR. STOFFELS???"),
            Some(Character::DrStoffels)
        );
        assert_eq!(
            addressed_character("what do you think, stoffels?"),
            Some(Character::DrStoffels)
        );
    }

    #[test]
    fn test_detects_oki_spellings() {
        assert_eq!(addressed_character("oki, hello!"), Some(Character::Oki));
        assert_eq!(
            addressed_character("o\u{35e}ki, hello!"),
            Some(Character::Oki)
        );
    }

    #[test]
    fn test_requires_word_boundary() {
        assert_eq!(addressed_character("nimbusstratus clouds"), None);
        assert_eq!(addressed_character("karaoki night"), None);
    }

    #[test]
    fn test_no_name_is_none() {
        assert_eq!(addressed_character("hello little pigs"), None);
    }

    #[test]
    fn test_precedence_first_match_wins() {
        assert_eq!(
            addressed_character("oki and Nimbus, sing!"),
            Some(Character::Nimbus)
        );
    }
}
