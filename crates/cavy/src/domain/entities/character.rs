//! Character - The Three Guinea Pigs
//!
//! The herd is a closed set: Nimbus, Dr. Stoffels, and o͞ki. Characters
//! have no lifecycle of their own; they are compile-time constants.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One of the three guinea-pig personas a reply line can be attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Character {
    #[serde(rename = "Nimbus")]
    Nimbus,
    #[serde(rename = "Dr. Stoffels")]
    DrStoffels,
    #[serde(rename = "o͞ki")]
    Oki,
}

/// Untagged reply lines and the feeding echo default to Nimbus.
pub const DEFAULT_CHARACTER: Character = Character::Nimbus;

impl Character {
    /// All characters, in the fixed herd order.
    pub const ALL: [Character; 3] = [Character::Nimbus, Character::DrStoffels, Character::Oki];

    /// The name used in speaker tags and the UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Character::Nimbus => "Nimbus",
            Character::DrStoffels => "Dr. Stoffels",
            Character::Oki => "o\u{35e}ki",
        }
    }

    /// The two herd members that are not `self`.
    pub fn others(&self) -> [Character; 2] {
        match self {
            Character::Nimbus => [Character::DrStoffels, Character::Oki],
            Character::DrStoffels => [Character::Nimbus, Character::Oki],
            Character::Oki => [Character::Nimbus, Character::DrStoffels],
        }
    }

    /// Resolve a speaker-tag name to a character.
    ///
    /// Accepts the display names plus the plain-ascii `oki` spelling the
    /// model sometimes produces. Unknown names return `None` so a line can
    /// never be attributed outside the herd.
    pub fn from_tag(tag: &str) -> Option<Character> {
        let tag = tag.trim();
        if tag.eq_ignore_ascii_case("nimbus") {
            Some(Character::Nimbus)
        } else if tag.eq_ignore_ascii_case("dr. stoffels")
            || tag.eq_ignore_ascii_case("dr stoffels")
            || tag.eq_ignore_ascii_case("stoffels")
        {
            Some(Character::DrStoffels)
        } else if tag.eq_ignore_ascii_case("o\u{35e}ki") || tag.eq_ignore_ascii_case("oki") {
            Some(Character::Oki)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_display_names() {
        assert_eq!(Character::from_tag("Nimbus"), Some(Character::Nimbus));
        assert_eq!(
            Character::from_tag("Dr. Stoffels"),
            Some(Character::DrStoffels)
        );
        assert_eq!(Character::from_tag("o\u{35e}ki"), Some(Character::Oki));
    }

    #[test]
    fn test_from_tag_aliases() {
        assert_eq!(Character::from_tag("stoffels"), Some(Character::DrStoffels));
        assert_eq!(Character::from_tag("oki"), Some(Character::Oki));
        assert_eq!(Character::from_tag(" NIMBUS "), Some(Character::Nimbus));
    }

    #[test]
    fn test_from_tag_unknown_is_none() {
        assert_eq!(Character::from_tag("Bob"), None);
        assert_eq!(Character::from_tag(""), None);
    }

    #[test]
    fn test_others_excludes_self() {
        for character in Character::ALL {
            assert!(!character.others().contains(&character));
        }
    }
}
