//! Special-Case Intercepts
//!
//! Two deterministic shortcuts that answer without calling the completion
//! service: the feeding echo and the favorite-human question. Both produce
//! a single-speaker, single-line reply.

use crate::domain::{Character, GroupReply, Turn, DEFAULT_CHARACTER};
use crate::ports::{pick, RandomSource};

/// The exact phrase the client sends when veggies are served.
pub const FEEDING_CALL: &str = "*nom nom nom nom nom nom* \u{1f955}";

/// Canned answer affirming equal love for both caretakers.
fn favorite_human_line(speaker: Character) -> &'static str {
    match speaker {
        Character::Nimbus => {
            "Wheek wheek! Oh, that's easy! We love our daddies Vincent AND Andy equally! They \
             both give us the BEST veggies and cuddles! Wheek! \u{1f955}\u{2764}\u{fe0f}"
        }
        Character::DrStoffels => {
            "*nervous squeak* Oh my! If I don't move, they won't see I exist right? But I do love \
             both Vincent and Andy the same! They're both so kind to us!"
        }
        Character::Oki => {
            "Kawaii! In Japanese culture, we honor all our caretakers equally! Vincent-san and \
             Andy-san are both very special to us, ne? \u{611b}\u{3057}\u{3066}\u{308b} (aishiteru)!"
        }
    }
}

fn is_favorite_human_query(lower: &str) -> bool {
    lower.contains("favorite human")
        || lower.contains("favourite human")
        || lower.contains("which human")
        || lower.contains("love vincent")
        || lower.contains("love andy")
        || (lower.contains("who") && lower.contains("love"))
        || (lower.contains("human") && lower.contains("love"))
}

/// Check the triggering turn against the shortcuts. `Some` means the
/// completion call is skipped entirely.
pub fn intercept(turn: &Turn, rng: &mut dyn RandomSource) -> Option<GroupReply> {
    if turn.content == FEEDING_CALL {
        let speaker = turn.speaker.unwrap_or(DEFAULT_CHARACTER);
        return Some(GroupReply::single(speaker, FEEDING_CALL));
    }

    let lower = turn.content.to_lowercase();
    if is_favorite_human_query(&lower) {
        let speaker = *pick(rng, &Character::ALL);
        return Some(GroupReply::single(speaker, favorite_human_line(speaker)));
    }

    None
}
