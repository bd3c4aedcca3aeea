//! Responder Selection
//!
//! Decides which guinea pigs appear to speak in a turn. An addressed pig
//! always answers first; otherwise the responder count is sampled from a
//! mood-tier bucket distribution with one uniform draw.

use crate::domain::{Character, MoodTier};
use crate::ports::{pick, RandomSource};

/// Chance that an addressed pig drags one herd-mate into the reply.
const TAGALONG_CHANCE: f64 = 0.3;

/// Cumulative bucket thresholds for one mood tier.
///
/// A draw below `all_three` selects the full herd, below `two` selects
/// Nimbus and Dr. Stoffels, anything else leaves Nimbus alone.
#[derive(Debug, Clone, Copy)]
pub struct ResponderThresholds {
    pub all_three: f64,
    pub two: f64,
}

impl ResponderThresholds {
    /// Higher happiness favors multi-pig responses.
    pub fn for_tier(tier: MoodTier) -> Self {
        match tier {
            MoodTier::Happy => Self {
                all_three: 0.4,
                two: 0.7,
            },
            MoodTier::Peckish => Self {
                all_three: 0.3,
                two: 0.6,
            },
            MoodTier::Starving => Self {
                all_three: 0.2,
                two: 0.5,
            },
        }
    }
}

/// The ordered set of characters who will speak in this turn.
pub fn select_responders(
    addressed: Option<Character>,
    tier: MoodTier,
    rng: &mut dyn RandomSource,
) -> Vec<Character> {
    if let Some(primary) = addressed {
        let mut responders = vec![primary];
        if rng.next_f64() < TAGALONG_CHANCE {
            responders.push(*pick(rng, &primary.others()));
        }
        return responders;
    }

    let thresholds = ResponderThresholds::for_tier(tier);
    let draw = rng.next_f64();
    if draw < thresholds.all_three {
        Character::ALL.to_vec()
    } else if draw < thresholds.two {
        vec![Character::Nimbus, Character::DrStoffels]
    } else {
        vec![Character::Nimbus]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::testing::SeqRandom;

    fn responders_for(tier: MoodTier, draw: f64) -> Vec<Character> {
        let mut rng = SeqRandom::new([draw]);
        select_responders(None, tier, &mut rng)
    }

    #[test]
    fn test_happy_tier_buckets() {
        assert_eq!(responders_for(MoodTier::Happy, 0.39).len(), 3);
        assert_eq!(responders_for(MoodTier::Happy, 0.40).len(), 2);
        assert_eq!(responders_for(MoodTier::Happy, 0.69).len(), 2);
        assert_eq!(responders_for(MoodTier::Happy, 0.70).len(), 1);
    }

    #[test]
    fn test_peckish_tier_buckets() {
        assert_eq!(responders_for(MoodTier::Peckish, 0.29).len(), 3);
        assert_eq!(responders_for(MoodTier::Peckish, 0.30).len(), 2);
        assert_eq!(responders_for(MoodTier::Peckish, 0.59).len(), 2);
        assert_eq!(responders_for(MoodTier::Peckish, 0.60).len(), 1);
    }

    #[test]
    fn test_starving_tier_buckets() {
        assert_eq!(responders_for(MoodTier::Starving, 0.19).len(), 3);
        assert_eq!(responders_for(MoodTier::Starving, 0.20).len(), 2);
        assert_eq!(responders_for(MoodTier::Starving, 0.49).len(), 2);
        assert_eq!(responders_for(MoodTier::Starving, 0.50).len(), 1);
    }

    #[test]
    fn test_bucket_membership_is_fixed() {
        assert_eq!(
            responders_for(MoodTier::Happy, 0.1),
            vec![Character::Nimbus, Character::DrStoffels, Character::Oki]
        );
        assert_eq!(
            responders_for(MoodTier::Happy, 0.5),
            vec![Character::Nimbus, Character::DrStoffels]
        );
        assert_eq!(responders_for(MoodTier::Happy, 0.9), vec![Character::Nimbus]);
    }

    #[test]
    fn test_addressed_pig_speaks_first() {
        let mut rng = SeqRandom::new([0.9]);
        let responders = select_responders(Some(Character::Oki), MoodTier::Happy, &mut rng);
        assert_eq!(responders, vec![Character::Oki]);
    }

    #[test]
    fn test_addressed_pig_with_tagalong() {
        // First draw lands under the 0.3 tagalong chance, second picks the
        // other pig (0.6 of two -> index 1).
        let mut rng = SeqRandom::new([0.2, 0.6]);
        let responders = select_responders(Some(Character::Oki), MoodTier::Starving, &mut rng);
        assert_eq!(responders, vec![Character::Oki, Character::DrStoffels]);
        assert_eq!(responders.len(), 2);
    }

    #[test]
    fn test_tagalong_never_duplicates_primary() {
        for draw in [0.0, 0.49, 0.99] {
            let mut rng = SeqRandom::new([0.0, draw]);
            let responders =
                select_responders(Some(Character::Nimbus), MoodTier::Happy, &mut rng);
            assert_eq!(responders[0], Character::Nimbus);
            assert_ne!(responders[1], Character::Nimbus);
        }
    }
}
