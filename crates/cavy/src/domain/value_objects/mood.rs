//! Mood Tier - Herd mood derived from the happiness meter
//!
//! Happiness is an integer in [0, 100] supplied per request and never
//! persisted here. Tier boundaries are inclusive on the lower bound.

use serde::{Deserialize, Serialize};

/// The herd's mood band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodTier {
    /// Happiness >= 80: wheeking, playful, chatty.
    Happy,
    /// Happiness in [40, 80): friendly but food-focused.
    Peckish,
    /// Happiness < 40: demanding veggies before anything else.
    Starving,
}

impl MoodTier {
    pub fn from_happiness(happiness: u8) -> Self {
        if happiness >= 80 {
            MoodTier::Happy
        } else if happiness >= 40 {
            MoodTier::Peckish
        } else {
            MoodTier::Starving
        }
    }
}

impl std::fmt::Display for MoodTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoodTier::Happy => write!(f, "happy"),
            MoodTier::Peckish => write!(f, "peckish"),
            MoodTier::Starving => write!(f, "starving"),
        }
    }
}
