//! Veggie Meter
//!
//! The client-side happiness model: starts at 50, drops one point per
//! five seconds of neglect, and feeding adds ten points (capped at 100).

use std::time::{Duration, Instant};

const START_HAPPINESS: u8 = 50;
const DECAY_INTERVAL: Duration = Duration::from_secs(5);
const FEED_BOOST: u8 = 10;

/// Local happiness meter for the herd.
pub struct VeggieMeter {
    value: u8,
    last_decay: Instant,
}

impl VeggieMeter {
    pub fn new() -> Self {
        Self {
            value: START_HAPPINESS,
            last_decay: Instant::now(),
        }
    }

    /// Apply the decay owed since the last tick.
    pub fn tick(&mut self) {
        let elapsed = self.last_decay.elapsed();
        let steps = elapsed.as_secs() / DECAY_INTERVAL.as_secs();
        if steps > 0 {
            self.value = self.value.saturating_sub(steps.min(100) as u8);
            self.last_decay += DECAY_INTERVAL * steps as u32;
        }
    }

    /// Feed veggies: +10 happiness, capped at 100.
    pub fn feed(&mut self) {
        self.value = (self.value + FEED_BOOST).min(100);
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// The label the meter shows for the current band.
    pub fn label(&self) -> &'static str {
        if self.value >= 80 {
            "Very Happy!"
        } else if self.value >= 40 {
            "Getting Hungry..."
        } else {
            "Feed me now!"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_fifty() {
        assert_eq!(VeggieMeter::new().value(), 50);
    }

    #[test]
    fn test_feed_caps_at_hundred() {
        let mut meter = VeggieMeter::new();
        for _ in 0..10 {
            meter.feed();
        }
        assert_eq!(meter.value(), 100);
    }

    #[test]
    fn test_decay_one_point_per_five_seconds() {
        let mut meter = VeggieMeter::new();
        meter.last_decay = Instant::now() - Duration::from_secs(12);
        meter.tick();
        assert_eq!(meter.value(), 48);
        // Leftover two seconds carry toward the next step
        meter.last_decay -= Duration::from_secs(3);
        meter.tick();
        assert_eq!(meter.value(), 47);
    }

    #[test]
    fn test_decay_floors_at_zero() {
        let mut meter = VeggieMeter::new();
        meter.last_decay = Instant::now() - Duration::from_secs(5000);
        meter.tick();
        assert_eq!(meter.value(), 0);
    }

    #[test]
    fn test_labels_follow_bands() {
        let mut meter = VeggieMeter::new();
        assert_eq!(meter.label(), "Getting Hungry...");
        for _ in 0..5 {
            meter.feed();
        }
        assert_eq!(meter.label(), "Very Happy!");
        meter.value = 10;
        assert_eq!(meter.label(), "Feed me now!");
    }
}
