//! Thread RNG Adapter
//!
//! Production randomness source. No seed control; tests substitute
//! fixed-sequence sources at the port instead.

use rand::Rng;

use cavy::RandomSource;

/// `RandomSource` backed by the thread-local RNG.
#[derive(Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_f64(&mut self) -> f64 {
        rand::rng().random()
    }
}
