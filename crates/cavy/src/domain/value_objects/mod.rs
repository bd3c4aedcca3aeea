//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod mood;

pub use mood::*;
