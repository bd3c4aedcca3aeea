//! Infrastructure Adapters
//!
//! Concrete implementations of the domain ports.

mod openai;
mod random;

pub use openai::OpenAiCompletion;
pub use random::ThreadRandom;
