//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Character: One of the three fixed guinea-pig personas
//! - Turn: A single entry in the append-only conversation
//! - GroupReply: Ordered, speaker-attributed reply lines

mod character;
mod conversation;
mod reply;

pub use character::*;
pub use conversation::*;
pub use reply::*;
