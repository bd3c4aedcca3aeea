//! API Models
//!
//! Request/response DTOs for the HTTP layer.

mod chat;

pub use chat::*;
