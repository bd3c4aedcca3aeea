//! Cavy Domain Library
//!
//! Core domain types and routing logic for the Cavy guinea-pig group chat.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Character, Turn, GroupReply)
//!   - `value_objects/`: Immutable value types (MoodTier)
//!   - `errors/`: Domain-specific error types
//!
//! - **Routing** (`routing/`): The responder router. Decides which
//!   characters speak, assembles the persona prompt, and parses the
//!   completion text back into attributed reply lines
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: Completion provider and randomness source
//!
//! # Usage
//!
//! ```rust,ignore
//! use cavy::{Character, ResponderRouter, Turn};
//! use cavy::ports::CompletionProvider;
//! ```

pub mod domain;
pub mod ports;
pub mod routing;

// Re-export commonly used types
pub use domain::{
    Character, DomainError, GroupReply, MoodTier, ReplyLine, Turn, TurnRole, DEFAULT_CHARACTER,
};
pub use ports::{
    ChatMessage, CompletionOptions, CompletionProvider, CompletionResponse, MessageRole,
    RandomSource, TokenUsage,
};
pub use routing::{ResponderRouter, FEEDING_CALL};
