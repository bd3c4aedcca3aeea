//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer interacts with
//! external systems. Implementations live in the infrastructure layer
//! (the server binary).

pub mod services;

// Re-exports
pub use services::*;
