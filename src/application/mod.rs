//! Application layer - Use cases and business logic
//!
//! This layer contains:
//! - Services: The lookup pipeline and the mention responder
//! - Errors: Domain-specific errors

pub mod errors;
pub mod services;
