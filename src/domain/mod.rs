//! Domain layer - Core business objects with no external dependencies
//!
//! This layer contains:
//! - Entities: Value objects of the lookup pipeline (coordinates, passes)
//!   and the mention/reply pair
//! - Traits: Abstractions for infrastructure (Bot)

pub mod entities;
pub mod traits;
