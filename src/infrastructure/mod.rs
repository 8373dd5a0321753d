//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Lookup: Upstream HTTP lookup clients (geocoding, passes, timezone)
//! - Adapters: Platform integrations (Twitter)

pub mod adapters;
pub mod config;
pub mod lookup;
