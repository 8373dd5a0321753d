//! Platform adapters

pub mod twitter;
