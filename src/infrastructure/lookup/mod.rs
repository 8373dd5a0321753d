//! Upstream lookup clients
//!
//! One client per third-party service the pipeline depends on. All three
//! share a reqwest `Client` and the same failure policy: transport errors,
//! non-2xx statuses, and unexpected bodies map onto `LookupError`.

pub mod geocoder;
pub mod passes;
pub mod timezone;

pub use geocoder::Geocoder;
pub use passes::PassPredictor;
pub use timezone::TimeLocalizer;
