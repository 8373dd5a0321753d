//! Domain entities - Core business objects with no external dependencies

pub mod mention;
pub mod pass;

pub use mention::{MentionEvent, ReplyMessage};
pub use pass::{Coordinates, LocalizedPass, PassForecast, PassPrediction};
