//! flyover-bot - replies to social-media mentions with the next visible
//! ISS pass over the mentioned location.

pub mod application;
pub mod domain;
pub mod infrastructure;
