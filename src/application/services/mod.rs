//! Application services - Business logic orchestration

pub mod flyover;
pub mod responder;

pub use flyover::FlyOverService;
pub use responder::Responder;
