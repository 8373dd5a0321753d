//! Application layer errors

use thiserror::Error;

/// Failures of the three upstream lookup stages.
///
/// Every stage-local failure propagates unchanged through the pipeline to
/// the responder, which is the sole recovery boundary.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Connection, DNS, or timeout failure before a status was received.
    #[error("transport error: {0}")]
    Transport(String),

    /// The upstream service answered with a non-2xx status.
    #[error("upstream returned status {status}")]
    UpstreamHttp { status: u16 },

    /// The response body did not match the expected shape.
    #[error("unexpected upstream response: {0}")]
    UpstreamParse(String),
}

/// Social platform adapter errors
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
