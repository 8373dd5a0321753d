use serde::{Deserialize, Serialize};

/// A latitude/longitude pair. Value equality only, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// One predicted overhead pass of the satellite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PassPrediction {
    /// Unix seconds (UTC) marking the start of the pass.
    pub rise_timestamp: i64,
    /// How long the satellite stays visible.
    pub duration_seconds: u32,
}

/// Pass predictions for a query, with the queried coordinates echoed back.
///
/// The echo matters: the time localizer needs the original coordinates
/// alongside the chosen pass timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct PassForecast {
    pub coordinates: Coordinates,
    pub passes: Vec<PassPrediction>,
}

/// Final pipeline output: the first upcoming pass converted to local time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedPass {
    /// Human-readable local time, e.g. "Monday, January 1st 2024, 3:04:05 pm".
    pub local_time: String,
    pub duration_seconds: u32,
}
