//! Pass prediction lookup - coordinates to upcoming overhead passes

use reqwest::Client;
use serde::Deserialize;

use crate::application::errors::LookupError;
use crate::domain::entities::{Coordinates, PassForecast, PassPrediction};

/// Client for the satellite pass prediction service.
pub struct PassPredictor {
    client: Client,
    base_url: String,
}

impl PassPredictor {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch upcoming passes for the given coordinates.
    ///
    /// The service echoes the queried coordinates back; they are carried in
    /// the forecast because the timezone stage needs them again.
    pub async fn predict(&self, coords: &Coordinates) -> Result<PassForecast, LookupError> {
        #[derive(Deserialize)]
        struct Response {
            request: RequestEcho,
            response: Vec<Pass>,
        }

        #[derive(Deserialize)]
        struct RequestEcho {
            latitude: f64,
            longitude: f64,
        }

        #[derive(Deserialize)]
        struct Pass {
            risetime: i64,
            duration: u32,
        }

        let url = format!("{}/iss-pass.json", self.base_url);
        let response = self.client
            .get(&url)
            .query(&[
                ("lat", coords.latitude.to_string()),
                ("lon", coords.longitude.to_string()),
            ])
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::UpstreamHttp {
                status: status.as_u16(),
            });
        }

        let data: Response = response
            .json()
            .await
            .map_err(|e| LookupError::UpstreamParse(e.to_string()))?;

        Ok(PassForecast {
            coordinates: Coordinates::new(data.request.latitude, data.request.longitude),
            passes: data
                .response
                .into_iter()
                .map(|p| PassPrediction {
                    rise_timestamp: p.risetime,
                    duration_seconds: p.duration,
                })
                .collect(),
        })
    }
}
