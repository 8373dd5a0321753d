//! Geocoding lookup - free-text place name to coordinates

use reqwest::Client;
use serde::Deserialize;

use crate::application::errors::LookupError;
use crate::domain::entities::Coordinates;

/// Client for the geocoding service.
pub struct Geocoder {
    client: Client,
    base_url: String,
    api_key: String,
}

impl Geocoder {
    pub fn new(client: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Resolve a place name to a latitude/longitude pair.
    pub async fn resolve(&self, location: &str) -> Result<Coordinates, LookupError> {
        #[derive(Deserialize)]
        struct Response {
            results: Vec<GeocodeResult>,
        }

        #[derive(Deserialize)]
        struct GeocodeResult {
            geometry: Geometry,
        }

        #[derive(Deserialize)]
        struct Geometry {
            location: Location,
        }

        #[derive(Deserialize)]
        struct Location {
            lat: f64,
            lng: f64,
        }

        let url = format!("{}/maps/api/geocode/json", self.base_url);
        let response = self.client
            .get(&url)
            .query(&[("address", location), ("key", self.api_key.as_str())])
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

        let first = data
            .results
            .into_iter()
            .next()
            .ok_or_else(|| LookupError::UpstreamParse("no geocode results".to_string()))?;

        Ok(Coordinates::new(
            first.geometry.location.lat,
            first.geometry.location.lng,
        ))
    }
}
