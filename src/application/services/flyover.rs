//! Fly-over pipeline - geocode, predict, localize, strictly in sequence

use crate::application::errors::LookupError;
use crate::domain::entities::LocalizedPass;
use crate::infrastructure::lookup::{Geocoder, PassPredictor, TimeLocalizer};

/// Composes the three lookup stages into a single fly-over query.
pub struct FlyOverService {
    geocoder: Geocoder,
    predictor: PassPredictor,
    localizer: TimeLocalizer,
}

impl FlyOverService {
    pub fn new(geocoder: Geocoder, predictor: PassPredictor, localizer: TimeLocalizer) -> Self {
        Self {
            geocoder,
            predictor,
            localizer,
        }
    }

    /// Next visible pass over a free-text location, in that location's
    /// local time.
    ///
    /// Strictly sequential: each stage starts only after the previous one
    /// resolved, and the first failure short-circuits unchanged to the
    /// caller. No retry, no partial result.
    pub async fn fly_over(&self, location: &str) -> Result<LocalizedPass, LookupError> {
        let coords = self.geocoder.resolve(location).await?;
        let forecast = self.predictor.predict(&coords).await?;

        // The upstream contract says the list is non-empty on success; an
        // empty list still surfaces as a parse-class failure, not a panic.
        let first = forecast
            .passes
            .first()
            .copied()
            .ok_or_else(|| LookupError::UpstreamParse("empty pass list".to_string()))?;

        self.localizer.localize(&forecast.coordinates, &first).await
    }
}
