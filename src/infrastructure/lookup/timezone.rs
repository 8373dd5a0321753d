//! Timezone lookup - pass timestamp plus coordinates to local time

use chrono::{DateTime, Datelike, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::application::errors::LookupError;
use crate::domain::entities::{Coordinates, LocalizedPass, PassPrediction};

/// Client for the timezone offset service.
pub struct TimeLocalizer {
    client: Client,
    base_url: String,
    api_key: String,
}

impl TimeLocalizer {
    pub fn new(client: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Convert a pass's rise timestamp to local time at the given coordinates.
    ///
    /// Local instant is `rise_timestamp + dstOffset + rawOffset` seconds
    /// after the UTC epoch; the duration passes through unchanged.
    pub async fn localize(
        &self,
        coords: &Coordinates,
        pass: &PassPrediction,
    ) -> Result<LocalizedPass, LookupError> {
        #[derive(Deserialize)]
        struct Response {
            #[serde(rename = "dstOffset")]
            dst_offset: i64,
            #[serde(rename = "rawOffset")]
            raw_offset: i64,
        }

        let url = format!("{}/maps/api/timezone/json", self.base_url);
        let location = format!("{},{}", coords.latitude, coords.longitude);
        let response = self.client
            .get(&url)
            .query(&[
                ("location", location),
                ("timestamp", pass.rise_timestamp.to_string()),
                ("key", self.api_key.clone()),
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

        let local_time = format_local_time(pass.rise_timestamp + data.dst_offset + data.raw_offset)?;

        Ok(LocalizedPass {
            local_time,
            duration_seconds: pass.duration_seconds,
        })
    }
}

/// Format an offset-shifted unix timestamp as e.g.
/// "Monday, January 1st 2024, 3:04:05 pm".
fn format_local_time(seconds: i64) -> Result<String, LookupError> {
    let instant = DateTime::<Utc>::from_timestamp(seconds, 0).ok_or_else(|| {
        LookupError::UpstreamParse(format!("timestamp out of range: {}", seconds))
    })?;

    let day = instant.day();
    Ok(format!(
        "{}, {} {}{} {}, {}",
        instant.format("%A"),
        instant.format("%B"),
        day,
        ordinal_suffix(day),
        instant.format("%Y"),
        instant.format("%-I:%M:%S %P"),
    ))
}

fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_suffix() {
        assert_eq!(ordinal_suffix(1), "st");
        assert_eq!(ordinal_suffix(2), "nd");
        assert_eq!(ordinal_suffix(3), "rd");
        assert_eq!(ordinal_suffix(4), "th");
        assert_eq!(ordinal_suffix(11), "th");
        assert_eq!(ordinal_suffix(12), "th");
        assert_eq!(ordinal_suffix(13), "th");
        assert_eq!(ordinal_suffix(21), "st");
        assert_eq!(ordinal_suffix(22), "nd");
        assert_eq!(ordinal_suffix(23), "rd");
        assert_eq!(ordinal_suffix(30), "th");
        assert_eq!(ordinal_suffix(31), "st");
    }

    #[test]
    fn test_format_local_time() {
        // 2024-01-01 15:04:05 UTC
        assert_eq!(
            format_local_time(1704121445).unwrap(),
            "Monday, January 1st 2024, 3:04:05 pm"
        );
        // 1700000000 is 2023-11-14 22:13:20 UTC; minus five hours
        assert_eq!(
            format_local_time(1700000000 - 18000).unwrap(),
            "Tuesday, November 14th 2023, 5:13:20 pm"
        );
    }

    #[test]
    fn test_format_local_time_midnight_is_twelve_am() {
        // 2024-01-01 00:00:00 UTC
        assert_eq!(
            format_local_time(1704067200).unwrap(),
            "Monday, January 1st 2024, 12:00:00 am"
        );
    }

    #[test]
    fn test_format_local_time_rejects_out_of_range() {
        assert!(format_local_time(i64::MAX).is_err());
    }
}
