//! Wire types exchanged with a forecast source.

use crate::forecast::error::ForecastFetchError;
use crate::types::site::LatLon;
use chrono::NaiveDate;
use serde::Deserialize;

/// Daily fields requested from the forecast API.
pub const DAILY_FIELDS: &str = "weathercode,moon_phase";
/// Hourly fields requested from the forecast API.
pub const HOURLY_FIELDS: &str = "cloudcover";

/// One forecast request: a location, the site's IANA timezone and an inclusive
/// date range already clamped to today and the forecast horizon.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRequest {
    pub location: LatLon,
    pub timezone: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl ForecastRequest {
    /// Query parameters in the order the API documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("latitude", self.location.0.to_string()),
            ("longitude", self.location.1.to_string()),
            ("daily", DAILY_FIELDS.to_string()),
            ("hourly", HOURLY_FIELDS.to_string()),
            ("start_date", self.start_date.format("%Y-%m-%d").to_string()),
            ("end_date", self.end_date.format("%Y-%m-%d").to_string()),
            ("timezone", self.timezone.clone()),
        ]
    }
}

/// A successful forecast payload.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ForecastResponse {
    pub daily: DailySeries,
    pub hourly: HourlySeries,
}

/// The `daily` block: parallel arrays, one element per date.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DailySeries {
    pub time: Vec<NaiveDate>,
    #[serde(default)]
    pub weathercode: Vec<Option<i32>>,
    #[serde(default)]
    pub moon_phase: Vec<Option<String>>,
}

/// The `hourly` block: 24 entries per date, in `daily.time` order.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct HourlySeries {
    /// Local timestamps such as `2025-10-18T21:00`.
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub cloudcover: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error: bool,
    reason: Option<String>,
}

/// Extracts the API's `reason` when `body` is an `{"error": true, ...}` object.
pub(crate) fn api_error_reason(body: &str) -> Option<String> {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(ApiErrorBody { error: true, reason }) => {
            Some(reason.unwrap_or_else(|| "unspecified API error".to_string()))
        }
        _ => None,
    }
}

/// Parses the body of a successful HTTP response.
///
/// An `error: true` body is an application-level failure even under a 2xx status.
pub(crate) fn parse_forecast_body(
    url: &str,
    body: &str,
) -> Result<ForecastResponse, ForecastFetchError> {
    if let Some(reason) = api_error_reason(body) {
        return Err(ForecastFetchError::Api { reason });
    }
    serde_json::from_str(body).map_err(|e| ForecastFetchError::Decode(url.to_string(), e))
}
