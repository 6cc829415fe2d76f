use crate::types::month::Month;
use chrono::NaiveDate;
use thiserror::Error;

/// Why a month's forecast could not be resolved.
///
/// Failures are never cached: the next request for the same month goes back to the
/// network.
#[derive(Debug, Error)]
pub enum ForecastFetchError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}{}", .reason.as_deref().map(|r| format!(": {}", r)).unwrap_or_default())]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        reason: Option<String>,
    },

    #[error("Forecast API returned an error: {reason}")]
    Api { reason: String },

    #[error("Failed to decode forecast response from {0}")]
    Decode(String, #[source] serde_json::Error),

    #[error("Malformed forecast response: {0}")]
    MalformedResponse(String),

    /// The forecast window for `month` falls outside the dates chrono can represent.
    #[error("Cannot compute a forecast window for {month} from {today}")]
    DateOutOfRange { month: Month, today: NaiveDate },
}

impl ForecastFetchError {
    /// The request never produced a successful HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ForecastFetchError::NetworkRequest(..) | ForecastFetchError::HttpStatus { .. }
        )
    }

    /// The API answered, but with an error payload or data that cannot be used.
    pub fn is_application(&self) -> bool {
        matches!(
            self,
            ForecastFetchError::Api { .. }
                | ForecastFetchError::Decode(..)
                | ForecastFetchError::MalformedResponse(_)
        )
    }
}
