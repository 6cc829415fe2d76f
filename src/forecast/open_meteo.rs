//! HTTP forecast source backed by the Open-Meteo forecast endpoint.

use crate::error::StargazingError;
use crate::forecast::error::ForecastFetchError;
use crate::forecast::response::{
    api_error_reason, parse_forecast_body, ForecastRequest, ForecastResponse,
};
use crate::forecast::source::ForecastSource;
use bon::bon;
use log::{info, warn};
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Fetches daily weather code, daily moon phase and hourly cloud cover from
/// Open-Meteo. A request that times out is reported as
/// [`ForecastFetchError::NetworkRequest`].
#[derive(Debug, Clone)]
pub struct OpenMeteo {
    base_url: String,
    client: Client,
}

#[bon]
impl OpenMeteo {
    /// Creates a source with an optional custom endpoint and request timeout.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use stargazing::OpenMeteo;
    /// use std::time::Duration;
    ///
    /// # fn main() -> Result<(), stargazing::StargazingError> {
    /// let source = OpenMeteo::builder()
    ///     .timeout(Duration::from_secs(5))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub fn new(
        #[builder(into)] base_url: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, StargazingError> {
        let client = Client::builder()
            .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
            .user_agent(concat!("stargazing/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(StargazingError::ClientBuild)?;
        Ok(Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            client,
        })
    }
}

impl OpenMeteo {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl ForecastSource for OpenMeteo {
    async fn fetch(
        &self,
        request: &ForecastRequest,
    ) -> Result<ForecastResponse, ForecastFetchError> {
        let url = self.base_url.clone();
        info!(
            "Requesting forecast {}..{} for {:?} from {}",
            request.start_date, request.end_date, request.location, url
        );

        let response = self
            .client
            .get(&url)
            .query(&request.query_pairs())
            .send()
            .await
            .map_err(|e| ForecastFetchError::NetworkRequest(url.clone(), e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ForecastFetchError::NetworkRequest(url.clone(), e))?;

        if !status.is_success() {
            let reason = api_error_reason(&body);
            warn!("HTTP error for {}: {} {:?}", url, status, reason);
            return Err(ForecastFetchError::HttpStatus {
                url,
                status,
                reason,
            });
        }

        parse_forecast_body(&url, &body).map_err(|e| {
            warn!("Unusable forecast from {}: {}", url, e);
            e
        })
    }
}
