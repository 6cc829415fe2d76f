use crate::forecast::error::ForecastFetchError;
use crate::forecast::response::{ForecastRequest, ForecastResponse};
use std::future::Future;

/// Something that can answer a [`ForecastRequest`], usually over the network.
///
/// [`crate::OpenMeteo`] is the production implementation. Implementations must not
/// cache; caching per month is done by [`crate::ForecastProvider`].
pub trait ForecastSource: Send + Sync {
    fn fetch(
        &self,
        request: &ForecastRequest,
    ) -> impl Future<Output = Result<ForecastResponse, ForecastFetchError>> + Send;
}
