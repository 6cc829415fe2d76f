use crate::forecast::error::ForecastFetchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StargazingError {
    #[error(transparent)]
    Forecast(#[from] ForecastFetchError),

    #[error("Invalid month {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("Invalid day {year}-{month}-{day}")]
    InvalidDay { year: i32, month: u32, day: u32 },

    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Unknown timezone '{0}'")]
    UnknownTimezone(String),
}
