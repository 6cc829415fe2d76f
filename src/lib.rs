mod error;
mod forecast;
mod scoring;
mod stargazing;
mod types;

#[cfg(test)]
mod test_support;

pub use error::StargazingError;
pub use stargazing::*;

pub use forecast::error::ForecastFetchError;
pub use forecast::open_meteo::{OpenMeteo, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use forecast::provider::{Clock, FetchWindow, ForecastProvider, DEFAULT_HORIZON_DAYS};
pub use forecast::response::{DailySeries, ForecastRequest, ForecastResponse, HourlySeries};
pub use forecast::source::ForecastSource;

pub use scoring::scorer::{cloud_term, moon_term, score, score_day};

pub use types::calendar::{CalendarDay, DayOutlook, MonthCalendar};
pub use types::day_score::{DayScore, ScoreBreakdown, ScoreTier};
pub use types::month::Month;
pub use types::month_forecast::{DailyEntry, DayForecast, MonthForecast, OBSERVING_HOUR};
pub use types::moon_phase::{moon_phase_display_name, MoonCategory, MoonPhase};
pub use types::site::{LatLon, Site};
pub use types::weather_code::WeatherCode;
