use crate::forecast::error::ForecastFetchError;
use crate::forecast::response::ForecastRequest;
use crate::forecast::source::ForecastSource;
use crate::types::month::Month;
use crate::types::month_forecast::MonthForecast;
use crate::types::site::Site;
use chrono::{Duration, NaiveDate};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OnceCell};

/// Days beyond today the forecast API serves (today + 15 = 16 forecast days).
pub const DEFAULT_HORIZON_DAYS: u32 = 15;

/// Decides what "today" is for the forecast horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    /// The current date in the site's timezone.
    #[default]
    System,
    /// A pinned date, for reproducible runs.
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(self, site: &Site) -> NaiveDate {
        match self {
            Clock::System => site.today(),
            Clock::Fixed(date) => date,
        }
    }
}

/// The inclusive date range to request for a month, or why nothing is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchWindow {
    /// Clamped to `[max(month start, today), min(month end, horizon end)]`.
    Range { start: NaiveDate, end: NaiveDate },
    /// The month starts after the horizon end.
    BeyondHorizon,
    /// The month ended before today.
    Past,
}

impl FetchWindow {
    pub fn for_month(month: Month, today: NaiveDate, horizon_days: u32) -> Option<Self> {
        let month_start = month.first_day()?;
        let month_end = month.last_day()?;
        let horizon_end = today.checked_add_signed(Duration::days(i64::from(horizon_days)))?;

        if month_start > horizon_end {
            return Some(FetchWindow::BeyondHorizon);
        }
        if month_end < today {
            return Some(FetchWindow::Past);
        }
        Some(FetchWindow::Range {
            start: month_start.max(today),
            end: month_end.min(horizon_end),
        })
    }
}

type CacheSlot = Arc<OnceCell<Arc<MonthForecast>>>;

/// Resolves months to forecasts, fetching each month at most once per session.
///
/// Concurrent requests for a month that is still being fetched wait for that fetch
/// instead of issuing their own. A failed fetch leaves the month unresolved, so a
/// later request tries the network again.
pub struct ForecastProvider<S> {
    source: S,
    site: Site,
    horizon_days: u32,
    clock: Clock,
    cache: Mutex<HashMap<Month, CacheSlot>>,
}

impl<S: ForecastSource> ForecastProvider<S> {
    pub fn new(source: S, site: Site, horizon_days: u32, clock: Clock) -> Self {
        Self {
            source,
            site,
            horizon_days,
            clock,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn site(&self) -> &Site {
        &self.site
    }

    pub fn horizon_days(&self) -> u32 {
        self.horizon_days
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today(&self.site)
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the forecast for `month`, from the session cache when possible.
    ///
    /// # Errors
    ///
    /// Returns the [`ForecastFetchError`] of the network call. Nothing is cached in
    /// that case.
    pub async fn get_month_forecast(
        &self,
        month: Month,
    ) -> Result<Arc<MonthForecast>, ForecastFetchError> {
        // The map lock only guards slot lookup; it is released before any fetch.
        let slot = {
            let mut cache = self.cache.lock().await;
            cache.entry(month).or_default().clone()
        };

        if let Some(forecast) = slot.get() {
            info!("Cache hit for forecast {}", month.cache_key());
            return Ok(forecast.clone());
        }

        slot.get_or_try_init(|| self.resolve(month))
            .await
            .cloned()
    }

    /// Number of months resolved so far in this session.
    pub async fn cached_months(&self) -> usize {
        let cache = self.cache.lock().await;
        cache.values().filter(|slot| slot.initialized()).count()
    }

    async fn resolve(&self, month: Month) -> Result<Arc<MonthForecast>, ForecastFetchError> {
        let today = self.today();
        let window = FetchWindow::for_month(month, today, self.horizon_days)
            .ok_or(ForecastFetchError::DateOutOfRange { month, today })?;

        let (start, end) = match window {
            FetchWindow::BeyondHorizon => {
                warn!(
                    "{} is beyond the {}-day forecast horizon from {}; no forecast requested",
                    month, self.horizon_days, today
                );
                return Ok(Arc::new(MonthForecast::empty(month)));
            }
            FetchWindow::Past => {
                warn!("{} is before {}; no forecast requested", month, today);
                return Ok(Arc::new(MonthForecast::empty(month)));
            }
            FetchWindow::Range { start, end } => (start, end),
        };

        warn!(
            "Cache miss for forecast {}. Fetching {}..{}",
            month.cache_key(),
            start,
            end
        );
        debug!("Today is {} at {}", today, self.site.name);

        let request = ForecastRequest {
            location: self.site.location,
            timezone: self.site.timezone.name().to_string(),
            start_date: start,
            end_date: end,
        };
        let response = self.source.fetch(&request).await?;
        let forecast = MonthForecast::from_response(month, response)?;
        info!(
            "Cached forecast {} with {} of {} days",
            month.cache_key(),
            forecast.daily_series.len(),
            forecast.days_in_month
        );
        Ok(Arc::new(forecast))
    }
}
