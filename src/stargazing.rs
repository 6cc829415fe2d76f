//! This module provides the main entry point: a session-scoped client that resolves
//! months to forecasts and turns them into per-day stargazing scores.

use crate::error::StargazingError;
use crate::forecast::open_meteo::OpenMeteo;
use crate::forecast::provider::{Clock, ForecastProvider, DEFAULT_HORIZON_DAYS};
use crate::forecast::source::ForecastSource;
use crate::scoring::scorer::score_day;
use crate::types::calendar::{CalendarDay, DayOutlook, MonthCalendar};
use crate::types::month::Month;
use crate::types::month_forecast::MonthForecast;
use crate::types::site::Site;
use bon::bon;
use std::sync::Arc;

/// Stargazing forecasts for one site.
///
/// A `Stargazing` owns its forecast cache: create one per session and share it by
/// reference (or `Arc`) with whatever renders the calendar. Each month is fetched at
/// most once for the lifetime of the client; scores are recomputed on every call.
///
/// # Examples
///
/// ```no_run
/// use stargazing::{Stargazing, StargazingError};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), StargazingError> {
/// let client = Stargazing::new()?;
/// let calendar = client.month_calendar(2025, 10).await?;
/// for day in &calendar.days {
///     match day.outlook.score() {
///         Some(score) => println!("{:>2}: {:>3} ({})", day.day, score.total_score, score.tier()),
///         None => println!("{:>2}:   -", day.day),
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct Stargazing<S = OpenMeteo> {
    provider: ForecastProvider<S>,
}

impl Stargazing<OpenMeteo> {
    /// Creates a client for the default site backed by Open-Meteo.
    ///
    /// # Errors
    ///
    /// Returns [`StargazingError::ClientBuild`] if the HTTP client cannot be created.
    pub fn new() -> Result<Self, StargazingError> {
        Self::for_site(Site::default())
    }

    /// Creates a client for `site` backed by Open-Meteo.
    pub fn for_site(site: Site) -> Result<Self, StargazingError> {
        Ok(Self::with_source(OpenMeteo::builder().build()?)
            .site(site)
            .call())
    }
}

#[bon]
impl<S: ForecastSource> Stargazing<S> {
    /// Creates a client over any [`ForecastSource`].
    ///
    /// Optional settings:
    /// *   `.site(Site)`: observing site (default: [`Site::default`]).
    /// *   `.horizon_days(u32)`: days beyond today the source can forecast
    ///     (default: [`DEFAULT_HORIZON_DAYS`]).
    /// *   `.clock(Clock)`: what "today" is (default: [`Clock::System`]).
    ///
    /// Finish with `.call()`.
    ///
    /// ```no_run
    /// use stargazing::{Clock, OpenMeteo, Stargazing};
    /// use chrono::NaiveDate;
    ///
    /// # fn main() -> Result<(), stargazing::StargazingError> {
    /// let client = Stargazing::with_source(OpenMeteo::builder().build()?)
    ///     .horizon_days(14)
    ///     .clock(Clock::Fixed(NaiveDate::from_ymd_opt(2025, 10, 18).unwrap()))
    ///     .call();
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = with_source)]
    #[doc(hidden)]
    pub fn build_with_source(
        #[builder(start_fn)] source: S,
        site: Option<Site>,
        horizon_days: Option<u32>,
        clock: Option<Clock>,
    ) -> Self {
        Self {
            provider: ForecastProvider::new(
                source,
                site.unwrap_or_default(),
                horizon_days.unwrap_or(DEFAULT_HORIZON_DAYS),
                clock.unwrap_or_default(),
            ),
        }
    }

    pub fn provider(&self) -> &ForecastProvider<S> {
        &self.provider
    }

    pub fn site(&self) -> &Site {
        self.provider.site()
    }

    /// Resolves a month's forecast, possibly partial or empty.
    ///
    /// # Errors
    ///
    /// Returns [`StargazingError::InvalidMonth`] for a month outside `1..=12`, and
    /// [`StargazingError::Forecast`] if the forecast could not be fetched.
    pub async fn month_forecast(
        &self,
        year: i32,
        month: u32,
    ) -> Result<Arc<MonthForecast>, StargazingError> {
        let month = Month::new(year, month).ok_or(StargazingError::InvalidMonth { year, month })?;
        Ok(self.provider.get_month_forecast(month).await?)
    }

    /// Scores every day of a month. Days without a forecast are
    /// [`DayOutlook::Unavailable`].
    pub async fn month_calendar(
        &self,
        year: i32,
        month: u32,
    ) -> Result<MonthCalendar, StargazingError> {
        let forecast = self.month_forecast(year, month).await?;
        let invalid = StargazingError::InvalidMonth { year, month };
        let first_weekday = forecast.month.first_weekday().ok_or(invalid)?;

        let days = (1..=forecast.days_in_month)
            .filter_map(|day| {
                let date = forecast.month.day(day)?;
                Some(CalendarDay {
                    day,
                    date,
                    outlook: outlook_for(&forecast, date),
                })
            })
            .collect();

        Ok(MonthCalendar {
            month: forecast.month,
            first_weekday,
            days,
        })
    }

    /// The outlook for a single day, as shown in a detail view.
    ///
    /// # Errors
    ///
    /// Returns [`StargazingError::InvalidDay`] if the date does not exist.
    pub async fn day_outlook(
        &self,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<DayOutlook, StargazingError> {
        let forecast = self.month_forecast(year, month).await?;
        let date = forecast
            .month
            .day(day)
            .ok_or(StargazingError::InvalidDay { year, month, day })?;
        Ok(outlook_for(&forecast, date))
    }
}

fn outlook_for(forecast: &MonthForecast, date: chrono::NaiveDate) -> DayOutlook {
    forecast
        .day(date)
        .as_ref()
        .and_then(score_day)
        .map_or(DayOutlook::Unavailable, DayOutlook::Scored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::error::ForecastFetchError;
    use crate::test_support::{date, FakeSource, Night};
    use crate::types::day_score::ScoreTier;
    use chrono::Weekday;

    fn client(source: FakeSource) -> Stargazing<FakeSource> {
        Stargazing::with_source(source)
            .clock(Clock::Fixed(date(2025, 10, 18)))
            .call()
    }

    #[tokio::test]
    async fn test_month_calendar_marks_days_before_today_unavailable() {
        let calendar = client(FakeSource::new())
            .month_calendar(2025, 10)
            .await
            .unwrap();

        assert_eq!(calendar.days.len(), 31);
        assert_eq!(calendar.first_weekday, Weekday::Wed);
        for day in &calendar.days {
            assert_eq!(day.outlook.is_available(), day.day >= 18, "day {}", day.day);
        }
        // Default fake night: 50% cloud (40), first quarter (10), partly cloudy (0).
        assert_eq!(
            calendar.day(18).and_then(|d| d.outlook.score()).map(|s| s.total_score),
            Some(50)
        );
    }

    #[tokio::test]
    async fn test_scores_follow_their_own_dates() {
        let source = FakeSource::new();
        source.set_night(
            date(2025, 10, 20),
            Night {
                cloud_at_21: Some(20.0),
                moon_phase: Some("new_moon".to_string()),
                weather_code: Some(0),
            },
        );
        source.set_night(
            date(2025, 10, 21),
            Night {
                cloud_at_21: Some(90.0),
                moon_phase: Some("full_moon".to_string()),
                weather_code: Some(61),
            },
        );
        let client = client(source);

        let good = client.day_outlook(2025, 10, 20).await.unwrap();
        let good = good.score().unwrap();
        assert_eq!(good.total_score, 89);
        assert_eq!(good.tier(), ScoreTier::Good);
        assert_eq!(good.cloud_cover_percent, 20);

        let bad = client.day_outlook(2025, 10, 21).await.unwrap();
        assert_eq!(bad.score().map(|s| s.total_score), Some(0));
        assert_eq!(bad.tier(), Some(ScoreTier::Bad));

        let calendar = client.month_calendar(2025, 10).await.unwrap();
        assert_eq!(calendar.best_day().map(|d| d.day), Some(20));
        assert_eq!(client.provider().source().calls(), 1);
    }

    #[tokio::test]
    async fn test_straddling_month_reports_days_past_horizon_as_unavailable() {
        let client = client(FakeSource::new());
        let calendar = client.month_calendar(2025, 11).await.unwrap();

        assert_eq!(calendar.days.len(), 30);
        let available: Vec<u32> = calendar.scored_days().map(|d| d.day).collect();
        assert_eq!(available, vec![1, 2]);
        assert_eq!(calendar.day(3).unwrap().outlook, DayOutlook::Unavailable);
    }

    #[tokio::test]
    async fn test_far_future_month_is_all_unavailable_without_fetch() {
        let client = client(FakeSource::new());
        let calendar = client.month_calendar(2026, 3).await.unwrap();

        assert_eq!(calendar.days.len(), 31);
        assert_eq!(calendar.scored_days().count(), 0);
        assert_eq!(client.provider().source().calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_inputs_are_unavailable_not_zero() {
        let source = FakeSource::new();
        source.set_night(
            date(2025, 10, 25),
            Night {
                cloud_at_21: None,
                ..Night::default()
            },
        );
        let outlook = client(source).day_outlook(2025, 10, 25).await.unwrap();
        assert_eq!(outlook, DayOutlook::Unavailable);
    }

    #[tokio::test]
    async fn test_invalid_month_and_day() {
        let client = client(FakeSource::new());
        assert!(matches!(
            client.month_calendar(2025, 13).await,
            Err(StargazingError::InvalidMonth { year: 2025, month: 13 })
        ));
        assert!(matches!(
            client.day_outlook(2025, 11, 31).await,
            Err(StargazingError::InvalidDay { day: 31, .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_failure_surfaces_and_is_retried() {
        let source = FakeSource::new();
        source.fail_next("internal error");
        let client = client(source);

        match client.month_calendar(2025, 10).await {
            Err(StargazingError::Forecast(ForecastFetchError::Api { reason })) => {
                assert_eq!(reason, "internal error");
            }
            other => panic!("expected forecast error, got {:?}", other.map(|c| c.month)),
        }
        assert!(client.month_calendar(2025, 10).await.is_ok());
        assert_eq!(client.provider().source().calls(), 2);
    }

    #[tokio::test]
    async fn test_calendar_serializes_for_a_view() {
        let calendar = client(FakeSource::new())
            .month_calendar(2025, 10)
            .await
            .unwrap();
        let json = serde_json::to_value(&calendar).unwrap();
        assert_eq!(json["month"], "2025-10");
        assert_eq!(json["days"][0]["outlook"]["status"], "unavailable");
        assert_eq!(json["days"][17]["outlook"]["status"], "scored");
        assert_eq!(json["days"][17]["outlook"]["total_score"], 50);
    }
}
