//! `MonthForecast`: the cached result of resolving one calendar month.

use crate::forecast::error::ForecastFetchError;
use crate::forecast::response::ForecastResponse;
use crate::types::month::Month;
use crate::types::weather_code::WeatherCode;
use chrono::NaiveDate;

pub const HOURS_PER_DAY: usize = 24;
/// Local hour sampled as the prime observing time.
pub const OBSERVING_HOUR: usize = 21;

/// Daily fields for one forecast date.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyEntry {
    pub date: NaiveDate,
    pub weather_code: Option<WeatherCode>,
    pub moon_phase: Option<String>,
}

/// Forecast data for one calendar month.
///
/// `daily_series[i]` and the hourly block `hourly_cloud_cover[i * 24..i * 24 + 24]`
/// describe the same date. Dates of the month missing from `daily_series` have no
/// forecast; look them up with [`MonthForecast::day`], never by position.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthForecast {
    pub month: Month,
    /// Full calendar length of the month, regardless of how much was fetched.
    pub days_in_month: u32,
    pub daily_series: Vec<DailyEntry>,
    /// Cloud cover percentages (0-100), 24 per entry of `daily_series`.
    pub hourly_cloud_cover: Vec<Option<u8>>,
}

/// A borrowed view of one date's forecast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayForecast<'a> {
    pub entry: &'a DailyEntry,
    pub cloud_cover: &'a [Option<u8>],
}

impl DayForecast<'_> {
    pub fn date(&self) -> NaiveDate {
        self.entry.date
    }

    pub fn cloud_cover_at(&self, hour: usize) -> Option<u8> {
        self.cloud_cover.get(hour).copied().flatten()
    }
}

impl MonthForecast {
    /// A month with no forecast data at all, e.g. entirely beyond the horizon.
    pub fn empty(month: Month) -> Self {
        Self {
            month,
            days_in_month: month.days_in_month(),
            daily_series: Vec::new(),
            hourly_cloud_cover: Vec::new(),
        }
    }

    /// Builds a month forecast from an API payload, checking that the daily and
    /// hourly series line up date by date.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastFetchError::MalformedResponse`] if the daily arrays differ in
    /// length, the hourly series is not exactly 24 entries per date, an hourly block
    /// is stamped with a different date than its daily entry, or a cloud cover value
    /// is not an integer percentage in `0..=100`.
    pub fn from_response(
        month: Month,
        response: ForecastResponse,
    ) -> Result<Self, ForecastFetchError> {
        let ForecastResponse { daily, hourly } = response;
        let days = daily.time.len();

        if daily.weathercode.len() != days || daily.moon_phase.len() != days {
            return Err(ForecastFetchError::MalformedResponse(format!(
                "daily series lengths differ: {} dates, {} weather codes, {} moon phases",
                days,
                daily.weathercode.len(),
                daily.moon_phase.len()
            )));
        }
        if hourly.cloudcover.len() != days * HOURS_PER_DAY {
            return Err(ForecastFetchError::MalformedResponse(format!(
                "expected {} hourly cloud cover values for {} dates, got {}",
                days * HOURS_PER_DAY,
                days,
                hourly.cloudcover.len()
            )));
        }
        // Timestamps are optional, but when present each block must start on its date.
        if !hourly.time.is_empty() {
            for (i, date) in daily.time.iter().enumerate() {
                let stamp = hourly.time.get(i * HOURS_PER_DAY).map(String::as_str);
                let expected = date.format("%Y-%m-%d").to_string();
                if stamp.map(|s| s.starts_with(&expected)) != Some(true) {
                    return Err(ForecastFetchError::MalformedResponse(format!(
                        "hourly block {} starts at {:?}, expected {}",
                        i, stamp, expected
                    )));
                }
            }
        }

        let daily_series = daily
            .time
            .into_iter()
            .zip(daily.weathercode)
            .zip(daily.moon_phase)
            .map(|((date, code), moon_phase)| DailyEntry {
                date,
                weather_code: code.map(WeatherCode),
                moon_phase,
            })
            .collect();
        let hourly_cloud_cover = hourly
            .cloudcover
            .into_iter()
            .enumerate()
            .map(|(i, value)| value.map(|v| cloud_cover_percent(i, v)).transpose())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            month,
            days_in_month: month.days_in_month(),
            daily_series,
            hourly_cloud_cover,
        })
    }

    /// True when no date of the month has forecast data.
    pub fn is_empty(&self) -> bool {
        self.daily_series.is_empty()
    }

    /// Looks up the forecast for `date` by its date label.
    pub fn day(&self, date: NaiveDate) -> Option<DayForecast<'_>> {
        let index = self.daily_series.iter().position(|e| e.date == date)?;
        let start = index * HOURS_PER_DAY;
        let cloud_cover = self.hourly_cloud_cover.get(start..start + HOURS_PER_DAY)?;
        Some(DayForecast {
            entry: &self.daily_series[index],
            cloud_cover,
        })
    }

    /// Forecast for day-of-month `day` (1-based).
    pub fn day_of_month(&self, day: u32) -> Option<DayForecast<'_>> {
        self.day(self.month.day(day)?)
    }

    /// Dates of this month that have a forecast entry, in order.
    pub fn forecast_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.daily_series.iter().map(|e| e.date)
    }
}

/// Cloud cover arrives as whole percentages; anything else would skew the cloud term.
fn cloud_cover_percent(index: usize, value: f64) -> Result<u8, ForecastFetchError> {
    if value.fract() != 0.0 || !(0.0..=100.0).contains(&value) {
        return Err(ForecastFetchError::MalformedResponse(format!(
            "hourly cloud cover {} at index {} is not a whole percentage",
            value, index
        )));
    }
    Ok(value as u8)
}
