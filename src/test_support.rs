//! In-memory forecast source for tests.

use crate::forecast::error::ForecastFetchError;
use crate::forecast::response::{
    DailySeries, ForecastRequest, ForecastResponse, HourlySeries,
};
use crate::forecast::source::ForecastSource;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// The inputs the fake reports for one date.
#[derive(Debug, Clone)]
pub(crate) struct Night {
    pub cloud_at_21: Option<f64>,
    pub moon_phase: Option<String>,
    pub weather_code: Option<i32>,
}

impl Default for Night {
    fn default() -> Self {
        Self {
            cloud_at_21: Some(50.0),
            moon_phase: Some("first_quarter".to_string()),
            weather_code: Some(2),
        }
    }
}

/// Answers every request with a well-formed forecast for the requested range and
/// counts how often it was called.
#[derive(Default)]
pub(crate) struct FakeSource {
    calls: AtomicUsize,
    requests: Mutex<Vec<ForecastRequest>>,
    failures: Mutex<Vec<String>>,
    nights: Mutex<HashMap<NaiveDate, Night>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next call fail with an application error.
    pub fn fail_next(&self, reason: &str) {
        self.failures.lock().unwrap().push(reason.to_string());
    }

    pub fn set_night(&self, date: NaiveDate, night: Night) {
        self.nights.lock().unwrap().insert(date, night);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<ForecastRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn respond(&self, request: &ForecastRequest) -> Result<ForecastResponse, ForecastFetchError> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(reason) = self.failures.lock().unwrap().pop() {
            return Err(ForecastFetchError::Api { reason });
        }

        let nights = self.nights.lock().unwrap();
        let mut response = ForecastResponse {
            daily: DailySeries::default(),
            hourly: HourlySeries::default(),
        };
        for date in request.start_date.iter_days().take_while(|d| *d <= request.end_date) {
            let night = nights.get(&date).cloned().unwrap_or_default();
            response.daily.time.push(date);
            response.daily.weathercode.push(night.weather_code);
            response.daily.moon_phase.push(night.moon_phase);
            for hour in 0..24 {
                response.hourly.time.push(format!("{}T{:02}:00", date, hour));
                response.hourly.cloudcover.push(if hour == 21 {
                    night.cloud_at_21
                } else {
                    Some(100.0)
                });
            }
        }
        Ok(response)
    }
}

impl ForecastSource for FakeSource {
    async fn fetch(
        &self,
        request: &ForecastRequest,
    ) -> Result<ForecastResponse, ForecastFetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        // Give concurrent callers a chance to pile up on the same month.
        tokio::task::yield_now().await;
        self.respond(request)
    }
}
