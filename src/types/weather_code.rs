//! Defines `WeatherCode`, the WMO weather interpretation code reported in the
//! `daily.weathercode` series.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A WMO weather interpretation code.
///
/// Codes are kept as reported, including ones without a display name, because the
/// scoring bonus depends only on numeric ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherCode(pub i32);

impl WeatherCode {
    pub const UNKNOWN_NAME: &'static str = "Unknown";

    /// Human readable name for the codes the calendar knows about.
    ///
    /// # Examples
    ///
    /// ```
    /// use stargazing::WeatherCode;
    ///
    /// assert_eq!(WeatherCode(0).display_name(), "Clear sky");
    /// assert_eq!(WeatherCode(63).display_name(), "Rain");
    /// assert_eq!(WeatherCode(99).display_name(), "Unknown");
    /// ```
    pub fn display_name(self) -> &'static str {
        match self.0 {
            0 => "Clear sky",
            1 => "Mainly clear",
            2 => "Partly cloudy",
            3 => "Overcast",
            45 => "Fog",
            48 => "Rime fog",
            51 | 53 | 55 => "Drizzle",
            61 | 63 | 65 => "Rain",
            71 | 73 | 75 => "Snow",
            80..=82 => "Rain showers",
            95 => "Thunderstorm",
            _ => Self::UNKNOWN_NAME,
        }
    }

    /// Clear or mainly clear.
    pub fn is_clear(self) -> bool {
        matches!(self.0, 0 | 1)
    }

    /// Drizzle and everything wetter (code 51 upward).
    pub fn is_precipitation(self) -> bool {
        self.0 >= 51
    }

    /// Score adjustment: +5 when clear, -10 for precipitation, otherwise 0.
    pub fn bonus(self) -> i8 {
        if self.is_clear() {
            5
        } else if self.is_precipitation() {
            -10
        } else {
            0
        }
    }
}

impl fmt::Display for WeatherCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
