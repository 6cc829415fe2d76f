//! The stargazing index: a pure mapping from one night's cloud cover, moon phase and
//! weather code to a 0-100 score.

use crate::types::day_score::{DayScore, ScoreBreakdown};
use crate::types::month_forecast::{DayForecast, OBSERVING_HOUR};
use crate::types::moon_phase::{moon_phase_display_name, MoonCategory};
use crate::types::weather_code::WeatherCode;

/// Points for cloud cover: `round((100 - cloud_cover) * 0.8)`, 0-80.
///
/// Values above 100 are treated as fully overcast.
pub fn cloud_term(cloud_cover: u8) -> u8 {
    let clear = u32::from(100 - cloud_cover.min(100));
    // (clear * 8 / 10) rounded half up, in integers.
    ((clear * 8 + 5) / 10) as u8
}

/// Points for the moon phase label, 0-20. Unrecognized labels score 0.
pub fn moon_term(moon_phase_label: &str) -> u8 {
    MoonCategory::classify(moon_phase_label).map_or(0, MoonCategory::score)
}

/// Scores one night.
///
/// # Examples
///
/// ```
/// use stargazing::{score, ScoreTier, WeatherCode};
///
/// let night = score(20, "new_moon", WeatherCode(0));
/// assert_eq!(night.total_score, 89);
/// assert_eq!(night.tier(), ScoreTier::Good);
/// ```
pub fn score(cloud_cover_at_21h: u8, moon_phase_label: &str, weather_code: WeatherCode) -> DayScore {
    let breakdown = ScoreBreakdown {
        cloud: cloud_term(cloud_cover_at_21h),
        moon: moon_term(moon_phase_label),
        weather: weather_code.bonus(),
    };
    DayScore {
        total_score: breakdown.raw_total().clamp(0, 100) as u8,
        cloud_cover_percent: cloud_cover_at_21h,
        moon_phase_display_name: moon_phase_display_name(moon_phase_label),
        weather_display_name: weather_code.display_name().to_string(),
        breakdown,
    }
}

/// Scores a day's forecast slice, or returns `None` when the 21:00 cloud cover,
/// the moon phase or the weather code is missing.
pub fn score_day(day: &DayForecast<'_>) -> Option<DayScore> {
    let cloud_cover = day.cloud_cover_at(OBSERVING_HOUR)?;
    let moon_phase = day.entry.moon_phase.as_deref()?;
    let weather_code = day.entry.weather_code?;
    Some(score(cloud_cover, moon_phase, weather_code))
}
