//! Defines `DayScore`, the per-night stargazing index, and its display tier.

use serde::Serialize;
use std::fmt;

/// The three terms that add up to a raw score, before clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    /// 0-80, from cloud cover at 21:00.
    pub cloud: u8,
    /// 0-20, from the moon phase.
    pub moon: u8,
    /// +5, 0 or -10, from the weather code.
    pub weather: i8,
}

impl ScoreBreakdown {
    pub fn raw_total(self) -> i32 {
        i32::from(self.cloud) + i32::from(self.moon) + i32::from(self.weather)
    }
}

/// Stargazing index for one night.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayScore {
    /// 0-100 inclusive.
    pub total_score: u8,
    pub cloud_cover_percent: u8,
    pub moon_phase_display_name: String,
    pub weather_display_name: String,
    pub breakdown: ScoreBreakdown,
}

impl DayScore {
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.total_score)
    }
}

/// Classification of a total score used for cell styling and the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    /// 80 and above.
    Good,
    /// 50 to 79.
    Normal,
    /// Below 50.
    Bad,
}

impl ScoreTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => ScoreTier::Good,
            50..=79 => ScoreTier::Normal,
            _ => ScoreTier::Bad,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScoreTier::Good => "good",
            ScoreTier::Normal => "normal",
            ScoreTier::Bad => "bad",
        }
    }
}

impl fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
