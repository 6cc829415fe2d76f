//! Per-day results handed to a calendar view.

use crate::types::day_score::{DayScore, ScoreTier};
use crate::types::month::Month;
use chrono::{NaiveDate, Weekday};
use serde::Serialize;

/// What the view shows for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DayOutlook {
    Scored(DayScore),
    /// No forecast exists for this date, or one of its inputs is missing.
    Unavailable,
}

impl DayOutlook {
    pub fn score(&self) -> Option<&DayScore> {
        match self {
            DayOutlook::Scored(score) => Some(score),
            DayOutlook::Unavailable => None,
        }
    }

    pub fn tier(&self) -> Option<ScoreTier> {
        self.score().map(DayScore::tier)
    }

    pub fn is_available(&self) -> bool {
        matches!(self, DayOutlook::Scored(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    /// Day of month, starting at 1.
    pub day: u32,
    pub date: NaiveDate,
    pub outlook: DayOutlook,
}

/// Every day of a month with its outlook, in date order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthCalendar {
    #[serde(serialize_with = "serialize_month")]
    pub month: Month,
    /// Weekday of the 1st; a Sunday-first grid leaves
    /// `first_weekday.num_days_from_sunday()` blank cells before it.
    #[serde(serialize_with = "serialize_weekday")]
    pub first_weekday: Weekday,
    pub days: Vec<CalendarDay>,
}

impl MonthCalendar {
    pub fn day(&self, day: u32) -> Option<&CalendarDay> {
        self.days.iter().find(|d| d.day == day)
    }

    pub fn scored_days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.days.iter().filter(|d| d.outlook.is_available())
    }

    /// The highest scoring day, earliest first on ties.
    pub fn best_day(&self) -> Option<&CalendarDay> {
        self.scored_days().fold(None, |best: Option<&CalendarDay>, day| {
            let score = day.outlook.score().map(|s| s.total_score);
            match best {
                Some(b) if b.outlook.score().map(|s| s.total_score) >= score => Some(b),
                _ => Some(day),
            }
        })
    }
}

fn serialize_month<S: serde::Serializer>(month: &Month, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(month)
}

fn serialize_weekday<S: serde::Serializer>(
    weekday: &Weekday,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(weekday)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::scorer::score;
    use crate::types::weather_code::WeatherCode;

    fn october(outlooks: Vec<DayOutlook>) -> MonthCalendar {
        let month = Month::new(2025, 10).unwrap();
        MonthCalendar {
            month,
            first_weekday: month.first_weekday().unwrap(),
            days: outlooks
                .into_iter()
                .zip(1..)
                .map(|(outlook, day)| CalendarDay {
                    day,
                    date: month.day(day).unwrap(),
                    outlook,
                })
                .collect(),
        }
    }

    fn scored(cloud: u8) -> DayOutlook {
        DayOutlook::Scored(score(cloud, "new_moon", WeatherCode(0)))
    }

    #[test]
    fn test_best_day_prefers_the_earliest_on_ties() {
        let calendar = october(vec![
            DayOutlook::Unavailable,
            scored(50),
            scored(20),
            scored(60),
            scored(20),
        ]);
        let best = calendar.best_day().unwrap();
        assert_eq!(best.day, 3);
        assert_eq!(best.outlook.score().map(|s| s.total_score), Some(89));
    }

    #[test]
    fn test_best_day_skips_unavailable_days() {
        let calendar = october(vec![DayOutlook::Unavailable, scored(100)]);
        assert_eq!(calendar.best_day().map(|d| d.day), Some(2));

        let empty = october(vec![DayOutlook::Unavailable; 3]);
        assert!(empty.best_day().is_none());
        assert_eq!(empty.scored_days().count(), 0);
    }

    #[test]
    fn test_day_lookup_and_tiers() {
        let calendar = october(vec![scored(20), DayOutlook::Unavailable]);
        assert_eq!(calendar.day(1).and_then(|d| d.outlook.tier()), Some(ScoreTier::Good));
        assert_eq!(calendar.day(2).and_then(|d| d.outlook.tier()), None);
        assert!(calendar.day(3).is_none());
    }

    #[test]
    fn test_serializes_month_and_first_weekday_as_strings() {
        let calendar = october(vec![scored(20), DayOutlook::Unavailable]);
        let json = serde_json::to_value(&calendar).unwrap();

        assert_eq!(json["month"], "2025-10");
        assert_eq!(json["first_weekday"], "Wed");
        assert_eq!(json["days"][0]["date"], "2025-10-01");
        assert_eq!(json["days"][0]["outlook"]["status"], "scored");
        assert_eq!(json["days"][0]["outlook"]["total_score"], 89);
        assert_eq!(json["days"][1]["outlook"], serde_json::json!({"status": "unavailable"}));
    }
}
