//! Defines the `Month` value type used to key forecasts and lay out calendars.

use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;
use std::fmt::{Display, Formatter};

/// A calendar month of a specific year.
///
/// A `Month` is always valid: the month number is in `1..=12` and the first and last
/// day of the month are representable as a [`NaiveDate`].
///
/// # Examples
///
/// ```
/// use stargazing::Month;
///
/// let feb = Month::new(2024, 2).unwrap();
/// assert_eq!(feb.days_in_month(), 29);
/// assert_eq!(feb.to_string(), "2024-02");
/// assert_eq!(feb.next(), Some(Month::new(2024, 3).unwrap()));
/// assert!(Month::new(2024, 13).is_none());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Creates a `Month`, returning `None` if `month` is not in `1..=12` or the
    /// year is outside the range chrono can represent.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let candidate = Self { year, month };
        candidate.first_day()?;
        candidate.last_day()?;
        Some(candidate)
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn last_day(self) -> Option<NaiveDate> {
        match self.month {
            12 => NaiveDate::from_ymd_opt(self.year, 12, 31),
            m => NaiveDate::from_ymd_opt(self.year, m + 1, 1)?.pred_opt(),
        }
    }

    /// Number of calendar days in this month.
    pub fn days_in_month(self) -> u32 {
        // `new` already proved the month is representable.
        self.last_day().map_or(0, |d| d.day())
    }

    /// Returns the date of `day` in this month, if that day exists.
    pub fn day(self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// Weekday of the 1st, used to offset the first row of a calendar grid.
    pub fn first_weekday(self) -> Option<Weekday> {
        self.first_day().map(|d| d.weekday())
    }

    pub fn next(self) -> Option<Self> {
        if self.month == 12 {
            Self::new(self.year.checked_add(1)?, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    pub fn previous(self) -> Option<Self> {
        if self.month == 1 {
            Self::new(self.year.checked_sub(1)?, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    /// Session cache key in the form `"{year}-{month}"` (month not zero padded).
    pub fn cache_key(self) -> String {
        format!("{}-{}", self.year, self.month)
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
