//! The observing site a forecast is requested for.

use crate::error::StargazingError;
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
///
/// # Examples
///
/// ```
/// use stargazing::LatLon;
///
/// let shiga_kogen = LatLon(36.70, 138.50);
/// assert_eq!(shiga_kogen.0, 36.70); // Latitude
/// assert_eq!(shiga_kogen.1, 138.50); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

/// A single configured observing site.
///
/// The timezone is the site's IANA zone. It is sent to the forecast API, so daily
/// entries and the 21:00 cloud-cover sample are in site-local time, and it decides
/// what "today" means for the forecast horizon.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    pub name: String,
    pub location: LatLon,
    pub timezone: Tz,
}

impl Site {
    /// Creates a site, resolving `timezone` as an IANA name such as `"Asia/Tokyo"`.
    ///
    /// # Errors
    ///
    /// Returns [`StargazingError::UnknownTimezone`] if the name is not in the tz database.
    pub fn new(
        name: impl Into<String>,
        location: LatLon,
        timezone: &str,
    ) -> Result<Self, StargazingError> {
        let timezone = timezone
            .parse::<Tz>()
            .map_err(|_| StargazingError::UnknownTimezone(timezone.to_string()))?;
        Ok(Self {
            name: name.into(),
            location,
            timezone,
        })
    }

    /// The current calendar date at the site.
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.timezone).date_naive()
    }
}

/// Shiga Kogen (Yamanouchi, Nagano).
impl Default for Site {
    fn default() -> Self {
        Self {
            name: "Shiga Kogen".to_string(),
            location: LatLon(36.70, 138.50),
            timezone: chrono_tz::Asia::Tokyo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_site() {
        let site = Site::default();
        assert_eq!(site.location, LatLon(36.70, 138.50));
        assert_eq!(site.timezone.name(), "Asia/Tokyo");
    }

    #[test]
    fn test_new_site_resolves_timezone() {
        let site = Site::new("Mauna Kea", LatLon(19.82, -155.47), "Pacific/Honolulu").unwrap();
        assert_eq!(site.timezone, chrono_tz::Pacific::Honolulu);
    }

    #[test]
    fn test_new_site_rejects_unknown_timezone() {
        let result = Site::new("Nowhere", LatLon(0.0, 0.0), "Mars/Olympus_Mons");
        assert!(matches!(
            result,
            Err(StargazingError::UnknownTimezone(name)) if name == "Mars/Olympus_Mons"
        ));
    }
}
