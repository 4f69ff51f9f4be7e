//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Date format used for parsing and rendering birthdays.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A contact's birthday, stored as a validated calendar date.
///
/// Constructed from a `YYYY-MM-DD` string; anything that does not parse as a
/// real calendar date is rejected. Renders back to the same `YYYY-MM-DD`
/// form.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("1990-05-20").unwrap();
/// assert_eq!(birthday.to_string(), "1990-05-20");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday from a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the string is not in
    /// `YYYY-MM-DD` format or does not name a real calendar date.
    pub fn new(date: impl AsRef<str>) -> Result<Self, ValidationError> {
        let date = date.as_ref();
        NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(date.to_string()))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Number of days from `today` until the next occurrence of this
    /// birthday's month and day.
    ///
    /// The occurrence in `today`'s year is used if it has not passed yet
    /// (returning 0 on the birthday itself); otherwise the occurrence in the
    /// following year. A Feb 29 birthday clamps to Feb 28 in non-leap target
    /// years.
    pub fn days_until_next(&self, today: NaiveDate) -> i64 {
        let mut next = self.occurrence_in(today.year());
        if next < today {
            next = self.occurrence_in(today.year() + 1);
        }
        (next - today).num_days()
    }

    /// The occurrence of this birthday's month/day in the given year,
    /// clamping Feb 29 to Feb 28 when the year is not a leap year.
    fn occurrence_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day()).unwrap_or_else(|| {
            // Only Feb 29 can fail here; Feb 28 exists in every year.
            NaiveDate::from_ymd_opt(year, 2, 28).expect("Feb 28 is a valid date")
        })
    }
}

// Serde support - serialize as a YYYY-MM-DD string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
