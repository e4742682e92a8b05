//! Calendar dates and closed date ranges.

use super::DoneLogDomainError;
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Strict `YYYY-MM-DD` format used for parsing and display.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar date on which a done-log activity happened.
///
/// Holds no time-of-day; two values are equal exactly when their dates are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OccurredOn(NaiveDate);

impl OccurredOn {
    /// Parses a strict `YYYY-MM-DD` date.
    ///
    /// Single-digit months or days, other separators, and trailing content
    /// are all rejected.
    ///
    /// # Errors
    ///
    /// Returns [`DoneLogDomainError::InvalidDateFormat`] when the value is not
    /// a real date in `YYYY-MM-DD` form.
    pub fn parse(value: &str) -> Result<Self, DoneLogDomainError> {
        if !has_strict_date_shape(value) {
            return Err(DoneLogDomainError::InvalidDateFormat(value.to_owned()));
        }
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|_| DoneLogDomainError::InvalidDateFormat(value.to_owned()))
    }

    /// Truncates a timestamp to its calendar date in the timestamp's own zone.
    #[must_use]
    pub fn from_timestamp<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> Self {
        Self(timestamp.date_naive())
    }

    /// Returns the current UTC date according to `clock`.
    #[must_use]
    pub fn today(clock: &impl Clock) -> Self {
        Self::from_timestamp(&clock.utc())
    }

    /// Wraps an already-valid calendar date.
    #[must_use]
    pub const fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the calendar date.
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }

    /// Returns midnight UTC at the start of the date.
    #[must_use]
    pub fn start_of_day_utc(self) -> DateTime<Utc> {
        self.0.and_time(NaiveTime::MIN).and_utc()
    }
}

/// Returns `true` for exactly four digits, dash, two digits, dash, two digits.
fn has_strict_date_shape(value: &str) -> bool {
    value.len() == 10
        && value.char_indices().all(|(index, c)| match index {
            4 | 7 => c == '-',
            _ => c.is_ascii_digit(),
        })
}

impl TryFrom<String> for OccurredOn {
    type Error = DoneLogDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<OccurredOn> for String {
    fn from(date: OccurredOn) -> Self {
        date.to_string()
    }
}

impl fmt::Display for OccurredOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// Closed interval of dates, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    start: OccurredOn,
    end: OccurredOn,
}

impl Period {
    /// Creates a period from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns [`DoneLogDomainError::InvalidPeriod`] when `end` is before
    /// `start`.
    pub fn new(start: OccurredOn, end: OccurredOn) -> Result<Self, DoneLogDomainError> {
        if end < start {
            return Err(DoneLogDomainError::InvalidPeriod {
                start: start.date(),
                end: end.date(),
            });
        }
        Ok(Self { start, end })
    }

    /// Returns the first date of the period.
    #[must_use]
    pub const fn start(&self) -> OccurredOn {
        self.start
    }

    /// Returns the last date of the period.
    #[must_use]
    pub const fn end(&self) -> OccurredOn {
        self.end
    }

    /// Returns `true` when `date` lies within the period, bounds included.
    #[must_use]
    pub fn contains(&self, date: OccurredOn) -> bool {
        self.start <= date && date <= self.end
    }
}
