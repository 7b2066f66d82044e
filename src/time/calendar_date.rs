//! # Calendar Date Value Object
//!
//! Provides [`CalendarDate`], an immutable year/month/day triple in the
//! proleptic Gregorian calendar with no time-of-day component.
//!
//! A `CalendarDate` can only be obtained through checked factories, so a
//! live instance always denotes a real date:
//! - [`CalendarDate::parse`] / [`str::parse`]: from the `YYYY-MM-DD` form
//! - [`CalendarDate::from_datetime`]: from a `chrono` instant, read in the local calendar
//! - [`CalendarDate::from_naive_date`]: from a `chrono` [`NaiveDate`]
//! - [`CalendarDate::from_ymd`]: from a raw triple
//! - [`CalendarDate::today`]: from the current host instant
//!
//! Arithmetic returns new instances; nothing mutates in place.
//!
//! # Example
//! ```
//! use wzs_time::time::calendar_date::CalendarDate;
//!
//! let date: CalendarDate = "2025-06-14".parse().unwrap();
//! assert_eq!(date.add_days(1).unwrap().to_string(), "2025-06-15");
//! assert_eq!(date.subtract_days(5).unwrap().to_string(), "2025-06-09");
//! assert!(date.is_before(&date.add_days(1).unwrap()));
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Days, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::date::DateError;

/// Strict `YYYY-MM-DD`: four digits, dash, two digits, dash, two digits.
static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("calendar date pattern must compile")
});

/// An immutable, always-valid calendar date.
///
/// Fields are private. Equality is structural and ordering is
/// chronological (year, then month, then day), which is exactly the
/// derived order of the field layout below.
///
/// Serializes as its canonical `YYYY-MM-DD` string and deserializes through
/// the same validation as [`CalendarDate::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    fn new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        if !Self::is_valid_date(year, month, day) {
            return Err(DateError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Parses a strict `YYYY-MM-DD` string.
    ///
    /// # Errors
    /// - [`DateError::InvalidFormat`] if the input does not match the pattern
    ///   (e.g. `"2025-6-5"`, `"2025/06/05"`, `"invalid-string"`).
    /// - [`DateError::InvalidDate`] if it matches but is not a real date
    ///   (e.g. `"2025-02-30"`, `"2025-13-01"`, `"2025-00-10"`).
    ///
    /// # Example
    /// ```
    /// use wzs_time::time::calendar_date::CalendarDate;
    /// use wzs_time::error::date::DateError;
    ///
    /// let date = CalendarDate::parse("2024-02-29").unwrap();
    /// assert_eq!((date.year(), date.month(), date.day()), (2024, 2, 29));
    ///
    /// assert!(matches!(
    ///     CalendarDate::parse("2025-02-29"),
    ///     Err(DateError::InvalidDate { .. })
    /// ));
    /// ```
    pub fn parse(input: &str) -> Result<Self, DateError> {
        if !DATE_PATTERN.is_match(input) {
            debug!(input, "rejected calendar date with invalid format");
            return Err(DateError::InvalidFormat {
                input: input.to_owned(),
            });
        }

        let invalid_format = |_| DateError::InvalidFormat {
            input: input.to_owned(),
        };
        let year = input[0..4].parse::<i32>().map_err(invalid_format)?;
        let month = input[5..7].parse::<u32>().map_err(invalid_format)?;
        let day = input[8..10].parse::<u32>().map_err(invalid_format)?;

        Self::new(year, month, day).inspect_err(|_| {
            debug!(input, "rejected calendar date that does not exist");
        })
    }

    /// Builds a date from a raw triple, rejecting anything that is not a real date.
    ///
    /// # Errors
    /// [`DateError::InvalidDate`] when [`CalendarDate::is_valid_date`] is `false`.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        Self::new(year, month, day)
    }

    /// Builds a date from an instant, read in the host's local calendar.
    ///
    /// Instants in other zones are first converted to [`Local`], so the
    /// result is the local date at that instant.
    ///
    /// # Example
    /// ```
    /// use chrono::{Local, TimeZone};
    /// use wzs_time::time::calendar_date::CalendarDate;
    ///
    /// let noon = Local.with_ymd_and_hms(2025, 6, 14, 12, 0, 0).unwrap();
    /// assert_eq!(CalendarDate::from_datetime(&noon).to_string(), "2025-06-14");
    /// ```
    pub fn from_datetime<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self::from_naive_date(instant.with_timezone(&Local).date_naive())
    }

    /// Builds a date from a `chrono` [`NaiveDate`]. Always succeeds.
    pub fn from_naive_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }

    /// Returns the current local date, read from the host clock.
    ///
    /// Prefer [`Clock::today`](crate::time::clock::Clock::today) in code
    /// that needs to be testable.
    pub fn today() -> Self {
        Self::from_datetime(&Local::now())
    }

    /// Returns whether `(year, month, day)` denotes a real calendar date.
    ///
    /// The triple is handed to `chrono`, and the normalized components are
    /// read back and compared with the input. Any rejection or mismatch
    /// (month 0 or 13, day 0, February 29 outside leap years, ...) means
    /// the date is invalid.
    ///
    /// # Example
    /// ```
    /// use wzs_time::time::calendar_date::CalendarDate;
    ///
    /// assert!(CalendarDate::is_valid_date(2024, 2, 29));
    /// assert!(!CalendarDate::is_valid_date(2025, 2, 29));
    /// assert!(!CalendarDate::is_valid_date(2025, 13, 1));
    /// assert!(!CalendarDate::is_valid_date(2025, 0, 1));
    /// ```
    pub fn is_valid_date(year: i32, month: u32, day: u32) -> bool {
        NaiveDate::from_ymd_opt(year, month, day)
            .is_some_and(|d| d.year() == year && d.month() == month && d.day() == day)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 1-based month (January is `1`).
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Structural equality; same as `==`.
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    /// Converts to a `chrono` [`NaiveDate`].
    pub fn to_naive_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .expect("CalendarDate always holds a valid date")
    }

    /// Returns local midnight of this date as a wall-clock value.
    pub fn to_datetime(&self) -> NaiveDateTime {
        self.to_naive_date().and_time(NaiveTime::MIN)
    }

    /// Returns the date `days` days later, rolling over months and years.
    ///
    /// # Errors
    /// - [`DateError::InvalidArgument`] if `days` is negative.
    /// - [`DateError::OutOfRange`] if the result is not representable.
    pub fn add_days(&self, days: i64) -> Result<Self, DateError> {
        let days = Self::day_count(days)?;
        self.to_naive_date()
            .checked_add_days(days)
            .map(Self::from_naive_date)
            .ok_or(DateError::OutOfRange)
    }

    /// Returns the date `days` days earlier, rolling over months and years.
    ///
    /// # Errors
    /// - [`DateError::InvalidArgument`] if `days` is negative.
    /// - [`DateError::OutOfRange`] if the result is not representable.
    pub fn subtract_days(&self, days: i64) -> Result<Self, DateError> {
        let days = Self::day_count(days)?;
        self.to_naive_date()
            .checked_sub_days(days)
            .map(Self::from_naive_date)
            .ok_or(DateError::OutOfRange)
    }

    fn day_count(days: i64) -> Result<Days, DateError> {
        u64::try_from(days)
            .map(Days::new)
            .map_err(|_| DateError::InvalidArgument { days })
    }

    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }

    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    pub fn is_same_or_before(&self, other: &Self) -> bool {
        self.is_before(other) || self.equals(other)
    }

    pub fn is_same_or_after(&self, other: &Self) -> bool {
        self.is_after(other) || self.equals(other)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = DateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_naive_date(date)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.to_naive_date()
    }
}
