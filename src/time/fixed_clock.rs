use chrono::{DateTime, Duration, Local, TimeZone};

use crate::time::calendar_date::CalendarDate;
use crate::time::clock::Clock;

/// A [`Clock`] that always returns the instant it was built with.
///
/// Intended for tests and for environments that need a reproducible
/// "today". The instant is never mutated, so every call to
/// [`Clock::now`] and [`Clock::today`] yields the same value for the
/// clock's whole lifetime.
///
/// # Example
/// ```
/// use chrono::{Local, TimeZone};
/// use wzs_time::time::clock::Clock;
/// use wzs_time::time::fixed_clock::FixedClock;
///
/// let instant = Local.with_ymd_and_hms(2025, 6, 14, 8, 0, 0).unwrap();
/// let clock = FixedClock::new(instant);
///
/// assert_eq!(clock.now(), instant);
/// assert_eq!(clock.today().to_string(), "2025-06-14");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Local>,
}

impl FixedClock {
    /// Creates a clock frozen at `instant`.
    ///
    /// Instants in any zone are accepted and stored in local time.
    pub fn new<Tz: TimeZone>(instant: DateTime<Tz>) -> Self {
        Self {
            instant: instant.with_timezone(&Local),
        }
    }

    /// Creates a clock frozen at local midnight of `date`.
    ///
    /// When midnight does not exist locally (a DST gap), the first valid
    /// instant of that day is used instead, so `today()` still returns `date`.
    pub fn at_date(date: CalendarDate) -> Self {
        Self::new(local_start_of_day(date))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.instant
    }
}

/// First existing local instant on `date`.
pub(crate) fn local_start_of_day(date: CalendarDate) -> DateTime<Local> {
    let midnight = date.to_datetime();
    // DST gaps are at most a few hours and start on quarter-hour boundaries.
    (0..96)
        .map(|quarter| midnight + Duration::minutes(15 * quarter))
        .find_map(|wall| Local.from_local_datetime(&wall).earliest())
        .unwrap_or_else(|| Local.from_utc_datetime(&midnight))
}
