use chrono::{DateTime, Local};

use crate::time::calendar_date::CalendarDate;

/// A port that provides the **current instant** and **current date** for the application.
///
/// # Purpose
/// This trait abstracts access to "now" so that:
///
/// - Application and domain logic do **not** read the system time directly
/// - Implementations can be swapped (system clock, fixed clock, mock, etc.)
/// - Tests can be deterministic and time-independent
///
/// # Design Notes
/// - Instants are read in the host's local calendar.
/// - This trait represents an **external capability**, similar to a Repository or Mailer.
/// - Only [`Clock::now`] is required; [`Clock::today`] is derived from it.
///
/// # Typical Implementations
/// - [`SystemClock`](crate::time::system_clock::SystemClock): reads the OS clock on every call
/// - [`FixedClock`](crate::time::fixed_clock::FixedClock): returns a constant instant (for testing)
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Local>;

    /// Returns today's date as a [`CalendarDate`], derived from [`Clock::now`].
    fn today(&self) -> CalendarDate {
        CalendarDate::from_datetime(&self.now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicI64, Ordering};

    use chrono::{Duration, TimeZone};

    /// Test implementation of `Clock` that advances one hour per call.
    struct SteppingClock {
        start: DateTime<Local>,
        calls: AtomicI64,
    }

    impl SteppingClock {
        fn new(start: DateTime<Local>) -> Self {
            Self {
                start,
                calls: AtomicI64::new(0),
            }
        }
    }

    impl Clock for SteppingClock {
        fn now(&self) -> DateTime<Local> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            self.start + Duration::hours(n)
        }
    }

    #[test]
    fn today_is_derived_from_now() {
        let start = Local.with_ymd_and_hms(2025, 6, 14, 22, 30, 0).unwrap();
        let clock = SteppingClock::new(start);

        assert_eq!(clock.today().to_string(), "2025-06-14");
        assert_eq!(clock.today().to_string(), "2025-06-14");
        // Third read lands past midnight.
        assert_eq!(clock.today().to_string(), "2025-06-15");
    }

    #[test]
    fn clock_trait_object_works() {
        let start = Local.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
        let clock: Arc<dyn Clock> = Arc::new(SteppingClock::new(start));

        assert_eq!(clock.now(), start);
        assert_eq!(clock.today(), CalendarDate::from_ymd(2024, 1, 15).unwrap());
    }
}
