use thiserror::Error;

/// Errors raised while constructing or shifting a
/// [`CalendarDate`](crate::time::calendar_date::CalendarDate).
///
/// Every variant is returned at the point of the offending call.
/// Construction never yields a partially valid or clamped date.
///
/// # Example
/// ```
/// use wzs_time::error::date::DateError;
///
/// let err = DateError::InvalidArgument { days: -1 };
/// assert_eq!(err.to_string(), "days must be a positive number, got -1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// The input does not match the `YYYY-MM-DD` pattern.
    #[error("Invalid date format: {input:?}")]
    InvalidFormat { input: String },

    /// The triple is well formed but is not a real calendar date.
    #[error("Invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// A negative day count was passed to an arithmetic shift.
    #[error("days must be a positive number, got {days}")]
    InvalidArgument { days: i64 },

    /// The shifted date falls outside the representable range.
    #[error("date arithmetic out of range")]
    OutOfRange,
}

impl DateError {
    /// Returns `true` for both format and date validation failures.
    ///
    /// Callers that only care whether a string was a usable date can use
    /// this instead of matching on the two variants.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. } | Self::InvalidDate { .. })
    }
}
