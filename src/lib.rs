//! # wzs_time
//!
//! Date and clock foundation shared by internal and future public projects.
//!
//! This crate provides:
//! - An always-valid calendar date value object (`time::calendar_date`)
//! - A swappable clock port with system and fixed implementations (`time::clock`)
//! - Environment-driven clock selection for the composition root (`config::clock`)
//! - Re-exports of the crates that appear in its public API (`chrono`, `anyhow`, etc.)
//!
//! ## Example usage (in another crate)
//!
//! ```rust
//! use wzs_time::time::{CalendarDate, Clock, FixedClock};
//!
//! let clock = FixedClock::at_date(CalendarDate::parse("2025-06-14").unwrap());
//! let due = clock.today().add_days(30).unwrap();
//! assert_eq!(due.to_string(), "2025-07-14");
//! ```

// ===============================
// Re-exports of external crates
// ===============================

pub use anyhow;
pub use chrono;
pub use dotenvy;
pub use serde;

// ===============================
// Public modules
// ===============================
pub mod config;
pub mod error;
pub mod time;
