//! # Clock Configuration
//!
//! Selects the [`Clock`] implementation an application should use, based on
//! environment variables. This is meant to be called once from the
//! **composition root** (e.g. `main.rs`), and the resulting
//! `Arc<dyn Clock>` shared with the rest of the application.
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `APP_ENV` | Current environment (`development`, `production`, etc.) | `"development"` |
//! | `CLOCK_FIXED_AT` | Freeze the clock: `YYYY-MM-DD` (local midnight) or an RFC 3339 instant | *none* |
//! | `CLOCK_ALLOW_FIXED` | Honour `CLOCK_FIXED_AT` even in production | `false` |
//!
//! # Example
//! ```rust
//! use wzs_time::config::clock::ClockConfig;
//! use wzs_time::time::clock::Clock;
//!
//! let cfg = ClockConfig::from_provider(|k| match k {
//!     "CLOCK_FIXED_AT" => Some("2025-06-14".into()),
//!     _ => None,
//! })
//! .unwrap();
//!
//! let clock = cfg.build();
//! assert_eq!(clock.today().to_string(), "2025-06-14");
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use tracing::{info, warn};

use crate::config::env::{load_dotenv, read_flag_from, read_var_from};
use crate::time::calendar_date::CalendarDate;
use crate::time::clock::Clock;
use crate::time::fixed_clock::{FixedClock, local_start_of_day};
use crate::time::system_clock::SystemClock;

pub const FIXED_AT_VAR: &str = "CLOCK_FIXED_AT";
pub const ALLOW_FIXED_VAR: &str = "CLOCK_ALLOW_FIXED";

/// Which clock the application runs on.
///
/// `fixed_at: None` means the live system clock.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClockConfig {
    pub fixed_at: Option<DateTime<Local>>,
}

impl ClockConfig {
    /// Loads the clock configuration from the process environment.
    ///
    /// A dotenv file is loaded first for non-production environments
    /// (see [`load_dotenv`]).
    ///
    /// # Errors
    /// Returns an error when `CLOCK_FIXED_AT` is set, honoured, and cannot
    /// be parsed.
    pub fn from_env() -> Result<Self> {
        load_dotenv();
        Self::from_provider(|k| std::env::var(k).ok())
    }

    /// Loads the clock configuration using a custom provider function.
    ///
    /// Useful for testing or for layering other configuration sources.
    pub fn from_provider<F>(provider: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some(raw) = read_var_from(&provider, FIXED_AT_VAR) else {
            return Ok(Self::default());
        };

        let app_env = read_var_from(&provider, "APP_ENV").unwrap_or_else(|| "development".into());
        if app_env == "production" && !read_flag_from(&provider, ALLOW_FIXED_VAR, false) {
            warn!(
                value = %raw,
                "{FIXED_AT_VAR} ignored in production; set {ALLOW_FIXED_VAR} to honour it"
            );
            return Ok(Self::default());
        }

        let fixed_at =
            parse_instant(&raw).with_context(|| format!("Invalid {FIXED_AT_VAR} value: {raw:?}"))?;
        info!(%fixed_at, "using fixed clock");

        Ok(Self {
            fixed_at: Some(fixed_at),
        })
    }

    /// Returns `true` if the configured clock is frozen.
    pub fn is_fixed(&self) -> bool {
        self.fixed_at.is_some()
    }

    /// Builds the configured clock.
    pub fn build(&self) -> Arc<dyn Clock> {
        match self.fixed_at {
            Some(instant) => Arc::new(FixedClock::new(instant)),
            None => Arc::new(SystemClock::new()),
        }
    }
}

/// `YYYY-MM-DD` maps to local midnight; anything longer must be RFC 3339.
fn parse_instant(raw: &str) -> Result<DateTime<Local>> {
    if raw.len() <= 10 {
        let date = CalendarDate::parse(raw)?;
        return Ok(local_start_of_day(date));
    }

    let instant = DateTime::parse_from_rfc3339(raw)?;
    Ok(instant.with_timezone(&Local))
}
