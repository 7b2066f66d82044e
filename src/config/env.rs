//! # Environment Variable Utilities
//!
//! Provides helpers for reading environment variables used by configuration
//! loaders such as [`ClockConfig`](crate::config::clock::ClockConfig).
//!
//! Every reader has a `*_from` variant that takes a provider closure, so
//! tests can supply values without touching the process environment.
//!
//! # Examples
//! ```rust,no_run
//! use wzs_time::config::env::{read_flag, read_var};
//!
//! let fixed_at = read_var("CLOCK_FIXED_AT");
//! let allow = read_flag("CLOCK_ALLOW_FIXED", false);
//! ```

use std::env;

/// Loads a dotenv file for non-production environments.
///
/// ## Behavior
/// - Reads `APP_ENV` (defaults to `"development"`).
/// - Does nothing when `APP_ENV` is `"production"`.
/// - Otherwise loads `DOTENV_FILE` if set, else `.env.{APP_ENV}`, else `.env`.
///
/// Missing files are not an error; variables already set in the process
/// environment are never overridden.
pub fn load_dotenv() {
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
    if app_env == "production" {
        return;
    }

    if let Ok(path) = env::var("DOTENV_FILE") {
        let _ = dotenvy::from_filename(path);
    } else {
        let candidate = format!(".env.{}", app_env);
        dotenvy::from_filename(&candidate)
            .or_else(|_| dotenvy::dotenv())
            .ok();
    }
}

/// Reads a string variable from the process environment.
///
/// See [`read_var_from`] for the normalization applied.
pub fn read_var(name: &str) -> Option<String> {
    read_var_from(|k| env::var(k).ok(), name)
}

/// Reads a string variable using a custom provider function.
///
/// Surrounding whitespace and one layer of `"` / `'` quotes are stripped.
/// Values that are empty after trimming are treated as unset.
///
/// # Example
/// ```rust
/// use wzs_time::config::env::read_var_from;
///
/// assert_eq!(
///     read_var_from(|_| Some(" '2025-06-14' ".into()), "CLOCK_FIXED_AT"),
///     Some("2025-06-14".to_string())
/// );
/// assert_eq!(read_var_from(|_| Some("  ".into()), "CLOCK_FIXED_AT"), None);
/// ```
pub fn read_var_from<F>(provider: F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    provider(name)
        .map(|v| v.trim().trim_matches(|c| c == '"' || c == '\'').trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Reads a boolean flag from an environment variable.
///
/// Returns `true` for any of the following case-insensitive values:
/// `"1"`, `"true"`, `"yes"`, `"on"`.
pub fn read_flag(name: &str, default: bool) -> bool {
    read_flag_from(|k| env::var(k).ok(), name, default)
}

/// Reads a boolean flag using a custom provider function.
///
/// # Example
/// ```rust
/// use wzs_time::config::env::read_flag_from;
///
/// let val = read_flag_from(|_| Some("true".into()), "CLOCK_ALLOW_FIXED", false);
/// assert!(val);
/// ```
pub fn read_flag_from<F>(provider: F, name: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match provider(name) {
        Some(_) => read_var_from(provider, name).is_some_and(|s| {
            matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_var_trims_and_strips_quotes() {
        assert_eq!(
            read_var_from(|_| Some("  \"abc\"  ".into()), "X"),
            Some("abc".to_string())
        );
        assert_eq!(read_var_from(|_| Some("'x y'".into()), "X"), Some("x y".to_string()));
    }

    #[test]
    fn test_read_var_empty_is_unset() {
        assert_eq!(read_var_from(|_| Some("".into()), "X"), None);
        assert_eq!(read_var_from(|_| Some("\"\"".into()), "X"), None);
        assert_eq!(read_var_from(|_| None, "X"), None);
    }

    #[test]
    fn test_read_var_passes_requested_name() {
        let got = read_var_from(|k| (k == "WANTED").then(|| "yes".to_string()), "WANTED");
        assert_eq!(got.as_deref(), Some("yes"));

        let got = read_var_from(|k| (k == "WANTED").then(|| "yes".to_string()), "OTHER");
        assert_eq!(got, None);
    }

    #[test]
    fn test_read_flag_true_variants() {
        for val in ["1", "true", "TRUE", "yes", "YES", "on", "On"] {
            let got = read_flag_from(|_| Some(val.into()), "X", false);
            assert!(got, "Expected {val:?} to be truthy");
        }
    }

    #[test]
    fn test_read_flag_false_variants() {
        for val in ["0", "false", "no", "off", "xyz", ""] {
            let got = read_flag_from(|_| Some(val.into()), "X", true);
            assert!(!got, "Expected {val:?} to be falsy");
        }
    }

    #[test]
    fn test_read_flag_default_when_missing() {
        assert!(read_flag_from(|_| None, "X", true));
        assert!(!read_flag_from(|_| None, "X", false));
    }

    #[test]
    fn test_read_flag_strips_quotes() {
        assert!(read_flag_from(|_| Some("\"true\"".into()), "X", false));
        assert!(read_flag_from(|_| Some("'yes'".into()), "X", false));
    }

    #[test]
    fn test_read_var_from_process_env() {
        temp_env::with_var("WZS_TIME_TEST_VAR", Some(" value "), || {
            assert_eq!(read_var("WZS_TIME_TEST_VAR").as_deref(), Some("value"));
        });
        temp_env::with_var("WZS_TIME_TEST_VAR", None::<&str>, || {
            assert_eq!(read_var("WZS_TIME_TEST_VAR"), None);
        });
    }
}
