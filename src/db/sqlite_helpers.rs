//! SQLite helper utilities for type conversion
//!
//! SQLite stores booleans as 0/1 integers and timestamps as TEXT.
//! This module provides utilities to convert between Rust types and
//! SQLite-compatible formats.

use anyhow::{Result, anyhow};
use chrono::{DateTime, Utc};

// ============================================================================
// Timestamp Helpers (stored as ISO8601 TEXT in SQLite)
// ============================================================================

/// Parse an ISO8601 string to DateTime
#[inline]
pub fn str_to_datetime(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            // Try parsing SQLite's datetime() format: "YYYY-MM-DD HH:MM:SS"
            chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
                .map(|ndt| ndt.and_utc())
                .map_err(|e| anyhow!("Invalid datetime '{}': {}", s, e))
        })
}

// ============================================================================
// Boolean Helpers (SQLite uses 0/1 integers)
// ============================================================================

/// Convert bool to SQLite integer (0 or 1)
#[inline]
pub fn bool_to_int(b: bool) -> i32 {
    if b { 1 } else { 0 }
}

/// Convert SQLite integer to bool
#[inline]
pub fn int_to_bool(i: i32) -> bool {
    i != 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_datetime_roundtrip() {
        let dt = Utc::now();
        let s = dt.to_rfc3339();
        let parsed = str_to_datetime(&s).unwrap();
        assert_eq!(dt.timestamp(), parsed.timestamp());
    }

    #[test]
    fn test_sqlite_datetime_format() {
        let s = "2024-01-15 10:30:45";
        let parsed = str_to_datetime(s).unwrap();
        assert_eq!(parsed.year(), 2024);
        assert_eq!(parsed.month(), 1);
        assert_eq!(parsed.day(), 15);
    }

    #[test]
    fn test_bool_conversion() {
        assert_eq!(bool_to_int(true), 1);
        assert_eq!(bool_to_int(false), 0);
        assert!(int_to_bool(1));
        assert!(int_to_bool(42)); // Any non-zero is true
        assert!(!int_to_bool(0));
    }
}
