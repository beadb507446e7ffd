//! # Time Utilities
//!
//! Utilities for time formatting and manipulation using chrono.

use chrono::{DateTime, Duration, Utc};

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Format time as RFC3339 string.
pub fn format_time(time: DateTime<Utc>) -> String {
    time.to_rfc3339()
}

/// Instant `ttl_secs` seconds from now, formatted as RFC3339.
pub fn expires_after(ttl_secs: i64) -> String {
    format_time(now_utc() + Duration::seconds(ttl_secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires_after_is_in_the_future() {
        let before = now_utc();
        let formatted = expires_after(120);
        let parsed = DateTime::parse_from_rfc3339(&formatted)
            .expect("expires_after should produce RFC3339")
            .with_timezone(&Utc);

        assert!(parsed >= before + Duration::seconds(120));
        assert!(parsed <= now_utc() + Duration::seconds(121));
    }
}
