// src/domain/freshness.rs

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::errors::DomainError;

/// Length of the trailing window in which a shoe counts as "just released".
pub const FRESHNESS_WINDOW_DAYS: i64 = 30;

/// True when `release_date` falls inside `[now - 30 days, now]`.
///
/// Both ends are inclusive. A release date after `now` has not happened yet,
/// so it is never considered recent.
pub fn is_recent_release(release_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    let window_start = now - Duration::days(FRESHNESS_WINDOW_DAYS);
    window_start <= release_date && release_date <= now
}

/// Parse a release date from catalog data.
///
/// Accepts an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight UTC).
pub fn parse_release_date(raw: &str) -> Result<DateTime<Utc>, DomainError> {
    let raw = raw.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| DomainError::invalid(format!("unparseable release date {raw:?}")))
}
