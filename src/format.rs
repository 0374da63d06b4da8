//! Display Formatting
//!
//! Notification timestamps and the unread badge.

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};

/// Server timestamps look like `2024-05-01 10:00:00` (UTC, SQLite
/// `CURRENT_TIMESTAMP`); RFC 3339 is accepted too.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

pub fn relative_time(elapsed: TimeDelta) -> String {
    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }
    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{}h ago", hours);
    }
    format!("{}d ago", hours / 24)
}

/// Relative time of `raw` seen from `now`; unparseable input is shown as-is
pub fn relative_since(raw: &str, now: DateTime<Utc>) -> String {
    match parse_timestamp(raw) {
        Some(at) => relative_time(now - at),
        None => raw.to_string(),
    }
}

/// Unread badge text; `None` hides the badge
pub fn badge_text(unread: u32) -> Option<String> {
    match unread {
        0 => None,
        n if n > 99 => Some("99+".to_string()),
        n => Some(n.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        parse_timestamp("2024-05-10 12:00:00").unwrap()
    }

    fn ago(delta: TimeDelta) -> String {
        let at = (now() - delta).format("%Y-%m-%d %H:%M:%S").to_string();
        relative_since(&at, now())
    }

    #[test]
    fn test_relative_time_buckets() {
        assert_eq!(ago(TimeDelta::seconds(30)), "Just now");
        assert_eq!(ago(TimeDelta::minutes(1)), "1m ago");
        assert_eq!(ago(TimeDelta::minutes(59)), "59m ago");
        assert_eq!(ago(TimeDelta::minutes(90)), "1h ago");
        assert_eq!(ago(TimeDelta::hours(23) + TimeDelta::minutes(59)), "23h ago");
        assert_eq!(ago(TimeDelta::hours(24)), "1d ago");
        assert_eq!(ago(TimeDelta::hours(50)), "2d ago");
    }

    #[test]
    fn test_future_timestamp_is_just_now() {
        assert_eq!(relative_time(TimeDelta::minutes(-5)), "Just now");
    }

    #[test]
    fn test_unparseable_timestamp_passes_through() {
        assert_eq!(relative_since("yesterday", now()), "yesterday");
    }

    #[test]
    fn test_rfc3339_accepted() {
        assert_eq!(relative_since("2024-05-10T10:00:00Z", now()), "2h ago");
    }

    #[test]
    fn test_label_advances_with_clock() {
        let at = "2024-05-10 12:00:00";
        assert_eq!(relative_since(at, now()), "Just now");
        assert_eq!(relative_since(at, now() + TimeDelta::seconds(30)), "Just now");
        assert_eq!(relative_since(at, now() + TimeDelta::minutes(2)), "2m ago");
    }

    #[test]
    fn test_badge_text() {
        assert_eq!(badge_text(0), None);
        assert_eq!(badge_text(5).as_deref(), Some("5"));
        assert_eq!(badge_text(99).as_deref(), Some("99"));
        assert_eq!(badge_text(150).as_deref(), Some("99+"));
    }
}
