//! Batch retention.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use types::Event;

/// How long events stay eligible for scoring.
pub const MAX_AGE_HOURS: i64 = 48;

/// Drop events older than [`MAX_AGE_HOURS`] relative to `now`. Events with
/// missing or unparseable timestamps are kept rather than guessed stale.
pub fn trim_stale(events: Vec<Event>, now: DateTime<Utc>) -> Vec<Event> {
    let cutoff = now - Duration::hours(MAX_AGE_HOURS);
    events
        .into_iter()
        .filter(|ev| match ev.timestamp.as_deref().and_then(parse_lenient) {
            Some(ts) => ts >= cutoff,
            None => true,
        })
        .collect()
}

/// RFC 3339 first, then a bare naive datetime read as UTC.
fn parse_lenient(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    raw.parse::<NaiveDateTime>().ok().map(|naive| naive.and_utc())
}
