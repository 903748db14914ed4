//! Display formatting for dates, counts and avatar fallbacks.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDate, Utc};

/// `Feb 10`
#[must_use]
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %d").to_string()
}

/// `Feb 17, 2024`
#[must_use]
pub fn long_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// `Feb 10 - Feb 17, 2024`
#[must_use]
pub fn date_range(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} - {}", short_date(start), long_date(end))
}

/// Age of `then` relative to `now`, e.g. `5m ago`, falling back to a date
/// after a week.
#[must_use]
pub fn relative_date(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now - then;
    if elapsed.num_minutes() < 1 {
        "just now".to_owned()
    } else if elapsed.num_hours() < 1 {
        format!("{}m ago", elapsed.num_minutes())
    } else if elapsed.num_days() < 1 {
        format!("{}h ago", elapsed.num_hours())
    } else if elapsed.num_days() < 7 {
        format!("{}d ago", elapsed.num_days())
    } else {
        long_date(then.date_naive())
    }
}

/// Generated initials avatar for travelers without an image.
#[must_use]
pub fn avatar_fallback(name: &str) -> String {
    format!("https://api.dicebear.com/7.x/initials/svg?seed={}", urlencoding::encode(name))
}

/// Up to `limit` leading items plus how many were left out.
#[must_use]
pub fn take_with_overflow<T>(items: &[T], limit: usize) -> (&[T], usize) {
    let shown = items.len().min(limit);
    (&items[..shown], items.len() - shown)
}
