use super::*;
use chrono::{Duration, TimeZone};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn short_and_long_dates() {
    assert_eq!(short_date(day(2024, 2, 10)), "Feb 10");
    assert_eq!(long_date(day(2024, 2, 7)), "Feb 07, 2024");
}

#[test]
fn date_range_joins_short_and_long() {
    assert_eq!(date_range(day(2024, 2, 10), day(2024, 2, 17)), "Feb 10 - Feb 17, 2024");
}

#[test]
fn relative_date_buckets() {
    let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
    assert_eq!(relative_date(now - Duration::seconds(20), now), "just now");
    assert_eq!(relative_date(now - Duration::minutes(5), now), "5m ago");
    assert_eq!(relative_date(now - Duration::hours(3), now), "3h ago");
    assert_eq!(relative_date(now - Duration::days(2), now), "2d ago");
    assert_eq!(relative_date(now - Duration::days(30), now), "Feb 09, 2024");
}

#[test]
fn relative_date_in_future_is_just_now() {
    let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
    assert_eq!(relative_date(now + Duration::hours(1), now), "just now");
}

#[test]
fn avatar_fallback_encodes_spaces() {
    assert_eq!(
        avatar_fallback("Maria Rodriguez"),
        "https://api.dicebear.com/7.x/initials/svg?seed=Maria%20Rodriguez"
    );
}

#[test]
fn avatar_fallback_encodes_query_delimiters() {
    assert_eq!(
        avatar_fallback("Tom & Jerry #1"),
        "https://api.dicebear.com/7.x/initials/svg?seed=Tom%20%26%20Jerry%20%231"
    );
}

#[test]
fn take_with_overflow_counts_hidden() {
    let tags = ["a", "b", "c", "d", "e"];
    let (shown, hidden) = take_with_overflow(&tags, 3);
    assert_eq!(shown, ["a", "b", "c"]);
    assert_eq!(hidden, 2);

    let (shown, hidden) = take_with_overflow(&tags[..2], 3);
    assert_eq!(shown.len(), 2);
    assert_eq!(hidden, 0);
}
