//! Derived metrics computed for each video.
//!
//! Every function here is total: divisions by zero, missing or non-numeric
//! counts, and unparseable timestamps resolve to `0.0` instead of an error.
//! Counts arrive from the provider as decimal strings; `None` stands for a
//! value that was present but not numeric.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Timestamp layout the provider uses for `publishedAt`.
pub const PUBLISHED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

const SECONDS_PER_DAY: i64 = 86_400;

/// Rounds to `places` decimal places using the shortest correctly rounded
/// decimal form of the value.
#[must_use]
pub fn round_to(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    format!("{value:.places$}").parse().unwrap_or(0.0)
}

/// Parses a provider count string. Absent counts are zero; non-numeric counts
/// yield `None`.
#[must_use]
pub fn parse_count(raw: Option<&str>) -> Option<u64> {
    match raw {
        None => Some(0),
        Some(text) => text.trim().parse().ok(),
    }
}

/// `(likes + comments) / views`, rounded to 4 places; `0.0` on a zero or
/// non-numeric input.
#[must_use]
pub fn engagement_rate(likes: Option<u64>, comments: Option<u64>, views: Option<u64>) -> f64 {
    match (likes, comments, views) {
        (Some(likes), Some(comments), Some(views)) if views > 0 => {
            round_to((likes as f64 + comments as f64) / views as f64, 4)
        }
        _ => 0.0,
    }
}

/// `views / max(whole days since publish, 1)`, rounded to 2 places.
///
/// Returns `0.0` when `published_at` does not match [`PUBLISHED_AT_FORMAT`]
/// or views are non-numeric.
#[must_use]
pub fn views_per_day(views: Option<u64>, published_at: &str, now: DateTime<Utc>) -> f64 {
    let Some(views) = views else {
        return 0.0;
    };
    let Ok(published) = NaiveDateTime::parse_from_str(published_at, PUBLISHED_AT_FORMAT) else {
        return 0.0;
    };

    let elapsed_seconds = (now - published.and_utc()).num_seconds();
    let days = match elapsed_seconds.div_euclid(SECONDS_PER_DAY) {
        0 => 1,
        days => days,
    };
    round_to(views as f64 / days as f64, 2)
}

/// Keeps the tags that start with `#`, in order, joined with `", "`.
#[must_use]
pub fn extract_hashtags<S: AsRef<str>>(tags: &[S]) -> String {
    tags.iter()
        .map(AsRef::as_ref)
        .filter(|tag| tag.starts_with('#'))
        .collect::<Vec<_>>()
        .join(", ")
}
