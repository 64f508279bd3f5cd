//! Recency scoring for posts.
//!
//! Four discrete tiers over elapsed hours are enough for ranking and keep
//! boundary behavior trivially testable. The reference time is always passed
//! in by the caller so identical inputs score identically across runs.

use chrono::{DateTime, Utc};

/// Map a post's age to a recency score
///
/// `< 24h → 1.0`, `< 48h → 0.8`, `< 72h → 0.6`, otherwise `0.4`.
pub fn freshness_score(date_posted: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let age_hours = (now - date_posted).num_seconds() as f64 / 3600.0;

    if age_hours < 24.0 {
        1.0
    } else if age_hours < 48.0 {
        0.8
    } else if age_hours < 72.0 {
        0.6
    } else {
        0.4
    }
}
