//! Timestamp value generator.

use crate::config::DateRange;
use chrono::{DateTime, Utc};
use rand::Rng;

/// Generate a random second-resolution timestamp in the given range (inclusive).
///
/// Only whole seconds inside the window are drawn: a fractional `start` is
/// rounded up. A window holding no whole second yields `start`.
pub fn generate_timestamp_range<R: Rng>(rng: &mut R, range: DateRange) -> DateTime<Utc> {
    let start_ts = if range.start.timestamp_subsec_nanos() > 0 {
        range.start.timestamp() + 1
    } else {
        range.start.timestamp()
    };
    let end_ts = range.end.timestamp();

    if start_ts > end_ts {
        return range.start;
    }

    let random_ts = rng.random_range(start_ts..=end_ts);
    DateTime::from_timestamp(random_ts, 0).unwrap_or(range.start)
}
