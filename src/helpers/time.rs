use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::utils::constants::MIN_REFRESH_DELAY_MS;

/// Interval before the next refresh grant: `ratio_percent`% of `expires_in`.
/// Never shorter than `MIN_REFRESH_DELAY_MS`.
pub fn refresh_delay(expires_in_seconds: u64, ratio_percent: u64) -> Duration {
    let millis = expires_in_seconds
        .saturating_mul(1000)
        .saturating_mul(ratio_percent)
        / 100;
    Duration::from_millis(millis.max(MIN_REFRESH_DELAY_MS))
}

/// Wall-clock moment `delay` from now, for logs.
pub fn at_after(delay: Duration) -> DateTime<Utc> {
    let delay = chrono::Duration::from_std(delay).unwrap_or(chrono::Duration::zero());
    Utc::now() + delay
}
