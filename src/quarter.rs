//! Billing granularity of Tempo worklogs.
//!
//! Every logged duration is a whole number of quarter hours and at least one
//! quarter hour long. [`QuarterHours`] can only be built from an elapsed time
//! through [`QuarterHours::from_elapsed`], so holding one means the rounding
//! already happened.

use chrono::Duration;
use std::fmt;

const QUARTER_SECS: i64 = 15 * 60;
const QUARTER_MILLIS: i64 = QUARTER_SECS * 1000;

/// A duration that is a positive multiple of 15 minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct QuarterHours(u32);

impl QuarterHours {
    /// Normalizes an elapsed time for billing.
    ///
    /// Anything below 15 minutes, including a negative elapsed time after a
    /// clock jump, is raised to 15 minutes. The result is then rounded to the
    /// nearest quarter hour, a remainder of exactly 7m30s rounds up.
    pub fn from_elapsed(elapsed: Duration) -> Self {
        let millis = elapsed.num_milliseconds().max(QUARTER_MILLIS);
        let rem = millis % QUARTER_MILLIS;
        let quarters = if rem * 2 < QUARTER_MILLIS {
            millis / QUARTER_MILLIS
        } else {
            millis / QUARTER_MILLIS + 1
        };
        log::trace!(
            "Rounded {}ms to {} quarter hours",
            elapsed.num_milliseconds(),
            quarters
        );
        Self(u32::try_from(quarters).unwrap_or(u32::MAX))
    }

    pub fn seconds(&self) -> i64 {
        i64::from(self.0) * QUARTER_SECS
    }

    pub fn as_duration(&self) -> Duration {
        Duration::seconds(self.seconds())
    }
}

impl fmt::Display for QuarterHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let std = std::time::Duration::from_secs(self.seconds() as u64);
        write!(f, "{}", humantime::format_duration(std))
    }
}
