//! Injectable conversion-time clock.
//!
//! The warning emitted for a missing resource embeds the wall-clock date of
//! the conversion, which makes that one path time-dependent. The clock is
//! injected so tests can pin it and golden output stays byte-stable.

use chrono::{DateTime, Utc};

/// Source of "now" for the missing-resource warning timestamp.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The real wall clock, used by [`convert`](crate::convert).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to a fixed instant.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use enexml::{Clock, FixedClock};
///
/// let clock = FixedClock(Utc.with_ymd_and_hms(2013, 10, 23, 0, 0, 0).unwrap());
/// assert_eq!(clock.now().to_rfc3339(), "2013-10-23T00:00:00+00:00");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
