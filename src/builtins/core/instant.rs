//! An absolute point on the millisecond timeline.

use core::fmt;

use crate::{
    builtins::core::{DateTime, Duration},
    format::{DateTimePrinter, IsoFormat},
    timezone::TimeZone,
    utils, ChronoResult, Chronology,
};

/// Milliseconds since 1970-01-01T00:00Z, read in the ISO chronology in UTC.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    millis: i64,
}

impl Instant {
    pub const EPOCH: Self = Self::from_millis(0);

    #[inline]
    pub const fn from_millis(millis: i64) -> Self {
        Self { millis }
    }

    #[inline]
    pub const fn millis(&self) -> i64 {
        self.millis
    }

    pub fn plus(&self, duration: Duration) -> ChronoResult<Self> {
        utils::checked_add(self.millis, duration.millis()).map(Self::from_millis)
    }

    pub fn minus(&self, duration: Duration) -> ChronoResult<Self> {
        utils::checked_sub(self.millis, duration.millis()).map(Self::from_millis)
    }

    /// The duration from `self` to `other`.
    pub fn until(&self, other: Self) -> ChronoResult<Duration> {
        Duration::between(self.millis, other.millis)
    }

    /// Reads this instant in the ISO chronology of `zone`.
    pub fn in_zone(&self, zone: TimeZone) -> DateTime {
        DateTime::new(self.millis, Chronology::iso(zone))
    }

    /// Reads this instant in `chronology`.
    pub fn to_date_time(&self, chronology: Chronology) -> DateTime {
        DateTime::new(self.millis, chronology)
    }
}

impl From<i64> for Instant {
    fn from(millis: i64) -> Self {
        Self::from_millis(millis)
    }
}

impl From<&DateTime> for Instant {
    fn from(value: &DateTime) -> Self {
        Self::from_millis(value.millis())
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        IsoFormat.print_instant(f, self.millis, &Chronology::iso_utc())
    }
}
