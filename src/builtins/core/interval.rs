//! Half-open spans of the timeline.

use core::fmt;

use crate::{
    builtins::core::{DateTime, Duration, Period, PeriodType},
    convert::InstantSource,
    error::ErrorMessage,
    format::{DateTimePrinter, IsoFormat},
    utils, ChronoError, ChronoResult, Chronology,
};

/// The instants from `start` inclusive to `end` exclusive.
///
/// ```rust
/// use chronology_rs::Interval;
///
/// let morning = Interval::new(0, 10, None).unwrap();
/// let noon = Interval::new(10, 20, None).unwrap();
/// assert!(morning.abuts(&noon));
/// assert!(!morning.overlaps(&noon));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    start: i64,
    end: i64,
    chronology: Chronology,
}

impl Interval {
    /// Creates an interval, rejecting an end before the start.
    pub fn new(start: i64, end: i64, chronology: Option<&Chronology>) -> ChronoResult<Self> {
        if end < start {
            return Err(ChronoError::argument().with_enum(ErrorMessage::IntervalEndBeforeStart));
        }
        Ok(Self {
            start,
            end,
            chronology: chronology.cloned().unwrap_or_default(),
        })
    }

    /// Creates an interval between two instant sources. The chronology is
    /// taken from `start`, then `end`, then defaults to ISO in UTC.
    pub fn from_sources(start: impl InstantSource, end: impl InstantSource) -> ChronoResult<Self> {
        let chronology = start.chronology().or_else(|| end.chronology());
        Self::new(
            start.instant_millis()?,
            end.instant_millis()?,
            chronology.as_ref(),
        )
    }

    /// The interval of `duration` from `start`.
    pub fn from_start_duration(
        start: impl InstantSource,
        duration: Duration,
    ) -> ChronoResult<Self> {
        let chronology = start.chronology().unwrap_or_default();
        let start = start.instant_millis()?;
        let end = chronology.add_duration(start, duration.millis(), 1)?;
        Self::new(start, end, Some(&chronology))
    }

    /// The interval of `duration` ending at `end`.
    pub fn from_duration_end(duration: Duration, end: impl InstantSource) -> ChronoResult<Self> {
        let chronology = end.chronology().unwrap_or_default();
        let end = end.instant_millis()?;
        let start = chronology.add_duration(end, duration.millis(), -1)?;
        Self::new(start, end, Some(&chronology))
    }

    /// The interval of `period` from `start`, added in its chronology.
    pub fn from_start_period(start: impl InstantSource, period: &Period) -> ChronoResult<Self> {
        let chronology = start.chronology().unwrap_or_default();
        let start = start.instant_millis()?;
        let end = chronology.add_period(period, start, 1)?;
        Self::new(start, end, Some(&chronology))
    }

    /// The interval of `period` ending at `end`.
    pub fn from_period_end(period: &Period, end: impl InstantSource) -> ChronoResult<Self> {
        let chronology = end.chronology().unwrap_or_default();
        let end = end.instant_millis()?;
        let start = chronology.add_period(period, end, -1)?;
        Self::new(start, end, Some(&chronology))
    }

    // ==== Accessors ====

    #[inline]
    pub fn start_millis(&self) -> i64 {
        self.start
    }

    #[inline]
    pub fn end_millis(&self) -> i64 {
        self.end
    }

    pub fn chronology(&self) -> &Chronology {
        &self.chronology
    }

    pub fn start(&self) -> DateTime {
        DateTime::new(self.start, self.chronology.clone())
    }

    pub fn end(&self) -> DateTime {
        DateTime::new(self.end, self.chronology.clone())
    }

    // ==== Predicates ====

    /// Whether `instant` lies in `[start, end)`. An empty interval contains
    /// nothing.
    pub fn contains(&self, instant: i64) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Whether `other` lies entirely inside this interval. An empty interval
    /// is contained when its instant is.
    pub fn contains_interval(&self, other: &Self) -> bool {
        self.start <= other.start && other.start < self.end && other.end <= self.end
    }

    /// Whether the intervals share at least one instant.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether one interval ends exactly where the other starts.
    pub fn abuts(&self, other: &Self) -> bool {
        other.end == self.start || self.end == other.start
    }

    /// The interval between two that neither overlap nor abut.
    pub fn gap(&self, other: &Self) -> Option<Self> {
        let (start, end) = if self.start > other.end {
            (other.end, self.start)
        } else if other.start > self.end {
            (self.end, other.start)
        } else {
            return None;
        };
        Some(Self {
            start,
            end,
            chronology: self.chronology.clone(),
        })
    }

    /// The instants shared by two overlapping intervals.
    pub fn overlap(&self, other: &Self) -> Option<Self> {
        if !self.overlaps(other) {
            return None;
        }
        Some(Self {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
            chronology: self.chronology.clone(),
        })
    }

    /// Whether the interval ends at or before `instant`.
    pub fn is_before(&self, instant: i64) -> bool {
        self.end <= instant
    }

    /// Whether the interval starts after `instant`.
    pub fn is_after(&self, instant: i64) -> bool {
        self.start > instant
    }

    pub fn is_before_interval(&self, other: &Self) -> bool {
        self.end <= other.start
    }

    pub fn is_after_interval(&self, other: &Self) -> bool {
        self.start >= other.end
    }

    // ==== With ====

    pub fn with_start(&self, start: i64) -> ChronoResult<Self> {
        Self::new(start, self.end, Some(&self.chronology))
    }

    pub fn with_end(&self, end: i64) -> ChronoResult<Self> {
        Self::new(self.start, end, Some(&self.chronology))
    }

    pub fn with_chronology(&self, chronology: Chronology) -> Self {
        Self {
            chronology,
            ..self.clone()
        }
    }

    pub fn with_duration_after_start(&self, duration: Duration) -> ChronoResult<Self> {
        let end = self.chronology.add_duration(self.start, duration.millis(), 1)?;
        self.with_end(end)
    }

    pub fn with_duration_before_end(&self, duration: Duration) -> ChronoResult<Self> {
        let start = self.chronology.add_duration(self.end, duration.millis(), -1)?;
        self.with_start(start)
    }

    pub fn with_period_after_start(&self, period: &Period) -> ChronoResult<Self> {
        let end = self.chronology.add_period(period, self.start, 1)?;
        self.with_end(end)
    }

    pub fn with_period_before_end(&self, period: &Period) -> ChronoResult<Self> {
        let start = self.chronology.add_period(period, self.end, -1)?;
        self.with_start(start)
    }

    // ==== Conversions ====

    pub fn to_duration(&self) -> ChronoResult<Duration> {
        Duration::between(self.start, self.end)
    }

    /// The period covered by this interval, in its chronology.
    pub fn to_period(&self, period_type: Option<PeriodType>) -> ChronoResult<Period> {
        Period::between_millis(
            self.start,
            self.end,
            period_type.unwrap_or_default(),
            &self.chronology,
        )
    }

    /// The number of milliseconds covered.
    pub fn to_duration_millis(&self) -> ChronoResult<i64> {
        utils::checked_sub(self.end, self.start)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        IsoFormat.print_instant(f, self.start, &self.chronology)?;
        f.write_str("/")?;
        IsoFormat.print_instant(f, self.end, &self.chronology)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::core::Instant;
    use alloc::string::ToString;

    fn interval(start: i64, end: i64) -> Interval {
        Interval::new(start, end, None).unwrap()
    }

    #[test]
    fn construction() {
        assert!(Interval::new(5, 4, None).is_err());
        let empty = interval(5, 5);
        assert!(!empty.contains(5));
        let err = Interval::new(5, 4, None).unwrap_err();
        assert_eq!(err.message(), ErrorMessage::IntervalEndBeforeStart.to_str());
        let zoned = DateTime::new(0, Chronology::iso(crate::TimeZone::fixed(3_600_000).unwrap()));
        let from_sources = Interval::from_sources(Instant::from_millis(-10), &zoned).unwrap();
        assert_eq!(from_sources.chronology(), zoned.chronology());
    }

    #[test]
    fn half_open_predicates() {
        let a = interval(10, 20);
        assert!(a.contains(10));
        assert!(!a.contains(20));
        assert!(a.contains_interval(&interval(12, 20)));
        assert!(!a.contains_interval(&interval(20, 20)));
        assert!(a.overlaps(&interval(19, 30)));
        assert!(!a.overlaps(&interval(20, 30)));
        assert!(a.abuts(&interval(20, 30)));
        assert!(a.abuts(&interval(0, 10)));
        assert!(a.is_before(20));
        assert!(!a.is_before(19));
        assert!(a.is_after(9));
        assert!(a.is_before_interval(&interval(20, 25)));
        assert!(a.is_after_interval(&interval(0, 10)));
    }

    #[test]
    fn gap_and_overlap() {
        let a = interval(10, 20);
        assert_eq!(a.gap(&interval(25, 30)), Some(interval(20, 25)));
        assert_eq!(a.gap(&interval(0, 5)), Some(interval(5, 10)));
        assert_eq!(a.gap(&interval(20, 30)), None);
        assert_eq!(a.overlap(&interval(15, 30)), Some(interval(15, 20)));
        assert_eq!(a.overlap(&interval(20, 30)), None);
    }

    #[test]
    fn resizing_and_periods() {
        let day = 86_400_000;
        let a = interval(0, day);
        assert_eq!(a.to_duration().unwrap().millis(), day);
        let month = Period::from_months(1);
        let january = a.with_period_after_start(&month).unwrap();
        assert_eq!(january.end_millis(), 31 * day);
        assert_eq!(january.to_period(None).unwrap(), month);
        let earlier = a.with_duration_before_end(Duration::from_millis(2 * day)).unwrap();
        assert!(earlier.start_millis() < 0);
        assert!(a.with_end(-1).is_err());
        assert_eq!(
            a.to_string(),
            "1970-01-01T00:00:00.000Z/1970-01-02T00:00:00.000Z"
        );
    }
}
