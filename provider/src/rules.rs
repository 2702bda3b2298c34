//! Transition based zone rules.
//!
//! A [`ZoneRules`] value is a sorted table of offset changes. Everything
//! the core needs from a zone can be answered from it: the offset at an
//! instant, the neighbouring transitions, and the candidate offsets for a
//! local (wall clock) time.

use tinystr::TinyAsciiStr;

use crate::{TimeZoneProviderError, TimeZoneProviderResult};

/// The largest supported distance from UTC: 18 hours.
pub const MAX_OFFSET_MILLIS: i32 = 18 * 3_600_000;

/// `UtcOffsetMillis` represents the amount of milliseconds we need to add to UTC to
/// reach the local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct UtcOffsetMillis(pub i32);

impl UtcOffsetMillis {
    /// Validates that the offset is within `±18:00`.
    pub fn checked(millis: i32) -> TimeZoneProviderResult<Self> {
        if !(-MAX_OFFSET_MILLIS..=MAX_OFFSET_MILLIS).contains(&millis) {
            return Err(TimeZoneProviderError::OffsetOutOfRange(millis));
        }
        Ok(Self(millis))
    }

    #[inline]
    pub fn as_i64(self) -> i64 {
        i64::from(self.0)
    }
}

/// The offset in effect for a span of the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalTimeRecord {
    pub offset: UtcOffsetMillis,
    pub is_dst: bool,
    pub abbreviation: Option<TinyAsciiStr<8>>,
}

impl LocalTimeRecord {
    pub const fn standard(offset: UtcOffsetMillis) -> Self {
        Self {
            offset,
            is_dst: false,
            abbreviation: None,
        }
    }

    pub const fn daylight(offset: UtcOffsetMillis) -> Self {
        Self {
            offset,
            is_dst: true,
            abbreviation: None,
        }
    }

    pub fn with_abbreviation(mut self, abbreviation: TinyAsciiStr<8>) -> Self {
        self.abbreviation = Some(abbreviation);
        self
    }
}

/// A change of [`LocalTimeRecord`] at a UTC instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub epoch_millis: i64,
    pub record: LocalTimeRecord,
}

/// When a local time lands in a gap, it is useful to know the offsets
/// before and after the gap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GapEntryOffsets {
    pub offset_before: UtcOffsetMillis,
    pub offset_after: UtcOffsetMillis,
    pub transition_epoch: i64,
}

/// The `LocalTimeRecordResult` represents the result of searching for the
/// offsets valid at a local time.
///
/// The search is either Empty (the local time was skipped by a forward
/// shift), a single offset, or two offsets (the local time repeats after a
/// backward shift).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalTimeRecordResult {
    Empty(GapEntryOffsets),
    Single(UtcOffsetMillis),
    /// `first` yields the earlier instant.
    Ambiguous {
        first: UtcOffsetMillis,
        second: UtcOffsetMillis,
    },
}

/// The offset rules of one zone identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRules {
    id: String,
    initial: LocalTimeRecord,
    transitions: Vec<Transition>,
}

impl ZoneRules {
    /// Creates rules for a zone that never changes offset.
    pub fn fixed(id: impl Into<String>, offset: UtcOffsetMillis) -> TimeZoneProviderResult<Self> {
        Self::new(id, LocalTimeRecord::standard(offset), Vec::new())
    }

    /// Creates rules from an initial record and a table of transitions.
    pub fn new(
        id: impl Into<String>,
        initial: LocalTimeRecord,
        transitions: Vec<Transition>,
    ) -> TimeZoneProviderResult<Self> {
        let id = id.into();
        if id.is_empty() || !id.is_ascii() {
            return Err(TimeZoneProviderError::InvalidIdentifier);
        }
        UtcOffsetMillis::checked(initial.offset.0)?;
        for transition in &transitions {
            UtcOffsetMillis::checked(transition.record.offset.0)?;
        }
        if transitions
            .windows(2)
            .any(|pair| pair[0].epoch_millis >= pair[1].epoch_millis)
        {
            return Err(TimeZoneProviderError::UnsortedTransitions);
        }
        Ok(Self {
            id,
            initial,
            transitions,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns whether the zone has a single offset for all time.
    pub fn is_fixed(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Returns the record in effect at a UTC instant.
    pub fn record_at(&self, epoch_millis: i64) -> LocalTimeRecord {
        let idx = self
            .transitions
            .partition_point(|t| t.epoch_millis <= epoch_millis);
        self.period_record(idx)
    }

    /// Returns the offset in effect at a UTC instant.
    pub fn offset_at(&self, epoch_millis: i64) -> UtcOffsetMillis {
        self.record_at(epoch_millis).offset
    }

    /// Returns the first transition strictly after `epoch_millis`.
    pub fn next_transition(&self, epoch_millis: i64) -> Option<i64> {
        let idx = self
            .transitions
            .partition_point(|t| t.epoch_millis <= epoch_millis);
        self.transitions.get(idx).map(|t| t.epoch_millis)
    }

    /// Returns the last transition strictly before `epoch_millis`.
    pub fn previous_transition(&self, epoch_millis: i64) -> Option<i64> {
        let idx = self
            .transitions
            .partition_point(|t| t.epoch_millis < epoch_millis);
        idx.checked_sub(1)
            .and_then(|i| self.transitions.get(i))
            .map(|t| t.epoch_millis)
    }

    /// Finds the offsets that map `local_millis` back onto the timeline.
    pub fn local_time_record(&self, local_millis: i64) -> LocalTimeRecordResult {
        let window = i64::from(MAX_OFFSET_MILLIS);
        let window_start = local_millis.saturating_sub(window);
        let window_end = local_millis.saturating_add(window);

        let mut first: Option<UtcOffsetMillis> = None;
        let mut last: Option<UtcOffsetMillis> = None;
        let mut gap: Option<GapEntryOffsets> = None;

        let mut period = self
            .transitions
            .partition_point(|t| t.epoch_millis <= window_start);
        while period <= self.transitions.len() {
            let (start, end) = self.period_bounds(period);
            if start > window_end {
                break;
            }
            let offset = self.period_record(period).offset;
            let utc = local_millis.saturating_sub(offset.as_i64());
            if (start..end).contains(&utc) {
                if first.is_none() {
                    first = Some(offset);
                } else {
                    last = Some(offset);
                }
            } else if utc >= end && period < self.transitions.len() {
                let next = self.period_record(period + 1).offset;
                if local_millis.saturating_sub(next.as_i64()) < end {
                    gap = Some(GapEntryOffsets {
                        offset_before: offset,
                        offset_after: next,
                        transition_epoch: end,
                    });
                }
            }
            period += 1;
        }

        match (first, last) {
            (Some(first), Some(second)) => LocalTimeRecordResult::Ambiguous { first, second },
            (Some(single), None) => LocalTimeRecordResult::Single(single),
            _ => LocalTimeRecordResult::Empty(gap.unwrap_or_else(|| {
                let before = self.offset_at(window_start);
                let after = self.offset_at(window_end);
                GapEntryOffsets {
                    offset_before: before,
                    offset_after: after,
                    transition_epoch: self.next_transition(window_start).unwrap_or(window_end),
                }
            })),
        }
    }

    // Period `n` is the span between transition `n - 1` and transition `n`.
    fn period_bounds(&self, period: usize) -> (i64, i64) {
        let start = period
            .checked_sub(1)
            .and_then(|i| self.transitions.get(i))
            .map_or(i64::MIN, |t| t.epoch_millis);
        let end = self
            .transitions
            .get(period)
            .map_or(i64::MAX, |t| t.epoch_millis);
        (start, end)
    }

    fn period_record(&self, period: usize) -> LocalTimeRecord {
        period
            .checked_sub(1)
            .and_then(|i| self.transitions.get(i))
            .map_or(self.initial, |t| t.record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: i64 = 3_600_000;
    // 2021-03-14T07:00Z and 2021-11-07T06:00Z, the New York transitions.
    const SPRING: i64 = 1_615_705_200_000;
    const FALL: i64 = 1_636_264_800_000;

    fn new_york_2021() -> ZoneRules {
        let est = LocalTimeRecord::standard(UtcOffsetMillis(-5 * HOUR as i32));
        let edt = LocalTimeRecord::daylight(UtcOffsetMillis(-4 * HOUR as i32));
        ZoneRules::new(
            "America/New_York",
            est,
            vec![
                Transition {
                    epoch_millis: SPRING,
                    record: edt,
                },
                Transition {
                    epoch_millis: FALL,
                    record: est,
                },
            ],
        )
        .unwrap()
    }

    #[test]
    fn offsets_around_transitions() {
        let rules = new_york_2021();
        assert_eq!(rules.offset_at(SPRING - 1).0, -5 * HOUR as i32);
        assert_eq!(rules.offset_at(SPRING).0, -4 * HOUR as i32);
        assert_eq!(rules.offset_at(FALL).0, -5 * HOUR as i32);
        assert!(rules.record_at(SPRING).is_dst);
        assert_eq!(rules.next_transition(0), Some(SPRING));
        assert_eq!(rules.next_transition(SPRING), Some(FALL));
        assert_eq!(rules.next_transition(FALL), None);
        assert_eq!(rules.previous_transition(FALL), Some(SPRING));
        assert_eq!(rules.previous_transition(SPRING), None);
    }

    #[test]
    fn local_time_in_gap() {
        let rules = new_york_2021();
        // 02:30 local on 2021-03-14 does not exist.
        let local = SPRING - 5 * HOUR + HOUR / 2;
        let LocalTimeRecordResult::Empty(gap) = rules.local_time_record(local) else {
            panic!("expected a gap");
        };
        assert_eq!(gap.offset_before.0, -5 * HOUR as i32);
        assert_eq!(gap.offset_after.0, -4 * HOUR as i32);
        assert_eq!(gap.transition_epoch, SPRING);
    }

    #[test]
    fn local_time_in_overlap() {
        let rules = new_york_2021();
        // 01:30 local on 2021-11-07 happens twice.
        let local = FALL - 4 * HOUR - HOUR / 2;
        assert_eq!(
            rules.local_time_record(local),
            LocalTimeRecordResult::Ambiguous {
                first: UtcOffsetMillis(-4 * HOUR as i32),
                second: UtcOffsetMillis(-5 * HOUR as i32),
            }
        );
        assert_eq!(
            rules.local_time_record(local + 2 * HOUR),
            LocalTimeRecordResult::Single(UtcOffsetMillis(-5 * HOUR as i32))
        );
    }

    #[test]
    fn rejects_unsorted_transitions() {
        let record = LocalTimeRecord::standard(UtcOffsetMillis(0));
        let err = ZoneRules::new(
            "Etc/Broken",
            record,
            vec![
                Transition {
                    epoch_millis: 10,
                    record,
                },
                Transition {
                    epoch_millis: 10,
                    record,
                },
            ],
        )
        .unwrap_err();
        assert_eq!(err, TimeZoneProviderError::UnsortedTransitions);
        assert!(ZoneRules::fixed("", UtcOffsetMillis(0)).is_err());
        assert!(ZoneRules::fixed("Etc/Far", UtcOffsetMillis(19 * HOUR as i32)).is_err());
    }
}
