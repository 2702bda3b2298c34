//! The time zone of a chronology.

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use core::iter::Peekable;
use core::str::{Chars, FromStr};
use core::fmt;

use zone_provider::{
    LocalTimeRecordResult, TimeZoneProvider, UtcOffsetMillis, ZoneRules, MAX_OFFSET_MILLIS,
};

use crate::{error::ErrorMessage, options::Disambiguation, utils, ChronoError, ChronoResult};

/// A time zone: UTC, a fixed offset, or rules sourced from a provider.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum TimeZone {
    #[default]
    Utc,
    /// A constant offset from UTC, never zero.
    Fixed(UtcOffsetMillis),
    /// A zone with offset transitions.
    Rules(Arc<ZoneRules>),
}

impl TimeZone {
    /// Creates a zone with a constant offset, normalizing a zero offset to
    /// UTC.
    pub fn fixed(offset_millis: i32) -> ChronoResult<Self> {
        if !(-MAX_OFFSET_MILLIS..=MAX_OFFSET_MILLIS).contains(&offset_millis) {
            return Err(ChronoError::field_value(
                "offset",
                i64::from(offset_millis),
                i64::from(-MAX_OFFSET_MILLIS),
                i64::from(MAX_OFFSET_MILLIS),
            ));
        }
        if offset_millis == 0 {
            return Ok(Self::Utc);
        }
        Ok(Self::Fixed(UtcOffsetMillis(offset_millis)))
    }

    /// Creates a zone from a provider's rules.
    pub fn from_rules(rules: Arc<ZoneRules>) -> Self {
        Self::Rules(rules)
    }

    /// Resolves `Z`, `UTC`, `±hh[:mm[:ss[.SSS]]]` or a provider identifier.
    pub fn try_from_identifier_str_with_provider(
        identifier: &str,
        provider: &(impl TimeZoneProvider + ?Sized),
    ) -> ChronoResult<Self> {
        if let Ok(zone) = Self::from_str(identifier) {
            return Ok(zone);
        }
        let canonical = provider
            .normalize_identifier(identifier)
            .ok_or(ChronoError::argument().with_enum(ErrorMessage::TimeZoneNameInvalid))?;
        #[cfg(feature = "log")]
        log::trace!("resolved zone identifier {identifier} as {canonical}");
        provider
            .get_zone(&canonical)
            .map(Self::Rules)
            .ok_or(ChronoError::argument().with_enum(ErrorMessage::TimeZoneNameInvalid))
    }

    /// The identifier of this zone.
    pub fn id(&self) -> Cow<'_, str> {
        match self {
            Self::Utc => Cow::Borrowed("UTC"),
            Self::Fixed(offset) => Cow::Owned(format_offset(offset.0)),
            Self::Rules(rules) => Cow::Borrowed(rules.id()),
        }
    }

    /// Whether the zone has the same offset at every instant.
    pub fn is_fixed(&self) -> bool {
        match self {
            Self::Utc | Self::Fixed(_) => true,
            Self::Rules(rules) => rules.is_fixed(),
        }
    }

    /// The offset in effect at a UTC instant.
    pub fn offset_at(&self, epoch_millis: i64) -> i64 {
        match self {
            Self::Utc => 0,
            Self::Fixed(offset) => offset.as_i64(),
            Self::Rules(rules) => rules.offset_at(epoch_millis).as_i64(),
        }
    }

    /// Whether daylight saving time is in effect at a UTC instant.
    pub fn is_dst(&self, epoch_millis: i64) -> bool {
        match self {
            Self::Rules(rules) => rules.record_at(epoch_millis).is_dst,
            _ => false,
        }
    }

    /// The first offset transition strictly after `epoch_millis`.
    pub fn next_transition(&self, epoch_millis: i64) -> Option<i64> {
        match self {
            Self::Rules(rules) => rules.next_transition(epoch_millis),
            _ => None,
        }
    }

    /// The last offset transition strictly before `epoch_millis`.
    pub fn previous_transition(&self, epoch_millis: i64) -> Option<i64> {
        match self {
            Self::Rules(rules) => rules.previous_transition(epoch_millis),
            _ => None,
        }
    }

    /// The offsets that map a local instant back onto the timeline.
    pub fn local_time_record(&self, local_millis: i64) -> LocalTimeRecordResult {
        match self {
            Self::Utc => LocalTimeRecordResult::Single(UtcOffsetMillis(0)),
            Self::Fixed(offset) => LocalTimeRecordResult::Single(*offset),
            Self::Rules(rules) => rules.local_time_record(local_millis),
        }
    }

    /// Converts a UTC instant to local milliseconds.
    #[inline]
    pub fn utc_to_local(&self, epoch_millis: i64) -> ChronoResult<i64> {
        utils::checked_add(epoch_millis, self.offset_at(epoch_millis))
    }

    /// Converts local milliseconds to a UTC instant.
    pub fn local_to_utc(
        &self,
        local_millis: i64,
        disambiguation: Disambiguation,
    ) -> ChronoResult<i64> {
        let offset = match self.local_time_record(local_millis) {
            LocalTimeRecordResult::Single(offset) => offset,
            LocalTimeRecordResult::Ambiguous { first, second } => match disambiguation {
                Disambiguation::Compatible | Disambiguation::Earlier => first,
                Disambiguation::Later => second,
                Disambiguation::Reject => {
                    return Err(ChronoError::argument().with_enum(ErrorMessage::AmbiguousLocalTime))
                }
            },
            LocalTimeRecordResult::Empty(gap) => {
                #[cfg(feature = "log")]
                log::debug!(
                    "local time {local_millis} falls in a gap of {} at {}",
                    self.id(),
                    gap.transition_epoch
                );
                match disambiguation {
                    Disambiguation::Compatible | Disambiguation::Later => gap.offset_before,
                    Disambiguation::Earlier => gap.offset_after,
                    Disambiguation::Reject => {
                        return Err(
                            ChronoError::argument().with_enum(ErrorMessage::IllegalInstantInGap)
                        )
                    }
                }
            }
        };
        utils::checked_sub(local_millis, offset.as_i64())
    }

    /// Converts local milliseconds to a UTC instant, rejecting local times in
    /// a gap and taking the earlier instant of an overlap.
    pub(crate) fn local_to_utc_strict(&self, local_millis: i64) -> ChronoResult<i64> {
        if let LocalTimeRecordResult::Empty(_) = self.local_time_record(local_millis) {
            return Err(ChronoError::argument().with_enum(ErrorMessage::IllegalInstantInGap));
        }
        self.local_to_utc(local_millis, Disambiguation::Compatible)
    }

    /// Converts local milliseconds to a UTC instant, keeping the offset of
    /// `original` when it is still valid for the local time.
    pub(crate) fn local_to_utc_with_original(
        &self,
        local_millis: i64,
        original: i64,
    ) -> ChronoResult<i64> {
        let offset = self.offset_at(original);
        let utc = utils::checked_sub(local_millis, offset)?;
        if self.offset_at(utc) == offset {
            return Ok(utc);
        }
        self.local_to_utc(local_millis, Disambiguation::Compatible)
    }
}

impl FromStr for TimeZone {
    type Err = ChronoError;

    /// Parses `Z`, `UTC`, `GMT` or an offset. Named zones need a provider.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Z" | "UTC" | "Etc/UTC" | "GMT" | "Etc/GMT" => return Ok(Self::Utc),
            _ => {}
        }
        let mut chars = s.chars().peekable();
        if !chars.peek().is_some_and(is_ascii_sign) {
            return Err(ChronoError::argument().with_enum(ErrorMessage::TimeZoneNameInvalid));
        }
        let offset = parse_offset(&mut chars)?;
        if chars.next().is_some() {
            return Err(
                ChronoError::argument().with_message("Unexpected trailing characters in offset")
            );
        }
        Self::fixed(offset)
    }
}

impl fmt::Display for TimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

/// Formats an offset as `±hh:mm`, adding seconds and milliseconds when
/// present.
pub(crate) fn format_offset(offset_millis: i32) -> String {
    let sign = if offset_millis < 0 { '-' } else { '+' };
    let abs = offset_millis.unsigned_abs();
    let hours = abs / 3_600_000;
    let minutes = abs / 60_000 % 60;
    let seconds = abs / 1_000 % 60;
    let millis = abs % 1_000;
    match (seconds, millis) {
        (0, 0) => format!("{sign}{hours:02}:{minutes:02}"),
        (_, 0) => format!("{sign}{hours:02}:{minutes:02}:{seconds:02}"),
        _ => format!("{sign}{hours:02}:{minutes:02}:{seconds:02}.{millis:03}"),
    }
}

#[inline]
fn parse_offset(chars: &mut Peekable<Chars<'_>>) -> ChronoResult<i32> {
    let sign = chars.next().map_or(1, |c| if c == '+' { 1 } else { -1 });
    // First offset portion
    let hours = parse_digit_pair(chars)?;
    let mut total = hours * 3_600_000;

    let mut parts = 0;
    while parts < 2 && chars.peek().is_some() {
        let sep = chars.peek().is_some_and(|ch| *ch == ':');
        if sep {
            let _ = chars.next();
        }
        let unit = if parts == 0 { 60_000 } else { 1_000 };
        let value = parse_digit_pair(chars)?;
        if value >= 60 {
            return Err(ChronoError::argument()
                .with_message("Offset minutes and seconds must be less than 60"));
        }
        total += value * unit;
        parts += 1;
    }

    if parts == 2 && chars.peek().is_some_and(|ch| *ch == '.') {
        let _ = chars.next();
        let mut scale = 100;
        while let Some(digit) = chars.peek().and_then(|ch| ch.to_digit(10)) {
            let _ = chars.next();
            total += digit as i32 * scale;
            scale /= 10;
            if scale == 0 {
                break;
            }
        }
    }

    Ok(total * sign)
}

fn parse_digit_pair(chars: &mut Peekable<Chars<'_>>) -> ChronoResult<i32> {
    let first = chars
        .next()
        .ok_or_else(abrupt_end)?
        .to_digit(10)
        .ok_or_else(non_ascii_digit)?;
    let second = chars
        .next()
        .ok_or_else(abrupt_end)?
        .to_digit(10)
        .ok_or_else(non_ascii_digit)?;
    Ok((first * 10 + second) as i32)
}

fn abrupt_end() -> ChronoError {
    ChronoError::argument().with_message("Abrupt end while parsing offset string")
}

fn non_ascii_digit() -> ChronoError {
    ChronoError::argument().with_message("Non ascii digit found while parsing offset string")
}

fn is_ascii_sign(ch: &char) -> bool {
    *ch == '+' || *ch == '-'
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use zone_provider::{LocalTimeRecord, MemoryProvider, Transition};

    const HOUR: i64 = 3_600_000;

    #[test]
    fn parse_offsets() {
        assert_eq!(TimeZone::from_str("Z").unwrap(), TimeZone::Utc);
        assert_eq!(TimeZone::from_str("+00:00").unwrap(), TimeZone::Utc);
        assert_eq!(
            TimeZone::from_str("+05:30").unwrap(),
            TimeZone::Fixed(UtcOffsetMillis(19_800_000))
        );
        assert_eq!(
            TimeZone::from_str("-0800").unwrap(),
            TimeZone::Fixed(UtcOffsetMillis(-28_800_000))
        );
        assert_eq!(
            TimeZone::from_str("+01:02:03.450").unwrap().offset_at(0),
            3_723_450
        );
        assert!(TimeZone::from_str("+5").is_err());
        assert!(TimeZone::from_str("+01:99").is_err());
        assert!(TimeZone::from_str("+01:00:60").is_err());
        assert_eq!(TimeZone::from_str("+01:59:59").unwrap().offset_at(0), 7_199_000);
        assert!(TimeZone::from_str("+19:00").is_err());
        assert!(TimeZone::from_str("Mars/Olympus").is_err());
    }

    #[test]
    fn offset_ids() {
        assert_eq!(TimeZone::fixed(-19_800_000).unwrap().id(), "-05:30");
        assert_eq!(TimeZone::fixed(3_723_000).unwrap().id(), "+01:02:03");
        assert_eq!(TimeZone::Utc.id(), "UTC");
    }

    #[test]
    fn provider_lookup() {
        let mut provider = MemoryProvider::new();
        provider.insert(ZoneRules::fixed("Asia/Tokyo", UtcOffsetMillis(9 * HOUR as i32)).unwrap());
        let zone =
            TimeZone::try_from_identifier_str_with_provider("asia/tokyo", &provider).unwrap();
        assert_eq!(zone.id(), "Asia/Tokyo");
        assert!(zone.is_fixed());
        assert!(
            TimeZone::try_from_identifier_str_with_provider("Europe/Paris", &provider).is_err()
        );
        assert_eq!(
            TimeZone::try_from_identifier_str_with_provider("-03:00", &provider)
                .unwrap()
                .offset_at(0),
            -3 * HOUR
        );
    }

    #[test]
    fn disambiguation() {
        // Offset moves from +01:00 to +02:00 at 1000h, then back at 2000h.
        let standard = LocalTimeRecord::standard(UtcOffsetMillis(HOUR as i32));
        let summer = LocalTimeRecord::daylight(UtcOffsetMillis(2 * HOUR as i32));
        let rules = ZoneRules::new(
            "Test/Zone",
            standard,
            vec![
                Transition { epoch_millis: 1000 * HOUR, record: summer },
                Transition { epoch_millis: 2000 * HOUR, record: standard },
            ],
        )
        .unwrap();
        let zone = TimeZone::from_rules(Arc::new(rules));

        // Local 1001:30 is skipped.
        let gap = 1001 * HOUR + HOUR / 2;
        assert_eq!(zone.local_to_utc(gap, Disambiguation::Compatible).unwrap(), gap - HOUR);
        assert_eq!(zone.local_to_utc(gap, Disambiguation::Earlier).unwrap(), gap - 2 * HOUR);
        assert!(zone.local_to_utc(gap, Disambiguation::Reject).is_err());
        assert!(zone.local_to_utc_strict(gap).is_err());

        // Local 2001:30 happens twice.
        let overlap = 2001 * HOUR + HOUR / 2;
        assert_eq!(
            zone.local_to_utc(overlap, Disambiguation::Compatible).unwrap(),
            overlap - 2 * HOUR
        );
        assert_eq!(zone.local_to_utc(overlap, Disambiguation::Later).unwrap(), overlap - HOUR);
        assert!(zone.local_to_utc(overlap, Disambiguation::Reject).is_err());
        assert_eq!(zone.local_to_utc_with_original(overlap, 2000 * HOUR).unwrap(), overlap - HOUR);

        assert!(zone.is_dst(1500 * HOUR));
        assert_eq!(zone.next_transition(0), Some(1000 * HOUR));
        assert_eq!(zone.previous_transition(3000 * HOUR), Some(2000 * HOUR));
    }
}
