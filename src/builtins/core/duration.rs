//! An exact length of time in milliseconds.

use alloc::format;
use alloc::string::String;
use core::{fmt, str::FromStr};

use crate::{
    builtins::core::{DateTime, Period, PeriodType},
    error::ErrorMessage,
    options::RoundingMode,
    rounding::IncrementRounder,
    utils::{self, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND},
    ChronoError, ChronoResult, Chronology,
};

#[cfg(test)]
mod tests;

/// A span of milliseconds, independent of any calendar or zone.
///
/// Standard days, hours and minutes are treated as exactly 24 hours, 60
/// minutes and 60 seconds long.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration {
    millis: i64,
}

impl Duration {
    pub const ZERO: Self = Self::from_millis(0);

    #[inline]
    pub const fn from_millis(millis: i64) -> Self {
        Self { millis }
    }

    pub fn from_standard_days(days: i64) -> ChronoResult<Self> {
        utils::checked_mul(days, MS_PER_DAY).map(Self::from_millis)
    }

    pub fn from_standard_hours(hours: i64) -> ChronoResult<Self> {
        utils::checked_mul(hours, MS_PER_HOUR).map(Self::from_millis)
    }

    pub fn from_standard_minutes(minutes: i64) -> ChronoResult<Self> {
        utils::checked_mul(minutes, MS_PER_MINUTE).map(Self::from_millis)
    }

    pub fn from_standard_seconds(seconds: i64) -> ChronoResult<Self> {
        utils::checked_mul(seconds, MS_PER_SECOND).map(Self::from_millis)
    }

    /// The duration from `start` to `end`, both in epoch milliseconds.
    pub fn between(start: i64, end: i64) -> ChronoResult<Self> {
        utils::checked_sub(end, start).map(Self::from_millis)
    }

    #[inline]
    pub const fn millis(&self) -> i64 {
        self.millis
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.millis == 0
    }

    /// Whole standard days, truncated toward zero.
    pub const fn standard_days(&self) -> i64 {
        self.millis / MS_PER_DAY
    }

    pub const fn standard_hours(&self) -> i64 {
        self.millis / MS_PER_HOUR
    }

    pub const fn standard_minutes(&self) -> i64 {
        self.millis / MS_PER_MINUTE
    }

    pub const fn standard_seconds(&self) -> i64 {
        self.millis / MS_PER_SECOND
    }

    pub fn plus(&self, other: Self) -> ChronoResult<Self> {
        utils::checked_add(self.millis, other.millis).map(Self::from_millis)
    }

    pub fn plus_millis(&self, millis: i64) -> ChronoResult<Self> {
        utils::checked_add(self.millis, millis).map(Self::from_millis)
    }

    pub fn minus(&self, other: Self) -> ChronoResult<Self> {
        utils::checked_sub(self.millis, other.millis).map(Self::from_millis)
    }

    pub fn minus_millis(&self, millis: i64) -> ChronoResult<Self> {
        utils::checked_sub(self.millis, millis).map(Self::from_millis)
    }

    pub fn multiplied_by(&self, multiplicand: i64) -> ChronoResult<Self> {
        utils::checked_mul(self.millis, multiplicand).map(Self::from_millis)
    }

    /// Divides, truncating toward zero.
    pub fn divided_by(&self, divisor: i64) -> ChronoResult<Self> {
        if divisor == 0 {
            return Err(ChronoError::arithmetic().with_enum(ErrorMessage::DivisionByZero));
        }
        self.millis
            .checked_div(divisor)
            .map(Self::from_millis)
            .ok_or(ChronoError::arithmetic().with_enum(ErrorMessage::IntegerOverflow))
    }

    /// Divides, rounding the quotient with `mode`.
    pub fn divided_by_rounded(&self, divisor: i64, mode: RoundingMode) -> ChronoResult<Self> {
        IncrementRounder::from_signed_num(self.millis, divisor)?
            .round(mode)
            .map(Self::from_millis)
    }

    pub fn negated(&self) -> ChronoResult<Self> {
        utils::checked_neg(self.millis).map(Self::from_millis)
    }

    pub fn abs(&self) -> ChronoResult<Self> {
        if self.millis < 0 {
            return self.negated();
        }
        Ok(*self)
    }

    #[must_use]
    pub const fn with_millis(&self, millis: i64) -> Self {
        Self::from_millis(millis)
    }

    pub fn is_longer_than(&self, other: Self) -> bool {
        self.millis > other.millis
    }

    pub fn is_shorter_than(&self, other: Self) -> bool {
        self.millis < other.millis
    }

    /// Splits the duration into the precise units of a period type.
    ///
    /// Defaults to the standard period type in the ISO chronology in UTC,
    /// where weeks and smaller units are precise. The remainder beyond the
    /// largest precise unit stays in that unit.
    pub fn to_period(
        &self,
        period_type: Option<PeriodType>,
        chronology: Option<&Chronology>,
    ) -> ChronoResult<Period> {
        let iso = Chronology::iso_utc();
        Period::from_duration_millis(
            self.millis,
            period_type.unwrap_or_default(),
            chronology.unwrap_or(&iso),
        )
    }

    /// The calendar period this duration covers when it starts at `start`.
    pub fn to_period_from(
        &self,
        start: &DateTime,
        period_type: Option<PeriodType>,
    ) -> ChronoResult<Period> {
        let end = utils::checked_add(start.millis(), self.millis)?;
        Period::between_millis(
            start.millis(),
            end,
            period_type.unwrap_or_default(),
            start.chronology(),
        )
    }
}

impl From<Duration> for i64 {
    fn from(value: Duration) -> Self {
        value.millis
    }
}

impl fmt::Display for Duration {
    /// Writes the ISO-8601 seconds form, such as `PT1.500S`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.millis < 0 { "-" } else { "" };
        let magnitude = self.millis.unsigned_abs();
        let (seconds, millis) = (magnitude / 1000, magnitude % 1000);
        if millis == 0 {
            write!(f, "PT{sign}{seconds}S")
        } else {
            write!(f, "PT{sign}{seconds}.{millis:03}S")
        }
    }
}

impl FromStr for Duration {
    type Err = ChronoError;

    /// Parses the ISO-8601 seconds form written by `Display`, with up to
    /// three fraction digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ChronoError::argument().with_message(format!("invalid duration: {s}"));
        let body = s
            .strip_prefix("PT")
            .and_then(|rest| rest.strip_suffix('S'))
            .ok_or_else(invalid)?;
        let (negative, body) = match body.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, body),
        };
        let (seconds, fraction) = body.split_once('.').unwrap_or((body, ""));
        if seconds.is_empty() || !seconds.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if fraction.len() > 3 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if body.contains('.') && fraction.is_empty() {
            return Err(invalid());
        }
        let seconds: i64 = seconds.parse().map_err(|_| invalid())?;
        let mut padded = String::from(fraction);
        while padded.len() < 3 {
            padded.push('0');
        }
        let millis: i64 = padded.parse().map_err(|_| invalid())?;
        let total = utils::checked_add(utils::checked_mul(seconds, MS_PER_SECOND)?, millis)?;
        Ok(Self::from_millis(if negative {
            utils::checked_neg(total)?
        } else {
            total
        }))
    }
}
