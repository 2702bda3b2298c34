//! Checked arithmetic and small date equations shared across the crate.

use num_traits::ToPrimitive;

use crate::{error::ErrorMessage, ChronoError, ChronoResult};

pub(crate) const MS_PER_SECOND: i64 = 1_000;
pub(crate) const MS_PER_MINUTE: i64 = 60_000;
pub(crate) const MS_PER_HOUR: i64 = 3_600_000;
pub(crate) const MS_PER_HALFDAY: i64 = 43_200_000;
pub(crate) const MS_PER_DAY: i64 = crate::MS_PER_DAY as i64;
pub(crate) const MS_PER_WEEK: i64 = 7 * MS_PER_DAY;

#[inline]
pub(crate) fn checked_add(a: i64, b: i64) -> ChronoResult<i64> {
    a.checked_add(b)
        .ok_or(ChronoError::arithmetic().with_enum(ErrorMessage::AdditionOverflow))
}

#[inline]
pub(crate) fn checked_sub(a: i64, b: i64) -> ChronoResult<i64> {
    a.checked_sub(b)
        .ok_or(ChronoError::arithmetic().with_enum(ErrorMessage::AdditionOverflow))
}

#[inline]
pub(crate) fn checked_mul(a: i64, b: i64) -> ChronoResult<i64> {
    a.checked_mul(b)
        .ok_or(ChronoError::arithmetic().with_enum(ErrorMessage::MultiplicationOverflow))
}

#[inline]
pub(crate) fn checked_neg(a: i64) -> ChronoResult<i64> {
    a.checked_neg()
        .ok_or(ChronoError::arithmetic().with_enum(ErrorMessage::NegationOverflow))
}

#[inline]
pub(crate) fn checked_add_i32(a: i32, b: i32) -> ChronoResult<i32> {
    a.checked_add(b)
        .ok_or(ChronoError::arithmetic().with_enum(ErrorMessage::AdditionOverflow))
}

#[inline]
pub(crate) fn checked_mul_i32(a: i32, b: i32) -> ChronoResult<i32> {
    a.checked_mul(b)
        .ok_or(ChronoError::arithmetic().with_enum(ErrorMessage::MultiplicationOverflow))
}

/// Converts to an `i32`, raising an arithmetic error when out of range.
#[inline]
pub(crate) fn to_i32<T: ToPrimitive>(value: T) -> ChronoResult<i32> {
    value
        .to_i32()
        .ok_or(ChronoError::arithmetic().with_enum(ErrorMessage::IntegerOverflow))
}

/// Converts to an `i64`, raising an arithmetic error when out of range.
#[inline]
pub(crate) fn to_i64<T: ToPrimitive>(value: T) -> ChronoResult<i64> {
    value
        .to_i64()
        .ok_or(ChronoError::arithmetic().with_enum(ErrorMessage::IntegerOverflow))
}

/// Division rounding toward negative infinity.
#[inline]
pub(crate) const fn floor_div(dividend: i64, divisor: i64) -> i64 {
    let carry = if divisor < 0 && dividend.rem_euclid(divisor) != 0 {
        1
    } else {
        0
    };
    dividend.div_euclid(divisor) - carry
}

/// Splits a millisecond instant into epoch days and milliseconds of the day.
#[inline]
pub(crate) const fn split_millis(millis: i64) -> (i64, i64) {
    (millis.div_euclid(MS_PER_DAY), millis.rem_euclid(MS_PER_DAY))
}

/// Joins epoch days and milliseconds of the day, checking for overflow.
#[inline]
pub(crate) fn join_millis(days: i64, millis_of_day: i64) -> ChronoResult<i64> {
    checked_add(checked_mul(days, MS_PER_DAY)?, millis_of_day)
}

/// Epoch day 0 (1970-01-01) was a Thursday; Monday is 1.
#[inline]
pub(crate) const fn day_of_week_from_days(days: i64) -> i64 {
    (days + 3).rem_euclid(7) + 1
}

/// Wraps `value` into `min..=max`.
#[inline]
pub(crate) fn wrap_value(value: i64, min: i64, max: i64) -> i64 {
    let span = max - min + 1;
    (value - min).rem_euclid(span) + min
}

/// Checks that `value` is within `lower..=upper`, naming `field` on failure.
#[inline]
pub(crate) fn verify_bounds(
    field: &'static str,
    value: i64,
    lower: i64,
    upper: i64,
) -> ChronoResult<()> {
    if value < lower || value > upper {
        return Err(ChronoError::field_value(field, value, lower, upper));
    }
    Ok(())
}
