//! Implementation of rounding decisions shared by fields and durations.

use crate::{
    error::ErrorMessage,
    options::{RoundingMode, UnsignedRoundingMode},
    utils, ChronoError, ChronoResult,
};

use core::cmp::Ordering;

use num_traits::ToPrimitive;

/// The boundary a rounding operation settles on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Boundary {
    Lower,
    Upper,
}

/// Decides between the lower boundary `r1` and the upper boundary `r2` for
/// a value `x` with `r1 <= x <= r2`.
///
/// `d1` is `x - r1`, `d2` is `r2 - x` and `r1_is_even` reports the parity
/// used to break `HalfEven` ties.
pub(crate) fn apply_unsigned_rounding_mode(
    d1: u128,
    d2: u128,
    r1_is_even: bool,
    unsigned_rounding_mode: UnsignedRoundingMode,
) -> Boundary {
    // x is exactly r1.
    if d1 == 0 {
        return Boundary::Lower;
    }
    if d2 == 0 {
        return Boundary::Upper;
    }
    match unsigned_rounding_mode {
        UnsignedRoundingMode::Zero => return Boundary::Lower,
        UnsignedRoundingMode::Infinity => return Boundary::Upper,
        _ => {}
    }
    match d1.cmp(&d2) {
        Ordering::Less => Boundary::Lower,
        Ordering::Greater => Boundary::Upper,
        Ordering::Equal => match unsigned_rounding_mode {
            UnsignedRoundingMode::HalfZero => Boundary::Lower,
            UnsignedRoundingMode::HalfInfinity => Boundary::Upper,
            _ if r1_is_even => Boundary::Lower,
            _ => Boundary::Upper,
        },
    }
}

/// Picks between two instants that bracket `instant`.
///
/// `floor_is_even` breaks `HalfEven` ties: the floor wins when its field
/// value is even, the ceiling otherwise.
pub(crate) fn choose_instant(
    instant: i64,
    floor: i64,
    ceiling: i64,
    mode: RoundingMode,
    floor_is_even: bool,
) -> i64 {
    let d1 = (i128::from(instant) - i128::from(floor)).unsigned_abs();
    let d2 = (i128::from(ceiling) - i128::from(instant)).unsigned_abs();
    let unsigned = mode.get_unsigned_round_mode(true);
    match apply_unsigned_rounding_mode(d1, d2, floor_is_even, unsigned) {
        Boundary::Lower => floor,
        Boundary::Upper => ceiling,
    }
}

/// Rounds the quotient of an integer division.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct IncrementRounder {
    sign: bool,
    dividend: i128,
    divisor: i128,
}

impl IncrementRounder {
    #[inline]
    pub(crate) fn from_signed_num(dividend: i64, divisor: i64) -> ChronoResult<Self> {
        if divisor == 0 {
            return Err(ChronoError::arithmetic().with_enum(ErrorMessage::DivisionByZero));
        }
        let dividend = i128::from(dividend);
        let divisor = i128::from(divisor);
        Ok(Self {
            sign: (dividend >= 0) == (divisor > 0),
            dividend: dividend.abs(),
            divisor: divisor.abs(),
        })
    }

    /// Returns the rounded quotient.
    pub(crate) fn round(&self, mode: RoundingMode) -> ChronoResult<i64> {
        let quotient = self.dividend.div_euclid(self.divisor);
        let remainder = self.dividend.rem_euclid(self.divisor);
        let d1 = remainder.unsigned_abs();
        let d2 = (self.divisor - remainder).unsigned_abs();
        let unsigned = mode.get_unsigned_round_mode(self.sign);
        let magnitude = match apply_unsigned_rounding_mode(d1, d2, quotient % 2 == 0, unsigned) {
            Boundary::Lower => quotient,
            Boundary::Upper => quotient + 1,
        };
        let rounded = if self.sign { magnitude } else { -magnitude };
        rounded
            .to_i64()
            .ok_or(ChronoError::arithmetic().with_enum(ErrorMessage::IntegerOverflow))
    }
}

/// Floors `instant` to a multiple of `unit` counted from the epoch.
#[inline]
pub(crate) fn floor_to_unit(instant: i64, unit: i64) -> i64 {
    instant - instant.rem_euclid(unit)
}

/// Ceils `instant` to a multiple of `unit` counted from the epoch.
#[inline]
pub(crate) fn ceil_to_unit(instant: i64, unit: i64) -> ChronoResult<i64> {
    let floor = floor_to_unit(instant, unit);
    if floor == instant {
        return Ok(instant);
    }
    utils::checked_add(floor, unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn div(dividend: i64, divisor: i64, mode: RoundingMode) -> i64 {
        IncrementRounder::from_signed_num(dividend, divisor)
            .unwrap()
            .round(mode)
            .unwrap()
    }

    #[test]
    fn basic_quotient_rounding() {
        assert_eq!(div(7, 2, RoundingMode::Floor), 3);
        assert_eq!(div(7, 2, RoundingMode::Ceiling), 4);
        assert_eq!(div(-7, 2, RoundingMode::Floor), -4);
        assert_eq!(div(-7, 2, RoundingMode::Ceiling), -3);
        assert_eq!(div(7, -2, RoundingMode::Floor), -4);
    }

    #[test]
    fn half_quotient_rounding() {
        assert_eq!(div(5, 2, RoundingMode::HalfFloor), 2);
        assert_eq!(div(5, 2, RoundingMode::HalfCeiling), 3);
        assert_eq!(div(-5, 2, RoundingMode::HalfFloor), -3);
        assert_eq!(div(-5, 2, RoundingMode::HalfCeiling), -2);
        assert_eq!(div(5, 2, RoundingMode::HalfEven), 2);
        assert_eq!(div(7, 2, RoundingMode::HalfEven), 4);
        assert_eq!(div(-7, 2, RoundingMode::HalfEven), -4);
        assert_eq!(div(8, 3, RoundingMode::HalfFloor), 3);
        assert_eq!(div(7, 3, RoundingMode::HalfCeiling), 2);
    }

    #[test]
    fn exact_and_errors() {
        assert_eq!(div(6, 3, RoundingMode::Ceiling), 2);
        assert!(IncrementRounder::from_signed_num(1, 0).is_err());
        let rounder = IncrementRounder::from_signed_num(i64::MIN, -1).unwrap();
        assert!(rounder.round(RoundingMode::Floor).is_err());
    }

    #[test]
    fn instant_choice() {
        assert_eq!(choose_instant(4, 0, 10, RoundingMode::HalfFloor, false), 0);
        assert_eq!(choose_instant(5, 0, 10, RoundingMode::HalfFloor, false), 0);
        assert_eq!(choose_instant(5, 0, 10, RoundingMode::HalfCeiling, false), 10);
        assert_eq!(choose_instant(5, 0, 10, RoundingMode::HalfEven, true), 0);
        assert_eq!(choose_instant(5, 0, 10, RoundingMode::HalfEven, false), 10);
        assert_eq!(choose_instant(1, 0, 10, RoundingMode::Ceiling, false), 10);
        assert_eq!(choose_instant(0, 0, 0, RoundingMode::Ceiling, false), 0);
    }

    #[test]
    fn unit_floor_and_ceiling() {
        assert_eq!(floor_to_unit(-1, 1000), -1000);
        assert_eq!(ceil_to_unit(-1, 1000).unwrap(), 0);
        assert_eq!(ceil_to_unit(1000, 1000).unwrap(), 1000);
    }
}
