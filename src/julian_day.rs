//! Astronomical Julian Day conversions.
//!
//! Julian Day 2440587.5 is 1970-01-01T00:00Z, millisecond zero.

use core_maths::CoreFloat;

use crate::MS_PER_DAY;

/// The Julian Day of the epoch.
pub const EPOCH_JULIAN_DAY: f64 = 2_440_587.5;

/// The fractional Julian Day of an instant.
pub fn to_julian_day(epoch_millis: i64) -> f64 {
    let epoch_day = epoch_millis as f64 / f64::from(MS_PER_DAY);
    epoch_day + EPOCH_JULIAN_DAY
}

/// The Julian Day Number, which starts at noon UTC.
pub fn to_julian_day_number(epoch_millis: i64) -> i64 {
    (to_julian_day(epoch_millis) + 0.5).floor() as i64
}

/// The instant of a fractional Julian Day, truncated to the millisecond.
pub fn from_julian_day(julian_day: f64) -> i64 {
    let epoch_day = julian_day - EPOCH_JULIAN_DAY;
    (epoch_day * f64::from(MS_PER_DAY)) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = MS_PER_DAY as i64;

    #[test]
    fn epoch_offsets() {
        assert_eq!(to_julian_day(0), 2_440_587.5);
        assert_eq!(to_julian_day(DAY / 2), 2_440_588.0);
        assert_eq!(to_julian_day_number(0), 2_440_588);
        assert_eq!(to_julian_day_number(-1), 2_440_587);
        assert_eq!(from_julian_day(2_440_587.5), 0);
        assert_eq!(from_julian_day(2_440_588.5), DAY);
    }

    #[test]
    fn whole_days_round_trip() {
        for days in [-1_000_000_i64, -1, 0, 1, 15_736, 1_000_000] {
            let millis = days * DAY;
            assert_eq!(from_julian_day(to_julian_day(millis)), millis);
        }
    }
}
