//! A time of day without a date or zone.

use alloc::vec::Vec;
use core::fmt;

use crate::{
    builtins::core::{Period, ReadablePartial},
    error::ErrorMessage,
    fields::{DateTimeFieldType, DurationFieldType},
    format::{DateTimeParser, DateTimePrinter, IsoFormat},
    options::RoundingMode,
    utils::{self, MS_PER_DAY},
    ChronoError, ChronoResult, Chronology,
};

const FIELD_TYPES: [DateTimeFieldType; 4] = [
    DateTimeFieldType::HourOfDay,
    DateTimeFieldType::MinuteOfHour,
    DateTimeFieldType::SecondOfMinute,
    DateTimeFieldType::MillisOfSecond,
];

/// A time of day, such as `10:30:00.000`.
///
/// Adding time units wraps around midnight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalTime {
    millis_of_day: i64,
    chronology: Chronology,
}

impl LocalTime {
    pub const MIDNIGHT: Self = Self {
        millis_of_day: 0,
        chronology: Chronology::iso_utc(),
    };

    pub fn try_new(
        hour: i32,
        minute: i32,
        second: i32,
        millis: i32,
        chronology: Option<&Chronology>,
    ) -> ChronoResult<Self> {
        let millis_of_day = Chronology::time_millis(hour, minute, second, millis)?;
        Ok(Self {
            millis_of_day,
            chronology: chronology.map_or_else(Chronology::iso_utc, Chronology::with_utc),
        })
    }

    /// Creates a time from milliseconds since midnight.
    pub fn from_millis_of_day(millis_of_day: i64) -> ChronoResult<Self> {
        utils::verify_bounds("millisOfDay", millis_of_day, 0, MS_PER_DAY - 1)?;
        Ok(Self {
            millis_of_day,
            chronology: Chronology::iso_utc(),
        })
    }

    /// The time of day of a wall clock reading.
    pub(crate) fn from_local_millis(local: i64, chronology: &Chronology) -> Self {
        Self {
            millis_of_day: local.rem_euclid(MS_PER_DAY),
            chronology: chronology.with_utc(),
        }
    }

    /// Parses `HH:mm[:ss[.SSS]]`.
    pub fn parse(text: &str) -> ChronoResult<Self> {
        let chronology = Chronology::iso_utc();
        let local = IsoFormat.parse_local_millis(text, &chronology)?;
        Ok(Self::from_local_millis(local, &chronology))
    }

    #[inline]
    pub fn millis_of_day(&self) -> i64 {
        self.millis_of_day
    }

    pub(crate) fn local_millis(&self) -> i64 {
        self.millis_of_day
    }

    fn field_value(&self, field_type: DateTimeFieldType) -> i32 {
        self.chronology.field(field_type).get(self.millis_of_day)
    }

    /// The value of a time field.
    pub fn get_field(&self, field_type: DateTimeFieldType) -> ChronoResult<i32> {
        if field_type.is_date_field() {
            return Err(ChronoError::argument().with_enum(ErrorMessage::FieldNotSupported));
        }
        Ok(self.field_value(field_type))
    }

    field_accessors! {
        field_value;
        hour_of_day, with_hour_of_day => HourOfDay;
        minute_of_hour, with_minute_of_hour => MinuteOfHour;
        second_of_minute, with_second_of_minute => SecondOfMinute;
        millis_of_second, with_millis_of_second => MillisOfSecond;
        halfday_of_day, with_halfday_of_day => HalfdayOfDay;
        hour_of_halfday, with_hour_of_halfday => HourOfHalfday;
        clockhour_of_day, with_clockhour_of_day => ClockhourOfDay;
        minute_of_day, with_minute_of_day => MinuteOfDay;
        second_of_day, with_second_of_day => SecondOfDay;
    }

    /// Sets a time field.
    pub fn with_field(&self, field_type: DateTimeFieldType, value: i32) -> ChronoResult<Self> {
        self.get_field(field_type)?;
        let millis = self.chronology.field(field_type).set(self.millis_of_day, value)?;
        Ok(Self::from_local_millis(millis, &self.chronology))
    }

    /// Adds an amount of a time unit, wrapping around midnight.
    pub fn with_field_added(&self, unit: DurationFieldType, amount: i32) -> ChronoResult<Self> {
        let Some(unit_millis) = unit.fixed_millis().filter(|m| *m < MS_PER_DAY) else {
            return Err(ChronoError::argument().with_enum(ErrorMessage::FieldNotSupported));
        };
        let delta = (i64::from(amount) * unit_millis).rem_euclid(MS_PER_DAY);
        Ok(Self::from_local_millis(
            self.millis_of_day + delta,
            &self.chronology,
        ))
    }

    unit_arithmetic! {
        plus_hours, minus_hours => Hours;
        plus_minutes, minus_minutes => Minutes;
        plus_seconds, minus_seconds => Seconds;
        plus_millis, minus_millis => Millis;
    }

    /// Adds the time units of a period; date units are ignored.
    pub fn with_period_added(&self, period: &Period, scalar: i32) -> ChronoResult<Self> {
        let mut time = self.clone();
        for (unit, value) in period.iter() {
            if value != 0 && unit.fixed_millis().is_some_and(|m| m < MS_PER_DAY) {
                time = time.with_field_added(unit, utils::checked_mul_i32(value, scalar)?)?;
            }
        }
        Ok(time)
    }

    pub fn plus_period(&self, period: &Period) -> ChronoResult<Self> {
        self.with_period_added(period, 1)
    }

    pub fn minus_period(&self, period: &Period) -> ChronoResult<Self> {
        self.with_period_added(period, -1)
    }

    /// Rounds to a boundary of a time field. Rounding up past the last
    /// instant of the day wraps to midnight.
    pub fn round(&self, field_type: DateTimeFieldType, mode: RoundingMode) -> ChronoResult<Self> {
        self.get_field(field_type)?;
        let millis = self.chronology.field(field_type).round(self.millis_of_day, mode)?;
        Ok(Self::from_local_millis(millis, &self.chronology))
    }
}

impl ReadablePartial for LocalTime {
    fn chronology(&self) -> &Chronology {
        &self.chronology
    }

    fn field_types(&self) -> &[DateTimeFieldType] {
        &FIELD_TYPES
    }

    fn values(&self) -> Vec<i32> {
        FIELD_TYPES.iter().map(|t| self.field_value(*t)).collect()
    }
}

impl PartialOrd for LocalTime {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        if self.chronology != other.chronology {
            return None;
        }
        Some(self.millis_of_day.cmp(&other.millis_of_day))
    }
}

impl fmt::Display for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        IsoFormat.print_partial(f, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn fields_and_display() {
        let time = LocalTime::try_new(10, 30, 15, 250, None).unwrap();
        assert_eq!(time.hour_of_day(), 10);
        assert_eq!(time.clockhour_of_day(), 10);
        assert_eq!(time.minute_of_day(), 630);
        assert_eq!(time.values(), [10, 30, 15, 250]);
        assert_eq!(time.to_string(), "10:30:15.250");
        assert!(time.get_field(DateTimeFieldType::DayOfMonth).is_err());
        assert!(LocalTime::try_new(24, 0, 0, 0, None).is_err());
        assert_eq!(LocalTime::MIDNIGHT.to_string(), "00:00:00.000");
    }

    #[test]
    fn arithmetic_wraps_midnight() {
        let time = LocalTime::try_new(23, 30, 0, 0, None).unwrap();
        assert_eq!(time.plus_hours(1).unwrap().to_string(), "00:30:00.000");
        assert_eq!(time.minus_hours(24).unwrap(), time);
        assert_eq!(
            LocalTime::MIDNIGHT.minus_millis(1).unwrap().to_string(),
            "23:59:59.999"
        );
        assert!(time.with_field_added(DurationFieldType::Days, 1).is_err());
        let period = Period::new(0, 0, 0, 3, 1, 15, 0, 0);
        assert_eq!(time.plus_period(&period).unwrap().to_string(), "00:45:00.000");
    }

    #[test]
    fn with_and_round() {
        let time = LocalTime::try_new(10, 30, 15, 250, None).unwrap();
        assert_eq!(time.with_hour_of_day(7).unwrap().to_string(), "07:30:15.250");
        assert!(time.with_minute_of_hour(60).is_err());
        let rounded = time.round(DateTimeFieldType::HourOfDay, RoundingMode::HalfCeiling);
        assert_eq!(rounded.unwrap().to_string(), "11:00:00.000");
        let late = LocalTime::try_new(23, 45, 0, 0, None).unwrap();
        let rounded = late.round(DateTimeFieldType::HourOfDay, RoundingMode::Ceiling);
        assert_eq!(rounded.unwrap(), LocalTime::MIDNIGHT);
        assert_eq!(LocalTime::parse("10:30").unwrap().to_string(), "10:30:00.000");
    }
}
