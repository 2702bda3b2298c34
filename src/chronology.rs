//! A calendar system paired with a time zone.
//!
//! A [`Chronology`] is the entry point for all field arithmetic: value types
//! ask it for a [`DateTimeField`] or [`DurationField`], and periods, partials
//! and intervals route their conversions through it.

use alloc::vec::Vec;
use core::fmt;

use crate::{
    builtins::core::{Period, PeriodType, ReadablePartial},
    calendar::CalendarSystem,
    error::ErrorMessage,
    fields::{DateTimeField, DateTimeFieldType, DurationField, DurationFieldType, LocalFields},
    timezone::TimeZone,
    utils::{self, verify_bounds, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND},
    ChronoError, ChronoResult,
};

#[cfg(test)]
mod tests;

/// A calendar system and the zone its wall clock is read in.
///
/// Chronologies are immutable; [`Chronology::with_zone`] and
/// [`Chronology::with_utc`] return new values sharing the same calendar
/// rules.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Chronology {
    calendar: CalendarSystem,
    zone: TimeZone,
}

macro_rules! field_accessors {
    ($($name:ident => $variant:ident),+ $(,)?) => {
        $(
            #[inline]
            pub fn $name(&self) -> DateTimeField<'_> {
                self.field(DateTimeFieldType::$variant)
            }
        )+
    };
}

macro_rules! duration_accessors {
    ($($name:ident => $variant:ident),+ $(,)?) => {
        $(
            #[inline]
            pub fn $name(&self) -> DurationField<'_> {
                self.duration_field(DurationFieldType::$variant)
            }
        )+
    };
}

impl Chronology {
    pub const fn new(calendar: CalendarSystem, zone: TimeZone) -> Self {
        Self { calendar, zone }
    }

    /// The ISO chronology in UTC.
    pub const fn iso_utc() -> Self {
        Self::new(CalendarSystem::Iso, TimeZone::Utc)
    }

    /// The ISO chronology in `zone`.
    pub const fn iso(zone: TimeZone) -> Self {
        Self::new(CalendarSystem::Iso, zone)
    }

    /// `calendar` in UTC.
    pub const fn utc(calendar: CalendarSystem) -> Self {
        Self::new(calendar, TimeZone::Utc)
    }

    #[inline]
    pub fn calendar(&self) -> CalendarSystem {
        self.calendar
    }

    #[inline]
    pub fn zone(&self) -> &TimeZone {
        &self.zone
    }

    /// Returns this chronology with its zone replaced by UTC.
    pub fn with_utc(&self) -> Self {
        self.with_zone(TimeZone::Utc)
    }

    /// Returns this chronology with its zone replaced.
    pub fn with_zone(&self, zone: TimeZone) -> Self {
        Self::new(self.calendar, zone)
    }

    #[inline]
    pub(crate) fn local_fields(&self) -> LocalFields {
        LocalFields::new(self.calendar)
    }

    // ==== Fields ====

    /// The field for `field_type`.
    #[inline]
    pub fn field(&self, field_type: DateTimeFieldType) -> DateTimeField<'_> {
        DateTimeField::new(self, field_type)
    }

    /// The duration field for `unit`.
    #[inline]
    pub fn duration_field(&self, unit: DurationFieldType) -> DurationField<'_> {
        DurationField::new(self, unit)
    }

    field_accessors! {
        era => Era,
        year_of_era => YearOfEra,
        century_of_era => CenturyOfEra,
        year_of_century => YearOfCentury,
        year => Year,
        day_of_year => DayOfYear,
        month_of_year => MonthOfYear,
        day_of_month => DayOfMonth,
        weekyear_of_century => WeekyearOfCentury,
        weekyear => Weekyear,
        week_of_weekyear => WeekOfWeekyear,
        day_of_week => DayOfWeek,
        halfday_of_day => HalfdayOfDay,
        hour_of_halfday => HourOfHalfday,
        clockhour_of_halfday => ClockhourOfHalfday,
        clockhour_of_day => ClockhourOfDay,
        hour_of_day => HourOfDay,
        minute_of_day => MinuteOfDay,
        minute_of_hour => MinuteOfHour,
        second_of_day => SecondOfDay,
        second_of_minute => SecondOfMinute,
        millis_of_day => MillisOfDay,
        millis_of_second => MillisOfSecond,
    }

    duration_accessors! {
        eras => Eras,
        centuries => Centuries,
        weekyears => Weekyears,
        years => Years,
        months => Months,
        weeks => Weeks,
        days => Days,
        halfdays => Halfdays,
        hours => Hours,
        minutes => Minutes,
        seconds => Seconds,
        millis => Millis,
    }

    // ==== Construction of instants ====

    /// The instant of a date and a millisecond of the day.
    ///
    /// Components are validated from the year down. A wall clock time that
    /// the zone skips is an argument error.
    pub fn date_time_millis(
        &self,
        year: i32,
        month: i32,
        day: i32,
        millis_of_day: i32,
    ) -> ChronoResult<i64> {
        let millis_of_day = i64::from(millis_of_day);
        let local = self.local_date_millis(year, month, day, millis_of_day)?;
        self.zone.local_to_utc_strict(local)
    }

    /// The instant of a date and a time of day.
    #[allow(clippy::too_many_arguments)]
    pub fn date_time_millis_hms(
        &self,
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: i32,
        millis: i32,
    ) -> ChronoResult<i64> {
        let local = self.local_date_time_millis(year, month, day, hour, minute, second, millis)?;
        self.zone.local_to_utc_strict(local)
    }

    /// The local milliseconds of a date and time of day, validated but not
    /// resolved through the zone.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn local_date_time_millis(
        &self,
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: i32,
        millis: i32,
    ) -> ChronoResult<i64> {
        let local = self.local_date_millis(year, month, day, 0)?;
        utils::checked_add(local, Self::time_millis(hour, minute, second, millis)?)
    }

    /// Validates a time of day and returns its millisecond of the day.
    pub(crate) fn time_millis(
        hour: i32,
        minute: i32,
        second: i32,
        millis: i32,
    ) -> ChronoResult<i64> {
        verify_bounds(DateTimeFieldType::HourOfDay.name(), i64::from(hour), 0, 23)?;
        verify_bounds(DateTimeFieldType::MinuteOfHour.name(), i64::from(minute), 0, 59)?;
        verify_bounds(DateTimeFieldType::SecondOfMinute.name(), i64::from(second), 0, 59)?;
        verify_bounds(DateTimeFieldType::MillisOfSecond.name(), i64::from(millis), 0, 999)?;
        Ok(i64::from(hour) * MS_PER_HOUR
            + i64::from(minute) * MS_PER_MINUTE
            + i64::from(second) * MS_PER_SECOND
            + i64::from(millis))
    }

    pub(crate) fn local_date_millis(
        &self,
        year: i32,
        month: i32,
        day: i32,
        millis_of_day: i64,
    ) -> ChronoResult<i64> {
        let local = self.local_fields().date_millis(
            i64::from(year),
            i64::from(month),
            i64::from(day),
            0,
        )?;
        verify_bounds(
            DateTimeFieldType::MillisOfDay.name(),
            millis_of_day,
            0,
            utils::MS_PER_DAY - 1,
        )?;
        utils::checked_add(local, millis_of_day)
    }

    // ==== Partials ====

    /// Validates `values` for the field types of `partial`.
    pub fn validate(
        &self,
        partial: &(impl ReadablePartial + ?Sized),
        values: &[i32],
    ) -> ChronoResult<()> {
        self.validate_fields(partial.field_types(), values)
    }

    /// Validates values against their field types, first against each
    /// field's overall bounds and then against the bounds implied by the
    /// other values.
    pub fn validate_fields(&self, types: &[DateTimeFieldType], values: &[i32]) -> ChronoResult<()> {
        if types.len() != values.len() {
            return Err(ChronoError::argument().with_enum(ErrorMessage::ValuesLengthMismatch));
        }
        for (field_type, value) in types.iter().zip(values) {
            let field = self.field(*field_type);
            verify_bounds(
                field.name(),
                i64::from(*value),
                i64::from(field.minimum_value()),
                i64::from(field.maximum_value()),
            )?;
        }
        for (field_type, value) in types.iter().zip(values) {
            let field = self.field(*field_type);
            verify_bounds(
                field.name(),
                i64::from(*value),
                i64::from(field.minimum_value_for_partial(types, values)),
                i64::from(field.maximum_value_for_partial(types, values)),
            )?;
        }
        Ok(())
    }

    /// Reads the field values of `partial`'s field types from an instant.
    pub fn get_partial(&self, partial: &(impl ReadablePartial + ?Sized), instant: i64) -> Vec<i32> {
        partial
            .field_types()
            .iter()
            .map(|field_type| self.field(*field_type).get(instant))
            .collect()
    }

    /// Writes every value of `partial` into an instant, largest field first.
    pub fn set_partial(
        &self,
        partial: &(impl ReadablePartial + ?Sized),
        instant: i64,
    ) -> ChronoResult<i64> {
        let values = partial.values();
        partial
            .field_types()
            .iter()
            .zip(values)
            .try_fold(instant, |instant, (field_type, value)| {
                self.field(*field_type).set(instant, value)
            })
    }

    /// The first instant of the first leap year from 2000 onward.
    ///
    /// Partials without a year are set on top of it so that the leap day
    /// of the calendar is accepted.
    pub(crate) fn leap_year_start(&self) -> ChronoResult<i64> {
        // 2000-01-01T00:00Z
        const Y2K: i64 = 946_684_800_000;
        let year = self.year();
        let mut instant = year.round_floor(Y2K)?;
        for _ in 0..4 {
            if year.is_leap(instant) {
                return Ok(instant);
            }
            instant = year.add(instant, 1)?;
        }
        Err(ChronoError::internal())
    }

    // ==== Periods and durations ====

    /// Splits the span from `start` to `end` into the units of
    /// `period_type`, largest unit first.
    ///
    /// Each unit takes the whole number of units that fit in the remaining
    /// span; the start then advances by that amount.
    pub fn period_values(
        &self,
        period_type: PeriodType,
        start: i64,
        end: i64,
    ) -> ChronoResult<Vec<i32>> {
        let mut values = alloc::vec![0; period_type.size()];
        if start == end {
            return Ok(values);
        }
        let mut start = start;
        for (slot, unit) in values.iter_mut().zip(period_type.field_types()) {
            let field = self.duration_field(unit);
            let value = field.difference(end, start)?;
            if value != 0 {
                start = field.add(start, i64::from(value))?;
            }
            *slot = value;
        }
        Ok(values)
    }

    /// Splits a duration into the precise units of `period_type`.
    ///
    /// Imprecise units stay zero and the remainder ends up in the smallest
    /// precise unit.
    pub fn period_values_for_duration(
        &self,
        period_type: PeriodType,
        duration: i64,
    ) -> ChronoResult<Vec<i32>> {
        let mut values = alloc::vec![0; period_type.size()];
        if duration == 0 {
            return Ok(values);
        }
        let mut current = 0;
        for (slot, unit) in values.iter_mut().zip(period_type.field_types()) {
            let field = self.duration_field(unit);
            if field.is_precise() {
                let value = field.difference(duration, current)?;
                current = field.add(current, i64::from(value))?;
                *slot = value;
            }
        }
        Ok(values)
    }

    /// Adds `period` multiplied by `scalar` to an instant, largest unit
    /// first.
    pub fn add_period(&self, period: &Period, instant: i64, scalar: i32) -> ChronoResult<i64> {
        if scalar == 0 {
            return Ok(instant);
        }
        period
            .iter()
            .filter(|(_, value)| *value != 0)
            .try_fold(instant, |instant, (unit, value)| {
                let amount = utils::checked_mul(i64::from(value), i64::from(scalar))?;
                self.duration_field(unit).add(instant, amount)
            })
    }

    /// Adds `duration` milliseconds multiplied by `scalar` to an instant.
    pub fn add_duration(&self, instant: i64, duration: i64, scalar: i32) -> ChronoResult<i64> {
        if duration == 0 || scalar == 0 {
            return Ok(instant);
        }
        let amount = utils::checked_mul(duration, i64::from(scalar))?;
        utils::checked_add(instant, amount)
    }
}

impl fmt::Display for Chronology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.calendar, self.zone.id())
    }
}
