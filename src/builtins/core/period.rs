//! Calendar periods: counts of years, months, weeks and smaller units.

use alloc::string::String;
use core::fmt::{self, Write};

use super::period_type::standard_slot;
use crate::{
    builtins::core::{partial::is_contiguous, DateTime, Duration, PeriodType, ReadablePartial},
    error::ErrorMessage,
    fields::DurationFieldType,
    utils::{self, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND, MS_PER_WEEK},
    ChronoError, ChronoResult, Chronology,
};

#[cfg(test)]
mod tests;

const YEARS: usize = 0;
const MONTHS: usize = 1;
const WEEKS: usize = 2;
const DAYS: usize = 3;
const HOURS: usize = 4;
const MINUTES: usize = 5;
const SECONDS: usize = 6;
const MILLIS: usize = 7;

/// The milliseconds in one unit of each slot from weeks down.
const SLOT_MILLIS: [i64; 6] = [
    MS_PER_WEEK,
    MS_PER_DAY,
    MS_PER_HOUR,
    MS_PER_MINUTE,
    MS_PER_SECOND,
    1,
];

/// A span of calendar units, such as 1 month and 4 weeks.
///
/// Periods hold a value for each unit of their [`PeriodType`] and never
/// carry between units: adding 40 minutes to 2 hours 30 minutes gives 2
/// hours 70 minutes until [`Period::normalized_standard`] is called. The
/// length of a period in milliseconds depends on where it is applied, so
/// periods only become exact when added to an instant.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    values: [i32; 8],
    period_type: PeriodType,
}

macro_rules! unit_methods {
    ($($slot:ident: $get:ident, $from:ident, $with:ident, $plus:ident, $minus:ident;)+) => {
        $(
            #[inline]
            pub const fn $get(&self) -> i32 {
                self.values[$slot]
            }

            /// A standard period holding only this unit.
            pub fn $from(value: i32) -> Self {
                let mut values = [0; 8];
                values[$slot] = value;
                Self::from_slots(values, PeriodType::standard())
            }

            pub fn $with(&self, value: i32) -> ChronoResult<Self> {
                self.with_slot($slot, value)
            }

            pub fn $plus(&self, value: i32) -> ChronoResult<Self> {
                self.plus_slot($slot, value)
            }

            pub fn $minus(&self, value: i32) -> ChronoResult<Self> {
                self.plus_slot($slot, utils::checked_mul_i32(value, -1)?)
            }
        )+
    };
}

impl Period {
    const fn from_slots(values: [i32; 8], period_type: PeriodType) -> Self {
        Self {
            values,
            period_type,
        }
    }

    /// The empty standard period.
    pub const fn zero() -> Self {
        Self::from_slots([0; 8], PeriodType::standard())
    }

    /// A standard period from all eight units.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        years: i32,
        months: i32,
        weeks: i32,
        days: i32,
        hours: i32,
        minutes: i32,
        seconds: i32,
        millis: i32,
    ) -> Self {
        Self::from_slots(
            [years, months, weeks, days, hours, minutes, seconds, millis],
            PeriodType::standard(),
        )
    }

    /// A standard period from the time units.
    pub const fn new_time(hours: i32, minutes: i32, seconds: i32, millis: i32) -> Self {
        Self::new(0, 0, 0, 0, hours, minutes, seconds, millis)
    }

    /// A period from all eight units with a narrower type.
    ///
    /// A nonzero value for a unit outside `period_type` is an argument error.
    pub fn try_new_with_type(values: [i32; 8], period_type: PeriodType) -> ChronoResult<Self> {
        for (slot, value) in values.iter().enumerate() {
            if *value != 0 && !period_type.supports_slot(slot) {
                return Err(ChronoError::argument().with_enum(ErrorMessage::PeriodTypeMismatch));
            }
        }
        Ok(Self::from_slots(values, period_type))
    }

    /// A period from values indexed by `period_type`.
    pub(crate) fn from_indexed(period_type: PeriodType, indexed: &[i32]) -> Self {
        let mut values = [0; 8];
        for (unit, value) in period_type.field_types().zip(indexed) {
            if let Some(slot) = standard_slot(unit) {
                values[slot] = *value;
            }
        }
        Self::from_slots(values, period_type)
    }

    /// The period between two instants in `chronology`.
    pub fn between_millis(
        start: i64,
        end: i64,
        period_type: PeriodType,
        chronology: &Chronology,
    ) -> ChronoResult<Self> {
        let values = chronology.period_values(period_type, start, end)?;
        chrono_assert!(
            values.len() == period_type.size(),
            "{} values for {period_type}",
            values.len()
        );
        Ok(Self::from_indexed(period_type, &values))
    }

    /// The period between two date-times, in the chronology of `start`.
    ///
    /// `2013-01-31` to `2013-03-30` is 1 month, 4 weeks and 2 days.
    pub fn between(
        start: &DateTime,
        end: &DateTime,
        period_type: Option<PeriodType>,
    ) -> ChronoResult<Self> {
        Self::between_millis(
            start.millis(),
            end.millis(),
            period_type.unwrap_or_default(),
            start.chronology(),
        )
    }

    /// The period between two partials with the same contiguous fields.
    pub fn between_partials(
        start: &(impl ReadablePartial + ?Sized),
        end: &(impl ReadablePartial + ?Sized),
        period_type: Option<PeriodType>,
    ) -> ChronoResult<Self> {
        if start.field_types() != end.field_types() {
            return Err(ChronoError::argument()
                .with_message("partials must have the same set of fields"));
        }
        if !is_contiguous(start) {
            return Err(ChronoError::argument().with_message("partial fields must be contiguous"));
        }
        let chronology = start.chronology().with_utc();
        let base = chronology.leap_year_start()?;
        let start = chronology.set_partial(start, base)?;
        let end = chronology.set_partial(end, base)?;
        Self::between_millis(start, end, period_type.unwrap_or_default(), &chronology)
    }

    /// Splits a duration into the precise units of `period_type`.
    pub fn from_duration_millis(
        duration: i64,
        period_type: PeriodType,
        chronology: &Chronology,
    ) -> ChronoResult<Self> {
        let values = chronology.period_values_for_duration(period_type, duration)?;
        Ok(Self::from_indexed(period_type, &values))
    }

    // ==== Accessors ====

    #[inline]
    pub fn period_type(&self) -> PeriodType {
        self.period_type
    }

    /// The number of units of the period type.
    #[inline]
    pub fn size(&self) -> usize {
        self.period_type.size()
    }

    pub fn field_type(&self, index: usize) -> Option<DurationFieldType> {
        self.period_type.field_type(index)
    }

    /// The value at an index of the period type.
    pub fn value(&self, index: usize) -> Option<i32> {
        self.field_type(index)
            .and_then(standard_slot)
            .map(|slot| self.values[slot])
    }

    /// The value of `unit`, zero when the unit is not supported.
    pub fn get(&self, unit: DurationFieldType) -> i32 {
        standard_slot(unit).map_or(0, |slot| self.values[slot])
    }

    pub fn is_supported(&self, unit: DurationFieldType) -> bool {
        self.period_type.is_supported(unit)
    }

    /// The supported units and their values, largest first.
    pub fn iter(&self) -> impl Iterator<Item = (DurationFieldType, i32)> + '_ {
        self.period_type
            .field_types()
            .filter_map(|unit| standard_slot(unit).map(|slot| (unit, self.values[slot])))
    }

    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|v| *v == 0)
    }

    unit_methods! {
        YEARS: years, from_years, with_years, plus_years, minus_years;
        MONTHS: months, from_months, with_months, plus_months, minus_months;
        WEEKS: weeks, from_weeks, with_weeks, plus_weeks, minus_weeks;
        DAYS: days, from_days, with_days, plus_days, minus_days;
        HOURS: hours, from_hours, with_hours, plus_hours, minus_hours;
        MINUTES: minutes, from_minutes, with_minutes, plus_minutes, minus_minutes;
        SECONDS: seconds, from_seconds, with_seconds, plus_seconds, minus_seconds;
        MILLIS: millis, from_millis, with_millis, plus_millis, minus_millis;
    }

    // ==== Per unit arithmetic ====

    fn unsupported_slot() -> ChronoError {
        ChronoError::unsupported().with_enum(ErrorMessage::FieldNotSupported)
    }

    fn with_slot(&self, slot: usize, value: i32) -> ChronoResult<Self> {
        if !self.period_type.supports_slot(slot) {
            return Err(Self::unsupported_slot());
        }
        let mut values = self.values;
        values[slot] = value;
        Ok(Self::from_slots(values, self.period_type))
    }

    fn plus_slot(&self, slot: usize, value: i32) -> ChronoResult<Self> {
        if value == 0 {
            return Ok(*self);
        }
        if !self.period_type.supports_slot(slot) {
            return Err(Self::unsupported_slot());
        }
        let mut values = self.values;
        values[slot] = utils::checked_add_i32(values[slot], value)?;
        Ok(Self::from_slots(values, self.period_type))
    }

    /// Sets the value of `unit`.
    pub fn with_field(&self, unit: DurationFieldType, value: i32) -> ChronoResult<Self> {
        let slot = standard_slot(unit).ok_or_else(Self::unsupported_slot)?;
        self.with_slot(slot, value)
    }

    /// Adds to the value of `unit`.
    pub fn with_field_added(&self, unit: DurationFieldType, value: i32) -> ChronoResult<Self> {
        if value == 0 {
            return Ok(*self);
        }
        let slot = standard_slot(unit).ok_or_else(Self::unsupported_slot)?;
        self.plus_slot(slot, value)
    }

    /// Adds each unit of `other` to the same unit of this period.
    pub fn plus(&self, other: &Self) -> ChronoResult<Self> {
        other
            .values
            .iter()
            .enumerate()
            .try_fold(*self, |period, (slot, value)| period.plus_slot(slot, *value))
    }

    /// Subtracts each unit of `other` from the same unit of this period.
    pub fn minus(&self, other: &Self) -> ChronoResult<Self> {
        self.plus(&other.negated()?)
    }

    /// Multiplies every unit by `scalar`.
    pub fn multiplied_by(&self, scalar: i32) -> ChronoResult<Self> {
        if scalar == 1 || self.is_zero() {
            return Ok(*self);
        }
        let mut values = self.values;
        for value in &mut values {
            *value = utils::checked_mul_i32(*value, scalar)?;
        }
        Ok(Self::from_slots(values, self.period_type))
    }

    pub fn negated(&self) -> ChronoResult<Self> {
        self.multiplied_by(-1)
    }

    /// Moves the values to another period type.
    ///
    /// Dropping a unit that holds a nonzero value is an argument error.
    pub fn with_period_type(&self, period_type: PeriodType) -> ChronoResult<Self> {
        Self::try_new_with_type(self.values, period_type)
    }

    // ==== Standard conversions ====

    fn check_years_and_months(&self, target: &str) -> ChronoResult<()> {
        if self.values[MONTHS] != 0 || self.values[YEARS] != 0 {
            return Err(ChronoError::unsupported().with_message(alloc::format!(
                "cannot convert to {target}: {}",
                ErrorMessage::YearsAndMonthsUnsupported.to_str()
            )));
        }
        Ok(())
    }

    /// Converts to a whole number of the unit with index `unit` in
    /// `SLOT_MILLIS`, treating days as 24 hours and weeks as 7 days.
    ///
    /// Units smaller than the target are summed and truncated on their own,
    /// then added to the converted larger units.
    fn to_standard_unit(&self, target: usize) -> ChronoResult<i32> {
        let unit = SLOT_MILLIS[target];
        let mut larger: i128 = 0;
        let mut smaller: i128 = 0;
        for (index, millis) in SLOT_MILLIS.iter().enumerate() {
            let value = i128::from(self.values[WEEKS + index]) * i128::from(*millis);
            if index <= target {
                larger += value / i128::from(unit);
            } else {
                smaller += value;
            }
        }
        utils::to_i32(larger + smaller / i128::from(unit))
    }

    /// Converts to standard weeks, failing when years or months are set.
    pub fn to_standard_weeks(&self) -> ChronoResult<i32> {
        self.check_years_and_months("weeks")?;
        self.to_standard_unit(0)
    }

    pub fn to_standard_days(&self) -> ChronoResult<i32> {
        self.check_years_and_months("days")?;
        self.to_standard_unit(1)
    }

    pub fn to_standard_hours(&self) -> ChronoResult<i32> {
        self.check_years_and_months("hours")?;
        self.to_standard_unit(2)
    }

    pub fn to_standard_minutes(&self) -> ChronoResult<i32> {
        self.check_years_and_months("minutes")?;
        self.to_standard_unit(3)
    }

    pub fn to_standard_seconds(&self) -> ChronoResult<i32> {
        self.check_years_and_months("seconds")?;
        self.to_standard_unit(4)
    }

    /// The length of the period with standard days and weeks.
    pub fn to_standard_duration(&self) -> ChronoResult<Duration> {
        self.check_years_and_months("a duration")?;
        self.standard_millis().map(Duration::from_millis)
    }

    fn standard_millis(&self) -> ChronoResult<i64> {
        SLOT_MILLIS
            .iter()
            .enumerate()
            .try_fold(0i64, |total, (index, millis)| {
                let value = utils::checked_mul(i64::from(self.values[WEEKS + index]), *millis)?;
                utils::checked_add(total, value)
            })
    }

    /// Carries overflowing units into larger ones using standard lengths.
    ///
    /// Weeks and smaller units are summed to milliseconds and split again
    /// into the precise units of `period_type`. Years and months are
    /// combined as twelve months to the year and never carried into days.
    pub fn normalized_standard(&self, period_type: Option<PeriodType>) -> ChronoResult<Self> {
        let period_type = period_type.unwrap_or_default();
        let millis = self.standard_millis()?;
        let mut result = Self::from_duration_millis(millis, period_type, &Chronology::iso_utc())?;
        let (years, months) = (self.values[YEARS], self.values[MONTHS]);
        if years != 0 || months != 0 {
            let mut total_months = i64::from(years) * 12 + i64::from(months);
            if period_type.is_supported(DurationFieldType::Years) {
                let years = utils::to_i32(total_months / 12)?;
                result = result.with_years(years)?;
                total_months -= i64::from(years) * 12;
            }
            if period_type.is_supported(DurationFieldType::Months) {
                let months = utils::to_i32(total_months)?;
                result = result.with_months(months)?;
                total_months -= i64::from(months);
            }
            if total_months != 0 {
                return Err(ChronoError::unsupported()
                    .with_enum(ErrorMessage::NormalizeMissingYearsOrMonths));
            }
        }
        Ok(result)
    }
}

impl fmt::Display for Period {
    /// Writes the ISO-8601 form, such as `P1Y2M3W4DT5H6M7.008S`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = &self.values;
        if self.is_zero() {
            return f.write_str(match self.period_type.field_types().last() {
                Some(DurationFieldType::Years) => "P0Y",
                Some(DurationFieldType::Months) => "P0M",
                Some(DurationFieldType::Weeks) => "P0W",
                Some(DurationFieldType::Days) => "P0D",
                Some(DurationFieldType::Hours) => "PT0H",
                Some(DurationFieldType::Minutes) => "PT0M",
                _ => "PT0S",
            });
        }
        let mut out = String::from("P");
        for (slot, designator) in [(YEARS, 'Y'), (MONTHS, 'M'), (WEEKS, 'W'), (DAYS, 'D')] {
            if v[slot] != 0 {
                write!(out, "{}{designator}", v[slot])?;
            }
        }
        let seconds_millis = i64::from(v[SECONDS]) * 1000 + i64::from(v[MILLIS]);
        if v[HOURS] != 0 || v[MINUTES] != 0 || seconds_millis != 0 {
            out.push('T');
            for (slot, designator) in [(HOURS, 'H'), (MINUTES, 'M')] {
                if v[slot] != 0 {
                    write!(out, "{}{designator}", v[slot])?;
                }
            }
            if seconds_millis != 0 {
                let sign = if seconds_millis < 0 { "-" } else { "" };
                let magnitude = seconds_millis.unsigned_abs();
                write!(out, "{sign}{}", magnitude / 1000)?;
                if magnitude % 1000 != 0 {
                    write!(out, ".{:03}", magnitude % 1000)?;
                }
                out.push('S');
            }
        }
        f.write_str(&out)
    }
}
