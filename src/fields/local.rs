//! Field arithmetic on local milliseconds.
//!
//! Local milliseconds count from 1970-01-01T00:00 on the wall clock of a
//! chronology's zone, so every operation here is free of offsets. The zoned
//! wrappers in the parent module translate to and from absolute instants.

use super::types::{DateTimeFieldType, DurationFieldType};
use crate::{
    calendar::{CalendarRules, CalendarSystem},
    error::ErrorMessage,
    utils::{
        self, checked_add, checked_mul, day_of_week_from_days, floor_div, join_millis,
        split_millis, verify_bounds, wrap_value, MS_PER_DAY, MS_PER_WEEK,
    },
    ChronoError, ChronoResult, ChronoUnwrap,
};

/// Days before March 1st in a leap year, the point after which a leap day
/// shifts the remainder of a year.
const FEB_29_MILLIS: i64 = 59 * MS_PER_DAY;
const WEEK_53_MILLIS: i64 = 52 * MS_PER_WEEK;
const MIN_DAYS_IN_FIRST_WEEK: i64 = 4;

/// Field arithmetic for one calendar system on local milliseconds.
#[derive(Clone, Copy)]
pub(crate) struct LocalFields {
    calendar: CalendarSystem,
    rules: &'static dyn CalendarRules,
}

impl core::fmt::Debug for LocalFields {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("LocalFields").field(&self.calendar).finish()
    }
}

impl LocalFields {
    pub(crate) fn new(calendar: CalendarSystem) -> Self {
        Self {
            calendar,
            rules: calendar.rules(),
        }
    }

    // ==== Date helpers ====

    #[inline]
    fn ymd(&self, local: i64) -> (i64, i64, i64) {
        self.rules.ymd_from_days(split_millis(local).0)
    }

    #[inline]
    fn millis_of_day(local: i64) -> i64 {
        split_millis(local).1
    }

    fn check_internal_year(&self, year: i64, field: DateTimeFieldType) -> ChronoResult<()> {
        let (min, max) = (self.rules.min_year(), self.rules.max_year());
        if year < min || year > max {
            return Err(ChronoError::field_value(
                field.name(),
                self.calendar.public_year(year),
                self.calendar.public_year(min),
                max,
            ));
        }
        Ok(())
    }

    /// Local millis of a date and a time of day, with the date validated.
    pub(crate) fn date_millis(
        &self,
        year: i64,
        month: i64,
        day: i64,
        millis_of_day: i64,
    ) -> ChronoResult<i64> {
        let year_field = DateTimeFieldType::Year;
        let (min, max) = self.bounds(year_field);
        verify_bounds(year_field.name(), year, min, max)?;
        let internal = self.public_to_internal_year(year, year_field)?;
        verify_bounds(
            DateTimeFieldType::MonthOfYear.name(),
            month,
            1,
            self.rules.months_in_year(),
        )?;
        verify_bounds(
            DateTimeFieldType::DayOfMonth.name(),
            day,
            1,
            self.rules.days_in_year_month(internal, month),
        )?;
        join_millis(self.rules.days_from_ymd(internal, month, day), millis_of_day)
    }

    fn public_to_internal_year(&self, year: i64, field: DateTimeFieldType) -> ChronoResult<i64> {
        if year == 0 && !self.calendar.has_year_zero() {
            return Err(ChronoError::field_value_rejected(
                field.name(),
                0,
                "the calendar has no year zero",
            ));
        }
        Ok(self.calendar.internal_year(year))
    }

    fn with_internal_year(&self, local: i64, year: i64) -> ChronoResult<i64> {
        self.check_internal_year(year, DateTimeFieldType::Year)?;
        let (_, month, day) = self.ymd(local);
        let day = day.min(self.rules.days_in_year_month(year, month));
        join_millis(
            self.rules.days_from_ymd(year, month, day),
            Self::millis_of_day(local),
        )
    }

    fn year_start_millis(&self, year: i64) -> ChronoResult<i64> {
        join_millis(self.rules.year_start_days(year), 0)
    }

    fn month_start_millis(&self, year: i64, month: i64) -> ChronoResult<i64> {
        join_millis(self.rules.month_start_days(year, month), 0)
    }

    // ==== Week helpers ====

    fn first_week_start_days(&self, year: i64) -> i64 {
        let jan1 = self.rules.year_start_days(year);
        let dow = day_of_week_from_days(jan1);
        if dow > 8 - MIN_DAYS_IN_FIRST_WEEK {
            jan1 + (8 - dow)
        } else {
            jan1 - (dow - 1)
        }
    }

    fn weeks_in_weekyear(&self, year: i64) -> i64 {
        (self.first_week_start_days(year + 1) - self.first_week_start_days(year)) / 7
    }

    fn week_of_weekyear_in(&self, days: i64, year: i64) -> i64 {
        let first = self.first_week_start_days(year);
        if days < first {
            return self.weeks_in_weekyear(year - 1);
        }
        if days >= self.first_week_start_days(year + 1) {
            return 1;
        }
        (days - first) / 7 + 1
    }

    fn internal_weekyear(&self, days: i64) -> i64 {
        let year = self.rules.year_from_days(days);
        match self.week_of_weekyear_in(days, year) {
            1 => self.rules.year_from_days(days + 7),
            week if week > 51 => self.rules.year_from_days(days - 14),
            _ => year,
        }
    }

    fn week_of_weekyear(&self, days: i64) -> i64 {
        self.week_of_weekyear_in(days, self.rules.year_from_days(days))
    }

    fn with_internal_weekyear(&self, local: i64, weekyear: i64) -> ChronoResult<i64> {
        self.check_internal_year(weekyear, DateTimeFieldType::Weekyear)?;
        let (days, millis_of_day) = split_millis(local);
        let week = self
            .week_of_weekyear(days)
            .min(self.weeks_in_weekyear(weekyear));
        let dow = day_of_week_from_days(days);
        let days = self.first_week_start_days(weekyear) + (week - 1) * 7 + (dow - 1);
        join_millis(days, millis_of_day)
    }

    fn weekyear_floor(&self, local: i64) -> ChronoResult<i64> {
        let floor = self.round_floor(DateTimeFieldType::WeekOfWeekyear, local)?;
        let week = self.week_of_weekyear(split_millis(floor).0);
        utils::checked_sub(floor, (week - 1) * MS_PER_WEEK)
    }

    // ==== Era and century helpers ====

    fn year_of_era(&self, year: i64) -> i64 {
        if self.calendar.is_single_era() || year > 0 {
            year
        } else {
            1 - year
        }
    }

    /// The internal year for a year of era, keeping the era of `year`.
    fn year_from_year_of_era(&self, year: i64, year_of_era: i64) -> i64 {
        if self.calendar.is_single_era() || year > 0 {
            year_of_era
        } else {
            1 - year_of_era
        }
    }

    /// Splits a year into the number that centuries are counted from.
    fn century_base(&self, year: i64) -> i64 {
        if self.calendar.has_zero_based_centuries() {
            year.abs()
        } else {
            self.year_of_era(year) + 99
        }
    }

    fn year_from_century_base(&self, year: i64, base: i64) -> i64 {
        if self.calendar.has_zero_based_centuries() {
            if year < 0 {
                -base
            } else {
                base
            }
        } else {
            self.year_from_year_of_era(year, base - 99)
        }
    }

    // ==== Field values ====

    /// Reads a field from a local instant.
    pub(crate) fn get(&self, field: DateTimeFieldType, local: i64) -> i64 {
        use DateTimeFieldType as F;
        let (days, millis_of_day) = split_millis(local);
        match field {
            F::Era => {
                let (year, _, _) = self.rules.ymd_from_days(days);
                i64::from(self.calendar.is_single_era() || year > 0)
            }
            F::YearOfEra => self.year_of_era(self.rules.year_from_days(days)),
            F::CenturyOfEra => floor_div(self.century_base(self.rules.year_from_days(days)), 100),
            F::YearOfCentury => {
                let base = self.century_base(self.rules.year_from_days(days));
                if self.calendar.has_zero_based_centuries() {
                    base % 100
                } else {
                    base.rem_euclid(100) + 1
                }
            }
            F::Year => self.calendar.public_year(self.rules.year_from_days(days)),
            F::DayOfYear => days - self.rules.year_start_days(self.rules.year_from_days(days)) + 1,
            F::MonthOfYear => self.rules.ymd_from_days(days).1,
            F::DayOfMonth => self.rules.ymd_from_days(days).2,
            F::WeekyearOfCentury => {
                let weekyear = self.calendar.public_year(self.internal_weekyear(days));
                if self.calendar.has_zero_based_centuries() {
                    weekyear.rem_euclid(100)
                } else {
                    weekyear.rem_euclid(100) + 1
                }
            }
            F::Weekyear => self.calendar.public_year(self.internal_weekyear(days)),
            F::WeekOfWeekyear => self.week_of_weekyear(days),
            F::DayOfWeek => day_of_week_from_days(days),
            F::HalfdayOfDay => millis_of_day / utils::MS_PER_HALFDAY,
            F::HourOfHalfday => (millis_of_day / utils::MS_PER_HOUR) % 12,
            F::ClockhourOfHalfday => match (millis_of_day / utils::MS_PER_HOUR) % 12 {
                0 => 12,
                hour => hour,
            },
            F::ClockhourOfDay => match millis_of_day / utils::MS_PER_HOUR {
                0 => 24,
                hour => hour,
            },
            F::HourOfDay => millis_of_day / utils::MS_PER_HOUR,
            F::MinuteOfDay => millis_of_day / utils::MS_PER_MINUTE,
            F::MinuteOfHour => (millis_of_day / utils::MS_PER_MINUTE) % 60,
            F::SecondOfDay => millis_of_day / utils::MS_PER_SECOND,
            F::SecondOfMinute => (millis_of_day / utils::MS_PER_SECOND) % 60,
            F::MillisOfDay => millis_of_day,
            F::MillisOfSecond => millis_of_day % 1000,
        }
    }

    /// The context free bounds of a field.
    pub(crate) fn bounds(&self, field: DateTimeFieldType) -> (i64, i64) {
        use DateTimeFieldType as F;
        let calendar = self.calendar;
        let (min_year, max_year) = (calendar.min_year(), calendar.max_year());
        let one_based_century = |year: i64| floor_div(year + 99, 100);
        match field {
            F::Era if calendar.is_single_era() => (1, 1),
            F::Era => (0, 1),
            F::YearOfEra if calendar.is_single_era() => (min_year, max_year),
            F::YearOfEra => (1, max_year),
            F::CenturyOfEra if calendar.has_zero_based_centuries() => (0, max_year / 100),
            F::CenturyOfEra if calendar.is_single_era() => {
                (one_based_century(min_year), one_based_century(max_year))
            }
            F::CenturyOfEra => (1, one_based_century(max_year)),
            F::YearOfCentury | F::WeekyearOfCentury if calendar.has_zero_based_centuries() => {
                (0, 99)
            }
            F::YearOfCentury | F::WeekyearOfCentury => (1, 100),
            F::Year | F::Weekyear => (min_year, max_year),
            F::DayOfYear => (1, 366),
            F::MonthOfYear => (1, self.rules.months_in_year()),
            F::DayOfMonth => (1, self.rules.days_in_month_max(1)),
            F::WeekOfWeekyear => (1, 53),
            F::DayOfWeek => (1, 7),
            F::HalfdayOfDay => (0, 1),
            F::HourOfHalfday => (0, 11),
            F::ClockhourOfHalfday => (1, 12),
            F::ClockhourOfDay => (1, 24),
            F::HourOfDay => (0, 23),
            F::MinuteOfDay => (0, 1_439),
            F::MinuteOfHour | F::SecondOfMinute => (0, 59),
            F::SecondOfDay => (0, 86_399),
            F::MillisOfDay => (0, MS_PER_DAY - 1),
            F::MillisOfSecond => (0, 999),
        }
    }

    /// The bounds of a field at a local instant.
    pub(crate) fn bounds_at(&self, field: DateTimeFieldType, local: i64) -> (i64, i64) {
        let days = split_millis(local).0;
        match field {
            DateTimeFieldType::DayOfMonth => {
                let (year, month, _) = self.rules.ymd_from_days(days);
                (1, self.rules.days_in_year_month(year, month))
            }
            DateTimeFieldType::DayOfYear => {
                (1, self.rules.days_in_year(self.rules.year_from_days(days)))
            }
            DateTimeFieldType::WeekOfWeekyear => {
                (1, self.weeks_in_weekyear(self.internal_weekyear(days)))
            }
            _ => self.bounds(field),
        }
    }

    /// The bounds of a field given the other values of a partial.
    pub(crate) fn bounds_for_partial(
        &self,
        field: DateTimeFieldType,
        types: &[DateTimeFieldType],
        values: &[i32],
    ) -> (i64, i64) {
        let lookup = |wanted: DateTimeFieldType| {
            types
                .iter()
                .position(|t| *t == wanted)
                .and_then(|i| values.get(i))
                .map(|v| i64::from(*v))
        };
        match field {
            DateTimeFieldType::DayOfMonth => match lookup(DateTimeFieldType::MonthOfYear) {
                Some(month) => match lookup(DateTimeFieldType::Year) {
                    Some(year) => (
                        1,
                        self.rules
                            .days_in_year_month(self.calendar.internal_year(year), month),
                    ),
                    None => (1, self.rules.days_in_month_max(month)),
                },
                None => self.bounds(field),
            },
            DateTimeFieldType::DayOfYear => match lookup(DateTimeFieldType::Year) {
                Some(year) => (1, self.rules.days_in_year(self.calendar.internal_year(year))),
                None => self.bounds(field),
            },
            DateTimeFieldType::WeekOfWeekyear => match lookup(DateTimeFieldType::Weekyear) {
                Some(weekyear) => (
                    1,
                    self.weeks_in_weekyear(self.calendar.internal_year(weekyear)),
                ),
                None => self.bounds(field),
            },
            _ => self.bounds(field),
        }
    }

    /// Writes a field, clamping smaller date fields that would become
    /// invalid.
    pub(crate) fn set(
        &self,
        field: DateTimeFieldType,
        local: i64,
        value: i64,
    ) -> ChronoResult<i64> {
        use DateTimeFieldType as F;
        let (min, max) = self.bounds_at(field, local);
        verify_bounds(field.name(), value, min, max)?;
        let (days, millis_of_day) = split_millis(local);
        let year = self.rules.year_from_days(days);
        match field {
            F::Era => {
                if value == self.get(F::Era, local) {
                    return Ok(local);
                }
                self.with_internal_year(local, 1 - year)
            }
            F::YearOfEra => self.with_internal_year(local, self.year_from_year_of_era(year, value)),
            F::CenturyOfEra => {
                let base = self.century_base(year);
                let base = value * 100 + base.rem_euclid(100);
                self.with_internal_year(local, self.year_from_century_base(year, base))
            }
            F::YearOfCentury => {
                let base = self.century_base(year);
                let remainder = if self.calendar.has_zero_based_centuries() {
                    value
                } else {
                    value - 1
                };
                let base = floor_div(base, 100) * 100 + remainder;
                self.with_internal_year(local, self.year_from_century_base(year, base))
            }
            F::Year => {
                let internal = self.public_to_internal_year(value, field)?;
                self.with_internal_year(local, internal)
            }
            F::DayOfYear => {
                join_millis(self.rules.year_start_days(year) + value - 1, millis_of_day)
            }
            F::MonthOfYear => {
                let (_, _, day) = self.rules.ymd_from_days(days);
                let day = day.min(self.rules.days_in_year_month(year, value));
                join_millis(self.rules.days_from_ymd(year, value, day), millis_of_day)
            }
            F::DayOfMonth => {
                let (_, month, _) = self.rules.ymd_from_days(days);
                join_millis(self.rules.days_from_ymd(year, month, value), millis_of_day)
            }
            F::WeekyearOfCentury => {
                let weekyear = self.calendar.public_year(self.internal_weekyear(days));
                let remainder = if self.calendar.has_zero_based_centuries() {
                    value
                } else {
                    value - 1
                };
                let weekyear = floor_div(weekyear, 100) * 100 + remainder;
                let internal = self.public_to_internal_year(weekyear, F::Weekyear)?;
                self.with_internal_weekyear(local, internal)
            }
            F::Weekyear => {
                let internal = self.public_to_internal_year(value, field)?;
                self.with_internal_weekyear(local, internal)
            }
            F::ClockhourOfHalfday => self.set(F::HourOfHalfday, local, value % 12),
            F::ClockhourOfDay => self.set(F::HourOfDay, local, value % 24),
            _ => {
                let unit = field.duration_type().fixed_millis().chrono_unwrap()?;
                checked_add(local, (value - self.get(field, local)) * unit)
            }
        }
    }

    // ==== Unit arithmetic ====

    /// Adds `amount` of `unit` to a local instant.
    pub(crate) fn add(
        &self,
        unit: DurationFieldType,
        local: i64,
        amount: i64,
    ) -> ChronoResult<i64> {
        if amount == 0 {
            return Ok(local);
        }
        if let Some(unit_millis) = unit.fixed_millis() {
            return checked_add(local, checked_mul(amount, unit_millis)?);
        }
        match unit {
            DurationFieldType::Months => self.add_months(local, amount),
            DurationFieldType::Years => {
                let year = checked_add(self.rules.year_from_days(split_millis(local).0), amount)?;
                self.with_internal_year(local, year)
            }
            DurationFieldType::Weekyears => {
                let weekyear = checked_add(self.internal_weekyear(split_millis(local).0), amount)?;
                self.with_internal_weekyear(local, weekyear)
            }
            DurationFieldType::Centuries => {
                self.add(DurationFieldType::Years, local, checked_mul(amount, 100)?)
            }
            _ => Err(ChronoError::unsupported().with_enum(ErrorMessage::ErasUnsupported)),
        }
    }

    fn add_months(&self, local: i64, amount: i64) -> ChronoResult<i64> {
        let months_in_year = self.rules.months_in_year();
        let (year, month, day) = self.ymd(local);
        let month_index = checked_add(month - 1, amount)?;
        let year = checked_add(year, floor_div(month_index, months_in_year))?;
        let month = month_index.rem_euclid(months_in_year) + 1;
        self.check_internal_year(year, DateTimeFieldType::Year)?;
        let day = day.min(self.rules.days_in_year_month(year, month));
        join_millis(
            self.rules.days_from_ymd(year, month, day),
            Self::millis_of_day(local),
        )
    }

    /// The number of whole units between two local instants, truncated
    /// toward zero.
    pub(crate) fn difference(
        &self,
        unit: DurationFieldType,
        minuend: i64,
        subtrahend: i64,
    ) -> ChronoResult<i64> {
        if let Some(unit_millis) = unit.fixed_millis() {
            let span = i128::from(minuend) - i128::from(subtrahend);
            return utils::to_i64(span / i128::from(unit_millis));
        }
        match unit {
            DurationFieldType::Months => self.month_difference(minuend, subtrahend),
            DurationFieldType::Years => self.year_difference(minuend, subtrahend),
            DurationFieldType::Weekyears => self.weekyear_difference(minuend, subtrahend),
            DurationFieldType::Centuries => Ok(self.year_difference(minuend, subtrahend)? / 100),
            _ => Err(ChronoError::unsupported().with_enum(ErrorMessage::ErasUnsupported)),
        }
    }

    fn month_difference(&self, minuend: i64, subtrahend: i64) -> ChronoResult<i64> {
        if minuend < subtrahend {
            return Ok(-self.month_difference(subtrahend, minuend)?);
        }
        let (min_year, min_month, min_day) = self.ymd(minuend);
        let (sub_year, sub_month, sub_day) = self.ymd(subtrahend);
        let mut difference =
            (min_year - sub_year) * self.rules.months_in_year() + min_month - sub_month;

        // A minuend on the last day of its month absorbs any later day of
        // the subtrahend's month, matching month addition's clamp.
        let mut subtrahend = subtrahend;
        if min_day == self.rules.days_in_year_month(min_year, min_month) && sub_day > min_day {
            subtrahend = self.set(DateTimeFieldType::DayOfMonth, subtrahend, min_day)?;
        }

        let minuend_rem = minuend - self.month_start_millis(min_year, min_month)?;
        let subtrahend_rem = subtrahend - self.month_start_millis(sub_year, sub_month)?;
        if minuend_rem < subtrahend_rem {
            difference -= 1;
        }
        Ok(difference)
    }

    fn year_difference(&self, minuend: i64, subtrahend: i64) -> ChronoResult<i64> {
        if minuend < subtrahend {
            return Ok(-self.year_difference(subtrahend, minuend)?);
        }
        let min_year = self.rules.year_from_days(split_millis(minuend).0);
        let sub_year = self.rules.year_from_days(split_millis(subtrahend).0);
        let mut minuend_rem = minuend - self.year_start_millis(min_year)?;
        let mut subtrahend_rem = subtrahend - self.year_start_millis(sub_year)?;

        if self.rules.balances_leap_day() && subtrahend_rem >= FEB_29_MILLIS {
            if self.rules.is_leap_year(sub_year) {
                if !self.rules.is_leap_year(min_year) {
                    subtrahend_rem -= MS_PER_DAY;
                }
            } else if minuend_rem >= FEB_29_MILLIS && self.rules.is_leap_year(min_year) {
                minuend_rem -= MS_PER_DAY;
            }
        }

        let mut difference = min_year - sub_year;
        if minuend_rem < subtrahend_rem {
            difference -= 1;
        }
        Ok(difference)
    }

    fn weekyear_difference(&self, minuend: i64, subtrahend: i64) -> ChronoResult<i64> {
        if minuend < subtrahend {
            return Ok(-self.weekyear_difference(subtrahend, minuend)?);
        }
        let min_weekyear = self.internal_weekyear(split_millis(minuend).0);
        let sub_weekyear = self.internal_weekyear(split_millis(subtrahend).0);
        let minuend_rem = minuend - self.weekyear_floor(minuend)?;
        let mut subtrahend_rem = subtrahend - self.weekyear_floor(subtrahend)?;

        if subtrahend_rem >= WEEK_53_MILLIS && self.weeks_in_weekyear(min_weekyear) <= 52 {
            subtrahend_rem -= MS_PER_WEEK;
        }

        let mut difference = min_weekyear - sub_weekyear;
        if minuend_rem < subtrahend_rem {
            difference -= 1;
        }
        Ok(difference)
    }

    // ==== Field arithmetic ====

    /// Adds to a field, wrapping within its bounds instead of carrying.
    pub(crate) fn add_wrap_field(
        &self,
        field: DateTimeFieldType,
        local: i64,
        amount: i64,
    ) -> ChronoResult<i64> {
        if amount == 0 {
            return Ok(local);
        }
        match field {
            DateTimeFieldType::Year | DateTimeFieldType::Weekyear => {
                let days = split_millis(local).0;
                let current = if field == DateTimeFieldType::Year {
                    self.rules.year_from_days(days)
                } else {
                    self.internal_weekyear(days)
                };
                let (min, max) = (self.rules.min_year(), self.rules.max_year());
                let amount = amount.rem_euclid(max - min + 1);
                let wrapped = wrap_value(current + amount, min, max);
                if field == DateTimeFieldType::Year {
                    self.with_internal_year(local, wrapped)
                } else {
                    self.with_internal_weekyear(local, wrapped)
                }
            }
            _ => {
                let (min, max) = self.bounds_at(field, local);
                let current = self.get(field, local);
                let amount = amount.rem_euclid(max - min + 1);
                self.set(field, local, wrap_value(current + amount, min, max))
            }
        }
    }

    /// Rounds down to the start of the field's current value.
    pub(crate) fn round_floor(&self, field: DateTimeFieldType, local: i64) -> ChronoResult<i64> {
        use DateTimeFieldType as F;
        let days = split_millis(local).0;
        match field {
            F::Era => {
                if self.calendar.is_single_era() || self.get(F::Era, local) == 0 {
                    Ok(i64::MIN)
                } else {
                    self.year_start_millis(1)
                }
            }
            F::Year | F::YearOfEra | F::YearOfCentury => {
                self.year_start_millis(self.rules.year_from_days(days))
            }
            F::CenturyOfEra => {
                let year = self.rules.year_from_days(days);
                let base = floor_div(self.century_base(year), 100) * 100;
                let year = self.year_from_century_base(year, base);
                self.check_internal_year(year, F::Year)?;
                self.year_start_millis(year)
            }
            F::MonthOfYear => {
                let (year, month, _) = self.rules.ymd_from_days(days);
                self.month_start_millis(year, month)
            }
            F::DayOfYear | F::DayOfMonth | F::DayOfWeek => join_millis(days, 0),
            F::WeekOfWeekyear => {
                // Epoch weeks start on Monday 1969-12-29, three days before
                // the epoch.
                let shift = 3 * MS_PER_DAY;
                let shifted = checked_add(local, shift)?;
                utils::checked_sub(crate::rounding::floor_to_unit(shifted, MS_PER_WEEK), shift)
            }
            F::Weekyear | F::WeekyearOfCentury => self.weekyear_floor(local),
            _ => {
                let unit = field.duration_type().fixed_millis().chrono_unwrap()?;
                Ok(crate::rounding::floor_to_unit(local, unit))
            }
        }
    }

    /// Rounds up to the start of the field's next value unless already on
    /// a boundary.
    pub(crate) fn round_ceiling(&self, field: DateTimeFieldType, local: i64) -> ChronoResult<i64> {
        if field == DateTimeFieldType::Era {
            if self.calendar.is_single_era() || self.get(field, local) == 1 {
                return Ok(i64::MAX);
            }
            return self.year_start_millis(1);
        }
        let floor = self.round_floor(field, local)?;
        if floor == local {
            return Ok(local);
        }
        self.add(field.duration_type(), floor, 1)
    }

    /// Whether the field's current value is a leap value.
    pub(crate) fn is_leap(&self, field: DateTimeFieldType, local: i64) -> bool {
        let days = split_millis(local).0;
        let (year, month, day) = self.rules.ymd_from_days(days);
        match field {
            DateTimeFieldType::Year | DateTimeFieldType::YearOfEra => self.rules.is_leap_year(year),
            DateTimeFieldType::Weekyear => {
                self.weeks_in_weekyear(self.internal_weekyear(days)) > 52
            }
            DateTimeFieldType::MonthOfYear => {
                self.rules.is_leap_year(year) && month == self.rules.leap_month()
            }
            DateTimeFieldType::DayOfMonth => {
                self.rules.is_leap_year(year)
                    && month == self.rules.leap_month()
                    && day == self.rules.days_in_year_month(year, month)
            }
            _ => false,
        }
    }
}
