//! A date without a time of day or zone.

use alloc::string::String;
use alloc::vec::Vec;
use core::{cmp::Ordering, fmt};

use crate::{
    builtins::core::{DateTime, LocalDateTime, LocalTime, Period, ReadablePartial},
    error::ErrorMessage,
    fields::{DateTimeFieldType, DurationFieldType},
    format::{DateTimeParser, DateTimePrinter, IsoFormat},
    options::{Disambiguation, RoundingMode},
    timezone::TimeZone,
    utils, ChronoError, ChronoResult, Chronology,
};

const FIELD_TYPES: [DateTimeFieldType; 3] = [
    DateTimeFieldType::Year,
    DateTimeFieldType::MonthOfYear,
    DateTimeFieldType::DayOfMonth,
];

/// A calendar date, such as `2013-01-31`, held as the local milliseconds of
/// its midnight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalDate {
    local_millis: i64,
    chronology: Chronology,
}

impl LocalDate {
    /// Creates a date in `chronology`, or ISO if none is given.
    pub fn try_new(
        year: i32,
        month: i32,
        day: i32,
        chronology: Option<&Chronology>,
    ) -> ChronoResult<Self> {
        let chronology = chronology.map_or_else(Chronology::iso_utc, Chronology::with_utc);
        let local_millis = chronology.local_date_millis(year, month, day, 0)?;
        Ok(Self {
            local_millis,
            chronology,
        })
    }

    /// The date of a wall clock reading, dropping the time of day.
    pub(crate) fn from_local_millis(local: i64, chronology: &Chronology) -> ChronoResult<Self> {
        let chronology = chronology.with_utc();
        let local_millis = chronology.day_of_month().round_floor(local)?;
        Ok(Self {
            local_millis,
            chronology,
        })
    }

    /// The date of an instant on the wall clock of `chronology`'s zone.
    pub fn from_instant_millis(millis: i64, chronology: &Chronology) -> ChronoResult<Self> {
        Self::from_local_millis(chronology.zone().utc_to_local(millis)?, chronology)
    }

    pub fn parse_with(
        text: &str,
        parser: &(impl DateTimeParser + ?Sized),
        chronology: Option<&Chronology>,
    ) -> ChronoResult<Self> {
        let chronology = chronology.map_or_else(Chronology::iso_utc, Chronology::with_utc);
        let local = parser.parse_local_millis(text, &chronology)?;
        Self::from_local_millis(local, &chronology)
    }

    /// Parses `yyyy-MM-dd`.
    pub fn parse(text: &str) -> ChronoResult<Self> {
        Self::parse_with(text, &IsoFormat, None)
    }

    pub fn print_with(&self, printer: &(impl DateTimePrinter + ?Sized)) -> ChronoResult<String> {
        let mut out = String::new();
        printer
            .print_partial(&mut out, self)
            .map_err(|_| ChronoError::argument().with_message("date could not be printed"))?;
        Ok(out)
    }

    #[inline]
    pub fn local_millis(&self) -> i64 {
        self.local_millis
    }

    fn with_local_millis(&self, local: i64) -> ChronoResult<Self> {
        Self::from_local_millis(local, &self.chronology)
    }

    // ==== Fields ====

    fn field_value(&self, field_type: DateTimeFieldType) -> i32 {
        self.chronology.field(field_type).get(self.local_millis)
    }

    fn check_field(field_type: DateTimeFieldType) -> ChronoResult<()> {
        if !field_type.is_date_field() {
            return Err(ChronoError::argument().with_enum(ErrorMessage::FieldNotSupported));
        }
        Ok(())
    }

    /// Whether a unit can be added to a date.
    fn is_date_unit(unit: DurationFieldType) -> bool {
        !unit.is_time_unit() && unit != DurationFieldType::Halfdays
    }

    /// The value of a date field.
    pub fn get_field(&self, field_type: DateTimeFieldType) -> ChronoResult<i32> {
        Self::check_field(field_type)?;
        Ok(self.field_value(field_type))
    }

    field_accessors! {
        field_value;
        era, with_era => Era;
        year_of_era, with_year_of_era => YearOfEra;
        century_of_era, with_century_of_era => CenturyOfEra;
        year_of_century, with_year_of_century => YearOfCentury;
        year, with_year => Year;
        day_of_year, with_day_of_year => DayOfYear;
        month_of_year, with_month_of_year => MonthOfYear;
        day_of_month, with_day_of_month => DayOfMonth;
        weekyear_of_century, with_weekyear_of_century => WeekyearOfCentury;
        weekyear, with_weekyear => Weekyear;
        week_of_weekyear, with_week_of_weekyear => WeekOfWeekyear;
        day_of_week, with_day_of_week => DayOfWeek;
    }

    /// Sets a date field, clamping smaller fields.
    pub fn with_field(&self, field_type: DateTimeFieldType, value: i32) -> ChronoResult<Self> {
        Self::check_field(field_type)?;
        let local = self.chronology.field(field_type).set(self.local_millis, value)?;
        self.with_local_millis(local)
    }

    /// Adds an amount of a date unit.
    pub fn with_field_added(&self, unit: DurationFieldType, amount: i32) -> ChronoResult<Self> {
        if !Self::is_date_unit(unit) {
            return Err(ChronoError::argument().with_enum(ErrorMessage::FieldNotSupported));
        }
        let local = self
            .chronology
            .duration_field(unit)
            .add(self.local_millis, i64::from(amount))?;
        self.with_local_millis(local)
    }

    unit_arithmetic! {
        plus_years, minus_years => Years;
        plus_months, minus_months => Months;
        plus_weeks, minus_weeks => Weeks;
        plus_days, minus_days => Days;
    }

    /// Adds the date units of a period; time units are ignored.
    pub fn with_period_added(&self, period: &Period, scalar: i32) -> ChronoResult<Self> {
        let mut local = self.local_millis;
        for (unit, value) in period.iter() {
            if value != 0 && Self::is_date_unit(unit) {
                let amount = utils::checked_mul(i64::from(value), i64::from(scalar))?;
                local = self.chronology.duration_field(unit).add(local, amount)?;
            }
        }
        self.with_local_millis(local)
    }

    pub fn plus_period(&self, period: &Period) -> ChronoResult<Self> {
        self.with_period_added(period, 1)
    }

    pub fn minus_period(&self, period: &Period) -> ChronoResult<Self> {
        self.with_period_added(period, -1)
    }

    /// Rounds to a boundary of a date field.
    pub fn round(&self, field_type: DateTimeFieldType, mode: RoundingMode) -> ChronoResult<Self> {
        Self::check_field(field_type)?;
        let local = self.chronology.field(field_type).round(self.local_millis, mode)?;
        self.with_local_millis(local)
    }

    // ==== Conversions ====

    /// The first instant of this date in `zone`.
    pub fn to_date_time_at_start_of_day(&self, zone: TimeZone) -> ChronoResult<DateTime> {
        let chronology = self.chronology.with_zone(zone);
        // Resolve mid-morning, clear of any midnight transition, then floor.
        let probe = utils::checked_add(self.local_millis, 6 * utils::MS_PER_HOUR)?;
        let probe = chronology
            .zone()
            .local_to_utc(probe, Disambiguation::Compatible)?;
        let millis = chronology.day_of_month().round_floor(probe)?;
        Ok(DateTime::new(millis, chronology))
    }

    /// This date at `time` in `zone`.
    pub fn to_date_time(
        &self,
        time: &LocalTime,
        zone: TimeZone,
        disambiguation: Disambiguation,
    ) -> ChronoResult<DateTime> {
        self.to_local_date_time(time)?.to_date_time(zone, disambiguation)
    }

    pub fn to_local_date_time(&self, time: &LocalTime) -> ChronoResult<LocalDateTime> {
        let local = utils::checked_add(self.local_millis, time.local_millis())?;
        Ok(LocalDateTime::from_local_millis(local, &self.chronology))
    }
}

impl ReadablePartial for LocalDate {
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

impl PartialOrd for LocalDate {
    /// Dates in the same calendar compare by position on the timeline.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.chronology != other.chronology {
            return None;
        }
        Some(self.local_millis.cmp(&other.local_millis))
    }
}

impl fmt::Display for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        IsoFormat.print_partial(f, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarSystem;
    use alloc::string::ToString;

    #[test]
    fn construction_and_fields() {
        let date = LocalDate::try_new(2013, 1, 31, None).unwrap();
        assert_eq!(date.year(), 2013);
        assert_eq!(date.month_of_year(), 1);
        assert_eq!(date.day_of_month(), 31);
        assert_eq!(date.day_of_week(), 4);
        assert_eq!(date.values(), [2013, 1, 31]);
        assert_eq!(date.to_string(), "2013-01-31");
        assert!(date.get_field(DateTimeFieldType::HourOfDay).is_err());
        assert!(LocalDate::try_new(2013, 2, 29, None).is_err());
        assert_eq!(LocalDate::parse("2013-01-31").unwrap(), date);
    }

    #[test]
    fn month_arithmetic_clamps() {
        let date = LocalDate::try_new(2013, 1, 31, None).unwrap();
        assert_eq!(date.plus_months(1).unwrap().to_string(), "2013-02-28");
        assert_eq!(date.minus_days(31).unwrap().to_string(), "2012-12-31");
        assert!(date.with_field_added(DurationFieldType::Hours, 1).is_err());
        let period = Period::new(0, 1, 0, 1, 5, 0, 0, 0);
        assert_eq!(date.plus_period(&period).unwrap().to_string(), "2013-03-01");
    }

    #[test]
    fn julian_dates_skip_year_zero() {
        let julian = Chronology::utc(CalendarSystem::Julian);
        let date = LocalDate::try_new(1, 1, 1, Some(&julian)).unwrap();
        assert_eq!(date.minus_days(1).unwrap().year(), -1);
        assert!(LocalDate::try_new(0, 1, 1, Some(&julian)).is_err());
    }

    #[test]
    fn start_of_day() {
        let date = LocalDate::try_new(2013, 1, 31, None).unwrap();
        let zone = TimeZone::fixed(-5 * 3_600_000).unwrap();
        let start = date.to_date_time_at_start_of_day(zone).unwrap();
        assert_eq!(start.to_string(), "2013-01-31T00:00:00.000-05:00");
    }
}
