//! A date and time of day without a zone.

use alloc::string::String;
use alloc::vec::Vec;
use core::{cmp::Ordering, fmt};

use crate::{
    builtins::core::{DateTime, LocalDate, LocalTime, Period, ReadablePartial},
    fields::{DateTimeFieldType, DurationFieldType},
    format::{DateTimeParser, DateTimePrinter, IsoFormat},
    options::{Disambiguation, RoundingMode},
    timezone::TimeZone,
    ChronoError, ChronoResult, Chronology,
};

const FIELD_TYPES: [DateTimeFieldType; 4] = [
    DateTimeFieldType::Year,
    DateTimeFieldType::MonthOfYear,
    DateTimeFieldType::DayOfMonth,
    DateTimeFieldType::MillisOfDay,
];

/// A wall clock reading, such as `2013-01-31T10:30:00.000`.
///
/// Every unit is applied to the wall clock, so adding a day always adds 24
/// hours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalDateTime {
    local_millis: i64,
    chronology: Chronology,
}

impl LocalDateTime {
    #[allow(clippy::too_many_arguments)]
    pub fn try_new(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: i32,
        millis: i32,
        chronology: Option<&Chronology>,
    ) -> ChronoResult<Self> {
        let chronology = chronology.map_or_else(Chronology::iso_utc, Chronology::with_utc);
        let local_millis =
            chronology.local_date_time_millis(year, month, day, hour, minute, second, millis)?;
        Ok(Self {
            local_millis,
            chronology,
        })
    }

    pub(crate) fn from_local_millis(local: i64, chronology: &Chronology) -> Self {
        Self {
            local_millis: local,
            chronology: chronology.with_utc(),
        }
    }

    pub fn parse_with(
        text: &str,
        parser: &(impl DateTimeParser + ?Sized),
        chronology: Option<&Chronology>,
    ) -> ChronoResult<Self> {
        let chronology = chronology.map_or_else(Chronology::iso_utc, Chronology::with_utc);
        let local = parser.parse_local_millis(text, &chronology)?;
        Ok(Self::from_local_millis(local, &chronology))
    }

    /// Parses `yyyy-MM-dd[THH:mm[:ss[.SSS]]]`, ignoring any offset.
    pub fn parse(text: &str) -> ChronoResult<Self> {
        Self::parse_with(text, &IsoFormat, None)
    }

    pub fn print_with(&self, printer: &(impl DateTimePrinter + ?Sized)) -> ChronoResult<String> {
        let mut out = String::new();
        printer
            .print_partial(&mut out, self)
            .map_err(|_| ChronoError::argument().with_message("date-time could not be printed"))?;
        Ok(out)
    }

    #[inline]
    pub fn local_millis(&self) -> i64 {
        self.local_millis
    }

    // ==== Fields ====

    /// The value of any field.
    pub fn get_field(&self, field_type: DateTimeFieldType) -> i32 {
        self.chronology.field(field_type).get(self.local_millis)
    }

    field_accessors! {
        get_field;
        era, with_era => Era;
        year_of_era, with_year_of_era => YearOfEra;
        century_of_era, with_century_of_era => CenturyOfEra;
        year_of_century, with_year_of_century => YearOfCentury;
        year, with_year => Year;
        day_of_year, with_day_of_year => DayOfYear;
        month_of_year, with_month_of_year => MonthOfYear;
        day_of_month, with_day_of_month => DayOfMonth;
        weekyear, with_weekyear => Weekyear;
        week_of_weekyear, with_week_of_weekyear => WeekOfWeekyear;
        day_of_week, with_day_of_week => DayOfWeek;
        hour_of_day, with_hour_of_day => HourOfDay;
        minute_of_hour, with_minute_of_hour => MinuteOfHour;
        second_of_minute, with_second_of_minute => SecondOfMinute;
        millis_of_second, with_millis_of_second => MillisOfSecond;
        millis_of_day, with_millis_of_day => MillisOfDay;
    }

    pub fn with_field(&self, field_type: DateTimeFieldType, value: i32) -> ChronoResult<Self> {
        let local = self.chronology.field(field_type).set(self.local_millis, value)?;
        Ok(Self::from_local_millis(local, &self.chronology))
    }

    pub fn with_field_added(&self, unit: DurationFieldType, amount: i32) -> ChronoResult<Self> {
        let local = self
            .chronology
            .duration_field(unit)
            .add(self.local_millis, i64::from(amount))?;
        Ok(Self::from_local_millis(local, &self.chronology))
    }

    unit_arithmetic! {
        plus_years, minus_years => Years;
        plus_months, minus_months => Months;
        plus_weeks, minus_weeks => Weeks;
        plus_days, minus_days => Days;
        plus_hours, minus_hours => Hours;
        plus_minutes, minus_minutes => Minutes;
        plus_seconds, minus_seconds => Seconds;
        plus_millis, minus_millis => Millis;
    }

    pub fn with_period_added(&self, period: &Period, scalar: i32) -> ChronoResult<Self> {
        let local = self.chronology.add_period(period, self.local_millis, scalar)?;
        Ok(Self::from_local_millis(local, &self.chronology))
    }

    pub fn plus_period(&self, period: &Period) -> ChronoResult<Self> {
        self.with_period_added(period, 1)
    }

    pub fn minus_period(&self, period: &Period) -> ChronoResult<Self> {
        self.with_period_added(period, -1)
    }

    pub fn round(&self, field_type: DateTimeFieldType, mode: RoundingMode) -> ChronoResult<Self> {
        let local = self.chronology.field(field_type).round(self.local_millis, mode)?;
        Ok(Self::from_local_millis(local, &self.chronology))
    }

    // ==== Conversions ====

    pub fn to_local_date(&self) -> ChronoResult<LocalDate> {
        LocalDate::from_local_millis(self.local_millis, &self.chronology)
    }

    pub fn to_local_time(&self) -> LocalTime {
        LocalTime::from_local_millis(self.local_millis, &self.chronology)
    }

    /// Places this wall clock reading in `zone`.
    pub fn to_date_time(
        &self,
        zone: TimeZone,
        disambiguation: Disambiguation,
    ) -> ChronoResult<DateTime> {
        let millis = zone.local_to_utc(self.local_millis, disambiguation)?;
        Ok(DateTime::new(millis, self.chronology.with_zone(zone)))
    }
}

impl ReadablePartial for LocalDateTime {
    fn chronology(&self) -> &Chronology {
        &self.chronology
    }

    fn field_types(&self) -> &[DateTimeFieldType] {
        &FIELD_TYPES
    }

    fn values(&self) -> Vec<i32> {
        FIELD_TYPES.iter().map(|t| self.get_field(*t)).collect()
    }
}

impl PartialOrd for LocalDateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.chronology != other.chronology {
            return None;
        }
        Some(self.local_millis.cmp(&other.local_millis))
    }
}

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        IsoFormat.print_partial(f, self)
    }
}
