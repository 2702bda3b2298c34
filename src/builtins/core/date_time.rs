//! An instant paired with the chronology its fields are read in.

use alloc::string::String;
use core::{cmp::Ordering, fmt};

use crate::{
    builtins::core::{Duration, Instant, LocalDate, LocalDateTime, LocalTime, Period},
    fields::{DateTimeFieldType, DurationFieldType},
    format::{DateTimeParser, DateTimePrinter, IsoFormat},
    options::RoundingMode,
    timezone::TimeZone,
    ChronoError, ChronoResult, Chronology,
};

/// An absolute instant with a chronology.
///
/// Field accessors read the wall clock of the chronology's zone. Date units
/// added with `plus_days` and larger keep the wall clock time across offset
/// transitions, while durations and time units move along the absolute
/// timeline.
///
/// ```rust
/// use chronology_rs::{Chronology, DateTime};
///
/// let start = DateTime::from_ymd_hms(2013, 1, 31, 0, 0, 0, 0, Chronology::iso_utc()).unwrap();
/// let end = start.plus_months(1).unwrap();
/// assert_eq!(end.to_string(), "2013-02-28T00:00:00.000Z");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTime {
    millis: i64,
    chronology: Chronology,
}

impl DateTime {
    /// Creates a date-time from epoch milliseconds.
    #[inline]
    pub const fn new(millis: i64, chronology: Chronology) -> Self {
        Self { millis, chronology }
    }

    /// Creates a date-time from wall clock fields, rejecting times that the
    /// zone skips.
    #[allow(clippy::too_many_arguments)]
    pub fn from_ymd_hms(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: i32,
        millis: i32,
        chronology: Chronology,
    ) -> ChronoResult<Self> {
        let instant =
            chronology.date_time_millis_hms(year, month, day, hour, minute, second, millis)?;
        Ok(Self::new(instant, chronology))
    }

    /// Parses text with `parser`, resolving wall clock text in
    /// `chronology`'s zone.
    pub fn parse_with(
        text: &str,
        parser: &(impl DateTimeParser + ?Sized),
        chronology: Chronology,
    ) -> ChronoResult<Self> {
        let millis = parser.parse_millis(text, &chronology)?;
        Ok(Self::new(millis, chronology))
    }

    /// Parses the ISO-8601 extended format.
    pub fn parse(text: &str, chronology: Chronology) -> ChronoResult<Self> {
        Self::parse_with(text, &IsoFormat, chronology)
    }

    /// Prints with `printer`.
    pub fn print_with(&self, printer: &(impl DateTimePrinter + ?Sized)) -> ChronoResult<String> {
        let mut out = String::new();
        printer
            .print_instant(&mut out, self.millis, &self.chronology)
            .map_err(|_| ChronoError::argument().with_message("date-time could not be printed"))?;
        Ok(out)
    }

    #[inline]
    pub const fn millis(&self) -> i64 {
        self.millis
    }

    #[inline]
    pub fn chronology(&self) -> &Chronology {
        &self.chronology
    }

    #[inline]
    pub fn zone(&self) -> &TimeZone {
        self.chronology.zone()
    }

    /// The offset from UTC in effect at this instant.
    pub fn offset_millis(&self) -> i64 {
        self.zone().offset_at(self.millis)
    }

    pub fn to_instant(&self) -> Instant {
        Instant::from_millis(self.millis)
    }

    /// Orders by instant, ignoring the chronology.
    pub fn cmp_instant(&self, other: &Self) -> Ordering {
        self.millis.cmp(&other.millis)
    }

    pub fn is_before(&self, other: &Self) -> bool {
        self.millis < other.millis
    }

    pub fn is_after(&self, other: &Self) -> bool {
        self.millis > other.millis
    }

    pub fn is_equal_instant(&self, other: &Self) -> bool {
        self.millis == other.millis
    }

    // ==== Fields ====

    /// The value of a field on this date-time's wall clock.
    pub fn get(&self, field_type: DateTimeFieldType) -> i32 {
        self.chronology.field(field_type).get(self.millis)
    }

    field_accessors! {
        get;
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
        minute_of_day, with_minute_of_day => MinuteOfDay;
        minute_of_hour, with_minute_of_hour => MinuteOfHour;
        second_of_day, with_second_of_day => SecondOfDay;
        second_of_minute, with_second_of_minute => SecondOfMinute;
        millis_of_day, with_millis_of_day => MillisOfDay;
        millis_of_second, with_millis_of_second => MillisOfSecond;
    }

    // ==== With ====

    #[must_use]
    pub fn with_millis(&self, millis: i64) -> Self {
        Self::new(millis, self.chronology.clone())
    }

    /// Keeps the instant and reads it in another chronology.
    #[must_use]
    pub fn with_chronology(&self, chronology: Chronology) -> Self {
        Self::new(self.millis, chronology)
    }

    /// Keeps the instant and reads it in another zone.
    #[must_use]
    pub fn with_zone(&self, zone: TimeZone) -> Self {
        self.with_chronology(self.chronology.with_zone(zone))
    }

    /// Keeps the wall clock fields and moves to another zone, changing the
    /// instant.
    pub fn with_zone_retain_fields(&self, zone: TimeZone) -> ChronoResult<Self> {
        let local = self.zone().utc_to_local(self.millis)?;
        let millis = zone.local_to_utc_with_original(local, self.millis)?;
        Ok(Self::new(millis, self.chronology.with_zone(zone)))
    }

    /// Sets a field, clamping smaller fields that would become invalid.
    pub fn with_field(&self, field_type: DateTimeFieldType, value: i32) -> ChronoResult<Self> {
        let millis = self.chronology.field(field_type).set(self.millis, value)?;
        Ok(self.with_millis(millis))
    }

    /// Adds an amount of a unit.
    pub fn with_field_added(&self, unit: DurationFieldType, amount: i32) -> ChronoResult<Self> {
        if amount == 0 {
            return Ok(self.clone());
        }
        let millis = self
            .chronology
            .duration_field(unit)
            .add(self.millis, i64::from(amount))?;
        Ok(self.with_millis(millis))
    }

    /// Sets the date, keeping the time of day.
    pub fn with_date(&self, year: i32, month: i32, day: i32) -> ChronoResult<Self> {
        let millis_of_day = self.millis_of_day();
        let local = self
            .chronology
            .local_date_millis(year, month, day, i64::from(millis_of_day))?;
        self.with_local_millis(local)
    }

    /// Sets the time of day, keeping the date.
    pub fn with_time(
        &self,
        hour: i32,
        minute: i32,
        second: i32,
        millis: i32,
    ) -> ChronoResult<Self> {
        let midnight = self
            .chronology
            .with_utc()
            .day_of_month()
            .round_floor(self.local_millis()?)?;
        let time = Chronology::time_millis(hour, minute, second, millis)?;
        self.with_local_millis(crate::utils::checked_add(midnight, time)?)
    }

    fn with_local_millis(&self, local: i64) -> ChronoResult<Self> {
        let millis = self.zone().local_to_utc_with_original(local, self.millis)?;
        Ok(self.with_millis(millis))
    }

    /// The first instant of this date-time's day in its zone, which is not
    /// midnight when the zone skips midnight.
    pub fn with_time_at_start_of_day(&self) -> ChronoResult<Self> {
        let local = self.zone().utc_to_local(self.millis)?;
        let midnight = self.chronology.with_utc().day_of_month().round_floor(local)?;
        let millis = self
            .zone()
            .local_to_utc(midnight, crate::options::Disambiguation::Compatible)?;
        Ok(self.with_millis(millis))
    }

    /// Rounds to a boundary of `field_type`.
    pub fn round(&self, field_type: DateTimeFieldType, mode: RoundingMode) -> ChronoResult<Self> {
        let millis = self.chronology.field(field_type).round(self.millis, mode)?;
        Ok(self.with_millis(millis))
    }

    // ==== Arithmetic ====

    /// Adds an exact duration.
    pub fn plus(&self, duration: Duration) -> ChronoResult<Self> {
        self.with_duration_added(duration, 1)
    }

    pub fn minus(&self, duration: Duration) -> ChronoResult<Self> {
        self.with_duration_added(duration, -1)
    }

    pub fn with_duration_added(&self, duration: Duration, scalar: i32) -> ChronoResult<Self> {
        let millis = self
            .chronology
            .add_duration(self.millis, duration.millis(), scalar)?;
        Ok(self.with_millis(millis))
    }

    /// Adds a period, largest unit first.
    pub fn plus_period(&self, period: &Period) -> ChronoResult<Self> {
        self.with_period_added(period, 1)
    }

    pub fn minus_period(&self, period: &Period) -> ChronoResult<Self> {
        self.with_period_added(period, -1)
    }

    pub fn with_period_added(&self, period: &Period, scalar: i32) -> ChronoResult<Self> {
        let millis = self.chronology.add_period(period, self.millis, scalar)?;
        Ok(self.with_millis(millis))
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

    // ==== Conversions ====

    fn local_millis(&self) -> ChronoResult<i64> {
        self.zone().utc_to_local(self.millis)
    }

    /// The wall clock date.
    pub fn to_local_date(&self) -> ChronoResult<LocalDate> {
        LocalDate::from_local_millis(self.local_millis()?, &self.chronology)
    }

    /// The wall clock time of day.
    pub fn to_local_time(&self) -> ChronoResult<LocalTime> {
        Ok(LocalTime::from_local_millis(self.local_millis()?, &self.chronology))
    }

    /// The wall clock date and time.
    pub fn to_local_date_time(&self) -> ChronoResult<LocalDateTime> {
        Ok(LocalDateTime::from_local_millis(self.local_millis()?, &self.chronology))
    }
}

impl PartialOrd for DateTime {
    /// Date-times compare by instant. Equal instants in different
    /// chronologies are unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.millis.cmp(&other.millis) {
            Ordering::Equal if self.chronology != other.chronology => None,
            ordering => Some(ordering),
        }
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        IsoFormat.print_instant(f, self.millis, &self.chronology)
    }
}
