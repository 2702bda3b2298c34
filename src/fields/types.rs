//! The closed sets of unit and field tags.

use core::{cmp::Ordering, fmt};

/// A unit of elapsed time.
///
/// Variants are declared from the largest unit to the smallest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationFieldType {
    Eras,
    Centuries,
    Weekyears,
    Years,
    Months,
    Weeks,
    Days,
    Halfdays,
    Hours,
    Minutes,
    Seconds,
    Millis,
}

impl DurationFieldType {
    pub const ALL: [Self; 12] = [
        Self::Eras,
        Self::Centuries,
        Self::Weekyears,
        Self::Years,
        Self::Months,
        Self::Weeks,
        Self::Days,
        Self::Halfdays,
        Self::Hours,
        Self::Minutes,
        Self::Seconds,
        Self::Millis,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Eras => "eras",
            Self::Centuries => "centuries",
            Self::Weekyears => "weekyears",
            Self::Years => "years",
            Self::Months => "months",
            Self::Weeks => "weeks",
            Self::Days => "days",
            Self::Halfdays => "halfdays",
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
            Self::Millis => "millis",
        }
    }

    /// The exact length of the unit, for units that are always precise.
    pub(crate) const fn fixed_millis(self) -> Option<i64> {
        use crate::utils::{
            MS_PER_DAY, MS_PER_HALFDAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND, MS_PER_WEEK,
        };
        match self {
            Self::Weeks => Some(MS_PER_WEEK),
            Self::Days => Some(MS_PER_DAY),
            Self::Halfdays => Some(MS_PER_HALFDAY),
            Self::Hours => Some(MS_PER_HOUR),
            Self::Minutes => Some(MS_PER_MINUTE),
            Self::Seconds => Some(MS_PER_SECOND),
            Self::Millis => Some(1),
            _ => None,
        }
    }

    /// Units shorter than half a day are applied to the absolute timeline in
    /// a zoned chronology; longer units are applied to the wall clock.
    #[inline]
    pub(crate) const fn is_time_unit(self) -> bool {
        matches!(self, Self::Hours | Self::Minutes | Self::Seconds | Self::Millis)
    }

    /// Position from the largest unit, weekyears sharing the rank of years.
    #[inline]
    pub(crate) const fn rank(self) -> u8 {
        match self {
            Self::Eras => 0,
            Self::Centuries => 1,
            Self::Weekyears | Self::Years => 2,
            Self::Months => 3,
            Self::Weeks => 4,
            Self::Days => 5,
            Self::Halfdays => 6,
            Self::Hours => 7,
            Self::Minutes => 8,
            Self::Seconds => 9,
            Self::Millis => 10,
        }
    }
}

impl fmt::Display for DurationFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A calendar component, such as the month of the year or the hour of the
/// day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateTimeFieldType {
    Era,
    YearOfEra,
    CenturyOfEra,
    YearOfCentury,
    Year,
    DayOfYear,
    MonthOfYear,
    DayOfMonth,
    WeekyearOfCentury,
    Weekyear,
    WeekOfWeekyear,
    DayOfWeek,
    HalfdayOfDay,
    HourOfHalfday,
    ClockhourOfHalfday,
    ClockhourOfDay,
    HourOfDay,
    MinuteOfDay,
    MinuteOfHour,
    SecondOfDay,
    SecondOfMinute,
    MillisOfDay,
    MillisOfSecond,
}

impl DateTimeFieldType {
    pub const ALL: [Self; 23] = [
        Self::Era,
        Self::YearOfEra,
        Self::CenturyOfEra,
        Self::YearOfCentury,
        Self::Year,
        Self::DayOfYear,
        Self::MonthOfYear,
        Self::DayOfMonth,
        Self::WeekyearOfCentury,
        Self::Weekyear,
        Self::WeekOfWeekyear,
        Self::DayOfWeek,
        Self::HalfdayOfDay,
        Self::HourOfHalfday,
        Self::ClockhourOfHalfday,
        Self::ClockhourOfDay,
        Self::HourOfDay,
        Self::MinuteOfDay,
        Self::MinuteOfHour,
        Self::SecondOfDay,
        Self::SecondOfMinute,
        Self::MillisOfDay,
        Self::MillisOfSecond,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Era => "era",
            Self::YearOfEra => "yearOfEra",
            Self::CenturyOfEra => "centuryOfEra",
            Self::YearOfCentury => "yearOfCentury",
            Self::Year => "year",
            Self::DayOfYear => "dayOfYear",
            Self::MonthOfYear => "monthOfYear",
            Self::DayOfMonth => "dayOfMonth",
            Self::WeekyearOfCentury => "weekyearOfCentury",
            Self::Weekyear => "weekyear",
            Self::WeekOfWeekyear => "weekOfWeekyear",
            Self::DayOfWeek => "dayOfWeek",
            Self::HalfdayOfDay => "halfdayOfDay",
            Self::HourOfHalfday => "hourOfHalfday",
            Self::ClockhourOfHalfday => "clockhourOfHalfday",
            Self::ClockhourOfDay => "clockhourOfDay",
            Self::HourOfDay => "hourOfDay",
            Self::MinuteOfDay => "minuteOfDay",
            Self::MinuteOfHour => "minuteOfHour",
            Self::SecondOfDay => "secondOfDay",
            Self::SecondOfMinute => "secondOfMinute",
            Self::MillisOfDay => "millisOfDay",
            Self::MillisOfSecond => "millisOfSecond",
        }
    }

    /// The unit this field counts in.
    pub const fn duration_type(self) -> DurationFieldType {
        use DurationFieldType as D;
        match self {
            Self::Era => D::Eras,
            Self::YearOfEra | Self::YearOfCentury | Self::Year => D::Years,
            Self::CenturyOfEra => D::Centuries,
            Self::DayOfYear | Self::DayOfMonth | Self::DayOfWeek => D::Days,
            Self::MonthOfYear => D::Months,
            Self::WeekyearOfCentury | Self::Weekyear => D::Weekyears,
            Self::WeekOfWeekyear => D::Weeks,
            Self::HalfdayOfDay => D::Halfdays,
            Self::HourOfHalfday
            | Self::ClockhourOfHalfday
            | Self::ClockhourOfDay
            | Self::HourOfDay => D::Hours,
            Self::MinuteOfDay | Self::MinuteOfHour => D::Minutes,
            Self::SecondOfDay | Self::SecondOfMinute => D::Seconds,
            Self::MillisOfDay | Self::MillisOfSecond => D::Millis,
        }
    }

    /// The unit that bounds this field, or `None` for unbounded fields.
    pub const fn range_duration_type(self) -> Option<DurationFieldType> {
        use DurationFieldType as D;
        match self {
            Self::Era | Self::Year | Self::Weekyear => None,
            Self::YearOfEra | Self::CenturyOfEra => Some(D::Eras),
            Self::YearOfCentury | Self::WeekyearOfCentury => Some(D::Centuries),
            Self::DayOfYear | Self::MonthOfYear => Some(D::Years),
            Self::DayOfMonth => Some(D::Months),
            Self::WeekOfWeekyear => Some(D::Weekyears),
            Self::DayOfWeek => Some(D::Weeks),
            Self::HalfdayOfDay
            | Self::ClockhourOfDay
            | Self::HourOfDay
            | Self::MinuteOfDay
            | Self::SecondOfDay
            | Self::MillisOfDay => Some(D::Days),
            Self::HourOfHalfday | Self::ClockhourOfHalfday => Some(D::Halfdays),
            Self::MinuteOfHour => Some(D::Hours),
            Self::SecondOfMinute => Some(D::Minutes),
            Self::MillisOfSecond => Some(D::Seconds),
        }
    }

    /// Whether the field is part of a date rather than a time of day.
    #[inline]
    pub const fn is_date_field(self) -> bool {
        matches!(
            self.duration_type(),
            DurationFieldType::Eras
                | DurationFieldType::Centuries
                | DurationFieldType::Weekyears
                | DurationFieldType::Years
                | DurationFieldType::Months
                | DurationFieldType::Weeks
                | DurationFieldType::Days
        )
    }

    /// Orders fields from largest to smallest: first by unit, then by range,
    /// an unbounded range counting as the largest.
    pub(crate) fn cmp_size(self, other: Self) -> Ordering {
        let unit = self
            .duration_type()
            .rank()
            .cmp(&other.duration_type().rank());
        if unit != Ordering::Equal {
            return unit;
        }
        let range = |field: Self| field.range_duration_type().map_or(0, |d| d.rank() + 1);
        range(self).cmp(&range(other))
    }
}

impl fmt::Display for DateTimeFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
