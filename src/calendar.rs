//! Calendar systems: the year/month/day rules beneath a chronology.
//!
//! Every calendar is described in terms of epoch days (days since
//! 1970-01-01 in the proleptic Gregorian calendar) and an internal,
//! proleptic year numbering that includes a year zero. Calendars that skip
//! year zero in their public numbering convert at the field layer.

use core::{fmt, str::FromStr};

use tinystr::{tinystr, TinyAsciiStr};

use crate::{error::ErrorMessage, ChronoError};

mod fixed_month;
mod gregorian;
mod julian;

use fixed_month::FixedMonth;
use gregorian::Gregorian;
use julian::Julian;

/// Day and year arithmetic for one calendar system.
pub(crate) trait CalendarRules: Sync {
    fn days_from_ymd(&self, year: i64, month: i64, day: i64) -> i64;
    fn ymd_from_days(&self, days: i64) -> (i64, i64, i64);
    fn is_leap_year(&self, year: i64) -> bool;
    fn days_in_year_month(&self, year: i64, month: i64) -> i64;
    fn days_in_month_max(&self, month: i64) -> i64;
    fn months_in_year(&self) -> i64;
    /// The month that gains a day in leap years.
    fn leap_month(&self) -> i64;
    /// Smallest supported internal year.
    fn min_year(&self) -> i64;
    /// Largest supported internal year.
    fn max_year(&self) -> i64;
    fn average_millis_per_year(&self) -> i64;
    fn average_millis_per_month(&self) -> i64;
    /// Whether the year difference treats Feb 29 as a movable day.
    fn balances_leap_day(&self) -> bool {
        false
    }

    fn days_in_year(&self, year: i64) -> i64 {
        if self.is_leap_year(year) {
            366
        } else {
            365
        }
    }

    fn year_start_days(&self, year: i64) -> i64 {
        self.days_from_ymd(year, 1, 1)
    }

    fn month_start_days(&self, year: i64, month: i64) -> i64 {
        self.days_from_ymd(year, month, 1)
    }

    fn year_from_days(&self, days: i64) -> i64 {
        self.ymd_from_days(days).0
    }
}

static GREGORIAN: Gregorian = Gregorian;
static JULIAN: Julian = Julian;
static COPTIC: FixedMonth = FixedMonth::COPTIC;
static ETHIOPIC: FixedMonth = FixedMonth::ETHIOPIC;

/// The calendar system of a chronology.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CalendarSystem {
    /// ISO-8601: proleptic Gregorian with zero based centuries.
    #[default]
    Iso,
    /// Proleptic Gregorian with one based centuries.
    Gregorian,
    /// Proleptic Julian, without a year zero.
    Julian,
    /// The Coptic calendar: twelve 30 day months and an epagomenal month.
    Coptic,
    /// The Ethiopic calendar: Coptic rules with an earlier epoch.
    Ethiopic,
}

impl CalendarSystem {
    pub const ALL: [Self; 5] = [
        Self::Iso,
        Self::Gregorian,
        Self::Julian,
        Self::Coptic,
        Self::Ethiopic,
    ];

    #[inline]
    pub(crate) fn rules(self) -> &'static dyn CalendarRules {
        match self {
            Self::Iso | Self::Gregorian => &GREGORIAN,
            Self::Julian => &JULIAN,
            Self::Coptic => &COPTIC,
            Self::Ethiopic => &ETHIOPIC,
        }
    }

    /// Returns the identifier of this calendar.
    pub const fn identifier(self) -> TinyAsciiStr<16> {
        match self {
            Self::Iso => tinystr!(16, "iso8601"),
            Self::Gregorian => tinystr!(16, "gregory"),
            Self::Julian => tinystr!(16, "julian"),
            Self::Coptic => tinystr!(16, "coptic"),
            Self::Ethiopic => tinystr!(16, "ethiopic"),
        }
    }

    /// Whether the public year numbering contains a year zero.
    #[inline]
    pub const fn has_year_zero(self) -> bool {
        !matches!(self, Self::Julian)
    }

    /// Whether the calendar counts a single era.
    #[inline]
    pub const fn is_single_era(self) -> bool {
        matches!(self, Self::Coptic | Self::Ethiopic)
    }

    /// Whether centuries are numbered from zero on the absolute year.
    #[inline]
    pub const fn has_zero_based_centuries(self) -> bool {
        matches!(self, Self::Iso)
    }

    /// Converts a public year into the internal proleptic year.
    #[inline]
    pub(crate) const fn internal_year(self, year: i64) -> i64 {
        if !self.has_year_zero() && year < 0 {
            year + 1
        } else {
            year
        }
    }

    /// Converts an internal proleptic year into the public year.
    #[inline]
    pub(crate) const fn public_year(self, year: i64) -> i64 {
        if !self.has_year_zero() && year <= 0 {
            year - 1
        } else {
            year
        }
    }

    /// The smallest public year.
    pub fn min_year(self) -> i64 {
        self.public_year(self.rules().min_year())
    }

    /// The largest public year.
    pub fn max_year(self) -> i64 {
        self.rules().max_year()
    }
}

impl FromStr for CalendarSystem {
    type Err = ChronoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = TinyAsciiStr::<16>::try_from_str(s)
            .map_err(|_| ChronoError::argument().with_enum(ErrorMessage::CalendarNameInvalid))?
            .to_ascii_lowercase();
        match lower.as_str() {
            "iso8601" | "iso" => Ok(Self::Iso),
            "gregory" | "gregorian" => Ok(Self::Gregorian),
            "julian" => Ok(Self::Julian),
            "coptic" => Ok(Self::Coptic),
            "ethiopic" => Ok(Self::Ethiopic),
            _ => Err(ChronoError::argument().with_enum(ErrorMessage::CalendarNameInvalid)),
        }
    }
}

impl fmt::Display for CalendarSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier().as_str())
    }
}
