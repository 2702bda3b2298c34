//! Descriptors of the units a period holds.

use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;

use crate::{error::ErrorMessage, fields::DurationFieldType, ChronoError, ChronoResult};

/// The eight units a period can hold, largest first.
const STANDARD_UNITS: [DurationFieldType; 8] = [
    DurationFieldType::Years,
    DurationFieldType::Months,
    DurationFieldType::Weeks,
    DurationFieldType::Days,
    DurationFieldType::Hours,
    DurationFieldType::Minutes,
    DurationFieldType::Seconds,
    DurationFieldType::Millis,
];

/// The position of `unit` among [`STANDARD_UNITS`].
pub(crate) const fn standard_slot(unit: DurationFieldType) -> Option<usize> {
    match unit {
        DurationFieldType::Years => Some(0),
        DurationFieldType::Months => Some(1),
        DurationFieldType::Weeks => Some(2),
        DurationFieldType::Days => Some(3),
        DurationFieldType::Hours => Some(4),
        DurationFieldType::Minutes => Some(5),
        DurationFieldType::Seconds => Some(6),
        DurationFieldType::Millis => Some(7),
        _ => None,
    }
}

const YEARS: u8 = 1;
const MONTHS: u8 = 1 << 1;
const WEEKS: u8 = 1 << 2;
const DAYS: u8 = 1 << 3;
const HOURS: u8 = 1 << 4;
const MINUTES: u8 = 1 << 5;
const SECONDS: u8 = 1 << 6;
const MILLIS: u8 = 1 << 7;
const TIME: u8 = HOURS | MINUTES | SECONDS | MILLIS;
const ALL: u8 = u8::MAX;

const NAMED: [(u8, &str); 17] = [
    (ALL, "Standard"),
    (ALL & !WEEKS, "YearMonthDayTime"),
    (YEARS | MONTHS | DAYS, "YearMonthDay"),
    (ALL & !MONTHS, "YearWeekDayTime"),
    (YEARS | WEEKS | DAYS, "YearWeekDay"),
    (YEARS | DAYS | TIME, "YearDayTime"),
    (YEARS | DAYS, "YearDay"),
    (DAYS | TIME, "DayTime"),
    (TIME, "Time"),
    (YEARS, "Years"),
    (MONTHS, "Months"),
    (WEEKS, "Weeks"),
    (DAYS, "Days"),
    (HOURS, "Hours"),
    (MINUTES, "Minutes"),
    (SECONDS, "Seconds"),
    (MILLIS, "Millis"),
];

/// The set of units a [`Period`][crate::Period] holds.
///
/// A period type is a subset of years, months, weeks, days, hours, minutes,
/// seconds and millis. Units are always ordered from the largest to the
/// smallest, so index `i` of a period refers to the `i`th supported unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PeriodType {
    mask: u8,
}

impl Default for PeriodType {
    fn default() -> Self {
        Self::standard()
    }
}

impl PeriodType {
    const fn from_mask(mask: u8) -> Self {
        Self { mask }
    }

    /// Years, months, weeks, days, hours, minutes, seconds and millis.
    pub const fn standard() -> Self {
        Self::from_mask(ALL)
    }

    pub const fn year_month_day_time() -> Self {
        Self::from_mask(ALL & !WEEKS)
    }

    pub const fn year_month_day() -> Self {
        Self::from_mask(YEARS | MONTHS | DAYS)
    }

    pub const fn year_week_day_time() -> Self {
        Self::from_mask(ALL & !MONTHS)
    }

    pub const fn year_week_day() -> Self {
        Self::from_mask(YEARS | WEEKS | DAYS)
    }

    pub const fn year_day_time() -> Self {
        Self::from_mask(YEARS | DAYS | TIME)
    }

    pub const fn year_day() -> Self {
        Self::from_mask(YEARS | DAYS)
    }

    pub const fn day_time() -> Self {
        Self::from_mask(DAYS | TIME)
    }

    /// Hours, minutes, seconds and millis.
    pub const fn time() -> Self {
        Self::from_mask(TIME)
    }

    pub const fn years() -> Self {
        Self::from_mask(YEARS)
    }

    pub const fn months() -> Self {
        Self::from_mask(MONTHS)
    }

    pub const fn weeks() -> Self {
        Self::from_mask(WEEKS)
    }

    pub const fn days() -> Self {
        Self::from_mask(DAYS)
    }

    pub const fn hours() -> Self {
        Self::from_mask(HOURS)
    }

    pub const fn minutes() -> Self {
        Self::from_mask(MINUTES)
    }

    pub const fn seconds() -> Self {
        Self::from_mask(SECONDS)
    }

    pub const fn millis() -> Self {
        Self::from_mask(MILLIS)
    }

    /// Builds a period type from a list of units in any order.
    ///
    /// Units outside of the eight period units are an argument error, as is
    /// an empty list.
    pub fn for_fields(units: &[DurationFieldType]) -> ChronoResult<Self> {
        if units.is_empty() {
            return Err(
                ChronoError::argument().with_message("period type must have at least one unit")
            );
        }
        let mut mask = 0;
        for unit in units {
            let slot = standard_slot(*unit)
                .ok_or(ChronoError::argument().with_enum(ErrorMessage::FieldNotSupported))?;
            mask |= 1 << slot;
        }
        Ok(Self::from_mask(mask))
    }

    /// The name of a predefined type, or `Standard` followed by the removed
    /// units for any other subset.
    pub fn name(&self) -> Cow<'static, str> {
        if let Some((_, name)) = NAMED.iter().find(|(mask, _)| *mask == self.mask) {
            return Cow::Borrowed(*name);
        }
        let mut name = String::from("Standard");
        for (slot, unit) in STANDARD_UNITS.iter().enumerate() {
            if self.mask & (1 << slot) == 0 {
                let unit = unit.name();
                name.push_str("No");
                name.push_str(&unit[..1].to_ascii_uppercase());
                name.push_str(&unit[1..]);
            }
        }
        Cow::Owned(name)
    }

    /// The number of units.
    #[inline]
    pub fn size(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// The unit at `index`.
    pub fn field_type(&self, index: usize) -> Option<DurationFieldType> {
        self.field_types().nth(index)
    }

    /// The supported units, largest first.
    pub fn field_types(&self) -> impl Iterator<Item = DurationFieldType> {
        let mask = self.mask;
        STANDARD_UNITS
            .into_iter()
            .enumerate()
            .filter(move |(slot, _)| mask & (1 << slot) != 0)
            .map(|(_, unit)| unit)
    }

    /// The index of `unit` in this type.
    pub fn index_of(&self, unit: DurationFieldType) -> Option<usize> {
        let slot = standard_slot(unit)?;
        if self.mask & (1 << slot) == 0 {
            return None;
        }
        Some((self.mask & ((1 << slot) - 1)).count_ones() as usize)
    }

    #[inline]
    pub fn is_supported(&self, unit: DurationFieldType) -> bool {
        self.index_of(unit).is_some()
    }

    pub(crate) fn supports_slot(&self, slot: usize) -> bool {
        self.mask & (1 << slot) != 0
    }

    #[must_use]
    fn without(self, bit: u8) -> Self {
        Self::from_mask(self.mask & !bit)
    }

    #[must_use]
    pub fn with_years_removed(self) -> Self {
        self.without(YEARS)
    }

    #[must_use]
    pub fn with_months_removed(self) -> Self {
        self.without(MONTHS)
    }

    #[must_use]
    pub fn with_weeks_removed(self) -> Self {
        self.without(WEEKS)
    }

    #[must_use]
    pub fn with_days_removed(self) -> Self {
        self.without(DAYS)
    }

    #[must_use]
    pub fn with_hours_removed(self) -> Self {
        self.without(HOURS)
    }

    #[must_use]
    pub fn with_minutes_removed(self) -> Self {
        self.without(MINUTES)
    }

    #[must_use]
    pub fn with_seconds_removed(self) -> Self {
        self.without(SECONDS)
    }

    #[must_use]
    pub fn with_millis_removed(self) -> Self {
        self.without(MILLIS)
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PeriodType[{}]", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    #[test]
    fn indices_follow_supported_units() {
        let ymd = PeriodType::year_month_day();
        assert_eq!(ymd.size(), 3);
        assert_eq!(ymd.index_of(DurationFieldType::Years), Some(0));
        assert_eq!(ymd.index_of(DurationFieldType::Days), Some(2));
        assert_eq!(ymd.index_of(DurationFieldType::Weeks), None);
        assert_eq!(ymd.field_type(1), Some(DurationFieldType::Months));
        assert_eq!(ymd.field_type(3), None);
        assert_eq!(PeriodType::standard().size(), 8);
        assert_eq!(PeriodType::time().index_of(DurationFieldType::Millis), Some(3));
    }

    #[test]
    fn names() {
        assert_eq!(PeriodType::standard().name(), "Standard");
        assert_eq!(PeriodType::day_time().name(), "DayTime");
        assert_eq!(
            PeriodType::standard().with_years_removed().name(),
            "StandardNoYears"
        );
        assert_eq!(
            PeriodType::standard().with_weeks_removed(),
            PeriodType::year_month_day_time()
        );
        assert_eq!(PeriodType::millis().to_string(), "PeriodType[Millis]");
    }

    #[test]
    fn for_fields_in_any_order() {
        let built = PeriodType::for_fields(&[
            DurationFieldType::Days,
            DurationFieldType::Years,
            DurationFieldType::Months,
        ])
        .unwrap();
        assert_eq!(built, PeriodType::year_month_day());
        let units: Vec<_> = built.field_types().collect();
        assert_eq!(
            units,
            [
                DurationFieldType::Years,
                DurationFieldType::Months,
                DurationFieldType::Days
            ]
        );
        assert!(PeriodType::for_fields(&[]).is_err());
        assert!(PeriodType::for_fields(&[DurationFieldType::Centuries]).is_err());
    }
}
