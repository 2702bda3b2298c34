//! Date/time fields and duration fields bound to a chronology.
//!
//! A [`DateTimeField`] reads and writes one calendar component of an
//! absolute instant; a [`DurationField`] adds and measures one unit of
//! elapsed time. Both are thin views over a [`Chronology`]: they convert the
//! instant to the chronology's wall clock, apply the calendar arithmetic and
//! resolve the result back through the zone.

use crate::{
    error::ErrorMessage, options::RoundingMode, rounding, utils, ChronoError, ChronoResult,
    Chronology,
};

pub(crate) mod local;
mod types;

#[cfg(test)]
mod tests;

pub use types::{DateTimeFieldType, DurationFieldType};

pub(crate) use local::LocalFields;

// ==== DateTimeField ====

/// One calendar component of a chronology, such as the month of the year.
#[derive(Debug, Clone, Copy)]
pub struct DateTimeField<'a> {
    chronology: &'a Chronology,
    field_type: DateTimeFieldType,
}

impl<'a> DateTimeField<'a> {
    pub(crate) fn new(chronology: &'a Chronology, field_type: DateTimeFieldType) -> Self {
        Self {
            chronology,
            field_type,
        }
    }

    #[inline]
    fn local(&self) -> LocalFields {
        self.chronology.local_fields()
    }

    /// Fields with units below half a day apply to the absolute timeline.
    #[inline]
    fn is_time_field(&self) -> bool {
        self.field_type.duration_type().is_time_unit()
    }

    #[inline]
    pub fn field_type(&self) -> DateTimeFieldType {
        self.field_type
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.field_type.name()
    }

    /// The unit this field counts in.
    pub fn duration_field(&self) -> DurationField<'a> {
        DurationField::new(self.chronology, self.field_type.duration_type())
    }

    /// The unit that bounds this field, if any.
    pub fn range_duration_field(&self) -> Option<DurationField<'a>> {
        self.field_type
            .range_duration_type()
            .map(|unit| DurationField::new(self.chronology, unit))
    }

    /// Reads the field's value at an instant.
    pub fn get(&self, instant: i64) -> i32 {
        let local = self.chronology.zone().offset_at(instant).saturating_add(instant);
        self.local().get(self.field_type, local) as i32
    }

    /// Writes the field's value, clamping smaller fields that would become
    /// invalid.
    ///
    /// Raises a field-value error when `value` is out of range, and an
    /// argument error when the resulting wall clock time does not exist in
    /// the zone.
    pub fn set(&self, instant: i64, value: i32) -> ChronoResult<i64> {
        let zone = self.chronology.zone();
        let local = zone.utc_to_local(instant)?;
        let local = self.local().set(self.field_type, local, i64::from(value))?;
        let result = zone.local_to_utc_with_original(local, instant)?;
        if !zone.is_fixed() && self.get(result) != value {
            return Err(ChronoError::argument().with_enum(ErrorMessage::IllegalInstantInGap));
        }
        Ok(result)
    }

    /// Adds to the field, carrying into larger fields.
    pub fn add(&self, instant: i64, amount: i64) -> ChronoResult<i64> {
        self.apply(instant, |local| {
            self.local().add(self.field_type.duration_type(), local, amount)
        })
    }

    /// Adds to the field, wrapping within its own range without touching
    /// larger fields.
    pub fn add_wrap_field(&self, instant: i64, amount: i32) -> ChronoResult<i64> {
        self.apply(instant, |local| {
            self.local().add_wrap_field(self.field_type, local, i64::from(amount))
        })
    }

    /// The difference between two instants in this field's unit.
    pub fn difference(&self, minuend: i64, subtrahend: i64) -> ChronoResult<i32> {
        utils::to_i32(self.difference_as_long(minuend, subtrahend)?)
    }

    pub fn difference_as_long(&self, minuend: i64, subtrahend: i64) -> ChronoResult<i64> {
        self.duration_field().difference_as_long(minuend, subtrahend)
    }

    /// Rounds down to the start of the field's current value.
    pub fn round_floor(&self, instant: i64) -> ChronoResult<i64> {
        self.apply(instant, |local| self.local().round_floor(self.field_type, local))
    }

    /// Rounds up to the start of the next value, unless already there.
    pub fn round_ceiling(&self, instant: i64) -> ChronoResult<i64> {
        self.apply(instant, |local| self.local().round_ceiling(self.field_type, local))
    }

    /// Rounds to the nearest boundary, ties going to the floor.
    pub fn round_half_floor(&self, instant: i64) -> ChronoResult<i64> {
        self.round(instant, RoundingMode::HalfFloor)
    }

    /// Rounds to the nearest boundary, ties going to the ceiling.
    pub fn round_half_ceiling(&self, instant: i64) -> ChronoResult<i64> {
        self.round(instant, RoundingMode::HalfCeiling)
    }

    /// Rounds to the nearest boundary. Ties keep the floor when its value
    /// is even and take the ceiling otherwise.
    pub fn round_half_even(&self, instant: i64) -> ChronoResult<i64> {
        self.round(instant, RoundingMode::HalfEven)
    }

    /// Rounds to a boundary of this field using `mode`.
    pub fn round(&self, instant: i64, mode: RoundingMode) -> ChronoResult<i64> {
        match mode {
            RoundingMode::Floor => self.round_floor(instant),
            RoundingMode::Ceiling => self.round_ceiling(instant),
            _ => {
                let floor = self.round_floor(instant)?;
                let ceiling = self.round_ceiling(instant)?;
                let floor_is_even = self.get(floor) & 1 == 0;
                Ok(rounding::choose_instant(instant, floor, ceiling, mode, floor_is_even))
            }
        }
    }

    /// The milliseconds elapsed since the field's floor.
    pub fn remainder(&self, instant: i64) -> ChronoResult<i64> {
        utils::checked_sub(instant, self.round_floor(instant)?)
    }

    /// The smallest legal value, regardless of instant.
    pub fn minimum_value(&self) -> i32 {
        self.local().bounds(self.field_type).0 as i32
    }

    /// The largest legal value, regardless of instant.
    pub fn maximum_value(&self) -> i32 {
        self.local().bounds(self.field_type).1 as i32
    }

    pub fn minimum_value_at(&self, instant: i64) -> i32 {
        self.local().bounds_at(self.field_type, self.local_millis(instant)).0 as i32
    }

    /// The largest legal value at an instant, such as the number of days in
    /// the instant's month.
    pub fn maximum_value_at(&self, instant: i64) -> i32 {
        self.local().bounds_at(self.field_type, self.local_millis(instant)).1 as i32
    }

    /// The smallest legal value given the other values of a partial.
    pub fn minimum_value_for_partial(&self, types: &[DateTimeFieldType], values: &[i32]) -> i32 {
        self.local().bounds_for_partial(self.field_type, types, values).0 as i32
    }

    /// The largest legal value given the other values of a partial.
    pub fn maximum_value_for_partial(&self, types: &[DateTimeFieldType], values: &[i32]) -> i32 {
        self.local().bounds_for_partial(self.field_type, types, values).1 as i32
    }

    /// Whether the value at `instant` is a leap value, such as Feb 29.
    pub fn is_leap(&self, instant: i64) -> bool {
        self.local().is_leap(self.field_type, self.local_millis(instant))
    }

    pub fn leap_amount(&self, instant: i64) -> i32 {
        i32::from(self.is_leap(instant))
    }

    #[inline]
    fn local_millis(&self, instant: i64) -> i64 {
        self.chronology.zone().offset_at(instant).saturating_add(instant)
    }

    /// Applies a local operation, choosing absolute or wall clock arithmetic
    /// by the field's unit.
    fn apply(&self, instant: i64, op: impl FnOnce(i64) -> ChronoResult<i64>) -> ChronoResult<i64> {
        let zone = self.chronology.zone();
        let offset = zone.offset_at(instant);
        let local = op(utils::checked_add(instant, offset)?)?;
        if local == i64::MIN || local == i64::MAX {
            return Ok(local);
        }
        if self.is_time_field() {
            return utils::checked_sub(local, offset);
        }
        zone.local_to_utc_with_original(local, instant)
    }
}

// ==== DurationField ====

/// One unit of elapsed time in a chronology.
///
/// A duration field is precise when every unit has the same length in
/// milliseconds. Months and years never are; days and weeks are precise
/// only in a zone with a fixed offset.
#[derive(Debug, Clone, Copy)]
pub struct DurationField<'a> {
    chronology: &'a Chronology,
    unit: DurationFieldType,
}

impl<'a> DurationField<'a> {
    pub(crate) fn new(chronology: &'a Chronology, unit: DurationFieldType) -> Self {
        Self { chronology, unit }
    }

    #[inline]
    pub fn unit(&self) -> DurationFieldType {
        self.unit
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.unit.name()
    }

    /// Eras are the only unit without arithmetic.
    #[inline]
    pub fn is_supported(&self) -> bool {
        self.unit != DurationFieldType::Eras
    }

    pub fn is_precise(&self) -> bool {
        self.unit.fixed_millis().is_some()
            && (self.unit.is_time_unit() || self.chronology.zone().is_fixed())
    }

    /// The exact length of one unit when precise, or its average length.
    pub fn unit_millis(&self) -> i64 {
        if let Some(millis) = self.unit.fixed_millis() {
            return millis;
        }
        let rules = self.chronology.calendar().rules();
        match self.unit {
            DurationFieldType::Months => rules.average_millis_per_month(),
            DurationFieldType::Years | DurationFieldType::Weekyears => {
                rules.average_millis_per_year()
            }
            DurationFieldType::Centuries => rules.average_millis_per_year() * 100,
            _ => 0,
        }
    }

    fn check_supported(&self) -> ChronoResult<()> {
        if !self.is_supported() {
            return Err(ChronoError::unsupported().with_enum(ErrorMessage::ErasUnsupported));
        }
        Ok(())
    }

    /// The number of units in a duration, truncated toward zero.
    pub fn value(&self, duration: i64) -> ChronoResult<i32> {
        utils::to_i32(self.value_as_long(duration)?)
    }

    pub fn value_as_long(&self, duration: i64) -> ChronoResult<i64> {
        self.check_supported()?;
        Ok(duration / self.unit_millis())
    }

    /// The number of units in a duration that starts at `instant`.
    pub fn value_at(&self, duration: i64, instant: i64) -> ChronoResult<i64> {
        self.difference_as_long(utils::checked_add(instant, duration)?, instant)
    }

    /// The length of `value` units, average when imprecise.
    pub fn millis_for(&self, value: i64) -> ChronoResult<i64> {
        self.check_supported()?;
        utils::checked_mul(value, self.unit_millis())
    }

    /// The exact length of `value` units starting at `instant`.
    pub fn millis_for_at(&self, value: i64, instant: i64) -> ChronoResult<i64> {
        utils::checked_sub(self.add(instant, value)?, instant)
    }

    /// Adds `value` units to an instant.
    pub fn add(&self, instant: i64, value: i64) -> ChronoResult<i64> {
        self.check_supported()?;
        if value == 0 {
            return Ok(instant);
        }
        let zone = self.chronology.zone();
        let offset = zone.offset_at(instant);
        let local = self
            .chronology
            .local_fields()
            .add(self.unit, utils::checked_add(instant, offset)?, value)?;
        if self.unit.is_time_unit() {
            return utils::checked_sub(local, offset);
        }
        zone.local_to_utc(local, crate::options::Disambiguation::Compatible)
    }

    /// The whole number of units from `subtrahend` to `minuend`.
    ///
    /// `difference(add(i, v), i) == v` for every representable `v`.
    pub fn difference(&self, minuend: i64, subtrahend: i64) -> ChronoResult<i32> {
        utils::to_i32(self.difference_as_long(minuend, subtrahend)?)
    }

    pub fn difference_as_long(&self, minuend: i64, subtrahend: i64) -> ChronoResult<i64> {
        self.check_supported()?;
        let zone = self.chronology.zone();
        let offset = zone.offset_at(subtrahend);
        let minuend_offset = if self.unit.is_time_unit() {
            offset
        } else {
            zone.offset_at(minuend)
        };
        let value = self.chronology.local_fields().difference(
            self.unit,
            utils::checked_add(minuend, minuend_offset)?,
            utils::checked_add(subtrahend, offset)?,
        )?;
        if self.unit.is_time_unit() || zone.is_fixed() {
            return Ok(value);
        }
        Ok(self.settle_difference(minuend, subtrahend, value))
    }

    // The wall clock difference can be one unit off when `add` resolved a
    // skipped local time. Settle on the value whose sum still lies between
    // the two instants.
    fn settle_difference(&self, minuend: i64, subtrahend: i64, value: i64) -> i64 {
        let lands = |value: i64| self.add(subtrahend, value).ok();
        if minuend >= subtrahend {
            if lands(value).is_some_and(|sum| sum > minuend) {
                return value.saturating_sub(1);
            }
            if lands(value.saturating_add(1)).is_some_and(|sum| sum <= minuend) {
                return value.saturating_add(1);
            }
        } else {
            if lands(value).is_some_and(|sum| sum < minuend) {
                return value.saturating_add(1);
            }
            if lands(value.saturating_sub(1)).is_some_and(|sum| sum >= minuend) {
                return value.saturating_sub(1);
            }
        }
        value
    }
}
