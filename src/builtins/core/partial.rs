//! Field sets without an instant: the `ReadablePartial` trait and the
//! free-form `Partial`.

use alloc::vec::Vec;
use core::fmt;

use crate::{
    builtins::core::DateTime,
    error::ErrorMessage,
    fields::{DateTimeField, DateTimeFieldType},
    ChronoError, ChronoResult, Chronology,
};

/// A set of field values that does not name an instant, such as a date
/// without a time.
///
/// Field types are ordered from the largest to the smallest, and the
/// chronology of a partial is always in UTC.
pub trait ReadablePartial {
    /// The UTC chronology the values are read in.
    fn chronology(&self) -> &Chronology;

    /// The field types, largest first.
    fn field_types(&self) -> &[DateTimeFieldType];

    /// The values, in the order of [`ReadablePartial::field_types`].
    fn values(&self) -> Vec<i32>;

    fn size(&self) -> usize {
        self.field_types().len()
    }

    fn field_type(&self, index: usize) -> Option<DateTimeFieldType> {
        self.field_types().get(index).copied()
    }

    fn value(&self, index: usize) -> Option<i32> {
        self.values().get(index).copied()
    }

    fn index_of(&self, field_type: DateTimeFieldType) -> Option<usize> {
        self.field_types().iter().position(|t| *t == field_type)
    }

    fn is_supported(&self, field_type: DateTimeFieldType) -> bool {
        self.index_of(field_type).is_some()
    }

    /// The value of `field_type`, or an argument error when the partial does
    /// not hold it.
    fn get(&self, field_type: DateTimeFieldType) -> ChronoResult<i32> {
        self.index_of(field_type)
            .and_then(|index| self.value(index))
            .ok_or(ChronoError::argument().with_enum(ErrorMessage::FieldNotSupported))
    }

    /// Fills in the fields of this partial on top of `base`.
    fn to_date_time(&self, base: &DateTime) -> ChronoResult<DateTime> {
        let chronology = base.chronology();
        let millis = chronology.set_partial(self, base.millis())?;
        Ok(DateTime::new(millis, chronology.clone()))
    }
}

/// Whether each field of a partial is bounded by the unit of the field
/// before it, as in year, month of year, day of month.
pub fn is_contiguous(partial: &(impl ReadablePartial + ?Sized)) -> bool {
    let mut previous = None;
    for field_type in partial.field_types() {
        if previous.is_some() && field_type.range_duration_type() != previous {
            return false;
        }
        previous = Some(field_type.duration_type());
    }
    true
}

/// An arbitrary set of field values, such as a month and a day.
///
/// ```rust
/// use chronology_rs::{DateTimeFieldType, Partial};
///
/// let birthday = Partial::try_new(
///     &[DateTimeFieldType::MonthOfYear, DateTimeFieldType::DayOfMonth],
///     &[2, 29],
///     None,
/// )
/// .unwrap();
/// let next = birthday.with_field_added(DateTimeFieldType::DayOfMonth, 1).unwrap();
/// assert_eq!(next.to_string(), "[monthOfYear=3, dayOfMonth=1]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Partial {
    chronology: Chronology,
    types: Vec<DateTimeFieldType>,
    values: Vec<i32>,
}

impl Partial {
    /// An empty partial in `chronology`, or ISO if none is given.
    pub fn new(chronology: Option<&Chronology>) -> Self {
        Self {
            chronology: chronology.map_or_else(Chronology::iso_utc, Chronology::with_utc),
            types: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Creates a partial from field types ordered largest first and their
    /// values.
    pub fn try_new(
        types: &[DateTimeFieldType],
        values: &[i32],
        chronology: Option<&Chronology>,
    ) -> ChronoResult<Self> {
        let chronology = chronology.map_or_else(Chronology::iso_utc, Chronology::with_utc);
        if types.len() != values.len() {
            return Err(ChronoError::argument().with_enum(ErrorMessage::ValuesLengthMismatch));
        }
        check_order(types)?;
        chronology.validate_fields(types, values)?;
        Ok(Self {
            chronology,
            types: types.to_vec(),
            values: values.to_vec(),
        })
    }

    /// Copies the fields of any partial.
    pub fn from_partial(partial: &(impl ReadablePartial + ?Sized)) -> Self {
        Self {
            chronology: partial.chronology().with_utc(),
            types: partial.field_types().to_vec(),
            values: partial.values(),
        }
    }

    fn with_values(&self, values: Vec<i32>) -> Self {
        Self {
            chronology: self.chronology.clone(),
            types: self.types.clone(),
            values,
        }
    }

    fn field_at(&self, index: usize) -> ChronoResult<DateTimeField<'_>> {
        self.types
            .get(index)
            .map(|field_type| self.chronology.field(*field_type))
            .ok_or(ChronoError::argument().with_enum(ErrorMessage::FieldNotSupported))
    }

    fn supported_index(&self, field_type: DateTimeFieldType) -> ChronoResult<usize> {
        self.index_of(field_type)
            .ok_or(ChronoError::argument().with_enum(ErrorMessage::FieldNotSupported))
    }

    /// Sets a field, inserting it in order when absent.
    pub fn with(&self, field_type: DateTimeFieldType, value: i32) -> ChronoResult<Self> {
        let Some(index) = self.index_of(field_type) else {
            let position = self
                .types
                .iter()
                .position(|t| field_type.cmp_size(*t).is_lt())
                .unwrap_or(self.types.len());
            let mut types = self.types.clone();
            let mut values = self.values.clone();
            types.insert(position, field_type);
            values.insert(position, value);
            return Self::try_new(&types, &values, Some(&self.chronology));
        };
        if self.values[index] == value {
            return Ok(self.clone());
        }
        let mut values = self.values.clone();
        self.set_value(index, &mut values, value)?;
        Ok(self.with_values(values))
    }

    /// Removes a field, if present.
    pub fn without(&self, field_type: DateTimeFieldType) -> ChronoResult<Self> {
        let Some(index) = self.index_of(field_type) else {
            return Ok(self.clone());
        };
        let mut types = self.types.clone();
        let mut values = self.values.clone();
        types.remove(index);
        values.remove(index);
        self.chronology.validate_fields(&types, &values)?;
        Ok(Self {
            chronology: self.chronology.clone(),
            types,
            values,
        })
    }

    /// Adds to a field, carrying into the field before it when that field
    /// counts in this field's range unit.
    pub fn with_field_added(
        &self,
        field_type: DateTimeFieldType,
        amount: i32,
    ) -> ChronoResult<Self> {
        let index = self.supported_index(field_type)?;
        let mut values = self.values.clone();
        self.add_value(index, &mut values, i64::from(amount), false)?;
        Ok(self.with_values(values))
    }

    /// Adds to a field, wrapping the largest field instead of failing.
    pub fn with_field_added_wrapped(
        &self,
        field_type: DateTimeFieldType,
        amount: i32,
    ) -> ChronoResult<Self> {
        let index = self.supported_index(field_type)?;
        let mut values = self.values.clone();
        self.add_value(index, &mut values, i64::from(amount), true)?;
        Ok(self.with_values(values))
    }

    /// Whether every field of this partial has the same value in `date_time`.
    pub fn is_match(&self, date_time: &DateTime) -> bool {
        let chronology = date_time.chronology();
        self.types.iter().zip(&self.values).all(|(field_type, value)| {
            chronology.field(*field_type).get(date_time.millis()) == *value
        })
    }

    // ==== Partial field arithmetic ====

    fn bounds(&self, index: usize, values: &[i32]) -> ChronoResult<(i64, i64)> {
        let field = self.field_at(index)?;
        Ok((
            i64::from(field.minimum_value_for_partial(&self.types, values)),
            i64::from(field.maximum_value_for_partial(&self.types, values)),
        ))
    }

    /// Sets one value and clamps the smaller fields to their new bounds.
    fn set_value(&self, index: usize, values: &mut [i32], value: i32) -> ChronoResult<()> {
        let (min, max) = self.bounds(index, values)?;
        crate::utils::verify_bounds(self.types[index].name(), i64::from(value), min, max)?;
        values[index] = value;
        for smaller in index + 1..values.len() {
            let (min, max) = self.bounds(smaller, values)?;
            values[smaller] = i64::from(values[smaller]).clamp(min, max) as i32;
        }
        Ok(())
    }

    /// The field before `index`, checked to count in this field's range.
    fn carry_index(&self, index: usize) -> ChronoResult<usize> {
        let previous = index - 1;
        if self.types[index].range_duration_type() != Some(self.types[previous].duration_type()) {
            return Err(ChronoError::argument().with_enum(ErrorMessage::PartialFieldsInvalidForAdd));
        }
        Ok(previous)
    }

    fn add_value(
        &self,
        index: usize,
        values: &mut [i32],
        amount: i64,
        wrap: bool,
    ) -> ChronoResult<()> {
        let mut amount = amount;
        if amount == 0 {
            return Ok(());
        }
        if index == 0 && wrap {
            let (min, max) = self.bounds(index, values)?;
            let span = max - min + 1;
            let wrapped = (i64::from(values[0]) - min + amount).rem_euclid(span) + min;
            return self.set_value(index, values, wrapped as i32);
        }
        while amount > 0 {
            let (_, max) = self.bounds(index, values)?;
            let proposed = i64::from(values[index]) + amount;
            if proposed <= max {
                values[index] = proposed as i32;
                break;
            }
            if index == 0 {
                return Err(ChronoError::argument().with_enum(ErrorMessage::PartialMaximumExceeded));
            }
            let previous = self.carry_index(index)?;
            amount -= max + 1 - i64::from(values[index]);
            self.add_value(previous, values, 1, wrap)?;
            values[index] = self.bounds(index, values)?.0 as i32;
        }
        while amount < 0 {
            let (min, _) = self.bounds(index, values)?;
            let proposed = i64::from(values[index]) + amount;
            if proposed >= min {
                values[index] = proposed as i32;
                break;
            }
            if index == 0 {
                return Err(ChronoError::argument().with_enum(ErrorMessage::PartialMinimumExceeded));
            }
            let previous = self.carry_index(index)?;
            amount -= min - 1 - i64::from(values[index]);
            self.add_value(previous, values, -1, wrap)?;
            values[index] = self.bounds(index, values)?.1 as i32;
        }
        let value = values[index];
        self.set_value(index, values, value)
    }
}

/// Checks that field types run from the largest to the smallest without
/// repeats.
fn check_order(types: &[DateTimeFieldType]) -> ChronoResult<()> {
    for pair in types.windows(2) {
        match pair[0].cmp_size(pair[1]) {
            core::cmp::Ordering::Less => {}
            core::cmp::Ordering::Equal => {
                return Err(ChronoError::argument().with_enum(ErrorMessage::PartialFieldDuplicated))
            }
            core::cmp::Ordering::Greater => {
                return Err(ChronoError::argument().with_enum(ErrorMessage::PartialFieldsOutOfOrder))
            }
        }
    }
    Ok(())
}

impl ReadablePartial for Partial {
    fn chronology(&self) -> &Chronology {
        &self.chronology
    }

    fn field_types(&self) -> &[DateTimeFieldType] {
        &self.types
    }

    fn values(&self) -> Vec<i32> {
        self.values.clone()
    }

    fn value(&self, index: usize) -> Option<i32> {
        self.values.get(index).copied()
    }
}

impl fmt::Display for Partial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, (field_type, value)) in self.types.iter().zip(&self.values).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field_type}={value}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::DateTimeFieldType as F;
    use alloc::string::ToString;

    fn month_day(month: i32, day: i32) -> Partial {
        Partial::try_new(&[F::MonthOfYear, F::DayOfMonth], &[month, day], None).unwrap()
    }

    #[test]
    fn rejects_bad_order_and_duplicates() {
        let err = Partial::try_new(&[F::DayOfMonth, F::MonthOfYear], &[1, 1], None).unwrap_err();
        assert_eq!(err.message(), ErrorMessage::PartialFieldsOutOfOrder.to_str());
        let err = Partial::try_new(&[F::DayOfMonth, F::DayOfMonth], &[1, 1], None).unwrap_err();
        assert_eq!(err.message(), ErrorMessage::PartialFieldDuplicated.to_str());
        assert!(Partial::try_new(&[F::MonthOfYear, F::DayOfMonth], &[4, 31], None).is_err());
        assert!(Partial::try_new(&[F::MonthOfYear], &[1, 2], None).is_err());
    }

    #[test]
    fn with_inserts_in_order() {
        let partial = Partial::new(None)
            .with(F::DayOfMonth, 31)
            .unwrap()
            .with(F::Year, 2013)
            .unwrap()
            .with(F::MonthOfYear, 1)
            .unwrap();
        assert_eq!(partial.field_types(), &[F::Year, F::MonthOfYear, F::DayOfMonth]);
        assert_eq!(partial.values(), [2013, 1, 31]);
        // Setting the month clamps the day.
        let february = partial.with(F::MonthOfYear, 2).unwrap();
        assert_eq!(february.get(F::DayOfMonth).unwrap(), 28);
        assert!(partial.get(F::HourOfDay).is_err());
        assert_eq!(partial.without(F::Year).unwrap().size(), 2);
    }

    #[test]
    fn field_added_carries_into_larger_fields() {
        let added = month_day(12, 31).with_field_added(F::DayOfMonth, 1);
        assert!(added.is_err());
        let added = month_day(1, 31).with_field_added(F::DayOfMonth, 1).unwrap();
        assert_eq!(added.values(), [2, 1]);
        let added = month_day(3, 1).with_field_added(F::DayOfMonth, -1).unwrap();
        assert_eq!(added.values(), [2, 29]);
        let wrapped = month_day(12, 31).with_field_added_wrapped(F::DayOfMonth, 1).unwrap();
        assert_eq!(wrapped.values(), [1, 1]);
        let wrapped = month_day(11, 15).with_field_added_wrapped(F::MonthOfYear, 3).unwrap();
        assert_eq!(wrapped.values(), [2, 15]);
    }

    #[test]
    fn contiguity_and_display() {
        assert!(is_contiguous(&month_day(1, 1)));
        let gap = Partial::try_new(&[F::Year, F::DayOfMonth], &[2000, 1], None).unwrap();
        assert!(!is_contiguous(&gap));
        assert_eq!(month_day(2, 29).to_string(), "[monthOfYear=2, dayOfMonth=29]");
    }

    #[test]
    fn matches_date_time() {
        let chronology = Chronology::iso_utc();
        let millis = chronology.date_time_millis(2013, 1, 31, 0).unwrap();
        let date_time = DateTime::new(millis, chronology);
        assert!(month_day(1, 31).is_match(&date_time));
        assert!(!month_day(1, 30).is_match(&date_time));
    }
}
