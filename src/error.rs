//! This module implements `ChronoError`.

use alloc::borrow::Cow;
use alloc::format;
use core::fmt;

/// `ChronoError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An invalid argument, for instance an unknown zone identifier or a
    /// local time that does not exist in a zone.
    #[default]
    Argument,
    /// A field value outside of its legal bounds.
    FieldValue,
    /// A field or unit that the chronology or period type does not support.
    Unsupported,
    /// Signed overflow or an unrepresentable division.
    Arithmetic,
    /// A broken internal invariant.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Argument => "ArgumentError",
            Self::FieldValue => "FieldValueError",
            Self::Unsupported => "UnsupportedOperationError",
            Self::Arithmetic => "ArithmeticError",
            Self::Internal => "ImplementationError",
        }
        .fmt(f)
    }
}

/// The offending value of a field-value error, along with the bounds that
/// were violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldValueDetails {
    pub field: &'static str,
    pub value: i64,
    pub lower: Option<i64>,
    pub upper: Option<i64>,
}

/// The error type for `chronology_rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChronoError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
    details: Option<FieldValueDetails>,
}

impl ChronoError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
            details: None,
        }
    }

    /// Create an argument error.
    #[inline]
    #[must_use]
    pub const fn argument() -> Self {
        Self::new(ErrorKind::Argument)
    }

    /// Create a field-value error for `field` holding `value`, which must
    /// lie within `lower..=upper`.
    #[must_use]
    pub fn field_value(field: &'static str, value: i64, lower: i64, upper: i64) -> Self {
        Self {
            kind: ErrorKind::FieldValue,
            msg: Cow::Owned(format!(
                "Value {value} for {field} must be in the range [{lower},{upper}]"
            )),
            details: Some(FieldValueDetails {
                field,
                value,
                lower: Some(lower),
                upper: Some(upper),
            }),
        }
    }

    /// Create a field-value error without bounds, for values that are
    /// rejected for a reason other than their range.
    #[must_use]
    pub fn field_value_rejected(field: &'static str, value: i64, reason: &str) -> Self {
        Self {
            kind: ErrorKind::FieldValue,
            msg: Cow::Owned(format!("Value {value} for {field} is not supported: {reason}")),
            details: Some(FieldValueDetails {
                field,
                value,
                lower: None,
                upper: None,
            }),
        }
    }

    /// Create an unsupported-operation error.
    #[inline]
    #[must_use]
    pub const fn unsupported() -> Self {
        Self::new(ErrorKind::Unsupported)
    }

    /// Create an arithmetic error.
    #[inline]
    #[must_use]
    pub const fn arithmetic() -> Self {
        Self::new(ErrorKind::Arithmetic)
    }

    /// Creates an internal error.
    #[inline]
    #[must_use]
    #[cfg_attr(debug_assertions, track_caller)]
    pub(crate) const fn internal() -> Self {
        #[cfg(not(debug_assertions))]
        {
            Self::new(ErrorKind::Internal)
        }
        #[cfg(debug_assertions)]
        Self {
            kind: ErrorKind::Internal,
            msg: Cow::Borrowed(core::panic::Location::caller().file()),
            details: None,
        }
    }

    /// Add a message to the error.
    #[inline]
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = msg.into();
        self
    }

    /// Add a message enum to the error.
    #[inline]
    #[must_use]
    pub(crate) fn with_enum(mut self, msg: ErrorMessage) -> Self {
        self.msg = Cow::Borrowed(msg.to_str());
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Returns the field, value and bounds of a field-value error.
    #[inline]
    #[must_use]
    pub fn field_details(&self) -> Option<&FieldValueDetails> {
        self.details.as_ref()
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> Cow<'static, str> {
        self.msg
    }
}

impl fmt::Display for ChronoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.trim();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

impl core::error::Error for ChronoError {}

/// The error message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorMessage {
    // Arithmetic
    AdditionOverflow,
    MultiplicationOverflow,
    NegationOverflow,
    DivisionByZero,
    IntegerOverflow,

    // Unsupported
    ErasUnsupported,
    FieldNotSupported,
    YearsAndMonthsUnsupported,
    NormalizeMissingYearsOrMonths,

    // Arguments
    IntervalEndBeforeStart,
    IllegalInstantInGap,
    AmbiguousLocalTime,
    PartialFieldsOutOfOrder,
    PartialFieldDuplicated,
    PartialFieldsInvalidForAdd,
    PartialMaximumExceeded,
    PartialMinimumExceeded,
    PeriodTypeMismatch,
    TimeZoneNameInvalid,
    CalendarNameInvalid,
    RoundingModeInvalid,
    DisambiguationInvalid,
    ValuesLengthMismatch,
}

impl ErrorMessage {
    pub fn to_str(self) -> &'static str {
        match self {
            Self::AdditionOverflow => "The calculation caused an overflow during addition.",
            Self::MultiplicationOverflow => {
                "The calculation caused an overflow during multiplication."
            }
            Self::NegationOverflow => "The minimum value cannot be negated.",
            Self::DivisionByZero => "Division by zero.",
            Self::IntegerOverflow => "Value cannot fit in an i32.",
            Self::ErasUnsupported => "The eras unit does not support arithmetic.",
            Self::FieldNotSupported => "Field is not supported.",
            Self::YearsAndMonthsUnsupported => {
                "Cannot convert a period with years or months to a standard value."
            }
            Self::NormalizeMissingYearsOrMonths => {
                "Unable to normalize as the period type is missing either years or months \
                 but period has a month/year amount."
            }
            Self::IntervalEndBeforeStart => "The end instant must not be before the start instant.",
            Self::IllegalInstantInGap => {
                "Illegal instant due to time zone offset transition (daylight savings time 'gap')."
            }
            Self::AmbiguousLocalTime => "Local time is ambiguous in the time zone.",
            Self::PartialFieldsOutOfOrder => {
                "Partial fields must be in order, largest to smallest."
            }
            Self::PartialFieldDuplicated => "Partial fields must not contain duplicates.",
            Self::PartialFieldsInvalidForAdd => "Fields invalid for add.",
            Self::PartialMaximumExceeded => "Maximum value exceeded for add.",
            Self::PartialMinimumExceeded => "Minimum value exceeded for add.",
            Self::PeriodTypeMismatch => "Period does not support a field with a non-zero value.",
            Self::TimeZoneNameInvalid => "Time zone identifier does not exist.",
            Self::CalendarNameInvalid => "Invalid calendar identifier provided.",
            Self::RoundingModeInvalid => "Invalid rounding mode provided.",
            Self::DisambiguationInvalid => "Invalid disambiguation provided.",
            Self::ValuesLengthMismatch => "Values length must match the number of fields.",
        }
    }
}
