//! The `chronology_rs` crate implements calendar arithmetic on a
//! millisecond timeline.
//!
//! A [`Chronology`] pairs a calendar system with a time zone and hands out
//! a [`DateTimeField`] for every component of a date and time and a
//! [`DurationField`] for every unit. The value types are built on top of
//! it: [`DateTime`] and [`Instant`] name absolute instants, [`LocalDate`],
//! [`LocalTime`], [`LocalDateTime`] and [`Partial`] hold wall clock fields,
//! [`Duration`] is an exact length of time, [`Period`] a length in calendar
//! units and [`Interval`] a half-open span.
//!
//! ```rust
//! use chronology_rs::{Chronology, DateTime, Period};
//!
//! let iso = Chronology::iso_utc();
//! let start = DateTime::from_ymd_hms(2013, 1, 31, 0, 0, 0, 0, iso.clone()).unwrap();
//! let end = DateTime::from_ymd_hms(2013, 3, 30, 0, 0, 0, 0, iso).unwrap();
//!
//! let period = Period::between(&start, &end, None).unwrap();
//! assert_eq!(period.to_string(), "P1M4W2D");
//! ```
//!
//! Calendars other than ISO are selected with [`CalendarSystem`], and zones
//! with offset transitions come from a
//! [`TimeZoneProvider`](zone_provider::TimeZoneProvider).
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    // Currently throws a false positive regarding dependencies that are only used in tests.
    unused_crate_dependencies,
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::too_many_lines,
    clippy::cognitive_complexity,
    clippy::missing_errors_doc,
    clippy::let_unit_value,
    clippy::option_if_let_else,

    // Millisecond arithmetic moves between i32 and i64 throughout.
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap,

    clippy::missing_panics_doc,
)]

extern crate alloc;
extern crate core;

#[cfg(feature = "std")]
extern crate std;

#[doc(hidden)]
#[macro_export]
macro_rules! chrono_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err($crate::ChronoError::internal());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err($crate::ChronoError::internal());
        }
    };
}

pub mod calendar;
pub mod chronology;
pub mod convert;
pub mod error;
pub mod fields;
pub mod format;
pub mod host;
pub mod julian_day;
pub mod options;
pub mod timezone;

#[cfg(feature = "std")]
pub mod context;
#[cfg(feature = "sys")]
pub mod sys;

mod builtins;

#[doc(hidden)]
pub(crate) mod rounding;
#[doc(hidden)]
pub(crate) mod utils;

/// Re-export of `TinyAsciiStr` from `tinystr`.
pub use tinystr::TinyAsciiStr;

/// Re-export of the zone rule crate.
pub use zone_provider;

#[doc(inline)]
pub use error::{ChronoError, ErrorKind};

/// The `chronology_rs` result type
pub type ChronoResult<T> = Result<T, ChronoError>;

pub use crate::builtins::{
    is_contiguous, DateTime, Duration, Instant, Interval, LocalDate, LocalDateTime, LocalTime,
    Now, Partial, Period, PeriodType, ReadablePartial,
};
pub use calendar::CalendarSystem;
pub use chronology::Chronology;
pub use fields::{DateTimeField, DateTimeFieldType, DurationField, DurationFieldType};
pub use format::{DateTimeParser, DateTimePrinter, IsoFormat};
pub use options::{Disambiguation, RoundingMode};
pub use timezone::TimeZone;

#[cfg(feature = "std")]
pub use context::TimeContext;
#[cfg(feature = "sys")]
pub use sys::SystemHost;

/// A library specific trait for unwrapping assertions.
pub(crate) trait ChronoUnwrap {
    type Output;

    /// `chronology_rs` based assertion for unwrapping. This will panic in
    /// debug builds, but returns an internal error at runtime.
    fn chrono_unwrap(self) -> ChronoResult<Self::Output>;
}

impl<T> ChronoUnwrap for Option<T> {
    type Output = T;

    fn chrono_unwrap(self) -> ChronoResult<Self::Output> {
        debug_assert!(self.is_some());
        self.ok_or(ChronoError::internal())
    }
}

/// Milliseconds per day constant: 8.64e+7
pub const MS_PER_DAY: u32 = 24 * 60 * 60 * 1000;
