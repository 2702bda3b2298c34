//! Conversion of foreign instant representations.
//!
//! Each supported type implements [`InstantSource`], so the conversion is
//! picked statically by type.

use crate::{
    builtins::core::{DateTime, Instant},
    ChronoResult, Chronology,
};

/// A value that names an instant and possibly the chronology it was read
/// in.
pub trait InstantSource {
    /// Milliseconds since the epoch.
    fn instant_millis(&self) -> ChronoResult<i64>;

    /// The chronology carried by the value, if any.
    fn chronology(&self) -> Option<Chronology> {
        None
    }
}

impl<T: InstantSource + ?Sized> InstantSource for &T {
    fn instant_millis(&self) -> ChronoResult<i64> {
        (**self).instant_millis()
    }

    fn chronology(&self) -> Option<Chronology> {
        (**self).chronology()
    }
}

impl InstantSource for i64 {
    fn instant_millis(&self) -> ChronoResult<i64> {
        Ok(*self)
    }
}

impl InstantSource for Instant {
    fn instant_millis(&self) -> ChronoResult<i64> {
        Ok(self.millis())
    }
}

impl InstantSource for DateTime {
    fn instant_millis(&self) -> ChronoResult<i64> {
        Ok(self.millis())
    }

    fn chronology(&self) -> Option<Chronology> {
        Some(DateTime::chronology(self).clone())
    }
}

#[cfg(feature = "sys")]
impl InstantSource for web_time::SystemTime {
    fn instant_millis(&self) -> ChronoResult<i64> {
        crate::sys::system_time_millis(*self)
    }
}
