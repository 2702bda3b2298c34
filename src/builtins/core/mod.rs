//! The value types of the crate.

/// Generates a getter and a `with_*` setter for each listed field. `$read`
/// names the method that reads a field's value as `i32`.
macro_rules! field_accessors {
    ($read:ident; $($get:ident, $with:ident => $variant:ident;)+) => {
        $(
            #[inline]
            pub fn $get(&self) -> i32 {
                self.$read($crate::fields::DateTimeFieldType::$variant)
            }

            pub fn $with(&self, value: i32) -> $crate::ChronoResult<Self> {
                self.with_field($crate::fields::DateTimeFieldType::$variant, value)
            }
        )+
    };
}

/// Generates `plus_*` and `minus_*` methods for each listed unit on top of
/// `with_field_added`.
macro_rules! unit_arithmetic {
    ($($plus:ident, $minus:ident => $variant:ident;)+) => {
        $(
            pub fn $plus(&self, amount: i32) -> $crate::ChronoResult<Self> {
                self.with_field_added($crate::fields::DurationFieldType::$variant, amount)
            }

            pub fn $minus(&self, amount: i32) -> $crate::ChronoResult<Self> {
                self.with_field_added(
                    $crate::fields::DurationFieldType::$variant,
                    $crate::utils::checked_mul_i32(amount, -1)?,
                )
            }
        )+
    };
}

mod date_time;
mod duration;
mod instant;
mod interval;
mod local_date;
mod local_date_time;
mod local_time;
mod now;
pub(crate) mod partial;
mod period;
mod period_type;

pub use date_time::DateTime;
pub use duration::Duration;
pub use instant::Instant;
pub use interval::Interval;
pub use local_date::LocalDate;
pub use local_date_time::LocalDateTime;
pub use local_time::LocalTime;
pub use now::Now;
pub use partial::{is_contiguous, Partial, ReadablePartial};
pub use period::Period;
pub use period_type::PeriodType;
