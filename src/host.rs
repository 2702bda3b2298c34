//! Trait definitions for accessing values from the host environment.
//!
//! NOTE: This is a power user API.

use zone_provider::TimeZoneProvider;

use crate::{utils, ChronoResult, TimeZone};

/// The `HostClock` trait defines an accessor to the host's clock.
pub trait HostClock {
    /// Milliseconds since the epoch.
    fn now_millis(&self) -> ChronoResult<i64>;
}

/// The `HostTimeZone` trait defines the host's time zone.
pub trait HostTimeZone {
    fn host_time_zone(&self, provider: &(impl TimeZoneProvider + ?Sized)) -> ChronoResult<TimeZone>;
}

/// `HostHooks` marks a type that provides both a clock and a default zone.
pub trait HostHooks: HostClock + HostTimeZone {}

// Implement empty providers

impl HostClock for () {
    fn now_millis(&self) -> ChronoResult<i64> {
        Ok(0)
    }
}

impl HostTimeZone for () {
    fn host_time_zone(&self, _: &(impl TimeZoneProvider + ?Sized)) -> ChronoResult<TimeZone> {
        Ok(TimeZone::Utc)
    }
}

impl HostHooks for () {}

/// A clock stopped at a fixed instant.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl HostClock for FixedClock {
    fn now_millis(&self) -> ChronoResult<i64> {
        Ok(self.0)
    }
}

impl HostTimeZone for FixedClock {
    fn host_time_zone(&self, _: &(impl TimeZoneProvider + ?Sized)) -> ChronoResult<TimeZone> {
        Ok(TimeZone::Utc)
    }
}

impl HostHooks for FixedClock {}

/// A clock running a fixed number of milliseconds ahead of another.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OffsetClock<C> {
    pub inner: C,
    pub offset: i64,
}

impl<C: HostClock> HostClock for OffsetClock<C> {
    fn now_millis(&self) -> ChronoResult<i64> {
        utils::checked_add(self.inner.now_millis()?, self.offset)
    }
}

impl<C: HostTimeZone> HostTimeZone for OffsetClock<C> {
    fn host_time_zone(
        &self,
        provider: &(impl TimeZoneProvider + ?Sized),
    ) -> ChronoResult<TimeZone> {
        self.inner.host_time_zone(provider)
    }
}

impl<C: HostHooks> HostHooks for OffsetClock<C> {}
