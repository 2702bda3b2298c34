//! The current time, read from host hooks.

use zone_provider::TimeZoneProvider;

use crate::{
    builtins::core::{DateTime, Instant, LocalDate, LocalDateTime, LocalTime},
    host::HostHooks,
    ChronoResult, Chronology, TimeZone,
};

/// Reads the current time from a [`HostHooks`] implementation.
///
/// The host zone is resolved before the clock is read.
pub struct Now<H: HostHooks> {
    host: H,
}

impl<H: HostHooks> Now<H> {
    pub const fn new(host: H) -> Self {
        Self { host }
    }

    /// The current instant.
    pub fn instant(&self) -> ChronoResult<Instant> {
        self.host.now_millis().map(Instant::from_millis)
    }

    /// The current date-time in the ISO chronology of the host zone.
    pub fn date_time(&self, provider: &(impl TimeZoneProvider + ?Sized)) -> ChronoResult<DateTime> {
        let zone = self.host.host_time_zone(provider)?;
        self.date_time_in(zone)
    }

    /// The current date-time in the ISO chronology of `zone`.
    pub fn date_time_in(&self, zone: TimeZone) -> ChronoResult<DateTime> {
        let millis = self.host.now_millis()?;
        Ok(DateTime::new(millis, Chronology::iso(zone)))
    }

    /// Today's date in the host zone.
    pub fn local_date(
        &self,
        provider: &(impl TimeZoneProvider + ?Sized),
    ) -> ChronoResult<LocalDate> {
        self.date_time(provider)?.to_local_date()
    }

    /// The wall clock time in the host zone.
    pub fn local_time(
        &self,
        provider: &(impl TimeZoneProvider + ?Sized),
    ) -> ChronoResult<LocalTime> {
        self.date_time(provider)?.to_local_time()
    }

    /// The wall clock date and time in the host zone.
    pub fn local_date_time(
        &self,
        provider: &(impl TimeZoneProvider + ?Sized),
    ) -> ChronoResult<LocalDateTime> {
        self.date_time(provider)?.to_local_date_time()
    }
}
