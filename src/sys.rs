//! The host system's clock and time zone.

use web_time::{SystemTime, UNIX_EPOCH};
use zone_provider::TimeZoneProvider;

use crate::{
    builtins::core::Now,
    host::{HostClock, HostHooks, HostTimeZone},
    utils, ChronoError, ChronoResult, TimeZone,
};

/// The host system: [`web_time::SystemTime`] for the clock and
/// [`iana_time_zone`] for the zone name.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SystemHost;

impl SystemHost {
    /// A `Now` reading the host system.
    pub fn now() -> Now<Self> {
        Now::new(Self)
    }
}

impl HostHooks for SystemHost {}

impl HostClock for SystemHost {
    fn now_millis(&self) -> ChronoResult<i64> {
        system_time_millis(SystemTime::now())
    }
}

impl HostTimeZone for SystemHost {
    fn host_time_zone(
        &self,
        provider: &(impl TimeZoneProvider + ?Sized),
    ) -> ChronoResult<TimeZone> {
        let name = iana_time_zone::get_timezone().map_err(|_| {
            ChronoError::unsupported().with_message("the system time zone could not be read")
        })?;
        #[cfg(feature = "log")]
        log::debug!("host time zone is {name}");
        TimeZone::try_from_identifier_str_with_provider(&name, provider)
    }
}

/// Milliseconds since the epoch of a system time, negative before it.
pub(crate) fn system_time_millis(time: SystemTime) -> ChronoResult<i64> {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => utils::to_i64(after.as_millis()),
        Err(before) => {
            let millis = before.duration().as_nanos().div_ceil(1_000_000);
            utils::checked_neg(utils::to_i64(millis)?)
        }
    }
}
