//! Process-wide time configuration.
//!
//! A [`TimeContext`] bundles the clock, the default zone and the zone
//! abbreviation table. Values can be passed around explicitly, and one
//! context can be installed as the process default.

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use core::fmt;
use std::sync::RwLock;

use rustc_hash::FxHashMap;
use tinystr::TinyAsciiStr;
use zone_provider::TimeZoneProvider;

use crate::{
    error::ErrorMessage,
    host::{HostClock, HostHooks, HostTimeZone},
    ChronoError, ChronoResult, TimeZone,
};

const DEFAULT_ABBREVIATIONS: [(&str, &str); 11] = [
    ("UT", "UTC"),
    ("UTC", "UTC"),
    ("GMT", "UTC"),
    ("EST", "America/New_York"),
    ("EDT", "America/New_York"),
    ("CST", "America/Chicago"),
    ("CDT", "America/Chicago"),
    ("MST", "America/Denver"),
    ("MDT", "America/Denver"),
    ("PST", "America/Los_Angeles"),
    ("PDT", "America/Los_Angeles"),
];

static CURRENT: RwLock<Option<TimeContext>> = RwLock::new(None);

/// The clock, default zone and abbreviation table used when none is given
/// explicitly.
#[derive(Clone)]
pub struct TimeContext {
    clock: Arc<dyn HostClock + Send + Sync>,
    default_zone: TimeZone,
    abbreviations: FxHashMap<TinyAsciiStr<8>, String>,
}

impl TimeContext {
    /// A context reading `clock`, defaulting to UTC, with the standard North
    /// American abbreviations.
    pub fn new(clock: impl HostClock + Send + Sync + 'static) -> Self {
        let abbreviations = DEFAULT_ABBREVIATIONS
            .iter()
            .filter_map(|(abbr, id)| {
                TinyAsciiStr::try_from_str(abbr)
                    .ok()
                    .map(|abbr| (abbr, (*id).to_string()))
            })
            .collect();
        Self {
            clock: Arc::new(clock),
            default_zone: TimeZone::Utc,
            abbreviations,
        }
    }

    #[must_use]
    pub fn with_default_zone(mut self, zone: TimeZone) -> Self {
        self.default_zone = zone;
        self
    }

    /// Maps an abbreviation of at most eight ASCII characters to a zone
    /// identifier.
    pub fn with_abbreviation(mut self, abbreviation: &str, identifier: &str) -> ChronoResult<Self> {
        let key = Self::abbreviation_key(abbreviation)?;
        self.abbreviations.insert(key, identifier.to_string());
        Ok(self)
    }

    pub fn default_zone(&self) -> &TimeZone {
        &self.default_zone
    }

    /// The zone identifier an abbreviation stands for, ignoring ASCII case.
    pub fn abbreviation(&self, abbreviation: &str) -> Option<&str> {
        let key = Self::abbreviation_key(abbreviation).ok()?;
        self.abbreviations.get(&key).map(String::as_str)
    }

    /// Resolves an abbreviation to a zone through `provider`.
    pub fn resolve_abbreviation(
        &self,
        abbreviation: &str,
        provider: &(impl TimeZoneProvider + ?Sized),
    ) -> ChronoResult<TimeZone> {
        let identifier = self
            .abbreviation(abbreviation)
            .ok_or(ChronoError::argument().with_enum(ErrorMessage::TimeZoneNameInvalid))?;
        TimeZone::try_from_identifier_str_with_provider(identifier, provider)
    }

    fn abbreviation_key(abbreviation: &str) -> ChronoResult<TinyAsciiStr<8>> {
        TinyAsciiStr::try_from_str(abbreviation)
            .map(|key| key.to_ascii_uppercase())
            .map_err(|_| ChronoError::argument().with_enum(ErrorMessage::TimeZoneNameInvalid))
    }

    /// The installed process default, or a UTC context on the host clock.
    pub fn current() -> Self {
        let guard = CURRENT.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.clone().unwrap_or_default()
    }

    /// Installs `context` as the process default, returning the previous
    /// one.
    pub fn replace_current(context: Self) -> Option<Self> {
        let mut guard = CURRENT.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        #[cfg(feature = "log")]
        log::debug!("replacing the default time context: {context:?}");
        guard.replace(context)
    }

    /// Removes the installed process default.
    pub fn reset_current() -> Option<Self> {
        let mut guard = CURRENT.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.take()
    }
}

impl Default for TimeContext {
    fn default() -> Self {
        #[cfg(feature = "sys")]
        {
            Self::new(crate::sys::SystemHost)
        }
        #[cfg(not(feature = "sys"))]
        {
            Self::new(())
        }
    }
}

impl fmt::Debug for TimeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimeContext")
            .field("default_zone", &self.default_zone)
            .field("abbreviations", &self.abbreviations.len())
            .finish_non_exhaustive()
    }
}

impl HostClock for TimeContext {
    fn now_millis(&self) -> ChronoResult<i64> {
        self.clock.now_millis()
    }
}

impl HostTimeZone for TimeContext {
    fn host_time_zone(&self, _: &(impl TimeZoneProvider + ?Sized)) -> ChronoResult<TimeZone> {
        Ok(self.default_zone.clone())
    }
}

impl HostHooks for TimeContext {}
