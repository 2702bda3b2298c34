//! Time zone rule data and providers.
//!
//! This crate holds the zone-side data that `chronology_rs` consumes:
//! transition tables ([`ZoneRules`]), the local-time lookup result
//! ([`LocalTimeRecordResult`]) and the [`TimeZoneProvider`] trait used to
//! source rules by identifier.
//!
//! Loading zone databases from disk is not handled here; a provider is
//! anything that can hand out [`ZoneRules`] for an identifier, for instance
//! the hash map backed [`MemoryProvider`].
//!
//! ```rust
//! use zone_provider::{MemoryProvider, TimeZoneProvider, UtcOffsetMillis, ZoneRules};
//!
//! let mut provider = MemoryProvider::new();
//! provider.insert(ZoneRules::fixed("Asia/Kolkata", UtcOffsetMillis(19_800_000)).unwrap());
//!
//! let zone = provider.get_zone("Asia/Kolkata").unwrap();
//! assert_eq!(zone.offset_at(0), UtcOffsetMillis(19_800_000));
//! assert_eq!(provider.normalize_identifier("asia/kolkata").as_deref(), Some("Asia/Kolkata"));
//! ```

mod error;
pub mod provider;
pub mod rules;

pub use error::TimeZoneProviderError;
pub use provider::{MemoryProvider, NeverProvider, TimeZoneProvider};
pub use rules::{
    GapEntryOffsets, LocalTimeRecord, LocalTimeRecordResult, Transition, UtcOffsetMillis,
    ZoneRules, MAX_OFFSET_MILLIS,
};

/// The result type for provider operations.
pub type TimeZoneProviderResult<T> = Result<T, TimeZoneProviderError>;
