//! The `TimeZoneProvider` trait and in-memory implementations.

use std::collections::BTreeSet;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::ZoneRules;

/// A source of [`ZoneRules`] keyed by zone identifier.
pub trait TimeZoneProvider {
    /// Returns the rules for an identifier, matched exactly.
    fn get_zone(&self, identifier: &str) -> Option<Arc<ZoneRules>>;

    /// Returns every identifier this provider can resolve.
    fn available_ids(&self) -> BTreeSet<String>;

    /// Maps an identifier onto its canonical spelling, ignoring ASCII case.
    fn normalize_identifier(&self, identifier: &str) -> Option<String> {
        self.available_ids()
            .into_iter()
            .find(|id| id.eq_ignore_ascii_case(identifier))
    }
}

/// A provider backed by a hash map of rules.
#[derive(Debug, Default, Clone)]
pub struct MemoryProvider {
    zones: FxHashMap<String, Arc<ZoneRules>>,
    // Lowercased identifier -> canonical identifier.
    lowercase: FxHashMap<String, String>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a zone, replacing any rules registered under the same identifier.
    pub fn insert(&mut self, rules: ZoneRules) {
        let id = rules.id().to_owned();
        self.lowercase.insert(id.to_ascii_lowercase(), id.clone());
        self.zones.insert(id, Arc::new(rules));
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

impl FromIterator<ZoneRules> for MemoryProvider {
    fn from_iter<T: IntoIterator<Item = ZoneRules>>(iter: T) -> Self {
        let mut provider = Self::new();
        for rules in iter {
            provider.insert(rules);
        }
        provider
    }
}

impl TimeZoneProvider for MemoryProvider {
    fn get_zone(&self, identifier: &str) -> Option<Arc<ZoneRules>> {
        self.zones.get(identifier).cloned()
    }

    fn available_ids(&self) -> BTreeSet<String> {
        self.zones.keys().cloned().collect()
    }

    fn normalize_identifier(&self, identifier: &str) -> Option<String> {
        self.lowercase
            .get(&identifier.to_ascii_lowercase())
            .cloned()
    }
}

/// A provider that knows no zones.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverProvider;

impl TimeZoneProvider for NeverProvider {
    fn get_zone(&self, _identifier: &str) -> Option<Arc<ZoneRules>> {
        None
    }

    fn available_ids(&self) -> BTreeSet<String> {
        BTreeSet::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UtcOffsetMillis;

    #[test]
    fn memory_provider_lookup() {
        let provider: MemoryProvider = [
            ZoneRules::fixed("Europe/London", UtcOffsetMillis(0)).unwrap(),
            ZoneRules::fixed("Asia/Tokyo", UtcOffsetMillis(32_400_000)).unwrap(),
        ]
        .into_iter()
        .collect();

        assert_eq!(provider.len(), 2);
        assert!(provider.get_zone("Asia/Tokyo").is_some());
        assert!(provider.get_zone("asia/tokyo").is_none());
        assert_eq!(
            provider.normalize_identifier("ASIA/TOKYO").as_deref(),
            Some("Asia/Tokyo")
        );
        let ids: Vec<_> = provider.available_ids().into_iter().collect();
        assert_eq!(ids, ["Asia/Tokyo", "Europe/London"]);
    }

    #[test]
    fn insert_replaces_rules() {
        let mut provider = MemoryProvider::new();
        provider.insert(ZoneRules::fixed("Etc/Test", UtcOffsetMillis(0)).unwrap());
        provider.insert(ZoneRules::fixed("Etc/Test", UtcOffsetMillis(3_600_000)).unwrap());
        assert_eq!(provider.len(), 1);
        let zone = provider.get_zone("Etc/Test").unwrap();
        assert_eq!(zone.offset_at(0), UtcOffsetMillis(3_600_000));
    }

    #[test]
    fn never_provider_is_empty() {
        assert!(NeverProvider.get_zone("UTC").is_none());
        assert!(NeverProvider.normalize_identifier("UTC").is_none());
    }
}
