//! String-keyed metadata carried by a status object.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tonic::metadata::{Ascii, KeyAndValueRef, MetadataKey, MetadataMap, MetadataValue};
use tracing::warn;

/// Metadata key holding the application-defined internal code.
///
/// This is the logical key; [`Metadata::set`] stores it lower-cased, as gRPC
/// metadata keys travel on the wire.
pub const INTERNAL_CODE_KEY: &str = "internalCode";

/// Ordered string map with case-insensitive keys.
///
/// Keys are stored lower-cased, the same way they travel on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct Metadata {
    entries: BTreeMap<String, String>,
}

fn normalize_key(key: &str) -> String {
    key.to_ascii_lowercase()
}

impl Metadata {
    /// Empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Metadata holding only the internal code.
    pub fn with_internal_code(internal_code: i32) -> Self {
        let mut metadata = Self::new();
        metadata.set(INTERNAL_CODE_KEY, internal_code.to_string());
        metadata
    }

    /// Set `key` to `value`, returning the previous value.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Option<String> {
        self.entries.insert(normalize_key(key), value.into())
    }

    /// Value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(&normalize_key(key)).map(String::as_str)
    }

    /// Remove `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(&normalize_key(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&normalize_key(key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Internal code parsed from [`INTERNAL_CODE_KEY`], if present and numeric.
    pub fn internal_code(&self) -> Option<i32> {
        self.get(INTERNAL_CODE_KEY).and_then(|v| v.parse().ok())
    }

    /// Convert to tonic metadata.
    ///
    /// Entries that are not valid ASCII metadata are skipped.
    pub fn to_metadata_map(&self) -> MetadataMap {
        let mut map = MetadataMap::new();
        for (key, value) in &self.entries {
            let parsed_key = MetadataKey::<Ascii>::from_bytes(key.as_bytes());
            let parsed_value = MetadataValue::<Ascii>::try_from(value.as_str());
            match (parsed_key, parsed_value) {
                (Ok(k), Ok(v)) => {
                    map.insert(k, v);
                }
                _ => warn!(key = %key, "Skipping metadata entry that is not valid ASCII metadata"),
            }
        }
        map
    }

    /// Collect the ASCII entries of tonic metadata.
    pub fn from_metadata_map(map: &MetadataMap) -> Self {
        let mut metadata = Self::new();
        for entry in map.iter() {
            if let KeyAndValueRef::Ascii(key, value) = entry {
                match value.to_str() {
                    Ok(v) => {
                        metadata.set(key.as_str(), v);
                    }
                    Err(_) => warn!(key = %key.as_str(), "Skipping non-printable metadata value"),
                }
            }
        }
        metadata
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut metadata = Self::new();
        for (key, value) in iter {
            metadata.set(key.as_ref(), value);
        }
        metadata
    }
}

impl From<BTreeMap<String, String>> for Metadata {
    fn from(entries: BTreeMap<String, String>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<Metadata> for BTreeMap<String, String> {
    fn from(metadata: Metadata) -> Self {
        metadata.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_case_insensitive() {
        let mut metadata = Metadata::new();
        metadata.set("internalCode", "7");

        assert_eq!(metadata.get("internalCode"), Some("7"));
        assert_eq!(metadata.get("internalcode"), Some("7"));
        assert_eq!(metadata.get("INTERNALCODE"), Some("7"));
        assert_eq!(metadata.len(), 1);
    }

    #[test]
    fn test_set_replaces_previous_value() {
        let mut metadata = Metadata::new();
        assert_eq!(metadata.set("trace", "a"), None);
        assert_eq!(metadata.set("Trace", "b"), Some("a".to_string()));
        assert_eq!(metadata.get("trace"), Some("b"));
    }

    #[test]
    fn test_internal_code_parsing() {
        assert_eq!(Metadata::with_internal_code(42).internal_code(), Some(42));
        assert_eq!(Metadata::with_internal_code(-3).internal_code(), Some(-3));

        let garbage: Metadata = [("internalCode", "abc")].into_iter().collect();
        assert_eq!(garbage.internal_code(), None);
        assert_eq!(Metadata::new().internal_code(), None);
    }

    #[test]
    fn test_tonic_map_round_trip() {
        let metadata: Metadata = [("internalCode", "12"), ("x-request-id", "abc")]
            .into_iter()
            .collect();

        let map = metadata.to_metadata_map();
        assert_eq!(map.get("internalcode").and_then(|v| v.to_str().ok()), Some("12"));

        assert_eq!(Metadata::from_metadata_map(&map), metadata);
    }

    #[test]
    fn test_invalid_entries_are_skipped() {
        let metadata: Metadata = [("ok", "fine"), ("bad key", "x"), ("line", "a\nb")]
            .into_iter()
            .collect();

        let map = metadata.to_metadata_map();
        assert_eq!(map.len(), 1);
        assert!(map.get("ok").is_some());
    }

    #[test]
    fn test_remove_and_iterate() {
        let mut metadata: Metadata = [("b", "2"), ("A", "1")].into_iter().collect();

        let entries: Vec<(&str, &str)> = metadata.iter().collect();
        assert_eq!(entries, vec![("a", "1"), ("b", "2")]);

        assert_eq!(metadata.remove("B"), Some("2".to_string()));
        assert!(!metadata.contains_key("b"));
        assert!(metadata.contains_key("a"));
    }

    #[test]
    fn test_deserialize_normalizes_keys() {
        let metadata: Metadata = serde_json::from_str(r#"{"internalCode":"7","X-Trace":"t"}"#).unwrap();

        assert_eq!(metadata.get("internalCode"), Some("7"));
        assert_eq!(metadata.internal_code(), Some(7));
        assert_eq!(metadata.len(), 2);

        let json = serde_json::to_string(&metadata).unwrap();
        assert_eq!(json, r#"{"internalcode":"7","x-trace":"t"}"#);
        assert_eq!(serde_json::from_str::<Metadata>(&json).unwrap(), metadata);
    }
}
