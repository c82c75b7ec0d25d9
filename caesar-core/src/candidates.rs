//! The candidate set produced by brute-forcing every non-identity key

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Every shift worth trying; 0 would just return the ciphertext
pub const KEY_SPACE: RangeInclusive<u8> = 1..=25;

/// Decrypted candidates keyed by the shift that produced them,
/// in ascending key order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateSet {
    entries: IndexMap<u8, String>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the candidate for `key`, replacing any earlier one
    pub fn insert(&mut self, key: u8, candidate: String) {
        self.entries.insert(key, candidate);
    }

    pub fn get(&self, key: u8) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = u8> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Keys whose candidate equals `plaintext`
    pub fn keys_for(&self, plaintext: &str) -> Vec<u8> {
        self.iter()
            .filter(|(_, candidate)| *candidate == plaintext)
            .map(|(key, _)| key)
            .collect()
    }
}

impl FromIterator<(u8, String)> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = (u8, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_space_skips_identity() {
        assert!(!KEY_SPACE.contains(&0));
        assert_eq!(KEY_SPACE.count(), 25);
    }

    #[test]
    fn test_keeps_insertion_order() {
        let set: CandidateSet = [(3, "c"), (1, "a"), (2, "b")]
            .into_iter()
            .map(|(k, v)| (k, v.to_string()))
            .collect();

        assert_eq!(set.keys().collect::<Vec<_>>(), vec![3, 1, 2]);
        assert_eq!(set.get(1), Some("a"));
        assert_eq!(set.get(9), None);
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let mut set = CandidateSet::new();
        set.insert(1, "Dahhk".to_string());
        set.insert(2, "Czggj".to_string());

        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"1":"Dahhk","2":"Czggj"}"#);

        let back: CandidateSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn test_keys_for() {
        let mut set = CandidateSet::new();
        set.insert(1, "same".to_string());
        set.insert(2, "other".to_string());
        set.insert(3, "same".to_string());

        assert_eq!(set.keys_for("same"), vec![1, 3]);
        assert!(set.keys_for("missing").is_empty());
    }
}
