//! Draft and saved variable values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Working copy of variable values, keyed by variable key.
///
/// Values are always strings, including the selected option of a choice
/// variable. Drafts are replaced, not edited: every update returns a new
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputDraft(BTreeMap<String, String>);

impl InputDraft {
    /// Creates an empty draft.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns a copy of this draft with `key` mapped to `value`.
    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Returns the value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns the value for `key` only when it is non-empty.
    #[must_use]
    pub fn filled(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }

    /// Returns true if the draft holds an entry for `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates keys in key order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the draft has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InputDraft {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Identity of a saved-inputs snapshot.
///
/// A new identity means the owning application replaced the saved values
/// (new conversation, external update) and the draft must be re-seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnapshotId(Uuid);

impl SnapshotId {
    /// Creates a fresh, time-ordered snapshot identity.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SnapshotId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The last externally committed set of variable values.
///
/// Owned by the surrounding application; the core only reads it, diffs
/// against it and restores it on cancel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedInputs {
    /// Snapshot identity.
    #[serde(default)]
    pub id: SnapshotId,
    /// Committed values.
    pub values: InputDraft,
    /// When the snapshot was committed.
    #[serde(default = "Utc::now")]
    pub saved_at: DateTime<Utc>,
}

impl SavedInputs {
    /// Creates a snapshot with a fresh identity.
    #[must_use]
    pub fn new(values: InputDraft) -> Self {
        Self {
            id: SnapshotId::new(),
            values,
            saved_at: Utc::now(),
        }
    }

    /// Returns the committed values.
    #[must_use]
    pub const fn values(&self) -> &InputDraft {
        &self.values
    }

    /// Returns true if both snapshots share an identity.
    #[must_use]
    pub fn same_snapshot(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_value_replaces_single_entry() {
        let draft: InputDraft = [("name", "Ava"), ("city", "Oslo")].into_iter().collect();
        let updated = draft.clone().with_value("name", "Bo");

        assert_eq!(updated.get("name"), Some("Bo"));
        assert_eq!(updated.get("city"), Some("Oslo"));
        assert_eq!(draft.get("name"), Some("Ava"));
    }

    #[test]
    fn test_filled_ignores_empty_values() {
        let draft: InputDraft = [("name", ""), ("city", "Oslo")].into_iter().collect();

        assert_eq!(draft.filled("name"), None);
        assert_eq!(draft.filled("city"), Some("Oslo"));
        assert_eq!(draft.filled("missing"), None);
    }

    #[test]
    fn test_snapshot_identity() {
        let values: InputDraft = [("name", "Ava")].into_iter().collect();
        let first = SavedInputs::new(values.clone());
        let second = SavedInputs::new(values);

        assert!(first.same_snapshot(&first.clone()));
        assert!(!first.same_snapshot(&second));
        assert_eq!(first.values(), second.values());
    }

    #[test]
    fn test_draft_serializes_as_plain_map() {
        let draft: InputDraft = [("name", "Ava")].into_iter().collect();
        let json = serde_json::to_string(&draft).unwrap();
        assert_eq!(json, r#"{"name":"Ava"}"#);
    }
}
