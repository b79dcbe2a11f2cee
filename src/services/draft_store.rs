//! Draft lifecycle operations.
//!
//! Pure functions over [`InputDraft`] values. The caller decides when to
//! apply the returned draft.

use tracing::debug;

use crate::models::{InputDraft, SavedInputs, VariableSchema};

/// Creates, updates and resets drafts.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputDraftStore;

impl InputDraftStore {
    /// Creates a new draft store.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Seeds a draft with exactly one entry per schema key.
    ///
    /// Without saved inputs every key maps to `""`. With saved inputs each
    /// key takes its saved value; keys the snapshot lacks are backfilled with
    /// `""` and saved keys outside the schema are not carried over.
    ///
    /// Must be re-run whenever the saved snapshot's identity changes.
    #[must_use]
    pub fn initialize(&self, schema: &VariableSchema, saved: Option<&SavedInputs>) -> InputDraft {
        let Some(saved) = saved else {
            return schema.keys().map(|key| (key, "")).collect();
        };

        let missing: Vec<&str> = schema
            .keys()
            .filter(|key| !saved.values.contains_key(key))
            .collect();
        if !missing.is_empty() {
            debug!(snapshot = %saved.id, missing = ?missing, "backfilling keys absent from saved inputs");
        }

        schema
            .keys()
            .map(|key| (key, saved.values.get(key).unwrap_or_default()))
            .collect()
    }

    /// Returns `draft` with `key` mapped to `value`. No validation.
    #[must_use]
    pub fn set(&self, draft: &InputDraft, key: &str, value: impl Into<String>) -> InputDraft {
        draft.clone().with_value(key, value)
    }

    /// Discards unsaved edits, restoring `saved` exactly.
    #[must_use]
    pub fn reset(&self, draft: &InputDraft, saved: &SavedInputs) -> InputDraft {
        if draft != saved.values() {
            debug!(snapshot = %saved.id, "discarding unsaved edits");
        }
        saved.values.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VariableDefinition;

    fn schema() -> VariableSchema {
        VariableSchema::new(vec![
            VariableDefinition::text("name", "Name"),
            VariableDefinition::text("city", "City"),
        ])
        .unwrap()
    }

    #[test]
    fn test_initialize_without_saved_inputs() {
        let draft = InputDraftStore::new().initialize(&schema(), None);

        assert_eq!(draft.len(), 2);
        assert_eq!(draft.get("name"), Some(""));
        assert_eq!(draft.get("city"), Some(""));
    }

    #[test]
    fn test_initialize_adopts_saved_inputs() {
        let saved = SavedInputs::new([("name", "Ava"), ("city", "Oslo")].into_iter().collect());
        let draft = InputDraftStore::new().initialize(&schema(), Some(&saved));

        assert_eq!(&draft, saved.values());
    }

    #[test]
    fn test_initialize_backfills_partial_saved_inputs() {
        let saved = SavedInputs::new([("name", "Ava"), ("legacy", "x")].into_iter().collect());
        let draft = InputDraftStore::new().initialize(&schema(), Some(&saved));

        assert_eq!(draft.len(), 2);
        assert_eq!(draft.get("name"), Some("Ava"));
        assert_eq!(draft.get("city"), Some(""));
        assert_eq!(draft.get("legacy"), None);
    }

    #[test]
    fn test_set_changes_only_one_key() {
        let store = InputDraftStore::new();
        let draft = store.initialize(&schema(), None);
        let updated = store.set(&draft, "name", "Ava");

        assert_eq!(updated.get("name"), Some("Ava"));
        assert_eq!(updated.get("city"), Some(""));
        assert_eq!(draft.get("name"), Some(""));
    }

    #[test]
    fn test_set_accepts_undeclared_key() {
        let store = InputDraftStore::new();
        let updated = store.set(&InputDraft::new(), "free", "form");
        assert_eq!(updated.get("free"), Some("form"));
    }

    #[test]
    fn test_reset_restores_saved() {
        let store = InputDraftStore::new();
        let saved = SavedInputs::new([("name", "Ava"), ("city", "Oslo")].into_iter().collect());
        let edited = store.set(saved.values(), "name", "Bo");

        assert_eq!(&store.reset(&edited, &saved), saved.values());
    }
}
