//! Property-based tests for drafts and template rendering.
//!
//! Uses proptest to verify invariants across random inputs:
//! - Initialization yields exactly the schema's keys
//! - Templates without placeholders render unchanged
//! - Empty drafts leave every placeholder literal
//! - Validation reports exactly the empty required keys

// Property tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(clippy::expect_used, clippy::unwrap_used)]

use proptest::prelude::*;
use prompt_setup::{
    InputDraft, InputDraftStore, PromptTemplate, SavedInputs, TemplateRenderer, ValidationGate,
    VariableDefinition, VariableSchema,
};
use std::collections::BTreeSet;

fn schema_from(keys: &BTreeSet<String>, required: &[bool]) -> VariableSchema {
    VariableSchema::new(
        keys.iter()
            .zip(required.iter().cycle())
            .map(|(key, &required)| {
                let definition = VariableDefinition::text(key.clone(), key.to_uppercase());
                if required {
                    definition
                } else {
                    definition.optional()
                }
            })
            .collect(),
    )
    .unwrap()
}

fn key_set() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set("[a-z][a-z0-9_]{0,8}", 0..8)
}

// ============================================================================
// Draft initialization
// ============================================================================

proptest! {
    /// Property: without saved inputs every schema key maps to "".
    #[test]
    fn prop_initialize_without_saved_is_empty(keys in key_set()) {
        let schema = schema_from(&keys, &[true]);
        let draft = InputDraftStore::new().initialize(&schema, None);

        prop_assert_eq!(draft.len(), keys.len());
        for key in &keys {
            prop_assert_eq!(draft.get(key), Some(""));
        }
    }

    /// Property: a saved superset yields exactly the schema keys with saved values.
    #[test]
    fn prop_initialize_from_superset(
        keys in key_set(),
        extra in key_set(),
        value in "[ -~]{0,12}",
    ) {
        let schema = schema_from(&keys, &[true]);
        let saved: InputDraft = keys
            .iter()
            .chain(extra.iter())
            .map(|key| (key.clone(), format!("{value}-{key}")))
            .collect();
        let saved = SavedInputs::new(saved);

        let draft = InputDraftStore::new().initialize(&schema, Some(&saved));

        prop_assert_eq!(
            draft.keys().collect::<Vec<_>>(),
            keys.iter().map(String::as_str).collect::<Vec<_>>()
        );
        for key in &keys {
            let expected = format!("{value}-{key}");
            prop_assert_eq!(draft.get(key), Some(expected.as_str()));
        }
    }

    /// Property: re-initializing from a confirmed draft reproduces it.
    #[test]
    fn prop_initialize_reproduces_saved_draft(keys in key_set(), value in "[a-z]{1,6}") {
        let schema = schema_from(&keys, &[true]);
        let store = InputDraftStore::new();
        let draft = keys
            .iter()
            .fold(store.initialize(&schema, None), |draft, key| store.set(&draft, key, value.clone()));

        let saved = SavedInputs::new(draft.clone());
        prop_assert_eq!(store.initialize(&schema, Some(&saved)), draft);
    }
}

// ============================================================================
// Rendering
// ============================================================================

proptest! {
    /// Property: text without braces renders unchanged.
    #[test]
    fn prop_plain_text_renders_unchanged(text in "[^{}]{0,64}", value in "[a-z]{1,5}") {
        let draft: InputDraft = [("name", value)].into_iter().collect();
        let rendered = TemplateRenderer::new().render(&PromptTemplate::new(text.clone()), &draft);

        prop_assert!(!rendered.has_filled());
        prop_assert_eq!(rendered.to_plain(), text);
    }

    /// Property: an empty draft leaves any template text unchanged.
    #[test]
    fn prop_empty_draft_keeps_template(text in "[a-z {}]{0,64}") {
        let rendered =
            TemplateRenderer::new().render(&PromptTemplate::new(text.clone()), &InputDraft::new());

        prop_assert!(!rendered.has_filled());
        prop_assert_eq!(rendered.to_plain(), text);
    }

    /// Property: each filled placeholder is replaced by its value.
    #[test]
    fn prop_filled_placeholder_substituted(
        prefix in "[a-z ]{0,10}",
        suffix in "[a-z ]{0,10}",
        value in "[A-Z]{1,8}",
    ) {
        let template = PromptTemplate::new(format!("{prefix}{{{{name}}}}{suffix}"));
        let draft: InputDraft = [("name", value.clone())].into_iter().collect();
        let rendered = TemplateRenderer::new().render(&template, &draft);

        prop_assert_eq!(rendered.filled_keys(), vec!["name"]);
        prop_assert_eq!(rendered.to_plain(), format!("{prefix}{value}{suffix}"));
    }
}

// ============================================================================
// Validation
// ============================================================================

proptest! {
    /// Property: `check` reports exactly the empty required keys.
    #[test]
    fn prop_check_reports_empty_required(
        keys in key_set(),
        required in prop::collection::vec(any::<bool>(), 1..4),
        filled in prop::collection::vec(any::<bool>(), 1..4),
    ) {
        let schema = schema_from(&keys, &required);
        let draft: InputDraft = keys
            .iter()
            .zip(filled.iter().cycle())
            .map(|(key, &filled)| (key.clone(), if filled { "x".to_string() } else { String::new() }))
            .collect();

        let expected: Vec<String> = schema
            .iter()
            .filter(|d| d.required && draft.get(&d.key) == Some(""))
            .map(|d| d.key.clone())
            .collect();
        let readiness = ValidationGate::new().check(&schema, &draft);

        prop_assert_eq!(readiness.missing(), expected.as_slice());
        prop_assert_eq!(readiness.is_ready(), expected.is_empty());
    }
}
