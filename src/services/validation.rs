//! Submission-readiness checks.
//!
//! Readiness is a pure predicate over the schema and a draft. Checking never
//! changes the draft.

use crate::models::{InputDraft, VariableSchema};
use crate::{Error, Result};

/// Outcome of a readiness check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Readiness {
    missing: Vec<String>,
}

impl Readiness {
    /// A ready result with nothing missing.
    #[must_use]
    pub const fn ready() -> Self {
        Self {
            missing: Vec::new(),
        }
    }

    /// Returns true when nothing is missing.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.missing.is_empty()
    }

    /// Keys of required variables without a value, in schema order.
    #[must_use]
    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    /// Converts to a result, reporting the first missing key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingRequiredVariable`] when not ready.
    pub fn into_result(self) -> Result<()> {
        match self.missing.into_iter().next() {
            Some(key) => Err(Error::MissingRequiredVariable(key)),
            None => Ok(()),
        }
    }
}

/// Decides whether a draft is complete enough to submit.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationGate;

impl ValidationGate {
    /// Creates a new validation gate.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Lists every required variable whose draft value is absent or empty.
    #[must_use]
    pub fn check(&self, schema: &VariableSchema, draft: &InputDraft) -> Readiness {
        let missing = schema
            .iter()
            .filter(|definition| definition.required)
            .filter(|definition| draft.filled(&definition.key).is_none())
            .map(|definition| definition.key.clone())
            .collect();
        Readiness { missing }
    }

    /// Returns true when every required variable has a non-empty value.
    #[must_use]
    pub fn can_submit(&self, schema: &VariableSchema, draft: &InputDraft) -> bool {
        self.check(schema, draft).is_ready()
    }
}
