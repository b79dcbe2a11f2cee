//! Prompt template model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A prompt template with zero or more `{{identifier}}` placeholders.
///
/// Identifiers need not match schema keys; unmatched placeholders are kept
/// literally when rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromptTemplate(String);

impl PromptTemplate {
    /// Creates a template from its source text.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    /// Returns the template source.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the template is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PromptTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PromptTemplate {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PromptTemplate {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
