//! Variable schema models.
//!
//! A [`VariableSchema`] is the ordered, immutable description of the inputs a
//! prompt template asks for. Keys are unique and match the `{{key}}`
//! placeholders of the template; order is display order.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::{Error, Result};

/// Kind of input a variable collects.
///
/// Serialized with the names used by prompt configuration payloads:
/// `string`, `paragraph` and `select`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VariableKind {
    /// Single line of text.
    #[default]
    #[serde(rename = "string", alias = "text")]
    SingleLineText,
    /// Free-form multi-line text.
    #[serde(rename = "paragraph")]
    MultiLineText,
    /// One value out of a fixed list of options.
    #[serde(rename = "select", alias = "choice")]
    Choice,
}

impl VariableKind {
    /// Returns the kind as its wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SingleLineText => "string",
            Self::MultiLineText => "paragraph",
            Self::Choice => "select",
        }
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single prompt variable definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableDefinition {
    /// Unique key, matching the template placeholder name.
    pub key: String,
    /// Label shown next to the input.
    #[serde(alias = "name")]
    pub display_name: String,
    /// Kind of input.
    #[serde(rename = "type", default)]
    pub kind: VariableKind,
    /// Whether a non-empty value is needed before submitting.
    #[serde(default = "default_required")]
    pub required: bool,
    /// Maximum input length; the configured default applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Selectable options (choice variables only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

/// Default value for `required` field (true).
const fn default_required() -> bool {
    true
}

impl VariableDefinition {
    /// Creates a required single-line text variable.
    #[must_use]
    pub fn text(key: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            kind: VariableKind::SingleLineText,
            required: true,
            max_length: None,
            options: Vec::new(),
        }
    }

    /// Creates a required multi-line text variable.
    #[must_use]
    pub fn paragraph(key: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            kind: VariableKind::MultiLineText,
            ..Self::text(key, display_name)
        }
    }

    /// Creates a required choice variable.
    #[must_use]
    pub fn choice(
        key: impl Into<String>,
        display_name: impl Into<String>,
        options: Vec<String>,
    ) -> Self {
        Self {
            kind: VariableKind::Choice,
            options,
            ..Self::text(key, display_name)
        }
    }

    /// Marks the variable as optional.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Sets the maximum input length.
    #[must_use]
    pub const fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Returns the maximum input length, falling back to `default`.
    #[must_use]
    pub fn effective_max_length(&self, default: usize) -> usize {
        self.max_length.unwrap_or(default)
    }

    fn validate(&self) -> Result<()> {
        if self.key.is_empty() {
            return Err(Error::InvalidInput(format!(
                "variable '{}' has an empty key",
                self.display_name
            )));
        }
        if self.key.contains(['{', '}']) {
            return Err(Error::InvalidInput(format!(
                "variable key '{}' cannot contain braces",
                self.key
            )));
        }
        if self.kind == VariableKind::Choice && self.options.is_empty() {
            return Err(Error::InvalidInput(format!(
                "choice variable '{}' has no options",
                self.key
            )));
        }
        Ok(())
    }
}

/// Ordered, validated sequence of variable definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<VariableDefinition>", into = "Vec<VariableDefinition>")]
pub struct VariableSchema {
    definitions: Vec<VariableDefinition>,
}

impl VariableSchema {
    /// Creates a schema from definitions in display order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for duplicate or empty keys, keys with
    /// braces, or choice variables without options.
    pub fn new(definitions: Vec<VariableDefinition>) -> Result<Self> {
        let mut seen = HashSet::new();
        for definition in &definitions {
            definition.validate()?;
            if !seen.insert(definition.key.as_str()) {
                return Err(Error::InvalidInput(format!(
                    "duplicate variable key '{}'",
                    definition.key
                )));
            }
        }
        Ok(Self { definitions })
    }

    /// Creates an empty schema.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            definitions: Vec::new(),
        }
    }

    /// Returns true when the schema declares at least one variable.
    #[must_use]
    pub fn has_variables(&self) -> bool {
        !self.definitions.is_empty()
    }

    /// Number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns true if the schema is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Iterates definitions in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, VariableDefinition> {
        self.definitions.iter()
    }

    /// Iterates keys in display order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.definitions.iter().map(|d| d.key.as_str())
    }

    /// Looks up a definition by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&VariableDefinition> {
        self.definitions.iter().find(|d| d.key == key)
    }

    /// Returns true if `key` is declared.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

impl TryFrom<Vec<VariableDefinition>> for VariableSchema {
    type Error = Error;

    fn try_from(definitions: Vec<VariableDefinition>) -> Result<Self> {
        Self::new(definitions)
    }
}

impl From<VariableSchema> for Vec<VariableDefinition> {
    fn from(schema: VariableSchema) -> Self {
        schema.definitions
    }
}

impl<'a> IntoIterator for &'a VariableSchema {
    type Item = &'a VariableDefinition;
    type IntoIter = std::slice::Iter<'a, VariableDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.definitions.iter()
    }
}
