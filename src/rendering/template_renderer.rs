//! Template renderer implementation.
//!
//! Provides the live preview of a prompt template:
//! - Single-pass tokenization into literals and `{{identifier}}` placeholders
//! - Substitution of non-empty draft values, marked as user-supplied
//! - Output format conversion (plain, Markdown, HTML, JSON)
//!
//! A placeholder is `{{`, a non-empty run of characters other than `}`, then
//! `}}`. Anything else, including `{{}}` and `{{a}b}}`, is literal text.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::{self, Write};
use tracing::debug;

use crate::models::{InputDraft, PromptTemplate, VariableSchema};
use crate::{Error, Result};

/// A lexical unit of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Text copied verbatim.
    Literal(&'a str),
    /// A `{{identifier}}` occurrence.
    Placeholder {
        /// Text between the braces.
        identifier: &'a str,
        /// The full occurrence, braces included.
        raw: &'a str,
    },
}

/// Splits a template into literal and placeholder tokens.
///
/// Occurrences never overlap and are found left to right. Adjacent literal
/// text is emitted as a single token.
#[must_use]
pub fn tokenize(template: &str) -> Vec<Token<'_>> {
    let bytes = template.as_bytes();
    let mut tokens = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    while i + 1 < bytes.len() {
        if bytes[i] != b'{' || bytes[i + 1] != b'{' {
            i += 1;
            continue;
        }

        let body_start = i + 2;
        let mut j = body_start;
        while j < bytes.len() && bytes[j] != b'}' {
            j += 1;
        }

        // No closing brace anywhere after this point: nothing left to match.
        if j >= bytes.len() {
            break;
        }

        if j > body_start && bytes.get(j + 1) == Some(&b'}') {
            if literal_start < i {
                tokens.push(Token::Literal(&template[literal_start..i]));
            }
            tokens.push(Token::Placeholder {
                identifier: &template[body_start..j],
                raw: &template[i..j + 2],
            });
            i = j + 2;
            literal_start = i;
        } else {
            // Every start before `j` shares the same run and fails the same way.
            i = j + 1;
        }
    }

    if literal_start < template.len() {
        tokens.push(Token::Literal(&template[literal_start..]));
    }
    tokens
}

/// A span of rendered output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Segment {
    /// Template text, including unfilled placeholders.
    Text {
        /// The text.
        text: String,
    },
    /// A user-supplied value substituted for a placeholder.
    Filled {
        /// Variable key.
        key: String,
        /// Substituted value.
        value: String,
    },
}

/// Rendered template with user-supplied spans marked.
///
/// A display artifact only: it is never fed back into validation or storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkedUpString {
    segments: Vec<Segment>,
}

impl MarkedUpString {
    /// Returns the segments in order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the keys of filled segments in order of appearance.
    #[must_use]
    pub fn filled_keys(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Filled { key, .. } => Some(key.as_str()),
                Segment::Text { .. } => None,
            })
            .collect()
    }

    /// Returns true if at least one value was substituted.
    #[must_use]
    pub fn has_filled(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| matches!(segment, Segment::Filled { .. }))
    }

    /// Returns the text with markers removed.
    #[must_use]
    pub fn to_plain(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text { text } => out.push_str(text),
                Segment::Filled { value, .. } => out.push_str(value),
            }
        }
        out
    }

    /// Converts the rendered output to the given format.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn format(&self, format: PreviewFormat) -> Result<String> {
        match format {
            PreviewFormat::Plain => Ok(self.to_plain()),
            PreviewFormat::Markdown => Ok(self.to_markdown()),
            PreviewFormat::Html => Ok(self.to_html()),
            PreviewFormat::Json => self.to_json(),
        }
    }

    fn push_text(&mut self, text: &str) {
        if let Some(Segment::Text { text: last }) = self.segments.last_mut() {
            last.push_str(text);
        } else {
            self.segments.push(Segment::Text {
                text: text.to_string(),
            });
        }
    }

    fn push_filled(&mut self, key: &str, value: &str) {
        self.segments.push(Segment::Filled {
            key: key.to_string(),
            value: value.to_string(),
        });
    }

    fn to_markdown(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text { text } => out.push_str(text),
                Segment::Filled { value, .. } => {
                    let _ = write!(out, "**{value}**");
                },
            }
        }
        out
    }

    fn to_html(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text { text } => out.push_str(&escape_html(text)),
                Segment::Filled { key, value } => {
                    let _ = write!(
                        out,
                        "<span class=\"filled\" data-variable=\"{}\">{}</span>",
                        escape_html(key),
                        escape_html(value)
                    );
                },
            }
        }
        out
    }

    fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&serde_json::json!({
            "segments": self.segments,
            "text": self.to_plain(),
        }))
        .map_err(|e| Error::OperationFailed {
            operation: "json_conversion".to_string(),
            cause: e.to_string(),
        })
    }
}

impl fmt::Display for MarkedUpString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_plain())
    }
}

/// Output format for a rendered preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewFormat {
    /// Plain text, markers dropped.
    #[default]
    Plain,
    /// Markdown, filled values in bold.
    Markdown,
    /// Escaped HTML, filled values wrapped in a `filled` span.
    Html,
    /// JSON with the segment list and plain text.
    Json,
}

impl PreviewFormat {
    /// Returns the format as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Markdown => "markdown",
            Self::Html => "html",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for PreviewFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PreviewFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Ok(Self::Plain),
            "markdown" | "md" => Ok(Self::Markdown),
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            _ => Err(Error::InvalidInput(format!(
                "Invalid preview format: {s}. Expected: plain, markdown, html, or json"
            ))),
        }
    }
}

/// Template rendering engine.
#[derive(Debug, Clone, Default)]
pub struct TemplateRenderer {
    _private: (),
}

impl TemplateRenderer {
    /// Creates a new template renderer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders `template` with the values in `draft`.
    ///
    /// Placeholders with a non-empty draft value become filled segments;
    /// all other placeholders keep their original text.
    #[must_use]
    pub fn render(&self, template: &PromptTemplate, draft: &InputDraft) -> MarkedUpString {
        let mut rendered = MarkedUpString::default();
        for token in tokenize(template.as_str()) {
            match token {
                Token::Literal(text) => rendered.push_text(text),
                Token::Placeholder { identifier, raw } => match draft.filled(identifier) {
                    Some(value) => rendered.push_filled(identifier, value),
                    None => rendered.push_text(raw),
                },
            }
        }
        rendered
    }

    /// Renders and converts to `format` in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if format conversion fails.
    pub fn render_as(
        &self,
        template: &PromptTemplate,
        draft: &InputDraft,
        format: PreviewFormat,
    ) -> Result<String> {
        self.render(template, draft).format(format)
    }

    /// Returns placeholder identifiers with no matching schema key.
    ///
    /// These are not errors: templates may reference values supplied
    /// outside the declared schema, and they render literally.
    #[must_use]
    pub fn unresolved_placeholders(
        &self,
        template: &PromptTemplate,
        schema: &VariableSchema,
    ) -> Vec<String> {
        let mut seen = HashSet::new();
        let unresolved: Vec<String> = tokenize(template.as_str())
            .into_iter()
            .filter_map(|token| match token {
                Token::Placeholder { identifier, .. } => Some(identifier),
                Token::Literal(_) => None,
            })
            .filter(|identifier| !schema.contains(identifier))
            .filter(|identifier| seen.insert(*identifier))
            .map(ToString::to_string)
            .collect();

        if !unresolved.is_empty() {
            debug!(count = unresolved.len(), placeholders = ?unresolved, "unresolved placeholders pass through");
        }
        unresolved
    }
}

/// Escapes text for HTML element content and attribute values.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
