//! Site information and example-question content.

use serde::{Deserialize, Serialize};

/// Information about the hosting application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteInfo {
    /// Application title.
    #[serde(default)]
    pub title: String,
    /// Short description shown under the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Privacy policy URL; the footer is only shown when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy_policy: Option<String>,
}

impl SiteInfo {
    /// Creates site info with a title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            privacy_policy: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the privacy policy URL.
    #[must_use]
    pub fn with_privacy_policy(mut self, url: impl Into<String>) -> Self {
        self.privacy_policy = Some(url.into());
        self
    }
}

/// A titled group of example questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionCategory {
    /// Category heading.
    pub title: String,
    /// Questions in display order.
    #[serde(default)]
    pub questions: Vec<String>,
}

impl QuestionCategory {
    /// Creates a category.
    #[must_use]
    pub fn new(title: impl Into<String>, questions: Vec<String>) -> Self {
        Self {
            title: title.into(),
            questions,
        }
    }

    /// Returns true if `question` belongs to this category.
    #[must_use]
    pub fn contains(&self, question: &str) -> bool {
        self.questions.iter().any(|q| q == question)
    }
}
