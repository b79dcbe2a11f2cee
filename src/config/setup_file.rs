//! Setup file: one configuration surface described in TOML.
//!
//! ```toml
//! conversation_name = "Study session"
//! template = "You are a tutor for {{subject}}."
//!
//! [site]
//! title = "Tutor"
//! privacy_policy = "https://example.com/privacy"
//!
//! [flags]
//! public = false
//! can_edit_inputs = true
//!
//! [[variables]]
//! key = "subject"
//! name = "Subject"
//! type = "select"
//! options = ["Math", "Physics"]
//!
//! [saved_inputs]
//! subject = "Math"
//! ```

use serde::Deserialize;
use std::path::Path;

use crate::models::{
    InputDraft, PanelFlags, PromptTemplate, SavedInputs, SiteInfo, VariableSchema,
};
use crate::services::WelcomeControllerBuilder;
use crate::{Error, Result, WelcomeController};

/// Deployment flags as written in a setup file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SetupFlags {
    /// Public version.
    #[serde(default, alias = "is_public_version")]
    pub public: bool,
    /// The user may edit saved inputs.
    #[serde(default = "default_can_edit")]
    pub can_edit_inputs: bool,
    /// Inputs were already saved; implied by a `[saved_inputs]` table.
    #[serde(default)]
    pub has_saved_inputs: bool,
}

const fn default_can_edit() -> bool {
    true
}

impl Default for SetupFlags {
    fn default() -> Self {
        Self {
            public: false,
            can_edit_inputs: default_can_edit(),
            has_saved_inputs: false,
        }
    }
}

/// A setup surface definition.
#[derive(Debug, Clone, Deserialize)]
pub struct SetupFile {
    /// Site information.
    #[serde(default)]
    pub site: SiteInfo,
    /// Conversation name shown once inputs are saved.
    #[serde(default)]
    pub conversation_name: String,
    /// Deployment flags.
    #[serde(default)]
    pub flags: SetupFlags,
    /// Prompt template.
    #[serde(default)]
    pub template: PromptTemplate,
    /// Variable schema, in display order.
    #[serde(default = "VariableSchema::empty")]
    pub variables: VariableSchema,
    /// Previously saved values.
    #[serde(default)]
    pub saved_inputs: Option<InputDraft>,
}

impl SetupFile {
    /// Parses a setup file from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or the schema is
    /// invalid.
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| Error::OperationFailed {
            operation: "parse_setup_file".to_string(),
            cause: e.to_string(),
        })
    }

    /// Loads a setup file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::OperationFailed {
            operation: "read_setup_file".to_string(),
            cause: format!("{}: {e}", path.display()),
        })?;
        Self::from_toml(&contents)
    }

    /// Flags for the core.
    #[must_use]
    pub const fn panel_flags(&self) -> PanelFlags {
        PanelFlags {
            has_saved_inputs: self.flags.has_saved_inputs || self.saved_inputs.is_some(),
            is_public_version: self.flags.public,
            can_edit_inputs: self.flags.can_edit_inputs,
        }
    }

    /// Saved snapshot, if the file has one.
    #[must_use]
    pub fn saved(&self) -> Option<SavedInputs> {
        self.saved_inputs.clone().map(SavedInputs::new)
    }

    /// Controller builder with everything this file describes.
    #[must_use]
    pub fn into_builder(self) -> WelcomeControllerBuilder {
        let flags = self.panel_flags();
        let saved = self.saved();
        let builder = WelcomeController::builder(self.variables, self.template)
            .flags(flags)
            .site(self.site)
            .conversation_name(self.conversation_name);
        match saved {
            Some(saved) => builder.saved_inputs(saved),
            None => builder,
        }
    }
}
