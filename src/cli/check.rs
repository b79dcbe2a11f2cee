//! Check CLI command.

use std::fmt;
use std::path::Path;

use super::load_controller;
use crate::{Result, SetupConfig, WelcomeVariant};

/// Outcome of `check`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Active variant.
    pub variant: WelcomeVariant,
    /// Required variables still empty, in schema order.
    pub missing: Vec<String>,
    /// Whether the chat may start with this draft.
    pub can_start_chat: bool,
}

impl CheckReport {
    /// Returns true when no required variable is missing.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.missing.is_empty()
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ready() {
            write!(f, "ready")?;
        } else {
            write!(f, "missing: {}", self.missing.join(", "))?;
        }
        if !self.can_start_chat {
            write!(f, " (chat cannot start)")?;
        }
        Ok(())
    }
}

/// Checks whether the setup's draft is complete.
///
/// # Errors
///
/// Returns an error if the setup cannot be loaded.
pub fn cmd_check(setup: &Path, config: &SetupConfig, assignments: &[String]) -> Result<CheckReport> {
    let controller = load_controller(setup, config, assignments)?;
    let variant = controller.variant();
    let readiness = controller.readiness();
    let gated = controller.requires_complete_inputs();

    Ok(CheckReport {
        variant,
        can_start_chat: variant.offers_start_chat() && (readiness.is_ready() || !gated),
        missing: readiness.missing().to_vec(),
    })
}
