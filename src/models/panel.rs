//! Panel state and the externally supplied flags that shape it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display mode of the variable panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelMode {
    /// Summary with an edit affordance; controls hidden.
    Collapsed,
    /// Fully visible, nothing to collapse back to.
    Expanded,
    /// Opened from `Collapsed` to change saved values.
    Editing,
}

impl PanelMode {
    /// Returns the mode as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Collapsed => "collapsed",
            Self::Expanded => "expanded",
            Self::Editing => "editing",
        }
    }

    /// Returns true when the panel hides its inputs.
    #[must_use]
    pub const fn is_folded(&self) -> bool {
        matches!(self, Self::Collapsed)
    }
}

impl fmt::Display for PanelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Flags owned by the surrounding application.
///
/// The core reads them to decide behavior but never changes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PanelFlags {
    /// Saved inputs exist for the current conversation.
    #[serde(default)]
    pub has_saved_inputs: bool,
    /// Deployment is the public-facing version.
    #[serde(default)]
    pub is_public_version: bool,
    /// The user may change saved inputs.
    #[serde(default)]
    pub can_edit_inputs: bool,
}

impl PanelFlags {
    /// Flags for a public deployment with no saved inputs yet.
    #[must_use]
    pub const fn public_version() -> Self {
        Self {
            has_saved_inputs: false,
            is_public_version: true,
            can_edit_inputs: true,
        }
    }

    /// Flags for a private deployment with no saved inputs yet.
    #[must_use]
    pub const fn private_version() -> Self {
        Self {
            has_saved_inputs: false,
            is_public_version: false,
            can_edit_inputs: true,
        }
    }

    /// Sets whether saved inputs exist.
    #[must_use]
    pub const fn with_saved_inputs(mut self, has_saved_inputs: bool) -> Self {
        self.has_saved_inputs = has_saved_inputs;
        self
    }

    /// Sets whether inputs can be edited.
    #[must_use]
    pub const fn with_edit_rights(mut self, can_edit_inputs: bool) -> Self {
        self.can_edit_inputs = can_edit_inputs;
        self
    }
}

/// Panel state value.
///
/// Replaced wholesale by the panel state machine; never edited in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelState {
    /// Current mode.
    pub mode: PanelMode,
}

impl PanelState {
    /// Creates a state in the given mode.
    #[must_use]
    pub const fn new(mode: PanelMode) -> Self {
        Self { mode }
    }

    /// Initial state for the given flags.
    ///
    /// Collapsed when there is something saved that may be edited,
    /// expanded otherwise.
    #[must_use]
    pub const fn initial(flags: &PanelFlags) -> Self {
        if flags.has_saved_inputs && flags.can_edit_inputs {
            Self::new(PanelMode::Collapsed)
        } else {
            Self::new(PanelMode::Expanded)
        }
    }

    /// Returns true when the panel hides its inputs.
    #[must_use]
    pub const fn folded(&self) -> bool {
        self.mode.is_folded()
    }
}
