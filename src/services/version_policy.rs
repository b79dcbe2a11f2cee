//! Public/private presentation policy.
//!
//! Resolves which variant of the setup surface is active from the deployment
//! flags and the schema, and whether starting a chat needs a complete draft.
//!
//! | Saved inputs | Variables | Version | Variant |
//! |--------------|-----------|---------|---------|
//! | no  | yes | any     | `VariableForm` (example questions when private) |
//! | no  | no  | public  | `PublicPreview` |
//! | no  | no  | private | `PrivateQuickStart` |
//! | yes | any | any     | `SavedSummary` |

use serde::Serialize;

use crate::models::{PanelFlags, VariableSchema};

/// How the summary of saved inputs is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryMode {
    /// Public: template preview with an edit affordance.
    EditablePreview,
    /// Public without edit rights: template preview only.
    StaticPreview,
    /// Private: status line with an edit affordance.
    EditableStatus,
    /// Nothing to show (no variables, or private without edit rights).
    Hidden,
}

impl SummaryMode {
    /// Returns true when the summary offers editing.
    #[must_use]
    pub const fn is_editable(&self) -> bool {
        matches!(self, Self::EditablePreview | Self::EditableStatus)
    }

    /// Returns true when the summary shows the template preview.
    #[must_use]
    pub const fn shows_preview(&self) -> bool {
        matches!(self, Self::EditablePreview | Self::StaticPreview)
    }
}

/// The active presentation variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum WelcomeVariant {
    /// No saved inputs, variables declared: editable form plus start chat.
    VariableForm {
        /// Example questions are offered (private version only).
        example_questions: bool,
    },
    /// No saved inputs, no variables, public: highlighted preview plus start chat.
    PublicPreview,
    /// No saved inputs, no variables, private: start chat plus example questions.
    PrivateQuickStart,
    /// Saved inputs exist: collapsed summary.
    SavedSummary {
        /// Summary presentation.
        mode: SummaryMode,
    },
}

impl WelcomeVariant {
    /// Returns true when example questions are offered.
    #[must_use]
    pub const fn shows_example_questions(&self) -> bool {
        match self {
            Self::VariableForm { example_questions } => *example_questions,
            Self::PrivateQuickStart => true,
            Self::PublicPreview | Self::SavedSummary { .. } => false,
        }
    }

    /// Returns true when a start-chat action is offered.
    #[must_use]
    pub const fn offers_start_chat(&self) -> bool {
        !matches!(self, Self::SavedSummary { .. })
    }

    /// Returns true when the variant can enter editing.
    #[must_use]
    pub const fn is_editable(&self) -> bool {
        match self {
            Self::SavedSummary { mode } => mode.is_editable(),
            _ => false,
        }
    }
}

/// Resolves variants and start-chat gating.
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionPolicy {
    private_requires_complete_inputs: bool,
}

impl VersionPolicy {
    /// Creates a policy.
    ///
    /// `private_requires_complete_inputs` makes the private version gate
    /// start chat on validation like the public one does.
    #[must_use]
    pub const fn new(private_requires_complete_inputs: bool) -> Self {
        Self {
            private_requires_complete_inputs,
        }
    }

    /// Resolves the active variant.
    #[must_use]
    pub fn resolve(&self, flags: &PanelFlags, schema: &VariableSchema) -> WelcomeVariant {
        let has_variables = schema.has_variables();
        let public = flags.is_public_version;

        if flags.has_saved_inputs {
            let mode = match (has_variables, public, flags.can_edit_inputs) {
                (false, _, _) | (true, false, false) => SummaryMode::Hidden,
                (true, true, true) => SummaryMode::EditablePreview,
                (true, true, false) => SummaryMode::StaticPreview,
                (true, false, true) => SummaryMode::EditableStatus,
            };
            return WelcomeVariant::SavedSummary { mode };
        }

        match (has_variables, public) {
            (true, _) => WelcomeVariant::VariableForm {
                example_questions: !public,
            },
            (false, true) => WelcomeVariant::PublicPreview,
            (false, false) => WelcomeVariant::PrivateQuickStart,
        }
    }

    /// Returns true when starting a chat needs a complete draft.
    #[must_use]
    pub const fn requires_complete_inputs(&self, flags: &PanelFlags) -> bool {
        flags.is_public_version || self.private_requires_complete_inputs
    }
}
