//! # Prompt Setup
//!
//! The pre-conversation configuration surface for a chat application.
//!
//! Before a conversation starts, an application may ask the user for values of
//! a set of named prompt variables that get interpolated into a prompt
//! template. This crate owns the lifecycle of those values:
//!
//! - Variable schema and draft/saved input state
//! - Live template preview with user-supplied spans marked
//! - Submission-readiness validation
//! - The collapsed/expanded/editing panel state machine
//! - The public vs. private deployment split
//!
//! Everything visual (styling, widgets, toasts) and everything networked
//! (actually starting the chat) is injected through the traits in
//! [`services`] (`Translator`, `Notifier`, `ChatStarter`, `InputsOwner`).
//!
//! ## Example
//!
//! ```rust,ignore
//! use prompt_setup::{PanelFlags, SetupConfig, WelcomeController};
//!
//! let mut controller = WelcomeController::builder(schema, template)
//!     .flags(PanelFlags::private_version())
//!     .config(SetupConfig::default())
//!     .collaborators(collaborators)
//!     .build();
//!
//! controller.set_input("topic", "physics")?;
//! controller.start_chat()?;
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

// Module declarations
pub mod cli;
pub mod config;
pub mod models;
pub mod observability;
pub mod rendering;
pub mod services;

// Re-exports for convenience
pub use config::{SetupConfig, SetupFile};
pub use models::{
    InputDraft, PanelFlags, PanelMode, PanelState, PromptTemplate, QuestionCategory, SavedInputs,
    SiteInfo, SnapshotId, VariableDefinition, VariableKind, VariableSchema,
};
pub use rendering::{MarkedUpString, PreviewFormat, Segment, TemplateRenderer};
pub use services::{
    Collaborators, InputDraftStore, PanelStateMachine, Readiness, ValidationGate, VersionPolicy,
    WelcomeController, WelcomeVariant, WelcomeView,
};

/// Error type for prompt setup operations.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `MissingRequiredVariable` | Confirm or start chat with an empty required variable |
/// | `InvalidInput` | Duplicate schema keys, choice without options, malformed setup values |
/// | `ActionUnavailable` | An action the active variant does not offer (e.g. example questions) |
/// | `OperationFailed` | I/O errors, TOML parsing, logging initialization |
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// A required variable has no value at submit time.
    ///
    /// Non-fatal: blocks only the submit action that detected it.
    #[error("missing required variable '{0}'")]
    MissingRequiredVariable(String),

    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - A schema contains duplicate or empty keys
    /// - A key contains `{` or `}` and could never match a placeholder
    /// - A choice variable declares no options
    /// - A `key=value` assignment or format name is malformed
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The requested action is not offered by the current view.
    #[error("action unavailable: {0}")]
    ActionUnavailable(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - Configuration or setup files cannot be read or parsed
    /// - The logging subscriber cannot be installed
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for prompt setup operations.
pub type Result<T> = std::result::Result<T, Error>;
