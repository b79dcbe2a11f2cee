//! Collaborator interfaces consumed by the setup surface.
//!
//! The core never renders, translates, notifies or talks to the network on
//! its own. It calls these traits, injected by the surrounding application.
//! Calls are fire-and-forget: the core's own state is already updated when
//! they run, and no completion is awaited.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{error, info};

use crate::models::{InputDraft, SavedInputs};

/// Translation keys used by the setup surface.
pub mod keys {
    /// Panel title in the public version.
    pub const PUBLIC_PROMPT_CONFIG_TITLE: &str = "app.chat.publicPromptConfigTitle";
    /// Panel title in the private version while editing.
    pub const PRIVATE_PROMPT_CONFIG_TITLE: &str = "app.chat.privatePromptConfigTitle";
    /// Status line shown next to the edit affordance.
    pub const CONFIG_STATUS_DES: &str = "app.chat.configStatusDes";
    /// Suffix for optional input placeholders.
    pub const OPTIONAL: &str = "app.variableTable.optional";
    /// Error shown when required values are missing.
    pub const VALUE_OF_VAR_REQUIRED: &str = "app.errorMessage.valueOfVarRequired";
    /// Privacy footer, text before the link.
    pub const PRIVACY_POLICY_LEFT: &str = "app.chat.privacyPolicyLeft";
    /// Privacy footer, link text.
    pub const PRIVACY_POLICY_MIDDLE: &str = "app.chat.privacyPolicyMiddle";
    /// Privacy footer, text after the link.
    pub const PRIVACY_POLICY_RIGHT: &str = "app.chat.privacyPolicyRight";
    /// Heading above the example questions.
    pub const EXAMPLE_QUESTIONS_TITLE: &str = "app.chat.exampleQuestionsTitle";
}

/// Localized text lookup.
pub trait Translator: Send + Sync {
    /// Returns the localized text for `key`.
    fn translate(&self, key: &str) -> String;
}

/// Severity of a user notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Informational message.
    Info,
    /// Error message.
    Error,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Non-blocking user notification (toast).
pub trait Notifier: Send + Sync {
    /// Shows `message` for `duration_ms` milliseconds.
    fn notify(&self, kind: NotificationKind, message: &str, duration_ms: u64);
}

/// Starts a conversation with the given variable values.
pub trait ChatStarter: Send + Sync {
    /// Begins the conversation. Asynchronous from the core's perspective.
    fn start_chat(&self, draft: &InputDraft);
}

/// The context that owns saved inputs and the first outgoing message.
pub trait InputsOwner: Send + Sync {
    /// Saved inputs changed (successful confirm).
    ///
    /// Handing the same snapshot back through
    /// [`WelcomeController::sync_saved_inputs`](super::WelcomeController::sync_saved_inputs)
    /// is a no-op; a snapshot rebuilt from its values carries a new identity
    /// and re-seeds the surface.
    fn on_inputs_change(&self, saved: &SavedInputs);

    /// A pre-filled first message was chosen (example question).
    fn on_default_query(&self, text: &str);
}

/// The full set of injected collaborators.
#[derive(Clone)]
pub struct Collaborators {
    /// Text lookup.
    pub translator: Arc<dyn Translator>,
    /// Toast notifications.
    pub notifier: Arc<dyn Notifier>,
    /// Conversation start.
    pub chat: Arc<dyn ChatStarter>,
    /// Saved-input and default-query owner.
    pub owner: Arc<dyn InputsOwner>,
}

impl Collaborators {
    /// Bundles collaborators.
    #[must_use]
    pub fn new(
        translator: Arc<dyn Translator>,
        notifier: Arc<dyn Notifier>,
        chat: Arc<dyn ChatStarter>,
        owner: Arc<dyn InputsOwner>,
    ) -> Self {
        Self {
            translator,
            notifier,
            chat,
            owner,
        }
    }

    /// Collaborators that only log, for tooling and previews.
    #[must_use]
    pub fn detached(translator: CatalogTranslator) -> Self {
        let sink = Arc::new(TracingSink);
        Self {
            translator: Arc::new(translator),
            notifier: Arc::new(TracingNotifier),
            chat: sink.clone(),
            owner: sink,
        }
    }
}

impl fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}

/// Table-driven translator that falls back to the key itself.
#[derive(Debug, Clone, Default)]
pub struct CatalogTranslator {
    entries: HashMap<String, String>,
}

impl CatalogTranslator {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog with English text for every key in [`keys`].
    #[must_use]
    pub fn english() -> Self {
        let entries = [
            (keys::PUBLIC_PROMPT_CONFIG_TITLE, "Prompt"),
            (keys::PRIVATE_PROMPT_CONFIG_TITLE, "Conversation settings"),
            (
                keys::CONFIG_STATUS_DES,
                "Before starting, you can modify the conversation settings",
            ),
            (keys::OPTIONAL, "Optional"),
            (
                keys::VALUE_OF_VAR_REQUIRED,
                "Variable values cannot be empty",
            ),
            (keys::PRIVACY_POLICY_LEFT, "Please read the "),
            (keys::PRIVACY_POLICY_MIDDLE, "privacy policy"),
            (
                keys::PRIVACY_POLICY_RIGHT,
                " provided by the app developer.",
            ),
            (keys::EXAMPLE_QUESTIONS_TITLE, "You can try the examples below"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        Self { entries }
    }

    /// Adds or replaces entries.
    #[must_use]
    pub fn with_entries<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.entries
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }
}

impl Translator for CatalogTranslator {
    fn translate(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

/// Notifier that writes notifications to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, kind: NotificationKind, message: &str, duration_ms: u64) {
        match kind {
            NotificationKind::Info => info!(duration_ms, "{message}"),
            NotificationKind::Error => error!(duration_ms, "{message}"),
        }
    }
}

/// Chat starter and inputs owner that only log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ChatStarter for TracingSink {
    fn start_chat(&self, draft: &InputDraft) {
        info!(variables = draft.len(), "chat start requested");
    }
}

impl InputsOwner for TracingSink {
    fn on_inputs_change(&self, saved: &SavedInputs) {
        info!(snapshot = %saved.id, variables = saved.values().len(), "saved inputs changed");
    }

    fn on_default_query(&self, text: &str) {
        info!(length = text.len(), "default query chosen");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_falls_back_to_key() {
        let catalog = CatalogTranslator::new();
        assert_eq!(catalog.translate("app.unknown"), "app.unknown");
    }

    #[test]
    fn test_catalog_overrides_english() {
        let catalog = CatalogTranslator::english().with_entries([(keys::OPTIONAL, "可选")]);

        assert_eq!(catalog.translate(keys::OPTIONAL), "可选");
        assert_eq!(catalog.translate(keys::PUBLIC_PROMPT_CONFIG_TITLE), "Prompt");
    }
}
