//! One setup surface session.
//!
//! The controller owns the schema, template, flags, saved snapshot, draft and
//! panel state, and is the only component that calls collaborators. Every
//! operation replaces state wholesale before any collaborator is invoked.

use tracing::{debug, info, instrument, warn};

use super::collaborators::{Collaborators, NotificationKind, keys};
use super::draft_store::InputDraftStore;
use super::panel::{Confirmation, PanelStateMachine};
use super::validation::{Readiness, ValidationGate};
use super::version_policy::{VersionPolicy, WelcomeVariant};
use super::view::{ViewInputs, WelcomeView};
use crate::config::SetupConfig;
use crate::models::{
    InputDraft, PanelFlags, PanelState, PromptTemplate, SavedInputs, SiteInfo, VariableSchema,
};
use crate::rendering::{MarkedUpString, TemplateRenderer};
use crate::{Error, Result};

/// Drives the pre-conversation configuration surface.
#[derive(Debug)]
pub struct WelcomeController {
    schema: VariableSchema,
    template: PromptTemplate,
    flags: PanelFlags,
    site: SiteInfo,
    conversation_name: String,
    saved: Option<SavedInputs>,
    draft: InputDraft,
    panel: PanelState,
    config: SetupConfig,
    collaborators: Collaborators,
    store: InputDraftStore,
    gate: ValidationGate,
    machine: PanelStateMachine,
    policy: VersionPolicy,
    renderer: TemplateRenderer,
}

impl WelcomeController {
    /// Creates a builder for a surface over `schema` and `template`.
    #[must_use]
    pub fn builder(schema: VariableSchema, template: PromptTemplate) -> WelcomeControllerBuilder {
        WelcomeControllerBuilder::new(schema, template)
    }

    /// Variable schema.
    #[must_use]
    pub const fn schema(&self) -> &VariableSchema {
        &self.schema
    }

    /// Prompt template.
    #[must_use]
    pub const fn template(&self) -> &PromptTemplate {
        &self.template
    }

    /// Deployment flags.
    #[must_use]
    pub const fn flags(&self) -> &PanelFlags {
        &self.flags
    }

    /// Current saved snapshot.
    #[must_use]
    pub const fn saved_inputs(&self) -> Option<&SavedInputs> {
        self.saved.as_ref()
    }

    /// Current draft.
    #[must_use]
    pub const fn draft(&self) -> &InputDraft {
        &self.draft
    }

    /// Current panel state.
    #[must_use]
    pub const fn panel(&self) -> PanelState {
        self.panel
    }

    /// Active presentation variant.
    #[must_use]
    pub fn variant(&self) -> WelcomeVariant {
        self.policy.resolve(&self.flags, &self.schema)
    }

    /// Readiness of the current draft.
    #[must_use]
    pub fn readiness(&self) -> Readiness {
        self.gate.check(&self.schema, &self.draft)
    }

    /// Returns true when starting a chat needs a complete draft.
    #[must_use]
    pub const fn requires_complete_inputs(&self) -> bool {
        self.policy.requires_complete_inputs(&self.flags)
    }

    /// Template rendered against the current draft.
    #[must_use]
    pub fn preview(&self) -> MarkedUpString {
        self.renderer.render(&self.template, &self.draft)
    }

    /// Presentation model for the current state.
    #[must_use]
    pub fn view(&self) -> WelcomeView {
        WelcomeView::build(&ViewInputs {
            variant: self.variant(),
            panel: self.panel,
            schema: &self.schema,
            template: &self.template,
            draft: &self.draft,
            site: &self.site,
            conversation_name: &self.conversation_name,
            example_questions: &self.config.example_questions,
            default_max_length: self.config.default_value_max_len,
            translator: self.collaborators.translator.as_ref(),
        })
    }

    /// Sets one draft value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `key` is not declared by the schema.
    pub fn set_input(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        if !self.schema.contains(key) {
            return Err(Error::InvalidInput(format!("unknown variable '{key}'")));
        }
        self.draft = self.store.set(&self.draft, key, value);
        Ok(())
    }

    /// Opens the saved inputs for editing. No-op unless collapsed under an
    /// editable summary.
    #[instrument(skip(self), fields(operation = "panel.edit", mode = %self.panel.mode))]
    pub fn edit(&mut self) {
        if !self.variant().is_editable() {
            debug!("summary is not editable");
            return;
        }
        self.panel = self.machine.edit(self.panel);
    }

    /// Commits the draft as the new saved snapshot.
    ///
    /// On success the panel collapses and the owner is told once. No-op
    /// outside editing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingRequiredVariable`] when a required value is
    /// empty; an error notification is shown and the panel stays editing.
    #[instrument(skip(self), fields(operation = "panel.confirm", mode = %self.panel.mode))]
    pub fn confirm(&mut self) -> Result<()> {
        match self.machine.confirm(self.panel, &self.schema, &self.draft) {
            Ok(Confirmation::Committed { state, saved }) => {
                self.panel = state;
                let saved = self.saved.insert(saved);
                info!(snapshot = %saved.id, "saved inputs committed");
                self.collaborators.owner.on_inputs_change(saved);
                Ok(())
            },
            Ok(Confirmation::Ignored(state)) => {
                self.panel = state;
                Ok(())
            },
            Err(err) => {
                self.report(&err);
                Err(err)
            },
        }
    }

    /// Discards edits and collapses. No-op outside editing.
    #[instrument(skip(self), fields(operation = "panel.cancel", mode = %self.panel.mode))]
    pub fn cancel(&mut self) {
        let cancellation =
            self.machine
                .cancel(self.panel, &self.schema, &self.draft, self.saved.as_ref());
        self.panel = cancellation.state;
        self.draft = cancellation.draft;
    }

    /// Starts the conversation with the current draft.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ActionUnavailable`] when the active variant offers no
    /// start action, and [`Error::MissingRequiredVariable`] when the version
    /// requires a complete draft and it is not.
    #[instrument(skip(self), fields(operation = "chat.start"))]
    pub fn start_chat(&mut self) -> Result<()> {
        let variant = self.variant();
        if !variant.offers_start_chat() {
            return Err(Error::ActionUnavailable(
                "start chat after inputs are saved".to_string(),
            ));
        }
        self.ensure_can_start()?;
        self.collaborators.chat.start_chat(&self.draft);
        Ok(())
    }

    /// Uses an example question as the first message and starts the chat.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ActionUnavailable`] when the active variant shows no
    /// example questions, and [`Error::MissingRequiredVariable`] as for
    /// [`Self::start_chat`].
    #[instrument(skip(self, question), fields(operation = "chat.example_question"))]
    pub fn choose_example_question(&mut self, question: &str) -> Result<()> {
        if !self.variant().shows_example_questions() {
            return Err(Error::ActionUnavailable(
                "example questions are not offered here".to_string(),
            ));
        }
        if !self
            .config
            .example_questions
            .iter()
            .any(|category| category.contains(question))
        {
            debug!("question is not one of the configured examples");
        }
        self.ensure_can_start()?;
        self.collaborators.owner.on_default_query(question);
        self.collaborators.chat.start_chat(&self.draft);
        Ok(())
    }

    /// Applies a snapshot pushed by the owning application.
    ///
    /// A snapshot with a new identity (or its removal) re-seeds the draft and
    /// resets the panel; the same identity leaves everything untouched.
    #[instrument(skip(self, saved), fields(operation = "inputs.sync"))]
    pub fn sync_saved_inputs(&mut self, saved: Option<SavedInputs>) {
        let current = self.saved.as_ref().map(|s| s.id);
        let incoming = saved.as_ref().map(|s| s.id);
        if current == incoming {
            debug!("saved inputs unchanged");
            return;
        }

        self.flags.has_saved_inputs = saved.is_some();
        self.draft = self.store.initialize(&self.schema, saved.as_ref());
        self.saved = saved;
        self.panel = PanelState::initial(&self.flags);
        info!(mode = %self.panel.mode, "draft re-seeded from saved inputs");
    }

    /// Replaces the deployment flags, resetting the panel when they change.
    pub fn set_flags(&mut self, flags: PanelFlags) {
        if self.flags == flags {
            return;
        }
        self.flags = flags;
        self.panel = PanelState::initial(&self.flags);
    }

    fn ensure_can_start(&self) -> Result<()> {
        self.machine
            .check_start_chat(&self.schema, &self.draft, self.requires_complete_inputs())
            .inspect_err(|err| self.report(err))
    }

    fn report(&self, err: &Error) {
        warn!(error = %err, "submission rejected");
        let mut message = self
            .collaborators
            .translator
            .translate(keys::VALUE_OF_VAR_REQUIRED);
        if let Error::MissingRequiredVariable(key) = err {
            let name = self
                .schema
                .get(key)
                .map_or(key.as_str(), |definition| definition.display_name.as_str());
            message = format!("{message}: {name}");
        }
        self.collaborators.notifier.notify(
            NotificationKind::Error,
            &message,
            self.config.notification_duration_ms,
        );
    }
}

/// Builder for a [`WelcomeController`].
#[derive(Debug)]
pub struct WelcomeControllerBuilder {
    schema: VariableSchema,
    template: PromptTemplate,
    flags: PanelFlags,
    site: SiteInfo,
    conversation_name: String,
    saved: Option<SavedInputs>,
    config: SetupConfig,
    collaborators: Option<Collaborators>,
}

impl WelcomeControllerBuilder {
    fn new(schema: VariableSchema, template: PromptTemplate) -> Self {
        Self {
            schema,
            template,
            flags: PanelFlags::default(),
            site: SiteInfo::default(),
            conversation_name: String::new(),
            saved: None,
            config: SetupConfig::default(),
            collaborators: None,
        }
    }

    /// Sets the deployment flags.
    #[must_use]
    pub const fn flags(mut self, flags: PanelFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Sets the site information.
    #[must_use]
    pub fn site(mut self, site: SiteInfo) -> Self {
        self.site = site;
        self
    }

    /// Sets the conversation name shown once inputs are saved.
    #[must_use]
    pub fn conversation_name(mut self, name: impl Into<String>) -> Self {
        self.conversation_name = name.into();
        self
    }

    /// Sets the initial saved snapshot.
    #[must_use]
    pub fn saved_inputs(mut self, saved: SavedInputs) -> Self {
        self.saved = Some(saved);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: SetupConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the collaborators. Defaults to logging-only collaborators using
    /// the configured translations.
    #[must_use]
    pub fn collaborators(mut self, collaborators: Collaborators) -> Self {
        self.collaborators = Some(collaborators);
        self
    }

    /// Builds the controller, seeding the draft and the initial panel state.
    #[must_use]
    pub fn build(self) -> WelcomeController {
        let store = InputDraftStore::new();
        let draft = store.initialize(&self.schema, self.saved.as_ref());
        let panel = PanelState::initial(&self.flags);
        let collaborators = self
            .collaborators
            .unwrap_or_else(|| Collaborators::detached(self.config.translator()));
        let policy = VersionPolicy::new(self.config.private_requires_complete_inputs);

        debug!(
            variables = self.schema.len(),
            mode = %panel.mode,
            public = self.flags.is_public_version,
            "setup surface created"
        );

        WelcomeController {
            schema: self.schema,
            template: self.template,
            flags: self.flags,
            site: self.site,
            conversation_name: self.conversation_name,
            saved: self.saved,
            draft,
            panel,
            config: self.config,
            collaborators,
            store,
            gate: ValidationGate::new(),
            machine: PanelStateMachine::new(),
            policy,
            renderer: TemplateRenderer::new(),
        }
    }
}
