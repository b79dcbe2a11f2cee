//! Setup surface services.
//!
//! Draft storage, validation, panel transitions and version policy are pure
//! and stateless; [`WelcomeController`] composes them and talks to the
//! injected collaborators.

mod collaborators;
mod controller;
mod draft_store;
mod panel;
mod validation;
mod version_policy;
mod view;

pub use collaborators::{
    CatalogTranslator, ChatStarter, Collaborators, InputsOwner, NotificationKind, Notifier,
    TracingNotifier, TracingSink, Translator, keys,
};
pub use controller::{WelcomeController, WelcomeControllerBuilder};
pub use draft_store::InputDraftStore;
pub use panel::{Cancellation, Confirmation, PanelStateMachine};
pub use validation::{Readiness, ValidationGate};
pub use version_policy::{SummaryMode, VersionPolicy, WelcomeVariant};
pub use view::{
    Control, ExampleQuestionsView, FieldControl, FieldView, PrivacyFooter, ViewInputs,
    WelcomeView,
};
