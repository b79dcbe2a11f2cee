//! Data models for prompt setup.
//!
//! Value types only: schema, drafts, saved snapshots, panel state and site
//! content. Behavior lives in [`crate::services`].

mod inputs;
mod panel;
mod site;
mod template;
mod variable;

pub use inputs::{InputDraft, SavedInputs, SnapshotId};
pub use panel::{PanelFlags, PanelMode, PanelState};
pub use site::{QuestionCategory, SiteInfo};
pub use template::PromptTemplate;
pub use variable::{VariableDefinition, VariableKind, VariableSchema};
