//! Fold/edit/confirm/cancel state machine.
//!
//! ```text
//!              edit()
//!  Collapsed ─────────► Editing
//!      ▲                  │
//!      └──────────────────┘
//!   confirm() [ready] / cancel()
//!
//!  Expanded: no transitions (nothing to collapse to)
//! ```
//!
//! Transitions take the current state and return the next one. A rejected
//! confirm leaves the caller holding the unchanged `Editing` state.

use tracing::debug;

use super::{InputDraftStore, ValidationGate};
use crate::Result;
use crate::models::{InputDraft, PanelMode, PanelState, SavedInputs, VariableSchema};

/// Result of a confirm attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    /// The draft was accepted and becomes the new saved snapshot.
    Committed {
        /// Next panel state (collapsed).
        state: PanelState,
        /// Snapshot to hand to the owner.
        saved: SavedInputs,
    },
    /// Not editing; nothing happened.
    Ignored(PanelState),
}

/// Result of a cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cancellation {
    /// Next panel state.
    pub state: PanelState,
    /// Draft after discarding edits.
    pub draft: InputDraft,
}

/// Panel transitions.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelStateMachine {
    gate: ValidationGate,
    store: InputDraftStore,
}

impl PanelStateMachine {
    /// Creates a new state machine.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            gate: ValidationGate::new(),
            store: InputDraftStore::new(),
        }
    }

    /// `Collapsed → Editing`; no-op from any other state.
    #[must_use]
    pub fn edit(&self, state: PanelState) -> PanelState {
        match state.mode {
            PanelMode::Collapsed => PanelState::new(PanelMode::Editing),
            PanelMode::Expanded | PanelMode::Editing => {
                debug!(mode = %state.mode, "edit ignored");
                state
            },
        }
    }

    /// Accepts `draft` as the new saved snapshot when it is complete.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingRequiredVariable`] for the first empty
    /// required variable; the panel stays in `Editing`.
    pub fn confirm(
        &self,
        state: PanelState,
        schema: &VariableSchema,
        draft: &InputDraft,
    ) -> Result<Confirmation> {
        if state.mode != PanelMode::Editing {
            debug!(mode = %state.mode, "confirm ignored");
            return Ok(Confirmation::Ignored(state));
        }

        self.gate.check(schema, draft).into_result()?;

        Ok(Confirmation::Committed {
            state: PanelState::new(PanelMode::Collapsed),
            saved: SavedInputs::new(draft.clone()),
        })
    }

    /// Discards edits and collapses. No-op outside `Editing`.
    ///
    /// Without a saved snapshot the draft falls back to schema defaults.
    #[must_use]
    pub fn cancel(
        &self,
        state: PanelState,
        schema: &VariableSchema,
        draft: &InputDraft,
        saved: Option<&SavedInputs>,
    ) -> Cancellation {
        if state.mode != PanelMode::Editing {
            debug!(mode = %state.mode, "cancel ignored");
            return Cancellation {
                state,
                draft: draft.clone(),
            };
        }

        let draft = match saved {
            Some(saved) => self.store.reset(draft, saved),
            None => self.store.initialize(schema, None),
        };
        Cancellation {
            state: PanelState::new(PanelMode::Collapsed),
            draft,
        }
    }

    /// Checks whether a chat may start with `draft`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingRequiredVariable`] when
    /// `requires_complete_inputs` is set and the draft is incomplete.
    pub fn check_start_chat(
        &self,
        schema: &VariableSchema,
        draft: &InputDraft,
        requires_complete_inputs: bool,
    ) -> Result<()> {
        if !requires_complete_inputs {
            return Ok(());
        }
        self.gate.check(schema, draft).into_result()
    }
}
