//! Presentation model of the setup surface.
//!
//! [`WelcomeView`] says *what* the active variant shows, never how it looks.
//! A presentation layer switches on it exhaustively.

use serde::Serialize;

use super::collaborators::{Translator, keys};
use super::version_policy::{SummaryMode, WelcomeVariant};
use crate::models::{
    InputDraft, PanelMode, PanelState, PromptTemplate, QuestionCategory, SiteInfo,
    VariableDefinition, VariableKind, VariableSchema,
};
use crate::rendering::{MarkedUpString, TemplateRenderer};

/// Input widget for a variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "control", rename_all = "snake_case")]
pub enum FieldControl {
    /// Single-line input.
    TextInput {
        /// Maximum accepted length.
        max_length: usize,
    },
    /// Multi-line input.
    TextArea {
        /// Maximum accepted length, when the definition sets one.
        #[serde(skip_serializing_if = "Option::is_none")]
        max_length: Option<usize>,
    },
    /// Selection from fixed options.
    Select {
        /// Options in display order.
        options: Vec<String>,
        /// Currently selected option, if any.
        #[serde(skip_serializing_if = "Option::is_none")]
        selected: Option<String>,
    },
}

/// One form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    /// Variable key.
    pub key: String,
    /// Label text.
    pub label: String,
    /// Placeholder text (text inputs only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Current draft value.
    pub value: String,
    /// Whether a value is needed before submitting.
    pub required: bool,
    /// Widget.
    #[serde(flatten)]
    pub control: FieldControl,
}

/// Actions offered by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    /// Start the conversation.
    StartChat,
    /// Open saved inputs for editing.
    Edit,
    /// Confirm or cancel the current edits.
    ConfirmCancel,
}

/// Example questions block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExampleQuestionsView {
    /// Heading text.
    pub title: String,
    /// Categories in display order.
    pub categories: Vec<QuestionCategory>,
}

/// Privacy policy footer, split around the link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrivacyFooter {
    /// Text before the link.
    pub left: String,
    /// Link text.
    pub link_text: String,
    /// Text after the link.
    pub right: String,
    /// Policy URL.
    pub url: String,
}

/// Everything the active variant shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WelcomeView {
    /// Active variant.
    pub variant: WelcomeVariant,
    /// Panel mode.
    pub panel: PanelMode,
    /// Conversation name header (saved inputs only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    /// App info block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<SiteInfo>,
    /// Panel title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panel_title: Option<String>,
    /// Status line next to the edit affordance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_line: Option<String>,
    /// Highlighted template preview.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<MarkedUpString>,
    /// Form fields, in schema order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldView>,
    /// Offered actions.
    pub controls: Vec<Control>,
    /// Example questions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example_questions: Option<ExampleQuestionsView>,
    /// Privacy footer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<PrivacyFooter>,
}

/// Borrowed state a view is built from.
#[derive(Clone, Copy)]
pub struct ViewInputs<'a> {
    /// Active variant.
    pub variant: WelcomeVariant,
    /// Panel state.
    pub panel: PanelState,
    /// Variable schema.
    pub schema: &'a VariableSchema,
    /// Prompt template.
    pub template: &'a PromptTemplate,
    /// Current draft.
    pub draft: &'a InputDraft,
    /// Site information.
    pub site: &'a SiteInfo,
    /// Conversation name.
    pub conversation_name: &'a str,
    /// Configured example questions.
    pub example_questions: &'a [QuestionCategory],
    /// Default maximum input length.
    pub default_max_length: usize,
    /// Text lookup.
    pub translator: &'a dyn Translator,
}

impl WelcomeView {
    /// Builds the view for the given state.
    #[must_use]
    pub fn build(inputs: &ViewInputs<'_>) -> Self {
        let t = |key: &str| inputs.translator.translate(key);
        let mut view = Self {
            variant: inputs.variant,
            panel: inputs.panel.mode,
            header: None,
            site: None,
            panel_title: None,
            status_line: None,
            preview: None,
            fields: Vec::new(),
            controls: Vec::new(),
            example_questions: None,
            footer: None,
        };

        match inputs.variant {
            WelcomeVariant::VariableForm { .. } => {
                view.site = Some(inputs.site.clone());
                view.fields = fields(inputs);
                view.controls.push(Control::StartChat);
            },
            WelcomeVariant::PublicPreview => {
                view.site = Some(inputs.site.clone());
                view.panel_title = Some(t(keys::PUBLIC_PROMPT_CONFIG_TITLE));
                view.preview = Some(preview(inputs));
                view.controls.push(Control::StartChat);
            },
            WelcomeVariant::PrivateQuickStart => {
                view.site = Some(inputs.site.clone());
                view.controls.push(Control::StartChat);
            },
            WelcomeVariant::SavedSummary { mode } => {
                view.header = Some(inputs.conversation_name.to_string());
                summary(&mut view, inputs, mode);
            },
        }

        if inputs.variant.shows_example_questions() {
            view.example_questions = Some(ExampleQuestionsView {
                title: t(keys::EXAMPLE_QUESTIONS_TITLE),
                categories: inputs.example_questions.to_vec(),
            });
        }

        if !matches!(inputs.variant, WelcomeVariant::SavedSummary { .. }) {
            view.footer = inputs
                .site
                .privacy_policy
                .as_ref()
                .map(|url| PrivacyFooter {
                    left: t(keys::PRIVACY_POLICY_LEFT),
                    link_text: t(keys::PRIVACY_POLICY_MIDDLE),
                    right: t(keys::PRIVACY_POLICY_RIGHT),
                    url: url.clone(),
                });
        }

        view
    }

    /// Returns true if `control` is offered.
    #[must_use]
    pub fn offers(&self, control: Control) -> bool {
        self.controls.contains(&control)
    }
}

fn summary(view: &mut WelcomeView, inputs: &ViewInputs<'_>, mode: SummaryMode) {
    let t = |key: &str| inputs.translator.translate(key);
    let editing = inputs.panel.mode == PanelMode::Editing;
    let folded = inputs.panel.folded();

    match mode {
        SummaryMode::Hidden => return,
        SummaryMode::EditablePreview | SummaryMode::StaticPreview => {
            view.panel_title = Some(t(keys::PUBLIC_PROMPT_CONFIG_TITLE));
            view.preview = Some(preview(inputs));
            if mode == SummaryMode::EditablePreview && folded {
                view.status_line = Some(t(keys::CONFIG_STATUS_DES));
            }
        },
        SummaryMode::EditableStatus => {
            view.panel_title = Some(if folded {
                t(keys::CONFIG_STATUS_DES)
            } else {
                t(keys::PRIVATE_PROMPT_CONFIG_TITLE)
            });
        },
    }

    if !mode.is_editable() {
        return;
    }
    if folded {
        view.controls.push(Control::Edit);
    } else if editing {
        view.fields = fields(inputs);
        view.controls.push(Control::ConfirmCancel);
    }
}

fn preview(inputs: &ViewInputs<'_>) -> MarkedUpString {
    TemplateRenderer::new().render(inputs.template, inputs.draft)
}

fn fields(inputs: &ViewInputs<'_>) -> Vec<FieldView> {
    inputs
        .schema
        .iter()
        .map(|definition| field(inputs, definition))
        .collect()
}

fn field(inputs: &ViewInputs<'_>, definition: &VariableDefinition) -> FieldView {
    let value = inputs
        .draft
        .get(&definition.key)
        .unwrap_or_default()
        .to_string();
    let placeholder = if definition.required {
        definition.display_name.clone()
    } else {
        format!(
            "{}({})",
            definition.display_name,
            inputs.translator.translate(keys::OPTIONAL)
        )
    };

    let (placeholder, control) = match definition.kind {
        VariableKind::SingleLineText => (
            Some(placeholder),
            FieldControl::TextInput {
                max_length: definition.effective_max_length(inputs.default_max_length),
            },
        ),
        VariableKind::MultiLineText => (
            Some(placeholder),
            FieldControl::TextArea {
                max_length: definition.max_length,
            },
        ),
        VariableKind::Choice => (
            None,
            FieldControl::Select {
                options: definition.options.clone(),
                selected: Some(value.clone()).filter(|v| !v.is_empty()),
            },
        ),
    };

    FieldView {
        key: definition.key.clone(),
        label: definition.display_name.clone(),
        placeholder,
        value,
        required: definition.required,
        control,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::collaborators::CatalogTranslator;

    struct Fixture {
        schema: VariableSchema,
        template: PromptTemplate,
        draft: InputDraft,
        site: SiteInfo,
        questions: Vec<QuestionCategory>,
        translator: CatalogTranslator,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                schema: VariableSchema::new(vec![
                    VariableDefinition::text("name", "Name"),
                    VariableDefinition::paragraph("notes", "Notes").optional(),
                    VariableDefinition::choice("exam", "Exam", vec!["A".into(), "B".into()]),
                ])
                .unwrap(),
                template: PromptTemplate::new("Tutor {{name}} for exam {{exam}}"),
                draft: [("name", "Ava"), ("notes", ""), ("exam", "B")]
                    .into_iter()
                    .collect(),
                site: SiteInfo::new("Tutor").with_privacy_policy("https://example.com/privacy"),
                questions: vec![QuestionCategory::new("Math", vec!["1+1?".into()])],
                translator: CatalogTranslator::english(),
            }
        }

        fn view(&self, variant: WelcomeVariant, mode: PanelMode) -> WelcomeView {
            WelcomeView::build(&ViewInputs {
                variant,
                panel: PanelState::new(mode),
                schema: &self.schema,
                template: &self.template,
                draft: &self.draft,
                site: &self.site,
                conversation_name: "Session 1",
                example_questions: &self.questions,
                default_max_length: 48,
                translator: &self.translator,
            })
        }
    }

    #[test]
    fn test_private_form_view() {
        let fixture = Fixture::new();
        let view = fixture.view(
            WelcomeVariant::VariableForm {
                example_questions: true,
            },
            PanelMode::Expanded,
        );

        assert_eq!(view.fields.len(), 3);
        assert_eq!(view.controls, vec![Control::StartChat]);
        assert!(view.example_questions.is_some());
        assert!(view.footer.is_some());
        assert!(view.header.is_none());
        assert!(view.preview.is_none());
    }

    #[test]
    fn test_field_controls() {
        let fixture = Fixture::new();
        let view = fixture.view(
            WelcomeVariant::VariableForm {
                example_questions: false,
            },
            PanelMode::Expanded,
        );

        assert_eq!(
            view.fields[0].control,
            FieldControl::TextInput { max_length: 48 }
        );
        assert_eq!(view.fields[0].placeholder.as_deref(), Some("Name"));
        assert_eq!(view.fields[0].value, "Ava");

        assert_eq!(
            view.fields[1].placeholder.as_deref(),
            Some("Notes(Optional)")
        );
        assert_eq!(
            view.fields[1].control,
            FieldControl::TextArea { max_length: None }
        );

        assert_eq!(view.fields[2].placeholder, None);
        assert_eq!(
            view.fields[2].control,
            FieldControl::Select {
                options: vec!["A".to_string(), "B".to_string()],
                selected: Some("B".to_string()),
            }
        );
        assert!(view.example_questions.is_none());
    }

    #[test]
    fn test_public_preview_view() {
        let fixture = Fixture::new();
        let view = fixture.view(WelcomeVariant::PublicPreview, PanelMode::Expanded);

        assert_eq!(view.panel_title.as_deref(), Some("Prompt"));
        assert_eq!(
            view.preview.as_ref().unwrap().to_plain(),
            "Tutor Ava for exam B"
        );
        assert!(view.fields.is_empty());
        assert!(view.offers(Control::StartChat));
    }

    #[test]
    fn test_saved_public_collapsed_and_editing() {
        let fixture = Fixture::new();
        let variant = WelcomeVariant::SavedSummary {
            mode: SummaryMode::EditablePreview,
        };

        let collapsed = fixture.view(variant, PanelMode::Collapsed);
        assert_eq!(collapsed.header.as_deref(), Some("Session 1"));
        assert!(collapsed.preview.is_some());
        assert!(collapsed.status_line.is_some());
        assert_eq!(collapsed.controls, vec![Control::Edit]);
        assert!(collapsed.fields.is_empty());
        assert!(collapsed.footer.is_none());

        let editing = fixture.view(variant, PanelMode::Editing);
        assert!(editing.preview.is_some());
        assert!(editing.status_line.is_none());
        assert_eq!(editing.controls, vec![Control::ConfirmCancel]);
        assert_eq!(editing.fields.len(), 3);
    }

    #[test]
    fn test_saved_private_titles() {
        let fixture = Fixture::new();
        let variant = WelcomeVariant::SavedSummary {
            mode: SummaryMode::EditableStatus,
        };

        let collapsed = fixture.view(variant, PanelMode::Collapsed);
        assert_eq!(
            collapsed.panel_title.as_deref(),
            Some("Before starting, you can modify the conversation settings")
        );
        assert!(collapsed.preview.is_none());

        let editing = fixture.view(variant, PanelMode::Editing);
        assert_eq!(
            editing.panel_title.as_deref(),
            Some("Conversation settings")
        );
    }

    #[test]
    fn test_static_and_hidden_summaries_offer_nothing() {
        let fixture = Fixture::new();

        let static_view = fixture.view(
            WelcomeVariant::SavedSummary {
                mode: SummaryMode::StaticPreview,
            },
            PanelMode::Expanded,
        );
        assert!(static_view.preview.is_some());
        assert!(static_view.controls.is_empty());

        let hidden = fixture.view(
            WelcomeVariant::SavedSummary {
                mode: SummaryMode::Hidden,
            },
            PanelMode::Expanded,
        );
        assert!(hidden.preview.is_none());
        assert!(hidden.panel_title.is_none());
        assert!(hidden.controls.is_empty());
    }

    #[test]
    fn test_no_footer_without_policy() {
        let mut fixture = Fixture::new();
        fixture.site.privacy_policy = None;

        let view = fixture.view(WelcomeVariant::PrivateQuickStart, PanelMode::Expanded);
        assert!(view.footer.is_none());
        assert!(view.example_questions.is_some());
    }
}
