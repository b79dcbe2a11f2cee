//! View CLI command.

use std::path::Path;

use super::load_controller;
use crate::{Error, Result, SetupConfig};

/// Serializes the setup's presentation model as pretty JSON.
///
/// With `edit` set, the edit affordance is taken first so the editing form
/// can be inspected.
///
/// # Errors
///
/// Returns an error if the setup cannot be loaded or serialization fails.
pub fn cmd_view(
    setup: &Path,
    config: &SetupConfig,
    assignments: &[String],
    edit: bool,
) -> Result<String> {
    let mut controller = load_controller(setup, config, assignments)?;
    if edit {
        controller.edit();
    }
    serde_json::to_string_pretty(&controller.view()).map_err(|e| Error::OperationFailed {
        operation: "serialize_view".to_string(),
        cause: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAVED: &str = r#"
        conversation_name = "Trip"
        template = "Plan a trip to {{city}}"

        [flags]
        public = true

        [[variables]]
        key = "city"
        name = "City"

        [saved_inputs]
        city = "Oslo"
    "#;

    fn setup_file(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_view_saved_summary() {
        let file = setup_file(SAVED);
        let json = cmd_view(file.path(), &SetupConfig::default(), &[], false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["variant"]["variant"], "saved_summary");
        assert_eq!(value["variant"]["mode"], "editable_preview");
        assert_eq!(value["panel"], "collapsed");
        assert_eq!(value["header"], "Trip");
        assert_eq!(value["controls"][0], "edit");
        assert!(value.get("fields").is_none());
    }

    #[test]
    fn test_view_editing() {
        let file = setup_file(SAVED);
        let json = cmd_view(file.path(), &SetupConfig::default(), &[], true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["panel"], "editing");
        assert_eq!(value["fields"][0]["key"], "city");
        assert_eq!(value["fields"][0]["value"], "Oslo");
        assert_eq!(value["fields"][0]["control"], "text_input");
        assert_eq!(value["fields"][0]["max_length"], 48);
        assert_eq!(value["controls"][0], "confirm_cancel");
    }
}
