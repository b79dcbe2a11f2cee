//! Preview CLI command.

use std::path::Path;

use super::load_controller;
use crate::{PreviewFormat, Result, SetupConfig};

/// Renders the setup's template against its draft in `format`.
///
/// Unresolved placeholders (no schema key) are logged, not rejected.
///
/// # Errors
///
/// Returns an error if the setup cannot be loaded or formatting fails.
pub fn cmd_preview(
    setup: &Path,
    config: &SetupConfig,
    assignments: &[String],
    format: PreviewFormat,
) -> Result<String> {
    let controller = load_controller(setup, config, assignments)?;
    let unresolved = crate::TemplateRenderer::new()
        .unresolved_placeholders(controller.template(), controller.schema());
    if !unresolved.is_empty() {
        tracing::warn!(placeholders = ?unresolved, "template references undeclared variables");
    }
    controller.preview().format(format)
}
