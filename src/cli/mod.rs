//! CLI command implementations.
//!
//! Each command loads a setup file, applies `--set KEY=VALUE` assignments to
//! the draft and reports on the resulting surface. Commands return their
//! output; printing is left to the binary.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `preview` | Render the template against the draft |
//! | `check` | List required variables that are still empty |
//! | `view` | Dump the presentation model as JSON |
//!
//! # Example Usage
//!
//! ```bash
//! prompt-setup preview tutor.toml --set subject=Math --format markdown
//! prompt-setup check tutor.toml --set subject=Math
//! prompt-setup view tutor.toml
//! ```

mod check;
mod preview;
mod view;

pub use check::{CheckReport, cmd_check};
pub use preview::cmd_preview;
pub use view::cmd_view;

use std::path::Path;
use tracing::debug;

use crate::{Error, Result, SetupConfig, SetupFile, WelcomeController};

/// Splits `KEY=VALUE` assignments. Values may themselves contain `=`.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for an assignment without `=` or with an
/// empty key.
pub fn parse_assignments(assignments: &[String]) -> Result<Vec<(String, String)>> {
    assignments
        .iter()
        .map(|assignment| match assignment.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
            _ => Err(Error::InvalidInput(format!(
                "expected KEY=VALUE, got '{assignment}'"
            ))),
        })
        .collect()
}

/// Loads a setup file into a controller and applies assignments.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or an assignment names an
/// unknown variable.
pub fn load_controller(
    setup: &Path,
    config: &SetupConfig,
    assignments: &[String],
) -> Result<WelcomeController> {
    let file = SetupFile::load(setup)?;
    let mut controller = file.into_builder().config(config.clone()).build();

    for (key, value) in parse_assignments(assignments)? {
        controller.set_input(&key, value)?;
    }
    debug!(
        setup = %setup.display(),
        assignments = assignments.len(),
        "setup loaded"
    );
    Ok(controller)
}
