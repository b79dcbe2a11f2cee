//! Configuration management.

mod setup_file;

pub use setup_file::{SetupFile, SetupFlags};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::models::QuestionCategory;
use crate::services::CatalogTranslator;

/// Default maximum length of single-line inputs.
pub const DEFAULT_VALUE_MAX_LEN: usize = 48;

/// Default duration of error notifications, in milliseconds.
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 3000;

/// Main configuration for the setup surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupConfig {
    /// Maximum length of single-line inputs without an explicit limit.
    pub default_value_max_len: usize,
    /// How long error notifications stay visible.
    pub notification_duration_ms: u64,
    /// Gate start chat on validation in the private version too.
    pub private_requires_complete_inputs: bool,
    /// Example questions offered in the private version.
    pub example_questions: Vec<QuestionCategory>,
    /// Translation overrides, keyed by translation key.
    pub translations: BTreeMap<String, String>,
    /// Logging settings.
    pub logging: LoggingSettings,
}

/// Logging section of the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoggingSettings {
    /// Filter directive, e.g. `info` or `prompt_setup=debug`.
    pub filter: Option<String>,
    /// Output format: `pretty` or `json`.
    pub format: Option<String>,
    /// Log file path; logs go to stderr when unset.
    pub file: Option<PathBuf>,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Default max length.
    pub default_value_max_len: Option<usize>,
    /// Notification duration.
    pub notification_duration_ms: Option<u64>,
    /// Private start-chat gating.
    pub private_requires_complete_inputs: Option<bool>,
    /// Example questions.
    #[serde(default)]
    pub example_questions: Vec<QuestionCategory>,
    /// Translation overrides.
    #[serde(default)]
    pub translations: BTreeMap<String, String>,
    /// Logging section.
    pub logging: Option<LoggingSettings>,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            default_value_max_len: DEFAULT_VALUE_MAX_LEN,
            notification_duration_ms: DEFAULT_NOTIFICATION_DURATION_MS,
            private_requires_complete_inputs: false,
            example_questions: Vec::new(),
            translations: BTreeMap::new(),
            logging: LoggingSettings::default(),
        }
    }
}

impl SetupConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid configuration TOML, or a
    /// value is out of range.
    pub fn from_toml(contents: &str) -> crate::Result<Self> {
        let file: ConfigFile =
            toml::from_str(contents).map_err(|e| crate::Error::OperationFailed {
                operation: "parse_config_file".to_string(),
                cause: e.to_string(),
            })?;

        Self::from_config_file(file)
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> crate::Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| crate::Error::OperationFailed {
                operation: "read_config_file".to_string(),
                cause: format!("{}: {e}", path.display()),
            })?;

        Self::from_toml(&contents)
    }

    /// Loads configuration from the default location.
    ///
    /// Checks the following paths in order:
    /// 1. Platform-specific config dir (`~/Library/Application Support/prompt-setup/` on macOS)
    /// 2. XDG config dir (`~/.config/prompt-setup/` for Unix compatibility)
    ///
    /// Returns default configuration if no config file is found.
    #[must_use]
    pub fn load_default() -> Self {
        let Some(base_dirs) = directories::BaseDirs::new() else {
            return Self::default();
        };

        let platform_config = base_dirs
            .config_dir()
            .join("prompt-setup")
            .join("config.toml");
        let xdg_config = base_dirs
            .home_dir()
            .join(".config")
            .join("prompt-setup")
            .join("config.toml");

        for path in [platform_config, xdg_config] {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(config) => return config,
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "ignoring config file"),
            }
        }

        Self::default()
    }

    /// Converts a `ConfigFile` to `SetupConfig`.
    fn from_config_file(file: ConfigFile) -> crate::Result<Self> {
        let mut config = Self::default();

        if let Some(max_len) = file.default_value_max_len {
            if max_len == 0 {
                return Err(crate::Error::InvalidInput(
                    "default_value_max_len must be positive".to_string(),
                ));
            }
            config.default_value_max_len = max_len;
        }
        if let Some(duration) = file.notification_duration_ms {
            config.notification_duration_ms = duration;
        }
        if let Some(gated) = file.private_requires_complete_inputs {
            config.private_requires_complete_inputs = gated;
        }
        if let Some(logging) = file.logging {
            config.logging = logging;
        }
        config.example_questions = file.example_questions;
        config.translations = file.translations;

        Ok(config)
    }

    /// English catalog with the configured translation overrides applied.
    #[must_use]
    pub fn translator(&self) -> CatalogTranslator {
        CatalogTranslator::english().with_entries(
            self.translations
                .iter()
                .map(|(key, text)| (key.as_str(), text.as_str())),
        )
    }

    /// Sets the example questions.
    #[must_use]
    pub fn with_example_questions(mut self, categories: Vec<QuestionCategory>) -> Self {
        self.example_questions = categories;
        self
    }

    /// Gates start chat on validation in the private version.
    #[must_use]
    pub const fn with_private_requires_complete_inputs(mut self, gated: bool) -> Self {
        self.private_requires_complete_inputs = gated;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{Translator, keys};
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SetupConfig::default();
        assert_eq!(config.default_value_max_len, 48);
        assert_eq!(config.notification_duration_ms, 3000);
        assert!(!config.private_requires_complete_inputs);
        assert!(config.example_questions.is_empty());
    }

    #[test]
    fn test_from_toml_merges_over_defaults() {
        let config = SetupConfig::from_toml(
            r#"
            private_requires_complete_inputs = true

            [[example_questions]]
            title = "Math"
            questions = ["What is 1+1?", "Explain calculus"]

            [translations]
            "app.variableTable.optional" = "Facultatif"

            [logging]
            filter = "debug"
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.default_value_max_len, 48);
        assert!(config.private_requires_complete_inputs);
        assert_eq!(config.example_questions.len(), 1);
        assert!(config.example_questions[0].contains("Explain calculus"));
        assert_eq!(config.logging.format.as_deref(), Some("json"));
        assert_eq!(config.translator().translate(keys::OPTIONAL), "Facultatif");
        assert_eq!(
            config.translator().translate(keys::PUBLIC_PROMPT_CONFIG_TITLE),
            "Prompt"
        );
    }

    #[test]
    fn test_demo_config_parses() {
        let config = SetupConfig::from_toml(include_str!("../../demos/config.toml")).unwrap();
        assert_eq!(config.example_questions.len(), 2);
        assert_eq!(
            config.translator().translate(keys::PRIVATE_PROMPT_CONFIG_TITLE),
            "Session settings"
        );
    }

    #[test]
    fn test_zero_max_len_rejected() {
        let result = SetupConfig::from_toml("default_value_max_len = 0");
        assert!(matches!(result, Err(crate::Error::InvalidInput(_))));
    }

    #[test]
    fn test_unparseable_toml_fails() {
        let result = SetupConfig::from_toml("default_value_max_len = \"many\"");
        assert!(matches!(
            result,
            Err(crate::Error::OperationFailed { .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "notification_duration_ms = 5000").unwrap();

        let config = SetupConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.notification_duration_ms, 5000);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = SetupConfig::load_from_file(&dir.path().join("absent.toml"));
        assert!(result.is_err());
    }
}
