//! Configuration management for lineprompt.
//!
//! This module handles loading and merging configuration from multiple sources:
//! - Built-in defaults
//! - Config files (`.lineprompt/config.yaml` or `$LINEPROMPT_CONFIG`)
//! - Environment variables
//! - Command-line flags
//!
//! The central value is [`FormattingPolicy`], which decides how every prompt
//! of a session is decorated. It is constructed once and handed to the
//! session; nothing here is global or mutable after loading.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Default location of the config file, relative to the current directory.
pub const DEFAULT_CONFIG_PATH: &str = ".lineprompt/config.yaml";

/// Style switches applied to every prompt of a session.
///
/// The all-false value (also the `Default`) means "no decoration": the
/// question text is written exactly as given. A session built without a
/// policy behaves the same way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattingPolicy {
    /// Append `?` to every question
    #[serde(default)]
    pub append_question_mark: bool,

    /// Append a single space after the prompt so answers don't touch it
    #[serde(default)]
    pub append_space: bool,

    /// Show the default answer inline, e.g. `Name [bob]`
    #[serde(default)]
    pub show_default_in_prompt: bool,
}

impl FormattingPolicy {
    /// All decorations on: `Question? [default] `.
    pub fn standard() -> Self {
        Self {
            append_question_mark: true,
            append_space: true,
            show_default_in_prompt: true,
        }
    }

    /// Policy with the question mark switched on or off.
    pub fn with_question_mark(mut self, enabled: bool) -> Self {
        self.append_question_mark = enabled;
        self
    }

    /// Policy with the trailing space switched on or off.
    pub fn with_space(mut self, enabled: bool) -> Self {
        self.append_space = enabled;
        self
    }

    /// Policy with the inline default switched on or off.
    pub fn with_default_shown(mut self, enabled: bool) -> Self {
        self.show_default_in_prompt = enabled;
        self
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Decoration applied to prompts
    pub formatting: FormattingPolicy,

    /// Config file that was merged, if any
    pub config_file: Option<PathBuf>,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,
}

/// Per-flag formatting overrides coming from the command line.
///
/// `None` leaves the loaded value untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormattingOverrides {
    pub append_question_mark: Option<bool>,
    pub append_space: Option<bool>,
    pub show_default_in_prompt: Option<bool>,
}

/// Full configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    formatting: Option<FormattingFile>,
    logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FormattingFile {
    append_question_mark: Option<bool>,
    append_space: Option<bool>,
    show_default_in_prompt: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            formatting: FormattingPolicy::standard(),
            config_file: None,
            log_level: None,
            verbose: false,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default config file and the environment.
    ///
    /// Environment variables:
    /// - `LINEPROMPT_CONFIG`: Path to config file
    /// - `LINEPROMPT_APPEND_QUESTION_MARK`: Append `?` to questions
    /// - `LINEPROMPT_APPEND_SPACE`: Append a space after prompts
    /// - `LINEPROMPT_SHOW_DEFAULT`: Show defaults inline
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    ///
    /// # Example
    /// ```no_run
    /// use lineprompt_core::config::AppConfig;
    ///
    /// let config = AppConfig::load().expect("Failed to load config");
    /// println!("Formatting: {:?}", config.formatting);
    /// ```
    pub fn load() -> AppResult<Self> {
        Self::load_from(None)
    }

    /// Load configuration, reading `config_file` instead of the default
    /// location when given.
    pub fn load_from(config_file: Option<&Path>) -> AppResult<Self> {
        Self::load_with(config_file, |key| std::env::var(key).ok())
    }

    /// Load configuration with a custom environment lookup.
    pub fn load_with<F>(config_file: Option<&Path>, env: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let explicit = config_file
            .map(Path::to_path_buf)
            .or_else(|| env("LINEPROMPT_CONFIG").map(PathBuf::from));

        match explicit {
            Some(path) => {
                // An explicitly named file must exist
                if !path.exists() {
                    return Err(AppError::Config(format!(
                        "Config file does not exist: {:?}",
                        path
                    )));
                }
                config.merge_yaml(&path)?;
            }
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_PATH);
                if path.exists() {
                    config.merge_yaml(&path)?;
                }
            }
        }

        // Environment variables override YAML config
        if let Some(value) = env("LINEPROMPT_APPEND_QUESTION_MARK") {
            config.formatting.append_question_mark =
                parse_flag("LINEPROMPT_APPEND_QUESTION_MARK", &value)?;
        }

        if let Some(value) = env("LINEPROMPT_APPEND_SPACE") {
            config.formatting.append_space = parse_flag("LINEPROMPT_APPEND_SPACE", &value)?;
        }

        if let Some(value) = env("LINEPROMPT_SHOW_DEFAULT") {
            config.formatting.show_default_in_prompt =
                parse_flag("LINEPROMPT_SHOW_DEFAULT", &value)?;
        }

        if let Some(level) = env("RUST_LOG") {
            config.log_level = Some(level);
        }

        if env("NO_COLOR").is_some() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Merge a YAML configuration file into this config.
    fn merge_yaml(&mut self, path: &Path) -> AppResult<()> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        // An empty file deserializes to unit, not to an empty mapping
        let file: ConfigFile = if contents.trim().is_empty() {
            ConfigFile::default()
        } else {
            serde_yaml::from_str(&contents).map_err(|e| {
                AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
            })?
        };

        if let Some(formatting) = file.formatting {
            if let Some(v) = formatting.append_question_mark {
                self.formatting.append_question_mark = v;
            }
            if let Some(v) = formatting.append_space {
                self.formatting.append_space = v;
            }
            if let Some(v) = formatting.show_default_in_prompt {
                self.formatting.show_default_in_prompt = v;
            }
        }

        if let Some(logging) = file.logging {
            if let Some(level) = logging.level {
                self.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                self.no_color = !color;
            }
        }

        tracing::debug!("Merged config file {:?}", path);
        self.config_file = Some(path.to_path_buf());
        Ok(())
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// Command-line flags take precedence over the config file and the
    /// environment.
    pub fn with_overrides(
        mut self,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
        formatting: FormattingOverrides,
    ) -> Self {
        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        if let Some(v) = formatting.append_question_mark {
            self.formatting.append_question_mark = v;
        }
        if let Some(v) = formatting.append_space {
            self.formatting.append_space = v;
        }
        if let Some(v) = formatting.show_default_in_prompt {
            self.formatting.show_default_in_prompt = v;
        }

        self
    }
}

/// Parse a boolean environment flag.
fn parse_flag(name: &str, value: &str) -> AppResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::Config(format!(
            "Invalid value for {}: {:?} (expected true/false)",
            name, other
        ))),
    }
}
