//! Converter configuration (`vd2svg.toml`).
//!
//! # Example
//!
//! ```toml
//! [input]
//! namespace_prefix = "android"   # prefix qualifying every drawable attribute
//!
//! [output]
//! indent = 2                     # spaces per level, 0 = single line
//! ```
//!
//! Load order: defaults → config file → CLI flags.

mod error;

pub use error::{ConfigDiagnostics, ConfigError};

use crate::cli::Cli;
use crate::convert::{ConvertOptions, DEFAULT_NAMESPACE_PREFIX};
use crate::debug;
use crate::svg::WriteOptions;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "vd2svg.toml";

const MAX_INDENT: usize = 16;

// ============================================================================
// root configuration
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertConfig {
    /// Path to the config file, if one was loaded (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// How the drawable is read
    pub input: InputConfig,

    /// How the SVG is written
    pub output: OutputConfig,
}

/// `[input]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    pub namespace_prefix: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            namespace_prefix: DEFAULT_NAMESPACE_PREFIX.to_string(),
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: WriteOptions::default().indent,
        }
    }
}

impl ConvertConfig {
    /// Load configuration and apply CLI overrides.
    ///
    /// An explicit `--config` must exist; the implicit `vd2svg.toml` is optional.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) if !path.exists() => return Err(ConfigError::NotFound(path.clone())),
            Some(path) => Self::from_path(path)?,
            None => {
                let implicit = Path::new(DEFAULT_CONFIG_FILE);
                if implicit.is_file() {
                    Self::from_path(implicit)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        debug!("config"; "loaded {}", path.display());
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    fn apply_cli(&mut self, cli: &Cli) {
        Self::update_option(&mut self.output.indent, cli.indent.as_ref());
        Self::update_option(
            &mut self.input.namespace_prefix,
            cli.namespace_prefix.as_ref(),
        );
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        let prefix = &self.input.namespace_prefix;
        if prefix.is_empty() {
            diag.error_with_hint(
                "input.namespace_prefix",
                "namespace prefix must not be empty",
                format!("VectorDrawables use `{DEFAULT_NAMESPACE_PREFIX}`"),
            );
        } else if prefix.contains(':') || prefix.chars().any(char::is_whitespace) {
            diag.error(
                "input.namespace_prefix",
                format!("`{prefix}` is not a valid XML namespace prefix"),
            );
        }

        if self.output.indent > MAX_INDENT {
            diag.error_with_hint(
                "output.indent",
                format!("indent of {} is too large", self.output.indent),
                format!("use a value between 0 and {MAX_INDENT}"),
            );
        }

        diag.into_result()
    }

    /// Options for a single conversion.
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            namespace_prefix: self.input.namespace_prefix.clone(),
            write: WriteOptions {
                indent: self.output.indent,
            },
        }
    }
}

// ============================================================================
// tests
// ============================================================================
