//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rscamelot/rscamelot.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `RSCAMELOT_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::{expand_env_vars, GlobalOption, OptionSet, OutputFormat};

/// Default global options passed to every camelot call.
///
/// Every field is optional: `None` means the flag is not emitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GlobalDefaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,
    /// One of csv, excel, html, json, markdown, sqlite
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_text: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag_size: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strip_text: Option<String>,
    /// char_margin, line_margin, word_margin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margins: Option<Vec<f64>>,
}

impl GlobalDefaults {
    /// Merge overlay onto self (base): overlay wins field by field if Some.
    pub fn merge(&self, overlay: &GlobalDefaults) -> Self {
        Self {
            quiet: overlay.quiet.clone().or_else(|| self.quiet.clone()),
            pages: overlay.pages.clone().or_else(|| self.pages.clone()),
            format: overlay.format.clone().or_else(|| self.format.clone()),
            zip: overlay.zip.or(self.zip),
            split_text: overlay.split_text.or(self.split_text),
            flag_size: overlay.flag_size.or(self.flag_size),
            strip_text: overlay
                .strip_text
                .clone()
                .or_else(|| self.strip_text.clone()),
            margins: overlay.margins.clone().or_else(|| self.margins.clone()),
        }
    }
}

/// Raw settings for intermediate parsing (scalars are Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub program: Option<String>,
    pub global: GlobalDefaults,
}

/// Unified configuration for rscamelot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// camelot executable, looked up on PATH unless it contains a separator
    pub program: String,
    /// Default global options
    pub global: GlobalDefaults,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            program: "camelot".into(),
            global: GlobalDefaults::default(),
        }
    }
}

/// Get the XDG config directory for rscamelot.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rscamelot").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("rscamelot.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ApplicationError::OperationFailed {
            context: format!("read config: {}", path.display()),
            source: Box::new(e),
        })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// An unset variable is `None`; one that is set but does not parse is an error.
fn env_value<T>(
    key: &str,
    result: Result<T, ConfigError>,
) -> Result<Option<T>, ApplicationError> {
    match result {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(ApplicationError::Config {
            message: format!("environment override {}: {}", key, e),
        }),
    }
}

fn env_string(config: &Config, key: &str) -> Result<Option<String>, ApplicationError> {
    env_value(key, config.get_string(key))
}

fn env_bool(config: &Config, key: &str) -> Result<Option<bool>, ApplicationError> {
    env_value(key, config.get_bool(key))
}

fn parse_margins(values: &[f64]) -> Result<[f64; 3], ApplicationError> {
    <[f64; 3]>::try_from(values).map_err(|_| ApplicationError::Config {
        message: format!(
            "margins needs exactly 3 values (char, line, word), got {}",
            values.len()
        ),
    })
}

impl Settings {
    /// Expand shell variables and tilde in the program path.
    fn expand_paths(&mut self) {
        self.program = expand_env_vars(&self.program);
    }

    /// Merge overlay config onto self (base). Overlay wins if Some.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            program: overlay
                .program
                .clone()
                .unwrap_or_else(|| self.program.clone()),
            global: self.global.merge(&overlay.global),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; must exist if given
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/rscamelot/rscamelot.toml`
    /// 3. Explicit config file
    /// 4. Environment variables: `RSCAMELOT_*` prefix
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config, if present
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Explicit config file
        if let Some(path) = config_file {
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        // 4. Environment variables
        current = Self::apply_env_overrides(current)?;

        current.expand_paths();

        Ok(current)
    }

    /// Apply RSCAMELOT_* environment variables as explicit overrides.
    ///
    /// Nested keys use `__`: `RSCAMELOT_GLOBAL__PAGES=1-end`.
    /// Margins are given comma-separated: `RSCAMELOT_GLOBAL__MARGINS=1.0,0.5,0.1`.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("RSCAMELOT")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_string(&config, "program")? {
            settings.program = val;
        }
        if let Some(val) = env_string(&config, "global.quiet")? {
            settings.global.quiet = Some(val);
        }
        if let Some(val) = env_string(&config, "global.pages")? {
            settings.global.pages = Some(val);
        }
        if let Some(val) = env_string(&config, "global.format")? {
            settings.global.format = Some(val);
        }
        if let Some(val) = env_bool(&config, "global.zip")? {
            settings.global.zip = Some(val);
        }
        if let Some(val) = env_bool(&config, "global.split_text")? {
            settings.global.split_text = Some(val);
        }
        if let Some(val) = env_bool(&config, "global.flag_size")? {
            settings.global.flag_size = Some(val);
        }
        if let Some(val) = env_string(&config, "global.strip_text")? {
            settings.global.strip_text = Some(val);
        }
        if let Some(val) = env_string(&config, "global.margins")? {
            let margins = val
                .split(',')
                .map(|v| v.trim().parse::<f64>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| ApplicationError::Config {
                    message: format!("RSCAMELOT_GLOBAL__MARGINS: {}", e),
                })?;
            settings.global.margins = Some(margins);
        }

        Ok(settings)
    }

    /// Default global options as an option set.
    ///
    /// Fails if `format` is not a known output format or `margins` does not
    /// hold exactly three values.
    pub fn global_options(&self) -> Result<OptionSet<GlobalOption>, ApplicationError> {
        let global = &self.global;
        let mut options = OptionSet::new();

        if let Some(quiet) = &global.quiet {
            options.push(GlobalOption::Quiet(quiet.clone()));
        }
        if let Some(pages) = &global.pages {
            options.push(GlobalOption::Pages(pages.clone()));
        }
        if let Some(format) = &global.format {
            options.push(GlobalOption::Format(format.parse::<OutputFormat>()?));
        }
        if global.zip == Some(true) {
            options.push(GlobalOption::Zip);
        }
        if global.split_text == Some(true) {
            options.push(GlobalOption::SplitText);
        }
        if global.flag_size == Some(true) {
            options.push(GlobalOption::FlagSize);
        }
        if let Some(strip) = &global.strip_text {
            options.push(GlobalOption::StripText(strip.clone()));
        }
        if let Some(margins) = &global.margins {
            options.push(GlobalOption::Margins(parse_margins(margins)?));
        }

        Ok(options)
    }

    /// Render the effective settings as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}
