use anyhow::{Context, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::backend::{DEFAULT_ENDPOINT, parse_endpoint};
use crate::i18n::LanguageCode;
use crate::ui::Theme;
use crate::{fs as atomic_fs, paths};

/// Default settings in the `[neochat]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NeochatConfig {
    /// Backend endpoint URL.
    pub endpoint: Option<String>,
    /// Interface language code.
    pub language: Option<String>,
    /// Color theme name.
    pub theme: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/neochat/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub neochat: NeochatConfig,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoint: Url,
    pub language: LanguageCode,
    pub theme: Theme,
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub endpoint: Option<String>,
    pub language: Option<String>,
    pub theme: Option<String>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Priority: CLI option, then config file, then built-in default.
///
/// # Errors
///
/// Returns an error if the endpoint, language or theme from either source is
/// invalid.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let file = &config_file.neochat;

    let endpoint = options
        .endpoint
        .as_deref()
        .or(file.endpoint.as_deref())
        .unwrap_or(DEFAULT_ENDPOINT);
    let endpoint = parse_endpoint(endpoint)?;

    let language = options
        .language
        .as_deref()
        .or(file.language.as_deref())
        .map(str::parse::<LanguageCode>)
        .transpose()?
        .unwrap_or_default();

    let theme = options
        .theme
        .as_deref()
        .or(file.theme.as_deref())
        .map(str::parse::<Theme>)
        .transpose()?
        .unwrap_or_default();

    Ok(ResolvedConfig {
        endpoint,
        language,
        theme,
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/neochat/config.toml`
    /// or `~/.config/neochat/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        atomic_fs::atomic_write(&self.config_path, &contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    /// Loads the config file, or the defaults when it does not exist.
    ///
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}
