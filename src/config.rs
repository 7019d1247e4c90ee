use crate::error::{Result, SuggestError};
use crate::input::DEFAULT_COUNT;
use crate::path_utils::{safe_parent_for_creation, validate_path_str};
use clap::ValueEnum;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const ENV_CONFIG_DIR: &str = "TERMSUGGEST_CONFIG_DIR";
pub const APP_NAME: &str = "termsuggest";
pub const CONFIG_FILE: &str = "config.toml";
pub const CONFIG_VERSION: &str = "0.1";

const SAMPLE_CONFIG: &str = r#"# termsuggest configuration
version = "0.1"

[suggest]
# Suggestions returned when no count is given.
default-count = 3
# Output of `termsuggest match`: "text" or "json".
format = "text"
"#;

pub fn resolve_config_dir(cli_override: Option<&Path>) -> Result<PathBuf> {
    let env_override = env::var(ENV_CONFIG_DIR).ok();
    resolve_config_dir_with(cli_override, env_override.as_deref())
}

/// Resolution order: command line, then environment, then the platform config dir.
pub fn resolve_config_dir_with(
    cli_override: Option<&Path>,
    env_override: Option<&str>,
) -> Result<PathBuf> {
    if let Some(path) = cli_override {
        validate_path_str(&path.to_string_lossy())
            .map_err(|e| SuggestError::config(format!("invalid --config-dir: {e}")))?;
        return Ok(path.to_path_buf());
    }

    if let Some(env_config_dir) = env_override {
        validate_path_str(env_config_dir)
            .map_err(|e| SuggestError::config(format!("invalid {ENV_CONFIG_DIR}: {e}")))?;
        return Ok(PathBuf::from(env_config_dir));
    }

    let project_dirs = ProjectDirs::from("", "", APP_NAME)
        .ok_or_else(|| SuggestError::config("could not determine a config directory"))?;
    Ok(project_dirs.config_dir().to_path_buf())
}

pub fn config_file_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE)
}

/// Writes the commented sample config when none exists. Returns whether it wrote one.
pub fn ensure_sample_config(config_dir: &Path) -> Result<bool> {
    let path = config_file_path(config_dir);
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = safe_parent_for_creation(&path) {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, SAMPLE_CONFIG)?;
    debug!(path = %path.display(), "wrote sample config");
    Ok(true)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub version: String,
    pub suggest: SuggestConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    #[serde(rename = "default-count")]
    pub default_count: usize,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            suggest: SuggestConfig::default(),
        }
    }
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            default_count: DEFAULT_COUNT,
            format: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Loads `config.toml` from `config_dir`; a missing file means defaults.
    pub fn load(config_dir: &Path) -> Result<Self> {
        let path = config_file_path(config_dir);
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<()> {
        if self.suggest.default_count == 0 {
            return Err(SuggestError::config("suggest.default-count must be a positive integer"));
        }
        Ok(())
    }
}
