//! Configuration management for battlog.
//!
//! Settings are stored as pretty-printed JSON in the platform data directory
//! (`config.json` next to the encrypted session file):
//!
//! - **Windows**: `%LOCALAPPDATA%\battlog\battlog\config.json`
//! - **macOS**: `~/Library/Application Support/battlog/battlog/config.json`
//! - **Linux**: `~/.local/share/battlog/battlog/config.json`
//!
//! Both sections are optional; a missing file means defaults everywhere.
//!
//! ## API URL resolution
//!
//! 1. `BATTLOG_API_URL` from the environment (a `.env` file is honored)
//! 2. `api.api_url` from the config file
//! 3. [`DEFAULT_API_URL`], with a warning
//!
//! ```rust,no_run
//! use battlog::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("Using {}", config.api_url());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::record::Field;
use super::submission::NOTIFICATION_TTL;
use super::validator::{Validator, DEFAULT_NUMERIC_FIELDS};
use crate::libs::messages::Message;
use crate::{msg_print, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overriding the configured API URL.
pub const API_URL_ENV: &str = "BATTLOG_API_URL";

/// Local development server used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// A section offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the battery log service, without a trailing slash.
    pub api_url: String,
}

/// Missing keys take their default values.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct FormConfig {
    /// Field keys that must hold a number when filled in.
    pub numeric_fields: Vec<String>,

    /// How long submission notifications stay visible, in milliseconds.
    pub notification_ms: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            numeric_fields: DEFAULT_NUMERIC_FIELDS.iter().map(|f| f.key().to_string()).collect(),
            notification_ms: NOTIFICATION_TTL.as_millis() as u64,
        }
    }
}

impl FormConfig {
    /// Builds the validator for the configured numeric fields. Unknown keys
    /// are reported and skipped.
    pub fn validator(&self) -> Validator {
        let fields = self.numeric_fields.iter().filter_map(|key| match key.trim().parse::<Field>() {
            Ok(field) => Some(field),
            Err(_) => {
                msg_warning!(Message::UnknownNumericField(key.clone()));
                None
            }
        });
        Validator::with_numeric_fields(fields.collect::<Vec<_>>())
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<ApiConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<FormConfig>,
}

impl Config {
    /// Reads the configuration, returning defaults when no file exists.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if present.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    pub fn form(&self) -> FormConfig {
        self.form.clone().unwrap_or_default()
    }

    /// Effective API base URL; see the module docs for precedence.
    pub fn api_url(&self) -> String {
        let from_env = env::var(API_URL_ENV).ok();
        match resolve_api_url(from_env.as_deref(), self.api.as_ref().map(|api| api.api_url.as_str())) {
            Some(url) => url,
            None => {
                msg_warning!(Message::ApiUrlFallback(DEFAULT_API_URL.to_string()));
                DEFAULT_API_URL.to_string()
            }
        }
    }

    /// Interactive setup wizard, prefilled with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "api".to_string(),
                name: "API".to_string(),
            },
            ConfigModule {
                key: "form".to_string(),
                name: "Form".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .defaults(&[true, false])
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "api" => {
                    let default = config.api.clone().map(|api| api.api_url).unwrap_or_else(|| DEFAULT_API_URL.to_string());
                    msg_print!(Message::ConfigModuleApi);
                    let api_url: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptApiUrl.to_string())
                        .default(default)
                        .interact_text()?;
                    config.api = Some(ApiConfig {
                        api_url: api_url.trim().trim_end_matches('/').to_string(),
                    });
                }
                "form" => {
                    let default = config.form();
                    msg_print!(Message::ConfigModuleForm);
                    let numeric_fields: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptNumericFields.to_string())
                        .default(default.numeric_fields.join(","))
                        .interact_text()?;
                    config.form = Some(FormConfig {
                        numeric_fields: numeric_fields
                            .split(',')
                            .map(str::trim)
                            .filter(|key| !key.is_empty())
                            .map(str::to_string)
                            .collect(),
                        notification_ms: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptNotificationMs.to_string())
                            .default(default.notification_ms)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}

/// Picks the first non-blank candidate, environment first.
pub fn resolve_api_url(from_env: Option<&str>, from_config: Option<&str>) -> Option<String> {
    [from_env, from_config]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty())
        .map(|url| url.trim_end_matches('/').to_string())
}
