use std::path::PathBuf;
use std::time::Duration;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File};
use serde::Deserialize;

use super::Environment;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TIMEOUT_MS: u64 = 60_000;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub inference: InferenceSettings,
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_size_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InferenceSettings {
    pub command: String,
    pub args: Vec<String>,
    pub timeout_ms: u64,
}

impl InferenceSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub temp_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl ServerSettings {
    pub fn max_upload_size_bytes(&self) -> usize {
        self.max_upload_size_mb.saturating_mul(1024 * 1024)
    }
}

impl Settings {
    /// Defaults overlaid with `appsettings.<Environment>` when that file exists.
    pub fn builder(environment: Environment) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("server.max_upload_size_mb", 25)?
            .set_default("inference.command", "python")?
            .set_default("inference.args", vec!["detect_gender.py"])?
            .set_default("inference.timeout_ms", DEFAULT_TIMEOUT_MS as i64)?
            .set_default("storage.temp_dir", "uploads")?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .add_source(
                File::with_name(&environment.settings_file()).required(false),
            ))
    }

    /// Full layering: defaults, settings file, `APP_*` variables, then `PORT`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let mut builder = Self::builder(environment)?.add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .list_separator(" ")
                .with_list_parse_key("inference.args")
                .try_parsing(true),
        );

        if let Ok(port) = std::env::var("PORT") {
            let port: u16 = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::Message(format!("Invalid PORT: {}", port)))?;
            builder = builder.set_override("server.port", i64::from(port))?;
        }

        builder.build()?.try_deserialize()
    }
}
