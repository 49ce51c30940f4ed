use crate::presentation::config::{Environment, LoggingSettings};

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub default_level: String,
}

impl TracingConfig {
    pub fn from_settings(settings: &LoggingSettings, environment: Environment) -> Self {
        Self {
            environment: environment.to_string(),
            json_format: settings.enable_json,
            default_level: settings.level.clone(),
        }
    }

    /// Filter used when `RUST_LOG` is not set.
    pub fn default_directive(&self) -> String {
        format!(
            "{},timbre={},tower_http=debug",
            self.default_level,
            crate_level(&self.default_level)
        )
    }
}

fn crate_level(level: &str) -> &str {
    match level {
        "info" | "warn" | "error" => "debug",
        other => other,
    }
}
