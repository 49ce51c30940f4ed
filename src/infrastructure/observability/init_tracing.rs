use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use super::TracingConfig;
use crate::presentation::config::{Environment, Settings};

/// Installs the global subscriber from the logging settings and records the
/// relay configuration the process starts with.
pub fn init_tracing(settings: &Settings, environment: Environment) {
    let config = TracingConfig::from_settings(&settings.logging, environment);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directive()));

    let fmt_layer = if config.json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    let inference = &settings.inference;
    tracing::info!(
        environment = %config.environment,
        json_format = config.json_format,
        port = settings.server.port,
        command = %inference.command,
        args = ?inference.args,
        timeout_ms = inference.timeout_ms,
        staging_dir = %settings.storage.temp_dir.display(),
        max_upload_size_mb = settings.server.max_upload_size_mb,
        "Relay initialized"
    );
}
