mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    DEFAULT_PORT, DEFAULT_TIMEOUT_MS, InferenceSettings, LoggingSettings, ServerSettings,
    Settings, StorageSettings,
};
