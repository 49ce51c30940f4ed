mod init_tracing;
mod output_preview;
mod request_id;
mod tracing_config;

pub use init_tracing::init_tracing;
pub use output_preview::preview_output;
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
pub use tracing_config::TracingConfig;
