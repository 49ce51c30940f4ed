use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use timbre::application::services::DetectionService;
use timbre::infrastructure::inference::CommandInferenceRunner;
use timbre::infrastructure::observability::init_tracing;
use timbre::infrastructure::storage::LocalStagingStore;
use timbre::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&settings, environment);

    let staging_store = Arc::new(
        LocalStagingStore::new(settings.storage.temp_dir.clone())
            .context("Failed to prepare upload staging directory")?,
    );

    let inference_runner = Arc::new(CommandInferenceRunner::new(
        settings.inference.command.clone(),
        settings.inference.args.clone(),
    ));

    let detection_service = Arc::new(DetectionService::new(
        staging_store,
        inference_runner,
        settings.inference.timeout(),
    ));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .with_context(|| format!("Invalid listen address {}", settings.server.host))?;

    let state = AppState {
        detection_service,
        settings,
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
