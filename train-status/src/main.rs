use std::sync::Arc;

use train_status::config::{ServerConfig, SourceConfig};
use train_status::fetch::RedirectingFetcher;
use train_status::source::{JsonTrainLibrary, LibrarySource, MockSource, RecordSource};
use train_status::status::StatusService;
use train_status::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    train_status::logging::init();

    let config = ServerConfig::from_env()?;

    let source: Arc<dyn RecordSource> = match &config.source {
        SourceConfig::Remote { base_url } => {
            let fetcher = RedirectingFetcher::new(config.fetcher.clone())?;
            let library = JsonTrainLibrary::new(base_url.clone(), Arc::new(fetcher));
            tracing::info!(%base_url, "reading train records from remote source");
            Arc::new(LibrarySource::new(library))
        }
        SourceConfig::Mock { data_dir } => {
            let mock = MockSource::from_dir(data_dir)?;
            tracing::info!(
                dir = %data_dir.display(),
                trains = mock.available_trains().len(),
                "serving mock train records"
            );
            Arc::new(mock)
        }
    };

    let state = AppState::new(StatusService::new(source));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen).await?;
    tracing::info!(addr = %config.listen, "train status service listening");
    tracing::info!("  GET  /health");
    tracing::info!("  POST /rpc/GetStatus");
    tracing::info!("  GET  /trains/:number/status");

    axum::serve(listener, app).await?;
    Ok(())
}
