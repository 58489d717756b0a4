use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use gymdesk_api::config::ApiConfig;
use gymdesk_api::router;
use gymdesk_api::state::AppState;
use gymdesk_storage::s3::S3ObjectStore;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ApiConfig::from_env()?;
    tracing::info!(
        bucket = %config.bucket,
        timezone = %config.timezone_name,
        "starting gymdesk-api"
    );

    let s3 = gymdesk_storage::client::build_client().await;
    let store = Arc::new(S3ObjectStore::new(s3, config.bucket.clone()));
    let app = router(AppState::new(store, config.timezone.clone()));

    match config.bind_addr {
        Some(addr) => {
            let listener = tokio::net::TcpListener::bind(addr).await?;
            tracing::info!(%addr, "listening");
            axum::serve(listener, app).await?;
            Ok(())
        }
        None => lambda_http::run(app).await.map_err(|e| eyre::eyre!(e)),
    }
}
