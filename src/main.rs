use std::net::SocketAddr;
use std::sync::Arc;

use aws_config::{BehaviorVersion, Region};
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod error;
mod storage;
mod tts;

use api::routes::{create_router, AppState};
use config::Config;
use storage::S3Store;
use tts::PollySynthesizer;

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    let on_lambda = std::env::var("AWS_LAMBDA_RUNTIME_API").is_ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(!on_lambda)
        .init();

    let config = Config::from_env()?;

    tracing::info!("Polly speech service v{}", env!("CARGO_PKG_VERSION"));
    match &config.bucket {
        Some(bucket) => tracing::info!("Storing audio in bucket: {}", bucket),
        None => tracing::warn!("S3_BUCKET is not set; uploads will fail"),
    }

    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = &config.region {
        loader = loader.region(Region::new(region.clone()));
    }
    let sdk_config = loader.load().await;

    let synthesizer = PollySynthesizer::new(aws_sdk_polly::Client::new(&sdk_config));
    let store = S3Store::new(aws_sdk_s3::Client::new(&sdk_config));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| error::AppError::Config(format!("Invalid address: {}", e)))?;

    let state = Arc::new(AppState {
        config,
        synthesizer: Arc::new(synthesizer),
        store: Arc::new(store),
    });

    let app = create_router(state);

    if on_lambda {
        tracing::info!("Running as Lambda function");
        return lambda_http::run(app).await;
    }

    tracing::info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
