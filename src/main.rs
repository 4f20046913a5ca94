mod config;
mod routes;

use config::{ConfigError, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), ConfigError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let app = routes::app()?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .map_err(ConfigError::Bind)?;

    tracing::info!(port = config.port, "flashmart listening");
    axum::serve(listener, app).await.map_err(ConfigError::Serve)
}
