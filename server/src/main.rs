mod config;
mod error;
mod routes;
mod services;
mod state;

use error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env()?;
    let port = config.port;

    match &config.snapshot_path {
        Some(path) => tracing::info!(path = %path.display(), "serving topic-modeling snapshot"),
        None => tracing::warn!("SNAPSHOT_PATH not set, /api/topic_modeling disabled"),
    }
    tracing::info!(static_dir = %config.static_dir.display(), "serving static images");

    let state = state::AppState::new(config);
    let app = routes::leptos_app(state).map_err(ServerError::Leptos)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .map_err(|source| ServerError::Bind { port, source })?;

    tracing::info!(%port, "topicview listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
