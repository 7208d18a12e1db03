use anyhow::Context;
use tracing_subscriber::EnvFilter;

use skillcrucial_server::{app, config, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up PORT, DATA_FILE, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = config::config();
    let state = AppState::from_config(config);

    if !state.static_dir.is_dir() {
        tracing::warn!(
            dir = %state.static_dir.display(),
            "static asset bundle not found, shell will render without assets"
        );
    }

    // The data file is created lazily by seeding, but its directory has to
    // be there for the first write to land.
    if let Some(parent) = config.data_file.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create data directory {}", parent.display()))?;
    }

    let app = app(state);

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Serving at http://localhost:{}", config.port);
    axum::serve(listener, app).await.context("server")?;

    Ok(())
}
