use anyhow::{Context, Result};
use regform_server::{app, AppState, Config};
use tower_livereload::LiveReloadLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load_default()
        .unwrap_or_else(|e| {
            warn!("Failed to load config: {:#}, using defaults", e);
            Config::default()
        })
        .with_env(|key| std::env::var(key).ok());

    info!(
        host = %config.server.host,
        port = config.server.port,
        handoff_capacity = config.handoff.capacity,
        "regform starting"
    );

    let router = app(AppState::new(&config));
    let router = if config.dev.hot_reload {
        info!("Hot reload: enabled");
        router.layer(LiveReloadLayer::new())
    } else {
        router
    };

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, router).await.context("Server error")?;
    Ok(())
}
