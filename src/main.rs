use std::sync::Arc;

use anyhow::Context;

use post_gateway::auth::ApiKey;
use post_gateway::config::AppConfig;
use post_gateway::routes::{app, AppState};
use post_gateway::store::PgPostStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up API_SECRET_KEY and DATABASE_URL
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    let api_key = ApiKey::new(config.api_key.clone()).context("invalid configuration")?;

    let store = PgPostStore::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;
    store
        .ensure_schema()
        .await
        .context("failed to prepare posts table")?;

    let state = AppState::new(Arc::new(store), api_key);
    let app = app(state);

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("post-gateway listening on http://{}", bind_addr);

    axum::serve(listener, app).await.context("server")?;
    Ok(())
}
