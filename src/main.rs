//! Cyber Kittens API server

use anyhow::{Context, Result};
use clap::Parser;
use cyber_kittens::{auth::TokenService, config, db, router, AppState, Config};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    config::load_env();
    init_tracing();

    let config = Config::parse();

    info!("🐱 Cyber Kittens starting");

    let conn = db::open(&config.database_path)?;
    let tokens = TokenService::new(config.signing_secret.clone(), config.token_ttl_hours);
    let state = AppState::new(conn, tokens, config.bcrypt_cost);

    info!(
        "🔐 Authentication initialized (token ttl {}h, bcrypt cost {})",
        config.token_ttl_hours, config.bcrypt_cost
    );

    let app = router(state);

    let listener = TcpListener::bind(&config.addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.addr))?;
    info!("🎯 API server listening on {}", config.addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cyber_kittens=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
