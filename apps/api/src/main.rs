mod analysis;
mod config;
mod errors;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::github::GithubClient;
use crate::analysis::ontology::all_skills;
use crate::analysis::roles::JOB_ROLES;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting skill-match API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Loaded {} ontology keywords and {} job roles",
        all_skills().count(),
        JOB_ROLES.len()
    );

    // Initialize GitHub client
    let github = GithubClient::new(
        &config.github_api_base,
        Duration::from_secs(config.github_timeout_secs),
    )?;
    info!(
        "GitHub client initialized ({}, timeout {}s)",
        config.github_api_base, config.github_timeout_secs
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        github: Arc::new(github),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
