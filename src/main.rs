//! staffdesk — minimal employee directory HTTP service
//!
//! JSON CRUD over a single `employee` table in PostgreSQL, plus a joined
//! read against `department`. One statement per request, no sessions, no
//! auth; meant for local development.

mod api;
mod config;
mod db;
mod error;
mod state;

use config::Config;
use state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "staffdesk=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env();

    // The service is nothing without its database: a failed connectivity
    // check here aborts startup.
    let state = AppState::new(&config).await?;

    let app = api::create_router(state);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("staffdesk listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
