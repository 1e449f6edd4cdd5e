use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use receptionist::config::{database, settings::Settings};
use receptionist::services::llm::GeminiClient;
use receptionist::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("receptionist=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    let settings = Settings::from_env();

    if settings.gemini_api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; chat requests will fail");
    }
    if settings.admin_token.is_none() {
        tracing::warn!("ADMIN_TOKEN is not set; GET /api/leads is unauthenticated");
    }

    let db = database::connect(&settings.database_url)
        .await
        .with_context(|| format!("failed to open lead store at {}", settings.database_url))?;

    let llm = GeminiClient::new(&settings).context("failed to build Gemini client")?;
    tracing::info!(model = llm.model(), "Gemini client ready");

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    let mode = settings.mode;
    let state = AppState::new(db, Arc::new(llm), settings);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!(%addr, mode = mode.as_str(), "Receptionist listening on http://localhost:{}", addr.port());

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
