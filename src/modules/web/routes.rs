use axum::{routing::any, Router};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

use crate::config::settings::{RunMode, Settings};
use crate::modules::web::controller;
use crate::AppState;

pub fn routes(settings: &Settings) -> Router<AppState> {
    let router = Router::new()
        .route("/api", any(controller::not_found))
        .route("/api/{*rest}", any(controller::not_found));

    match settings.mode {
        RunMode::Development => {
            tracing::info!(url = %settings.dev_server_url, "Proxying frontend to dev server");
            router.fallback(controller::proxy)
        }
        RunMode::Production if Path::new(&settings.static_dir).exists() => {
            let index = Path::new(&settings.static_dir).join("index.html");
            let serve_dir = ServeDir::new(&settings.static_dir).fallback(ServeFile::new(index));
            tracing::info!(path = %settings.static_dir, "Serving static frontend");
            router.fallback_service(serve_dir)
        }
        RunMode::Production => {
            tracing::warn!(path = %settings.static_dir, "Static directory missing, serving API only");
            router.fallback(controller::not_found)
        }
    }
}
