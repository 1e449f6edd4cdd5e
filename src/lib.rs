use axum::{
    http::{header, HeaderValue},
    Router,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::config::settings::Settings;
use crate::services::llm::ChatProvider;

pub mod config;
pub mod modules;
pub mod services;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub llm: Arc<dyn ChatProvider>,
    pub settings: Arc<Settings>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(db: SqlitePool, llm: Arc<dyn ChatProvider>, settings: Settings) -> Self {
        Self {
            db,
            llm,
            settings: Arc::new(settings),
            http: reqwest::Client::new(),
        }
    }
}

/// Full application router: API modules, health check, frontend fallback and middleware.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(modules::chat::routes::routes())
        .merge(modules::leads::routes::routes())
        .merge(modules::health::routes::routes())
        .merge(modules::web::routes::routes(&state.settings))
        .method_not_allowed_fallback(modules::web::controller::method_not_allowed)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_XSS_PROTECTION,
            HeaderValue::from_static("1; mode=block"),
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
