use axum::{
    routing::{get, post},
    Router,
};

use crate::modules::leads::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/leads", post(controller::create_lead))
        .route("/api/leads", get(controller::list_leads))
}
