use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    Json,
};
use validator::Validate;

use crate::modules::error::AppError;
use crate::modules::leads::{
    crud::LeadCrud,
    model::{Lead, NewLead},
    schema::{CreateLeadRequest, LeadCreatedResponse},
};
use crate::AppState;

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

fn authorize(headers: &HeaderMap, admin_token: Option<&str>) -> Result<(), AppError> {
    let Some(expected) = admin_token else {
        return Ok(());
    };

    let provided = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    match provided {
        Some(token) if constant_time_eq(token.as_bytes(), expected.as_bytes()) => Ok(()),
        _ => Err(AppError::Unauthorized),
    }
}

pub async fn create_lead(
    State(state): State<AppState>,
    payload: Result<Json<CreateLeadRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LeadCreatedResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let crud = LeadCrud::new(&state.db);
    let id = crud
        .create(NewLead::from_request(payload))
        .await
        .map_err(AppError::store("Failed to save lead"))?;

    tracing::info!(lead_id = id, "Lead saved");

    Ok((
        StatusCode::CREATED,
        Json(LeadCreatedResponse {
            success: true,
            message: "Thank you! We'll be in touch soon.".to_string(),
        }),
    ))
}

pub async fn list_leads(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Lead>>, AppError> {
    authorize(&headers, state.settings.admin_token.as_deref())?;

    let crud = LeadCrud::new(&state.db);
    let leads = crud
        .find_all()
        .await
        .map_err(AppError::store("Failed to fetch leads"))?;

    Ok(Json(leads))
}
