use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::charge_intent::{ChargeIntentDto, ResolveChargeIntentDto},
    server::{
        error::AppError,
        model::charge_intent::{ChargeIntent, ChargeStatus},
        service::reconcile::ReconcileService,
        state::AppState,
    },
};

#[derive(Debug, Deserialize)]
pub struct ChargeIntentQuery {
    pub status: Option<String>,
}

/// GET /api/charge-intent - List charge intents, newest first
///
/// # Query Parameters
/// - `status`: Optional filter, e.g. `needs_review`
///
/// # Returns
/// - `200 OK`: JSON array of ChargeIntentDto
/// - `400 Bad Request`: Unknown status
pub async fn get_charge_intents(
    State(state): State<AppState>,
    query: Result<Query<ChargeIntentQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;

    let status = query
        .status
        .map(|s| s.parse::<ChargeStatus>())
        .transpose()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let intents: Vec<ChargeIntentDto> = ReconcileService::new(&state.db)
        .list(status)
        .await?
        .into_iter()
        .map(ChargeIntent::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(intents)))
}

/// POST /api/charge-intent/{id}/resolve - Close an intent settled by an operator
///
/// The body is optional; `{"note": "..."}` stores a note on the intent.
///
/// # Returns
/// - `200 OK`: The resolved intent
/// - `400 Bad Request`: The intent is not `debited` or `needs_review`
/// - `404 Not Found`: No intent with that id
pub async fn resolve_charge_intent(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Option<Json<ResolveChargeIntentDto>>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let note = payload.and_then(|Json(dto)| dto.note);

    let intent = ReconcileService::new(&state.db).resolve(id, note).await?;

    Ok((StatusCode::OK, Json(intent.into_dto())))
}
