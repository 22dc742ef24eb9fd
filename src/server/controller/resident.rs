use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::resident::{CreateResidentDto, ResidentDto, UpdateResidentDto},
    server::{
        error::AppError,
        model::resident::{CreateResidentParam, Resident},
        service::resident::ResidentService,
        state::AppState,
    },
};

/// POST /api/user - Register a resident and their card code
///
/// # Returns
/// - `201 Created`: The resident
/// - `400 Bad Request`: Empty fields, or name or code already registered
pub async fn create_resident(
    State(state): State<AppState>,
    payload: Result<Json<CreateResidentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let resident = ResidentService::new(&state.db)
        .create(CreateResidentParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(resident.into_dto())))
}

/// GET /api/user - List residents ordered by name
pub async fn get_residents(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let residents: Vec<ResidentDto> = ResidentService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(Resident::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(residents)))
}

/// GET /api/user/{name} - Get a resident by name
pub async fn get_resident(
    State(state): State<AppState>,
    name: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(name) = name?;

    let resident = ResidentService::new(&state.db).get(&name).await?;

    Ok((StatusCode::OK, Json(resident.into_dto())))
}

/// PATCH /api/user/{name} - Assign a new card code
///
/// # Returns
/// - `200 OK`: The resident after the update
/// - `400 Bad Request`: Empty code or code already registered
/// - `404 Not Found`: No resident with that name
pub async fn update_resident(
    State(state): State<AppState>,
    name: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateResidentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(name) = name?;
    let Json(payload) = payload?;

    let resident = ResidentService::new(&state.db)
        .update_code(&name, payload.code)
        .await?;

    Ok((StatusCode::OK, Json(resident.into_dto())))
}

/// DELETE /api/user/{name} - Remove a resident from the directory
pub async fn delete_resident(
    State(state): State<AppState>,
    name: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(name) = name?;

    ResidentService::new(&state.db).delete(&name).await?;

    Ok(StatusCode::NO_CONTENT)
}
