use crate::{
    auth::CurrentUser,
    dtos::shift::{CreateShiftRequest, ShiftResponse, UpdateShiftRequest},
    error::AppResult,
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::shift::ShiftService;
use models::access::{Feature, Operation};

/// The schedule, latest shift first
#[utoipa::path(
    get,
    path = "/shifts",
    responses(
        (status = 200, description = "All shifts", body = Vec<ShiftResponse>),
        (status = 401, description = "Unauthorized - missing or invalid token")
    ),
    security(("jwt" = [])),
    tag = "Shifts"
)]
pub async fn list_shifts(
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<ShiftResponse>>> {
    user.require(Feature::Shifts, Operation::View)?;

    let shifts = ShiftService::list(&state.db).await?;
    Ok(Json(shifts.into_iter().map(ShiftResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/shifts/{id}",
    params(("id" = i32, Path, description = "Shift ID")),
    responses(
        (status = 200, description = "Shift found", body = ShiftResponse),
        (status = 404, description = "Shift not found")
    ),
    security(("jwt" = [])),
    tag = "Shifts"
)]
pub async fn get_shift(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ShiftResponse>> {
    user.require(Feature::Shifts, Operation::View)?;

    let shift = ShiftService::get(&state.db, id).await?;
    Ok(Json(shift.into()))
}

/// Schedule a shift (shift leads and managers)
#[utoipa::path(
    post,
    path = "/shifts",
    request_body = CreateShiftRequest,
    responses(
        (status = 201, description = "Shift created", body = ShiftResponse),
        (status = 400, description = "Invalid shift"),
        (status = 403, description = "Not allowed for this role")
    ),
    security(("jwt" = [])),
    tag = "Shifts"
)]
pub async fn create_shift(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<CreateShiftRequest>,
) -> AppResult<(StatusCode, Json<ShiftResponse>)> {
    user.require(Feature::Shifts, Operation::Create)?;

    let shift = ShiftService::create(&state.db, req.into()).await?;
    Ok((StatusCode::CREATED, Json(shift.into())))
}

#[utoipa::path(
    put,
    path = "/shifts/{id}",
    params(("id" = i32, Path, description = "Shift ID")),
    request_body = UpdateShiftRequest,
    responses(
        (status = 200, description = "Shift updated", body = ShiftResponse),
        (status = 400, description = "Invalid shift"),
        (status = 403, description = "Not allowed for this role"),
        (status = 404, description = "Shift not found")
    ),
    security(("jwt" = [])),
    tag = "Shifts"
)]
pub async fn update_shift(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
    Json(req): Json<UpdateShiftRequest>,
) -> AppResult<Json<ShiftResponse>> {
    user.require(Feature::Shifts, Operation::Update)?;

    let shift = ShiftService::update(&state.db, id, req.into()).await?;
    Ok(Json(shift.into()))
}

#[utoipa::path(
    delete,
    path = "/shifts/{id}",
    params(("id" = i32, Path, description = "Shift ID")),
    responses(
        (status = 204, description = "Shift deleted"),
        (status = 403, description = "Not allowed for this role"),
        (status = 404, description = "Shift not found")
    ),
    security(("jwt" = [])),
    tag = "Shifts"
)]
pub async fn delete_shift(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    user.require(Feature::Shifts, Operation::Delete)?;

    ShiftService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
