use crate::{
    auth::CurrentUser,
    dtos::time_entry::{CreateTimeEntryRequest, TimeEntryResponse, UpdateTimeEntryRequest},
    error::AppResult,
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::time_entry::TimeEntryService;
use models::access::{Feature, Operation, Scope};

/// Worked hours. Waiters only see their own entries.
#[utoipa::path(
    get,
    path = "/hours",
    responses(
        (status = 200, description = "Visible time entries, latest first", body = Vec<TimeEntryResponse>),
        (status = 401, description = "Unauthorized - missing or invalid token")
    ),
    security(("jwt" = [])),
    tag = "Time entries"
)]
pub async fn list_entries(
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<TimeEntryResponse>>> {
    let owner = match user.require(Feature::TimeEntries, Operation::View)? {
        Scope::Own => Some(user.id),
        Scope::All => None,
    };

    let entries = TimeEntryService::list(&state.db, owner).await?;
    Ok(Json(entries.into_iter().map(TimeEntryResponse::from).collect()))
}

/// A single entry; waiters only reach their own
#[utoipa::path(
    get,
    path = "/hours/{id}",
    params(("id" = i32, Path, description = "Time entry ID")),
    responses(
        (status = 200, description = "Entry found", body = TimeEntryResponse),
        (status = 403, description = "Entry belongs to someone else"),
        (status = 404, description = "Entry not found")
    ),
    security(("jwt" = [])),
    tag = "Time entries"
)]
pub async fn get_entry(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
) -> AppResult<Json<TimeEntryResponse>> {
    let entry = TimeEntryService::get_with_user(&state.db, id).await?;
    user.require_owner(Feature::TimeEntries, Operation::View, entry.0.user_id)?;

    Ok(Json(entry.into()))
}

/// Record worked hours; waiters may only record their own
#[utoipa::path(
    post,
    path = "/hours",
    request_body = CreateTimeEntryRequest,
    responses(
        (status = 201, description = "Entry recorded", body = TimeEntryResponse),
        (status = 400, description = "Invalid time range or unknown user"),
        (status = 403, description = "Entry belongs to someone else")
    ),
    security(("jwt" = [])),
    tag = "Time entries"
)]
pub async fn create_entry(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<CreateTimeEntryRequest>,
) -> AppResult<(StatusCode, Json<TimeEntryResponse>)> {
    let new = req.into_new(user.id);
    user.require_owner(Feature::TimeEntries, Operation::Create, new.user_id)?;

    let entry = TimeEntryService::create(&state.db, new).await?;
    let recorded = TimeEntryService::get_with_user(&state.db, entry.id).await?;

    Ok((StatusCode::CREATED, Json(recorded.into())))
}

/// Correct an entry (shift leads and managers)
#[utoipa::path(
    put,
    path = "/hours/{id}",
    params(("id" = i32, Path, description = "Time entry ID")),
    request_body = UpdateTimeEntryRequest,
    responses(
        (status = 200, description = "Entry updated", body = TimeEntryResponse),
        (status = 400, description = "Invalid time range or unknown user"),
        (status = 403, description = "Not allowed for this role"),
        (status = 404, description = "Entry not found")
    ),
    security(("jwt" = [])),
    tag = "Time entries"
)]
pub async fn update_entry(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
    Json(req): Json<UpdateTimeEntryRequest>,
) -> AppResult<Json<TimeEntryResponse>> {
    user.require(Feature::TimeEntries, Operation::Update)?;

    let existing = TimeEntryService::get(&state.db, id).await?;
    user.require_owner(Feature::TimeEntries, Operation::Update, existing.user_id)?;

    TimeEntryService::update(&state.db, id, req.into()).await?;
    let updated = TimeEntryService::get_with_user(&state.db, id).await?;
    Ok(Json(updated.into()))
}

/// Remove an entry; waiters may only remove their own
#[utoipa::path(
    delete,
    path = "/hours/{id}",
    params(("id" = i32, Path, description = "Time entry ID")),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 403, description = "Entry belongs to someone else"),
        (status = 404, description = "Entry not found")
    ),
    security(("jwt" = [])),
    tag = "Time entries"
)]
pub async fn delete_entry(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    user.require(Feature::TimeEntries, Operation::Delete)?;

    let entry = TimeEntryService::get(&state.db, id).await?;
    user.require_owner(Feature::TimeEntries, Operation::Delete, entry.user_id)?;

    TimeEntryService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
