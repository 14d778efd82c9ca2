use crate::{
    auth::CurrentUser,
    dtos::shift_report::{
        CreateShiftReportRequest, ShiftReportResponse, UpdateShiftReportRequest,
    },
    error::AppResult,
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::shift_report::ShiftReportService;
use models::access::{Feature, Operation};

/// All shift reports, most recent day first
#[utoipa::path(
    get,
    path = "/reports",
    responses(
        (status = 200, description = "All shift reports", body = Vec<ShiftReportResponse>),
        (status = 403, description = "Not allowed for this role")
    ),
    security(("jwt" = [])),
    tag = "Shift reports"
)]
pub async fn list_reports(
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<ShiftReportResponse>>> {
    user.require(Feature::ShiftReports, Operation::View)?;

    let reports = ShiftReportService::list(&state.db).await?;
    Ok(Json(
        reports.into_iter().map(ShiftReportResponse::from).collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/reports/{id}",
    params(("id" = i32, Path, description = "Report ID")),
    responses(
        (status = 200, description = "Report found", body = ShiftReportResponse),
        (status = 403, description = "Not allowed for this role"),
        (status = 404, description = "Report not found")
    ),
    security(("jwt" = [])),
    tag = "Shift reports"
)]
pub async fn get_report(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ShiftReportResponse>> {
    user.require(Feature::ShiftReports, Operation::View)?;

    let report = ShiftReportService::get(&state.db, id).await?;
    Ok(Json(report.into()))
}

/// File a report; the caller is recorded as the lead
#[utoipa::path(
    post,
    path = "/reports",
    request_body = CreateShiftReportRequest,
    responses(
        (status = 201, description = "Report filed", body = ShiftReportResponse),
        (status = 400, description = "Invalid report"),
        (status = 403, description = "Not allowed for this role")
    ),
    security(("jwt" = [])),
    tag = "Shift reports"
)]
pub async fn create_report(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<CreateShiftReportRequest>,
) -> AppResult<(StatusCode, Json<ShiftReportResponse>)> {
    user.require(Feature::ShiftReports, Operation::Create)?;

    let report = ShiftReportService::create(&state.db, user.id, req.into()).await?;
    let filed = ShiftReportService::get(&state.db, report.id).await?;
    Ok((StatusCode::CREATED, Json(filed.into())))
}

#[utoipa::path(
    put,
    path = "/reports/{id}",
    params(("id" = i32, Path, description = "Shift report ID")),
    request_body = UpdateShiftReportRequest,
    responses(
        (status = 200, description = "Report updated", body = ShiftReportResponse),
        (status = 400, description = "Invalid report"),
        (status = 403, description = "Not allowed for this role"),
        (status = 404, description = "Report not found")
    ),
    security(("jwt" = [])),
    tag = "Shift reports"
)]
pub async fn update_report(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
    Json(req): Json<UpdateShiftReportRequest>,
) -> AppResult<Json<ShiftReportResponse>> {
    user.require(Feature::ShiftReports, Operation::Update)?;

    ShiftReportService::update(&state.db, id, req.into()).await?;
    let updated = ShiftReportService::get(&state.db, id).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete,
    path = "/reports/{id}",
    params(("id" = i32, Path, description = "Shift report ID")),
    responses(
        (status = 204, description = "Report deleted"),
        (status = 403, description = "Not allowed for this role"),
        (status = 404, description = "Report not found")
    ),
    security(("jwt" = [])),
    tag = "Shift reports"
)]
pub async fn delete_report(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    user.require(Feature::ShiftReports, Operation::Delete)?;

    ShiftReportService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
