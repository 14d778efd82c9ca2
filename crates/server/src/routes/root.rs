use crate::{
    auth::CurrentUser, dtos::dashboard::DashboardResponse, error::AppResult, state::AppState,
};
use axum::{Json, extract::State};
use database::services::dashboard::DashboardService;
use models::access::{Feature, Operation};

/// Record counts for the landing page
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Dashboard counts", body = DashboardResponse),
        (status = 401, description = "Unauthorized - missing or invalid token")
    ),
    security(("jwt" = [])),
    tag = "Dashboard"
)]
pub async fn dashboard(
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<Json<DashboardResponse>> {
    user.require(Feature::Dashboard, Operation::View)?;

    let stats = DashboardService::stats(&state.db).await?;
    Ok(Json(stats.into()))
}
