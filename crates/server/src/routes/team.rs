use crate::{
    auth::CurrentUser, dtos::user::UserResponse, error::AppResult, state::AppState,
};
use axum::{Json, extract::State};
use database::services::user::UserService;
use models::access::{Feature, Operation};

/// Team directory, grouped by role
#[utoipa::path(
    get,
    path = "/team",
    responses(
        (status = 200, description = "Everybody on the team", body = Vec<UserResponse>),
        (status = 401, description = "Unauthorized - missing or invalid token")
    ),
    security(("jwt" = [])),
    tag = "Team"
)]
pub async fn team(
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<UserResponse>>> {
    user.require(Feature::Team, Operation::View)?;

    let people = UserService::team(&state.db).await?;
    Ok(Json(people.into_iter().map(UserResponse::from).collect()))
}
