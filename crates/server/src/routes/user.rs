use crate::{
    auth::CurrentUser,
    dtos::user::{CreateUserRequest, UpdateUserRequest, UserResponse},
    error::AppResult,
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::user::UserService;
use models::access::{Feature, Operation};

/// All accounts, ordered by username
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All accounts", body = Vec<UserResponse>),
        (status = 403, description = "Managers only")
    ),
    security(("jwt" = [])),
    tag = "Users"
)]
pub async fn list_users(
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<UserResponse>>> {
    user.require(Feature::UserManagement, Operation::View)?;

    let users = UserService::list(&state.db).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Account found", body = UserResponse),
        (status = 403, description = "Managers only"),
        (status = 404, description = "User not found")
    ),
    security(("jwt" = [])),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
) -> AppResult<Json<UserResponse>> {
    user.require(Feature::UserManagement, Operation::View)?;

    let account = UserService::get(&state.db, id).await?;
    Ok(Json(account.into()))
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Account created", body = UserResponse),
        (status = 400, description = "Invalid username or password"),
        (status = 403, description = "Managers only"),
        (status = 409, description = "Username already taken")
    ),
    security(("jwt" = [])),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    user.require(Feature::UserManagement, Operation::Create)?;

    let created = UserService::create(&state.db, req.into()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Change name, role or password of an account
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Account updated", body = UserResponse),
        (status = 400, description = "Invalid password"),
        (status = 403, description = "Managers only"),
        (status = 404, description = "User not found")
    ),
    security(("jwt" = [])),
    tag = "Users"
)]
pub async fn update_user(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
    Json(req): Json<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    user.require(Feature::UserManagement, Operation::Update)?;

    let updated = UserService::update(&state.db, id, req.into()).await?;
    Ok(Json(updated.into()))
}

/// Delete an account; managers cannot delete themselves
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 403, description = "Managers only"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Cannot delete your own account")
    ),
    security(("jwt" = [])),
    tag = "Users"
)]
pub async fn delete_user(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    user.require(Feature::UserManagement, Operation::Delete)?;

    UserService::delete(&state.db, id, user.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
