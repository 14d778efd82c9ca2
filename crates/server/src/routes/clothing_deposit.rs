use crate::{
    auth::CurrentUser,
    dtos::clothing_deposit::{
        ClothingDepositResponse, CreateClothingDepositRequest, UpdateClothingDepositRequest,
    },
    error::AppResult,
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::clothing_deposit::ClothingDepositService;
use models::access::{Feature, Operation};

/// Clothing deposits (Kleiderpfand), most recent first
#[utoipa::path(
    get,
    path = "/deposit",
    responses(
        (status = 200, description = "All deposits", body = Vec<ClothingDepositResponse>),
        (status = 403, description = "Managers only")
    ),
    security(("jwt" = [])),
    tag = "Clothing deposit"
)]
pub async fn list_deposits(
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<ClothingDepositResponse>>> {
    user.require(Feature::ClothingDeposit, Operation::View)?;

    let deposits = ClothingDepositService::list(&state.db).await?;
    Ok(Json(
        deposits
            .into_iter()
            .map(ClothingDepositResponse::from)
            .collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/deposit/{id}",
    params(("id" = i32, Path, description = "Deposit ID")),
    responses(
        (status = 200, description = "Deposit found", body = ClothingDepositResponse),
        (status = 403, description = "Not allowed for this role"),
        (status = 404, description = "Deposit not found")
    ),
    security(("jwt" = [])),
    tag = "Clothing deposit"
)]
pub async fn get_deposit(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ClothingDepositResponse>> {
    user.require(Feature::ClothingDeposit, Operation::View)?;

    let deposit = ClothingDepositService::get_with_user(&state.db, id).await?;
    Ok(Json(deposit.into()))
}

#[utoipa::path(
    post,
    path = "/deposit",
    request_body = CreateClothingDepositRequest,
    responses(
        (status = 201, description = "Deposit recorded", body = ClothingDepositResponse),
        (status = 400, description = "Invalid deposit or unknown user"),
        (status = 403, description = "Managers only")
    ),
    security(("jwt" = [])),
    tag = "Clothing deposit"
)]
pub async fn create_deposit(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<CreateClothingDepositRequest>,
) -> AppResult<(StatusCode, Json<ClothingDepositResponse>)> {
    user.require(Feature::ClothingDeposit, Operation::Create)?;

    let deposit = ClothingDepositService::create(&state.db, req.into()).await?;
    let recorded = ClothingDepositService::get_with_user(&state.db, deposit.id).await?;
    Ok((StatusCode::CREATED, Json(recorded.into())))
}

#[utoipa::path(
    put,
    path = "/deposit/{id}",
    params(("id" = i32, Path, description = "Deposit ID")),
    request_body = UpdateClothingDepositRequest,
    responses(
        (status = 200, description = "Deposit updated", body = ClothingDepositResponse),
        (status = 400, description = "Invalid deposit"),
        (status = 403, description = "Managers only"),
        (status = 404, description = "Deposit not found")
    ),
    security(("jwt" = [])),
    tag = "Clothing deposit"
)]
pub async fn update_deposit(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
    Json(req): Json<UpdateClothingDepositRequest>,
) -> AppResult<Json<ClothingDepositResponse>> {
    user.require(Feature::ClothingDeposit, Operation::Update)?;

    ClothingDepositService::update(&state.db, id, req.into()).await?;
    let updated = ClothingDepositService::get_with_user(&state.db, id).await?;
    Ok(Json(updated.into()))
}

/// Flip the returned flag of a deposit
#[utoipa::path(
    post,
    path = "/deposit/{id}/toggle",
    params(("id" = i32, Path, description = "Deposit ID")),
    responses(
        (status = 200, description = "Returned flag flipped", body = ClothingDepositResponse),
        (status = 403, description = "Managers only"),
        (status = 404, description = "Deposit not found")
    ),
    security(("jwt" = [])),
    tag = "Clothing deposit"
)]
pub async fn toggle_deposit(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ClothingDepositResponse>> {
    user.require(Feature::ClothingDeposit, Operation::Update)?;

    ClothingDepositService::toggle_returned(&state.db, id).await?;
    let toggled = ClothingDepositService::get_with_user(&state.db, id).await?;
    Ok(Json(toggled.into()))
}

#[utoipa::path(
    delete,
    path = "/deposit/{id}",
    params(("id" = i32, Path, description = "Deposit ID")),
    responses(
        (status = 204, description = "Deposit deleted"),
        (status = 403, description = "Managers only"),
        (status = 404, description = "Deposit not found")
    ),
    security(("jwt" = [])),
    tag = "Clothing deposit"
)]
pub async fn delete_deposit(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    user.require(Feature::ClothingDeposit, Operation::Delete)?;

    ClothingDepositService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
