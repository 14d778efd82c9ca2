use crate::{
    auth::CurrentUser,
    dtos::reservation::{CreateReservationRequest, ReservationResponse, UpdateReservationRequest},
    error::AppResult,
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::reservation::ReservationService;
use models::access::{Feature, Operation};

/// All bookings, latest first
#[utoipa::path(
    get,
    path = "/reservations",
    responses(
        (status = 200, description = "All reservations", body = Vec<ReservationResponse>),
        (status = 403, description = "Not allowed for this role")
    ),
    security(("jwt" = [])),
    tag = "Reservations"
)]
pub async fn list_reservations(
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<ReservationResponse>>> {
    user.require(Feature::Reservations, Operation::View)?;

    let reservations = ReservationService::list(&state.db).await?;
    Ok(Json(
        reservations
            .into_iter()
            .map(ReservationResponse::from)
            .collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/reservations/{id}",
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation found", body = ReservationResponse),
        (status = 403, description = "Not allowed for this role"),
        (status = 404, description = "Reservation not found")
    ),
    security(("jwt" = [])),
    tag = "Reservations"
)]
pub async fn get_reservation(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ReservationResponse>> {
    user.require(Feature::Reservations, Operation::View)?;

    let reservation = ReservationService::get(&state.db, id).await?;
    Ok(Json(reservation.into()))
}

#[utoipa::path(
    post,
    path = "/reservations",
    request_body = CreateReservationRequest,
    responses(
        (status = 201, description = "Reservation created", body = ReservationResponse),
        (status = 400, description = "Invalid reservation"),
        (status = 403, description = "Not allowed for this role")
    ),
    security(("jwt" = [])),
    tag = "Reservations"
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<CreateReservationRequest>,
) -> AppResult<(StatusCode, Json<ReservationResponse>)> {
    user.require(Feature::Reservations, Operation::Create)?;

    let reservation = ReservationService::create(&state.db, req.into()).await?;
    Ok((StatusCode::CREATED, Json(reservation.into())))
}

#[utoipa::path(
    put,
    path = "/reservations/{id}",
    params(("id" = i32, Path, description = "Reservation ID")),
    request_body = UpdateReservationRequest,
    responses(
        (status = 200, description = "Reservation updated", body = ReservationResponse),
        (status = 400, description = "Invalid reservation"),
        (status = 403, description = "Not allowed for this role"),
        (status = 404, description = "Reservation not found")
    ),
    security(("jwt" = [])),
    tag = "Reservations"
)]
pub async fn update_reservation(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
    Json(req): Json<UpdateReservationRequest>,
) -> AppResult<Json<ReservationResponse>> {
    user.require(Feature::Reservations, Operation::Update)?;

    let reservation = ReservationService::update(&state.db, id, req.into()).await?;
    Ok(Json(reservation.into()))
}

#[utoipa::path(
    delete,
    path = "/reservations/{id}",
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 204, description = "Reservation deleted"),
        (status = 403, description = "Not allowed for this role"),
        (status = 404, description = "Reservation not found")
    ),
    security(("jwt" = [])),
    tag = "Reservations"
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    user.require(Feature::Reservations, Operation::Delete)?;

    ReservationService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
