use chrono::NaiveDateTime;
use database::{
    entities::reservation,
    services::reservation::{NewReservation, ReservationChanges},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReservationResponse {
    pub id: i32,
    pub customer: String,
    pub size: i32,
    pub at: NaiveDateTime,
    pub notes: Option<String>,
}

impl From<reservation::Model> for ReservationResponse {
    fn from(reservation: reservation::Model) -> Self {
        Self {
            id: reservation.id,
            customer: reservation.customer,
            size: reservation.size,
            at: reservation.at,
            notes: reservation.notes,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReservationRequest {
    pub customer: String,
    /// Party size, 2 when omitted
    pub size: Option<i32>,
    pub at: NaiveDateTime,
    pub notes: Option<String>,
}

impl From<CreateReservationRequest> for NewReservation {
    fn from(req: CreateReservationRequest) -> Self {
        Self {
            customer: req.customer,
            size: req.size,
            at: req.at,
            notes: req.notes,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateReservationRequest {
    pub customer: Option<String>,
    pub size: Option<i32>,
    pub at: Option<NaiveDateTime>,
    pub notes: Option<String>,
}

impl From<UpdateReservationRequest> for ReservationChanges {
    fn from(req: UpdateReservationRequest) -> Self {
        Self {
            customer: req.customer,
            size: req.size,
            at: req.at,
            notes: req.notes,
        }
    }
}
