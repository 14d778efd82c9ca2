use chrono::NaiveDateTime;
use database::{
    entities::shift,
    services::shift::{NewShift, ShiftChanges},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ShiftResponse {
    pub id: i32,
    pub employee: String,
    pub role: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl From<shift::Model> for ShiftResponse {
    fn from(shift: shift::Model) -> Self {
        Self {
            id: shift.id,
            employee: shift.employee,
            role: shift.role,
            start: shift.start,
            end: shift.end,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateShiftRequest {
    pub employee: String,
    /// Position worked, e.g. "Bar"
    #[serde(default)]
    pub role: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl From<CreateShiftRequest> for NewShift {
    fn from(req: CreateShiftRequest) -> Self {
        Self {
            employee: req.employee,
            role: req.role,
            start: req.start,
            end: req.end,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateShiftRequest {
    pub employee: Option<String>,
    pub role: Option<String>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl From<UpdateShiftRequest> for ShiftChanges {
    fn from(req: UpdateShiftRequest) -> Self {
        Self {
            employee: req.employee,
            role: req.role,
            start: req.start,
            end: req.end,
        }
    }
}
