use crate::{
    entities::{clothing_deposit, reservation, shift, shift_report, time_entry, user},
    error::ServiceResult,
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde::Serialize;

/// Record counts shown on the landing page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub shifts: u64,
    pub reservations: u64,
    pub reports: u64,
    pub hours: u64,
    pub deposits: u64,
    pub users: u64,
}

pub struct DashboardService;

impl DashboardService {
    pub async fn stats(db: &DatabaseConnection) -> ServiceResult<DashboardStats> {
        let (shifts, reservations, reports, hours, deposits, users) = futures::try_join!(
            shift::Entity::find().count(db),
            reservation::Entity::find().count(db),
            shift_report::Entity::find().count(db),
            time_entry::Entity::find().count(db),
            clothing_deposit::Entity::find().count(db),
            user::Entity::find().count(db),
        )?;

        Ok(DashboardStats {
            shifts,
            reservations,
            reports,
            hours,
            deposits,
            users,
        })
    }
}
