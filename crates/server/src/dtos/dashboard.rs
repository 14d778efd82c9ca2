use database::services::dashboard::DashboardStats;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardResponse {
    pub shifts: u64,
    pub reservations: u64,
    pub reports: u64,
    pub hours: u64,
    pub deposits: u64,
    pub users: u64,
}

impl From<DashboardStats> for DashboardResponse {
    fn from(stats: DashboardStats) -> Self {
        Self {
            shifts: stats.shifts,
            reservations: stats.reservations,
            reports: stats.reports,
            hours: stats.hours,
            deposits: stats.deposits,
            users: stats.users,
        }
    }
}
