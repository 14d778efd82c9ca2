use chrono::NaiveDate;
use database::services::shift_report::{NewShiftReport, ReportWithLead, ShiftReportChanges};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ShiftReportResponse {
    pub id: i32,
    pub date: NaiveDate,
    pub lead_id: Option<i32>,
    /// Username of the author, absent once the account is gone
    pub lead: Option<String>,
    pub revenue: f64,
    pub issues: Option<String>,
    pub notes: Option<String>,
}

impl From<ReportWithLead> for ShiftReportResponse {
    fn from((report, lead): ReportWithLead) -> Self {
        Self {
            id: report.id,
            date: report.date,
            lead_id: report.lead_id,
            lead: lead.map(|user| user.username),
            revenue: report.revenue,
            issues: report.issues,
            notes: report.notes,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateShiftReportRequest {
    pub date: NaiveDate,
    pub revenue: Option<f64>,
    pub issues: Option<String>,
    pub notes: Option<String>,
}

impl From<CreateShiftReportRequest> for NewShiftReport {
    fn from(req: CreateShiftReportRequest) -> Self {
        Self {
            date: req.date,
            revenue: req.revenue,
            issues: req.issues,
            notes: req.notes,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateShiftReportRequest {
    pub date: Option<NaiveDate>,
    pub revenue: Option<f64>,
    pub issues: Option<String>,
    pub notes: Option<String>,
}

impl From<UpdateShiftReportRequest> for ShiftReportChanges {
    fn from(req: UpdateShiftReportRequest) -> Self {
        Self {
            date: req.date,
            revenue: req.revenue,
            issues: req.issues,
            notes: req.notes,
        }
    }
}
