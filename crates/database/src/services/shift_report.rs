use super::validate_amount;
use crate::{
    entities::{shift_report, user},
    error::{ServiceError, ServiceResult},
};
use log::info;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, QueryOrder,
    prelude::Date,
};

#[derive(Debug, Clone)]
pub struct NewShiftReport {
    pub date: Date,
    pub revenue: Option<f64>,
    pub issues: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ShiftReportChanges {
    pub date: Option<Date>,
    pub revenue: Option<f64>,
    pub issues: Option<String>,
    pub notes: Option<String>,
}

/// A report together with the account that filed it, if it still exists
pub type ReportWithLead = (shift_report::Model, Option<user::Model>);

pub struct ShiftReportService;

impl ShiftReportService {
    /// All reports, most recent day first
    pub async fn list(db: &DatabaseConnection) -> ServiceResult<Vec<ReportWithLead>> {
        Ok(shift_report::Entity::find()
            .find_also_related(user::Entity)
            .order_by_desc(shift_report::Column::Date)
            .order_by_desc(shift_report::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn get(db: &DatabaseConnection, id: i32) -> ServiceResult<ReportWithLead> {
        shift_report::Entity::find_by_id(id)
            .find_also_related(user::Entity)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("shift report", id))
    }

    /// Files a report authored by `lead_id`
    pub async fn create(
        db: &DatabaseConnection,
        lead_id: i32,
        new: NewShiftReport,
    ) -> ServiceResult<shift_report::Model> {
        let revenue = new.revenue.unwrap_or(0.0);
        validate_amount("revenue", revenue)?;

        let created = shift_report::ActiveModel {
            date: Set(new.date),
            lead_id: Set(Some(lead_id)),
            revenue: Set(revenue),
            issues: Set(new.issues),
            notes: Set(new.notes),
            ..Default::default()
        }
        .insert(db)
        .await?;

        info!(
            "User {lead_id} filed shift report {} for {}",
            created.id, created.date
        );
        Ok(created)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        changes: ShiftReportChanges,
    ) -> ServiceResult<shift_report::Model> {
        let (existing, _) = Self::get(db, id).await?;
        let mut active: shift_report::ActiveModel = existing.into();

        if let Some(date) = changes.date {
            active.date = Set(date);
        }
        if let Some(revenue) = changes.revenue {
            validate_amount("revenue", revenue)?;
            active.revenue = Set(revenue);
        }
        if let Some(issues) = changes.issues {
            active.issues = Set(Some(issues));
        }
        if let Some(notes) = changes.notes {
            active.notes = Set(Some(notes));
        }

        Ok(active.update(db).await?)
    }

    pub async fn delete(db: &DatabaseConnection, id: i32) -> ServiceResult<()> {
        let result = shift_report::Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::not_found("shift report", id));
        }

        info!("Deleted shift report {id}");
        Ok(())
    }
}
