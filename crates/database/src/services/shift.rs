use super::{require_text, validate_range};
use crate::{
    entities::shift,
    error::{ServiceError, ServiceResult},
};
use log::info;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, QueryOrder,
    prelude::DateTime,
};

#[derive(Debug, Clone)]
pub struct NewShift {
    pub employee: String,
    pub role: String,
    pub start: DateTime,
    pub end: DateTime,
}

#[derive(Debug, Clone, Default)]
pub struct ShiftChanges {
    pub employee: Option<String>,
    pub role: Option<String>,
    pub start: Option<DateTime>,
    pub end: Option<DateTime>,
}

pub struct ShiftService;

impl ShiftService {
    /// The schedule, latest start first
    pub async fn list(db: &DatabaseConnection) -> ServiceResult<Vec<shift::Model>> {
        Ok(shift::Entity::find()
            .order_by_desc(shift::Column::Start)
            .all(db)
            .await?)
    }

    pub async fn get(db: &DatabaseConnection, id: i32) -> ServiceResult<shift::Model> {
        shift::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("shift", id))
    }

    pub async fn create(db: &DatabaseConnection, new: NewShift) -> ServiceResult<shift::Model> {
        let employee = require_text("employee", new.employee)?;
        validate_range(new.start, new.end)?;

        let created = shift::ActiveModel {
            employee: Set(employee),
            role: Set(new.role.trim().to_owned()),
            start: Set(new.start),
            end: Set(new.end),
            ..Default::default()
        }
        .insert(db)
        .await?;

        info!("Scheduled shift {} for {}", created.id, created.employee);
        Ok(created)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        changes: ShiftChanges,
    ) -> ServiceResult<shift::Model> {
        let existing = Self::get(db, id).await?;
        validate_range(
            changes.start.unwrap_or(existing.start),
            changes.end.unwrap_or(existing.end),
        )?;

        let mut active: shift::ActiveModel = existing.into();
        if let Some(employee) = changes.employee {
            active.employee = Set(require_text("employee", employee)?);
        }
        if let Some(role) = changes.role {
            active.role = Set(role.trim().to_owned());
        }
        if let Some(start) = changes.start {
            active.start = Set(start);
        }
        if let Some(end) = changes.end {
            active.end = Set(end);
        }

        Ok(active.update(db).await?)
    }

    pub async fn delete(db: &DatabaseConnection, id: i32) -> ServiceResult<()> {
        let result = shift::Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::not_found("shift", id));
        }

        info!("Deleted shift {id}");
        Ok(())
    }
}
