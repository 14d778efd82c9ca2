use super::validate_range;
use crate::{
    entities::{time_entry, user},
    error::{ServiceError, ServiceResult},
};
use log::info;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, prelude::DateTime,
};

#[derive(Debug, Clone)]
pub struct NewTimeEntry {
    pub user_id: i32,
    pub start: DateTime,
    pub end: DateTime,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TimeEntryChanges {
    pub user_id: Option<i32>,
    pub start: Option<DateTime>,
    pub end: Option<DateTime>,
    pub note: Option<String>,
}

pub type EntryWithUser = (time_entry::Model, Option<user::Model>);

pub struct TimeEntryService;

impl TimeEntryService {
    /// Worked hours, latest first. `owner` restricts the list to one user.
    pub async fn list(
        db: &DatabaseConnection,
        owner: Option<i32>,
    ) -> ServiceResult<Vec<EntryWithUser>> {
        let mut query = time_entry::Entity::find().find_also_related(user::Entity);

        if let Some(user_id) = owner {
            query = query.filter(time_entry::Column::UserId.eq(user_id));
        }

        Ok(query
            .order_by_desc(time_entry::Column::Start)
            .all(db)
            .await?)
    }

    pub async fn get(db: &DatabaseConnection, id: i32) -> ServiceResult<time_entry::Model> {
        time_entry::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("time entry", id))
    }

    pub async fn get_with_user(db: &DatabaseConnection, id: i32) -> ServiceResult<EntryWithUser> {
        time_entry::Entity::find_by_id(id)
            .find_also_related(user::Entity)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("time entry", id))
    }

    pub async fn create(
        db: &DatabaseConnection,
        new: NewTimeEntry,
    ) -> ServiceResult<time_entry::Model> {
        validate_range(new.start, new.end)?;
        ensure_user_exists(db, new.user_id).await?;

        let created = time_entry::ActiveModel {
            user_id: Set(new.user_id),
            start: Set(new.start),
            end: Set(new.end),
            note: Set(new.note),
            ..Default::default()
        }
        .insert(db)
        .await?;

        info!(
            "Recorded time entry {} for user {}: {} - {}",
            created.id, created.user_id, created.start, created.end
        );
        Ok(created)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        changes: TimeEntryChanges,
    ) -> ServiceResult<time_entry::Model> {
        let existing = Self::get(db, id).await?;
        validate_range(
            changes.start.unwrap_or(existing.start),
            changes.end.unwrap_or(existing.end),
        )?;

        let mut active: time_entry::ActiveModel = existing.into();
        if let Some(user_id) = changes.user_id {
            ensure_user_exists(db, user_id).await?;
            active.user_id = Set(user_id);
        }
        if let Some(start) = changes.start {
            active.start = Set(start);
        }
        if let Some(end) = changes.end {
            active.end = Set(end);
        }
        if let Some(note) = changes.note {
            active.note = Set(Some(note));
        }

        Ok(active.update(db).await?)
    }

    pub async fn delete(db: &DatabaseConnection, id: i32) -> ServiceResult<()> {
        let result = time_entry::Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::not_found("time entry", id));
        }

        info!("Deleted time entry {id}");
        Ok(())
    }
}

/// Records may only point at accounts that exist
pub(crate) async fn ensure_user_exists(db: &DatabaseConnection, user_id: i32) -> ServiceResult<()> {
    if user::Entity::find_by_id(user_id).one(db).await?.is_none() {
        return Err(ServiceError::validation(format!("unknown user {user_id}")));
    }
    Ok(())
}
