use super::require_text;
use crate::{
    entities::reservation,
    error::{ServiceError, ServiceResult},
};
use log::info;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, QueryOrder,
    prelude::DateTime,
};

/// Party size used when a booking does not state one
pub const DEFAULT_PARTY_SIZE: i32 = 2;

#[derive(Debug, Clone)]
pub struct NewReservation {
    pub customer: String,
    pub size: Option<i32>,
    pub at: DateTime,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ReservationChanges {
    pub customer: Option<String>,
    pub size: Option<i32>,
    pub at: Option<DateTime>,
    pub notes: Option<String>,
}

pub struct ReservationService;

impl ReservationService {
    /// All bookings, latest first
    pub async fn list(db: &DatabaseConnection) -> ServiceResult<Vec<reservation::Model>> {
        Ok(reservation::Entity::find()
            .order_by_desc(reservation::Column::At)
            .all(db)
            .await?)
    }

    pub async fn get(db: &DatabaseConnection, id: i32) -> ServiceResult<reservation::Model> {
        reservation::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("reservation", id))
    }

    pub async fn create(
        db: &DatabaseConnection,
        new: NewReservation,
    ) -> ServiceResult<reservation::Model> {
        let customer = require_text("customer", new.customer)?;
        let size = new.size.unwrap_or(DEFAULT_PARTY_SIZE);
        validate_size(size)?;

        let created = reservation::ActiveModel {
            customer: Set(customer),
            size: Set(size),
            at: Set(new.at),
            notes: Set(new.notes),
            ..Default::default()
        }
        .insert(db)
        .await?;

        info!(
            "Booked reservation {} for {} ({} guests) at {}",
            created.id, created.customer, created.size, created.at
        );
        Ok(created)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        changes: ReservationChanges,
    ) -> ServiceResult<reservation::Model> {
        let mut active: reservation::ActiveModel = Self::get(db, id).await?.into();

        if let Some(customer) = changes.customer {
            active.customer = Set(require_text("customer", customer)?);
        }
        if let Some(size) = changes.size {
            validate_size(size)?;
            active.size = Set(size);
        }
        if let Some(at) = changes.at {
            active.at = Set(at);
        }
        if let Some(notes) = changes.notes {
            active.notes = Set(Some(notes));
        }

        Ok(active.update(db).await?)
    }

    pub async fn delete(db: &DatabaseConnection, id: i32) -> ServiceResult<()> {
        let result = reservation::Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::not_found("reservation", id));
        }

        info!("Deleted reservation {id}");
        Ok(())
    }
}

fn validate_size(size: i32) -> ServiceResult<()> {
    if size < 1 {
        return Err(ServiceError::validation("party size must be at least 1"));
    }
    Ok(())
}
