use super::{require_text, time_entry::ensure_user_exists, validate_amount};
use crate::{
    entities::{clothing_deposit, user},
    error::{ServiceError, ServiceResult},
};
use chrono::Local;
use log::info;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, QueryOrder,
    prelude::Date,
};

#[derive(Debug, Clone)]
pub struct NewClothingDeposit {
    pub user_id: i32,
    pub item: String,
    pub size: Option<String>,
    pub amount: Option<f64>,
    /// Defaults to today
    pub date: Option<Date>,
    pub returned: bool,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ClothingDepositChanges {
    pub item: Option<String>,
    pub size: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<Date>,
    pub returned: Option<bool>,
    pub notes: Option<String>,
}

pub type DepositWithUser = (clothing_deposit::Model, Option<user::Model>);

pub struct ClothingDepositService;

impl ClothingDepositService {
    pub async fn list(db: &DatabaseConnection) -> ServiceResult<Vec<DepositWithUser>> {
        Ok(clothing_deposit::Entity::find()
            .find_also_related(user::Entity)
            .order_by_desc(clothing_deposit::Column::Date)
            .order_by_desc(clothing_deposit::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn get(db: &DatabaseConnection, id: i32) -> ServiceResult<clothing_deposit::Model> {
        clothing_deposit::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("clothing deposit", id))
    }

    /// A deposit together with the account it was handed to
    pub async fn get_with_user(
        db: &DatabaseConnection,
        id: i32,
    ) -> ServiceResult<DepositWithUser> {
        clothing_deposit::Entity::find_by_id(id)
            .find_also_related(user::Entity)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("clothing deposit", id))
    }

    pub async fn create(
        db: &DatabaseConnection,
        new: NewClothingDeposit,
    ) -> ServiceResult<clothing_deposit::Model> {
        let item = require_text("item", new.item)?;
        let amount = new.amount.unwrap_or(0.0);
        validate_amount("amount", amount)?;
        ensure_user_exists(db, new.user_id).await?;

        let created = clothing_deposit::ActiveModel {
            user_id: Set(new.user_id),
            item: Set(item),
            size: Set(new.size),
            amount: Set(amount),
            date: Set(new.date.unwrap_or_else(|| Local::now().date_naive())),
            returned: Set(new.returned),
            notes: Set(new.notes),
            ..Default::default()
        }
        .insert(db)
        .await?;

        info!(
            "Recorded deposit {} of {:.2} for {} handed to user {}",
            created.id, created.amount, created.item, created.user_id
        );
        Ok(created)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        changes: ClothingDepositChanges,
    ) -> ServiceResult<clothing_deposit::Model> {
        let mut active: clothing_deposit::ActiveModel = Self::get(db, id).await?.into();

        if let Some(item) = changes.item {
            active.item = Set(require_text("item", item)?);
        }
        if let Some(size) = changes.size {
            active.size = Set(Some(size));
        }
        if let Some(amount) = changes.amount {
            validate_amount("amount", amount)?;
            active.amount = Set(amount);
        }
        if let Some(date) = changes.date {
            active.date = Set(date);
        }
        if let Some(returned) = changes.returned {
            active.returned = Set(returned);
        }
        if let Some(notes) = changes.notes {
            active.notes = Set(Some(notes));
        }

        Ok(active.update(db).await?)
    }

    /// Flips whether the item has been handed back
    pub async fn toggle_returned(
        db: &DatabaseConnection,
        id: i32,
    ) -> ServiceResult<clothing_deposit::Model> {
        let existing = Self::get(db, id).await?;
        let returned = !existing.returned;

        let mut active: clothing_deposit::ActiveModel = existing.into();
        active.returned = Set(returned);
        let updated = active.update(db).await?;

        info!("Deposit {id} marked as returned={returned}");
        Ok(updated)
    }

    pub async fn delete(db: &DatabaseConnection, id: i32) -> ServiceResult<()> {
        let result = clothing_deposit::Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::not_found("clothing deposit", id));
        }

        info!("Deleted clothing deposit {id}");
        Ok(())
    }
}
