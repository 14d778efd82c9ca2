use crate::{
    entities::user,
    error::{ServiceError, ServiceResult},
    password::{hash_password, verify_password},
};
use log::{info, warn};
use models::role::Role;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, SqlErr,
};

/// Longest username the schema accepts
pub const MAX_USERNAME_LEN: usize = 80;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub full_name: String,
    pub role: Role,
    pub password: String,
}

/// Fields a manager may change on an existing account
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub full_name: Option<String>,
    pub role: Option<Role>,
    pub password: Option<String>,
}

pub struct UserService;

impl UserService {
    /// All accounts, ordered by username
    pub async fn list(db: &DatabaseConnection) -> ServiceResult<Vec<user::Model>> {
        Ok(user::Entity::find()
            .order_by_asc(user::Column::Username)
            .all(db)
            .await?)
    }

    /// Team directory order: role descending, then username
    pub async fn team(db: &DatabaseConnection) -> ServiceResult<Vec<user::Model>> {
        Ok(user::Entity::find()
            .order_by_desc(user::Column::Role)
            .order_by_asc(user::Column::Username)
            .all(db)
            .await?)
    }

    pub async fn find(db: &DatabaseConnection, id: i32) -> ServiceResult<Option<user::Model>> {
        Ok(user::Entity::find_by_id(id).one(db).await?)
    }

    pub async fn get(db: &DatabaseConnection, id: i32) -> ServiceResult<user::Model> {
        Self::find(db, id)
            .await?
            .ok_or_else(|| ServiceError::not_found("user", id))
    }

    pub async fn find_by_username(
        db: &DatabaseConnection,
        username: &str,
    ) -> ServiceResult<Option<user::Model>> {
        Ok(user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(db)
            .await?)
    }

    pub async fn count(db: &DatabaseConnection) -> ServiceResult<u64> {
        Ok(user::Entity::find().count(db).await?)
    }

    /// Returns the user when the credentials match, `None` otherwise
    pub async fn authenticate(
        db: &DatabaseConnection,
        username: &str,
        password: &str,
    ) -> ServiceResult<Option<user::Model>> {
        let Some(user) = Self::find_by_username(db, username).await? else {
            warn!("Login attempt for unknown user {username:?}");
            return Ok(None);
        };

        if verify_password(password, &user.password_hash)? {
            Ok(Some(user))
        } else {
            warn!("Wrong password for user {username:?}");
            Ok(None)
        }
    }

    pub async fn create(db: &DatabaseConnection, new: NewUser) -> ServiceResult<user::Model> {
        let username = new.username.trim().to_owned();
        validate_username(&username)?;
        validate_password(&new.password)?;

        if Self::find_by_username(db, &username).await?.is_some() {
            return Err(username_taken(&username));
        }

        // A concurrent create can still win the race to the unique index
        let created = user::ActiveModel {
            username: Set(username.clone()),
            full_name: Set(new.full_name),
            role: Set(new.role),
            password_hash: Set(hash_password(&new.password)?),
            ..Default::default()
        }
        .insert(db)
        .await
        .map_err(|e| unique_violation_as_conflict(e, &username))?;

        info!(
            "Created user {} ({}) with role {}",
            created.id, created.username, created.role
        );
        Ok(created)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        changes: UserChanges,
    ) -> ServiceResult<user::Model> {
        let existing = Self::get(db, id).await?;
        let mut active: user::ActiveModel = existing.into();

        if let Some(full_name) = changes.full_name {
            active.full_name = Set(full_name);
        }
        if let Some(role) = changes.role {
            active.role = Set(role);
        }
        if let Some(password) = changes.password {
            validate_password(&password)?;
            active.password_hash = Set(hash_password(&password)?);
        }

        let updated = active.update(db).await?;
        info!("Updated user {} ({})", updated.id, updated.username);
        Ok(updated)
    }

    /// Replaces a user's own password after checking the current one
    pub async fn change_password(
        db: &DatabaseConnection,
        id: i32,
        current: &str,
        new_password: &str,
    ) -> ServiceResult<()> {
        let existing = Self::get(db, id).await?;

        if !verify_password(current, &existing.password_hash)? {
            return Err(ServiceError::validation("current password is incorrect"));
        }
        validate_password(new_password)?;

        let mut active: user::ActiveModel = existing.into();
        active.password_hash = Set(hash_password(new_password)?);
        active.update(db).await?;

        info!("User {id} changed their password");
        Ok(())
    }

    /// Deletes an account. Nobody may delete the account they are acting as.
    pub async fn delete(db: &DatabaseConnection, id: i32, acting_user_id: i32) -> ServiceResult<()> {
        if id == acting_user_id {
            return Err(ServiceError::Conflict(
                "you cannot delete your own account".to_owned(),
            ));
        }

        let result = user::Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::not_found("user", id));
        }

        info!("User {acting_user_id} deleted user {id}");
        Ok(())
    }
}

fn username_taken(username: &str) -> ServiceError {
    ServiceError::Conflict(format!("username {username:?} is already taken"))
}

fn unique_violation_as_conflict(err: DbErr, username: &str) -> ServiceError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            warn!("Lost race creating user {username:?}");
            username_taken(username)
        }
        _ => err.into(),
    }
}

fn validate_username(username: &str) -> ServiceResult<()> {
    if username.is_empty() {
        return Err(ServiceError::validation("username must not be empty"));
    }
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(ServiceError::validation(format!(
            "username must be at most {MAX_USERNAME_LEN} characters"
        )));
    }
    Ok(())
}

fn validate_password(password: &str) -> ServiceResult<()> {
    if password.is_empty() {
        return Err(ServiceError::validation("password must not be empty"));
    }
    Ok(())
}
