use database::{
    entities::user,
    services::user::{NewUser, UserChanges},
};
use models::role::Role;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An account as shown to other users; never includes the password hash
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub full_name: String,
    #[schema(value_type = String, example = "shift_lead")]
    pub role: Role,
}

impl From<user::Model> for UserResponse {
    fn from(user: user::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            full_name: user.full_name,
            role: user.role,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    #[schema(value_type = String, example = "waiter")]
    pub role: Role,
    pub password: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            username: req.username,
            full_name: req.full_name,
            role: req.role,
            password: req.password,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub full_name: Option<String>,
    #[schema(value_type = Option<String>)]
    pub role: Option<Role>,
    /// Resets the password without knowing the old one
    pub password: Option<String>,
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            full_name: req.full_name,
            role: req.role,
            password: req.password,
        }
    }
}
