use crate::{
    auth::token::{TokenError, TokenService},
    error::AppError,
    state::AppState,
};
use axum::{extract::FromRequestParts, http::header, http::request::Parts};
use database::services::user::UserService;
use log::{debug, warn};
use models::{
    access::{self, Feature, Operation, Scope},
    role::Role,
};

/// The authenticated account behind a request
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i32,
    pub username: String,
    pub full_name: String,
    pub role: Role,
}

impl CurrentUser {
    /// Passes the role gate or fails with 403, returning the permitted scope
    pub fn require(&self, feature: Feature, operation: Operation) -> Result<Scope, AppError> {
        access::check(self.role, feature, operation)
            .scope()
            .ok_or_else(|| {
                warn!(
                    "User {} ({}) denied {operation} on {feature}",
                    self.username, self.role
                );
                AppError::forbidden()
            })
    }

    /// Like [`require`](Self::require), and the record must fall inside the scope
    pub fn require_owner(
        &self,
        feature: Feature,
        operation: Operation,
        owner_id: i32,
    ) -> Result<(), AppError> {
        if self.require(feature, operation)?.covers(self.id, owner_id) {
            Ok(())
        } else {
            warn!(
                "User {} denied {operation} on {feature} owned by user {owner_id}",
                self.username
            );
            Err(AppError::forbidden())
        }
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(TokenService::extract_from_header)
            .ok_or(AppError::Unauthorized)?;

        let claims = state.tokens.validate(token).map_err(|e| {
            match e {
                TokenError::Expired => debug!("Expired token on {}", parts.uri),
                _ => warn!("Rejected token on {}: {e}", parts.uri),
            }
            AppError::Unauthorized
        })?;
        let user_id = claims.user_id().map_err(|_| AppError::Unauthorized)?;

        // The account may have been deleted or changed since the token was issued
        let account = UserService::find(&state.db, user_id)
            .await?
            .ok_or(AppError::Unauthorized)?;

        let user = CurrentUser {
            id: account.id,
            username: account.username,
            full_name: account.full_name,
            role: account.role,
        };

        parts.extensions.insert(user.clone());
        Ok(user)
    }
}
