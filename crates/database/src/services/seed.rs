use super::user::{NewUser, UserService};
use crate::error::ServiceResult;
use log::{info, warn};
use models::seed::SEED_ACCOUNTS;
use sea_orm::DatabaseConnection;

pub struct SeedService;

impl SeedService {
    /// Creates each default account whose username is still free.
    ///
    /// Existing accounts are left untouched, so rotated passwords survive a re-run.
    pub async fn ensure_seed_accounts(db: &DatabaseConnection) -> ServiceResult<Vec<&'static str>> {
        let mut created = Vec::new();

        for account in SEED_ACCOUNTS {
            if UserService::find_by_username(db, account.username)
                .await?
                .is_some()
            {
                continue;
            }

            UserService::create(
                db,
                NewUser {
                    username: account.username.to_owned(),
                    full_name: account.full_name.to_owned(),
                    role: account.role,
                    password: account.password.to_owned(),
                },
            )
            .await?;
            created.push(account.username);
        }

        if created.is_empty() {
            info!("Seed accounts already present");
        } else {
            warn!(
                "Created default accounts {} with published passwords; change them now",
                created.join(", ")
            );
        }

        Ok(created)
    }
}
