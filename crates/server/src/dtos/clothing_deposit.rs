use chrono::NaiveDate;
use database::services::clothing_deposit::{
    ClothingDepositChanges, DepositWithUser, NewClothingDeposit,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClothingDepositResponse {
    pub id: i32,
    pub user_id: i32,
    pub username: Option<String>,
    pub item: String,
    pub size: Option<String>,
    pub amount: f64,
    pub date: NaiveDate,
    pub returned: bool,
    pub notes: Option<String>,
}

impl From<DepositWithUser> for ClothingDepositResponse {
    fn from((deposit, user): DepositWithUser) -> Self {
        Self {
            id: deposit.id,
            user_id: deposit.user_id,
            username: user.map(|u| u.username),
            item: deposit.item,
            size: deposit.size,
            amount: deposit.amount,
            date: deposit.date,
            returned: deposit.returned,
            notes: deposit.notes,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateClothingDepositRequest {
    pub user_id: i32,
    pub item: String,
    pub size: Option<String>,
    pub amount: Option<f64>,
    /// Today when omitted
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub returned: bool,
    pub notes: Option<String>,
}

impl From<CreateClothingDepositRequest> for NewClothingDeposit {
    fn from(req: CreateClothingDepositRequest) -> Self {
        Self {
            user_id: req.user_id,
            item: req.item,
            size: req.size,
            amount: req.amount,
            date: req.date,
            returned: req.returned,
            notes: req.notes,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateClothingDepositRequest {
    pub item: Option<String>,
    pub size: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<NaiveDate>,
    pub returned: Option<bool>,
    pub notes: Option<String>,
}

impl From<UpdateClothingDepositRequest> for ClothingDepositChanges {
    fn from(req: UpdateClothingDepositRequest) -> Self {
        Self {
            item: req.item,
            size: req.size,
            amount: req.amount,
            date: req.date,
            returned: req.returned,
            notes: req.notes,
        }
    }
}
