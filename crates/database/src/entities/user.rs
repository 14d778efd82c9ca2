use models::role::Role;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub full_name: String,
    pub role: Role,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::time_entry::Entity")]
    TimeEntries,
    #[sea_orm(has_many = "super::shift_report::Entity")]
    ShiftReports,
    #[sea_orm(has_many = "super::clothing_deposit::Entity")]
    ClothingDeposits,
}

impl Related<super::time_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimeEntries.def()
    }
}

impl Related<super::shift_report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShiftReports.def()
    }
}

impl Related<super::clothing_deposit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClothingDeposits.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
