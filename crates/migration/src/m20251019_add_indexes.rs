use crate::m20251019_create_all_tables::{
    ClothingDeposits, Reservations, ShiftReports, Shifts, TimeEntries,
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Listings are ordered newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_shifts_start")
                    .table(Shifts::Table)
                    .col(Shifts::Start)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_at")
                    .table(Reservations::Table)
                    .col(Reservations::At)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_shift_reports_date")
                    .table(ShiftReports::Table)
                    .col(ShiftReports::Date)
                    .to_owned(),
            )
            .await?;

        // Waiters list their own hours
        manager
            .create_index(
                Index::create()
                    .name("idx_time_entries_user_id_start")
                    .table(TimeEntries::Table)
                    .col(TimeEntries::UserId)
                    .col(TimeEntries::Start)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_clothing_deposits_user_id")
                    .table(ClothingDeposits::Table)
                    .col(ClothingDeposits::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_clothing_deposits_user_id",
            "idx_time_entries_user_id_start",
            "idx_shift_reports_date",
            "idx_reservations_at",
            "idx_shifts_start",
        ] {
            manager
                .drop_index(Index::drop().name(name).to_owned())
                .await?;
        }

        Ok(())
    }
}
