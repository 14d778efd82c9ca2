use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string_len(80)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::FullName)
                            .string_len(120)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Users::Role)
                            .string_len(20)
                            .not_null()
                            .default("waiter"),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string_len(255).not_null())
                    .to_owned(),
            )
            .await?;

        // Create shifts table
        manager
            .create_table(
                Table::create()
                    .table(Shifts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Shifts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Shifts::Employee).string_len(120).not_null())
                    .col(
                        ColumnDef::new(Shifts::Role)
                            .string_len(120)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Shifts::Start).timestamp().not_null())
                    .col(ColumnDef::new(Shifts::End).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // Create reservations table
        manager
            .create_table(
                Table::create()
                    .table(Reservations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reservations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Reservations::Customer)
                            .string_len(120)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::Size)
                            .integer()
                            .not_null()
                            .default(2),
                    )
                    .col(ColumnDef::new(Reservations::At).timestamp().not_null())
                    .col(ColumnDef::new(Reservations::Notes).text())
                    .to_owned(),
            )
            .await?;

        // Create shift_reports table; the author survives as NULL if removed
        manager
            .create_table(
                Table::create()
                    .table(ShiftReports::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ShiftReports::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ShiftReports::Date).date().not_null())
                    .col(ColumnDef::new(ShiftReports::LeadId).integer())
                    .col(
                        ColumnDef::new(ShiftReports::Revenue)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(ShiftReports::Issues).text())
                    .col(ColumnDef::new(ShiftReports::Notes).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-shift_reports-lead_id")
                            .from(ShiftReports::Table, ShiftReports::LeadId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create time_entries table
        manager
            .create_table(
                Table::create()
                    .table(TimeEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TimeEntries::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TimeEntries::UserId).integer().not_null())
                    .col(ColumnDef::new(TimeEntries::Start).timestamp().not_null())
                    .col(ColumnDef::new(TimeEntries::End).timestamp().not_null())
                    .col(ColumnDef::new(TimeEntries::Note).string_len(200))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-time_entries-user_id")
                            .from(TimeEntries::Table, TimeEntries::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create clothing_deposits table (Kleiderpfand)
        manager
            .create_table(
                Table::create()
                    .table(ClothingDeposits::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClothingDeposits::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ClothingDeposits::UserId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClothingDeposits::Item)
                            .string_len(120)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ClothingDeposits::Size).string_len(20))
                    .col(
                        ColumnDef::new(ClothingDeposits::Amount)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(ClothingDeposits::Date).date().not_null())
                    .col(
                        ColumnDef::new(ClothingDeposits::Returned)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(ClothingDeposits::Notes).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-clothing_deposits-user_id")
                            .from(ClothingDeposits::Table, ClothingDeposits::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order due to foreign key constraints
        manager
            .drop_table(Table::drop().table(ClothingDeposits::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(TimeEntries::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ShiftReports::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Reservations::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Shifts::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
pub(crate) enum Users {
    Table,
    Id,
    Username,
    FullName,
    Role,
    PasswordHash,
}

#[derive(Iden)]
pub(crate) enum Shifts {
    Table,
    Id,
    Employee,
    Role,
    Start,
    End,
}

#[derive(Iden)]
pub(crate) enum Reservations {
    Table,
    Id,
    Customer,
    Size,
    At,
    Notes,
}

#[derive(Iden)]
pub(crate) enum ShiftReports {
    Table,
    Id,
    Date,
    LeadId,
    Revenue,
    Issues,
    Notes,
}

#[derive(Iden)]
pub(crate) enum TimeEntries {
    Table,
    Id,
    UserId,
    Start,
    End,
    Note,
}

#[derive(Iden)]
pub(crate) enum ClothingDeposits {
    Table,
    Id,
    UserId,
    Item,
    Size,
    Amount,
    Date,
    Returned,
    Notes,
}
