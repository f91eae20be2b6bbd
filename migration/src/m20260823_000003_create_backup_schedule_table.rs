use sea_orm_migration::{prelude::*, schema::*};

use super::m20260823_000001_create_server_table::Server;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BackupSchedule::Table)
                    .if_not_exists()
                    .col(pk_auto(BackupSchedule::Id))
                    .col(integer(BackupSchedule::ServerId))
                    .col(string(BackupSchedule::BackupType))
                    .col(string(BackupSchedule::Frequency))
                    .col(string(BackupSchedule::Time))
                    .col(integer_null(BackupSchedule::DayOfWeek))
                    .col(integer_null(BackupSchedule::DayOfMonth))
                    .col(integer(BackupSchedule::RetentionDays))
                    .col(string(BackupSchedule::StorageDriver))
                    .col(boolean(BackupSchedule::IsActive).default(true))
                    .col(
                        timestamp(BackupSchedule::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_backup_schedule_server_id")
                            .from(BackupSchedule::Table, BackupSchedule::ServerId)
                            .to(Server::Table, Server::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BackupSchedule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BackupSchedule {
    Table,
    Id,
    ServerId,
    BackupType,
    Frequency,
    Time,
    DayOfWeek,
    DayOfMonth,
    RetentionDays,
    StorageDriver,
    IsActive,
    CreatedAt,
}
