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
                    .table(Backup::Table)
                    .if_not_exists()
                    .col(pk_auto(Backup::Id))
                    .col(integer(Backup::ServerId))
                    .col(string(Backup::BackupType))
                    .col(string(Backup::Status))
                    .col(string(Backup::StorageDriver))
                    .col(
                        timestamp(Backup::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_backup_server_id")
                            .from(Backup::Table, Backup::ServerId)
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
            .drop_table(Table::drop().table(Backup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Backup {
    Table,
    Id,
    ServerId,
    BackupType,
    Status,
    StorageDriver,
    CreatedAt,
}
