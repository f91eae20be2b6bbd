//! Backup record data repository for database operations
//!
//! Provides the `BackupRepository` for managing backup records in the database.
//! Provides methods to create, find, list, update, and delete backup records.
//! Ownership-scoped lookups filter on both record ID and owning server ID so
//! that records belonging to other servers are indistinguishable from records
//! that do not exist.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::backup::{BackupType, StorageDriver};

/// Repository providing database operations for backup records.
pub struct BackupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BackupRepository<'a> {
    /// Creates a new BackupRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BackupRepository` - new repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new backup record in `pending` status
    ///
    /// # Arguments
    /// - `server_id` - ID of the owning server
    /// - `backup_type` - Kind of backup being performed
    /// - `storage_driver` - Backend the artifact will initially land on
    ///
    /// # Returns
    /// - `Ok(Model)` - The created backup record
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(
        &self,
        server_id: i32,
        backup_type: BackupType,
        storage_driver: StorageDriver,
    ) -> Result<entity::backup::Model, DbErr> {
        entity::backup::ActiveModel {
            server_id: ActiveValue::Set(server_id),
            backup_type: ActiveValue::Set(backup_type.as_str().to_string()),
            status: ActiveValue::Set("pending".to_string()),
            storage_driver: ActiveValue::Set(storage_driver.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a backup by ID
    ///
    /// # Arguments
    /// - `id` - ID of the backup to retrieve
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The requested backup if found
    /// - `Ok(None)` - The requested backup does not exist
    /// - `Err(DbErr)` - Database error during get operation
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::backup::Model>, DbErr> {
        entity::prelude::Backup::find_by_id(id).one(self.db).await
    }

    /// Finds a backup by ID scoped to its owning server
    ///
    /// # Arguments
    /// - `id` - ID of the backup to retrieve
    /// - `server_id` - ID of the server the backup must belong to
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The backup exists and belongs to the server
    /// - `Ok(None)` - The backup does not exist or belongs to another server
    /// - `Err(DbErr)` - Database error during get operation
    pub async fn find_in_server(
        &self,
        id: i32,
        server_id: i32,
    ) -> Result<Option<entity::backup::Model>, DbErr> {
        entity::prelude::Backup::find()
            .filter(entity::backup::Column::Id.eq(id))
            .filter(entity::backup::Column::ServerId.eq(server_id))
            .one(self.db)
            .await
    }

    /// Gets paginated backups for a server, newest first
    ///
    /// # Arguments
    /// - `server_id` - ID of the server whose backups to list
    /// - `page` - Page number (0-indexed)
    /// - `per_page` - Number of items per page
    ///
    /// # Returns
    /// - `Ok((backups, total))` - Page of backup records and total count
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_server_paginated(
        &self,
        server_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::backup::Model>, u64), DbErr> {
        let paginator = entity::prelude::Backup::find()
            .filter(entity::backup::Column::ServerId.eq(server_id))
            .order_by_desc(entity::backup::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let backups = paginator.fetch_page(page).await?;

        Ok((backups, total))
    }

    /// Updates the storage driver recorded for a backup
    ///
    /// # Arguments
    /// - `id` - ID of the backup to update
    /// - `storage_driver` - Backend now holding the artifact
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated backup record
    /// - `Err(DbErr::RecordNotFound)` - No backup with the given ID exists
    /// - `Err(DbErr)` - Database error during update operation
    pub async fn update_storage_driver(
        &self,
        id: i32,
        storage_driver: StorageDriver,
    ) -> Result<entity::backup::Model, DbErr> {
        let backup = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Backup {} not found", id)))?;

        let mut active = backup.into_active_model();
        active.storage_driver = ActiveValue::Set(storage_driver.as_str().to_string());
        active.update(self.db).await
    }

    /// Deletes the backup record with the provided ID
    ///
    /// # Arguments
    /// - `id` - The ID of the backup to delete
    ///
    /// # Returns
    /// - `Ok(())` - The backup record was deleted (or did not exist)
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Backup::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
