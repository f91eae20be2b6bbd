//! Backup factory for creating test backup record entities.
//!
//! This module provides factory methods for creating backup records with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test backups with customizable fields.
///
/// Provides a builder pattern for creating backup record entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::backup::BackupFactory;
///
/// let backup = BackupFactory::new(&db, server.id)
///     .backup_type("incremental")
///     .status("running")
///     .build()
///     .await?;
/// ```
pub struct BackupFactory<'a> {
    db: &'a DatabaseConnection,
    server_id: i32,
    backup_type: String,
    status: String,
    storage_driver: String,
    created_at: chrono::DateTime<Utc>,
}

impl<'a> BackupFactory<'a> {
    /// Creates a new BackupFactory with default values.
    ///
    /// Defaults:
    /// - backup_type: `"full"`
    /// - status: `"completed"`
    /// - storage_driver: `"local"`
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `server_id` - Server this backup belongs to
    ///
    /// # Returns
    /// - `BackupFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, server_id: i32) -> Self {
        Self {
            db,
            server_id,
            backup_type: "full".to_string(),
            status: "completed".to_string(),
            storage_driver: "local".to_string(),
            created_at: Utc::now(),
        }
    }

    /// Sets the backup type.
    ///
    /// # Arguments
    /// - `backup_type` - One of `full`, `incremental`, `snapshot`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn backup_type(mut self, backup_type: impl Into<String>) -> Self {
        self.backup_type = backup_type.into();
        self
    }

    /// Sets the backup status.
    ///
    /// # Arguments
    /// - `status` - One of `pending`, `running`, `completed`, `failed`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the storage driver.
    ///
    /// # Arguments
    /// - `storage_driver` - One of `local`, `s3`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn storage_driver(mut self, storage_driver: impl Into<String>) -> Self {
        self.storage_driver = storage_driver.into();
        self
    }

    /// Sets the creation timestamp.
    ///
    /// Useful for tests asserting list ordering by creation time.
    ///
    /// # Arguments
    /// - `created_at` - Creation timestamp for the backup
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn created_at(mut self, created_at: chrono::DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the backup entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::backup::Model)` - Created backup entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::backup::Model, DbErr> {
        entity::backup::ActiveModel {
            id: ActiveValue::NotSet,
            server_id: ActiveValue::Set(self.server_id),
            backup_type: ActiveValue::Set(self.backup_type),
            status: ActiveValue::Set(self.status),
            storage_driver: ActiveValue::Set(self.storage_driver),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a backup with default values for the specified server.
///
/// Shorthand for `BackupFactory::new(db, server_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `server_id` - Server this backup belongs to
///
/// # Returns
/// - `Ok(entity::backup::Model)` - Created backup entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_backup(
    db: &DatabaseConnection,
    server_id: i32,
) -> Result<entity::backup::Model, DbErr> {
    BackupFactory::new(db, server_id).build().await
}
