//! Backup schedule factory for creating test schedule entities.
//!
//! This module provides factory methods for creating backup schedules with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test backup schedules with customizable fields.
///
/// Provides a builder pattern for creating schedule entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::backup_schedule::ScheduleFactory;
///
/// let schedule = ScheduleFactory::new(&db, server.id)
///     .frequency("weekly")
///     .day_of_week(Some(0))
///     .build()
///     .await?;
/// ```
pub struct ScheduleFactory<'a> {
    db: &'a DatabaseConnection,
    server_id: i32,
    backup_type: String,
    frequency: String,
    time: String,
    day_of_week: Option<i32>,
    day_of_month: Option<i32>,
    retention_days: i32,
    storage_driver: String,
    is_active: bool,
    created_at: chrono::DateTime<Utc>,
}

impl<'a> ScheduleFactory<'a> {
    /// Creates a new ScheduleFactory with default values.
    ///
    /// Defaults:
    /// - backup_type: `"full"`
    /// - frequency: `"daily"`
    /// - time: `"02:00"`
    /// - day_of_week / day_of_month: `None`
    /// - retention_days: `30`
    /// - storage_driver: `"local"`
    /// - is_active: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `server_id` - Server this schedule belongs to
    ///
    /// # Returns
    /// - `ScheduleFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, server_id: i32) -> Self {
        Self {
            db,
            server_id,
            backup_type: "full".to_string(),
            frequency: "daily".to_string(),
            time: "02:00".to_string(),
            day_of_week: None,
            day_of_month: None,
            retention_days: 30,
            storage_driver: "local".to_string(),
            is_active: true,
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

    /// Sets the schedule frequency.
    ///
    /// # Arguments
    /// - `frequency` - One of `daily`, `weekly`, `monthly`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn frequency(mut self, frequency: impl Into<String>) -> Self {
        self.frequency = frequency.into();
        self
    }

    /// Sets the wall-clock trigger time.
    ///
    /// # Arguments
    /// - `time` - Time of day in 24-hour `HH:MM` format
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    /// Sets the day of week for weekly schedules.
    ///
    /// # Arguments
    /// - `day_of_week` - Day of week, 0-6
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn day_of_week(mut self, day_of_week: Option<i32>) -> Self {
        self.day_of_week = day_of_week;
        self
    }

    /// Sets the day of month for monthly schedules.
    ///
    /// # Arguments
    /// - `day_of_month` - Day of month, 1-31
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn day_of_month(mut self, day_of_month: Option<i32>) -> Self {
        self.day_of_month = day_of_month;
        self
    }

    /// Sets the retention period in days.
    ///
    /// # Arguments
    /// - `retention_days` - Days produced backups are kept, 1-365
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn retention_days(mut self, retention_days: i32) -> Self {
        self.retention_days = retention_days;
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

    /// Sets whether the schedule is active.
    ///
    /// # Arguments
    /// - `is_active` - Whether the schedule should be triggered
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Sets the creation timestamp.
    ///
    /// Useful for tests asserting list ordering by creation time.
    ///
    /// # Arguments
    /// - `created_at` - Creation timestamp for the schedule
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn created_at(mut self, created_at: chrono::DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the schedule entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::backup_schedule::Model)` - Created schedule entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::backup_schedule::Model, DbErr> {
        entity::backup_schedule::ActiveModel {
            id: ActiveValue::NotSet,
            server_id: ActiveValue::Set(self.server_id),
            backup_type: ActiveValue::Set(self.backup_type),
            frequency: ActiveValue::Set(self.frequency),
            time: ActiveValue::Set(self.time),
            day_of_week: ActiveValue::Set(self.day_of_week),
            day_of_month: ActiveValue::Set(self.day_of_month),
            retention_days: ActiveValue::Set(self.retention_days),
            storage_driver: ActiveValue::Set(self.storage_driver),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a schedule with default values for the specified server.
///
/// Shorthand for `ScheduleFactory::new(db, server_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `server_id` - Server this schedule belongs to
///
/// # Returns
/// - `Ok(entity::backup_schedule::Model)` - Created schedule entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_schedule(
    db: &DatabaseConnection,
    server_id: i32,
) -> Result<entity::backup_schedule::Model, DbErr> {
    ScheduleFactory::new(db, server_id).build().await
}
