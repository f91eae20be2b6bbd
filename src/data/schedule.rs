//! Backup schedule data repository for database operations
//!
//! Provides the `ScheduleRepository` for managing recurring backup schedules in
//! the database. Provides methods to create, find, list, toggle, and delete
//! schedules. Ownership-scoped lookups filter on both schedule ID and owning
//! server ID.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::schedule::CreateScheduleParams;

/// Repository providing database operations for backup schedules.
pub struct ScheduleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduleRepository<'a> {
    /// Creates a new ScheduleRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ScheduleRepository` - new repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new backup schedule, active by default
    ///
    /// # Arguments
    /// - `server_id` - ID of the owning server
    /// - `params` - Validated schedule parameters
    ///
    /// # Returns
    /// - `Ok(Model)` - The created schedule
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(
        &self,
        server_id: i32,
        params: &CreateScheduleParams,
    ) -> Result<entity::backup_schedule::Model, DbErr> {
        entity::backup_schedule::ActiveModel {
            server_id: ActiveValue::Set(server_id),
            backup_type: ActiveValue::Set(params.backup_type.as_str().to_string()),
            frequency: ActiveValue::Set(params.frequency.as_str().to_string()),
            time: ActiveValue::Set(params.time.clone()),
            day_of_week: ActiveValue::Set(params.day_of_week),
            day_of_month: ActiveValue::Set(params.day_of_month),
            retention_days: ActiveValue::Set(params.retention_days),
            storage_driver: ActiveValue::Set(params.storage_driver.as_str().to_string()),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a schedule by ID scoped to its owning server
    ///
    /// # Arguments
    /// - `id` - ID of the schedule to retrieve
    /// - `server_id` - ID of the server the schedule must belong to
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The schedule exists and belongs to the server
    /// - `Ok(None)` - The schedule does not exist or belongs to another server
    /// - `Err(DbErr)` - Database error during get operation
    pub async fn find_in_server(
        &self,
        id: i32,
        server_id: i32,
    ) -> Result<Option<entity::backup_schedule::Model>, DbErr> {
        entity::prelude::BackupSchedule::find()
            .filter(entity::backup_schedule::Column::Id.eq(id))
            .filter(entity::backup_schedule::Column::ServerId.eq(server_id))
            .one(self.db)
            .await
    }

    /// Gets paginated schedules for a server, newest first
    ///
    /// # Arguments
    /// - `server_id` - ID of the server whose schedules to list
    /// - `page` - Page number (0-indexed)
    /// - `per_page` - Number of items per page
    ///
    /// # Returns
    /// - `Ok((schedules, total))` - Page of schedules and total count
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_server_paginated(
        &self,
        server_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::backup_schedule::Model>, u64), DbErr> {
        let paginator = entity::prelude::BackupSchedule::find()
            .filter(entity::backup_schedule::Column::ServerId.eq(server_id))
            .order_by_desc(entity::backup_schedule::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let schedules = paginator.fetch_page(page).await?;

        Ok((schedules, total))
    }

    /// Gets all active schedules across every server
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Every schedule with `is_active` set
    /// - `Err(DbErr)` - Database error
    pub async fn get_all_active(&self) -> Result<Vec<entity::backup_schedule::Model>, DbErr> {
        entity::prelude::BackupSchedule::find()
            .filter(entity::backup_schedule::Column::IsActive.eq(true))
            .all(self.db)
            .await
    }

    /// Sets the active flag on a schedule
    ///
    /// # Arguments
    /// - `schedule` - The schedule to update
    /// - `is_active` - New value of the active flag
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated schedule
    /// - `Err(DbErr)` - Database error during update operation
    pub async fn set_active(
        &self,
        schedule: entity::backup_schedule::Model,
        is_active: bool,
    ) -> Result<entity::backup_schedule::Model, DbErr> {
        let mut active = schedule.into_active_model();
        active.is_active = ActiveValue::Set(is_active);
        active.update(self.db).await
    }

    /// Deletes the schedule with the provided ID
    ///
    /// # Arguments
    /// - `id` - The ID of the schedule to delete
    ///
    /// # Returns
    /// - `Ok(())` - The schedule was deleted (or did not exist)
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::BackupSchedule::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
