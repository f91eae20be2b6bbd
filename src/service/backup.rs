//! Backup lifecycle orchestration.
//!
//! Coordinates backup creation, deletion, restoration, and remote upload for a
//! single server. Every operation validates input, enforces ownership, and maps
//! all failures into a user-safe [`OpOutcome`]; executor and database error
//! details only ever reach the server-side logs.

use sea_orm::DatabaseConnection;

use crate::{
    data::backup::BackupRepository,
    error::AppError,
    executor::BackupExecutor,
    model::{
        backup::{
            Backup, BackupCreateResult, BackupForm, BackupStatus, BackupType, PaginatedBackups,
            StorageDriver,
        },
        outcome::OpOutcome,
    },
    validation::validate_backup_form,
};

/// Number of backups shown per page.
pub const BACKUPS_PER_PAGE: u64 = 10;

/// Service providing backup lifecycle operations for a server.
pub struct BackupService<'a> {
    db: &'a DatabaseConnection,
    executor: &'a dyn BackupExecutor,
}

impl<'a> BackupService<'a> {
    pub fn new(db: &'a DatabaseConnection, executor: &'a dyn BackupExecutor) -> Self {
        Self { db, executor }
    }

    /// Starts a new backup for the server from a creation form.
    ///
    /// Validates the form, dispatches to the executor method matching the
    /// requested backup type, and returns the outcome together with the form
    /// state to render next: reset to defaults on success, unchanged for retry
    /// on any failure.
    ///
    /// # Arguments
    /// - `server` - The server the backup is requested for
    /// - `form` - Raw creation form input
    ///
    /// # Returns
    /// - `BackupCreateResult` - Outcome and next form state
    pub async fn create(
        &self,
        server: &entity::server::Model,
        form: &BackupForm,
    ) -> BackupCreateResult {
        let params = match validate_backup_form(form) {
            Ok(params) => params,
            Err(errors) => {
                return BackupCreateResult {
                    outcome: OpOutcome::invalid(errors),
                    form: form.clone(),
                }
            }
        };

        let result = match params.backup_type {
            BackupType::Full => self.executor.create_full_backup(server).await,
            BackupType::Incremental => self.executor.create_incremental_backup(server).await,
            BackupType::Snapshot => self.executor.create_snapshot(server).await,
        };

        match result {
            Ok(_) => BackupCreateResult {
                outcome: OpOutcome::success(
                    "Backup started successfully. This may take several minutes.",
                ),
                form: BackupForm::default(),
            },
            Err(e) => {
                tracing::error!("Failed to start backup for server {}: {}", server.id, e);
                BackupCreateResult {
                    outcome: OpOutcome::error("Failed to start backup. Please try again."),
                    form: form.clone(),
                }
            }
        }
    }

    /// Deletes a backup owned by the server.
    ///
    /// The executor deletes the stored artifact first; the record is removed
    /// only after that succeeds, so a failed artifact deletion leaves the
    /// record visible for retry.
    ///
    /// # Arguments
    /// - `server` - The acting server
    /// - `backup_id` - ID of the backup to delete
    ///
    /// # Returns
    /// - `OpOutcome` - Success, not-found, or generic failure
    pub async fn delete(&self, server: &entity::server::Model, backup_id: i32) -> OpOutcome {
        let backup = match self.load_owned(server, backup_id).await {
            Ok(backup) => backup,
            Err(outcome) => return outcome,
        };

        if let Err(e) = self.executor.delete_backup(&backup).await {
            tracing::error!("Failed to delete backup {}: {}", backup.id, e);
            return OpOutcome::error("Failed to delete backup. Please try again.");
        }

        let repo = BackupRepository::new(self.db);
        match repo.delete(backup.id).await {
            Ok(()) => OpOutcome::success("Backup deleted successfully."),
            Err(e) => {
                tracing::error!("Failed to delete backup record {}: {}", backup.id, e);
                OpOutcome::error("Failed to delete backup. Please try again.")
            }
        }
    }

    /// Restores the server from a completed backup it owns.
    ///
    /// Only completed backups can be restored; the executor is never invoked
    /// for a backup in any other status.
    ///
    /// # Arguments
    /// - `server` - The acting server
    /// - `backup_id` - ID of the backup to restore from
    ///
    /// # Returns
    /// - `OpOutcome` - Info on start, not-found, status rejection, or failure
    pub async fn restore(&self, server: &entity::server::Model, backup_id: i32) -> OpOutcome {
        let backup = match self.load_owned(server, backup_id).await {
            Ok(backup) => backup,
            Err(outcome) => return outcome,
        };

        if backup.status != BackupStatus::Completed {
            tracing::warn!(
                "Rejected restore of backup {} in status {}",
                backup.id,
                backup.status
            );
            return OpOutcome::error("Only completed backups can be restored.");
        }

        match self.executor.restore_backup(&backup).await {
            Ok(()) => OpOutcome::info(
                "Backup restoration started. This may take several minutes and the server may need to reboot.",
            ),
            Err(e) => {
                tracing::error!("Failed to restore backup {}: {}", backup.id, e);
                OpOutcome::error("Failed to restore backup. Please try again.")
            }
        }
    }

    /// Uploads a locally stored backup owned by the server to S3.
    ///
    /// Only backups on local storage can be uploaded. After a successful
    /// transfer the record's storage driver is updated to reflect the new
    /// artifact location.
    ///
    /// # Arguments
    /// - `server` - The acting server
    /// - `backup_id` - ID of the backup to upload
    ///
    /// # Returns
    /// - `OpOutcome` - Success, not-found, driver rejection, or failure
    pub async fn upload_to_s3(&self, server: &entity::server::Model, backup_id: i32) -> OpOutcome {
        let backup = match self.load_owned(server, backup_id).await {
            Ok(backup) => backup,
            Err(outcome) => return outcome,
        };

        if backup.storage_driver != StorageDriver::Local {
            tracing::warn!(
                "Rejected upload of backup {} already on {}",
                backup.id,
                backup.storage_driver
            );
            return OpOutcome::error("Backup is already stored remotely.");
        }

        if let Err(e) = self.executor.upload_to_s3(&backup).await {
            tracing::error!("Failed to upload backup {} to S3: {}", backup.id, e);
            return OpOutcome::error("Failed to upload backup to S3. Please try again.");
        }

        let repo = BackupRepository::new(self.db);
        match repo.update_storage_driver(backup.id, StorageDriver::S3).await {
            Ok(_) => OpOutcome::success("Backup uploaded to S3 successfully."),
            Err(e) => {
                tracing::error!(
                    "Failed to record S3 location for backup {}: {}",
                    backup.id,
                    e
                );
                OpOutcome::error("Failed to upload backup to S3. Please try again.")
            }
        }
    }

    /// Gets a page of the server's backups, newest first.
    ///
    /// # Arguments
    /// - `server_id` - ID of the server whose backups to list
    /// - `page` - Page number (0-indexed)
    ///
    /// # Returns
    /// - `Ok(PaginatedBackups)` - Page of domain models with metadata
    /// - `Err(AppError)` - Database error or unparseable stored record
    pub async fn get_paginated(
        &self,
        server_id: i32,
        page: u64,
    ) -> Result<PaginatedBackups, AppError> {
        let repo = BackupRepository::new(self.db);
        let (entities, total) = repo
            .get_by_server_paginated(server_id, page, BACKUPS_PER_PAGE)
            .await?;

        let backups = entities
            .into_iter()
            .map(Backup::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PaginatedBackups {
            backups,
            total,
            page,
            per_page: BACKUPS_PER_PAGE,
            total_pages: total.div_ceil(BACKUPS_PER_PAGE),
        })
    }

    /// Loads a backup scoped to the acting server.
    ///
    /// A backup that does not exist and one owned by another server yield the
    /// same not-found outcome, so callers cannot probe for foreign record IDs.
    async fn load_owned(
        &self,
        server: &entity::server::Model,
        backup_id: i32,
    ) -> Result<Backup, OpOutcome> {
        let repo = BackupRepository::new(self.db);

        match repo.find_in_server(backup_id, server.id).await {
            Ok(Some(entity)) => Backup::from_entity(entity).map_err(|e| {
                tracing::error!("Failed to load backup {}: {}", backup_id, e);
                OpOutcome::error("Backup not found.")
            }),
            Ok(None) => {
                tracing::warn!(
                    "Backup {} not found for server {}",
                    backup_id,
                    server.id
                );
                Err(OpOutcome::error("Backup not found."))
            }
            Err(e) => {
                tracing::error!("Failed to look up backup {}: {}", backup_id, e);
                Err(OpOutcome::error("Backup not found."))
            }
        }
    }
}
