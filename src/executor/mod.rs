//! Backup executor interface.
//!
//! The executor is the subsystem that actually performs backup work: imaging
//! disks, computing incremental diffs, taking snapshots, deleting artifacts,
//! restoring servers and transferring archives to remote storage. The
//! orchestrator only dispatches to it and records the results; executor
//! internals (job queues, agents, storage credentials) live behind this trait.

use async_trait::async_trait;
use thiserror::Error;

use crate::model::backup::Backup;

/// Errors surfaced by a backup executor.
///
/// Carried messages are for server-side logs only; user-facing text is always
/// a generic replacement chosen by the orchestrator.
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// A backup, delete or restore job could not be started or failed outright.
    #[error("executor job failed: {0}")]
    Job(String),
    /// An artifact transfer to remote storage failed.
    #[error("artifact transfer failed: {0}")]
    Transfer(String),
}

/// Interface to the subsystem performing backup work.
///
/// Creation methods receive the owning server and return the freshly recorded
/// backup in `pending` status; the executor moves it through `running` into
/// `completed` or `failed` on its own. Maintenance methods receive the backup
/// record they operate on.
#[async_trait]
pub trait BackupExecutor: Send + Sync {
    /// Starts a full disk image backup of the server.
    async fn create_full_backup(
        &self,
        server: &entity::server::Model,
    ) -> Result<Backup, ExecutorError>;

    /// Starts an incremental backup against the server's previous backup.
    async fn create_incremental_backup(
        &self,
        server: &entity::server::Model,
    ) -> Result<Backup, ExecutorError>;

    /// Takes a point-in-time snapshot of the server.
    async fn create_snapshot(
        &self,
        server: &entity::server::Model,
    ) -> Result<Backup, ExecutorError>;

    /// Deletes the stored artifact behind a backup record.
    async fn delete_backup(&self, backup: &Backup) -> Result<(), ExecutorError>;

    /// Restores the owning server from a completed backup.
    async fn restore_backup(&self, backup: &Backup) -> Result<(), ExecutorError>;

    /// Transfers a locally stored artifact to S3.
    async fn upload_to_s3(&self, backup: &Backup) -> Result<(), ExecutorError>;
}
