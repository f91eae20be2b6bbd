//! Backup record domain models and form types.
//!
//! Provides the typed enums for backup classification, the `Backup` domain model
//! with its entity conversion, the creation form with its documented defaults,
//! and paginated list models for the presentation layer.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde::Serialize;

use crate::model::outcome::OpOutcome;

/// Kind of backup performed for a server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackupType {
    /// Full disk image of the server.
    Full,
    /// Incremental diff against the previous backup.
    Incremental,
    /// Point-in-time filesystem snapshot.
    Snapshot,
}

impl BackupType {
    /// Parses the stored string representation.
    ///
    /// # Arguments
    /// - `value` - Stored column value, e.g. `"full"`
    ///
    /// # Returns
    /// - `Some(BackupType)` - Recognized backup type
    /// - `None` - Unknown value
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "full" => Some(Self::Full),
            "incremental" => Some(Self::Incremental),
            "snapshot" => Some(Self::Snapshot),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Incremental => "incremental",
            Self::Snapshot => "snapshot",
        }
    }
}

impl std::fmt::Display for BackupType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a backup attempt.
///
/// Owned by the backup executor, which moves records forward through
/// `pending -> running -> completed` or into `failed`. The orchestrator only
/// reads this field; `completed` and `failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackupStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

impl BackupStatus {
    /// Parses the stored string representation.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "running" => Some(Self::Running),
            "completed" => Some(Self::Completed),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for BackupStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Backend currently holding a backup artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageDriver {
    /// Local disk of the dashboard host.
    Local,
    /// Remote object storage.
    S3,
}

impl StorageDriver {
    /// Parses the stored string representation.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "local" => Some(Self::Local),
            "s3" => Some(Self::S3),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::S3 => "s3",
        }
    }
}

impl std::fmt::Display for StorageDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One performed or in-flight backup attempt for a server.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Backup {
    pub id: i32,
    /// Owning server; never changes after creation.
    pub server_id: i32,
    pub backup_type: BackupType,
    pub status: BackupStatus,
    pub storage_driver: StorageDriver,
    pub created_at: DateTime<Utc>,
}

impl Backup {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The backup entity from the database
    ///
    /// # Returns
    /// - `Ok(Backup)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - A stored enum column holds an unknown value
    pub fn from_entity(entity: entity::backup::Model) -> Result<Self, DbErr> {
        let backup_type = BackupType::parse(&entity.backup_type).ok_or_else(|| {
            DbErr::Custom(format!("Unknown backup type: {}", entity.backup_type))
        })?;
        let status = BackupStatus::parse(&entity.status)
            .ok_or_else(|| DbErr::Custom(format!("Unknown backup status: {}", entity.status)))?;
        let storage_driver = StorageDriver::parse(&entity.storage_driver).ok_or_else(|| {
            DbErr::Custom(format!("Unknown storage driver: {}", entity.storage_driver))
        })?;

        Ok(Self {
            id: entity.id,
            server_id: entity.server_id,
            backup_type,
            status,
            storage_driver,
            created_at: entity.created_at,
        })
    }
}

/// Raw backup creation form as submitted by the presentation layer.
///
/// Fields are untyped strings; the validation layer turns them into
/// [`CreateBackupParams`] or a field-level error map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackupForm {
    pub backup_type: String,
    pub storage_driver: String,
}

impl Default for BackupForm {
    /// Form defaults shown in the creation dialog: `full` backup on `local` storage.
    fn default() -> Self {
        Self {
            backup_type: "full".to_string(),
            storage_driver: "local".to_string(),
        }
    }
}

/// Validated parameters for requesting a new backup.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBackupParams {
    pub backup_type: BackupType,
    pub storage_driver: StorageDriver,
}

/// Result of a backup creation request.
///
/// Carries the operation outcome together with the form state the presentation
/// layer should render next: reset to defaults after success, unchanged for
/// retry after validation or executor failure. The creation dialog closes
/// exactly when the outcome is a success.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackupCreateResult {
    pub outcome: OpOutcome,
    pub form: BackupForm,
}

/// Paginated list of backups with metadata.
///
/// Contains a page of backup records ordered newest first along with pagination
/// metadata for building paginated UI views.
#[derive(Debug, Clone, Serialize)]
pub struct PaginatedBackups {
    /// Backup records for the current page.
    pub backups: Vec<Backup>,
    /// Total number of backups across all pages.
    pub total: u64,
    /// Current page number (0-indexed).
    pub page: u64,
    /// Number of items per page.
    pub per_page: u64,
    /// Total number of pages available.
    pub total_pages: u64,
}
