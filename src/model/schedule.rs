//! Backup schedule domain models and form types.
//!
//! Provides the recurrence frequency enum, the `Schedule` domain model with its
//! entity conversion, the creation form with its documented defaults, and
//! paginated list models for the presentation layer.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde::Serialize;

use crate::model::{
    backup::{BackupType, StorageDriver},
    outcome::OpOutcome,
};

/// How often a backup schedule fires.
///
/// Weekly schedules additionally carry a day of week (0-6), monthly schedules a
/// day of month (1-31); the other conditional field is meaningless for the
/// selected frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    /// Parses the stored string representation.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recurring backup policy for a server.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schedule {
    pub id: i32,
    /// Owning server; never changes after creation.
    pub server_id: i32,
    pub backup_type: BackupType,
    pub frequency: Frequency,
    /// Wall-clock trigger time as a literal 24-hour `HH:MM` string.
    pub time: String,
    /// Day of week (0-6), meaningful only for weekly schedules.
    pub day_of_week: Option<i32>,
    /// Day of month (1-31), meaningful only for monthly schedules.
    pub day_of_month: Option<i32>,
    /// How long produced backups are kept before pruning, in days.
    pub retention_days: i32,
    pub storage_driver: StorageDriver,
    /// Inactive schedules are never triggered.
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Schedule {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The schedule entity from the database
    ///
    /// # Returns
    /// - `Ok(Schedule)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - A stored enum column holds an unknown value
    pub fn from_entity(entity: entity::backup_schedule::Model) -> Result<Self, DbErr> {
        let backup_type = BackupType::parse(&entity.backup_type).ok_or_else(|| {
            DbErr::Custom(format!("Unknown backup type: {}", entity.backup_type))
        })?;
        let frequency = Frequency::parse(&entity.frequency).ok_or_else(|| {
            DbErr::Custom(format!("Unknown schedule frequency: {}", entity.frequency))
        })?;
        let storage_driver = StorageDriver::parse(&entity.storage_driver).ok_or_else(|| {
            DbErr::Custom(format!("Unknown storage driver: {}", entity.storage_driver))
        })?;

        Ok(Self {
            id: entity.id,
            server_id: entity.server_id,
            backup_type,
            frequency,
            time: entity.time,
            day_of_week: entity.day_of_week,
            day_of_month: entity.day_of_month,
            retention_days: entity.retention_days,
            storage_driver,
            is_active: entity.is_active,
            created_at: entity.created_at,
        })
    }
}

/// Raw schedule creation form as submitted by the presentation layer.
///
/// Fields are untyped; the validation layer turns them into
/// [`CreateScheduleParams`] or a field-level error map. `day_of_week` and
/// `day_of_month` are validated only when their triggering frequency is
/// selected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleForm {
    pub backup_type: String,
    pub frequency: String,
    pub time: String,
    pub day_of_week: Option<i32>,
    pub day_of_month: Option<i32>,
    pub retention_days: Option<i32>,
    pub storage_driver: String,
}

impl Default for ScheduleForm {
    /// Form defaults shown in the creation dialog: daily `full` backup at 02:00,
    /// kept for 30 days on `local` storage.
    fn default() -> Self {
        Self {
            backup_type: "full".to_string(),
            frequency: "daily".to_string(),
            time: "02:00".to_string(),
            day_of_week: None,
            day_of_month: None,
            retention_days: Some(30),
            storage_driver: "local".to_string(),
        }
    }
}

/// Validated parameters for creating a new backup schedule.
///
/// The conditional day fields are `Some` exactly when the frequency requires
/// them; stray values submitted for the other frequency are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateScheduleParams {
    pub backup_type: BackupType,
    pub frequency: Frequency,
    pub time: String,
    pub day_of_week: Option<i32>,
    pub day_of_month: Option<i32>,
    pub retention_days: i32,
    pub storage_driver: StorageDriver,
}

/// Result of a schedule creation request.
///
/// Carries the operation outcome together with the form state the presentation
/// layer should render next: reset to defaults after success, unchanged for
/// retry after validation or persistence failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleCreateResult {
    pub outcome: OpOutcome,
    pub form: ScheduleForm,
}

/// Paginated list of backup schedules with metadata.
#[derive(Debug, Clone, Serialize)]
pub struct PaginatedSchedules {
    /// Schedules for the current page, newest first.
    pub schedules: Vec<Schedule>,
    /// Total number of schedules across all pages.
    pub total: u64,
    /// Current page number (0-indexed).
    pub page: u64,
    /// Number of items per page.
    pub per_page: u64,
    /// Total number of pages available.
    pub total_pages: u64,
}
