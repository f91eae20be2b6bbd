use crate::data::schedule::ScheduleRepository;
use crate::model::backup::{BackupType, StorageDriver};
use crate::model::schedule::{CreateScheduleParams, Frequency};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find_in_server;

/// Default parameters for a daily schedule in tests.
fn daily_params() -> CreateScheduleParams {
    CreateScheduleParams {
        backup_type: BackupType::Full,
        frequency: Frequency::Daily,
        time: "02:00".to_string(),
        day_of_week: None,
        day_of_month: None,
        retention_days: 30,
        storage_driver: StorageDriver::Local,
    }
}
