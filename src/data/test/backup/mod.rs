use crate::data::backup::BackupRepository;
use crate::model::backup::{BackupType, StorageDriver};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod update_storage_driver;
