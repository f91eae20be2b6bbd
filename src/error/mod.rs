//! Error types for the backup orchestration core.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors. Note that user-facing
//! orchestration operations never return `AppError`: the service layer catches every
//! failure at the operation boundary and converts it into an
//! [`OpOutcome`](crate::model::outcome::OpOutcome). `AppError` surfaces only from
//! infrastructure entry points (startup, scheduler, listing queries).

pub mod config;

use thiserror::Error;

use crate::{error::config::ConfigError, executor::ExecutorError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most
/// variants use `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Failure reported by the backup executor.
    #[error(transparent)]
    ExecutorErr(#[from] ExecutorError),

    /// Cron scheduler error.
    ///
    /// Occurs when the backup schedule dispatch job cannot be registered or started.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),
}
