use chrono::{DateTime, Datelike, Timelike, Utc};
use sea_orm::{DatabaseConnection, EntityTrait};
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    data::schedule::ScheduleRepository,
    error::AppError,
    executor::BackupExecutor,
    model::{backup::BackupType, schedule::Frequency},
};

/// Starts the backup schedule runner
///
/// This runner fires every minute and starts a backup for every active
/// schedule whose trigger time matches the current minute. A schedule that
/// fails to trigger is logged and skipped; it never aborts the rest of the
/// pass.
///
/// # Arguments
/// - `db`: Database connection
/// - `executor`: Executor performing the triggered backups
pub async fn start_scheduler(
    db: DatabaseConnection,
    executor: Arc<dyn BackupExecutor>,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();
    let job_executor = executor.clone();

    // Run at the top of every minute
    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = job_db.clone();
        let executor = job_executor.clone();

        Box::pin(async move {
            if let Err(e) = process_due_schedules(&db, executor.as_ref(), Utc::now()).await {
                tracing::error!("Error processing backup schedules: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Backup schedule runner started");

    Ok(())
}

/// Starts backups for every active schedule due at the given instant
async fn process_due_schedules(
    db: &DatabaseConnection,
    executor: &dyn BackupExecutor,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    let repo = ScheduleRepository::new(db);
    let schedules = repo.get_all_active().await?;

    for schedule in schedules {
        if !is_due(&schedule, now) {
            continue;
        }

        let server = entity::prelude::Server::find_by_id(schedule.server_id)
            .one(db)
            .await?;

        let Some(server) = server else {
            tracing::warn!(
                "Skipping schedule {} for missing server {}",
                schedule.id,
                schedule.server_id
            );
            continue;
        };

        let Some(backup_type) = BackupType::parse(&schedule.backup_type) else {
            tracing::error!(
                "Skipping schedule {} with unknown backup type {}",
                schedule.id,
                schedule.backup_type
            );
            continue;
        };

        tracing::info!(
            "Starting scheduled {} backup for server {} ({})",
            backup_type,
            server.id,
            server.name
        );

        let result = match backup_type {
            BackupType::Full => executor.create_full_backup(&server).await,
            BackupType::Incremental => executor.create_incremental_backup(&server).await,
            BackupType::Snapshot => executor.create_snapshot(&server).await,
        };

        if let Err(e) = result {
            tracing::error!(
                "Failed to start scheduled backup for server {}: {}",
                server.id,
                e
            );
        }
    }

    Ok(())
}

/// Checks whether a schedule is due at the given instant.
///
/// The trigger time must match the current minute exactly; daily schedules
/// fire every day, weekly schedules only on their day of week (0 = Sunday),
/// monthly schedules only on their day of month. Schedules with a frequency
/// the runner does not recognize never fire.
fn is_due(schedule: &entity::backup_schedule::Model, now: DateTime<Utc>) -> bool {
    let current_time = format!("{:02}:{:02}", now.hour(), now.minute());
    if schedule.time != current_time {
        return false;
    }

    match Frequency::parse(&schedule.frequency) {
        Some(Frequency::Daily) => true,
        Some(Frequency::Weekly) => {
            schedule.day_of_week == Some(now.weekday().num_days_from_sunday() as i32)
        }
        Some(Frequency::Monthly) => schedule.day_of_month == Some(now.day() as i32),
        None => false,
    }
}
