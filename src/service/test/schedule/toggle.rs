use super::*;
use test_utils::factory::backup_schedule::ScheduleFactory;

/// Tests deactivating an active schedule.
///
/// Expected: Success with the deactivation message, flag cleared
#[tokio::test]
async fn deactivates_active_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_backup_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (server, schedule) = factory::create_server_with_schedule(db).await?;
    let service = ScheduleService::new(db);

    let outcome = service.toggle(&server, schedule.id).await;

    assert_eq!(
        outcome,
        OpOutcome::success("Backup schedule deactivated successfully.")
    );

    let db_schedule = entity::prelude::BackupSchedule::find_by_id(schedule.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!db_schedule.is_active);

    Ok(())
}

/// Tests activating an inactive schedule.
///
/// Expected: Success with the activation message, flag set
#[tokio::test]
async fn activates_inactive_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_backup_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::server::create_server(db).await?;
    let schedule = ScheduleFactory::new(db, server.id)
        .is_active(false)
        .build()
        .await?;
    let service = ScheduleService::new(db);

    let outcome = service.toggle(&server, schedule.id).await;

    assert_eq!(
        outcome,
        OpOutcome::success("Backup schedule activated successfully.")
    );

    let db_schedule = entity::prelude::BackupSchedule::find_by_id(schedule.id)
        .one(db)
        .await?
        .unwrap();
    assert!(db_schedule.is_active);

    Ok(())
}

/// Tests that toggling twice restores the original state.
///
/// Expected: two successes with opposite messages, flag back where it started
#[tokio::test]
async fn toggling_twice_round_trips() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_backup_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (server, schedule) = factory::create_server_with_schedule(db).await?;
    let service = ScheduleService::new(db);

    let first = service.toggle(&server, schedule.id).await;
    let second = service.toggle(&server, schedule.id).await;

    assert_eq!(
        first,
        OpOutcome::success("Backup schedule deactivated successfully.")
    );
    assert_eq!(
        second,
        OpOutcome::success("Backup schedule activated successfully.")
    );

    let db_schedule = entity::prelude::BackupSchedule::find_by_id(schedule.id)
        .one(db)
        .await?
        .unwrap();
    assert!(db_schedule.is_active);

    Ok(())
}

/// Tests that another server's schedule cannot be toggled.
///
/// Expected: not-found error, flag untouched
#[tokio::test]
async fn rejects_schedule_of_other_server() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_backup_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, schedule) = factory::create_server_with_schedule(db).await?;
    let other = factory::server::create_server(db).await?;
    let service = ScheduleService::new(db);

    let outcome = service.toggle(&other, schedule.id).await;

    assert_eq!(outcome, OpOutcome::error("Schedule not found."));

    let db_schedule = entity::prelude::BackupSchedule::find_by_id(schedule.id)
        .one(db)
        .await?
        .unwrap();
    assert!(db_schedule.is_active);

    Ok(())
}

/// Tests toggling a schedule that does not exist.
///
/// Expected: the same not-found error as the foreign-owner case
#[tokio::test]
async fn rejects_missing_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_backup_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::server::create_server(db).await?;
    let service = ScheduleService::new(db);

    let outcome = service.toggle(&server, 9999).await;

    assert_eq!(outcome, OpOutcome::error("Schedule not found."));

    Ok(())
}
