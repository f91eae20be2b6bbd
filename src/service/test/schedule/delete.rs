use super::*;

/// Tests deleting an owned schedule.
///
/// Expected: Success with the record removed
#[tokio::test]
async fn deletes_owned_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_backup_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (server, schedule) = factory::create_server_with_schedule(db).await?;
    let service = ScheduleService::new(db);

    let outcome = service.delete(&server, schedule.id).await;

    assert_eq!(
        outcome,
        OpOutcome::success("Backup schedule deleted successfully.")
    );

    let db_schedule = entity::prelude::BackupSchedule::find_by_id(schedule.id)
        .one(db)
        .await?;
    assert!(db_schedule.is_none());

    Ok(())
}

/// Tests that another server's schedule cannot be deleted.
///
/// Expected: not-found error, record untouched
#[tokio::test]
async fn rejects_schedule_of_other_server() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_backup_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, schedule) = factory::create_server_with_schedule(db).await?;
    let other = factory::server::create_server(db).await?;
    let service = ScheduleService::new(db);

    let outcome = service.delete(&other, schedule.id).await;

    assert_eq!(outcome, OpOutcome::error("Schedule not found."));

    let db_schedule = entity::prelude::BackupSchedule::find_by_id(schedule.id)
        .one(db)
        .await?;
    assert!(db_schedule.is_some());

    Ok(())
}

/// Tests deleting a schedule that does not exist.
///
/// Expected: the same not-found error as the foreign-owner case
#[tokio::test]
async fn rejects_missing_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_backup_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::server::create_server(db).await?;
    let service = ScheduleService::new(db);

    let outcome = service.delete(&server, 9999).await;

    assert_eq!(outcome, OpOutcome::error("Schedule not found."));

    Ok(())
}
