use super::*;

/// Tests deleting a schedule.
///
/// Expected: Ok with the record removed from the database
#[tokio::test]
async fn deletes_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_backup_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_server, schedule) = factory::create_server_with_schedule(db).await?;

    let repo = ScheduleRepository::new(db);
    repo.delete(schedule.id).await?;

    let db_schedule = entity::prelude::BackupSchedule::find_by_id(schedule.id)
        .one(db)
        .await?;
    assert!(db_schedule.is_none());

    Ok(())
}

/// Tests that deleting one schedule leaves others untouched.
///
/// Expected: Ok with only the targeted record removed
#[tokio::test]
async fn leaves_other_schedules_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_backup_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::server::create_server(db).await?;
    let first = factory::backup_schedule::create_schedule(db, server.id).await?;
    let second = factory::backup_schedule::create_schedule(db, server.id).await?;

    let repo = ScheduleRepository::new(db);
    repo.delete(first.id).await?;

    let remaining = entity::prelude::BackupSchedule::find_by_id(second.id)
        .one(db)
        .await?;
    assert!(remaining.is_some());

    Ok(())
}
