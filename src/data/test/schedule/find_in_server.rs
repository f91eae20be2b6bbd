use super::*;

/// Tests finding a schedule scoped to its owning server.
///
/// Expected: Ok(Some) with the owned schedule
#[tokio::test]
async fn finds_schedule_owned_by_server() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_backup_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (server, schedule) = factory::create_server_with_schedule(db).await?;

    let repo = ScheduleRepository::new(db);
    let found = repo.find_in_server(schedule.id, server.id).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().id, schedule.id);

    Ok(())
}

/// Tests that a schedule belonging to another server is not returned.
///
/// The result is indistinguishable from the schedule not existing.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_schedule_of_other_server() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_backup_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, schedule) = factory::create_server_with_schedule(db).await?;
    let other = factory::server::create_server(db).await?;

    let repo = ScheduleRepository::new(db);
    let found = repo.find_in_server(schedule.id, other.id).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests looking up a schedule ID that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_backup_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::server::create_server(db).await?;

    let repo = ScheduleRepository::new(db);
    let found = repo.find_in_server(9999, server.id).await?;

    assert!(found.is_none());

    Ok(())
}
