use super::*;

/// Tests finding a backup by ID without server scoping.
///
/// Expected: Ok(Some) with the requested backup
#[tokio::test]
async fn finds_backup_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_backup_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (server, backup) = factory::create_server_with_backup(db).await?;

    let repo = BackupRepository::new(db);
    let found = repo.find_by_id(backup.id).await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.id, backup.id);
    assert_eq!(found.server_id, server.id);

    Ok(())
}

/// Tests looking up a backup ID that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_backup() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_backup_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BackupRepository::new(db);
    let found = repo.find_by_id(9999).await?;

    assert!(found.is_none());

    Ok(())
}
