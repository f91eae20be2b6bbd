use super::*;

/// Tests creating a new backup record.
///
/// Verifies that the repository inserts a record in `pending` status with the
/// requested type and storage driver, owned by the given server.
///
/// Expected: Ok with pending backup created
#[tokio::test]
async fn creates_pending_backup() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_backup_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::server::create_server(db).await?;

    let repo = BackupRepository::new(db);
    let backup = repo
        .create(server.id, BackupType::Incremental, StorageDriver::Local)
        .await?;

    assert_eq!(backup.server_id, server.id);
    assert_eq!(backup.backup_type, "incremental");
    assert_eq!(backup.status, "pending");
    assert_eq!(backup.storage_driver, "local");

    // Verify the record exists in the database
    let db_backup = entity::prelude::Backup::find_by_id(backup.id).one(db).await?;
    assert!(db_backup.is_some());
    assert_eq!(db_backup.unwrap().status, "pending");

    Ok(())
}

/// Tests creating several backups for the same server.
///
/// Expected: Ok with distinct IDs assigned
#[tokio::test]
async fn creates_multiple_backups_for_same_server() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_backup_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::server::create_server(db).await?;

    let repo = BackupRepository::new(db);
    let first = repo
        .create(server.id, BackupType::Full, StorageDriver::Local)
        .await?;
    let second = repo
        .create(server.id, BackupType::Snapshot, StorageDriver::S3)
        .await?;

    assert_ne!(first.id, second.id);
    assert_eq!(second.backup_type, "snapshot");
    assert_eq!(second.storage_driver, "s3");

    Ok(())
}
