use super::*;

/// Tests recording that a backup artifact moved to S3.
///
/// Expected: Ok with storage_driver updated in the database
#[tokio::test]
async fn updates_storage_driver_to_s3() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_backup_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_server, backup) = factory::create_server_with_backup(db).await?;
    assert_eq!(backup.storage_driver, "local");

    let repo = BackupRepository::new(db);
    let updated = repo
        .update_storage_driver(backup.id, StorageDriver::S3)
        .await?;

    assert_eq!(updated.storage_driver, "s3");

    let db_backup = entity::prelude::Backup::find_by_id(backup.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_backup.storage_driver, "s3");

    Ok(())
}

/// Tests updating a backup that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_backup() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_backup_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BackupRepository::new(db);
    let result = repo.update_storage_driver(9999, StorageDriver::S3).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
