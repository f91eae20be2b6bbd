use super::*;
use test_utils::factory::backup::BackupFactory;

/// Tests uploading a locally stored backup to S3.
///
/// Expected: Success, one UploadToS3 call, record now marked as s3
#[tokio::test]
async fn uploads_local_backup() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_backup_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (server, backup) = factory::create_server_with_backup(db).await?;
    let executor = StubExecutor::new();
    let service = BackupService::new(db, &executor);

    let outcome = service.upload_to_s3(&server, backup.id).await;

    assert_eq!(
        outcome,
        OpOutcome::success("Backup uploaded to S3 successfully.")
    );
    assert_eq!(executor.calls(), vec![ExecutorCall::UploadToS3(backup.id)]);

    let db_backup = entity::prelude::Backup::find_by_id(backup.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_backup.storage_driver, "s3");

    Ok(())
}

/// Tests that a backup already on S3 is not uploaded again.
///
/// Expected: driver rejection, no executor calls
#[tokio::test]
async fn rejects_backup_already_remote() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_backup_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::server::create_server(db).await?;
    let backup = BackupFactory::new(db, server.id)
        .storage_driver("s3")
        .build()
        .await?;
    let executor = StubExecutor::new();
    let service = BackupService::new(db, &executor);

    let outcome = service.upload_to_s3(&server, backup.id).await;

    assert_eq!(outcome, OpOutcome::error("Backup is already stored remotely."));
    assert!(executor.calls().is_empty());

    Ok(())
}

/// Tests that another server's backup cannot be uploaded.
///
/// Expected: not-found error, no executor calls, record untouched
#[tokio::test]
async fn rejects_backup_of_other_server() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_backup_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, backup) = factory::create_server_with_backup(db).await?;
    let other = factory::server::create_server(db).await?;
    let executor = StubExecutor::new();
    let service = BackupService::new(db, &executor);

    let outcome = service.upload_to_s3(&other, backup.id).await;

    assert_eq!(outcome, OpOutcome::error("Backup not found."));
    assert!(executor.calls().is_empty());

    let db_backup = entity::prelude::Backup::find_by_id(backup.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_backup.storage_driver, "local");

    Ok(())
}

/// Tests that a failed transfer leaves the record on local storage.
///
/// Expected: generic error, storage driver unchanged
#[tokio::test]
async fn keeps_local_driver_when_transfer_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_backup_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (server, backup) = factory::create_server_with_backup(db).await?;
    let executor = StubExecutor::failing();
    let service = BackupService::new(db, &executor);

    let outcome = service.upload_to_s3(&server, backup.id).await;

    assert_eq!(
        outcome,
        OpOutcome::error("Failed to upload backup to S3. Please try again.")
    );

    let db_backup = entity::prelude::Backup::find_by_id(backup.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_backup.storage_driver, "local");

    Ok(())
}
