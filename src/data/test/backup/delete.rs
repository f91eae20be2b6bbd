use super::*;

/// Tests deleting a backup record.
///
/// Expected: Ok with the record removed from the database
#[tokio::test]
async fn deletes_backup() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_backup_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_server, backup) = factory::create_server_with_backup(db).await?;

    let repo = BackupRepository::new(db);
    repo.delete(backup.id).await?;

    let db_backup = entity::prelude::Backup::find_by_id(backup.id).one(db).await?;
    assert!(db_backup.is_none());

    Ok(())
}

/// Tests that deleting one backup leaves other records untouched.
///
/// Expected: Ok with only the targeted record removed
#[tokio::test]
async fn leaves_other_backups_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_backup_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::server::create_server(db).await?;
    let first = factory::backup::create_backup(db, server.id).await?;
    let second = factory::backup::create_backup(db, server.id).await?;

    let repo = BackupRepository::new(db);
    repo.delete(first.id).await?;

    let remaining = entity::prelude::Backup::find_by_id(second.id).one(db).await?;
    assert!(remaining.is_some());

    Ok(())
}
