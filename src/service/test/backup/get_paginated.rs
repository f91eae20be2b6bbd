use super::*;
use chrono::{Duration, Utc};
use test_utils::factory::backup::BackupFactory;

/// Tests listing backups as typed domain models, newest first.
///
/// Expected: Ok with converted enums and descending creation order
#[tokio::test]
async fn lists_backups_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_backup_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::server::create_server(db).await?;
    let now = Utc::now();
    let older = BackupFactory::new(db, server.id)
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let newer = BackupFactory::new(db, server.id)
        .backup_type("snapshot")
        .status("running")
        .created_at(now - Duration::hours(1))
        .build()
        .await?;

    let executor = StubExecutor::new();
    let service = BackupService::new(db, &executor);

    let page = service.get_paginated(server.id, 0).await.unwrap();

    assert_eq!(page.total, 2);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.backups[0].id, newer.id);
    assert_eq!(page.backups[0].status, BackupStatus::Running);
    assert_eq!(page.backups[0].storage_driver, StorageDriver::Local);
    assert_eq!(page.backups[1].id, older.id);

    Ok(())
}

/// Tests page size and page count over more than one page of records.
///
/// Expected: ten records on the first page, two on the second, two pages total
#[tokio::test]
async fn paginates_with_fixed_page_size() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_backup_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::server::create_server(db).await?;
    let now = Utc::now();
    for i in 0..12 {
        BackupFactory::new(db, server.id)
            .created_at(now - Duration::minutes(i))
            .build()
            .await?;
    }

    let executor = StubExecutor::new();
    let service = BackupService::new(db, &executor);

    let first = service.get_paginated(server.id, 0).await.unwrap();
    assert_eq!(first.backups.len(), 10);
    assert_eq!(first.per_page, 10);
    assert_eq!(first.total, 12);
    assert_eq!(first.total_pages, 2);

    let second = service.get_paginated(server.id, 1).await.unwrap();
    assert_eq!(second.backups.len(), 2);
    assert_eq!(second.page, 1);

    Ok(())
}
