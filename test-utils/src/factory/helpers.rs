//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a server together with a completed backup belonging to it.
///
/// Convenience method for tests that need a backup in a valid ownership
/// context without customizing either entity.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((server, backup))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_server_with_backup(
    db: &DatabaseConnection,
) -> Result<(entity::server::Model, entity::backup::Model), DbErr> {
    let server = crate::factory::server::create_server(db).await?;
    let backup = crate::factory::backup::create_backup(db, server.id).await?;

    Ok((server, backup))
}

/// Creates a server together with an active daily schedule belonging to it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((server, schedule))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_server_with_schedule(
    db: &DatabaseConnection,
) -> Result<(entity::server::Model, entity::backup_schedule::Model), DbErr> {
    let server = crate::factory::server::create_server(db).await?;
    let schedule = crate::factory::backup_schedule::create_schedule(db, server.id).await?;

    Ok((server, schedule))
}
