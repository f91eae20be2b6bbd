//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let server = factory::server::create_server(&db).await?;
//!     let backup = factory::backup::create_backup(&db, server.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory::backup::BackupFactory;
//!
//! let backup = BackupFactory::new(&db, server.id)
//!     .backup_type("incremental")
//!     .status("running")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `server` - Create managed server entities
//! - `backup` - Create backup record entities
//! - `backup_schedule` - Create backup schedule entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod backup;
pub mod backup_schedule;
pub mod helpers;
pub mod server;

// Re-export commonly used factory functions for concise usage
pub use backup::create_backup;
pub use backup_schedule::create_schedule;
pub use helpers::{create_server_with_backup, create_server_with_schedule};
pub use server::create_server;
