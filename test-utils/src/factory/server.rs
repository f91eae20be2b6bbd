//! Server factory for creating test server entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test servers with customizable fields.
///
/// Provides a builder pattern for creating managed server entities with
/// default values that can be overridden as needed for specific test scenarios.
pub struct ServerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> ServerFactory<'a> {
    /// Creates a new ServerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Server {id}"` where id is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ServerFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Server {}", id),
        }
    }

    /// Sets the server name.
    ///
    /// # Arguments
    /// - `name` - Display name for the server
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the server entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::server::Model)` - Created server entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::server::Model, DbErr> {
        entity::server::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a server with default values.
///
/// Shorthand for `ServerFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::server::Model)` - Created server entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_server(db: &DatabaseConnection) -> Result<entity::server::Model, DbErr> {
    ServerFactory::new(db).build().await
}
