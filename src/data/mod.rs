//! Database repository layer for backup records and schedules.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! entity models to the service layer, which converts them to domain models at its boundary.
//! All database queries, inserts, updates, and deletes are performed through these repositories.

pub mod backup;
pub mod schedule;

#[cfg(test)]
mod test;
