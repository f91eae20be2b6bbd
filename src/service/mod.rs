//! Service layer for backup lifecycle and schedule orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! presentation layer and the data (repository) layer. Services are responsible for:
//!
//! - **Validation**: Rejecting malformed form input before any side effect
//! - **Ownership**: Scoping every targeted operation to the acting server
//! - **Orchestration**: Coordinating executor dispatch and repository calls
//! - **Outcome Mapping**: Containing every failure into a user-safe outcome
//!
//! Targeted operations never distinguish a missing record from a record owned
//! by another server; both yield the same not-found outcome.

pub mod backup;
pub mod schedule;

#[cfg(test)]
pub(crate) mod test;
