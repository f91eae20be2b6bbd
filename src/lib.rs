//! Backup lifecycle and schedule orchestration core for the serverdeck dashboard.
//!
//! This crate contains the backend engine that creates, tracks, restores, relocates,
//! and periodically triggers backups of managed servers. HTTP routing, views, and
//! session handling live in the presentation layer and are not part of this crate;
//! every operation here returns an explicit outcome the presentation layer renders.
//!
//! # Architecture
//!
//! The crate follows a layered architecture with clear separation of concerns:
//!
//! - **Service Layer** (`service/`) - Lifecycle orchestration for backups and schedules
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, form types, and operation outcomes
//! - **Validation Layer** (`validation`) - Field-level and cross-field form validation
//! - **Executor** (`executor`) - Contract for the external engine performing the actual
//!   backup, restore, and transfer work
//! - **Error Layer** (`error/`) - Application error types
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Scheduler** (`scheduler/`) - Cron job dispatching due backup schedules
//!
//! # Operation Flow
//!
//! A typical mutating operation flows through these layers:
//!
//! 1. **Service** receives the request for a server in scope
//! 2. **Validation** checks input before any state change (creation operations)
//! 3. **Data** loads the record, scoped to the owning server (existing records)
//! 4. **Service** performs the state transition and/or dispatches the executor
//! 5. The executor result is mapped to an outcome; nothing propagates past the
//!    service boundary as an unhandled failure

pub mod config;
pub mod data;
pub mod error;
pub mod executor;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod validation;
