//! Domain models and operation result types.
//!
//! This module contains the typed domain models for backup records and backup
//! schedules, the raw form types submitted by the presentation layer, and the
//! outcome type every orchestration operation returns. Entity models from the
//! database are converted to domain models at the repository boundary.

pub mod backup;
pub mod outcome;
pub mod schedule;
