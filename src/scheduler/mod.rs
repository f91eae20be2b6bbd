//! Background schedulers for recurring work.

pub mod backup_schedules;
