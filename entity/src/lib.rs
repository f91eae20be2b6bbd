pub mod prelude;

pub mod backup;
pub mod backup_schedule;
pub mod server;
