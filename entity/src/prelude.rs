pub use super::backup::Entity as Backup;
pub use super::backup_schedule::Entity as BackupSchedule;
pub use super::server::Entity as Server;
