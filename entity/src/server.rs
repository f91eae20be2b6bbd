use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "server")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::backup::Entity")]
    Backup,
    #[sea_orm(has_many = "super::backup_schedule::Entity")]
    BackupSchedule,
}

impl Related<super::backup::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Backup.def()
    }
}

impl Related<super::backup_schedule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BackupSchedule.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
