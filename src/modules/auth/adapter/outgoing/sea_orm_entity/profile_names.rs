use sea_orm::entity::prelude::*;
use uuid::Uuid;

/// Read-only view of the name columns on `user_profiles`. Auth needs the
/// names to reject passwords built from them and never writes this table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    pub given_name: String,
    pub family_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
