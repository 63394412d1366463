use sea_orm::entity::prelude::*;
use uuid::Uuid;

/// Stored avatar keys. `pending_key` holds an uploaded image awaiting
/// confirmation, `image_key` the one shown on the profile.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "avatars")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    pub image_key: Option<String>,
    pub pending_key: Option<String>,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
