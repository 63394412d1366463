use sea_orm::entity::prelude::*;
use uuid::Uuid;

/// One row per user, keyed by the owning user's id.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    pub date_of_birth: Date,
    #[sea_orm(column_type = "Text")]
    pub bio: String,
    pub given_name: String,
    pub family_name: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub favourite_animal: String,
    pub hobby: String,
    pub favourite_fountain_pen: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
