use sea_orm_migration::prelude::*;

use super::m20250304_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn text_field(column: UserProfiles) -> ColumnDef {
    ColumnDef::new(column)
        .string_len(255)
        .not_null()
        .default("")
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserProfiles::UserId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserProfiles::DateOfBirth).date().not_null())
                    .col(ColumnDef::new(UserProfiles::Bio).text().not_null())
                    .col(text_field(UserProfiles::GivenName))
                    .col(text_field(UserProfiles::FamilyName))
                    .col(text_field(UserProfiles::City))
                    .col(text_field(UserProfiles::State))
                    .col(text_field(UserProfiles::Country))
                    .col(text_field(UserProfiles::FavouriteAnimal))
                    .col(text_field(UserProfiles::Hobby))
                    .col(text_field(UserProfiles::FavouriteFountainPen))
                    .col(
                        ColumnDef::new(UserProfiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_profiles_user")
                            .from(UserProfiles::Table, UserProfiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_user_profiles_updated_at
                BEFORE UPDATE ON user_profiles
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserProfiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserProfiles {
    Table,
    UserId,
    DateOfBirth,
    Bio,
    GivenName,
    FamilyName,
    City,
    State,
    Country,
    FavouriteAnimal,
    Hobby,
    FavouriteFountainPen,
    CreatedAt,
    UpdatedAt,
}
