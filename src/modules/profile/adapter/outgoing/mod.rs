pub mod avatar_repository_postgres;
pub mod avatar_storage_local;
pub mod html_bio_sanitizer;
pub mod profile_repository_postgres;
pub mod sea_orm_entity;

pub use avatar_repository_postgres::AvatarRepositoryPostgres;
pub use avatar_storage_local::LocalAvatarStorage;
pub use html_bio_sanitizer::HtmlBioSanitizer;
pub use profile_repository_postgres::ProfileRepositoryPostgres;
