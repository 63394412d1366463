pub mod avatar_repository;
pub mod avatar_storage;
pub mod bio_sanitizer;
pub mod profile_repository;

pub use avatar_repository::{AvatarRepository, AvatarRepositoryError};
pub use avatar_storage::{AvatarStorage, AvatarStorageError};
pub use bio_sanitizer::BioSanitizer;
pub use profile_repository::{ProfileRepository, ProfileRepositoryError};
