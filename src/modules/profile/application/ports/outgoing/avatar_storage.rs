use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AvatarStorageError {
    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Invalid object key: {0}")]
    InvalidKey(String),

    #[error("Storage I/O error: {0}")]
    Io(String),
}

/// Blob store for avatar images, addressed by relative keys such as
/// `avatars/pending/{user_id}.png`.
#[async_trait]
pub trait AvatarStorage: Send + Sync {
    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<(), AvatarStorageError>;

    /// Moves an object, replacing whatever is stored at `to`.
    async fn rename(&self, from: &str, to: &str) -> Result<(), AvatarStorageError>;

    async fn delete(&self, key: &str) -> Result<(), AvatarStorageError>;
}
