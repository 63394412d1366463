use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use crate::profile::application::ports::outgoing::{AvatarStorage, AvatarStorageError};

const DEFAULT_ROOT: &str = "./media";

fn map_io_error(key: &str, e: std::io::Error) -> AvatarStorageError {
    match e.kind() {
        ErrorKind::NotFound => AvatarStorageError::NotFound(key.to_string()),
        _ => AvatarStorageError::Io(format!("{}: {}", key, e)),
    }
}

/// Stores avatar objects as plain files under a root directory.
#[derive(Debug, Clone)]
pub struct LocalAvatarStorage {
    root: PathBuf,
}

impl LocalAvatarStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Reads `AVATAR_STORAGE_ROOT`, defaulting to `./media`.
    pub fn from_env() -> Self {
        let root = std::env::var("AVATAR_STORAGE_ROOT")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ROOT.to_string());
        Self::new(root)
    }

    /// Keys must be relative and may not climb out of the root.
    fn resolve(&self, key: &str) -> Result<PathBuf, AvatarStorageError> {
        let relative = Path::new(key);
        let is_plain = !key.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));

        if !is_plain {
            return Err(AvatarStorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(relative))
    }

    async fn ensure_parent(&self, key: &str, path: &Path) -> Result<(), AvatarStorageError> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| map_io_error(key, e))?;
        }
        Ok(())
    }
}

#[async_trait]
impl AvatarStorage for LocalAvatarStorage {
    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<(), AvatarStorageError> {
        let path = self.resolve(key)?;
        self.ensure_parent(key, &path).await?;

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| map_io_error(key, e))
    }

    async fn rename(&self, from: &str, to: &str) -> Result<(), AvatarStorageError> {
        let source = self.resolve(from)?;
        let target = self.resolve(to)?;
        self.ensure_parent(to, &target).await?;

        tokio::fs::rename(&source, &target)
            .await
            .map_err(|e| map_io_error(from, e))
    }

    async fn delete(&self, key: &str) -> Result<(), AvatarStorageError> {
        let path = self.resolve(key)?;

        tokio::fs::remove_file(&path)
            .await
            .map_err(|e| map_io_error(key, e))
    }
}
