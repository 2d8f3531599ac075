use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::AvatarError;

/// Outbound port for raw file storage under a single root directory.
#[async_trait]
pub trait BlobStore: Send + Sync + 'static {
    /// Create the root directory if it does not exist yet.
    ///
    /// Fails with [`AvatarError::StorageInit`].
    async fn ensure_directory(&self) -> Result<(), AvatarError>;

    /// Write `bytes` under a freshly generated name that keeps the extension
    /// of `original_filename`, returning the absolute path of the new file.
    ///
    /// Fails with [`AvatarError::InvalidInput`] if the name is empty or has no
    /// extension; nothing is written in that case.
    async fn store(&self, bytes: &[u8], original_filename: &str) -> Result<PathBuf, AvatarError>;

    /// Remove a file previously returned by [`BlobStore::store`].
    async fn delete(&self, path: &Path) -> Result<(), AvatarError>;

    /// Fails with [`AvatarError::ImageReadFailure`].
    async fn read(&self, path: &Path) -> Result<Vec<u8>, AvatarError>;
}
