use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::{
    fs,
    io::{AsyncWriteExt, BufWriter},
};

use crate::domain::{ports::outbound::BlobStore, AvatarError};

/// Stores avatar files flat in one directory under random names.
#[derive(Debug, Clone)]
pub struct FilesystemBlobStore {
    root: PathBuf,
}

impl FilesystemBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// The extension of `file_name` including the leading dot, taken verbatim
/// from the last `.` onwards.
fn extension_of(file_name: &str) -> Result<&str, AvatarError> {
    if file_name.is_empty() {
        return Err(AvatarError::invalid_input("file name must not be empty"));
    }

    file_name
        .rfind('.')
        .map(|index| &file_name[index..])
        .ok_or_else(|| {
            AvatarError::invalid_input(format!("file name '{file_name}' has no extension"))
        })
}

#[async_trait]
impl BlobStore for FilesystemBlobStore {
    async fn ensure_directory(&self) -> Result<(), AvatarError> {
        match fs::create_dir_all(&self.root).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists && self.root.is_dir() => {
                Ok(())
            }
            Err(source) => {
                tracing::error!(
                    "failed to create avatar directory {}: {}",
                    self.root.display(),
                    source
                );
                Err(AvatarError::StorageInit {
                    path: self.root.clone(),
                    source,
                })
            }
        }
    }

    async fn store(&self, bytes: &[u8], original_filename: &str) -> Result<PathBuf, AvatarError> {
        let extension = extension_of(original_filename)?;

        let root = fs::canonicalize(&self.root).await?;
        let path = root.join(format!("{}{}", uuid::Uuid::new_v4(), extension));

        let file = fs::File::create(&path).await?;
        let mut writer = BufWriter::new(file);
        writer.write_all(bytes).await?;
        writer.flush().await?;

        tracing::debug!("stored {} bytes at {}", bytes.len(), path.display());
        Ok(path)
    }

    async fn delete(&self, path: &Path) -> Result<(), AvatarError> {
        fs::remove_file(path).await?;
        Ok(())
    }

    async fn read(&self, path: &Path) -> Result<Vec<u8>, AvatarError> {
        fs::read(path)
            .await
            .map_err(|source| AvatarError::ImageReadFailure {
                path: path.to_path_buf(),
                source,
            })
    }
}
