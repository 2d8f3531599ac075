use async_trait::async_trait;

use crate::domain::{
    models::{AvatarId, AvatarRecord, AvatarUpload, AvatarView, StudentId},
    AvatarError,
};

/// Inbound port for the avatar workflow.
///
/// Upload validates the owning student, writes the file to the blob store and
/// keeps exactly one metadata record per student, replacing the previous file
/// on re-upload.
#[async_trait]
pub trait AvatarService: Send + Sync + 'static {
    async fn upload_avatar(
        &self,
        student_id: &StudentId,
        upload: AvatarUpload,
    ) -> Result<AvatarId, AvatarError>;

    /// Serve the copy kept in the metadata record; no filesystem access.
    async fn get_avatar_from_db(&self, student_id: &StudentId)
        -> Result<AvatarRecord, AvatarError>;

    /// Re-read the stored file from disk.
    async fn get_avatar_from_directory(
        &self,
        student_id: &StudentId,
    ) -> Result<AvatarView, AvatarError>;

    /// 1-indexed page of records in persistence order.
    async fn list_avatars(
        &self,
        page_number: i64,
        page_size: i64,
    ) -> Result<Vec<AvatarRecord>, AvatarError>;
}
