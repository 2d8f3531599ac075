use async_trait::async_trait;

use crate::domain::{
    models::{AvatarRecord, NewAvatar, StudentId},
    AvatarError,
};

/// Outbound port for avatar metadata persistence.
#[async_trait]
pub trait AvatarRepository: Send + Sync + 'static {
    async fn find_by_student_id(
        &self,
        student_id: &StudentId,
    ) -> Result<Option<AvatarRecord>, AvatarError>;

    /// Insert when `avatar.id` is `None`, otherwise update the record with that id.
    async fn save(&self, avatar: NewAvatar) -> Result<AvatarRecord, AvatarError>;

    /// Records in ascending id order, skipping `offset` and returning at most `limit`.
    async fn find_all_paged(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<AvatarRecord>, AvatarError>;
}
