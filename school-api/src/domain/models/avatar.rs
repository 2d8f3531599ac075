use std::path::PathBuf;

use super::{AvatarId, StudentId};

pub const DEFAULT_MEDIA_TYPE: &str = "application/octet-stream";

/// Persisted avatar metadata for one student.
///
/// `data` duplicates the bytes written to `file_path` so the image can be
/// served without touching the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarRecord {
    pub id: AvatarId,
    pub student_id: StudentId,
    pub file_path: PathBuf,
    pub file_size: i64,
    pub media_type: String,
    pub data: Vec<u8>,
}

/// A record about to be written. `id` is set when an existing record is
/// being replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAvatar {
    pub id: Option<AvatarId>,
    pub student_id: StudentId,
    pub file_path: PathBuf,
    pub file_size: i64,
    pub media_type: String,
    pub data: Vec<u8>,
}

impl NewAvatar {
    pub fn into_record(self, id: AvatarId) -> AvatarRecord {
        AvatarRecord {
            id,
            student_id: self.student_id,
            file_path: self.file_path,
            file_size: self.file_size,
            media_type: self.media_type,
            data: self.data,
        }
    }
}

/// An uploaded file as declared by the caller.
#[derive(Debug, Clone)]
pub struct AvatarUpload {
    pub bytes: Vec<u8>,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub size: i64,
}

impl AvatarUpload {
    pub fn new(
        bytes: Vec<u8>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        let size = bytes.len() as i64;
        Self {
            bytes,
            file_name: Some(file_name.into()),
            content_type: Some(content_type.into()),
            size,
        }
    }
}

/// Image bytes paired with the media type they should be served as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarView {
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl AvatarView {
    pub fn new(media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            media_type: media_type.into(),
            bytes,
        }
    }
}

impl From<AvatarRecord> for AvatarView {
    fn from(record: AvatarRecord) -> Self {
        Self::new(record.media_type, record.data)
    }
}
