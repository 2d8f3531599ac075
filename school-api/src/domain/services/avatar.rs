use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;

use crate::domain::{
    models::{
        AvatarId, AvatarRecord, AvatarUpload, AvatarView, NewAvatar, PageRequest, StudentId,
        DEFAULT_MEDIA_TYPE,
    },
    ports::{
        inbound::AvatarService,
        outbound::{AvatarRepository, BlobStore, StudentRepository},
    },
    AvatarError,
};

/// Hands out one async mutex per student so that uploads for the same
/// student run one at a time while different students never contend.
#[derive(Default)]
struct StudentLocks {
    locks: Mutex<HashMap<StudentId, Arc<tokio::sync::Mutex<()>>>>,
}

impl StudentLocks {
    fn acquire(&self, student_id: StudentId) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(|err| err.into_inner());
        Arc::clone(locks.entry(student_id).or_default())
    }

    /// Drop the entry once nobody else holds or waits on it.
    fn release(&self, student_id: StudentId) {
        let mut locks = self.locks.lock().unwrap_or_else(|err| err.into_inner());
        if locks
            .get(&student_id)
            .is_some_and(|lock| Arc::strong_count(lock) == 1)
        {
            locks.remove(&student_id);
        }
    }
}

pub struct AvatarServiceImpl<A, S, B> {
    avatars: Arc<A>,
    students: Arc<S>,
    blobs: Arc<B>,
    locks: StudentLocks,
}

impl<A, S, B> AvatarServiceImpl<A, S, B> {
    pub fn new(avatars: Arc<A>, students: Arc<S>, blobs: Arc<B>) -> Self {
        Self {
            avatars,
            students,
            blobs,
            locks: StudentLocks::default(),
        }
    }
}

impl<A: AvatarRepository, S: StudentRepository, B: BlobStore> AvatarServiceImpl<A, S, B> {
    async fn find_existing(&self, student_id: &StudentId) -> Result<AvatarRecord, AvatarError> {
        self.avatars
            .find_by_student_id(student_id)
            .await?
            .ok_or_else(|| {
                tracing::error!("avatar for student with id {} not found", student_id);
                AvatarError::AvatarNotFound(*student_id)
            })
    }

    /// Replace-on-conflict: reuse the previous record id and delete its file.
    ///
    /// Not atomic: a failure after `store` leaves the new file orphaned, and a
    /// failure after `delete` leaves the record pointing at a removed file.
    async fn save_replacing(&self, mut avatar: NewAvatar) -> Result<AvatarId, AvatarError> {
        if let Some(previous) = self.avatars.find_by_student_id(&avatar.student_id).await? {
            tracing::info!(
                "avatar already exists for student {}, deleting outdated file {}",
                avatar.student_id,
                previous.file_path.display()
            );
            self.blobs.delete(&previous.file_path).await?;
            avatar.id = Some(previous.id);
        }

        let saved = self.avatars.save(avatar).await?;
        Ok(saved.id)
    }
}

#[async_trait]
impl<A: AvatarRepository, S: StudentRepository, B: BlobStore> AvatarService
    for AvatarServiceImpl<A, S, B>
{
    async fn upload_avatar(
        &self,
        student_id: &StudentId,
        upload: AvatarUpload,
    ) -> Result<AvatarId, AvatarError> {
        tracing::info!("uploading avatar for student {}", student_id);

        let student = self
            .students
            .find_by_id(student_id)
            .await
            .map_err(|err| AvatarError::storage(err.to_string()))?;
        if student.is_none() {
            tracing::error!("student with id {} not found", student_id);
            return Err(AvatarError::StudentNotFound(*student_id));
        }

        let file_name = upload
            .file_name
            .as_deref()
            .ok_or_else(|| AvatarError::invalid_input("uploaded file has no name"))?;

        self.blobs.ensure_directory().await?;
        let file_path = self.blobs.store(&upload.bytes, file_name).await?;

        let avatar = NewAvatar {
            id: None,
            student_id: *student_id,
            file_path,
            file_size: upload.size,
            media_type: upload
                .content_type
                .unwrap_or_else(|| DEFAULT_MEDIA_TYPE.to_string()),
            data: upload.bytes,
        };

        let lock = self.locks.acquire(*student_id);
        let result = {
            let _guard = lock.lock().await;
            self.save_replacing(avatar).await
        };
        drop(lock);
        self.locks.release(*student_id);

        result
    }

    async fn get_avatar_from_db(
        &self,
        student_id: &StudentId,
    ) -> Result<AvatarRecord, AvatarError> {
        tracing::info!("reading avatar for student {} from the database", student_id);
        self.find_existing(student_id).await
    }

    async fn get_avatar_from_directory(
        &self,
        student_id: &StudentId,
    ) -> Result<AvatarView, AvatarError> {
        tracing::info!("reading avatar for student {} from disk", student_id);
        let avatar = self.find_existing(student_id).await?;

        let bytes = self.blobs.read(&avatar.file_path).await.inspect_err(|err| {
            tracing::error!("failed to read image file: {}", err);
        })?;

        Ok(AvatarView::new(avatar.media_type, bytes))
    }

    async fn list_avatars(
        &self,
        page_number: i64,
        page_size: i64,
    ) -> Result<Vec<AvatarRecord>, AvatarError> {
        let page = PageRequest::new(page_number, page_size).ok_or_else(|| {
            tracing::error!(
                "invalid page parameters: number={}, size={}",
                page_number,
                page_size
            );
            AvatarError::invalid_input("page number and page size must be at least 1")
        })?;

        self.avatars
            .find_all_paged(page.offset(), page.limit())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::{
        filesystem::FilesystemBlobStore,
        mock::{MockAvatarRepository, MockStudentRepository},
    };
    use crate::domain::models::{AvatarUpload, Student};

    struct Fixture {
        service: AvatarServiceImpl<MockAvatarRepository, MockStudentRepository, FilesystemBlobStore>,
        avatars: Arc<MockAvatarRepository>,
        root: std::path::PathBuf,
        _dir: tempfile::TempDir,
    }

    fn student(id: i64) -> Student {
        Student {
            id: StudentId::new(id),
            name: format!("Student {id}"),
            age: 15,
            faculty_id: None,
        }
    }

    fn fixture() -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("avatars");
        let avatars = Arc::new(MockAvatarRepository::new());
        let students = Arc::new(MockStudentRepository::new().with_students(vec![
            student(1),
            student(2),
        ]));
        let blobs = Arc::new(FilesystemBlobStore::new(&root));
        Fixture {
            service: AvatarServiceImpl::new(Arc::clone(&avatars), students, blobs),
            avatars,
            root,
            _dir: dir,
        }
    }

    fn png(bytes: &[u8]) -> AvatarUpload {
        AvatarUpload::new(bytes.to_vec(), "x.png", "image/png")
    }

    fn files_in(root: &std::path::Path) -> usize {
        std::fs::read_dir(root).map(|dir| dir.count()).unwrap_or(0)
    }

    #[tokio::test]
    async fn upload_then_read_back_from_db() {
        let f = fixture();
        let id = StudentId::new(1);

        f.service.upload_avatar(&id, png(b"\x89PNG-data")).await.unwrap();
        let avatar = f.service.get_avatar_from_db(&id).await.unwrap();

        assert_eq!(avatar.data, b"\x89PNG-data");
        assert_eq!(avatar.media_type, "image/png");
        assert_eq!(avatar.file_size, 9);
    }

    #[tokio::test]
    async fn upload_then_read_back_from_directory() {
        let f = fixture();
        let id = StudentId::new(1);

        f.service.upload_avatar(&id, png(b"on-disk")).await.unwrap();
        let view = f.service.get_avatar_from_directory(&id).await.unwrap();

        assert_eq!(view.bytes, b"on-disk");
        assert_eq!(view.media_type, "image/png");
    }

    #[tokio::test]
    async fn reupload_replaces_previous_avatar() {
        let f = fixture();
        let id = StudentId::new(1);

        let first_id = f.service.upload_avatar(&id, png(b"first")).await.unwrap();
        let first_path = f.service.get_avatar_from_db(&id).await.unwrap().file_path;

        let second_id = f.service.upload_avatar(&id, png(b"second")).await.unwrap();
        let second = f.service.get_avatar_from_db(&id).await.unwrap();

        assert_eq!(first_id, second_id);
        assert_eq!(f.avatars.len(), 1);
        assert!(!first_path.exists());
        assert!(second.file_path.exists());
        assert_eq!(second.data, b"second");
        assert_eq!(files_in(&f.root), 1);
    }

    #[tokio::test]
    async fn upload_for_missing_student_writes_nothing() {
        let f = fixture();

        let err = f
            .service
            .upload_avatar(&StudentId::new(99), png(b"data"))
            .await
            .unwrap_err();

        assert!(matches!(err, AvatarError::StudentNotFound(id) if id.as_i64() == 99));
        assert!(!f.root.exists());
        assert!(f.avatars.is_empty());
    }

    #[tokio::test]
    async fn upload_without_extension_is_rejected() {
        let f = fixture();
        let upload = AvatarUpload::new(b"data".to_vec(), "avatar", "image/png");

        let err = f
            .service
            .upload_avatar(&StudentId::new(1), upload)
            .await
            .unwrap_err();

        assert!(matches!(err, AvatarError::InvalidInput(_)));
        assert_eq!(files_in(&f.root), 0);
        assert!(f.avatars.is_empty());
    }

    #[tokio::test]
    async fn upload_without_file_name_is_rejected() {
        let f = fixture();
        let upload = AvatarUpload {
            bytes: b"data".to_vec(),
            file_name: None,
            content_type: None,
            size: 4,
        };

        let err = f
            .service
            .upload_avatar(&StudentId::new(1), upload)
            .await
            .unwrap_err();

        assert!(matches!(err, AvatarError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn missing_content_type_falls_back_to_octet_stream() {
        let f = fixture();
        let id = StudentId::new(2);
        let upload = AvatarUpload {
            bytes: b"raw".to_vec(),
            file_name: Some("raw.bin".to_string()),
            content_type: None,
            size: 3,
        };

        f.service.upload_avatar(&id, upload).await.unwrap();
        let avatar = f.service.get_avatar_from_db(&id).await.unwrap();

        assert_eq!(avatar.media_type, DEFAULT_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn reupload_fails_when_previous_file_is_gone() {
        let f = fixture();
        let id = StudentId::new(1);

        f.service.upload_avatar(&id, png(b"first")).await.unwrap();
        let previous = f.service.get_avatar_from_db(&id).await.unwrap();
        std::fs::remove_file(&previous.file_path).unwrap();

        let err = f.service.upload_avatar(&id, png(b"second")).await.unwrap_err();

        assert!(matches!(err, AvatarError::Io(_)));
        let unchanged = f.service.get_avatar_from_db(&id).await.unwrap();
        assert_eq!(unchanged.data, b"first");
    }

    #[tokio::test]
    async fn missing_avatar_is_reported() {
        let f = fixture();

        let from_db = f.service.get_avatar_from_db(&StudentId::new(1)).await;
        let from_dir = f.service.get_avatar_from_directory(&StudentId::new(1)).await;

        assert!(matches!(from_db, Err(AvatarError::AvatarNotFound(_))));
        assert!(matches!(from_dir, Err(AvatarError::AvatarNotFound(_))));
    }

    #[tokio::test]
    async fn unreadable_file_surfaces_read_failure_with_path() {
        let f = fixture();
        let id = StudentId::new(1);

        f.service.upload_avatar(&id, png(b"data")).await.unwrap();
        let stored = f.service.get_avatar_from_db(&id).await.unwrap();
        std::fs::remove_file(&stored.file_path).unwrap();

        let err = f.service.get_avatar_from_directory(&id).await.unwrap_err();

        match err {
            AvatarError::ImageReadFailure { path, .. } => assert_eq!(path, stored.file_path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn concurrent_uploads_for_one_student_keep_a_single_record() {
        let f = fixture();
        let service = Arc::new(f.service);
        let id = StudentId::new(1);

        let uploads = (0..8u8).map(|n| {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.upload_avatar(&id, png(&[n; 4])).await })
        });
        let ids = join_ids(uploads).await;

        assert!(ids.windows(2).all(|pair| pair[0] == pair[1]));
        assert_eq!(f.avatars.len(), 1);
        assert_eq!(files_in(&f.root), 1);
    }

    async fn join_ids(
        handles: impl Iterator<Item = tokio::task::JoinHandle<Result<AvatarId, AvatarError>>>,
    ) -> Vec<AvatarId> {
        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap());
        }
        ids
    }

    #[tokio::test]
    async fn list_avatars_rejects_invalid_pages() {
        let f = fixture();

        assert!(matches!(
            f.service.list_avatars(0, 5).await,
            Err(AvatarError::InvalidInput(_))
        ));
        assert!(matches!(
            f.service.list_avatars(1, 0).await,
            Err(AvatarError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn list_avatars_returns_requested_page() {
        let dir = tempfile::tempdir().unwrap();
        let avatars = Arc::new(MockAvatarRepository::new());
        let students = Arc::new(MockStudentRepository::new().with_students(
            (1..=5).map(student).collect(),
        ));
        let blobs = Arc::new(FilesystemBlobStore::new(dir.path()));
        let service = AvatarServiceImpl::new(Arc::clone(&avatars), students, blobs);

        for n in 1..=5 {
            service
                .upload_avatar(&StudentId::new(n), png(&[n as u8]))
                .await
                .unwrap();
        }

        let first_page = service.list_avatars(1, 2).await.unwrap();
        let last_page = service.list_avatars(3, 2).await.unwrap();

        let students = |page: &[AvatarRecord]| {
            page.iter()
                .map(|avatar| avatar.student_id.as_i64())
                .collect::<Vec<_>>()
        };
        assert_eq!(students(&first_page), vec![1, 2]);
        assert_eq!(students(&last_page), vec![5]);
        assert!(service.list_avatars(4, 2).await.unwrap().is_empty());
    }
}
