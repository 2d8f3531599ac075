//! Composition root: wires concrete outbound adapters into the domain services.
//!
//! This is the only place that imports concrete outbound adapters.

use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    adapters::outbound::{
        filesystem::FilesystemBlobStore,
        postgres::{PostgresAvatarRepository, PostgresFacultyRepository, PostgresStudentRepository},
    },
    app_state::AppState,
    config::StorageSettings,
    domain::services::{AvatarServiceImpl, FacultyServiceImpl, StudentServiceImpl},
};

pub fn create_app_state(pool: PgPool, storage: &StorageSettings) -> AppState {
    let students = Arc::new(PostgresStudentRepository::new(pool.clone()));
    let faculties = Arc::new(PostgresFacultyRepository::new(pool.clone()));
    let avatars = Arc::new(PostgresAvatarRepository::new(pool));
    let blobs = Arc::new(FilesystemBlobStore::new(&storage.avatar_dir));

    tracing::info!("storing avatars under {}", storage.avatar_dir.display());

    AppState::new(
        Arc::new(AvatarServiceImpl::new(avatars, Arc::clone(&students), blobs)),
        Arc::new(StudentServiceImpl::new(
            Arc::clone(&students),
            Arc::clone(&faculties),
        )),
        Arc::new(FacultyServiceImpl::new(faculties, students)),
    )
}
