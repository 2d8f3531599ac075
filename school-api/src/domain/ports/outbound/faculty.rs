use async_trait::async_trait;

use crate::domain::{
    models::{Faculty, FacultyId},
    DirectoryError,
};

/// Outbound port for reading faculties.
#[async_trait]
pub trait FacultyRepository: Send + Sync + 'static {
    async fn find_by_id(&self, id: &FacultyId) -> Result<Option<Faculty>, DirectoryError>;

    async fn find_all(&self) -> Result<Vec<Faculty>, DirectoryError>;

    async fn find_by_name_ignore_case(&self, name: &str) -> Result<Vec<Faculty>, DirectoryError>;

    async fn find_by_color_ignore_case(&self, color: &str)
        -> Result<Vec<Faculty>, DirectoryError>;
}
