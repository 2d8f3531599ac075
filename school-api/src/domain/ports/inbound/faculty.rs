use async_trait::async_trait;

use crate::domain::{
    models::{Faculty, FacultyId, Student},
    DirectoryError,
};

#[async_trait]
pub trait FacultyService: Send + Sync + 'static {
    async fn find_faculty(&self, id: &FacultyId) -> Result<Faculty, DirectoryError>;

    async fn get_all(&self) -> Result<Vec<Faculty>, DirectoryError>;

    async fn students_of_faculty(&self, id: &FacultyId) -> Result<Vec<Student>, DirectoryError>;

    async fn find_by_name(&self, name: &str) -> Result<Vec<Faculty>, DirectoryError>;

    async fn find_by_color(&self, color: &str) -> Result<Vec<Faculty>, DirectoryError>;
}
