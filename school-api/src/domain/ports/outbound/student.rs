use async_trait::async_trait;

use crate::domain::{
    models::{FacultyId, Student, StudentId},
    DirectoryError,
};

/// Outbound port for reading students.
#[async_trait]
pub trait StudentRepository: Send + Sync + 'static {
    async fn find_by_id(&self, id: &StudentId) -> Result<Option<Student>, DirectoryError>;

    async fn find_all(&self) -> Result<Vec<Student>, DirectoryError>;

    async fn find_by_age(&self, age: i32) -> Result<Vec<Student>, DirectoryError>;

    /// Inclusive on both ends.
    async fn find_by_age_between(&self, min: i32, max: i32)
        -> Result<Vec<Student>, DirectoryError>;

    async fn find_by_faculty(&self, faculty_id: &FacultyId)
        -> Result<Vec<Student>, DirectoryError>;

    async fn count(&self) -> Result<i64, DirectoryError>;

    /// `None` when there are no students.
    async fn average_age(&self) -> Result<Option<f64>, DirectoryError>;

    /// The `limit` students with the highest ids, highest first.
    async fn find_last(&self, limit: i64) -> Result<Vec<Student>, DirectoryError>;
}
