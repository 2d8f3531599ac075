use async_trait::async_trait;

use crate::domain::{
    models::{Faculty, Student, StudentId},
    DirectoryError,
};

#[async_trait]
pub trait StudentService: Send + Sync + 'static {
    async fn find_student(&self, id: &StudentId) -> Result<Student, DirectoryError>;

    async fn get_all(&self) -> Result<Vec<Student>, DirectoryError>;

    async fn find_by_age(&self, age: i32) -> Result<Vec<Student>, DirectoryError>;

    async fn find_by_age_between(&self, min: i32, max: i32)
        -> Result<Vec<Student>, DirectoryError>;

    async fn students_count(&self) -> Result<i64, DirectoryError>;

    async fn average_age(&self) -> Result<f64, DirectoryError>;

    async fn last_five(&self) -> Result<Vec<Student>, DirectoryError>;

    async fn faculty_of_student(&self, id: &StudentId) -> Result<Faculty, DirectoryError>;
}
