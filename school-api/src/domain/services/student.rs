use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    models::{Faculty, Student, StudentId},
    ports::{
        inbound::StudentService,
        outbound::{FacultyRepository, StudentRepository},
    },
    DirectoryError,
};

const LAST_STUDENTS_LIMIT: i64 = 5;

pub struct StudentServiceImpl<S, F> {
    students: Arc<S>,
    faculties: Arc<F>,
}

impl<S, F> StudentServiceImpl<S, F> {
    pub fn new(students: Arc<S>, faculties: Arc<F>) -> Self {
        Self {
            students,
            faculties,
        }
    }
}

#[async_trait]
impl<S: StudentRepository, F: FacultyRepository> StudentService for StudentServiceImpl<S, F> {
    async fn find_student(&self, id: &StudentId) -> Result<Student, DirectoryError> {
        tracing::info!("finding student with id {}", id);
        self.students.find_by_id(id).await?.ok_or_else(|| {
            tracing::error!("student with id {} not found", id);
            DirectoryError::StudentNotFound(*id)
        })
    }

    async fn get_all(&self) -> Result<Vec<Student>, DirectoryError> {
        tracing::info!("getting all students");
        self.students.find_all().await
    }

    async fn find_by_age(&self, age: i32) -> Result<Vec<Student>, DirectoryError> {
        tracing::info!("finding students aged {}", age);
        if age < 0 {
            return Err(DirectoryError::invalid_input("age must not be negative"));
        }
        self.students.find_by_age(age).await
    }

    async fn find_by_age_between(
        &self,
        min: i32,
        max: i32,
    ) -> Result<Vec<Student>, DirectoryError> {
        tracing::info!("finding students aged between {} and {}", min, max);
        if min > max {
            return Err(DirectoryError::invalid_input(format!(
                "minimum age {min} is greater than maximum age {max}"
            )));
        }
        self.students.find_by_age_between(min, max).await
    }

    async fn students_count(&self) -> Result<i64, DirectoryError> {
        self.students.count().await
    }

    async fn average_age(&self) -> Result<f64, DirectoryError> {
        Ok(self.students.average_age().await?.unwrap_or(0.0))
    }

    async fn last_five(&self) -> Result<Vec<Student>, DirectoryError> {
        self.students.find_last(LAST_STUDENTS_LIMIT).await
    }

    async fn faculty_of_student(&self, id: &StudentId) -> Result<Faculty, DirectoryError> {
        let student = self.find_student(id).await?;
        let faculty_id = student.faculty_id.ok_or_else(|| {
            tracing::warn!("student with id {} has no faculty", id);
            DirectoryError::invalid_input(format!("student {id} is not assigned to a faculty"))
        })?;

        self.faculties
            .find_by_id(&faculty_id)
            .await?
            .ok_or(DirectoryError::FacultyNotFound(faculty_id))
    }
}
