use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    models::{Faculty, FacultyId, Student},
    ports::{
        inbound::FacultyService,
        outbound::{FacultyRepository, StudentRepository},
    },
    DirectoryError,
};

pub struct FacultyServiceImpl<F, S> {
    faculties: Arc<F>,
    students: Arc<S>,
}

impl<F, S> FacultyServiceImpl<F, S> {
    pub fn new(faculties: Arc<F>, students: Arc<S>) -> Self {
        Self {
            faculties,
            students,
        }
    }
}

fn require_non_blank<'a>(field: &str, value: &'a str) -> Result<&'a str, DirectoryError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DirectoryError::invalid_input(format!(
            "{field} must not be blank"
        )));
    }
    Ok(trimmed)
}

#[async_trait]
impl<F: FacultyRepository, S: StudentRepository> FacultyService for FacultyServiceImpl<F, S> {
    async fn find_faculty(&self, id: &FacultyId) -> Result<Faculty, DirectoryError> {
        tracing::info!("finding faculty with id {}", id);
        self.faculties.find_by_id(id).await?.ok_or_else(|| {
            tracing::error!("faculty with id {} not found", id);
            DirectoryError::FacultyNotFound(*id)
        })
    }

    async fn get_all(&self) -> Result<Vec<Faculty>, DirectoryError> {
        tracing::debug!("getting all faculties");
        self.faculties.find_all().await
    }

    async fn students_of_faculty(&self, id: &FacultyId) -> Result<Vec<Student>, DirectoryError> {
        let faculty = self.find_faculty(id).await?;
        self.students.find_by_faculty(&faculty.id).await
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Faculty>, DirectoryError> {
        tracing::info!("finding faculties with name {}", name);
        let name = require_non_blank("name", name)?;
        self.faculties.find_by_name_ignore_case(name).await
    }

    async fn find_by_color(&self, color: &str) -> Result<Vec<Faculty>, DirectoryError> {
        tracing::info!("finding faculties with color {}", color);
        let color = require_non_blank("color", color)?;
        self.faculties.find_by_color_ignore_case(color).await
    }
}
