use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{
    models::{FacultyId, Student, StudentId},
    ports::outbound::StudentRepository,
    DirectoryError,
};

pub struct PostgresStudentRepository {
    pool: PgPool,
}

impl PostgresStudentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct StudentRow {
    id: i64,
    name: String,
    age: i32,
    faculty_id: Option<i64>,
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Self {
            id: StudentId::new(row.id),
            name: row.name,
            age: row.age,
            faculty_id: row.faculty_id.map(FacultyId::new),
        }
    }
}

fn storage_error(err: sqlx::Error) -> DirectoryError {
    DirectoryError::storage(err.to_string())
}

fn into_students(rows: Vec<StudentRow>) -> Vec<Student> {
    rows.into_iter().map(Student::from).collect()
}

#[async_trait]
impl StudentRepository for PostgresStudentRepository {
    async fn find_by_id(&self, id: &StudentId) -> Result<Option<Student>, DirectoryError> {
        let row = sqlx::query_as::<_, StudentRow>(
            "SELECT id, name, age, faculty_id FROM students WHERE id = $1",
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(row.map(Student::from))
    }

    async fn find_all(&self) -> Result<Vec<Student>, DirectoryError> {
        let rows = sqlx::query_as::<_, StudentRow>(
            "SELECT id, name, age, faculty_id FROM students ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(into_students(rows))
    }

    async fn find_by_age(&self, age: i32) -> Result<Vec<Student>, DirectoryError> {
        let rows = sqlx::query_as::<_, StudentRow>(
            "SELECT id, name, age, faculty_id FROM students WHERE age = $1 ORDER BY id",
        )
        .bind(age)
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(into_students(rows))
    }

    async fn find_by_age_between(
        &self,
        min: i32,
        max: i32,
    ) -> Result<Vec<Student>, DirectoryError> {
        let rows = sqlx::query_as::<_, StudentRow>(
            r#"
            SELECT id, name, age, faculty_id
            FROM students
            WHERE age BETWEEN $1 AND $2
            ORDER BY id
            "#,
        )
        .bind(min)
        .bind(max)
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(into_students(rows))
    }

    async fn find_by_faculty(
        &self,
        faculty_id: &FacultyId,
    ) -> Result<Vec<Student>, DirectoryError> {
        let rows = sqlx::query_as::<_, StudentRow>(
            "SELECT id, name, age, faculty_id FROM students WHERE faculty_id = $1 ORDER BY id",
        )
        .bind(faculty_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(into_students(rows))
    }

    async fn count(&self) -> Result<i64, DirectoryError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students")
            .fetch_one(&self.pool)
            .await
            .map_err(storage_error)
    }

    async fn average_age(&self) -> Result<Option<f64>, DirectoryError> {
        sqlx::query_scalar::<_, Option<f64>>("SELECT AVG(age)::DOUBLE PRECISION FROM students")
            .fetch_one(&self.pool)
            .await
            .map_err(storage_error)
    }

    async fn find_last(&self, limit: i64) -> Result<Vec<Student>, DirectoryError> {
        let rows = sqlx::query_as::<_, StudentRow>(
            "SELECT id, name, age, faculty_id FROM students ORDER BY id DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(into_students(rows))
    }
}
