use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{
    models::{Faculty, FacultyId},
    ports::outbound::FacultyRepository,
    DirectoryError,
};

pub struct PostgresFacultyRepository {
    pool: PgPool,
}

impl PostgresFacultyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct FacultyRow {
    id: i64,
    name: String,
    color: String,
}

impl From<FacultyRow> for Faculty {
    fn from(row: FacultyRow) -> Self {
        Self {
            id: FacultyId::new(row.id),
            name: row.name,
            color: row.color,
        }
    }
}

fn storage_error(err: sqlx::Error) -> DirectoryError {
    DirectoryError::storage(err.to_string())
}

#[async_trait]
impl FacultyRepository for PostgresFacultyRepository {
    async fn find_by_id(&self, id: &FacultyId) -> Result<Option<Faculty>, DirectoryError> {
        let row = sqlx::query_as::<_, FacultyRow>(
            "SELECT id, name, color FROM faculties WHERE id = $1",
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(row.map(Faculty::from))
    }

    async fn find_all(&self) -> Result<Vec<Faculty>, DirectoryError> {
        let rows = sqlx::query_as::<_, FacultyRow>("SELECT id, name, color FROM faculties ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(rows.into_iter().map(Faculty::from).collect())
    }

    async fn find_by_name_ignore_case(&self, name: &str) -> Result<Vec<Faculty>, DirectoryError> {
        let rows = sqlx::query_as::<_, FacultyRow>(
            "SELECT id, name, color FROM faculties WHERE lower(name) = lower($1) ORDER BY id",
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(rows.into_iter().map(Faculty::from).collect())
    }

    async fn find_by_color_ignore_case(
        &self,
        color: &str,
    ) -> Result<Vec<Faculty>, DirectoryError> {
        let rows = sqlx::query_as::<_, FacultyRow>(
            "SELECT id, name, color FROM faculties WHERE lower(color) = lower($1) ORDER BY id",
        )
        .bind(color)
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(rows.into_iter().map(Faculty::from).collect())
    }
}
