use std::path::PathBuf;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{
    models::{AvatarId, AvatarRecord, NewAvatar, StudentId},
    ports::outbound::AvatarRepository,
    AvatarError,
};

pub struct PostgresAvatarRepository {
    pool: PgPool,
}

impl PostgresAvatarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AvatarRow {
    id: i64,
    student_id: i64,
    file_path: String,
    file_size: i64,
    media_type: String,
    data: Vec<u8>,
}

impl From<AvatarRow> for AvatarRecord {
    fn from(row: AvatarRow) -> Self {
        Self {
            id: AvatarId::new(row.id),
            student_id: StudentId::new(row.student_id),
            file_path: PathBuf::from(row.file_path),
            file_size: row.file_size,
            media_type: row.media_type,
            data: row.data,
        }
    }
}

fn storage_error(err: sqlx::Error) -> AvatarError {
    AvatarError::storage(err.to_string())
}

#[async_trait]
impl AvatarRepository for PostgresAvatarRepository {
    async fn find_by_student_id(
        &self,
        student_id: &StudentId,
    ) -> Result<Option<AvatarRecord>, AvatarError> {
        let row = sqlx::query_as::<_, AvatarRow>(
            r#"
            SELECT id, student_id, file_path, file_size, media_type, data
            FROM avatars
            WHERE student_id = $1
            "#,
        )
        .bind(student_id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(row.map(AvatarRecord::from))
    }

    async fn save(&self, avatar: NewAvatar) -> Result<AvatarRecord, AvatarError> {
        let file_path = avatar.file_path.to_string_lossy().into_owned();

        let row = match avatar.id {
            Some(id) => sqlx::query_as::<_, AvatarRow>(
                r#"
                UPDATE avatars
                SET student_id = $2,
                    file_path = $3,
                    file_size = $4,
                    media_type = $5,
                    data = $6
                WHERE id = $1
                RETURNING id, student_id, file_path, file_size, media_type, data
                "#,
            )
            .bind(id.as_i64())
            .bind(avatar.student_id.as_i64())
            .bind(&file_path)
            .bind(avatar.file_size)
            .bind(&avatar.media_type)
            .bind(&avatar.data)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| AvatarError::storage(format!("avatar {id} no longer exists")))?,
            // The unique student_id constraint turns a racing insert into an update.
            None => sqlx::query_as::<_, AvatarRow>(
                r#"
                INSERT INTO avatars (student_id, file_path, file_size, media_type, data)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (student_id) DO UPDATE
                SET file_path = EXCLUDED.file_path,
                    file_size = EXCLUDED.file_size,
                    media_type = EXCLUDED.media_type,
                    data = EXCLUDED.data
                RETURNING id, student_id, file_path, file_size, media_type, data
                "#,
            )
            .bind(avatar.student_id.as_i64())
            .bind(&file_path)
            .bind(avatar.file_size)
            .bind(&avatar.media_type)
            .bind(&avatar.data)
            .fetch_one(&self.pool)
            .await
            .map_err(storage_error)?,
        };

        Ok(row.into())
    }

    async fn find_all_paged(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<AvatarRecord>, AvatarError> {
        let rows = sqlx::query_as::<_, AvatarRow>(
            r#"
            SELECT id, student_id, file_path, file_size, media_type, data
            FROM avatars
            ORDER BY id
            OFFSET $1
            LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(rows.into_iter().map(AvatarRecord::from).collect())
    }
}
