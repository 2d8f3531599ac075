use axum::{
    body::Body,
    extract::{DefaultBodyLimit, Multipart, Query, State},
    http::{header, HeaderValue},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    adapters::inbound::http::AvatarResponse,
    app_state::AppState,
    domain::models::{AvatarUpload, AvatarView, StudentId, DEFAULT_MEDIA_TYPE},
    routes::ApiError,
};

const AVATAR_UPLOAD_BODY_LIMIT: usize = 10 * 1024 * 1024;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/upload", post(upload_avatar))
        .route_layer(DefaultBodyLimit::max(AVATAR_UPLOAD_BODY_LIMIT))
        .route("/get/from-db", get(avatar_from_db))
        .route("/get/from-directory", get(avatar_from_directory))
        .route("/list", get(list_avatars))
}

#[derive(Debug, Deserialize)]
struct UploadQuery {
    #[serde(rename = "studentId")]
    student_id: i64,
}

#[derive(Debug, Deserialize)]
struct StudentQuery {
    #[serde(rename = "studentID", alias = "studentId")]
    student_id: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageQuery {
    page_number: i64,
    page_size: i64,
}

#[instrument(name = "POST /avatar/upload", skip(app_state, multipart))]
async fn upload_avatar(
    State(app_state): State<AppState>,
    Query(query): Query<UploadQuery>,
    mut multipart: Multipart,
) -> Result<Json<i64>, ApiError> {
    let upload = extract_upload_from_multipart(&mut multipart).await?;

    let id = app_state
        .avatar_service
        .upload_avatar(&StudentId::new(query.student_id), upload)
        .await?;

    Ok(Json(id.as_i64()))
}

#[instrument(name = "GET /avatar/get/from-db", skip(app_state))]
async fn avatar_from_db(
    State(app_state): State<AppState>,
    Query(query): Query<StudentQuery>,
) -> Result<Response, ApiError> {
    let avatar = app_state
        .avatar_service
        .get_avatar_from_db(&StudentId::new(query.student_id))
        .await?;

    Ok(image_response(AvatarView::from(avatar)))
}

#[instrument(name = "GET /avatar/get/from-directory", skip(app_state))]
async fn avatar_from_directory(
    State(app_state): State<AppState>,
    Query(query): Query<StudentQuery>,
) -> Result<Response, ApiError> {
    let view = app_state
        .avatar_service
        .get_avatar_from_directory(&StudentId::new(query.student_id))
        .await?;

    Ok(image_response(view))
}

#[instrument(name = "GET /avatar/list", skip(app_state))]
async fn list_avatars(
    State(app_state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<AvatarResponse>>, ApiError> {
    let avatars = app_state
        .avatar_service
        .list_avatars(query.page_number, query.page_size)
        .await?;

    Ok(Json(avatars.into_iter().map(AvatarResponse::from).collect()))
}

fn image_response(view: AvatarView) -> Response {
    let content_type = HeaderValue::from_str(&view.media_type)
        .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_MEDIA_TYPE));
    let content_length = view.bytes.len();

    let mut response = Response::new(Body::from(view.bytes));
    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, content_type);
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(content_length));

    response
}

async fn extract_upload_from_multipart(
    multipart: &mut Multipart,
) -> Result<AvatarUpload, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::bad_request("failed to parse multipart field"))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|_| ApiError::bad_request("failed to read avatar payload"))?;

        return Ok(AvatarUpload {
            size: bytes.len() as i64,
            bytes: bytes.to_vec(),
            file_name,
            content_type,
        });
    }

    Err(ApiError::bad_request("missing file field"))
}
