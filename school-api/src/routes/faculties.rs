use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    adapters::inbound::http::{FacultyResponse, StudentResponse},
    app_state::AppState,
    domain::models::{Faculty, FacultyId},
    routes::ApiError,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_faculties))
        .route("/find", get(find_faculties))
        .route("/:id", get(get_faculty))
        .route("/:id/students", get(students_of_faculty))
}

#[derive(Debug, Deserialize)]
struct FindQuery {
    name: Option<String>,
    color: Option<String>,
}

fn to_responses(faculties: Vec<Faculty>) -> Json<Vec<FacultyResponse>> {
    Json(faculties.into_iter().map(FacultyResponse::from).collect())
}

#[instrument(name = "GET /faculty", skip(app_state))]
async fn get_faculties(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<FacultyResponse>>, ApiError> {
    let faculties = app_state.faculty_service.get_all().await?;
    Ok(to_responses(faculties))
}

#[instrument(name = "GET /faculty/:id", skip(app_state))]
async fn get_faculty(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<FacultyResponse>, ApiError> {
    let faculty = app_state
        .faculty_service
        .find_faculty(&FacultyId::new(id))
        .await?;
    Ok(Json(faculty.into()))
}

#[instrument(name = "GET /faculty/:id/students", skip(app_state))]
async fn students_of_faculty(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<StudentResponse>>, ApiError> {
    let students = app_state
        .faculty_service
        .students_of_faculty(&FacultyId::new(id))
        .await?;
    Ok(Json(students.into_iter().map(StudentResponse::from).collect()))
}

/// Name takes precedence over color when both are given.
#[instrument(name = "GET /faculty/find", skip(app_state))]
async fn find_faculties(
    State(app_state): State<AppState>,
    Query(query): Query<FindQuery>,
) -> Result<Json<Vec<FacultyResponse>>, ApiError> {
    let not_blank = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.trim().is_empty());

    let faculties = if not_blank(&query.name) {
        app_state
            .faculty_service
            .find_by_name(query.name.as_deref().unwrap_or_default())
            .await?
    } else if not_blank(&query.color) {
        app_state
            .faculty_service
            .find_by_color(query.color.as_deref().unwrap_or_default())
            .await?
    } else {
        return Err(ApiError::bad_request("either name or color is required"));
    };

    Ok(to_responses(faculties))
}
