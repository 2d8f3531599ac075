use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    adapters::inbound::http::{AverageAgeResponse, CountResponse, FacultyResponse, StudentResponse},
    app_state::AppState,
    domain::models::{Student, StudentId},
    routes::ApiError,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_students))
        .route("/by-age", get(students_by_age))
        .route("/age-between", get(students_by_age_between))
        .route("/count", get(students_count))
        .route("/average-age", get(average_age))
        .route("/last-five", get(last_five))
        .route("/:id", get(get_student))
        .route("/:id/faculty", get(faculty_of_student))
}

#[derive(Debug, Deserialize)]
struct AgeQuery {
    age: i32,
}

#[derive(Debug, Deserialize)]
struct AgeRangeQuery {
    min: i32,
    max: i32,
}

fn to_responses(students: Vec<Student>) -> Json<Vec<StudentResponse>> {
    Json(students.into_iter().map(StudentResponse::from).collect())
}

#[instrument(name = "GET /student", skip(app_state))]
async fn get_students(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<StudentResponse>>, ApiError> {
    let students = app_state.student_service.get_all().await?;
    Ok(to_responses(students))
}

#[instrument(name = "GET /student/:id", skip(app_state))]
async fn get_student(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<StudentResponse>, ApiError> {
    let student = app_state
        .student_service
        .find_student(&StudentId::new(id))
        .await?;
    Ok(Json(student.into()))
}

#[instrument(name = "GET /student/:id/faculty", skip(app_state))]
async fn faculty_of_student(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<FacultyResponse>, ApiError> {
    let faculty = app_state
        .student_service
        .faculty_of_student(&StudentId::new(id))
        .await?;
    Ok(Json(faculty.into()))
}

#[instrument(name = "GET /student/by-age", skip(app_state))]
async fn students_by_age(
    State(app_state): State<AppState>,
    Query(query): Query<AgeQuery>,
) -> Result<Json<Vec<StudentResponse>>, ApiError> {
    let students = app_state.student_service.find_by_age(query.age).await?;
    Ok(to_responses(students))
}

#[instrument(name = "GET /student/age-between", skip(app_state))]
async fn students_by_age_between(
    State(app_state): State<AppState>,
    Query(query): Query<AgeRangeQuery>,
) -> Result<Json<Vec<StudentResponse>>, ApiError> {
    let students = app_state
        .student_service
        .find_by_age_between(query.min, query.max)
        .await?;
    Ok(to_responses(students))
}

#[instrument(name = "GET /student/count", skip(app_state))]
async fn students_count(
    State(app_state): State<AppState>,
) -> Result<Json<CountResponse>, ApiError> {
    let count = app_state.student_service.students_count().await?;
    Ok(Json(CountResponse { count }))
}

#[instrument(name = "GET /student/average-age", skip(app_state))]
async fn average_age(
    State(app_state): State<AppState>,
) -> Result<Json<AverageAgeResponse>, ApiError> {
    let average_age = app_state.student_service.average_age().await?;
    Ok(Json(AverageAgeResponse { average_age }))
}

#[instrument(name = "GET /student/last-five", skip(app_state))]
async fn last_five(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<StudentResponse>>, ApiError> {
    let students = app_state.student_service.last_five().await?;
    Ok(to_responses(students))
}
