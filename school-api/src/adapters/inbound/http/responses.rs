//! HTTP response types for the school endpoints.
//!
//! These types serialize to the JSON format expected by API clients.

use serde::Serialize;

use crate::domain::models::{AvatarRecord, Faculty, Student};

/// Avatar metadata as listed by the API. The raw bytes are served by the
/// dedicated image endpoints only.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarResponse {
    pub id: i64,
    pub student_id: i64,
    pub file_path: String,
    pub file_size: i64,
    pub media_type: String,
}

impl From<AvatarRecord> for AvatarResponse {
    fn from(record: AvatarRecord) -> Self {
        Self {
            id: record.id.as_i64(),
            student_id: record.student_id.as_i64(),
            file_path: record.file_path.display().to_string(),
            file_size: record.file_size,
            media_type: record.media_type,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    pub id: i64,
    pub name: String,
    pub age: i32,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        Self {
            id: student.id.as_i64(),
            name: student.name,
            age: student.age,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyResponse {
    pub id: i64,
    pub name: String,
    pub color: String,
}

impl From<Faculty> for FacultyResponse {
    fn from(faculty: Faculty) -> Self {
        Self {
            id: faculty.id.as_i64(),
            name: faculty.name,
            color: faculty.color,
        }
    }
}

/// Response for the students-count endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountResponse {
    pub count: i64,
}

/// Response for the average-age endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageAgeResponse {
    pub average_age: f64,
}
