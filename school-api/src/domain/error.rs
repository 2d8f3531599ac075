use std::path::PathBuf;

use thiserror::Error;

use crate::domain::models::{FacultyId, StudentId};

/// Errors that can occur while storing or serving avatars.
#[derive(Debug, Error)]
pub enum AvatarError {
    #[error("student {0} not found")]
    StudentNotFound(StudentId),
    #[error("avatar for student {0} not found")]
    AvatarNotFound(StudentId),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to create avatar directory {}: {source}", path.display())]
    StorageInit {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read image file at {}: {source}", path.display())]
    ImageReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("avatar file operation failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Storage(String),
}

impl AvatarError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

/// Errors from student and faculty lookups.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("student {0} not found")]
    StudentNotFound(StudentId),
    #[error("faculty {0} not found")]
    FacultyNotFound(FacultyId),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{0}")]
    Storage(String),
}

impl DirectoryError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
