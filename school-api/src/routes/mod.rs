pub(crate) mod avatars;
pub(crate) mod error;
pub(crate) mod faculties;
pub(crate) mod students;

pub(crate) use error::ApiError;
