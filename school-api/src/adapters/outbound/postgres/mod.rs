mod avatar;
mod faculty;
mod student;

pub use avatar::PostgresAvatarRepository;
pub use faculty::PostgresFacultyRepository;
pub use student::PostgresStudentRepository;
