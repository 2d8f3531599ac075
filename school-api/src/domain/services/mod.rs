mod avatar;
mod faculty;
mod student;

pub use avatar::AvatarServiceImpl;
pub use faculty::FacultyServiceImpl;
pub use student::StudentServiceImpl;
