mod avatar;
mod faculty;
mod student;

pub use avatar::*;
pub use faculty::*;
pub use student::*;
