mod avatar;
mod faculty;
mod ids;
mod page;
mod student;

pub use avatar::*;
pub use faculty::*;
pub use ids::*;
pub use page::*;
pub use student::*;
