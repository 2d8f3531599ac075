mod avatar;
mod blob_store;
mod faculty;
mod student;

pub use avatar::*;
pub use blob_store::*;
pub use faculty::*;
pub use student::*;
