use super::{FacultyId, StudentId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub age: i32,
    pub faculty_id: Option<FacultyId>,
}
