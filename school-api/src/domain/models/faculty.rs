use super::FacultyId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faculty {
    pub id: FacultyId,
    pub name: String,
    pub color: String,
}
