use std::sync::Arc;

use crate::domain::ports::inbound::{AvatarService, FacultyService, StudentService};

#[derive(Clone)]
pub struct AppState {
    pub avatar_service: Arc<dyn AvatarService>,
    pub student_service: Arc<dyn StudentService>,
    pub faculty_service: Arc<dyn FacultyService>,
}

impl AppState {
    pub fn new(
        avatar_service: Arc<dyn AvatarService>,
        student_service: Arc<dyn StudentService>,
        faculty_service: Arc<dyn FacultyService>,
    ) -> Self {
        Self {
            avatar_service,
            student_service,
            faculty_service,
        }
    }
}
