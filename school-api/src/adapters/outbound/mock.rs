//! In-memory repository implementations for testing.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::domain::{
    models::{AvatarId, AvatarRecord, Faculty, FacultyId, NewAvatar, Student, StudentId},
    ports::outbound::{AvatarRepository, FacultyRepository, StudentRepository},
    AvatarError, DirectoryError,
};

/// Avatar records keyed by id; ids are handed out sequentially from 1.
#[derive(Clone, Default)]
pub struct MockAvatarRepository {
    records: Arc<RwLock<BTreeMap<i64, AvatarRecord>>>,
}

#[allow(dead_code)]
impl MockAvatarRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().unwrap().is_empty()
    }
}

#[async_trait]
impl AvatarRepository for MockAvatarRepository {
    async fn find_by_student_id(
        &self,
        student_id: &StudentId,
    ) -> Result<Option<AvatarRecord>, AvatarError> {
        let records = self.records.read().unwrap();
        Ok(records
            .values()
            .find(|record| record.student_id == *student_id)
            .cloned())
    }

    async fn save(&self, avatar: NewAvatar) -> Result<AvatarRecord, AvatarError> {
        let mut records = self.records.write().unwrap();
        let id = match avatar.id {
            Some(id) => id,
            None => AvatarId::new(records.keys().next_back().map_or(1, |last| last + 1)),
        };

        let record = avatar.into_record(id);
        records.insert(id.as_i64(), record.clone());
        Ok(record)
    }

    async fn find_all_paged(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<AvatarRecord>, AvatarError> {
        let records = self.records.read().unwrap();
        Ok(records
            .values()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

#[derive(Clone, Default)]
pub struct MockStudentRepository {
    students: Arc<RwLock<BTreeMap<i64, Student>>>,
}

#[allow(dead_code)]
impl MockStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_students(self, students: Vec<Student>) -> Self {
        {
            let mut stored = self.students.write().unwrap();
            for student in students {
                stored.insert(student.id.as_i64(), student);
            }
        }
        self
    }

    fn filtered(&self, predicate: impl Fn(&Student) -> bool) -> Vec<Student> {
        self.students
            .read()
            .unwrap()
            .values()
            .filter(|student| predicate(student))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl StudentRepository for MockStudentRepository {
    async fn find_by_id(&self, id: &StudentId) -> Result<Option<Student>, DirectoryError> {
        Ok(self.students.read().unwrap().get(&id.as_i64()).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Student>, DirectoryError> {
        Ok(self.filtered(|_| true))
    }

    async fn find_by_age(&self, age: i32) -> Result<Vec<Student>, DirectoryError> {
        Ok(self.filtered(|student| student.age == age))
    }

    async fn find_by_age_between(
        &self,
        min: i32,
        max: i32,
    ) -> Result<Vec<Student>, DirectoryError> {
        Ok(self.filtered(|student| (min..=max).contains(&student.age)))
    }

    async fn find_by_faculty(
        &self,
        faculty_id: &FacultyId,
    ) -> Result<Vec<Student>, DirectoryError> {
        Ok(self.filtered(|student| student.faculty_id == Some(*faculty_id)))
    }

    async fn count(&self) -> Result<i64, DirectoryError> {
        Ok(self.students.read().unwrap().len() as i64)
    }

    async fn average_age(&self) -> Result<Option<f64>, DirectoryError> {
        let students = self.students.read().unwrap();
        if students.is_empty() {
            return Ok(None);
        }
        let total: i64 = students.values().map(|student| student.age as i64).sum();
        Ok(Some(total as f64 / students.len() as f64))
    }

    async fn find_last(&self, limit: i64) -> Result<Vec<Student>, DirectoryError> {
        Ok(self
            .students
            .read()
            .unwrap()
            .values()
            .rev()
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

#[derive(Clone, Default)]
pub struct MockFacultyRepository {
    faculties: Arc<RwLock<BTreeMap<i64, Faculty>>>,
}

#[allow(dead_code)]
impl MockFacultyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_faculties(self, faculties: Vec<Faculty>) -> Self {
        {
            let mut stored = self.faculties.write().unwrap();
            for faculty in faculties {
                stored.insert(faculty.id.as_i64(), faculty);
            }
        }
        self
    }

    fn filtered(&self, predicate: impl Fn(&Faculty) -> bool) -> Vec<Faculty> {
        self.faculties
            .read()
            .unwrap()
            .values()
            .filter(|faculty| predicate(faculty))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl FacultyRepository for MockFacultyRepository {
    async fn find_by_id(&self, id: &FacultyId) -> Result<Option<Faculty>, DirectoryError> {
        Ok(self.faculties.read().unwrap().get(&id.as_i64()).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Faculty>, DirectoryError> {
        Ok(self.filtered(|_| true))
    }

    async fn find_by_name_ignore_case(&self, name: &str) -> Result<Vec<Faculty>, DirectoryError> {
        Ok(self.filtered(|faculty| faculty.name.to_lowercase() == name.to_lowercase()))
    }

    async fn find_by_color_ignore_case(
        &self,
        color: &str,
    ) -> Result<Vec<Faculty>, DirectoryError> {
        Ok(self.filtered(|faculty| faculty.color.to_lowercase() == color.to_lowercase()))
    }
}
