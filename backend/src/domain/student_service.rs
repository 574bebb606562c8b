//! Student services implementing the student driving ports.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::enrollment_service::map_student_error;
use crate::domain::ports::{StudentRepository, StudentsCommand, StudentsQuery};
use crate::domain::{
    Error, Student, StudentId, StudentPatch, StudentProfile, StudentWithCourses,
};

/// Service implementing [`StudentsCommand`] and [`StudentsQuery`].
#[derive(Clone)]
pub struct StudentService<R> {
    repo: Arc<R>,
}

impl<R> StudentService<R> {
    /// Create a service over the given repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> StudentsCommand for StudentService<R>
where
    R: StudentRepository,
{
    async fn create(&self, profile: StudentProfile) -> Result<Student, Error> {
        self.repo.create(&profile).await.map_err(map_student_error)
    }

    async fn update(
        &self,
        id: &StudentId,
        patch: StudentPatch,
    ) -> Result<Option<Student>, Error> {
        self.repo.update(id, &patch).await.map_err(map_student_error)
    }

    async fn delete(&self, id: &StudentId) -> Result<Option<Student>, Error> {
        self.repo.delete(id).await.map_err(map_student_error)
    }
}

#[async_trait]
impl<R> StudentsQuery for StudentService<R>
where
    R: StudentRepository,
{
    async fn list(&self) -> Result<Vec<Student>, Error> {
        self.repo.find_all().await.map_err(map_student_error)
    }

    async fn fetch_with_courses(
        &self,
        id: &StudentId,
    ) -> Result<Option<StudentWithCourses>, Error> {
        self.repo
            .find_by_id_with_courses(id)
            .await
            .map_err(map_student_error)
    }
}
