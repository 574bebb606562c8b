//! Course services implementing the course driving ports.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::enrollment_service::map_course_error;
use crate::domain::ports::{CourseRepository, CoursesCommand, CoursesQuery};
use crate::domain::{Course, CourseId, CoursePatch, CourseProfile, CourseWithStudents, Error};

/// Service implementing [`CoursesCommand`] and [`CoursesQuery`].
#[derive(Clone)]
pub struct CourseService<R> {
    repo: Arc<R>,
}

impl<R> CourseService<R> {
    /// Create a service over the given repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> CoursesCommand for CourseService<R>
where
    R: CourseRepository,
{
    async fn create(&self, profile: CourseProfile) -> Result<Course, Error> {
        self.repo.create(&profile).await.map_err(map_course_error)
    }

    async fn update(&self, id: &CourseId, patch: CoursePatch) -> Result<Option<Course>, Error> {
        self.repo.update(id, &patch).await.map_err(map_course_error)
    }

    async fn delete(&self, id: &CourseId) -> Result<Option<Course>, Error> {
        self.repo.delete(id).await.map_err(map_course_error)
    }
}

#[async_trait]
impl<R> CoursesQuery for CourseService<R>
where
    R: CourseRepository,
{
    async fn list(&self) -> Result<Vec<Course>, Error> {
        self.repo.find_all().await.map_err(map_course_error)
    }

    async fn fetch_with_students(
        &self,
        id: &CourseId,
    ) -> Result<Option<CourseWithStudents>, Error> {
        self.repo
            .find_by_id_with_students(id)
            .await
            .map_err(map_course_error)
    }
}
