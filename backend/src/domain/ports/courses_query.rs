//! Driving port for course reads.

use async_trait::async_trait;

use crate::domain::{Course, CourseId, CourseWithStudents, Error};

/// Driving port for reading courses.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CoursesQuery: Send + Sync {
    /// List every course with unexpanded student references.
    async fn list(&self) -> Result<Vec<Course>, Error>;

    /// Fetch one course with its students projected to their names.
    async fn fetch_with_students(
        &self,
        id: &CourseId,
    ) -> Result<Option<CourseWithStudents>, Error>;
}
