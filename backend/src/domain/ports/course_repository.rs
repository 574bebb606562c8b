//! Driven port for course document storage.

use async_trait::async_trait;

use crate::domain::{Course, CourseId, CoursePatch, CourseProfile, CourseWithStudents};

use super::define_port_error;

define_port_error! {
    /// Errors raised by course repository adapters.
    pub enum CourseRepositoryError {
        /// The store could not be reached.
        Connection { message: String } =>
            "course repository connection failed: {message}",
        /// A query or mutation failed during execution.
        Query { message: String } =>
            "course repository query failed: {message}",
    }
}

/// Storage and retrieval of [`Course`] documents.
///
/// Mirrors [`super::StudentRepository`]; the student reference list is
/// stored as given, duplicates included.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Store a new course; identifiers are generated here.
    async fn create(&self, profile: &CourseProfile) -> Result<Course, CourseRepositoryError>;

    /// Fetch one course.
    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, CourseRepositoryError>;

    /// Fetch every course.
    async fn find_all(&self) -> Result<Vec<Course>, CourseRepositoryError>;

    /// Apply `patch` and return the document as stored afterwards.
    async fn update(
        &self,
        id: &CourseId,
        patch: &CoursePatch,
    ) -> Result<Option<Course>, CourseRepositoryError>;

    /// Remove a course and return the removed document.
    async fn delete(&self, id: &CourseId) -> Result<Option<Course>, CourseRepositoryError>;

    /// Fetch one course with its students projected to their names.
    /// References to students that no longer exist are dropped.
    async fn find_by_id_with_students(
        &self,
        id: &CourseId,
    ) -> Result<Option<CourseWithStudents>, CourseRepositoryError>;

    /// Overwrite the stored document with `course`, student references
    /// included.
    async fn save(&self, course: &Course) -> Result<(), CourseRepositoryError>;
}
