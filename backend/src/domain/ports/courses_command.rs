//! Driving port for course writes.

use async_trait::async_trait;

use crate::domain::{Course, CourseId, CoursePatch, CourseProfile, Error};

/// Driving port for course mutations.
///
/// Deleting a course leaves enrolment records on students untouched; the
/// student view then shows the course as unresolved.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CoursesCommand: Send + Sync {
    /// Store a new course with generated identifiers and no students.
    async fn create(&self, profile: CourseProfile) -> Result<Course, Error>;

    /// Apply the supplied fields of `patch`.
    async fn update(&self, id: &CourseId, patch: CoursePatch) -> Result<Option<Course>, Error>;

    /// Remove a course, returning the removed document.
    async fn delete(&self, id: &CourseId) -> Result<Option<Course>, Error>;
}
