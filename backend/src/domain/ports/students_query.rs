//! Driving port for student reads.

use async_trait::async_trait;

use crate::domain::{Error, Student, StudentId, StudentWithCourses};

/// Driving port for reading students.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentsQuery: Send + Sync {
    /// List every student with unexpanded enrolment records.
    async fn list(&self) -> Result<Vec<Student>, Error>;

    /// Fetch one student with each enrolment's course document resolved.
    async fn fetch_with_courses(
        &self,
        id: &StudentId,
    ) -> Result<Option<StudentWithCourses>, Error>;
}
