//! Driving port for enrolling a student in a course.
//!
//! Identifiers arrive as raw strings: a malformed identifier names nothing,
//! and the course must still be checked before the student so the reported
//! failure does not depend on which identifier is malformed.

use async_trait::async_trait;

use crate::domain::{Error, Student};

/// Driving port for enrolments.
///
/// Failures:
/// - [`crate::domain::ErrorCode::NotFound`] with "Curso no encontrado" when
///   the course is absent (checked first), or "Alumno no encontrado" when the
///   student is absent.
/// - [`crate::domain::ErrorCode::Conflict`] when the course already lists
///   the student.
/// - [`crate::domain::ErrorCode::InternalError`] when either write fails.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentCommand: Send + Sync {
    /// Link the student to the course on both documents and return the
    /// student as saved.
    async fn enroll(&self, course_id: &str, student_id: &str) -> Result<Student, Error>;
}
