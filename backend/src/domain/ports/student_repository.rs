//! Driven port for student document storage.
//!
//! Absence is a normal outcome (`Ok(None)`); only store failures are errors.
//! There is no optimistic concurrency: concurrent writes to one document are
//! last-write-wins.

use async_trait::async_trait;

use crate::domain::{Student, StudentId, StudentPatch, StudentProfile, StudentWithCourses};

use super::define_port_error;

define_port_error! {
    /// Errors raised by student repository adapters.
    pub enum StudentRepositoryError {
        /// The store could not be reached.
        Connection { message: String } =>
            "student repository connection failed: {message}",
        /// A query or mutation failed during execution.
        Query { message: String } =>
            "student repository query failed: {message}",
    }
}

/// Storage and retrieval of [`Student`] documents.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Store a new student; identifiers are generated here.
    async fn create(&self, profile: &StudentProfile) -> Result<Student, StudentRepositoryError>;

    /// Fetch one student.
    async fn find_by_id(&self, id: &StudentId) -> Result<Option<Student>, StudentRepositoryError>;

    /// Fetch every student, unfiltered and unpaginated.
    async fn find_all(&self) -> Result<Vec<Student>, StudentRepositoryError>;

    /// Apply `patch` and return the document as stored afterwards.
    async fn update(
        &self,
        id: &StudentId,
        patch: &StudentPatch,
    ) -> Result<Option<Student>, StudentRepositoryError>;

    /// Remove a student and return the removed document. Courses keep any
    /// reference to it.
    async fn delete(&self, id: &StudentId) -> Result<Option<Student>, StudentRepositoryError>;

    /// Fetch one student with each enrolment record's course expanded.
    async fn find_by_id_with_courses(
        &self,
        id: &StudentId,
    ) -> Result<Option<StudentWithCourses>, StudentRepositoryError>;

    /// Overwrite the stored document with `student`, enrolments included.
    ///
    /// Fails with [`StudentRepositoryError::Query`] when the document no
    /// longer exists.
    async fn save(&self, student: &Student) -> Result<(), StudentRepositoryError>;
}
