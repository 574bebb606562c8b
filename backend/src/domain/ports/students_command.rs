//! Driving port for student writes.
//!
//! Inbound adapters call [`StudentsCommand`] to create, edit and remove
//! student documents. Absence is reported as `Ok(None)` so each adapter can
//! pick its own status code.

use async_trait::async_trait;

use crate::domain::{Error, Student, StudentId, StudentPatch, StudentProfile};

/// Driving port for student mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentsCommand: Send + Sync {
    /// Store a new student with generated identifiers and no enrolments.
    async fn create(&self, profile: StudentProfile) -> Result<Student, Error>;

    /// Apply the supplied fields of `patch`.
    async fn update(&self, id: &StudentId, patch: StudentPatch)
    -> Result<Option<Student>, Error>;

    /// Remove a student, returning the removed document.
    async fn delete(&self, id: &StudentId) -> Result<Option<Student>, Error>;
}
