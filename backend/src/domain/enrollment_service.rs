//! Enrolment of a student in a course.
//!
//! The relationship lives on both documents: the course lists the student's
//! storage id and the student carries an enrolment record pointing back. The
//! two writes are independent. When the second one fails the course keeps
//! the reference and nothing repairs it.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::ports::{
    CourseRepository, CourseRepositoryError, EnrollmentCommand, StudentRepository,
    StudentRepositoryError,
};
use crate::domain::{Course, CourseId, Error, Student, StudentId};

/// Message returned when a course cannot be found.
pub const COURSE_NOT_FOUND: &str = "Curso no encontrado";
/// Message returned when a student cannot be found.
pub const STUDENT_NOT_FOUND: &str = "Alumno no encontrado";
/// Message returned when the course already lists the student.
pub const ALREADY_ENROLLED: &str = "El alumno ya está inscripto en este curso";

/// Service implementing [`EnrollmentCommand`].
#[derive(Clone)]
pub struct EnrollmentService<C, S> {
    courses: Arc<C>,
    students: Arc<S>,
}

impl<C, S> EnrollmentService<C, S> {
    /// Create a service over the given repositories.
    pub fn new(courses: Arc<C>, students: Arc<S>) -> Self {
        Self { courses, students }
    }
}

pub(crate) fn map_course_error(error: CourseRepositoryError) -> Error {
    match error {
        CourseRepositoryError::Connection { message } => {
            Error::internal(format!("course repository unavailable: {message}"))
        }
        CourseRepositoryError::Query { message } => {
            Error::internal(format!("course repository error: {message}"))
        }
    }
}

pub(crate) fn map_student_error(error: StudentRepositoryError) -> Error {
    match error {
        StudentRepositoryError::Connection { message } => {
            Error::internal(format!("student repository unavailable: {message}"))
        }
        StudentRepositoryError::Query { message } => {
            Error::internal(format!("student repository error: {message}"))
        }
    }
}

impl<C, S> EnrollmentService<C, S>
where
    C: CourseRepository,
    S: StudentRepository,
{
    async fn find_course(&self, raw: &str) -> Result<Option<Course>, Error> {
        let Ok(id) = CourseId::parse(raw) else {
            return Ok(None);
        };
        self.courses.find_by_id(&id).await.map_err(map_course_error)
    }

    async fn find_student(&self, raw: &str) -> Result<Option<Student>, Error> {
        let Ok(id) = StudentId::parse(raw) else {
            return Ok(None);
        };
        self.students.find_by_id(&id).await.map_err(map_student_error)
    }
}

#[async_trait]
impl<C, S> EnrollmentCommand for EnrollmentService<C, S>
where
    C: CourseRepository,
    S: StudentRepository,
{
    async fn enroll(&self, course_id: &str, student_id: &str) -> Result<Student, Error> {
        let course = self.find_course(course_id).await?;
        let student = self.find_student(student_id).await?;
        let mut course = course.ok_or_else(|| Error::not_found(COURSE_NOT_FOUND))?;
        let mut student = student.ok_or_else(|| Error::not_found(STUDENT_NOT_FOUND))?;

        if course.has_student(&student.id) {
            return Err(Error::conflict(ALREADY_ENROLLED));
        }

        course.add_student(student.id);
        self.courses.save(&course).await.map_err(map_course_error)?;

        student.record_enrollment(&course);
        if let Err(error) = self.students.save(&student).await {
            warn!(
                course_id = %course.id,
                student_id = %student.id,
                %error,
                "course lists student but enrolment record was not saved"
            );
            return Err(map_student_error(error));
        }

        info!(course_id = %course.id, student_id = %student.id, "student enrolled");
        Ok(student)
    }
}
