//! Domain primitives, services and ports.
//!
//! Purpose: define the student and course documents, the enrolment
//! operation linking them, and the ports through which adapters reach the
//! store and the outside world.
//!
//! Public surface:
//! - `Error`/`ErrorCode`: transport-neutral failure payload.
//! - `Student`/`Course` and their expanded views.
//! - `EnrollmentService`, `StudentService`, `CourseService`: implementations
//!   of the driving ports in [`ports`].

pub mod course;
mod course_service;
mod enrollment_service;
pub mod error;
pub mod ids;
pub mod ports;
pub mod student;
mod student_service;
pub mod trace_id;

pub use self::course::{Course, CoursePatch, CourseProfile, CourseWithStudents};
pub use self::course_service::CourseService;
pub use self::enrollment_service::{
    ALREADY_ENROLLED, COURSE_NOT_FOUND, EnrollmentService, STUDENT_NOT_FOUND,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::ids::{CourseId, InvalidIdentifier, PublicId, StudentId};
pub use self::student::{
    EnrollmentRecord, ExpandedEnrollment, Student, StudentPatch, StudentProfile,
    StudentSummary, StudentWithCourses,
};
pub use self::student_service::StudentService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
