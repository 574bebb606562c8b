//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters; driving
//! ports (`*Command`, `*Query`) are implemented by domain services and
//! consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod course_repository;
mod courses_command;
mod courses_query;
mod enrollment_command;
mod student_repository;
mod students_command;
mod students_query;

#[cfg(test)]
pub use course_repository::MockCourseRepository;
pub use course_repository::{CourseRepository, CourseRepositoryError};
#[cfg(test)]
pub use courses_command::MockCoursesCommand;
pub use courses_command::CoursesCommand;
#[cfg(test)]
pub use courses_query::MockCoursesQuery;
pub use courses_query::CoursesQuery;
#[cfg(test)]
pub use enrollment_command::MockEnrollmentCommand;
pub use enrollment_command::EnrollmentCommand;
#[cfg(test)]
pub use student_repository::MockStudentRepository;
pub use student_repository::{StudentRepository, StudentRepositoryError};
#[cfg(test)]
pub use students_command::MockStudentsCommand;
pub use students_command::StudentsCommand;
#[cfg(test)]
pub use students_query::MockStudentsQuery;
pub use students_query::StudentsQuery;
