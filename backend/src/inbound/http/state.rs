//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` and only see driving ports, so they
//! can be exercised without a database.

use std::sync::Arc;

use crate::domain::ports::{
    CoursesCommand, CoursesQuery, EnrollmentCommand, StudentsCommand, StudentsQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub students: Arc<dyn StudentsCommand>,
    pub students_query: Arc<dyn StudentsQuery>,
    pub courses: Arc<dyn CoursesCommand>,
    pub courses_query: Arc<dyn CoursesQuery>,
    pub enrollment: Arc<dyn EnrollmentCommand>,
}

impl HttpState {
    /// Bundle the given port implementations.
    pub fn new(
        students: Arc<dyn StudentsCommand>,
        students_query: Arc<dyn StudentsQuery>,
        courses: Arc<dyn CoursesCommand>,
        courses_query: Arc<dyn CoursesQuery>,
        enrollment: Arc<dyn EnrollmentCommand>,
    ) -> Self {
        Self {
            students,
            students_query,
            courses,
            courses_query,
            enrollment,
        }
    }
}
