//! Builders wiring driving ports to their repositories.

use std::sync::Arc;

use aula::domain::ports::{CourseRepository, StudentRepository};
use aula::domain::{CourseService, EnrollmentService, StudentService};
use aula::inbound::http::state::HttpState;
use aula::outbound::memory::InMemoryStore;
use aula::outbound::persistence::{DieselCourseRepository, DieselStudentRepository};
use tracing::warn;

use super::ServerConfig;

fn build_services<S, C>(students: Arc<S>, courses: Arc<C>) -> HttpState
where
    S: StudentRepository + 'static,
    C: CourseRepository + 'static,
{
    let student_service = Arc::new(StudentService::new(students.clone()));
    let course_service = Arc::new(CourseService::new(courses.clone()));
    HttpState::new(
        student_service.clone(),
        student_service,
        course_service.clone(),
        course_service,
        Arc::new(EnrollmentService::new(courses, students)),
    )
}

/// Build the HTTP state over PostgreSQL when a pool is configured, otherwise
/// over a process-local store.
pub fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => build_services(
            Arc::new(DieselStudentRepository::new(pool.clone())),
            Arc::new(DieselCourseRepository::new(pool.clone())),
        ),
        None => {
            warn!("no database configured; documents are kept in memory and lost on restart");
            let store = Arc::new(InMemoryStore::new());
            build_services(store.clone(), store)
        }
    }
}
