//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, test, web};

use crate::Trace;
use crate::domain::{CourseService, EnrollmentService, StudentService};
use crate::inbound::http::configure;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryStore;

/// HTTP state wired to real services over a fresh in-memory store.
pub fn memory_state() -> HttpState {
    let store = Arc::new(InMemoryStore::new());
    let students = Arc::new(StudentService::new(store.clone()));
    let courses = Arc::new(CourseService::new(store.clone()));
    HttpState::new(
        students.clone(),
        students,
        courses.clone(),
        courses,
        Arc::new(EnrollmentService::new(store.clone(), store)),
    )
}

/// Application serving the REST routes from `state`.
pub fn state_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(configure)
}

/// Application serving the REST routes over a fresh in-memory store.
pub fn memory_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    state_app(memory_state())
}

/// Read a response body as UTF-8 text.
pub async fn read_text<B: MessageBody>(res: ServiceResponse<B>) -> String {
    let bytes = test::read_body(res).await;
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}
