//! HTTP inbound adapter exposing the REST endpoints.

pub mod courses;
pub mod documents;
pub mod error;
pub mod health;
pub mod state;
pub mod students;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register the student and course routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::json_config())
        .service(students::create_student)
        .service(students::list_students)
        .service(students::get_student)
        .service(students::update_student)
        .service(students::delete_student)
        .service(courses::create_course)
        .service(courses::enroll_student)
        .service(courses::list_courses)
        .service(courses::get_course)
        .service(courses::update_course)
        .service(courses::delete_course);
}
