//! OpenAPI documentation for the REST API.
//!
//! Served by Swagger UI in debug builds and printed by the `openapi-dump`
//! binary.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::courses::CourseRequest;
use crate::inbound::http::documents::{
    CourseDocument, CourseWithStudentsDocument, EnrollmentDocument, ExpandedEnrollmentDocument,
    StudentDocument, StudentSummaryDocument, StudentWithCoursesDocument,
};
use crate::inbound::http::students::StudentRequest;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Aula API",
        description = "Students, courses and the enrolments linking them."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::students::create_student,
        crate::inbound::http::students::list_students,
        crate::inbound::http::students::get_student,
        crate::inbound::http::students::update_student,
        crate::inbound::http::students::delete_student,
        crate::inbound::http::courses::create_course,
        crate::inbound::http::courses::enroll_student,
        crate::inbound::http::courses::list_courses,
        crate::inbound::http::courses::get_course,
        crate::inbound::http::courses::update_course,
        crate::inbound::http::courses::delete_course,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        StudentRequest,
        CourseRequest,
        StudentDocument,
        EnrollmentDocument,
        StudentWithCoursesDocument,
        ExpandedEnrollmentDocument,
        CourseDocument,
        CourseWithStudentsDocument,
        StudentSummaryDocument,
    )),
    tags(
        (name = "alumnos", description = "Student documents"),
        (name = "cursos", description = "Course documents and enrolment"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/alumnos")]
    #[case("/alumnos/{id}")]
    #[case("/cursos")]
    #[case("/cursos/{id}")]
    #[case("/cursos/{id}/alumnos/{alumnoId}")]
    #[case("/health/ready")]
    fn document_lists_every_route(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[rstest]
    fn student_document_schema_uses_store_field_names() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_value(&doc).expect("serialise document");
        let properties = &json["components"]["schemas"]["StudentDocument"]["properties"];

        for field in ["_id", "id", "nombre", "apellido", "cursos"] {
            assert!(properties.get(field).is_some(), "missing {field}");
        }
    }
}
