//! Course and enrolment HTTP handlers.
//!
//! ```text
//! POST   /cursos
//! POST   /cursos/{id}/alumnos/{alumnoId}
//! GET    /cursos
//! GET    /cursos/{id}
//! PUT    /cursos/{id}
//! DELETE /cursos/{id}
//! ```
//!
//! Reads and updates of an unknown course answer `200 null`, and deleting
//! one answers with the usual confirmation text; clients depend on both.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{CourseId, CoursePatch, CourseProfile, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::documents::{
    CourseDocument, CourseWithStudentsDocument, StudentDocument,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require};

const NOMBRE: FieldName = FieldName::new("nombre");
const DESCRIPCION: FieldName = FieldName::new("descripcion");

/// Confirmation text returned by course deletion.
pub const COURSE_DELETED: &str = "Curso eliminado correctamente";

/// Request body for creating or updating a course.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CourseRequest {
    #[schema(example = "Algebra")]
    pub nombre: Option<String>,
    #[schema(example = "Intro")]
    pub descripcion: Option<String>,
}

fn parse_profile(payload: CourseRequest) -> Result<CourseProfile, Error> {
    Ok(CourseProfile {
        name: require(payload.nombre, NOMBRE)?,
        description: require(payload.descripcion, DESCRIPCION)?,
    })
}

impl From<CourseRequest> for CoursePatch {
    fn from(value: CourseRequest) -> Self {
        Self {
            name: value.nombre,
            description: value.descripcion,
        }
    }
}

/// Path parameters of the enrolment route.
#[derive(Debug, Deserialize)]
pub struct EnrollmentPath {
    id: String,
    #[serde(rename = "alumnoId")]
    alumno_id: String,
}

/// Create a course.
#[utoipa::path(
    post,
    path = "/cursos",
    request_body = CourseRequest,
    responses(
        (status = 200, description = "Created course", body = CourseDocument),
        (status = 400, description = "Missing field or malformed body", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["cursos"],
    operation_id = "createCourse"
)]
#[post("/cursos")]
pub async fn create_course(
    state: web::Data<HttpState>,
    payload: web::Json<CourseRequest>,
) -> ApiResult<web::Json<CourseDocument>> {
    let profile = parse_profile(payload.into_inner())?;
    let course = state.courses.create(profile).await?;
    Ok(web::Json(course.into()))
}

/// Enrol a student in a course.
#[utoipa::path(
    post,
    path = "/cursos/{id}/alumnos/{alumnoId}",
    params(
        ("id" = String, Path, description = "Course storage identifier"),
        ("alumnoId" = String, Path, description = "Student storage identifier")
    ),
    responses(
        (status = 200, description = "Student after enrolment", body = StudentDocument),
        (status = 400, description = "El alumno ya está inscripto en este curso", body = String, content_type = "text/plain"),
        (status = 404, description = "Curso no encontrado / Alumno no encontrado", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["cursos"],
    operation_id = "enrollStudent"
)]
#[post("/cursos/{id}/alumnos/{alumnoId}")]
pub async fn enroll_student(
    state: web::Data<HttpState>,
    path: web::Path<EnrollmentPath>,
) -> ApiResult<web::Json<StudentDocument>> {
    let EnrollmentPath { id, alumno_id } = path.into_inner();
    let student = state.enrollment.enroll(&id, &alumno_id).await?;
    Ok(web::Json(student.into()))
}

/// List every course.
#[utoipa::path(
    get,
    path = "/cursos",
    responses(
        (status = 200, description = "All courses", body = [CourseDocument]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["cursos"],
    operation_id = "listCourses"
)]
#[get("/cursos")]
pub async fn list_courses(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<CourseDocument>>> {
    let courses = state.courses_query.list().await?;
    Ok(web::Json(courses.into_iter().map(Into::into).collect()))
}

/// Fetch a course with its students' names, or `null`.
#[utoipa::path(
    get,
    path = "/cursos/{id}",
    params(("id" = String, Path, description = "Course storage identifier")),
    responses(
        (status = 200, description = "Course with students, or null", body = CourseWithStudentsDocument),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["cursos"],
    operation_id = "getCourse"
)]
#[get("/cursos/{id}")]
pub async fn get_course(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Option<CourseWithStudentsDocument>>> {
    let Ok(id) = CourseId::parse(&path) else {
        return Ok(web::Json(None));
    };
    let course = state.courses_query.fetch_with_students(&id).await?;
    Ok(web::Json(course.map(Into::into)))
}

/// Update the supplied fields of a course, answering `null` when absent.
#[utoipa::path(
    put,
    path = "/cursos/{id}",
    params(("id" = String, Path, description = "Course storage identifier")),
    request_body = CourseRequest,
    responses(
        (status = 200, description = "Updated course, or null", body = CourseDocument),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["cursos"],
    operation_id = "updateCourse"
)]
#[put("/cursos/{id}")]
pub async fn update_course(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<CourseRequest>,
) -> ApiResult<web::Json<Option<CourseDocument>>> {
    let Ok(id) = CourseId::parse(&path) else {
        return Ok(web::Json(None));
    };
    let course = state.courses.update(&id, payload.into_inner().into()).await?;
    Ok(web::Json(course.map(Into::into)))
}

/// Delete a course. Student enrolment records keep pointing at it.
#[utoipa::path(
    delete,
    path = "/cursos/{id}",
    params(("id" = String, Path, description = "Course storage identifier")),
    responses(
        (status = 200, description = "Curso eliminado correctamente", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["cursos"],
    operation_id = "deleteCourse"
)]
#[delete("/cursos/{id}")]
pub async fn delete_course(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    if let Ok(id) = CourseId::parse(&path) {
        state.courses.delete(&id).await?;
    }
    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(COURSE_DELETED))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockCoursesQuery;
    use crate::domain::{ErrorCode, STUDENT_NOT_FOUND};
    use crate::inbound::http::test_utils::{memory_app, memory_state, read_text, state_app};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::{Value, json};
    use std::sync::Arc;

    #[rstest]
    fn parse_profile_requires_descripcion() {
        let payload = CourseRequest {
            nombre: Some("Algebra".to_owned()),
            descripcion: None,
        };

        let error = parse_profile(payload).expect_err("missing descripcion");

        assert_eq!(error.code(), ErrorCode::InvalidRequest);
    }

    #[rstest]
    #[case("not-a-uuid")]
    #[case("3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    #[actix_web::test]
    async fn unknown_course_reads_and_updates_answer_null(#[case] id: &str) {
        let app = actix_test::init_service(memory_app()).await;

        let fetched: Value = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::get().uri(&format!("/cursos/{id}")).to_request(),
        )
        .await;
        let updated: Value = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::put()
                .uri(&format!("/cursos/{id}"))
                .set_json(json!({"nombre": "Calculo"}))
                .to_request(),
        )
        .await;

        assert_eq!(fetched, Value::Null);
        assert_eq!(updated, Value::Null);
    }

    #[rstest]
    #[case("not-a-uuid")]
    #[case("3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    #[actix_web::test]
    async fn deleting_unknown_course_still_confirms(#[case] id: &str) {
        let app = actix_test::init_service(memory_app()).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete().uri(&format!("/cursos/{id}")).to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(read_text(res).await, COURSE_DELETED);
    }

    #[actix_web::test]
    async fn course_expansion_lists_enrolled_student_names() {
        let app = actix_test::init_service(memory_app()).await;
        let course: CourseDocument = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::post()
                .uri("/cursos")
                .set_json(json!({"nombre": "Algebra", "descripcion": "Intro"}))
                .to_request(),
        )
        .await;
        let student: StudentDocument = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::post()
                .uri("/alumnos")
                .set_json(json!({"nombre": "Ana", "apellido": "Lopez"}))
                .to_request(),
        )
        .await;
        let enrol = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri(&format!(
                    "/cursos/{}/alumnos/{}",
                    course.storage_id, student.storage_id
                ))
                .to_request(),
        )
        .await;
        assert_eq!(enrol.status(), StatusCode::OK);

        let expanded: CourseWithStudentsDocument = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::get()
                .uri(&format!("/cursos/{}", course.storage_id))
                .to_request(),
        )
        .await;

        assert_eq!(expanded.alumnos.len(), 1);
        assert_eq!(expanded.alumnos[0].storage_id, student.storage_id);
        assert_eq!(expanded.alumnos[0].nombre, "Ana");
        assert_eq!(expanded.alumnos[0].apellido, "Lopez");
    }

    #[actix_web::test]
    async fn enrolling_unknown_student_in_known_course_is_not_found() {
        let app = actix_test::init_service(memory_app()).await;
        let course: CourseDocument = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::post()
                .uri("/cursos")
                .set_json(json!({"nombre": "Algebra", "descripcion": "Intro"}))
                .to_request(),
        )
        .await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri(&format!("/cursos/{}/alumnos/missing", course.storage_id))
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(read_text(res).await, STUDENT_NOT_FOUND);
    }

    #[actix_web::test]
    async fn store_failures_answer_the_serialised_error() {
        let mut query = MockCoursesQuery::new();
        query.expect_list().times(1).return_once(|| {
            Err(Error::internal(
                "course repository unavailable: connection refused",
            ))
        });
        let mut state = memory_state();
        state.courses_query = Arc::new(query);
        let app = actix_test::init_service(state_app(state)).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/cursos").to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["code"], "internal_error");
        assert_eq!(
            body["message"],
            "course repository unavailable: connection refused"
        );
        assert!(body["traceId"].is_string());
    }

    #[actix_web::test]
    async fn existing_course_can_be_updated_then_deleted() {
        let app = actix_test::init_service(memory_app()).await;
        let course: CourseDocument = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::post()
                .uri("/cursos")
                .set_json(json!({"nombre": "Algebra", "descripcion": "Intro"}))
                .to_request(),
        )
        .await;
        let uri = format!("/cursos/{}", course.storage_id);

        let updated: CourseDocument = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::put()
                .uri(&uri)
                .set_json(json!({"descripcion": "Avanzado"}))
                .to_request(),
        )
        .await;
        assert_eq!(updated.storage_id, course.storage_id);
        assert_eq!(updated.id, course.id);
        assert_eq!(updated.nombre, "Algebra");
        assert_eq!(updated.descripcion, "Avanzado");

        let deleted =
            actix_test::call_service(&app, actix_test::TestRequest::delete().uri(&uri).to_request())
                .await;
        assert_eq!(deleted.status(), StatusCode::OK);
        assert_eq!(read_text(deleted).await, COURSE_DELETED);

        let fetched: Value = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::get().uri(&uri).to_request(),
        )
        .await;
        assert_eq!(fetched, Value::Null);
    }
}
