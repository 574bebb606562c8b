//! Student HTTP handlers.
//!
//! ```text
//! POST   /alumnos
//! GET    /alumnos
//! GET    /alumnos/{id}
//! PUT    /alumnos/{id}
//! DELETE /alumnos/{id}
//! ```

use actix_web::{delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, STUDENT_NOT_FOUND, StudentId, StudentPatch, StudentProfile};
use crate::inbound::http::ApiResult;
use crate::inbound::http::documents::{StudentDocument, StudentWithCoursesDocument};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require};

const NOMBRE: FieldName = FieldName::new("nombre");
const APELLIDO: FieldName = FieldName::new("apellido");

/// Request body for creating or updating a student.
///
/// Creation requires both fields; updates change only those supplied.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct StudentRequest {
    #[schema(example = "Ana")]
    pub nombre: Option<String>,
    #[schema(example = "Lopez")]
    pub apellido: Option<String>,
}

fn parse_profile(payload: StudentRequest) -> Result<StudentProfile, Error> {
    Ok(StudentProfile {
        first_name: require(payload.nombre, NOMBRE)?,
        last_name: require(payload.apellido, APELLIDO)?,
    })
}

impl From<StudentRequest> for StudentPatch {
    fn from(value: StudentRequest) -> Self {
        Self {
            first_name: value.nombre,
            last_name: value.apellido,
        }
    }
}

/// Resolve a path identifier, treating malformed ones as unknown students.
fn student_id(raw: &str) -> Result<StudentId, Error> {
    StudentId::parse(raw).map_err(|_| Error::not_found(STUDENT_NOT_FOUND))
}

/// Create a student.
#[utoipa::path(
    post,
    path = "/alumnos",
    request_body = StudentRequest,
    responses(
        (status = 200, description = "Created student", body = StudentDocument),
        (status = 400, description = "Missing field or malformed body", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["alumnos"],
    operation_id = "createStudent"
)]
#[post("/alumnos")]
pub async fn create_student(
    state: web::Data<HttpState>,
    payload: web::Json<StudentRequest>,
) -> ApiResult<web::Json<StudentDocument>> {
    let profile = parse_profile(payload.into_inner())?;
    let student = state.students.create(profile).await?;
    Ok(web::Json(student.into()))
}

/// List every student.
#[utoipa::path(
    get,
    path = "/alumnos",
    responses(
        (status = 200, description = "All students", body = [StudentDocument]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["alumnos"],
    operation_id = "listStudents"
)]
#[get("/alumnos")]
pub async fn list_students(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<StudentDocument>>> {
    let students = state.students_query.list().await?;
    Ok(web::Json(students.into_iter().map(Into::into).collect()))
}

/// Fetch a student with its courses expanded.
#[utoipa::path(
    get,
    path = "/alumnos/{id}",
    params(("id" = String, Path, description = "Student storage identifier")),
    responses(
        (status = 200, description = "Student with courses", body = StudentWithCoursesDocument),
        (status = 404, description = "Alumno no encontrado", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["alumnos"],
    operation_id = "getStudent"
)]
#[get("/alumnos/{id}")]
pub async fn get_student(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<StudentWithCoursesDocument>> {
    let id = student_id(&path)?;
    let student = state
        .students_query
        .fetch_with_courses(&id)
        .await?
        .ok_or_else(|| Error::not_found(STUDENT_NOT_FOUND))?;
    Ok(web::Json(student.into()))
}

/// Update the supplied fields of a student.
#[utoipa::path(
    put,
    path = "/alumnos/{id}",
    params(("id" = String, Path, description = "Student storage identifier")),
    request_body = StudentRequest,
    responses(
        (status = 200, description = "Updated student", body = StudentDocument),
        (status = 404, description = "Alumno no encontrado", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["alumnos"],
    operation_id = "updateStudent"
)]
#[put("/alumnos/{id}")]
pub async fn update_student(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<StudentRequest>,
) -> ApiResult<web::Json<StudentDocument>> {
    let id = student_id(&path)?;
    let student = state
        .students
        .update(&id, payload.into_inner().into())
        .await?
        .ok_or_else(|| Error::not_found(STUDENT_NOT_FOUND))?;
    Ok(web::Json(student.into()))
}

/// Delete a student. Courses keep their reference to it.
#[utoipa::path(
    delete,
    path = "/alumnos/{id}",
    params(("id" = String, Path, description = "Student storage identifier")),
    responses(
        (status = 200, description = "Deleted student", body = StudentDocument),
        (status = 404, description = "Alumno no encontrado", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["alumnos"],
    operation_id = "deleteStudent"
)]
#[delete("/alumnos/{id}")]
pub async fn delete_student(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<StudentDocument>> {
    let id = student_id(&path)?;
    let student = state
        .students
        .delete(&id)
        .await?
        .ok_or_else(|| Error::not_found(STUDENT_NOT_FOUND))?;
    Ok(web::Json(student.into()))
}
