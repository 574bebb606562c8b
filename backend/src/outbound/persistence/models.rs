//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence layer.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::schema::{alumnos, cursos};

/// Row struct for reading from the `cursos` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = cursos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CourseRow {
    pub id: Uuid,
    pub public_id: String,
    pub nombre: String,
    pub descripcion: String,
    pub alumnos: Vec<Uuid>,
}

/// Insertable struct for new course records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = cursos)]
pub(crate) struct NewCourseRow<'a> {
    pub id: Uuid,
    pub public_id: &'a str,
    pub nombre: &'a str,
    pub descripcion: &'a str,
    pub alumnos: &'a [Uuid],
}

/// Partial changeset; `None` columns are left untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = cursos)]
pub(crate) struct CoursePatchRow<'a> {
    pub nombre: Option<&'a str>,
    pub descripcion: Option<&'a str>,
}

/// Full-document changeset used when saving a course.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = cursos)]
pub(crate) struct CourseDocumentRow<'a> {
    pub public_id: &'a str,
    pub nombre: &'a str,
    pub descripcion: &'a str,
    pub alumnos: &'a [Uuid],
}

/// Row struct for reading from the `alumnos` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = alumnos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct StudentRow {
    pub id: Uuid,
    pub public_id: String,
    pub nombre: String,
    pub apellido: String,
    pub cursos: serde_json::Value,
}

/// Insertable struct for new student records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = alumnos)]
pub(crate) struct NewStudentRow<'a> {
    pub id: Uuid,
    pub public_id: &'a str,
    pub nombre: &'a str,
    pub apellido: &'a str,
    pub cursos: serde_json::Value,
}

/// Partial changeset; `None` columns are left untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = alumnos)]
pub(crate) struct StudentPatchRow<'a> {
    pub nombre: Option<&'a str>,
    pub apellido: Option<&'a str>,
}

/// Full-document changeset used when saving a student.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = alumnos)]
pub(crate) struct StudentDocumentRow<'a> {
    pub public_id: &'a str,
    pub nombre: &'a str,
    pub apellido: &'a str,
    pub cursos: serde_json::Value,
}

/// One element of the `alumnos.cursos` JSONB array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct EnrollmentDocument {
    pub codigo: String,
    pub curso: Uuid,
}
