//! PostgreSQL-backed `StudentRepository` implementation using Diesel ORM.
//!
//! Enrolment records are stored as a JSONB array on the student row so the
//! document keeps its shape and order.

use std::collections::HashMap;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{StudentRepository, StudentRepositoryError};
use crate::domain::{
    Course, CourseId, EnrollmentRecord, PublicId, Student, StudentId, StudentPatch,
    StudentProfile, StudentWithCourses,
};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::diesel_course_repository::row_to_course;
use super::models::{
    CourseRow, EnrollmentDocument, NewStudentRow, StudentDocumentRow, StudentPatchRow, StudentRow,
};
use super::pool::{DbPool, PoolError};
use super::schema::{alumnos, cursos};

/// Diesel-backed implementation of the `StudentRepository` port.
#[derive(Clone)]
pub struct DieselStudentRepository {
    pool: DbPool,
}

impl DieselStudentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> StudentRepositoryError {
    map_basic_pool_error(error, StudentRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> StudentRepositoryError {
    map_basic_diesel_error(
        error,
        StudentRepositoryError::query,
        StudentRepositoryError::connection,
    )
}

fn encode_enrollments(
    records: &[EnrollmentRecord],
) -> Result<serde_json::Value, StudentRepositoryError> {
    let documents: Vec<EnrollmentDocument> = records
        .iter()
        .map(|record| EnrollmentDocument {
            codigo: record.code.as_str().to_owned(),
            curso: *record.course.as_uuid(),
        })
        .collect();
    serde_json::to_value(documents)
        .map_err(|err| StudentRepositoryError::query(format!("encode enrolments: {err}")))
}

fn decode_enrollments(
    value: serde_json::Value,
) -> Result<Vec<EnrollmentRecord>, StudentRepositoryError> {
    let documents: Vec<EnrollmentDocument> = serde_json::from_value(value)
        .map_err(|err| StudentRepositoryError::query(format!("decode enrolments: {err}")))?;
    Ok(documents
        .into_iter()
        .map(|document| EnrollmentRecord {
            code: PublicId::from(document.codigo),
            course: CourseId::from_uuid(document.curso),
        })
        .collect())
}

fn row_to_student(row: StudentRow) -> Result<Student, StudentRepositoryError> {
    let StudentRow {
        id,
        public_id,
        nombre,
        apellido,
        cursos,
    } = row;
    Ok(Student {
        id: StudentId::from_uuid(id),
        public_id: PublicId::from(public_id),
        first_name: nombre,
        last_name: apellido,
        enrollments: decode_enrollments(cursos)?,
    })
}

fn transpose_row(
    row: Option<StudentRow>,
) -> Result<Option<Student>, StudentRepositoryError> {
    row.map(row_to_student).transpose()
}

#[async_trait]
impl StudentRepository for DieselStudentRepository {
    async fn create(&self, profile: &StudentProfile) -> Result<Student, StudentRepositoryError> {
        let student = Student::new(profile.clone());
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewStudentRow {
            id: *student.id.as_uuid(),
            public_id: student.public_id.as_str(),
            nombre: &student.first_name,
            apellido: &student.last_name,
            cursos: encode_enrollments(&student.enrollments)?,
        };

        let row = diesel::insert_into(alumnos::table)
            .values(&new_row)
            .returning(StudentRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_student(row)
    }

    async fn find_by_id(&self, id: &StudentId) -> Result<Option<Student>, StudentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = alumnos::table
            .find(*id.as_uuid())
            .select(StudentRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        transpose_row(row)
    }

    async fn find_all(&self) -> Result<Vec<Student>, StudentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<StudentRow> = alumnos::table
            .select(StudentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_student).collect()
    }

    async fn update(
        &self,
        id: &StudentId,
        patch: &StudentPatch,
    ) -> Result<Option<Student>, StudentRepositoryError> {
        if patch.is_empty() {
            return self.find_by_id(id).await;
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changes = StudentPatchRow {
            nombre: patch.first_name.as_deref(),
            apellido: patch.last_name.as_deref(),
        };

        let row = diesel::update(alumnos::table.find(*id.as_uuid()))
            .set(&changes)
            .returning(StudentRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        transpose_row(row)
    }

    async fn delete(&self, id: &StudentId) -> Result<Option<Student>, StudentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::delete(alumnos::table.find(*id.as_uuid()))
            .returning(StudentRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        transpose_row(row)
    }

    async fn find_by_id_with_courses(
        &self,
        id: &StudentId,
    ) -> Result<Option<StudentWithCourses>, StudentRepositoryError> {
        let Some(student) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        let course_ids: Vec<Uuid> = student
            .enrollments
            .iter()
            .map(|record| *record.course.as_uuid())
            .collect();
        if course_ids.is_empty() {
            return Ok(Some(StudentWithCourses::expand(student, |_| None)));
        }

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<CourseRow> = cursos::table
            .filter(cursos::id.eq_any(course_ids))
            .select(CourseRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let courses: HashMap<CourseId, Course> = rows
            .into_iter()
            .map(row_to_course)
            .map(|course| (course.id, course))
            .collect();

        Ok(Some(StudentWithCourses::expand(student, |course_id| {
            courses.get(course_id).cloned()
        })))
    }

    async fn save(&self, student: &Student) -> Result<(), StudentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let document = StudentDocumentRow {
            public_id: student.public_id.as_str(),
            nombre: &student.first_name,
            apellido: &student.last_name,
            cursos: encode_enrollments(&student.enrollments)?,
        };

        let updated = diesel::update(alumnos::table.find(*student.id.as_uuid()))
            .set(&document)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if updated == 0 {
            return Err(StudentRepositoryError::query(
                "student not found for update",
            ));
        }
        Ok(())
    }
}
