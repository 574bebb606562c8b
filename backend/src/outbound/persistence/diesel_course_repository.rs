//! PostgreSQL-backed `CourseRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{CourseRepository, CourseRepositoryError};
use crate::domain::{
    Course, CourseId, CoursePatch, CourseProfile, CourseWithStudents, PublicId, StudentId,
    StudentSummary,
};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{CourseDocumentRow, CoursePatchRow, CourseRow, NewCourseRow};
use super::pool::{DbPool, PoolError};
use super::schema::{alumnos, cursos};

/// Diesel-backed implementation of the `CourseRepository` port.
#[derive(Clone)]
pub struct DieselCourseRepository {
    pool: DbPool,
}

impl DieselCourseRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CourseRepositoryError {
    map_basic_pool_error(error, CourseRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> CourseRepositoryError {
    map_basic_diesel_error(
        error,
        CourseRepositoryError::query,
        CourseRepositoryError::connection,
    )
}

pub(super) fn row_to_course(row: CourseRow) -> Course {
    let CourseRow {
        id,
        public_id,
        nombre,
        descripcion,
        alumnos,
    } = row;
    Course {
        id: CourseId::from_uuid(id),
        public_id: PublicId::from(public_id),
        name: nombre,
        description: descripcion,
        students: alumnos.into_iter().map(StudentId::from_uuid).collect(),
    }
}

fn student_uuids(course: &Course) -> Vec<Uuid> {
    course.students.iter().map(|id| *id.as_uuid()).collect()
}

#[async_trait]
impl CourseRepository for DieselCourseRepository {
    async fn create(&self, profile: &CourseProfile) -> Result<Course, CourseRepositoryError> {
        let course = Course::new(profile.clone());
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let students = student_uuids(&course);
        let new_row = NewCourseRow {
            id: *course.id.as_uuid(),
            public_id: course.public_id.as_str(),
            nombre: &course.name,
            descripcion: &course.description,
            alumnos: &students,
        };

        diesel::insert_into(cursos::table)
            .values(&new_row)
            .returning(CourseRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(row_to_course)
            .map_err(map_diesel_error)
    }

    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, CourseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = cursos::table
            .find(*id.as_uuid())
            .select(CourseRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_course))
    }

    async fn find_all(&self) -> Result<Vec<Course>, CourseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CourseRow> = cursos::table
            .select(CourseRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_course).collect())
    }

    async fn update(
        &self,
        id: &CourseId,
        patch: &CoursePatch,
    ) -> Result<Option<Course>, CourseRepositoryError> {
        if patch.is_empty() {
            return self.find_by_id(id).await;
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changes = CoursePatchRow {
            nombre: patch.name.as_deref(),
            descripcion: patch.description.as_deref(),
        };

        let row = diesel::update(cursos::table.find(*id.as_uuid()))
            .set(&changes)
            .returning(CourseRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_course))
    }

    async fn delete(&self, id: &CourseId) -> Result<Option<Course>, CourseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::delete(cursos::table.find(*id.as_uuid()))
            .returning(CourseRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_course))
    }

    async fn find_by_id_with_students(
        &self,
        id: &CourseId,
    ) -> Result<Option<CourseWithStudents>, CourseRepositoryError> {
        let Some(course) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        if course.students.is_empty() {
            return Ok(Some(CourseWithStudents::expand(course, |_| None)));
        }

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let names: Vec<(Uuid, String, String)> = alumnos::table
            .filter(alumnos::id.eq_any(student_uuids(&course)))
            .select((alumnos::id, alumnos::nombre, alumnos::apellido))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(Some(CourseWithStudents::expand(course, |student_id| {
            names
                .iter()
                .find(|(id, _, _)| id == student_id.as_uuid())
                .map(|(id, nombre, apellido)| StudentSummary {
                    id: StudentId::from_uuid(*id),
                    first_name: nombre.clone(),
                    last_name: apellido.clone(),
                })
        })))
    }

    async fn save(&self, course: &Course) -> Result<(), CourseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let students = student_uuids(course);
        let document = CourseDocumentRow {
            public_id: course.public_id.as_str(),
            nombre: &course.name,
            descripcion: &course.description,
            alumnos: &students,
        };

        let updated = diesel::update(cursos::table.find(*course.id.as_uuid()))
            .set(&document)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if updated == 0 {
            return Err(CourseRepositoryError::query("course not found for update"));
        }
        Ok(())
    }
}
