//! In-process document store used when no database URL is configured.
//!
//! One [`InMemoryStore`] implements both repository ports over a shared
//! mutex so reference expansion sees a consistent view of both collections.
//! Documents are kept in insertion order. Contents are lost on restart.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    CourseRepository, CourseRepositoryError, StudentRepository, StudentRepositoryError,
};
use crate::domain::{
    Course, CourseId, CoursePatch, CourseProfile, CourseWithStudents, Student, StudentId,
    StudentPatch, StudentProfile, StudentWithCourses,
};

#[derive(Debug, Default)]
struct Documents {
    students: Vec<Student>,
    courses: Vec<Course>,
}

impl Documents {
    fn student(&self, id: &StudentId) -> Option<&Student> {
        self.students.iter().find(|student| student.id == *id)
    }

    fn course(&self, id: &CourseId) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == *id)
    }

    fn student_mut(&mut self, id: &StudentId) -> Option<&mut Student> {
        self.students.iter_mut().find(|student| student.id == *id)
    }

    fn course_mut(&mut self, id: &CourseId) -> Option<&mut Course> {
        self.courses.iter_mut().find(|course| course.id == *id)
    }
}

/// Shared in-memory implementation of the student and course repositories.
/// Clones share the same documents.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    documents: Arc<Mutex<Documents>>,
}

const POISONED: &str = "in-memory store lock poisoned";

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn students(&self) -> Result<MutexGuard<'_, Documents>, StudentRepositoryError> {
        self.documents
            .lock()
            .map_err(|_| StudentRepositoryError::query(POISONED))
    }

    fn courses(&self) -> Result<MutexGuard<'_, Documents>, CourseRepositoryError> {
        self.documents
            .lock()
            .map_err(|_| CourseRepositoryError::query(POISONED))
    }
}

#[async_trait]
impl StudentRepository for InMemoryStore {
    async fn create(&self, profile: &StudentProfile) -> Result<Student, StudentRepositoryError> {
        let student = Student::new(profile.clone());
        self.students()?.students.push(student.clone());
        Ok(student)
    }

    async fn find_by_id(&self, id: &StudentId) -> Result<Option<Student>, StudentRepositoryError> {
        Ok(self.students()?.student(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Student>, StudentRepositoryError> {
        Ok(self.students()?.students.clone())
    }

    async fn update(
        &self,
        id: &StudentId,
        patch: &StudentPatch,
    ) -> Result<Option<Student>, StudentRepositoryError> {
        let mut documents = self.students()?;
        Ok(documents.student_mut(id).map(|student| {
            student.apply(patch.clone());
            student.clone()
        }))
    }

    async fn delete(&self, id: &StudentId) -> Result<Option<Student>, StudentRepositoryError> {
        let mut documents = self.students()?;
        let position = documents
            .students
            .iter()
            .position(|student| student.id == *id);
        Ok(position.map(|index| documents.students.remove(index)))
    }

    async fn find_by_id_with_courses(
        &self,
        id: &StudentId,
    ) -> Result<Option<StudentWithCourses>, StudentRepositoryError> {
        let documents = self.students()?;
        let Some(student) = documents.student(id).cloned() else {
            return Ok(None);
        };
        Ok(Some(StudentWithCourses::expand(student, |course_id| {
            documents.course(course_id).cloned()
        })))
    }

    async fn save(&self, student: &Student) -> Result<(), StudentRepositoryError> {
        let mut documents = self.students()?;
        let stored = documents
            .student_mut(&student.id)
            .ok_or_else(|| StudentRepositoryError::query("student not found for update"))?;
        *stored = student.clone();
        Ok(())
    }
}

#[async_trait]
impl CourseRepository for InMemoryStore {
    async fn create(&self, profile: &CourseProfile) -> Result<Course, CourseRepositoryError> {
        let course = Course::new(profile.clone());
        self.courses()?.courses.push(course.clone());
        Ok(course)
    }

    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, CourseRepositoryError> {
        Ok(self.courses()?.course(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Course>, CourseRepositoryError> {
        Ok(self.courses()?.courses.clone())
    }

    async fn update(
        &self,
        id: &CourseId,
        patch: &CoursePatch,
    ) -> Result<Option<Course>, CourseRepositoryError> {
        let mut documents = self.courses()?;
        Ok(documents.course_mut(id).map(|course| {
            course.apply(patch.clone());
            course.clone()
        }))
    }

    async fn delete(&self, id: &CourseId) -> Result<Option<Course>, CourseRepositoryError> {
        let mut documents = self.courses()?;
        let position = documents.courses.iter().position(|course| course.id == *id);
        Ok(position.map(|index| documents.courses.remove(index)))
    }

    async fn find_by_id_with_students(
        &self,
        id: &CourseId,
    ) -> Result<Option<CourseWithStudents>, CourseRepositoryError> {
        let documents = self.courses()?;
        let Some(course) = documents.course(id).cloned() else {
            return Ok(None);
        };
        Ok(Some(CourseWithStudents::expand(course, |student_id| {
            documents.student(student_id).map(Student::summary)
        })))
    }

    async fn save(&self, course: &Course) -> Result<(), CourseRepositoryError> {
        let mut documents = self.courses()?;
        let stored = documents
            .course_mut(&course.id)
            .ok_or_else(|| CourseRepositoryError::query("course not found for update"))?;
        *stored = course.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn store() -> InMemoryStore {
        InMemoryStore::new()
    }

    fn ana() -> StudentProfile {
        StudentProfile {
            first_name: "Ana".to_owned(),
            last_name: "Lopez".to_owned(),
        }
    }

    fn algebra() -> CourseProfile {
        CourseProfile {
            name: "Algebra".to_owned(),
            description: "Intro".to_owned(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn created_students_can_be_found(store: InMemoryStore) {
        let created = StudentRepository::create(&store, &ana()).await.expect("create");

        let found = StudentRepository::find_by_id(&store, &created.id)
            .await
            .expect("find");

        assert_eq!(found, Some(created));
    }

    #[rstest]
    #[tokio::test]
    async fn find_all_keeps_insertion_order(store: InMemoryStore) {
        let first = CourseRepository::create(&store, &algebra()).await.expect("create");
        let second = CourseRepository::create(
            &store,
            &CourseProfile {
                name: "Calculo".to_owned(),
                description: String::new(),
            },
        )
        .await
        .expect("create");

        let all = CourseRepository::find_all(&store).await.expect("list");

        assert_eq!(all, vec![first, second]);
    }

    #[rstest]
    #[tokio::test]
    async fn update_applies_only_supplied_fields(store: InMemoryStore) {
        let created = StudentRepository::create(&store, &ana()).await.expect("create");
        let patch = StudentPatch {
            first_name: Some("Ana Maria".to_owned()),
            last_name: None,
        };

        let updated = StudentRepository::update(&store, &created.id, &patch)
            .await
            .expect("update")
            .expect("exists");

        assert_eq!(updated.first_name, "Ana Maria");
        assert_eq!(updated.last_name, "Lopez");
    }

    #[rstest]
    #[tokio::test]
    async fn delete_returns_document_once(store: InMemoryStore) {
        let created = CourseRepository::create(&store, &algebra()).await.expect("create");

        let first = CourseRepository::delete(&store, &created.id).await.expect("delete");
        let second = CourseRepository::delete(&store, &created.id).await.expect("delete");

        assert_eq!(first, Some(created));
        assert_eq!(second, None);
    }

    #[rstest]
    #[tokio::test]
    async fn save_of_missing_document_fails(store: InMemoryStore) {
        let orphan = Student::new(ana());

        let error = StudentRepository::save(&store, &orphan)
            .await
            .expect_err("missing");

        assert!(matches!(error, StudentRepositoryError::Query { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn expansion_follows_references_both_ways(store: InMemoryStore) {
        let mut course = CourseRepository::create(&store, &algebra()).await.expect("create");
        let mut student = StudentRepository::create(&store, &ana()).await.expect("create");
        course.add_student(student.id);
        CourseRepository::save(&store, &course).await.expect("save course");
        student.record_enrollment(&course);
        StudentRepository::save(&store, &student).await.expect("save student");

        let with_students = store
            .find_by_id_with_students(&course.id)
            .await
            .expect("expand course")
            .expect("course exists");
        let with_courses = store
            .find_by_id_with_courses(&student.id)
            .await
            .expect("expand student")
            .expect("student exists");

        assert_eq!(with_students.students, vec![student.summary()]);
        assert_eq!(with_courses.enrollments[0].course.as_ref(), Some(&course));
    }

    #[rstest]
    #[tokio::test]
    async fn deleted_course_expands_to_none(store: InMemoryStore) {
        let course = CourseRepository::create(&store, &algebra()).await.expect("create");
        let mut student = StudentRepository::create(&store, &ana()).await.expect("create");
        student.record_enrollment(&course);
        StudentRepository::save(&store, &student).await.expect("save");
        CourseRepository::delete(&store, &course.id).await.expect("delete");

        let expanded = store
            .find_by_id_with_courses(&student.id)
            .await
            .expect("expand")
            .expect("student exists");

        assert_eq!(expanded.enrollments.len(), 1);
        assert_eq!(expanded.enrollments[0].course, None);
    }
}
