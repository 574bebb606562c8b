//! JSON representations of stored documents.
//!
//! Field names follow the document store layout clients already consume:
//! `_id` is the storage identifier, `id` the business code.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    Course, CourseWithStudents, EnrollmentRecord, ExpandedEnrollment, Student, StudentSummary,
    StudentWithCourses,
};

/// Enrolment record as stored on a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EnrollmentDocument {
    /// Course business code.
    #[schema(example = "b1c2d3e4-0000-4000-8000-000000000001")]
    pub codigo: String,
    /// Course storage identifier.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub curso: String,
}

impl From<EnrollmentRecord> for EnrollmentDocument {
    fn from(value: EnrollmentRecord) -> Self {
        Self {
            codigo: value.code.into(),
            curso: value.course.to_string(),
        }
    }
}

/// Student document with unexpanded enrolment records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StudentDocument {
    #[serde(rename = "_id")]
    pub storage_id: String,
    pub id: String,
    #[schema(example = "Ana")]
    pub nombre: String,
    #[schema(example = "Lopez")]
    pub apellido: String,
    pub cursos: Vec<EnrollmentDocument>,
}

impl From<Student> for StudentDocument {
    fn from(value: Student) -> Self {
        Self {
            storage_id: value.id.to_string(),
            id: value.public_id.into(),
            nombre: value.first_name,
            apellido: value.last_name,
            cursos: value.enrollments.into_iter().map(Into::into).collect(),
        }
    }
}

/// Course document with unexpanded student references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CourseDocument {
    #[serde(rename = "_id")]
    pub storage_id: String,
    pub id: String,
    #[schema(example = "Algebra")]
    pub nombre: String,
    #[schema(example = "Intro")]
    pub descripcion: String,
    /// Storage identifiers of enrolled students.
    pub alumnos: Vec<String>,
}

impl From<Course> for CourseDocument {
    fn from(value: Course) -> Self {
        Self {
            storage_id: value.id.to_string(),
            id: value.public_id.into(),
            nombre: value.name,
            descripcion: value.description,
            alumnos: value.students.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Enrolment record whose course has been resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExpandedEnrollmentDocument {
    pub codigo: String,
    /// `null` when the course no longer exists.
    pub curso: Option<CourseDocument>,
}

impl From<ExpandedEnrollment> for ExpandedEnrollmentDocument {
    fn from(value: ExpandedEnrollment) -> Self {
        Self {
            codigo: value.code.into(),
            curso: value.course.map(Into::into),
        }
    }
}

/// Student document with every course expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StudentWithCoursesDocument {
    #[serde(rename = "_id")]
    pub storage_id: String,
    pub id: String,
    pub nombre: String,
    pub apellido: String,
    pub cursos: Vec<ExpandedEnrollmentDocument>,
}

impl From<StudentWithCourses> for StudentWithCoursesDocument {
    fn from(value: StudentWithCourses) -> Self {
        Self {
            storage_id: value.id.to_string(),
            id: value.public_id.into(),
            nombre: value.first_name,
            apellido: value.last_name,
            cursos: value.enrollments.into_iter().map(Into::into).collect(),
        }
    }
}

/// Name projection of an enrolled student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StudentSummaryDocument {
    #[serde(rename = "_id")]
    pub storage_id: String,
    pub nombre: String,
    pub apellido: String,
}

impl From<StudentSummary> for StudentSummaryDocument {
    fn from(value: StudentSummary) -> Self {
        Self {
            storage_id: value.id.to_string(),
            nombre: value.first_name,
            apellido: value.last_name,
        }
    }
}

/// Course document with its students projected to their names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CourseWithStudentsDocument {
    #[serde(rename = "_id")]
    pub storage_id: String,
    pub id: String,
    pub nombre: String,
    pub descripcion: String,
    pub alumnos: Vec<StudentSummaryDocument>,
}

impl From<CourseWithStudents> for CourseWithStudentsDocument {
    fn from(value: CourseWithStudents) -> Self {
        Self {
            storage_id: value.id.to_string(),
            id: value.public_id.into(),
            nombre: value.name,
            descripcion: value.description,
            alumnos: value.students.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CourseProfile, StudentProfile};
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn student_document_uses_store_field_names() {
        let course = Course::new(CourseProfile {
            name: "Algebra".to_owned(),
            description: "Intro".to_owned(),
        });
        let mut student = Student::new(StudentProfile {
            first_name: "Ana".to_owned(),
            last_name: "Lopez".to_owned(),
        });
        student.record_enrollment(&course);

        let value = serde_json::to_value(StudentDocument::from(student.clone())).expect("json");

        assert_eq!(
            value,
            json!({
                "_id": student.id.to_string(),
                "id": student.public_id.as_str(),
                "nombre": "Ana",
                "apellido": "Lopez",
                "cursos": [{
                    "codigo": course.public_id.as_str(),
                    "curso": course.id.to_string(),
                }],
            })
        );
    }

    #[rstest]
    fn missing_expanded_course_serialises_as_null() {
        let document = ExpandedEnrollmentDocument {
            codigo: "c-1".to_owned(),
            curso: None,
        };

        let value = serde_json::to_value(document).expect("json");

        assert_eq!(value, json!({"codigo": "c-1", "curso": null}));
    }
}
