//! Student documents and their enrolment records.

use super::{Course, CourseId, PublicId, StudentId};

/// Attributes supplied when creating a student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentProfile {
    pub first_name: String,
    pub last_name: String,
}

/// Attributes supplied when updating a student. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl StudentPatch {
    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none()
    }
}

/// One course a student is enrolled in, as recorded on the student side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentRecord {
    /// Business code of the course at enrolment time.
    pub code: PublicId,
    /// Storage identifier of the course.
    pub course: CourseId,
}

/// Student document.
///
/// `enrollments` keeps insertion order. Nothing here guarantees the course
/// side agrees; see [`crate::domain::EnrollmentService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: StudentId,
    pub public_id: PublicId,
    pub first_name: String,
    pub last_name: String,
    pub enrollments: Vec<EnrollmentRecord>,
}

impl Student {
    /// Build a new document with freshly generated identifiers and no
    /// enrolments.
    pub fn new(profile: StudentProfile) -> Self {
        let StudentProfile {
            first_name,
            last_name,
        } = profile;
        Self {
            id: StudentId::random(),
            public_id: PublicId::random(),
            first_name,
            last_name,
            enrollments: Vec::new(),
        }
    }

    /// Overwrite the attributes present in `patch`.
    pub fn apply(&mut self, patch: StudentPatch) {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
    }

    /// Append an enrolment record pointing at `course`.
    pub fn record_enrollment(&mut self, course: &Course) {
        self.enrollments.push(EnrollmentRecord {
            code: course.public_id.clone(),
            course: course.id,
        });
    }

    /// Name-only projection used when expanding a course's students.
    pub fn summary(&self) -> StudentSummary {
        StudentSummary {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

/// Projection of a student exposing only its names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentSummary {
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
}

/// Enrolment record whose course reference has been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedEnrollment {
    pub code: PublicId,
    /// `None` when the referenced course no longer exists.
    pub course: Option<Course>,
}

/// Student with every enrolment record's course reference expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentWithCourses {
    pub id: StudentId,
    pub public_id: PublicId,
    pub first_name: String,
    pub last_name: String,
    pub enrollments: Vec<ExpandedEnrollment>,
}

impl StudentWithCourses {
    /// Expand `student` using `lookup` to resolve each course reference.
    pub fn expand(student: Student, mut lookup: impl FnMut(&CourseId) -> Option<Course>) -> Self {
        let Student {
            id,
            public_id,
            first_name,
            last_name,
            enrollments,
        } = student;
        let enrollments = enrollments
            .into_iter()
            .map(|record| ExpandedEnrollment {
                course: lookup(&record.course),
                code: record.code,
            })
            .collect();
        Self {
            id,
            public_id,
            first_name,
            last_name,
            enrollments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CourseProfile;
    use rstest::{fixture, rstest};

    #[fixture]
    fn student() -> Student {
        Student::new(StudentProfile {
            first_name: "Ana".to_owned(),
            last_name: "Lopez".to_owned(),
        })
    }

    #[fixture]
    fn course() -> Course {
        Course::new(CourseProfile {
            name: "Algebra".to_owned(),
            description: "Intro".to_owned(),
        })
    }

    #[rstest]
    fn new_students_have_distinct_identifiers(student: Student) {
        assert!(student.enrollments.is_empty());
        assert_ne!(student.id.to_string(), student.public_id.as_str());
    }

    #[rstest]
    fn apply_only_overwrites_supplied_fields(mut student: Student) {
        student.apply(StudentPatch {
            first_name: None,
            last_name: Some("Perez".to_owned()),
        });
        assert_eq!(student.first_name, "Ana");
        assert_eq!(student.last_name, "Perez");
    }

    #[rstest]
    fn record_enrollment_uses_course_business_code(mut student: Student, course: Course) {
        student.record_enrollment(&course);
        assert_eq!(
            student.enrollments,
            vec![EnrollmentRecord {
                code: course.public_id.clone(),
                course: course.id,
            }]
        );
    }

    #[rstest]
    fn expand_keeps_order_and_marks_missing_courses(mut student: Student, course: Course) {
        let missing = Course::new(CourseProfile {
            name: "Gone".to_owned(),
            description: String::new(),
        });
        student.record_enrollment(&missing);
        student.record_enrollment(&course);

        let expanded = StudentWithCourses::expand(student, |id| {
            (*id == course.id).then(|| course.clone())
        });

        assert_eq!(expanded.enrollments.len(), 2);
        assert_eq!(expanded.enrollments[0].course, None);
        assert_eq!(expanded.enrollments[1].course.as_ref(), Some(&course));
    }
}
