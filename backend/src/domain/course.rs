//! Course documents.

use super::{CourseId, PublicId, StudentId, StudentSummary};

/// Attributes supplied when creating a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseProfile {
    pub name: String,
    pub description: String,
}

/// Attributes supplied when updating a course. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoursePatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl CoursePatch {
    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

/// Course document.
///
/// `students` holds storage identifiers of enrolled students. Storage does not
/// deduplicate it; the enrolment operation checks membership first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: CourseId,
    pub public_id: PublicId,
    pub name: String,
    pub description: String,
    pub students: Vec<StudentId>,
}

impl Course {
    /// Build a new document with freshly generated identifiers and no
    /// students.
    pub fn new(profile: CourseProfile) -> Self {
        let CourseProfile { name, description } = profile;
        Self {
            id: CourseId::random(),
            public_id: PublicId::random(),
            name,
            description,
            students: Vec::new(),
        }
    }

    /// Overwrite the attributes present in `patch`.
    pub fn apply(&mut self, patch: CoursePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
    }

    /// Whether `student` is referenced by this course.
    pub fn has_student(&self, student: &StudentId) -> bool {
        self.students.contains(student)
    }

    /// Append a student reference without checking membership.
    pub fn add_student(&mut self, student: StudentId) {
        self.students.push(student);
    }
}

/// Course with its student references replaced by name projections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseWithStudents {
    pub id: CourseId,
    pub public_id: PublicId,
    pub name: String,
    pub description: String,
    pub students: Vec<StudentSummary>,
}

impl CourseWithStudents {
    /// Expand `course` using `lookup`; references that resolve to nothing are
    /// dropped.
    pub fn expand(
        course: Course,
        lookup: impl FnMut(&StudentId) -> Option<StudentSummary>,
    ) -> Self {
        let Course {
            id,
            public_id,
            name,
            description,
            students,
        } = course;
        Self {
            id,
            public_id,
            name,
            description,
            students: students.iter().filter_map(lookup).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn course() -> Course {
        Course::new(CourseProfile {
            name: "Algebra".to_owned(),
            description: "Intro".to_owned(),
        })
    }

    #[rstest]
    fn membership_tracks_added_students() {
        let mut course = course();
        let student = StudentId::random();
        assert!(!course.has_student(&student));
        course.add_student(student);
        assert!(course.has_student(&student));
    }

    #[rstest]
    #[case(CoursePatch::default(), "Algebra", "Intro")]
    #[case(CoursePatch { name: Some("Calculo".to_owned()), description: None }, "Calculo", "Intro")]
    #[case(
        CoursePatch { name: Some("Calculo".to_owned()), description: Some("II".to_owned()) },
        "Calculo",
        "II"
    )]
    fn apply_only_overwrites_supplied_fields(
        #[case] patch: CoursePatch,
        #[case] name: &str,
        #[case] description: &str,
    ) {
        let mut course = course();
        course.apply(patch);
        assert_eq!(course.name, name);
        assert_eq!(course.description, description);
    }

    #[rstest]
    fn expand_drops_dangling_students() {
        let mut course = course();
        let known = StudentSummary {
            id: StudentId::random(),
            first_name: "Ana".to_owned(),
            last_name: "Lopez".to_owned(),
        };
        course.add_student(StudentId::random());
        course.add_student(known.id);

        let expanded =
            CourseWithStudents::expand(course, |id| (*id == known.id).then(|| known.clone()));

        assert_eq!(expanded.students, vec![known]);
    }
}
