//! The registry context and the enrollment policy.
//!
//! A [`Registry`] holds the student directory, the course catalog, and
//! the known instructors. It is constructed explicitly at startup (or
//! per test) and passed by reference; there is no global instance. All
//! cross-entity operations live here, addressed by student id and course
//! code.

use std::collections::HashMap;

use crate::catalog::CourseCatalog;
use crate::directory::StudentDirectory;
use crate::error::RegistryError;
use crate::model::{Enrollment, Instructor, Student};
use crate::transcript;

/// Maximum total course credits a student may carry simultaneously.
pub const MAX_CREDITS: u32 = 18;

/// The application context: all three stores behind one value.
#[derive(Debug, Default)]
pub struct Registry {
    pub students: StudentDirectory,
    pub courses: CourseCatalog,
    instructors: HashMap<String, Instructor>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_instructor(&mut self, instructor: Instructor) {
        self.instructors
            .insert(instructor.id().to_string(), instructor);
    }

    pub fn instructor(&self, id: &str) -> Option<&Instructor> {
        self.instructors.get(id)
    }

    /// Enroll a student in a course.
    ///
    /// Rejects a second enrollment in the same course, and any enrollment
    /// that would push the student's total credits past [`MAX_CREDITS`].
    /// The credit sum counts every existing enrollment, graded or not.
    /// On success a fresh ungraded enrollment dated today is appended to
    /// the student's sequence; that sequence is the only record kept.
    pub fn enroll(&mut self, student_id: &str, course_code: &str) -> Result<(), RegistryError> {
        let new_credits = self
            .courses
            .get(course_code)
            .ok_or_else(|| RegistryError::UnknownCourse(course_code.to_string()))?
            .credits;

        let courses = &self.courses;
        let student = self
            .students
            .get_mut(student_id)
            .ok_or_else(|| RegistryError::UnknownStudent(student_id.to_string()))?;

        if student.is_enrolled_in(course_code) {
            return Err(RegistryError::DuplicateEnrollment {
                student_id: student_id.to_string(),
                course_code: course_code.to_string(),
            });
        }

        let current: u32 = student
            .enrollments
            .iter()
            .map(|e| courses.get(&e.course_code).map_or(0, |c| c.credits))
            .sum();
        let attempted = current + new_credits;
        if attempted > MAX_CREDITS {
            tracing::warn!(
                student_id,
                course_code,
                current,
                attempted,
                max = MAX_CREDITS,
                "enrollment rejected: credit limit"
            );
            return Err(RegistryError::CreditLimitExceeded {
                current,
                max: MAX_CREDITS,
                attempted,
            });
        }

        tracing::debug!(student_id, course_code, "enrolled");
        student.enrollments.push(Enrollment::new(course_code));
        Ok(())
    }

    /// Remove the student's enrollment in a course, if any.
    ///
    /// Absence of a matching enrollment is not an error.
    pub fn unenroll(&mut self, student_id: &str, course_code: &str) -> Result<(), RegistryError> {
        let student = self
            .students
            .get_mut(student_id)
            .ok_or_else(|| RegistryError::UnknownStudent(student_id.to_string()))?;

        if let Some(pos) = student
            .enrollments
            .iter()
            .position(|e| e.course_code == course_code)
        {
            student.enrollments.remove(pos);
            tracing::debug!(student_id, course_code, "unenrolled");
        }
        Ok(())
    }

    /// Record marks for an existing enrollment and derive its grade.
    pub fn record_grade(
        &mut self,
        student_id: &str,
        course_code: &str,
        marks: f64,
    ) -> Result<(), RegistryError> {
        let student = self
            .students
            .get_mut(student_id)
            .ok_or_else(|| RegistryError::UnknownStudent(student_id.to_string()))?;

        let enrollment = student
            .enrollments
            .iter_mut()
            .find(|e| e.course_code == course_code)
            .ok_or_else(|| RegistryError::NotEnrolled {
                student_id: student_id.to_string(),
                course_code: course_code.to_string(),
            })?;

        if !(0.0..=100.0).contains(&marks) {
            return Err(RegistryError::InvalidMarks(marks));
        }

        enrollment.record_marks(marks);
        tracing::debug!(student_id, course_code, marks, "grade recorded");
        Ok(())
    }

    /// Arithmetic mean of marks over all graded enrollments in a course,
    /// derived by scanning every student's sequence. 0.0 when none.
    pub fn course_average(&self, course_code: &str) -> f64 {
        let marks: Vec<f64> = self
            .students
            .list()
            .flat_map(|s| &s.enrollments)
            .filter(|e| e.course_code == course_code)
            .filter_map(|e| e.marks)
            .collect();
        if marks.is_empty() {
            return 0.0;
        }
        marks.iter().sum::<f64>() / marks.len() as f64
    }

    /// Credit-weighted GPA for one student.
    pub fn calculate_gpa(&self, student_id: &str) -> Result<f64, RegistryError> {
        let student = self
            .students
            .get(student_id)
            .ok_or_else(|| RegistryError::UnknownStudent(student_id.to_string()))?;
        Ok(transcript::calculate_gpa(student, &self.courses))
    }

    /// Textual transcript report for one student.
    pub fn generate_transcript(&self, student_id: &str) -> Result<String, RegistryError> {
        let student = self
            .students
            .get(student_id)
            .ok_or_else(|| RegistryError::UnknownStudent(student_id.to_string()))?;
        Ok(transcript::generate_transcript(student, &self.courses))
    }

    /// Students whose GPA is at or above `min_gpa`, sorted descending by
    /// GPA. The sort is stable, so ties keep directory order.
    pub fn students_with_gpa_above(&self, min_gpa: f64) -> Vec<&Student> {
        let mut ranked: Vec<(f64, &Student)> = self
            .students
            .list()
            .map(|s| (transcript::calculate_gpa(s, &self.courses), s))
            .filter(|(gpa, _)| *gpa >= min_gpa)
            .collect();
        ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        ranked.into_iter().map(|(_, s)| s).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grade::Grade;
    use crate::model::{Course, CourseConfig};

    fn registry() -> Registry {
        let mut reg = Registry::new();
        reg.students
            .add(Student::new("S001", "2023001", "John Doe", "john@student.edu"))
            .unwrap();
        reg.students
            .add(Student::new("S002", "2023002", "Jane Smith", "jane@student.edu"))
            .unwrap();
        for (code, title, credits) in [
            ("CS101", "Intro to Programming", 3),
            ("MATH101", "Calculus I", 4),
            ("PHYS101", "Physics Fundamentals", 3),
            ("CHEM499", "Advanced Chemistry", 9),
            ("BIO499", "Advanced Biology", 9),
            ("ART101", "Drawing", 1),
        ] {
            reg.courses.add(
                Course::new(
                    code,
                    title,
                    CourseConfig {
                        credits,
                        ..CourseConfig::default()
                    },
                )
                .unwrap(),
            );
        }
        reg
    }

    #[test]
    fn second_enroll_is_duplicate() {
        let mut reg = registry();
        reg.enroll("S001", "CS101").unwrap();
        let err = reg.enroll("S001", "CS101").unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateEnrollment { .. }));
        let matching = reg
            .students
            .get("S001")
            .unwrap()
            .enrollments
            .iter()
            .filter(|e| e.course_code == "CS101")
            .count();
        assert_eq!(matching, 1);
    }

    #[test]
    fn credit_limit_allows_exactly_18() {
        let mut reg = registry();
        reg.enroll("S001", "CHEM499").unwrap(); // 9
        reg.enroll("S001", "BIO499").unwrap(); // 18
        let err = reg.enroll("S001", "ART101").unwrap_err();
        assert_eq!(
            err,
            RegistryError::CreditLimitExceeded {
                current: 18,
                max: 18,
                attempted: 19,
            }
        );
        // prior enrollments intact
        assert_eq!(reg.students.get("S001").unwrap().enrollments.len(), 2);
    }

    #[test]
    fn enroll_unknown_ids() {
        let mut reg = registry();
        assert_eq!(
            reg.enroll("S999", "CS101").unwrap_err(),
            RegistryError::UnknownStudent("S999".into())
        );
        assert_eq!(
            reg.enroll("S001", "NOPE101").unwrap_err(),
            RegistryError::UnknownCourse("NOPE101".into())
        );
    }

    #[test]
    fn unenroll_is_noop_when_absent() {
        let mut reg = registry();
        reg.enroll("S001", "CS101").unwrap();
        reg.unenroll("S001", "MATH101").unwrap();
        assert_eq!(reg.students.get("S001").unwrap().enrollments.len(), 1);
        reg.unenroll("S001", "CS101").unwrap();
        assert!(reg.students.get("S001").unwrap().enrollments.is_empty());
    }

    #[test]
    fn record_grade_boundaries() {
        let mut reg = registry();
        reg.enroll("S001", "CS101").unwrap();

        reg.record_grade("S001", "CS101", 85.5).unwrap();
        let s = reg.students.get("S001").unwrap();
        assert_eq!(s.enrollment("CS101").unwrap().grade, Some(Grade::A));

        reg.record_grade("S001", "CS101", 100.0).unwrap();
        let s = reg.students.get("S001").unwrap();
        assert_eq!(s.enrollment("CS101").unwrap().grade, Some(Grade::S));

        reg.record_grade("S001", "CS101", 59.9).unwrap();
        let s = reg.students.get("S001").unwrap();
        assert_eq!(s.enrollment("CS101").unwrap().grade, Some(Grade::D));

        assert_eq!(
            reg.record_grade("S001", "CS101", -1.0).unwrap_err(),
            RegistryError::InvalidMarks(-1.0)
        );
        assert_eq!(
            reg.record_grade("S001", "CS101", 101.0).unwrap_err(),
            RegistryError::InvalidMarks(101.0)
        );
    }

    #[test]
    fn record_grade_requires_enrollment() {
        let mut reg = registry();
        let err = reg.record_grade("S001", "CS101", 75.0).unwrap_err();
        assert!(matches!(err, RegistryError::NotEnrolled { .. }));
    }

    #[test]
    fn course_average_over_all_students() {
        let mut reg = registry();
        assert_eq!(reg.course_average("CS101"), 0.0);

        reg.enroll("S001", "CS101").unwrap();
        reg.enroll("S002", "CS101").unwrap();
        reg.record_grade("S001", "CS101", 85.5).unwrap();
        // S002 is ungraded and must not affect the mean
        assert!((reg.course_average("CS101") - 85.5).abs() < 1e-9);

        reg.record_grade("S002", "CS101", 78.0).unwrap();
        assert!((reg.course_average("CS101") - 81.75).abs() < 1e-9);
    }

    #[test]
    fn gpa_is_credit_weighted() {
        let mut reg = registry();
        reg.enroll("S001", "CS101").unwrap(); // 3 credits
        reg.enroll("S001", "MATH101").unwrap(); // 4 credits
        reg.record_grade("S001", "CS101", 95.0).unwrap(); // S = 10.0
        reg.record_grade("S001", "MATH101", 85.0).unwrap(); // A = 9.0

        let gpa = reg.calculate_gpa("S001").unwrap();
        assert!((gpa - (3.0 * 10.0 + 4.0 * 9.0) / 7.0).abs() < 1e-9);
    }

    #[test]
    fn gpa_ranking_is_stable_descending() {
        let mut reg = registry();
        reg.students
            .add(Student::new("S003", "2023003", "Tied Peer", "t@edu"))
            .unwrap();
        reg.enroll("S001", "CS101").unwrap();
        reg.enroll("S002", "CS101").unwrap();
        reg.enroll("S003", "CS101").unwrap();
        reg.record_grade("S001", "CS101", 75.0).unwrap(); // B = 8.0
        reg.record_grade("S002", "CS101", 95.0).unwrap(); // S = 10.0
        reg.record_grade("S003", "CS101", 78.0).unwrap(); // B = 8.0

        let ranked: Vec<&str> = reg
            .students_with_gpa_above(8.0)
            .into_iter()
            .map(|s| s.id())
            .collect();
        // S001 and S003 tie at 8.0; directory order breaks the tie
        assert_eq!(ranked, ["S002", "S001", "S003"]);

        assert!(reg.students_with_gpa_above(10.5).is_empty());
    }

    #[test]
    fn deactivation_leaves_record_intact() {
        let mut reg = registry();
        reg.enroll("S001", "CS101").unwrap();
        reg.record_grade("S001", "CS101", 85.5).unwrap();
        let gpa_before = reg.calculate_gpa("S001").unwrap();
        let transcript_before = reg.generate_transcript("S001").unwrap();

        assert!(reg.students.deactivate("S001"));
        assert!(!reg.students.get("S001").unwrap().active);
        assert_eq!(reg.students.get("S001").unwrap().enrollments.len(), 1);
        assert_eq!(reg.calculate_gpa("S001").unwrap(), gpa_before);
        assert_eq!(reg.generate_transcript("S001").unwrap(), transcript_before);
    }

    #[test]
    fn editing_credits_changes_later_gpa_weight() {
        let mut reg = registry();
        reg.enroll("S001", "CS101").unwrap();
        reg.enroll("S001", "MATH101").unwrap();
        reg.record_grade("S001", "CS101", 95.0).unwrap(); // S
        reg.record_grade("S001", "MATH101", 45.0).unwrap(); // E

        let before = reg.calculate_gpa("S001").unwrap();
        reg.courses.get_mut("CS101").unwrap().credits = 12;
        let after = reg.calculate_gpa("S001").unwrap();
        assert!(after > before);
    }

    #[test]
    fn instructors_are_stored_by_id() {
        let mut reg = registry();
        reg.add_instructor(Instructor::new(
            "I001",
            "Dr. Smith",
            "smith@uni.edu",
            "Computer Science",
        ));
        assert_eq!(reg.instructor("I001").unwrap().department, "Computer Science");
        assert!(reg.instructor("I999").is_none());
    }
}
