//! Domain error types.
//!
//! Every failure the engine can produce is a caller-recoverable value;
//! nothing here is fatal and the core never retries. Structured fields
//! (the credit-limit variant in particular) let callers render precise
//! diagnostics without string matching.

use thiserror::Error;

/// Errors produced by the registry and its stores.
#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    /// A student with this id is already present in the directory.
    #[error("student id already exists: {0}")]
    DuplicateId(String),

    /// The student already has an enrollment for this course.
    #[error("student {student_id} is already enrolled in {course_code}")]
    DuplicateEnrollment {
        student_id: String,
        course_code: String,
    },

    /// Enrolling would push the student past the credit cap.
    #[error("credit limit exceeded: {current} current + new course = {attempted}, max {max}")]
    CreditLimitExceeded {
        current: u32,
        max: u32,
        attempted: u32,
    },

    /// Marks outside the [0, 100] range.
    #[error("invalid marks: {0} (must be between 0 and 100)")]
    InvalidMarks(f64),

    /// Grade recorded against an enrollment that does not exist.
    #[error("student {student_id} is not enrolled in {course_code}")]
    NotEnrolled {
        student_id: String,
        course_code: String,
    },

    /// An operation addressed a student id absent from the directory.
    #[error("unknown student: {0}")]
    UnknownStudent(String),

    /// An operation addressed a course code absent from the catalog.
    #[error("unknown course: {0}")]
    UnknownCourse(String),

    /// A course was configured with zero credits.
    #[error("credits must be positive, got {0}")]
    InvalidCredits(u32),
}

impl RegistryError {
    /// Returns `true` for failures caused by addressing an entity that
    /// does not exist, as opposed to a policy rejection.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RegistryError::UnknownStudent(_) | RegistryError::UnknownCourse(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credit_limit_message_carries_all_fields() {
        let err = RegistryError::CreditLimitExceeded {
            current: 16,
            max: 18,
            attempted: 20,
        };
        let msg = err.to_string();
        assert!(msg.contains("16"));
        assert!(msg.contains("18"));
        assert!(msg.contains("20"));
    }

    #[test]
    fn not_found_classification() {
        assert!(RegistryError::UnknownStudent("S9".into()).is_not_found());
        assert!(!RegistryError::InvalidMarks(101.0).is_not_found());
    }
}
