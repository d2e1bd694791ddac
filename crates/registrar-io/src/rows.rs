//! Flat-file row contracts for students and courses.
//!
//! These structs define the exchanged record shapes; the core itself
//! never sees them. Semesters and instructor references serialize as
//! plain strings, empty when unset, so the files stay editable by hand.

use chrono::NaiveDate;
use registrar_core::model::{Course, CourseConfig, Semester, Student};
use registrar_core::RegistryError;
use serde::{Deserialize, Serialize};

/// ACTIVE/INACTIVE marker used by both row kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Active,
    Inactive,
}

impl From<bool> for Status {
    fn from(active: bool) -> Self {
        if active {
            Status::Active
        } else {
            Status::Inactive
        }
    }
}

impl Status {
    pub fn is_active(self) -> bool {
        self == Status::Active
    }
}

/// One student record: `id,reg_no,full_name,email,status,created`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRow {
    pub id: String,
    pub reg_no: String,
    pub full_name: String,
    pub email: String,
    pub status: Status,
    pub created: NaiveDate,
}

impl StudentRow {
    pub fn from_student(student: &Student) -> Self {
        Self {
            id: student.person.id.clone(),
            reg_no: student.reg_no.clone(),
            full_name: student.person.full_name.clone(),
            email: student.person.email.clone(),
            status: student.active.into(),
            created: student.person.created,
        }
    }

    pub fn into_student(self) -> Student {
        let mut student = Student::new(self.id, self.reg_no, self.full_name, self.email);
        student.person.created = self.created;
        student.active = self.status.is_active();
        student
    }
}

/// One course record:
/// `code,title,credits,instructor_id,department,semester,status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRow {
    pub code: String,
    pub title: String,
    pub credits: u32,
    pub instructor_id: String,
    pub department: String,
    pub semester: String,
    pub status: Status,
}

impl CourseRow {
    pub fn from_course(course: &Course) -> Self {
        Self {
            code: course.code().to_string(),
            title: course.title.clone(),
            credits: course.credits,
            instructor_id: course.instructor_id.clone().unwrap_or_default(),
            department: course.department.clone(),
            semester: course
                .semester
                .map(|s| s.to_string())
                .unwrap_or_default(),
            status: course.active.into(),
        }
    }

    /// Build the domain course. An unknown semester string is treated as
    /// unset with a warning rather than rejecting the whole file.
    pub fn into_course(self) -> Result<Course, RegistryError> {
        let semester = if self.semester.is_empty() {
            None
        } else {
            match self.semester.parse::<Semester>() {
                Ok(s) => Some(s),
                Err(_) => {
                    tracing::warn!(semester = %self.semester, code = %self.code, "invalid semester, leaving unset");
                    None
                }
            }
        };
        let mut course = Course::new(
            self.code,
            self.title,
            CourseConfig {
                credits: self.credits,
                department: self.department,
                semester,
                instructor_id: (!self.instructor_id.is_empty()).then_some(self.instructor_id),
            },
        )?;
        course.active = self.status.is_active();
        Ok(course)
    }
}
