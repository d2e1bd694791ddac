//! Core data model types for registrar.
//!
//! These are the fundamental entities the entire registrar system works
//! with: people (students, instructors), courses, and the enrollment
//! records linking them.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::grade::Grade;

/// Role tag for the two kinds of people the system tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Student,
    Instructor,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Student => write!(f, "Student"),
            Role::Instructor => write!(f, "Instructor"),
        }
    }
}

/// Identity fields shared by every person, embedded by composition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonInfo {
    /// Unique identifier within the owning directory.
    pub id: String,
    /// Full display name.
    pub full_name: String,
    /// Contact email.
    pub email: String,
    /// Date the record was created.
    pub created: NaiveDate,
}

impl PersonInfo {
    pub fn new(
        id: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            email: email.into(),
            created: Local::now().date_naive(),
        }
    }
}

/// A student with a registration number and an owned enrollment sequence.
///
/// The `enrollments` Vec, in insertion order, is the single source of
/// truth for what the student is enrolled in. Nothing else in the system
/// keeps an independent enrollment list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub person: PersonInfo,
    pub reg_no: String,
    pub active: bool,
    pub enrollments: Vec<Enrollment>,
}

impl Student {
    pub fn new(
        id: impl Into<String>,
        reg_no: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            person: PersonInfo::new(id, full_name, email),
            reg_no: reg_no.into(),
            active: true,
            enrollments: Vec::new(),
        }
    }

    pub fn role(&self) -> Role {
        Role::Student
    }

    pub fn id(&self) -> &str {
        &self.person.id
    }

    /// The enrollment for `course_code`, if any.
    pub fn enrollment(&self, course_code: &str) -> Option<&Enrollment> {
        self.enrollments.iter().find(|e| e.course_code == course_code)
    }

    pub fn is_enrolled_in(&self, course_code: &str) -> bool {
        self.enrollment(course_code).is_some()
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student[{}, RegNo: {}, Active: {}]",
            self.person.full_name, self.reg_no, self.active
        )
    }
}

/// An instructor. Courses reference instructors by id, never own them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instructor {
    pub person: PersonInfo,
    pub department: String,
}

impl Instructor {
    pub fn new(
        id: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            person: PersonInfo::new(id, full_name, email),
            department: department.into(),
        }
    }

    pub fn role(&self) -> Role {
        Role::Instructor
    }

    pub fn id(&self) -> &str {
        &self.person.id
    }
}

/// Academic term a course is offered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Semester {
    Spring,
    Summer,
    Fall,
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Semester::Spring => write!(f, "SPRING"),
            Semester::Summer => write!(f, "SUMMER"),
            Semester::Fall => write!(f, "FALL"),
        }
    }
}

impl FromStr for Semester {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SPRING" => Ok(Semester::Spring),
            "SUMMER" => Ok(Semester::Summer),
            "FALL" => Ok(Semester::Fall),
            other => Err(format!("unknown semester: {other}")),
        }
    }
}

/// Named-field configuration for constructing a [`Course`].
///
/// Defaults: 3 credits, "General" department, no semester, no instructor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseConfig {
    #[serde(default = "default_credits")]
    pub credits: u32,
    #[serde(default = "default_department")]
    pub department: String,
    #[serde(default)]
    pub semester: Option<Semester>,
    #[serde(default)]
    pub instructor_id: Option<String>,
}

impl Default for CourseConfig {
    fn default() -> Self {
        Self {
            credits: default_credits(),
            department: default_department(),
            semester: None,
            instructor_id: None,
        }
    }
}

fn default_credits() -> u32 {
    3
}

fn default_department() -> String {
    "General".to_string()
}

/// A course definition. The code is the immutable unique key; every
/// other descriptive field is mutable through plain accessors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    code: String,
    pub title: String,
    pub credits: u32,
    pub department: String,
    pub semester: Option<Semester>,
    pub instructor_id: Option<String>,
    pub active: bool,
}

impl Course {
    /// Construct a course, rejecting non-positive credits.
    pub fn new(
        code: impl Into<String>,
        title: impl Into<String>,
        config: CourseConfig,
    ) -> Result<Self, crate::error::RegistryError> {
        if config.credits == 0 {
            return Err(crate::error::RegistryError::InvalidCredits(config.credits));
        }
        Ok(Self {
            code: code.into(),
            title: title.into(),
            credits: config.credits,
            department: config.department,
            semester: config.semester,
            instructor_id: config.instructor_id,
            active: true,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Course[Code: {}, Title: {}, Credits: {}, Department: {}]",
            self.code, self.title, self.credits, self.department
        )
    }
}

/// The record linking one student to one course for grading purposes.
///
/// The owning student is implied by which enrollment sequence the record
/// sits in; only the course is referenced explicitly, by code. Marks stay
/// `None` until a grade is recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub course_code: String,
    /// Set at creation, never changed afterwards.
    pub enrolled_on: NaiveDate,
    pub marks: Option<f64>,
    pub grade: Option<Grade>,
}

impl Enrollment {
    pub(crate) fn new(course_code: impl Into<String>) -> Self {
        Self {
            course_code: course_code.into(),
            enrolled_on: Local::now().date_naive(),
            marks: None,
            grade: None,
        }
    }

    pub fn is_graded(&self) -> bool {
        self.marks.is_some()
    }

    /// Record marks and derive the grade. Callers validate the range;
    /// the mapping itself is total.
    pub(crate) fn record_marks(&mut self, marks: f64) {
        self.marks = Some(marks);
        self.grade = Some(Grade::from_score(marks));
    }
}
