//! Keyed, insertion-ordered store of courses.

use std::collections::HashMap;

use crate::model::{Course, Semester};

/// Stores courses by code while preserving insertion order for listings.
#[derive(Debug, Default)]
pub struct CourseCatalog {
    courses: Vec<Course>,
    index: HashMap<String, usize>,
}

impl CourseCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a course, or overwrite the existing one with the same code.
    /// An overwrite keeps the course's original listing position.
    pub fn add(&mut self, course: Course) {
        let code = course.code().to_string();
        match self.index.get(&code) {
            Some(&i) => {
                tracing::debug!(course_code = %code, "replacing course");
                self.courses[i] = course;
            }
            None => {
                tracing::debug!(course_code = %code, "adding course");
                self.index.insert(code, self.courses.len());
                self.courses.push(course);
            }
        }
    }

    pub fn get(&self, code: &str) -> Option<&Course> {
        self.index.get(code).map(|&i| &self.courses[i])
    }

    pub fn get_mut(&mut self, code: &str) -> Option<&mut Course> {
        self.index.get(code).map(|&i| &mut self.courses[i])
    }

    /// All courses in insertion order.
    pub fn list(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Case-insensitive exact match on department name.
    pub fn search_by_department(&self, department: &str) -> Vec<&Course> {
        self.courses
            .iter()
            .filter(|c| c.department.eq_ignore_ascii_case(department))
            .collect()
    }

    pub fn search_by_semester(&self, semester: Semester) -> Vec<&Course> {
        self.courses
            .iter()
            .filter(|c| c.semester == Some(semester))
            .collect()
    }

    /// Courses taught by the instructor with this id.
    pub fn search_by_instructor(&self, instructor_id: &str) -> Vec<&Course> {
        self.courses
            .iter()
            .filter(|c| c.instructor_id.as_deref() == Some(instructor_id))
            .collect()
    }

    pub fn filter_active(&self) -> Vec<&Course> {
        self.courses.iter().filter(|c| c.active).collect()
    }

    /// Flip the active flag off. Returns whether the course existed.
    pub fn deactivate(&mut self, code: &str) -> bool {
        match self.get_mut(code) {
            Some(course) => {
                course.active = false;
                tracing::debug!(course_code = %code, "deactivated course");
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CourseConfig;

    fn course(code: &str, title: &str, config: CourseConfig) -> Course {
        Course::new(code, title, config).unwrap()
    }

    fn sample_catalog() -> CourseCatalog {
        let mut catalog = CourseCatalog::new();
        catalog.add(course(
            "CS101",
            "Intro to Programming",
            CourseConfig {
                department: "Computer Science".into(),
                semester: Some(Semester::Spring),
                instructor_id: Some("I001".into()),
                ..CourseConfig::default()
            },
        ));
        catalog.add(course(
            "MATH101",
            "Calculus I",
            CourseConfig {
                credits: 4,
                department: "Mathematics".into(),
                semester: Some(Semester::Spring),
                ..CourseConfig::default()
            },
        ));
        catalog
    }

    #[test]
    fn add_is_upsert_keeping_position() {
        let mut catalog = sample_catalog();
        catalog.add(course(
            "CS101",
            "Programming Fundamentals",
            CourseConfig {
                credits: 5,
                ..CourseConfig::default()
            },
        ));
        assert_eq!(catalog.len(), 2);
        let codes: Vec<&str> = catalog.list().map(|c| c.code()).collect();
        assert_eq!(codes, ["CS101", "MATH101"]);
        let cs = catalog.get("CS101").unwrap();
        assert_eq!(cs.title, "Programming Fundamentals");
        assert_eq!(cs.credits, 5);
    }

    #[test]
    fn department_search_ignores_case() {
        let catalog = sample_catalog();
        assert_eq!(catalog.search_by_department("computer science").len(), 1);
        assert!(catalog.search_by_department("physics").is_empty());
    }

    #[test]
    fn semester_and_instructor_search() {
        let catalog = sample_catalog();
        assert_eq!(catalog.search_by_semester(Semester::Spring).len(), 2);
        assert!(catalog.search_by_semester(Semester::Fall).is_empty());
        let by_instructor = catalog.search_by_instructor("I001");
        assert_eq!(by_instructor.len(), 1);
        assert_eq!(by_instructor[0].code(), "CS101");
    }

    #[test]
    fn deactivate_flips_flag() {
        let mut catalog = sample_catalog();
        assert!(catalog.deactivate("CS101"));
        assert!(!catalog.get("CS101").unwrap().active);
        assert!(!catalog.deactivate("NOPE"));
        assert_eq!(catalog.filter_active().len(), 1);
    }
}
