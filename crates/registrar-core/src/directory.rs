//! Keyed, insertion-ordered store of students.

use std::collections::HashMap;

use crate::error::RegistryError;
use crate::model::Student;

/// Stores students by id while preserving insertion order for listings.
#[derive(Debug, Default)]
pub struct StudentDirectory {
    students: Vec<Student>,
    // id -> position in `students`; positions never shift because
    // students are deactivated, not removed.
    index: HashMap<String, usize>,
}

impl StudentDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a student, rejecting duplicate ids.
    pub fn add(&mut self, student: Student) -> Result<(), RegistryError> {
        let id = student.id().to_string();
        if self.index.contains_key(&id) {
            return Err(RegistryError::DuplicateId(id));
        }
        tracing::debug!(student_id = %id, "adding student");
        self.index.insert(id, self.students.len());
        self.students.push(student);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Student> {
        self.index.get(id).map(|&i| &self.students[i])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Student> {
        self.index.get(id).map(|&i| &mut self.students[i])
    }

    /// All students in insertion order.
    pub fn list(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Case-insensitive substring match against the full name.
    pub fn search_by_name(&self, name: &str) -> Vec<&Student> {
        let needle = name.to_lowercase();
        self.students
            .iter()
            .filter(|s| s.person.full_name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn filter_active(&self) -> Vec<&Student> {
        self.students.iter().filter(|s| s.active).collect()
    }

    /// Flip the active flag off. Returns whether the student existed.
    /// Existing enrollments are left untouched.
    pub fn deactivate(&mut self, id: &str) -> bool {
        match self.get_mut(id) {
            Some(student) => {
                student.active = false;
                tracing::debug!(student_id = %id, "deactivated student");
                true
            }
            None => false,
        }
    }
}
