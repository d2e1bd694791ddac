//! Sample-data fixture for demos and tests.

use registrar_core::model::{Course, CourseConfig, Instructor, Semester, Student};
use registrar_core::{Registry, RegistryError};

/// Seed a small, fully consistent data set: two instructors, three
/// students, three courses, four enrollments, three recorded grades.
pub fn seed_sample_data(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.add_instructor(Instructor::new(
        "I001",
        "Dr. Smith",
        "smith@uni.edu",
        "Computer Science",
    ));
    registry.add_instructor(Instructor::new(
        "I002",
        "Dr. Johnson",
        "johnson@uni.edu",
        "Mathematics",
    ));

    registry
        .students
        .add(Student::new("S001", "2023001", "John Doe", "john.doe@student.edu"))?;
    registry
        .students
        .add(Student::new("S002", "2023002", "Jane Smith", "jane.smith@student.edu"))?;
    registry
        .students
        .add(Student::new("S003", "2023003", "Michael Brown", "michael.b@student.edu"))?;

    registry.courses.add(Course::new(
        "CS101",
        "Introduction to Programming",
        CourseConfig {
            credits: 3,
            department: "Computer Science".into(),
            semester: Some(Semester::Spring),
            instructor_id: Some("I001".into()),
        },
    )?);
    registry.courses.add(Course::new(
        "MATH101",
        "Calculus I",
        CourseConfig {
            credits: 4,
            department: "Mathematics".into(),
            semester: Some(Semester::Spring),
            instructor_id: Some("I002".into()),
        },
    )?);
    registry.courses.add(Course::new(
        "PHYS101",
        "Physics Fundamentals",
        CourseConfig {
            credits: 3,
            department: "Physics".into(),
            semester: Some(Semester::Fall),
            instructor_id: None,
        },
    )?);

    registry.enroll("S001", "CS101")?;
    registry.enroll("S001", "MATH101")?;
    registry.enroll("S002", "CS101")?;
    registry.enroll("S003", "MATH101")?;

    registry.record_grade("S001", "CS101", 85.5)?;
    registry.record_grade("S001", "MATH101", 92.0)?;
    registry.record_grade("S002", "CS101", 78.0)?;

    tracing::info!("sample data loaded");
    Ok(())
}
