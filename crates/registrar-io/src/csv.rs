//! CSV import and export against the row contracts.
//!
//! Files carry a header row. Fields are trimmed on the way in, and rows
//! the core rejects (duplicate student ids, zero-credit courses) abort
//! the import with the underlying error.

use std::path::Path;

use registrar_core::Registry;

use crate::rows::{CourseRow, StudentRow};
use crate::{DataError, Result};

/// Write every student in directory order.
pub fn export_students(registry: &Registry, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for student in registry.students.list() {
        writer.serialize(StudentRow::from_student(student))?;
    }
    writer.flush()?;
    tracing::info!(path = %path.display(), count = registry.students.len(), "exported students");
    Ok(())
}

/// Write every course in catalog order.
pub fn export_courses(registry: &Registry, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for course in registry.courses.list() {
        writer.serialize(CourseRow::from_course(course))?;
    }
    writer.flush()?;
    tracing::info!(path = %path.display(), count = registry.courses.len(), "exported courses");
    Ok(())
}

/// Read students into the directory. Returns how many were added.
pub fn import_students(registry: &mut Registry, path: &Path) -> Result<usize> {
    if !path.exists() {
        return Err(DataError::FileNotFound(path.to_path_buf()));
    }
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;
    let mut count = 0;
    for record in reader.deserialize() {
        let row: StudentRow = record?;
        registry.students.add(row.into_student())?;
        count += 1;
    }
    tracing::info!(path = %path.display(), count, "imported students");
    Ok(count)
}

/// Read courses into the catalog (upsert by code). Returns how many
/// rows were applied.
pub fn import_courses(registry: &mut Registry, path: &Path) -> Result<usize> {
    if !path.exists() {
        return Err(DataError::FileNotFound(path.to_path_buf()));
    }
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;
    let mut count = 0;
    for record in reader.deserialize() {
        let row: CourseRow = record?;
        registry.courses.add(row.into_course()?);
        count += 1;
    }
    tracing::info!(path = %path.display(), count, "imported courses");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::seed_sample_data;
    use registrar_core::model::Semester;

    #[test]
    fn students_roundtrip() {
        let mut reg = Registry::new();
        seed_sample_data(&mut reg).unwrap();
        reg.students.deactivate("S003");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.csv");
        export_students(&reg, &path).unwrap();

        let mut fresh = Registry::new();
        assert_eq!(import_students(&mut fresh, &path).unwrap(), 3);
        let ids: Vec<&str> = fresh.students.list().map(|s| s.id()).collect();
        assert_eq!(ids, ["S001", "S002", "S003"]);
        assert!(!fresh.students.get("S003").unwrap().active);
        assert_eq!(
            fresh.students.get("S001").unwrap().person.full_name,
            "John Doe"
        );
    }

    #[test]
    fn courses_roundtrip() {
        let mut reg = Registry::new();
        seed_sample_data(&mut reg).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("courses.csv");
        export_courses(&reg, &path).unwrap();

        let mut fresh = Registry::new();
        assert_eq!(import_courses(&mut fresh, &path).unwrap(), 3);
        let math = fresh.courses.get("MATH101").unwrap();
        assert_eq!(math.credits, 4);
        assert_eq!(math.semester, Some(Semester::Spring));
        assert_eq!(math.instructor_id.as_deref(), Some("I002"));
        let phys = fresh.courses.get("PHYS101").unwrap();
        assert_eq!(phys.semester, Some(Semester::Fall));
        assert!(phys.instructor_id.is_none());
    }

    #[test]
    fn import_duplicate_student_id_fails() {
        let mut reg = Registry::new();
        seed_sample_data(&mut reg).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.csv");
        export_students(&reg, &path).unwrap();

        // importing into the same registry collides on every id
        let err = import_students(&mut reg, &path).unwrap_err();
        assert!(matches!(err, DataError::Registry(_)));
    }

    #[test]
    fn import_missing_file() {
        let mut reg = Registry::new();
        let err = import_students(&mut reg, Path::new("/nonexistent/students.csv")).unwrap_err();
        assert!(matches!(err, DataError::FileNotFound(_)));
    }
}
