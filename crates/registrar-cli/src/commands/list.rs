//! The `registrar list` command.

use anyhow::Result;
use clap::ValueEnum;
use comfy_table::{Cell, Table};
use registrar_core::Registry;

use crate::config::AppConfig;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListKind {
    Students,
    Courses,
}

pub fn execute(kind: ListKind, config: &AppConfig) -> Result<()> {
    let registry = super::load_registry(config)?;
    match kind {
        ListKind::Students => {
            if registry.students.is_empty() {
                println!("No students found in {}", config.data_dir.display());
            } else {
                println!("{}", student_table(&registry));
            }
        }
        ListKind::Courses => {
            if registry.courses.is_empty() {
                println!("No courses found in {}", config.data_dir.display());
            } else {
                println!("{}", course_table(&registry));
            }
        }
    }
    Ok(())
}

pub(crate) fn student_table(registry: &Registry) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Reg No", "Name", "Email", "Status", "GPA"]);
    for student in registry.students.list() {
        let gpa = registry
            .calculate_gpa(student.id())
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(student.id()),
            Cell::new(&student.reg_no),
            Cell::new(&student.person.full_name),
            Cell::new(&student.person.email),
            Cell::new(if student.active { "ACTIVE" } else { "INACTIVE" }),
            Cell::new(format!("{gpa:.2}")),
        ]);
    }
    table
}

pub(crate) fn course_table(registry: &Registry) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "Code",
        "Title",
        "Credits",
        "Department",
        "Semester",
        "Instructor",
        "Status",
    ]);
    for course in registry.courses.list() {
        table.add_row(vec![
            Cell::new(course.code()),
            Cell::new(&course.title),
            Cell::new(course.credits),
            Cell::new(&course.department),
            Cell::new(
                course
                    .semester
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "-".into()),
            ),
            Cell::new(course.instructor_id.as_deref().unwrap_or("-")),
            Cell::new(if course.active { "ACTIVE" } else { "INACTIVE" }),
        ]);
    }
    table
}
