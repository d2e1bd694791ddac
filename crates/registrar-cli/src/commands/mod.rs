//! One module per subcommand.

pub mod backup;
pub mod demo;
pub mod export;
pub mod import;
pub mod init;
pub mod list;

use anyhow::{Context, Result};
use registrar_core::Registry;

use crate::config::AppConfig;

/// Load whatever CSVs exist in the data directory into a fresh registry.
/// Courses first, so student enrollments (when they appear in future
/// formats) would resolve against a populated catalog.
pub(crate) fn load_registry(config: &AppConfig) -> Result<Registry> {
    let mut registry = Registry::new();
    let courses = config.courses_file();
    if courses.exists() {
        registrar_io::csv::import_courses(&mut registry, &courses)
            .with_context(|| format!("failed to import {}", courses.display()))?;
    }
    let students = config.students_file();
    if students.exists() {
        registrar_io::csv::import_students(&mut registry, &students)
            .with_context(|| format!("failed to import {}", students.display()))?;
    }
    tracing::debug!(
        students = registry.students.len(),
        courses = registry.courses.len(),
        "registry loaded from data directory"
    );
    Ok(registry)
}
