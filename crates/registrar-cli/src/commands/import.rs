//! The `registrar import` command.
//!
//! Validates the given CSVs by loading them through the core (duplicate
//! ids and zero-credit courses are rejected there), then installs the
//! merged result as the data directory.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::AppConfig;

pub fn execute(
    students: Option<PathBuf>,
    courses: Option<PathBuf>,
    config: &AppConfig,
) -> Result<()> {
    if students.is_none() && courses.is_none() {
        anyhow::bail!("nothing to import: pass --students and/or --courses");
    }

    let mut registry = super::load_registry(config)?;

    if let Some(path) = courses {
        let count = registrar_io::csv::import_courses(&mut registry, &path)
            .with_context(|| format!("failed to import {}", path.display()))?;
        println!("Imported {count} course(s) from {}", path.display());
    }
    if let Some(path) = students {
        let count = registrar_io::csv::import_students(&mut registry, &path)
            .with_context(|| format!("failed to import {}", path.display()))?;
        println!("Imported {count} student(s) from {}", path.display());
    }

    fs::create_dir_all(&config.data_dir)
        .with_context(|| format!("failed to create {}", config.data_dir.display()))?;
    registrar_io::csv::export_students(&registry, &config.students_file())?;
    registrar_io::csv::export_courses(&registry, &config.courses_file())?;
    println!("Data directory updated: {}", config.data_dir.display());

    Ok(())
}
