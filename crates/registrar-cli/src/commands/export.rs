//! The `registrar export` command.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::AppConfig;

pub fn execute(out: &Path, config: &AppConfig) -> Result<()> {
    let registry = super::load_registry(config)?;
    if registry.students.is_empty() && registry.courses.is_empty() {
        anyhow::bail!(
            "nothing to export: no data found in {}",
            config.data_dir.display()
        );
    }

    fs::create_dir_all(out).with_context(|| format!("failed to create {}", out.display()))?;
    let students = out.join("students.csv");
    let courses = out.join("courses.csv");
    registrar_io::csv::export_students(&registry, &students)?;
    registrar_io::csv::export_courses(&registry, &courses)?;

    println!(
        "Exported {} student(s) to {}",
        registry.students.len(),
        students.display()
    );
    println!(
        "Exported {} course(s) to {}",
        registry.courses.len(),
        courses.display()
    );
    Ok(())
}
