//! The `registrar init` command.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use registrar_core::Registry;
use registrar_io::sample::seed_sample_data;

use crate::config::AppConfig;

pub fn execute(config: &AppConfig) -> Result<()> {
    if Path::new("registrar.toml").exists() {
        println!("registrar.toml already exists, skipping.");
    } else {
        fs::write("registrar.toml", SAMPLE_CONFIG)?;
        println!("Created registrar.toml");
    }

    fs::create_dir_all(&config.data_dir)
        .with_context(|| format!("failed to create {}", config.data_dir.display()))?;

    if config.students_file().exists() || config.courses_file().exists() {
        println!(
            "Data files already exist in {}, skipping seed.",
            config.data_dir.display()
        );
        return Ok(());
    }

    let mut registry = Registry::new();
    seed_sample_data(&mut registry)?;
    registrar_io::csv::export_students(&registry, &config.students_file())?;
    registrar_io::csv::export_courses(&registry, &config.courses_file())?;
    println!("Created {}", config.students_file().display());
    println!("Created {}", config.courses_file().display());

    println!("\nNext steps:");
    println!("  1. Run: registrar list students");
    println!("  2. Run: registrar backup create");
    println!("  3. Run: registrar demo");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# registrar configuration

# Directory holding students.csv and courses.csv
data_dir = "./registrar-data"

# Backup folders land in <data_dir>/backups unless overridden:
# backup_dir = "/var/backups/registrar"
"#;
