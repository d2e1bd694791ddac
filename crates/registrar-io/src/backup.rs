//! Timestamped backup folders holding the exported CSVs.
//!
//! A backup is a directory `backup_YYYYMMDD_HHMMSS` containing
//! `students.csv` and `courses.csv`. Restore picks the
//! lexicographically latest folder, which the timestamp format makes
//! the newest one.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use registrar_core::Registry;

use crate::{csv, DataError, Result};

const STUDENTS_FILE: &str = "students.csv";
const COURSES_FILE: &str = "courses.csv";

/// Export both CSVs into a fresh timestamped folder under `backup_root`.
/// Returns the created folder.
pub fn create_backup(registry: &Registry, backup_root: &Path) -> Result<PathBuf> {
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    let dir = backup_root.join(format!("backup_{stamp}"));
    fs::create_dir_all(&dir)?;

    csv::export_students(registry, &dir.join(STUDENTS_FILE))?;
    csv::export_courses(registry, &dir.join(COURSES_FILE))?;

    tracing::info!(dir = %dir.display(), "backup created");
    Ok(dir)
}

/// Import students and courses from the latest backup folder.
/// Returns the folder that was restored.
pub fn restore_latest(registry: &mut Registry, backup_root: &Path) -> Result<PathBuf> {
    let latest = list_backups(backup_root)?
        .pop()
        .ok_or_else(|| DataError::NoBackupFound(backup_root.to_path_buf()))?;

    csv::import_students(registry, &latest.join(STUDENTS_FILE))?;
    csv::import_courses(registry, &latest.join(COURSES_FILE))?;

    tracing::info!(dir = %latest.display(), "backup restored");
    Ok(latest)
}

/// Backup folders under `backup_root`, sorted oldest-first.
/// A missing root is the same as an empty one.
pub fn list_backups(backup_root: &Path) -> Result<Vec<PathBuf>> {
    if !backup_root.exists() {
        return Ok(Vec::new());
    }
    let mut dirs: Vec<PathBuf> = fs::read_dir(backup_root)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| {
            p.is_dir()
                && p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with("backup_"))
        })
        .collect();
    dirs.sort();
    Ok(dirs)
}

/// Total size in bytes of every file under `backup_root`, recursively.
pub fn total_size(backup_root: &Path) -> Result<u64> {
    fn walk(dir: &Path) -> std::io::Result<u64> {
        let mut size = 0;
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                size += walk(&path)?;
            } else {
                size += fs::metadata(&path)?.len();
            }
        }
        Ok(size)
    }

    if !backup_root.exists() {
        return Ok(0);
    }
    Ok(walk(backup_root)?)
}
