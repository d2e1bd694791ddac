//! The `registrar backup` command family.

use anyhow::Result;
use clap::Subcommand;
use registrar_core::Registry;
use registrar_io::backup;

use crate::config::AppConfig;

#[derive(Debug, Subcommand)]
pub enum BackupAction {
    /// Snapshot the data directory into a timestamped backup folder
    Create,
    /// Restore the data directory from the latest backup
    Restore,
    /// List existing backup folders
    List,
    /// Report total size of all backups in bytes
    Size,
}

pub fn execute(action: BackupAction, config: &AppConfig) -> Result<()> {
    let backup_root = config.backup_dir();
    match action {
        BackupAction::Create => {
            let registry = super::load_registry(config)?;
            let dir = backup::create_backup(&registry, &backup_root)?;
            println!("Backup created: {}", dir.display());
        }
        BackupAction::Restore => {
            let mut registry = Registry::new();
            let dir = backup::restore_latest(&mut registry, &backup_root)?;
            std::fs::create_dir_all(&config.data_dir)?;
            registrar_io::csv::export_students(&registry, &config.students_file())?;
            registrar_io::csv::export_courses(&registry, &config.courses_file())?;
            println!("Restored from: {}", dir.display());
        }
        BackupAction::List => {
            let backups = backup::list_backups(&backup_root)?;
            if backups.is_empty() {
                println!("No backups found under {}", backup_root.display());
            } else {
                for dir in backups {
                    println!("{}", dir.display());
                }
            }
        }
        BackupAction::Size => {
            let size = backup::total_size(&backup_root)?;
            println!("{size} bytes");
        }
    }
    Ok(())
}
