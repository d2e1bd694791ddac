//! registrar-io — CSV import/export and backup management.
//!
//! Collaborator crate sitting outside the core engine: it moves
//! students and courses between a [`registrar_core::Registry`] and the
//! flat-file row contracts, and manages timestamped backup folders.

pub mod backup;
pub mod csv;
pub mod rows;
pub mod sample;

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while importing, exporting, or backing up data.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV failure: {0}")]
    Csv(#[from] ::csv::Error),

    /// The core rejected an imported row (duplicate id, zero credits).
    #[error(transparent)]
    Registry(#[from] registrar_core::RegistryError),

    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("no backup found under {0}")]
    NoBackupFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, DataError>;
