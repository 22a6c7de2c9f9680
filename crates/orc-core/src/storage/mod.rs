//! Configuration file storage

pub mod file;

pub use file::{ConfigFile, ReaderResult};

use std::path::PathBuf;
use thiserror::Error;

/// Low-level storage failure, carried as the cause inside the
/// stage-wrapped [`crate::Error`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

/// Default location of the configuration file: a dotfile in the
/// user's home directory.
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .expect("Could not find home directory")
        .join(".orc.conf.json")
}
