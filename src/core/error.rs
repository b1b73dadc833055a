use std::collections::TryReserveError;

use thiserror::Error;

/// Fatal errors raised while the checklist is running.
#[derive(Error, Debug)]
pub enum ChecklistError {
    #[error("Memory allocation error")]
    Allocation(#[from] TryReserveError),

    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChecklistError {
    /// Process exit status reported for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ChecklistError::Allocation(_) | ChecklistError::Io(_) => 1,
        }
    }
}

/// Errors loading `config.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ChecklistError>;
