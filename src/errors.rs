//! Unified application error type.
//! All modules (store, core, cli, config, export) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store / workflow errors
    // ---------------------------
    #[error("Index {index} is out of range (records: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Container number must not be empty")]
    EmptyIdentifier,

    #[error("No record is currently being edited")]
    NoActiveEdit,

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid port: {0}")]
    InvalidPort(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("{0}")]
    Command(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
