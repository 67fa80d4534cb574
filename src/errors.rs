//! Unified application error type.
//! All modules (store, core, export, notify, cli) return AppError to keep the
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
    // Dataset storage
    // ---------------------------
    #[error("Dataset error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid hours value: {0} (must be zero or positive)")]
    InvalidHours(f64),

    #[error("Invalid MOC count: {0} (must be at least 1)")]
    InvalidCount(u32),

    // ---------------------------
    // Session gate
    // ---------------------------
    #[error("Invalid credentials.")]
    AccessDenied,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Mail
    // ---------------------------
    #[error("Mail error: {0}")]
    Mail(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
