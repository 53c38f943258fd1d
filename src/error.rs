//! Converter error types

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Ragged matrix rows: expected {expected} columns, got {got}")]
    RaggedRows { expected: usize, got: usize },

    #[error("Invalid shape for {name}: expected {expected:?}, got {got:?}")]
    InvalidShape {
        name: String,
        expected: (usize, usize),
        got: (usize, usize),
    },

    #[error("Plot error: {0}")]
    Plot(String),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
