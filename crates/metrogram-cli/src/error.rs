//! Error types for the Metrogram CLI.

use std::io;

use miette::Diagnostic;
use thiserror::Error;

/// The main error type for CLI operations.
#[derive(Debug, Error, Diagnostic)]
pub enum MetrogramError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Document error: {0}")]
    Document(#[from] toml::de::Error),

    #[error("Unknown station type: {0}")]
    UnknownStation(String),

    #[error("Config error: {0}")]
    Config(String),
}
