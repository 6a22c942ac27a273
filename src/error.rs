// src/error.rs
//
// Only resource problems surface as errors. Per-record trouble (skipped tiles,
// unmatched stats rows, empty sources) degrades to smaller output instead.

use std::path::PathBuf;
use thiserror::Error;

/// A canonical-map override resource that could not be used.
/// Callers recover by keeping the built-in map.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unsupported override shape: {0}")]
    Shape(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, Error>;
