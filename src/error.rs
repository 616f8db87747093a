//! Error types for the library's I/O surface.
//!
//! Pipeline failures never surface here: they travel inside
//! [`GenerationResult`](bim_types::GenerationResult). These variants cover
//! what happens around the pipeline (persisting artifacts, serializing
//! results, unwrapping an envelope with `?`).

use std::path::PathBuf;

use bim_types::GenerationError;
use thiserror::Error;

/// Main error type for the crate
#[derive(Error, Debug)]
pub enum BimError {
    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("Failed to write artifact to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type BimResult<T> = Result<T, BimError>;
