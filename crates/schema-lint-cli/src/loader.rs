//! Loader for resolved-program JSON documents.
//!
//! The parse/type-resolution frontend is a separate tool; it emits the
//! resolved program as JSON in the `schema_lint_core::program` model. This
//! loader only deserializes that hand-off. A load failure is fatal: the
//! engine never runs over a partially resolved program.

use schema_lint_core::Program;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading a resolved program.
#[derive(Debug, Error)]
pub enum LoadError {
    /// IO error reading the document.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the unreadable document.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The document is not a valid resolved-program JSON model.
    #[error("malformed resolved program in {path}: {source}")]
    Malformed {
        /// Path of the malformed document.
        path: PathBuf,
        /// Underlying deserialization error.
        source: serde_json::Error,
    },
}

/// Loads one resolved-program document.
pub fn load_program(path: &Path) -> Result<Program, LoadError> {
    debug!("loading resolved program from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| LoadError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads several documents and merges them into one program.
pub fn load_programs(paths: &[PathBuf]) -> Result<Program, LoadError> {
    let mut merged = Program::default();
    for path in paths {
        let program = load_program(path)?;
        merged.files.extend(program.files);
    }
    Ok(merged)
}
