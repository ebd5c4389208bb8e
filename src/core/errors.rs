/*!
 * Error Types
 * Boundary error handling with thiserror and miette
 *
 * The simulation engine itself has no recoverable error paths; everything
 * here is raised before a scheduler is constructed.
 */

use crate::core::types::{Pid, Tick};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Process file loading errors
#[derive(Error, Debug, Diagnostic)]
pub enum LoadError {
    #[error("Cannot read process file {}: {source}", .path.display())]
    #[diagnostic(
        code(loader::io),
        help("Check that the path exists and is readable.")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: expected 3 comma-separated fields, found {found}")]
    #[diagnostic(
        code(loader::field_count),
        help("Each record must look like `id,arrival,burst`, e.g. `1,0,5`.")
    )]
    FieldCount { line: usize, found: usize },

    #[error("Line {line}: {field} is not a non-negative integer: {value:?}")]
    #[diagnostic(
        code(loader::invalid_field),
        help("Fields must be whole numbers of ticks.")
    )]
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("Line {line}: process {id} has a zero burst time")]
    #[diagnostic(
        code(loader::zero_burst),
        help("Every process needs at least one tick of service.")
    )]
    ZeroBurst { line: usize, id: Pid },

    #[error("Line {line}: duplicate process id {id}")]
    #[diagnostic(code(loader::duplicate_id), help("Process ids must be unique."))]
    DuplicateId { line: usize, id: Pid },

    #[error("Process file contains no records")]
    #[diagnostic(code(loader::empty), help("Add at least one `id,arrival,burst` line."))]
    Empty,
}

impl LoadError {
    /// 1-based source line the error points at, if any
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::FieldCount { line, .. }
            | Self::InvalidField { line, .. }
            | Self::ZeroBurst { line, .. }
            | Self::DuplicateId { line, .. } => Some(*line),
            Self::Io { .. } | Self::Empty => None,
        }
    }
}

/// Simulation configuration errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ConfigError {
    #[error("Time quantum must be at least one tick, got {0}")]
    #[diagnostic(
        code(config::zero_quantum),
        help("A quantum of zero would never let a process run.")
    )]
    ZeroQuantum(Tick),
}

/// Unified simulator error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum SimError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("Cannot encode metrics: {0}")]
    #[diagnostic(code(sim::encode))]
    Encode(#[from] serde_json::Error),
}

/// Common result type for simulator boundary operations
pub type SimResult<T> = Result<T, SimError>;
