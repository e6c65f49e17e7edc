/*!
 * Error types for the punchout application.
 *
 * Domain errors are defined with the thiserror crate; application plumbing
 * uses anyhow and converts into these where a typed error is needed.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while producing a cloze sheet
#[derive(Error, Debug)]
pub enum SheetError {
    /// The source document could not be opened
    #[error("Not found: {} ({source})", .path.display())]
    InputNotFound {
        /// Path of the missing input
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The output sheet could not be created
    #[error("Could not open output file: {} ({source})", .path.display())]
    OutputCreate {
        /// Path of the output that failed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Reading or writing failed part way through a document
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<anyhow::Error> for SheetError {
    fn from(error: anyhow::Error) -> Self {
        Self::Config(error.to_string())
    }
}
