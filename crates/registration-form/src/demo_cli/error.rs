//! Error types for the demo command-line flow.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors surfaced while loading, submitting, or rendering a submission file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// The submission path does not name a file.
    #[error("submission path must name a file: '{path}'")]
    InvalidPath {
        /// Path supplied on the command line.
        path: Utf8PathBuf,
    },
    /// The submission file could not be read.
    #[error("failed to read submission at '{path}': {message}")]
    Read {
        /// Path supplied on the command line.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },
    /// The submission file is not valid JSON for a raw registration.
    #[error("invalid submission JSON: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
    },
    /// Form settings could not be loaded.
    #[error("failed to load form settings: {message}")]
    Settings {
        /// Description of the configuration error.
        message: String,
    },
    /// The outcome could not be rendered.
    #[error("failed to display submission outcome: {message}")]
    Display {
        /// Description of the rendering error.
        message: String,
    },
}
