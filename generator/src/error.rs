//! Error types for source generation.

use std::path::PathBuf;

use opgen_spec::SpecError;

/// Errors that can occur while generating or writing a source file.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The request failed validation; nothing was rendered.
    #[error(transparent)]
    Spec(#[from] SpecError),

    /// The generator configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),

    /// The output file could not be written.
    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Standard output could not be written.
    #[error("failed to write to stdout: {0}")]
    Stdout(#[source] std::io::Error),
}
