//! Template error types

use std::path::PathBuf;
use thiserror::Error;

/// Template rendering errors
///
/// Exactly two failure modes exist: the template resource cannot be read, or
/// its placeholder syntax is malformed. Unmapped placeholders are not errors.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// The template path could not be read
    #[error("TEMPLATE_NOT_FOUND: cannot read template '{}': {source}", path.display())]
    NotFound {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Malformed placeholder syntax
    #[error("TEMPLATE_SYNTAX: {message} at line {line}")]
    Syntax {
        /// What is wrong with the token
        message: String,
        /// Line of the opening braces
        line: usize,
    },
}
