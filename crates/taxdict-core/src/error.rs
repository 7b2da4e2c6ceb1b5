//! Error types for the dictionary pipeline

use thiserror::Error;

/// Fatal errors of a dictionary run.
///
/// Per-record format problems are not represented here: the parser logs
/// them and resumes at the next record delimiter. The only hard failures
/// are I/O errors on the input or output file.
#[derive(Error, Debug)]
pub enum DictError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
