use std::io;

use thiserror::Error;

use crate::{framing::FramingError, headers::HeaderError};

/// Unified error covering framing, file structure, names, indices and I/O.
/// - `From<T>` impls let `?` cross the layer boundaries.
/// - A premature end of input is always reported as `UnexpectedEof`,
///   never as a short read.
#[derive(Debug, Error)]
pub enum SelectError {
    /// Record boundary check failed (length mismatch, bad length, misaligned payload).
    #[error("framing error: {0}")]
    Framing(FramingError),

    /// Input exhausted before a required field or record could be read.
    #[error("unexpected end of input: {0}")]
    UnexpectedEof(FramingError),

    /// Structurally invalid file (wrong name table size, missing selections).
    #[error("malformed selection file: {0}")]
    MalformedFile(String),

    /// Name contains characters outside ASCII.
    #[error("invalid name: {reason}")]
    InvalidName { reason: String },

    /// Selection or particle-type index outside `0..max`.
    #[error("{what} index {index} out of range 0..{max}")]
    IndexOutOfRange { what: &'static str, index: usize, max: usize },

    /// Header record could not be built or parsed.
    #[error("header error: {0}")]
    Header(#[from] HeaderError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<FramingError> for SelectError {
    fn from(e: FramingError) -> Self {
        match e {
            e if e.is_eof() => SelectError::UnexpectedEof(e),
            FramingError::Io(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                SelectError::UnexpectedEof(FramingError::Io(err))
            }
            FramingError::Io(err) => SelectError::Io(err),
            e => SelectError::Framing(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, SelectError>;
