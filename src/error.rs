//! Error type shared by every stage of the conversion.

use std::io;
use thiserror::Error;

/// Everything that can abort a conversion. All variants are fatal.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("No arguments were provided.")]
    MissingArgument,

    #[error("Cannot open file specified")]
    OpenFailed(#[source] io::Error),

    #[error("Cannot get file size")]
    SizeQueryFailed(#[source] io::Error),

    #[error("File is too big")]
    SizeUnsupported { size: u64 },

    #[error("Out of memory")]
    OutOfMemory,

    #[error("Cannot read file")]
    ReadFailed(#[source] io::Error),

    #[error("Cannot read file")]
    ShortRead { expected: usize, actual: usize },

    #[error("Cannot convert characters")]
    InvalidSourceEncoding { offset: usize },

    #[error("Cannot convert characters")]
    EncodingFailure,

    #[error("Cannot write file")]
    WriteFailed(#[source] io::Error),

    #[error("Cannot write file")]
    ShortWrite { expected: usize, actual: usize },
}

impl ConvertError {
    /// The OS-level cause, when the failure came from the operating system.
    ///
    /// Reporting appends this cause's description to the message.
    pub fn os_error(&self) -> Option<&io::Error> {
        match self {
            ConvertError::OpenFailed(e)
            | ConvertError::SizeQueryFailed(e)
            | ConvertError::ReadFailed(e)
            | ConvertError::WriteFailed(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::collections::TryReserveError> for ConvertError {
    fn from(_: std::collections::TryReserveError) -> Self {
        ConvertError::OutOfMemory
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
