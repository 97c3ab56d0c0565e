//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All fallible operations return [`Result<T, RevelationError>`](RevelationError).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The error type for all Revelation reader operations.
///
/// A format mismatch is not an error: the probe reports it as `false`
/// so a dispatcher can move on to the next version strategy.
#[derive(Error, Debug)]
pub enum RevelationError {
    /// The candidate file could not be opened for the probe.
    ///
    /// Distinct from a format mismatch: an unreadable path is surfaced
    /// to the caller instead of being folded into a `false` result.
    #[error("file {path:?} could not be opened for reading")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O error on an already-open stream.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The stream ended before the full 32-byte salt was available.
    ///
    /// Raised instead of deriving a key from a short salt.
    #[error("truncated salt: expected {expected} bytes, read {actual}")]
    TruncatedSalt { expected: usize, actual: usize },
}
