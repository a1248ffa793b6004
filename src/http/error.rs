use std::io;
use std::path::PathBuf;

use crate::http::parser::ParseError;

/// Everything that can end a connection early.
///
/// None of these escape the connection handler; the worker logs them and
/// moves on to the next connection.
#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    #[error("malformed request line: {0}")]
    Malformed(#[from] ParseError),

    #[error("resource for {path} unavailable at {location:?}: {source}")]
    ResourceUnavailable {
        path: String,
        location: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("body was {written} bytes but Content-Length advertised {expected}")]
    LengthMismatch { expected: u64, written: u64 },

    #[error("timed out while {0}")]
    Timeout(&'static str),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ConnectionError {
    /// Whether the client simply sent garbage, as opposed to a server-side fault.
    pub fn is_malformed(&self) -> bool {
        matches!(self, ConnectionError::Malformed(_))
    }
}
