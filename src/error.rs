//! Library-wide error and result types.

use std::fmt;
use std::io;

/// Result alias used throughout cczkit.
pub type Result<T> = std::result::Result<T, Error>;

/// All errors the library can produce.
///
/// Every malformed-input condition maps to one of these variants; the decoder
/// never panics or aborts on bad data. Message formatting beyond `Display`
/// and exit-code mapping are left to the caller.
#[derive(Debug)]
pub enum Error {
    /// The input is shorter than the 16-byte CCZ header.
    TruncatedHeader,
    /// The signature is neither `CCZ!` nor `CCZp`.
    InvalidSignature,
    /// The signature is `CCZp`, a known legacy variant that is not
    /// implemented.
    UnsupportedLegacyFormat,
    /// The header version is newer than this decoder understands.
    UnsupportedVersion(u16),
    /// The payload codec is anything other than zlib.
    UnsupportedCompression(u16),
    /// The declared uncompressed length is zero or exceeds the allocation
    /// ceiling.
    InvalidLength(u32),
    /// The output buffer could not be allocated.
    OutOfMemory,
    /// The zlib stream was corrupt, truncated, or did not inflate to exactly
    /// the declared length.
    DecompressionFailed(&'static str),
    /// An underlying I/O operation failed (file helpers only).
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TruncatedHeader => write!(f, "file too short for CCZ header"),
            Error::InvalidSignature => write!(f, "invalid CCZ signature"),
            Error::UnsupportedLegacyFormat => write!(f, "unsupported legacy CCZp container"),
            Error::UnsupportedVersion(v) => write!(f, "unsupported CCZ header version: {v}"),
            Error::UnsupportedCompression(c) => {
                write!(f, "unsupported CCZ compression method: {c}")
            }
            Error::InvalidLength(n) => write!(f, "invalid uncompressed length: {n}"),
            Error::OutOfMemory => write!(f, "failed to allocate output buffer"),
            Error::DecompressionFailed(s) => write!(f, "failed to uncompress data: {s}"),
            Error::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Error::Io(e) = self {
            Some(e)
        } else {
            None
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}
