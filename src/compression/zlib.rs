//! zlib (RFC 1950) inflate and deflate.
//!
//! CCZ payloads are a single zlib stream whose inflated size is recorded in
//! the container header. [`inflate_exact`] mirrors zlib's one-shot
//! `uncompress`: the destination is sized up front and the call succeeds
//! only when the stream ends having produced exactly that many bytes.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};

use crate::{Error, Result};

/// Highest zlib compression level.
pub const MAX_LEVEL: u32 = 9;

/// Inflate a complete zlib stream into a buffer of exactly `expected_len`
/// bytes.
///
/// The buffer is reserved fallibly, so an allocation failure is reported as
/// [`Error::OutOfMemory`] instead of aborting. Returns
/// [`Error::DecompressionFailed`] if the stream is corrupt, ends early, or
/// inflates to anything other than `expected_len` bytes; the partially
/// filled buffer is dropped in that case.
pub fn inflate_exact(data: &[u8], expected_len: usize) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    out.try_reserve_exact(expected_len)
        .map_err(|_| Error::OutOfMemory)?;

    let mut z = Decompress::new(true);
    let status = z
        .decompress_vec(data, &mut out, FlushDecompress::Finish)
        .map_err(|_| Error::DecompressionFailed("corrupt zlib stream"))?;

    match status {
        Status::StreamEnd if out.len() == expected_len => Ok(out),
        Status::StreamEnd => Err(Error::DecompressionFailed(
            "stream shorter than declared length",
        )),
        // Output space ran out before the stream finished.
        _ if out.len() >= expected_len => Err(Error::DecompressionFailed(
            "stream longer than declared length",
        )),
        _ => Err(Error::DecompressionFailed("truncated zlib stream")),
    }
}

/// Compress `data` as a single zlib stream.
///
/// `level` is clamped to [`MAX_LEVEL`].
pub fn deflate(data: &[u8], level: u32) -> Result<Vec<u8>> {
    let mut enc = ZlibEncoder::new(Vec::new(), Compression::new(level.min(MAX_LEVEL)));
    enc.write_all(data)?;
    Ok(enc.finish()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inflates_exact_length() {
        let z = deflate(b"hello world", 6).unwrap();
        assert_eq!(inflate_exact(&z, 11).unwrap(), b"hello world");
    }

    #[test]
    fn rejects_short_declared_length() {
        let z = deflate(b"hello world", 6).unwrap();
        assert!(matches!(
            inflate_exact(&z, 5),
            Err(Error::DecompressionFailed(_))
        ));
    }

    #[test]
    fn rejects_long_declared_length() {
        let z = deflate(b"hello world", 6).unwrap();
        assert!(matches!(
            inflate_exact(&z, 12),
            Err(Error::DecompressionFailed(_))
        ));
    }

    #[test]
    fn rejects_truncated_stream() {
        let data = vec![0x5Au8; 4096];
        let z = deflate(&data, 6).unwrap();
        assert!(matches!(
            inflate_exact(&z[..z.len() / 2], data.len()),
            Err(Error::DecompressionFailed(_))
        ));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            inflate_exact(&[0xFF; 32], 16),
            Err(Error::DecompressionFailed(_))
        ));
    }

    #[test]
    fn unallocatable_length_is_out_of_memory() {
        assert!(matches!(
            inflate_exact(&[0x78, 0x9C], usize::MAX),
            Err(Error::OutOfMemory)
        ));
    }

    #[test]
    fn level_is_clamped() {
        let z = deflate(b"abcabcabc", 42).unwrap();
        assert_eq!(inflate_exact(&z, 9).unwrap(), b"abcabcabc");
    }
}
