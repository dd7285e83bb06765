//! Low-level byte-order primitives shared by the container code.
//!
//! Each read function consumes exactly the bytes it promises or returns an
//! error - there is no partial-read ambiguity. Byte order is fixed by the
//! function name and resolved at compile time by the standard
//! `from_be_bytes` conversions, so the host's endianness never
//! leaks into the wire format.

use std::io::Read;

use crate::{Error, Result};

/// Read a big-endian `u16`.
#[inline]
pub(crate) fn be_u16<R: Read>(r: &mut R) -> Result<u16> {
    Ok(u16::from_be_bytes(bytesa(r)?))
}

/// Read a big-endian `u32`.
#[inline]
pub(crate) fn be_u32<R: Read>(r: &mut R) -> Result<u32> {
    Ok(u32::from_be_bytes(bytesa(r)?))
}

/// Read exactly `N` bytes into a fixed-size array.
///
/// A short read is reported as [`Error::TruncatedHeader`]; these helpers
/// only ever read header fields.
#[inline]
pub(crate) fn bytesa<const N: usize>(r: &mut impl Read) -> Result<[u8; N]> {
    let mut b = [0u8; N];
    r.read_exact(&mut b).map_err(|_| Error::TruncatedHeader)?;
    Ok(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_big_endian_regardless_of_host() {
        let mut c = Cursor::new(&[0x00, 0x02, 0x00, 0x00, 0x00, 0x0B][..]);
        assert_eq!(be_u16(&mut c).unwrap(), 2);
        assert_eq!(be_u32(&mut c).unwrap(), 11);
    }

    #[test]
    fn short_read_is_truncation() {
        let mut c = Cursor::new(&[0x01][..]);
        assert!(matches!(be_u16(&mut c), Err(Error::TruncatedHeader)));
    }
}
