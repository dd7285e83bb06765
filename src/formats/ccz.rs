//! CCZ - zlib-compressed asset container (cocos2d).
//!
//! Commonly wraps PVR textures (`.pvr.ccz`) and other binary assets. The
//! file is a fixed 16-byte header followed by a single zlib stream; the
//! header records the exact inflated size so the output can be allocated
//! once, up front.
//!
//! ## Layout
//! ```text
//! [0x00] Signature "CCZ!"              (4 bytes)
//! [0x04] CompressionType (0 = zlib)    (u16 BE)
//! [0x06] Version (<= 2)                (u16 BE)
//! [0x08] Reserved                      (u32 BE)
//! [0x0C] UncompressedLength            (u32 BE)
//! [0x10] Payload (zlib stream, file length - 0x10 bytes)
//! ```
//!
//! ## Signatures
//! * `CCZ!` - the supported container.
//! * `CCZp` - a legacy variant; recognised and rejected with
//!   [`Error::UnsupportedLegacyFormat`].
//!
//! ## Compression types
//! | Value | Codec | Status |
//! |-------|-------|--------|
//! | 0 | zlib  | supported |
//! | 1 | bzip2 | rejected |
//! | 2 | gzip  | rejected |
//! | 3 | none  | rejected |
//!
//! ## Length ceiling
//! `UncompressedLength` comes straight from the file, so it is checked
//! before anything is allocated: it must be non-zero, no larger than the
//! [`Decoder`]'s configured maximum, and no larger than the payload could
//! possibly inflate to ([`MAX_DEFLATE_RATIO`] times the payload size).

use std::io::Cursor;

use crate::compression::zlib;
use crate::utils::{be_u16, be_u32, bytesa};
use crate::{Error, Result};

/// Size of the fixed container header in bytes.
pub const HEADER_SIZE: usize = 0x10;

/// Signature of a supported container.
pub const MAGIC: [u8; 4] = *b"CCZ!";

/// Signature of the legacy, unsupported variant.
pub const MAGIC_LEGACY: [u8; 4] = *b"CCZp";

/// Newest header version this decoder accepts.
pub const MAX_VERSION: u16 = 2;

/// Version written by [`encode`].
pub const CURRENT_VERSION: u16 = 2;

/// Default ceiling on the declared uncompressed length (256 MiB).
pub const DEFAULT_MAX_UNCOMPRESSED_LEN: u32 = 256 * 1024 * 1024;

/// Upper bound on how far a deflate stream can expand its input.
pub const MAX_DEFLATE_RATIO: u64 = 1032;

/// Default zlib level used by [`encode`].
pub const DEFAULT_LEVEL: u32 = 6;

/// Classification of a header signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureKind {
    /// `CCZ!`
    Supported,
    /// `CCZp`
    Legacy,
    Unknown,
}

/// Payload codec named by the header's compression type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionType {
    Zlib,
    Bzip2,
    Gzip,
    None,
}

impl CompressionType {
    /// Map a raw header value to a known codec.
    pub fn from_raw(raw: u16) -> Option<Self> {
        match raw {
            0 => Some(CompressionType::Zlib),
            1 => Some(CompressionType::Bzip2),
            2 => Some(CompressionType::Gzip),
            3 => Some(CompressionType::None),
            _ => None,
        }
    }

    /// The value stored in the header for this codec.
    pub fn raw(self) -> u16 {
        match self {
            CompressionType::Zlib => 0,
            CompressionType::Bzip2 => 1,
            CompressionType::Gzip => 2,
            CompressionType::None => 3,
        }
    }
}

/// Parsed CCZ header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CczHeader {
    /// Raw signature bytes.
    pub signature: [u8; 4],
    /// Raw compression type (see [`CompressionType`]).
    pub compression_type: u16,
    /// Header format version.
    pub version: u16,
    /// Reserved for users; not interpreted.
    pub reserved: u32,
    /// Exact size of the inflated payload in bytes.
    pub uncompressed_len: u32,
}

impl CczHeader {
    /// Read the header fields from the start of `input` without validating
    /// them.
    ///
    /// Returns [`Error::TruncatedHeader`] if `input` is shorter than
    /// [`HEADER_SIZE`].
    pub fn read(input: &[u8]) -> Result<Self> {
        if input.len() < HEADER_SIZE {
            return Err(Error::TruncatedHeader);
        }

        let mut r = Cursor::new(&input[..HEADER_SIZE]);
        let signature = bytesa::<4>(&mut r)?;
        let compression_type = be_u16(&mut r)?;
        let version = be_u16(&mut r)?;
        let reserved = be_u32(&mut r)?;
        let uncompressed_len = be_u32(&mut r)?;

        Ok(Self {
            signature,
            compression_type,
            version,
            reserved,
            uncompressed_len,
        })
    }

    /// Read and validate the header at the start of `input` using the
    /// default length ceiling.
    ///
    /// Checks run in order: size, signature, version, compression type,
    /// declared length. The first failing check determines the error.
    pub fn parse(input: &[u8]) -> Result<Self> {
        Decoder::new().parse_header(input)
    }

    /// Classify the signature.
    pub fn signature_kind(&self) -> SignatureKind {
        match self.signature {
            MAGIC => SignatureKind::Supported,
            MAGIC_LEGACY => SignatureKind::Legacy,
            _ => SignatureKind::Unknown,
        }
    }

    /// The payload codec, or [`None`] for an unknown compression type.
    pub fn compression(&self) -> Option<CompressionType> {
        CompressionType::from_raw(self.compression_type)
    }

    /// Serialise the header to its 16-byte big-endian wire form.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0x00..0x04].copy_from_slice(&self.signature);
        bytes[0x04..0x06].copy_from_slice(&self.compression_type.to_be_bytes());
        bytes[0x06..0x08].copy_from_slice(&self.version.to_be_bytes());
        bytes[0x08..0x0C].copy_from_slice(&self.reserved.to_be_bytes());
        bytes[0x0C..0x10].copy_from_slice(&self.uncompressed_len.to_be_bytes());
        bytes
    }
}

/// CCZ decoder configuration.
///
/// Stateless apart from its limits: one `Decoder` can be shared freely
/// across threads and calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoder {
    max_uncompressed_len: u32,
}

impl Default for Decoder {
    fn default() -> Self {
        Self {
            max_uncompressed_len: DEFAULT_MAX_UNCOMPRESSED_LEN,
        }
    }
}

impl Decoder {
    /// A decoder with the default length ceiling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the ceiling on the declared uncompressed length.
    pub fn max_uncompressed_len(mut self, max: u32) -> Self {
        self.max_uncompressed_len = max;
        self
    }

    /// The configured length ceiling.
    pub fn limit(&self) -> u32 {
        self.max_uncompressed_len
    }

    /// Read and validate the header at the start of `input`.
    pub fn parse_header(&self, input: &[u8]) -> Result<CczHeader> {
        let header = CczHeader::read(input)?;

        match header.signature_kind() {
            SignatureKind::Supported => {}
            SignatureKind::Legacy => return Err(Error::UnsupportedLegacyFormat),
            SignatureKind::Unknown => return Err(Error::InvalidSignature),
        }

        if header.version > MAX_VERSION {
            return Err(Error::UnsupportedVersion(header.version));
        }

        if header.compression() != Some(CompressionType::Zlib) {
            return Err(Error::UnsupportedCompression(header.compression_type));
        }

        let len = header.uncompressed_len;
        let payload_len = (input.len() - HEADER_SIZE) as u64;
        if len == 0
            || len > self.max_uncompressed_len
            || len as u64 > payload_len.saturating_mul(MAX_DEFLATE_RATIO)
        {
            return Err(Error::InvalidLength(len));
        }

        Ok(header)
    }

    /// Decode a complete CCZ file held in memory.
    ///
    /// On success the returned buffer is exactly
    /// [`CczHeader::uncompressed_len`] bytes long.
    pub fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let header = self.parse_header(input)?;
        zlib::inflate_exact(&input[HEADER_SIZE..], header.uncompressed_len as usize)
    }
}

/// Decode a complete CCZ file with the default [`Decoder`].
pub fn decode(input: &[u8]) -> Result<Vec<u8>> {
    Decoder::new().decode(input)
}

/// Wrap `payload` in a CCZ container at the default zlib level.
pub fn encode(payload: &[u8]) -> Result<Vec<u8>> {
    encode_with_level(payload, DEFAULT_LEVEL)
}

/// Wrap `payload` in a CCZ container at the given zlib level (clamped to
/// 9).
///
/// Returns [`Error::InvalidLength`] if the payload does not fit the 32-bit
/// length field.
pub fn encode_with_level(payload: &[u8], level: u32) -> Result<Vec<u8>> {
    let uncompressed_len =
        u32::try_from(payload.len()).map_err(|_| Error::InvalidLength(u32::MAX))?;

    let header = CczHeader {
        signature: MAGIC,
        compression_type: CompressionType::Zlib.raw(),
        version: CURRENT_VERSION,
        reserved: 0,
        uncompressed_len,
    };

    let compressed = zlib::deflate(payload, level)?;
    let mut out = Vec::with_capacity(HEADER_SIZE + compressed.len());
    out.extend_from_slice(&header.to_bytes());
    out.extend_from_slice(&compressed);
    Ok(out)
}
