//! Compression and decompression helpers.
//!
//! ## Submodules
//!
//! | Module | Algorithm | Typical use in cczkit |
//! |--------|-----------|-----------------------|
//! | [`zlib`] | zlib / deflate | CCZ payloads (compression type 0) |
//!
//! The other codec identifiers a CCZ header can carry (bzip2, gzip, plain)
//! are recognised by [`crate::formats::ccz`] but have no implementation
//! here; containers using them are rejected before any decompression is
//! attempted.
//!
//! ## Choosing the right function
//!
//! * **Decoding** - the inflated size is known from the header; use
//!   [`zlib::inflate_exact`], which allocates exactly that many bytes and
//!   fails on any size mismatch.
//! * **Encoding** - use [`zlib::deflate`] and record the input length in the
//!   container header.

pub mod zlib;
