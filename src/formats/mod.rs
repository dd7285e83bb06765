//! Parsers for container formats.
//!
//! Parsers follow the same conventions:
//!
//! * **Slices in, owned data out** - input is a borrowed `&[u8]` holding the
//!   whole file; results are returned by value and owned by the caller.
//! * **Validate before allocating** - every header field that sizes an
//!   allocation is checked against a ceiling first.
//! * **No I/O, no logging** - see [`crate::files`] for the filesystem side.
//!
//! ## Format overview
//!
//! | Module  | Format | Description |
//! |---------|--------|-------------|
//! | [`ccz`] | CCZ    | 16-byte big-endian header plus a zlib stream; wraps textures and other assets |

pub mod ccz;
