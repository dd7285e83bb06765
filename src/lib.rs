//! **cczkit** - decoder for CCZ zlib-compressed asset containers.
//!
//! # Modules
//! | Module | Purpose |
//! |--------|---------|
//! | [`formats::ccz`]      | CCZ header parsing, validation, decode and encode |
//! | [`compression::zlib`] | Exact-length inflate and deflate |
//! | [`files`]             | Whole-file read/decode/write and output naming |
//!
//! # Example
//! ```
//! let file = cczkit::formats::ccz::encode(b"hello world")?;
//! assert_eq!(cczkit::formats::ccz::decode(&file)?, b"hello world");
//! # Ok::<(), cczkit::Error>(())
//! ```

pub mod compression;
pub mod error;
pub mod files;
pub mod formats;
pub(crate) mod utils;

pub use error::{Error, Result};
