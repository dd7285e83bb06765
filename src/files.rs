//! Whole-file helpers around the in-memory decoder.
//!
//! The decoder itself never touches the filesystem or logs; these helpers
//! do both, so the binary (or any other caller) gets read, decode, write and
//! output naming in one place.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::Result;
use crate::formats::ccz::Decoder;

/// Extension stripped from input names to form the default output name.
pub const CCZ_EXTENSION: &str = "ccz";

/// Suffix appended when the input has no `.ccz` extension.
pub const FALLBACK_EXTENSION: &str = "out";

/// Read a whole file into memory.
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    let data = fs::read(path)?;
    debug!("read {} bytes from {}", data.len(), path.display());
    Ok(data)
}

/// Write `bytes` to `path`, replacing any existing file.
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes)?;
    debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Default output path for a container: `k.pvr.ccz` becomes `k.pvr`.
///
/// The `.ccz` match is case-insensitive. Inputs without that extension get
/// `.out` appended so the input is never overwritten.
pub fn output_path(input: &Path) -> PathBuf {
    match input.extension() {
        Some(ext) if ext.eq_ignore_ascii_case(CCZ_EXTENSION) => input.with_extension(""),
        _ => {
            let mut name = input.as_os_str().to_owned();
            name.push(".");
            name.push(FALLBACK_EXTENSION);
            PathBuf::from(name)
        }
    }
}

/// Decode the container at `input` and write its payload to `output`.
///
/// Returns the number of payload bytes written. Nothing is written if
/// decoding fails.
pub fn decode_file(input: &Path, output: &Path, decoder: &Decoder) -> Result<usize> {
    let data = read_file(input)?;
    let payload = decoder.decode(&data)?;
    write_file(output, &payload)?;
    info!(
        "{} -> {} ({} -> {} bytes)",
        input.display(),
        output.display(),
        data.len(),
        payload.len()
    );
    Ok(payload.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_ccz_extension() {
        assert_eq!(output_path(Path::new("k.pvr.ccz")), PathBuf::from("k.pvr"));
        assert_eq!(
            output_path(Path::new("assets/atlas.plist.CCZ")),
            PathBuf::from("assets/atlas.plist")
        );
    }

    #[test]
    fn appends_fallback_extension() {
        assert_eq!(output_path(Path::new("texture.bin")), PathBuf::from("texture.bin.out"));
        assert_eq!(output_path(Path::new("noext")), PathBuf::from("noext.out"));
    }
}
