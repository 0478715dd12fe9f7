//! Best-effort file header reader.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use bundlescan_core::macho::MAGIC_LEN;

/// Maximum number of bytes returned by [`read_header`].
pub const HEADER_LEN: usize = MAGIC_LEN;

/// Read up to the first [`HEADER_LEN`] bytes of a file.
///
/// The returned buffer is shorter than [`HEADER_LEN`] when the file is. The
/// file handle is released before returning on every path.
pub fn read_header(path: impl AsRef<Path>) -> io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(HEADER_LEN);
    file.take(HEADER_LEN as u64).read_to_end(&mut header)?;
    Ok(header)
}
