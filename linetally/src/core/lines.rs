// src/core/lines.rs
use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::path::Path;

/// Bytes read per call. Lines may be far longer than this.
const CHUNK_SIZE: usize = 64 * 1024;

/// Counts the newline bytes in the file at `path`.
///
/// # Errors
///
/// Returns the underlying I/O error if the file cannot be opened or read.
#[inline]
pub fn count_lines(path: &Path) -> io::Result<u64> {
    let file = File::open(path)?;
    count_lines_in(file)
}

/// Counts `\n` bytes in a stream, reading it in fixed-size chunks.
///
/// Trailing bytes after the last newline are not counted as a line, and an
/// empty stream yields 0.
///
/// # Errors
///
/// Returns any read error other than [`ErrorKind::Interrupted`], which is
/// retried.
pub fn count_lines_in<R: Read>(mut reader: R) -> io::Result<u64> {
    let mut buf = vec![0_u8; CHUNK_SIZE];
    let mut lines: u64 = 0;

    loop {
        let read = match reader.read(&mut buf) {
            Ok(0) => return Ok(lines),
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        let newlines = bytecount::count(&buf[..read], b'\n');
        lines = lines.saturating_add(u64::try_from(newlines).unwrap_or(u64::MAX));
    }
}
