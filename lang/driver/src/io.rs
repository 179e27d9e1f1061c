use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::errors::WriteError;

/// A per-file writer is acquired and closed exactly once, whichever path
/// out of this function is taken. `W`'s `Drop` does the closing; nothing
/// here keeps the writer alive past return.
pub fn write_output<W: Write>(mut writer: W, bytes: &[u8]) -> Result<(), WriteError> {
    writer.write_all(bytes).map_err(|source| WriteError::Io { path: Path::new("<writer>").to_path_buf(), source })
}

/// Writes `bytes` back to `path`, overwriting it (`--write`).
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<(), WriteError> {
    let file = fs::File::create(path).map_err(|source| WriteError::Io { path: path.to_path_buf(), source })?;
    write_output(file, bytes)
}

/// Writes `bytes` to standard output (the default, non-`--write` path).
pub fn write_stdout(bytes: &[u8]) -> Result<(), WriteError> {
    write_output(io::stdout(), bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_file_round_trips_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.go");
        write_file(&path, b"package p\n").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"package p\n");
    }
}
