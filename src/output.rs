// File: src/output.rs
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes `contents` to `path` through a temp file in the same directory, so
/// readers never see a half-written output file.
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let mut temp_file = NamedTempFile::new_in(parent_dir)?;
    temp_file.write_all(contents.as_bytes())?;
    temp_file.flush()?;

    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
