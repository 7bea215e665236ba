use std::{fs, io::Write, path::Path};

use serde::Serialize;
use tempfile::NamedTempFile;

use crate::error::Result;

/// Serializes `data` as json indented with four spaces and writes it to `path`.
///
/// The content goes to a temporary file in the same directory first and is then
/// renamed over `path`, so readers see either the old or the new file.
pub fn save_to_file<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    // Create all parent directories if they don't exist
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut file = NamedTempFile::new_in(parent)?;
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut file, formatter);
    data.serialize(&mut serializer)?;
    file.write_all(b"\n")?;
    file.flush()?;

    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
