//! Shared kit file utilities.

use std::{
    fs::{read, read_dir, write},
    io::ErrorKind,
    path::Path,
};

use glob::{Pattern, glob};

use crate::error::{Error, Result};

/// Directories some archivers add next to the real kit content.
const IGNORED_DIRS: &[&str] = &["__MACOSX"];

/// Read a whole text file, replacing invalid UTF-8 sequences.
///
/// Vendor pages are not always UTF-8 (older ones are Latin-1).
pub fn read_text(path: &Path) -> Result<String> {
    read(path).map(decode_lossy).map_err(|e| Error::io(path, e))
}

fn decode_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

/// Read a marker file, treating a missing file as `None`.
///
/// Only absence is swallowed; permission and disk errors still propagate.
pub fn read_marker(path: &Path) -> Result<Option<String>> {
    match read(path) {
        Ok(bytes) => Ok(Some(decode_lossy(bytes))),
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => Ok(None),
        Err(e) => Err(Error::io(path, e)),
    }
}

/// Whether a marker file exists and contains `needle`.
pub fn marker_contains(path: &Path, needle: &str) -> Result<bool> {
    Ok(read_marker(path)?.is_some_and(|text| text.contains(needle)))
}

/// Whether `path` exists; errors other than absence propagate.
pub fn exists(path: &Path) -> Result<bool> {
    path.try_exists().map_err(|e| Error::io(path, e))
}

/// Write a whole text file.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    write(path, text).map_err(|e| Error::io(path, e))
}

/// File names in `dir` with the given extension, sorted.
pub fn find_files_by_extension(dir: &Path, extension: &str) -> Result<Vec<String>> {
    let dir_pattern = Pattern::escape(&dir.to_string_lossy());
    let pattern = format!("{dir_pattern}/*.{extension}");

    let mut names = Vec::new();
    for entry in glob(&pattern)? {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            Error::io(path, e.into_error())
        })?;
        if !path.is_file() {
            continue;
        }
        if let Some(name) = path.file_name() {
            names.push(name.to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

/// Names of the subdirectories of `dir`, sorted, skipping archiver leftovers.
pub fn find_sub_dirs(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let file_type = entry.file_type().map_err(|e| Error::io(entry.path(), e))?;
        if !file_type.is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') || IGNORED_DIRS.contains(&name.as_str()) {
            continue;
        }
        names.push(name);
    }
    names.sort();
    Ok(names)
}
