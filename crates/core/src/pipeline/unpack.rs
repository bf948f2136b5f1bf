use std::{
    fs::{File, create_dir_all},
    io::{BufReader, copy},
    path::Path,
};

use log::{debug, warn};
use zip::ZipArchive;

use crate::error::{Error, Result};

/// Extract every file of `zip_path` into `out_dir`.
///
/// Returns the archive paths of the extracted files. Directory entries are
/// skipped and entries that would land outside `out_dir` are refused.
pub fn unpack_kit(zip_path: &Path, out_dir: &Path) -> Result<Vec<String>> {
    create_dir_all(out_dir).map_err(|e| Error::io(out_dir, e))?;

    let file = File::open(zip_path).map_err(|e| Error::io(zip_path, e))?;
    let mut archive = ZipArchive::new(BufReader::new(file))?;

    let mut extracted = Vec::new();
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if entry.is_dir() {
            continue;
        }
        let Some(relative) = entry.enclosed_name() else {
            warn!("Skipping unsafe zip entry {}", entry.name());
            continue;
        };

        let target = out_dir.join(relative);
        if let Some(parent) = target.parent() {
            create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        let mut output = File::create(&target).map_err(|e| Error::io(&target, e))?;
        copy(&mut entry, &mut output).map_err(|e| Error::io(&target, e))?;

        debug!("  {}", entry.name());
        extracted.push(entry.name().to_owned());
    }

    Ok(extracted)
}
