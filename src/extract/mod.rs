//! Reading the submitted archive.
//!
//! A submission is a zip archive that must contain `examples.data`, a JSON
//! document. Everything here fails hard: a missing entry or unparsable JSON
//! is an [`ExtractError`], not a rejected contribution.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::{ExtractError, ExtractResult};

use std::fs::{self, File};
use std::io::{BufReader, Read, Seek};
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info};
use zip::ZipArchive;
use zip::result::ZipError;

use crate::constants::REQUIRED_ARCHIVE_ENTRY;

/// Returns the first regular file in `dir`, by file name.
pub fn find_input_file(dir: &Path) -> ExtractResult<PathBuf> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }

    files.sort();
    files
        .into_iter()
        .next()
        .ok_or_else(|| ExtractError::NoInputFile {
            dir: dir.to_path_buf(),
        })
}

/// Opens the archive at `path` and parses its required entry.
pub fn extract_data(path: &Path) -> ExtractResult<Value> {
    info!(path = %path.display(), "Extracting submission archive");
    let file = File::open(path)?;
    read_archive(BufReader::new(file))
}

/// Parses the required entry of an archive from any seekable reader.
pub fn read_archive<R: Read + Seek>(reader: R) -> ExtractResult<Value> {
    let mut archive = ZipArchive::new(reader)?;
    debug!(entries = archive.len(), "Opened archive");

    let entry = match archive.by_name(REQUIRED_ARCHIVE_ENTRY) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => {
            return Err(ExtractError::MissingEntry {
                entry: REQUIRED_ARCHIVE_ENTRY,
            });
        }
        Err(e) => return Err(e.into()),
    };

    serde_json::from_reader(BufReader::new(entry)).map_err(|source| ExtractError::MalformedJson {
        entry: REQUIRED_ARCHIVE_ENTRY,
        source,
    })
}
