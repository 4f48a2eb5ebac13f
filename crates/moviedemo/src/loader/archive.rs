//! Zip archive handling.

use std::io::{Cursor, Read};

use zip::ZipArchive;

use super::error::LoaderError;

/// Reads the first `.json` entry of a zip archive into memory.
pub fn extract_document(archive: &[u8]) -> Result<Vec<u8>, LoaderError> {
    let mut archive = ZipArchive::new(Cursor::new(archive))?;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if !entry.is_file() || !entry.name().to_ascii_lowercase().ends_with(".json") {
            continue;
        }

        tracing::debug!(entry = entry.name(), size = entry.size(), "Extracting sample document");
        let mut document = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut document)?;
        return Ok(document);
    }

    Err(LoaderError::MissingDocument)
}
