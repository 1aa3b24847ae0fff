//! Writing downloaded files to disk

use crate::download::{FileDownload, FilePayload, FALLBACK_FILE_NAME};
use crate::error::{Error, Result};
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// Write a download's content into `dir`, returning the file path
///
/// Only the final component of the server-supplied name is used.
pub fn save_download(download: &FileDownload, dir: &Path) -> anyhow::Result<PathBuf> {
    let name = Path::new(&download.file_name)
        .file_name()
        .map_or_else(|| FALLBACK_FILE_NAME.into(), |n| n.to_os_string());
    let path = dir.join(name);

    let content = download.blob.to_content()?;
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

/// Check a download can be printed as JSON without losing bytes
pub fn ensure_printable(download: &FileDownload) -> Result<()> {
    if matches!(download.blob, FilePayload::Raw(_)) && download.blob.as_text().is_none() {
        return Err(Error::Other(format!(
            "{} ({}) is binary; pass --output to save it",
            download.file_name, download.content_type
        )));
    }
    Ok(())
}
