use crate::backup::BACKUP_PREFIX;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One file found in a directory scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    pub full_path: PathBuf,
    pub base_name: String,
    pub directory: PathBuf,
}

/// List regular files under `dir`, optionally recursing into
/// subdirectories.
///
/// Backup records produced by this tool are excluded unless
/// `include_backups` is set, so a scan feeding a new batch does not offer
/// the previous batch's record up for renaming.
pub fn list_files(dir: &Path, recursive: bool, include_backups: bool) -> Result<Vec<FileEntry>> {
    let mut walker = WalkDir::new(dir).min_depth(1);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut entries = Vec::new();
    for entry in walker {
        let entry =
            entry.with_context(|| format!("failed to scan directory: {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let base_name = entry.file_name().to_string_lossy().into_owned();
        if !include_backups && base_name.starts_with(BACKUP_PREFIX) {
            continue;
        }
        let full_path = entry.path().to_path_buf();
        let directory = full_path
            .parent()
            .map_or_else(|| dir.to_path_buf(), Path::to_path_buf);
        entries.push(FileEntry {
            full_path,
            base_name,
            directory,
        });
    }
    Ok(entries)
}
