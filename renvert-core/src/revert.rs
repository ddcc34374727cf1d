use crate::backup::{read_backup, BackupItem};
use crate::errors::RenameError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of restoring one backup item. `restored_from` is the renamed
/// path the file moved back out of; `restored_to` is its original name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevertOutcome {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restored_from: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restored_to: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RevertOutcome {
    fn succeeded(item: &BackupItem) -> Self {
        Self {
            ok: true,
            restored_from: Some(item.to.clone()),
            restored_to: Some(item.from.clone()),
            error: None,
        }
    }

    fn failed(item: &BackupItem, error: String) -> Self {
        Self {
            ok: false,
            restored_from: Some(item.to.clone()),
            restored_to: Some(item.from.clone()),
            error: Some(error),
        }
    }

    /// Record-level failure: the backup itself could not be used, so there
    /// are no per-item endpoints to report.
    fn record_failure(error: String) -> Self {
        Self {
            ok: false,
            restored_from: None,
            restored_to: None,
            error: Some(error),
        }
    }
}

/// Validate one backup item against the current filesystem state.
/// All checks must pass before the inverse rename is attempted.
fn check_item(item: &BackupItem) -> Result<(), RenameError> {
    if item.from.as_os_str().is_empty() || item.to.as_os_str().is_empty() {
        return Err(RenameError::InvalidMapping);
    }
    if !item.to.exists() {
        return Err(RenameError::RestoreSourceMissing(item.to.clone()));
    }
    if item.from.exists() {
        return Err(RenameError::RestoreTargetOccupied(item.from.clone()));
    }
    Ok(())
}

/// Revert caller-selected backup items, e.g. a partial selection from a
/// previewed record. No record-level validation: the items are trusted as
/// given, and only the per-item checks run. An empty selection returns an
/// empty result with no I/O.
///
/// Items are processed in reverse of their given order. A batch undoes as
/// a stack: a later rename may have depended on an earlier one vacating a
/// name, so only the reverse replay is guaranteed to unwind cleanly.
pub fn revert_selected(items: &[BackupItem]) -> Vec<RevertOutcome> {
    items
        .iter()
        .rev()
        .map(|item| match check_item(item) {
            Ok(()) => match fs::rename(&item.to, &item.from) {
                Ok(()) => RevertOutcome::succeeded(item),
                Err(e) => RevertOutcome::failed(item, e.to_string()),
            },
            Err(e) => RevertOutcome::failed(item, e.to_string()),
        })
        .collect()
}

/// Revert every item in a backup record, in reverse insertion order.
///
/// If the record cannot be read, parsed, or validated, the whole call
/// yields a single synthetic failed outcome; there is no safe partial
/// state to report from an unusable record.
pub fn revert_all(backup_path: &Path) -> Vec<RevertOutcome> {
    match read_backup(backup_path) {
        Ok(record) => revert_selected(&record.items),
        Err(e) => vec![RevertOutcome::record_failure(format!("{e:#}"))],
    }
}
