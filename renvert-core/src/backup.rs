use crate::errors::RenameError;
use crate::paths::common_ancestor;
use crate::plan::RenamePlanItem;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Backup record format version understood by this build.
pub const BACKUP_VERSION: u64 = 1;

/// Filename prefix for backup records. Leading with this marker lets
/// directory scans recognize and exclude backups from future batches.
pub const BACKUP_PREFIX: &str = ".renvert-backup-";

/// One from/to pair in a backup record. Endpoints default to empty when
/// the key is absent: a bad mapping is a per-item revert failure, not a
/// reason to reject the record wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupItem {
    #[serde(default)]
    pub from: PathBuf,
    #[serde(default)]
    pub to: PathBuf,
}

/// The durable record of a batch, written before any rename executes.
/// Item order is semantically significant: revert replays it in reverse.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupRecord {
    pub version: u64,
    pub created_at: String,
    pub items: Vec<BackupItem>,
}

/// Write a backup record describing `plan`, returning its path.
///
/// Returns `Ok(None)` without touching the filesystem for an empty plan.
/// The record lands in the common ancestor of the plan's directories, or
/// the first item's directory when the directories share nothing beyond a
/// root. Any failure here aborts the apply: no rename may run without a
/// durable record of the full mapping.
pub fn write_backup(plan: &[RenamePlanItem]) -> Result<Option<PathBuf>, RenameError> {
    let Some(first) = plan.first() else {
        return Ok(None);
    };

    let dirs: Vec<PathBuf> = plan.iter().map(|p| p.directory.clone()).collect();
    let root = common_ancestor(&dirs).unwrap_or_else(|| first.directory.clone());

    let created_at = chrono::Local::now().to_rfc3339();
    let backup_path = root.join(format!(
        "{}{}.json",
        BACKUP_PREFIX,
        filename_timestamp(&created_at)
    ));

    let record = BackupRecord {
        version: BACKUP_VERSION,
        created_at,
        items: plan
            .iter()
            .map(|p| BackupItem {
                from: p.from.clone(),
                to: p.to.clone(),
            })
            .collect(),
    };

    let file = File::create(&backup_path).map_err(|e| RenameError::BackupWriteFailed {
        path: backup_path.clone(),
        source: e,
    })?;
    serde_json::to_writer_pretty(BufWriter::new(file), &record).map_err(|e| {
        RenameError::BackupWriteFailed {
            path: backup_path.clone(),
            source: e.into(),
        }
    })?;

    Ok(Some(backup_path))
}

/// Read and validate a backup record.
///
/// Shape is checked before deserialization so that a malformed record
/// yields `InvalidBackupFormat` rather than a serde error, and records
/// from a newer format version are rejected up front.
pub fn read_backup(path: &Path) -> Result<BackupRecord> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read backup file: {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&raw)
        .map_err(|e| RenameError::InvalidBackupFormat(e.to_string()))?;

    let version = value
        .get("version")
        .and_then(serde_json::Value::as_u64)
        .ok_or_else(|| {
            RenameError::InvalidBackupFormat("missing or non-integer 'version' field".to_string())
        })?;
    if version != BACKUP_VERSION {
        return Err(RenameError::UnsupportedBackupVersion(version).into());
    }
    if !value.get("items").is_some_and(serde_json::Value::is_array) {
        return Err(
            RenameError::InvalidBackupFormat("'items' is not a sequence".to_string()).into(),
        );
    }

    let record: BackupRecord = serde_json::from_value(value)
        .map_err(|e| RenameError::InvalidBackupFormat(e.to_string()))?;
    Ok(record)
}

/// Replace the characters in an RFC 3339 timestamp that filesystems
/// dislike (colons, fractional-second dot) with hyphens.
fn filename_timestamp(ts: &str) -> String {
    ts.replace([':', '.'], "-")
}
