use crate::backup::write_backup;
use crate::errors::RenameError;
use crate::plan::{build_plan, RenameCandidate, RenamePlanItem};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of one planned rename. Failures are data, not errors: a failed
/// item never stops the rest of the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameOutcome {
    pub ok: bool,
    pub from: PathBuf,
    pub to: PathBuf,
    pub directory: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RenameOutcome {
    fn succeeded(item: &RenamePlanItem, backup_path: Option<&Path>) -> Self {
        Self {
            ok: true,
            from: item.from.clone(),
            to: item.to.clone(),
            directory: item.directory.clone(),
            backup_path: backup_path.map(Path::to_path_buf),
            error: None,
        }
    }

    fn failed(item: &RenamePlanItem, backup_path: Option<&Path>, error: String) -> Self {
        Self {
            ok: false,
            from: item.from.clone(),
            to: item.to.clone(),
            directory: item.directory.clone(),
            backup_path: backup_path.map(Path::to_path_buf),
            error: Some(error),
        }
    }
}

/// Apply a rename plan in order, one item at a time.
///
/// Each item is pre-checked so that an existing file at `to` is never
/// overwritten; such items fail with `TargetExists` and the file is left
/// untouched. A failed item does not prevent later items from being
/// attempted. The backup record, not rollback, is the recovery mechanism
/// for a partially applied batch.
pub fn apply_plan(plan: &[RenamePlanItem], backup_path: Option<&Path>) -> Vec<RenameOutcome> {
    plan.iter()
        .map(|item| {
            if item.to.exists() {
                return RenameOutcome::failed(
                    item,
                    backup_path,
                    RenameError::TargetExists(item.to.clone()).to_string(),
                );
            }
            match fs::rename(&item.from, &item.to) {
                Ok(()) => RenameOutcome::succeeded(item, backup_path),
                Err(e) => RenameOutcome::failed(item, backup_path, e.to_string()),
            }
        })
        .collect()
}

/// Build a plan from raw candidates, persist its backup record, then apply.
///
/// The backup write strictly precedes the first rename; if it fails, the
/// whole apply aborts with `BackupWriteFailed` and no file is touched. An
/// empty plan returns no results and performs no I/O at all.
pub fn build_and_apply(candidates: &[RenameCandidate]) -> Result<Vec<RenameOutcome>> {
    let plan = build_plan(candidates);
    if plan.is_empty() {
        return Ok(Vec::new());
    }
    let backup_path = write_backup(&plan)?;
    Ok(apply_plan(&plan, backup_path.as_deref()))
}
