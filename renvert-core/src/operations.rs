//! High-level operations that correspond to CLI commands
//!
//! These functions contain the business logic for each renvert command,
//! separated from CLI concerns like argument parsing and output
//! formatting.

use crate::apply::build_and_apply;
use crate::backup::read_backup;
use crate::output::{ApplyReport, ListReport, RevertReport, ShowReport};
use crate::plan::RenameCandidate;
use crate::revert::{revert_all, revert_selected};
use crate::scan::list_files;
use anyhow::{anyhow, Result};
use std::path::Path;

/// Build a plan from candidates, write its backup, and apply it.
pub fn apply_operation(candidates: &[RenameCandidate]) -> Result<ApplyReport> {
    let results = build_and_apply(candidates)?;
    let backup_path = results.iter().find_map(|r| r.backup_path.clone());
    Ok(ApplyReport {
        backup_path,
        results,
    })
}

/// Revert a backup record, whole or restricted to the given item indexes.
///
/// Indexes refer to positions in the record's `items` sequence, as shown
/// by `show_operation`. Selection keeps record order; the revert engine
/// replays it in reverse.
pub fn revert_operation(backup_path: &Path, selection: Option<&[usize]>) -> Result<RevertReport> {
    let results = match selection {
        None => revert_all(backup_path),
        Some(indexes) => {
            let record = read_backup(backup_path)?;
            let mut selected = Vec::with_capacity(indexes.len());
            for &i in indexes {
                let item = record
                    .items
                    .get(i)
                    .ok_or_else(|| {
                        anyhow!("item index {i} out of range (backup has {} items)", record.items.len())
                    })?
                    .clone();
                selected.push(item);
            }
            revert_selected(&selected)
        },
    };
    Ok(RevertReport { results })
}

/// Load a backup record for preview without touching any file.
pub fn show_operation(backup_path: &Path) -> Result<ShowReport> {
    let record = read_backup(backup_path)?;
    Ok(ShowReport {
        backup_path: backup_path.to_path_buf(),
        record,
    })
}

/// Scan a directory for candidate files.
pub fn list_operation(dir: &Path, recursive: bool, include_backups: bool) -> Result<ListReport> {
    let entries = list_files(dir, recursive, include_backups)?;
    Ok(ListReport { entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn candidate(dir: &Path, current: &str, proposed: &str) -> RenameCandidate {
        RenameCandidate {
            directory: dir.to_path_buf(),
            current_name: current.to_string(),
            proposed_name: proposed.to_string(),
        }
    }

    #[test]
    fn test_apply_then_revert_selected_by_index() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), b"a").unwrap();
        fs::write(temp_dir.path().join("b.txt"), b"b").unwrap();

        let report = apply_operation(&[
            candidate(temp_dir.path(), "a.txt", "x.txt"),
            candidate(temp_dir.path(), "b.txt", "y.txt"),
        ])
        .unwrap();
        assert_eq!(report.failed_count(), 0);
        let backup_path = report.backup_path.unwrap();

        // Revert only the second item.
        let revert = revert_operation(&backup_path, Some(&[1])).unwrap();
        assert_eq!(revert.results.len(), 1);
        assert!(revert.results[0].ok);
        assert!(temp_dir.path().join("b.txt").exists());
        assert!(temp_dir.path().join("x.txt").exists());
        assert!(!temp_dir.path().join("a.txt").exists());
    }

    #[test]
    fn test_revert_operation_rejects_bad_index() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), b"a").unwrap();
        let report = apply_operation(&[candidate(temp_dir.path(), "a.txt", "x.txt")]).unwrap();

        let err = revert_operation(&report.backup_path.unwrap(), Some(&[5])).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_show_operation_previews_record() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), b"a").unwrap();
        let report = apply_operation(&[candidate(temp_dir.path(), "a.txt", "x.txt")]).unwrap();

        let show = show_operation(&report.backup_path.unwrap()).unwrap();
        assert_eq!(show.record.items.len(), 1);
        assert_eq!(show.record.items[0].from, temp_dir.path().join("a.txt"));
        // Preview changed nothing.
        assert!(temp_dir.path().join("x.txt").exists());
    }

    #[test]
    fn test_apply_operation_empty_candidates() {
        let report = apply_operation(&[]).unwrap();
        assert!(report.results.is_empty());
        assert_eq!(report.backup_path, None);
    }

    #[test]
    fn test_list_operation_sees_renamed_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), b"a").unwrap();
        apply_operation(&[candidate(temp_dir.path(), "a.txt", "x.txt")]).unwrap();

        let listing = list_operation(temp_dir.path(), false, false).unwrap();
        let names: Vec<_> = listing.entries.iter().map(|e| e.base_name.clone()).collect();
        assert_eq!(names, vec!["x.txt"]);
    }
}
