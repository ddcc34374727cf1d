use crate::paths::is_single_segment;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A proposed rename supplied by the caller, one per file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameCandidate {
    /// Directory containing the file.
    pub directory: PathBuf,
    /// Current file name (no path separators).
    pub current_name: String,
    /// Proposed file name (no path separators).
    pub proposed_name: String,
}

/// A normalized rename operation: `from` and `to` always share `directory`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlanItem {
    pub directory: PathBuf,
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Build a rename plan from raw candidates.
///
/// Drops candidates that are missing a directory or name, no-op candidates
/// (proposed equals current), and candidates whose names are not a single
/// path segment. Input order is preserved: it becomes the backup item
/// order, which in turn fixes revert replay order. Uniqueness of `from`
/// within the plan is the caller's responsibility.
pub fn build_plan(candidates: &[RenameCandidate]) -> Vec<RenamePlanItem> {
    candidates
        .iter()
        .filter(|c| {
            !c.directory.as_os_str().is_empty()
                && is_single_segment(&c.current_name)
                && is_single_segment(&c.proposed_name)
                && c.current_name != c.proposed_name
        })
        .map(|c| RenamePlanItem {
            directory: c.directory.clone(),
            from: c.directory.join(&c.current_name),
            to: c.directory.join(&c.proposed_name),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(dir: &str, current: &str, proposed: &str) -> RenameCandidate {
        RenameCandidate {
            directory: PathBuf::from(dir),
            current_name: current.to_string(),
            proposed_name: proposed.to_string(),
        }
    }

    #[test]
    fn test_build_plan_joins_paths() {
        let plan = build_plan(&[candidate("/d", "a.txt", "x.txt")]);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].directory, PathBuf::from("/d"));
        assert_eq!(plan[0].from, PathBuf::from("/d/a.txt"));
        assert_eq!(plan[0].to, PathBuf::from("/d/x.txt"));
    }

    #[test]
    fn test_build_plan_drops_noops() {
        let plan = build_plan(&[
            candidate("/d", "same.txt", "same.txt"),
            candidate("/d", "a.txt", "b.txt"),
        ]);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].from, PathBuf::from("/d/a.txt"));
    }

    #[test]
    fn test_build_plan_drops_missing_fields() {
        let plan = build_plan(&[
            candidate("", "a.txt", "b.txt"),
            candidate("/d", "", "b.txt"),
            candidate("/d", "a.txt", ""),
        ]);
        assert!(plan.is_empty());
    }

    #[test]
    fn test_build_plan_rejects_multi_segment_names() {
        let plan = build_plan(&[
            candidate("/d", "a.txt", "sub/b.txt"),
            candidate("/d", "nested/a.txt", "b.txt"),
            candidate("/d", "a.txt", ".."),
        ]);
        assert!(plan.is_empty());
    }

    #[test]
    fn test_build_plan_preserves_order() {
        let plan = build_plan(&[
            candidate("/d", "c.txt", "3.txt"),
            candidate("/d", "a.txt", "1.txt"),
            candidate("/d", "b.txt", "2.txt"),
        ]);
        let froms: Vec<_> = plan.iter().map(|p| p.from.clone()).collect();
        assert_eq!(
            froms,
            vec![
                PathBuf::from("/d/c.txt"),
                PathBuf::from("/d/a.txt"),
                PathBuf::from("/d/b.txt"),
            ]
        );
    }
}
