use std::path::{Component, Path, PathBuf};

/// Compute the longest common ancestor directory of a set of directories.
///
/// Comparison is component-wise, so `/data/abc` and `/data/abd` share
/// `/data`, not `/data/ab`. Returns `None` for an empty input or when the
/// paths share nothing beyond a root (e.g. different Windows drive
/// prefixes); callers fall back to the first directory in that case.
pub fn common_ancestor(dirs: &[PathBuf]) -> Option<PathBuf> {
    let first = dirs.first()?;
    let mut shared: Vec<Component<'_>> = first.components().collect();

    for dir in &dirs[1..] {
        let mut matched = 0;
        for (a, b) in shared.iter().zip(dir.components()) {
            if *a == b {
                matched += 1;
            } else {
                break;
            }
        }
        shared.truncate(matched);
        if shared.is_empty() {
            return None;
        }
    }

    let ancestor: PathBuf = shared.iter().collect();
    // A bare root (or bare drive prefix) is not a useful backup location.
    if ancestor.parent().is_none() && dirs.iter().any(|d| d.parent().is_some()) && shared.len() <= 1
    {
        return None;
    }
    Some(ancestor)
}

/// True if `name` is a single path segment: no separators, not `.` or `..`.
pub fn is_single_segment(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
