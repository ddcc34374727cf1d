use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while applying or reverting a rename batch.
///
/// Per-item errors are captured into the item's outcome as a message and
/// never cross the batch boundary; only batch-level failures (backup write,
/// unreadable backup record) propagate as `Err`.
#[derive(Debug, Error)]
pub enum RenameError {
    /// A backup item is missing one of its endpoint paths.
    #[error("invalid mapping: both 'from' and 'to' paths are required")]
    InvalidMapping,

    /// The rename target already exists; renames never overwrite.
    #[error("target already exists: {0}")]
    TargetExists(PathBuf),

    /// The renamed path to restore from is gone.
    #[error("target to restore from not found: {0}")]
    RestoreSourceMissing(PathBuf),

    /// The original path is occupied; restoring would overwrite.
    #[error("original name already exists: {0}")]
    RestoreTargetOccupied(PathBuf),

    /// The backup record is not shaped like a backup record.
    #[error("invalid backup format: {0}")]
    InvalidBackupFormat(String),

    /// The backup record could not be written before the batch.
    #[error("failed to write backup {path}: {source}")]
    BackupWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backup record declares a version this build does not understand.
    #[error("unsupported backup version {0}")]
    UnsupportedBackupVersion(u64),
}
