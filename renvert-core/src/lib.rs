#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod apply;
pub mod backup;
pub mod errors;
pub mod operations;
pub mod output;
pub mod paths;
pub mod plan;
pub mod revert;
pub mod scan;

pub use apply::{apply_plan, build_and_apply, RenameOutcome};
pub use backup::{read_backup, write_backup, BackupItem, BackupRecord, BACKUP_PREFIX, BACKUP_VERSION};
pub use errors::RenameError;
pub use operations::{apply_operation, list_operation, revert_operation, show_operation};
pub use output::{ApplyReport, ListReport, OutputFormat, OutputFormatter, RevertReport, ShowReport};
pub use paths::common_ancestor;
pub use plan::{build_plan, RenameCandidate, RenamePlanItem};
pub use revert::{revert_all, revert_selected, RevertOutcome};
pub use scan::{list_files, FileEntry};
