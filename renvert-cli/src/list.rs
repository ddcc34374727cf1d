use anyhow::Result;
use renvert_core::{list_operation, OutputFormatter};
use std::path::Path;

use crate::OutputFormat;

pub fn handle_list(
    directory: &Path,
    recursive: bool,
    include_backups: bool,
    output: OutputFormat,
) -> Result<i32> {
    let report = list_operation(directory, recursive, include_backups)?;
    print!("{}", report.format(output.into()));
    Ok(0)
}
