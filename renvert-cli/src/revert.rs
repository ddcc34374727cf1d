use anyhow::Result;
use renvert_core::{revert_operation, OutputFormatter};
use std::path::Path;

use crate::OutputFormat;

pub fn handle_revert(
    backup: &Path,
    items: &[usize],
    output: OutputFormat,
    quiet: bool,
) -> Result<i32> {
    let selection = (!items.is_empty()).then_some(items);
    let report = revert_operation(backup, selection)?;

    match output {
        OutputFormat::Json => print!("{}", report.format_json()),
        OutputFormat::Summary => {
            if !quiet {
                print!("{}", report.format_summary());
            }
        },
    }

    Ok(i32::from(report.failed_count() > 0))
}
