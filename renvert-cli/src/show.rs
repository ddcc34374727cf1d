use anyhow::Result;
use renvert_core::{show_operation, OutputFormatter};
use std::path::Path;

use crate::OutputFormat;

pub fn handle_show(backup: &Path, output: OutputFormat) -> Result<i32> {
    let report = show_operation(backup)?;
    print!("{}", report.format(output.into()));
    Ok(0)
}
