use anyhow::{Context, Result};
use renvert_core::{apply_operation, OutputFormatter, RenameCandidate};
use std::io::Read;
use std::path::Path;

use crate::OutputFormat;

pub fn handle_apply(candidates_path: &Path, output: OutputFormat, quiet: bool) -> Result<i32> {
    let raw = if candidates_path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read candidates from stdin")?;
        buf
    } else {
        std::fs::read_to_string(candidates_path).with_context(|| {
            format!(
                "failed to read candidates file: {}",
                candidates_path.display()
            )
        })?
    };
    let candidates: Vec<RenameCandidate> =
        serde_json::from_str(&raw).context("failed to parse candidates JSON")?;

    let report = apply_operation(&candidates)?;

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
