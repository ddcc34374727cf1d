use crate::apply::RenameOutcome;
use crate::backup::BackupRecord;
use crate::revert::RevertOutcome;
use crate::scan::FileEntry;
use comfy_table::{Cell, Color, Table};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

fn status_cell(ok: bool) -> Cell {
    if ok {
        Cell::new("ok").fg(Color::Green)
    } else {
        Cell::new("failed").fg(Color::Red)
    }
}

/// Result of an apply operation: per-item outcomes plus the backup record
/// they can be reverted from.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApplyReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_path: Option<PathBuf>,
    pub results: Vec<RenameOutcome>,
}

impl ApplyReport {
    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|r| !r.ok).count()
    }
}

impl OutputFormatter for ApplyReport {
    fn format_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();
        if self.results.is_empty() {
            output.push_str("Nothing to rename\n");
            return output;
        }

        let mut table = Table::new();
        table.set_header(vec![
            Cell::new("Status").fg(Color::Cyan),
            Cell::new("From").fg(Color::Cyan),
            Cell::new("To").fg(Color::Cyan),
            Cell::new("Error").fg(Color::Cyan),
        ]);
        for result in &self.results {
            table.add_row(vec![
                status_cell(result.ok),
                Cell::new(display_name(&result.from)),
                Cell::new(display_name(&result.to)),
                Cell::new(result.error.as_deref().unwrap_or("")),
            ]);
        }
        writeln!(output, "{table}").unwrap();

        let failed = self.failed_count();
        writeln!(
            output,
            "{} renamed, {} failed",
            self.results.len() - failed,
            failed
        )
        .unwrap();
        if let Some(ref backup_path) = self.backup_path {
            writeln!(output, "Backup written to {}", backup_path.display()).unwrap();
        }
        output
    }
}

/// Result of a revert operation.
#[derive(Debug, Serialize, Deserialize)]
pub struct RevertReport {
    pub results: Vec<RevertOutcome>,
}

impl RevertReport {
    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|r| !r.ok).count()
    }
}

impl OutputFormatter for RevertReport {
    fn format_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();
        if self.results.is_empty() {
            output.push_str("Nothing to revert\n");
            return output;
        }

        let mut table = Table::new();
        table.set_header(vec![
            Cell::new("Status").fg(Color::Cyan),
            Cell::new("Restored from").fg(Color::Cyan),
            Cell::new("Restored to").fg(Color::Cyan),
            Cell::new("Error").fg(Color::Cyan),
        ]);
        for result in &self.results {
            table.add_row(vec![
                status_cell(result.ok),
                Cell::new(
                    result
                        .restored_from
                        .as_deref()
                        .map_or_else(String::new, display_name),
                ),
                Cell::new(
                    result
                        .restored_to
                        .as_deref()
                        .map_or_else(String::new, display_name),
                ),
                Cell::new(result.error.as_deref().unwrap_or("")),
            ]);
        }
        writeln!(output, "{table}").unwrap();

        let failed = self.failed_count();
        writeln!(
            output,
            "{} restored, {} failed",
            self.results.len() - failed,
            failed
        )
        .unwrap();
        output
    }
}

/// A backup record loaded for preview.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShowReport {
    pub backup_path: PathBuf,
    pub record: BackupRecord,
}

impl OutputFormatter for ShowReport {
    fn format_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();
        writeln!(output, "Backup: {}", self.backup_path.display()).unwrap();
        writeln!(output, "Created: {}", self.record.created_at).unwrap();

        let mut table = Table::new();
        table.set_header(vec![
            Cell::new("#").fg(Color::Cyan),
            Cell::new("From").fg(Color::Cyan),
            Cell::new("To").fg(Color::Cyan),
        ]);
        for (i, item) in self.record.items.iter().enumerate() {
            table.add_row(vec![
                Cell::new(i.to_string()),
                Cell::new(item.from.display().to_string()),
                Cell::new(item.to.display().to_string()),
            ]);
        }
        writeln!(output, "{table}").unwrap();
        output
    }
}

/// Files found by a directory scan.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListReport {
    pub entries: Vec<FileEntry>,
}

impl OutputFormatter for ListReport {
    fn format_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();
        for entry in &self.entries {
            writeln!(output, "{}", entry.full_path.display()).unwrap();
        }
        writeln!(output, "{} files", self.entries.len()).unwrap();
        output
    }
}
