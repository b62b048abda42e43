//! Output formatters for ranking reports

use crate::config::OutputFormat;
use crate::error::{Result, ResumeRankerError};
use crate::output::report::{RankingReport, ReportRow};
use colored::{Color, Colorize};
use std::path::{Path, PathBuf};

const HEADERS: [&str; 6] = ["#", "File Name", "Name", "Email", "Contact", "Score"];

/// Trait for formatting ranking reports
pub trait OutputFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String>;
}

/// Aligned plain-text table, optionally colored
pub struct ConsoleFormatter {
    use_colors: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

/// GitHub-flavored Markdown table
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn row_cells(row: &ReportRow, precision: usize) -> [String; 6] {
    [
        row.rank.to_string(),
        row.file_name.clone(),
        row.name.clone(),
        row.email.clone(),
        row.contact.clone(),
        format!("{:.*}", precision, row.score),
    ]
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Pad before coloring so escape codes do not skew the widths.
    fn format_line(cells: &[String], widths: &[usize]) -> String {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, &width)| {
                let padding = width.saturating_sub(cell.chars().count());
                format!("{}{}", cell, " ".repeat(padding))
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String> {
        let precision = report.metadata.score_precision;
        let mut output = String::new();

        output.push_str(&format!(
            "\n{}\n",
            self.colorize(&self.bold("📊 RANKED RESUMES"), Color::Blue)
        ));
        output.push_str(&format!(
            "Generated: {} | Ranked: {} | Skipped: {}\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.documents_ranked,
            report.metadata.documents_skipped
        ));
        output.push_str(&format!(
            "Job description: {}\n\n",
            self.colorize(&report.metadata.query_preview, Color::Cyan)
        ));

        if report.rows.is_empty() {
            output.push_str("No documents were ranked.\n");
        } else {
            let headers: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
            let rows: Vec<[String; 6]> = report
                .rows
                .iter()
                .map(|row| row_cells(row, precision))
                .collect();

            let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
            for cells in &rows {
                for (width, cell) in widths.iter_mut().zip(cells.iter()) {
                    *width = (*width).max(cell.chars().count());
                }
            }

            output.push_str(&self.bold(&Self::format_line(&headers, &widths)));
            output.push('\n');
            let rule_width = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
            output.push_str(&"─".repeat(rule_width));
            output.push('\n');

            for (index, cells) in rows.iter().enumerate() {
                let line = Self::format_line(cells, &widths);
                if index == 0 {
                    output.push_str(&self.colorize(&line, Color::Green));
                } else {
                    output.push_str(&line);
                }
                output.push('\n');
            }
        }

        if !report.skipped.is_empty() {
            output.push_str(&format!(
                "\n{}\n",
                self.colorize("⚠️  Skipped documents:", Color::Yellow)
            ));
            for skipped in &report.skipped {
                output.push_str(&format!("  • {}: {}\n", skipped.file_name, skipped.reason));
            }
        }

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn escape(cell: &str) -> String {
        cell.replace('|', "\\|")
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String> {
        let precision = report.metadata.score_precision;
        let mut output = String::from("# Ranked Resumes\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "- **Generated:** {}\n- **Job description:** {}\n- **Ranked:** {}\n- **Skipped:** {}\n\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                Self::escape(&report.metadata.query_preview),
                report.metadata.documents_ranked,
                report.metadata.documents_skipped
            ));
        }

        output.push_str(&format!("| {} |\n", HEADERS.join(" | ")));
        output.push_str(&format!("|{}\n", "---|".repeat(HEADERS.len())));
        for row in &report.rows {
            let cells: Vec<String> = row_cells(row, precision)
                .iter()
                .map(|cell| Self::escape(cell))
                .collect();
            output.push_str(&format!("| {} |\n", cells.join(" | ")));
        }

        if !report.skipped.is_empty() {
            output.push_str("\n## Skipped Documents\n\n");
            for skipped in &report.skipped {
                output.push_str(&format!("- `{}`: {}\n", skipped.file_name, skipped.reason));
            }
        }

        Ok(output)
    }
}

impl ReportGenerator {
    pub fn with_options(use_colors: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &RankingReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(file_path, content).map_err(|e| {
        ResumeRankerError::OutputFormatting(format!(
            "Failed to write report to {}: {}",
            file_path.display(),
            e
        ))
    })
}

/// Where `--save` writes.
///
/// An existing directory, or a path ending in a separator, receives a timestamped
/// file named after the format. Missing directories are created on save.
pub fn resolve_save_path(path: &Path, format: &OutputFormat) -> PathBuf {
    let names_directory = path
        .as_os_str()
        .to_string_lossy()
        .ends_with(std::path::is_separator);

    if path.is_dir() || names_directory {
        path.join(suggest_filename(format, true))
    } else {
        path.to_path_buf()
    }
}

pub fn suggest_filename(format: &OutputFormat, timestamp: bool) -> String {
    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("ranking{}.txt", timestamp_suffix),
        OutputFormat::Json => format!("ranking{}.json", timestamp_suffix),
        OutputFormat::Markdown => format!("ranking{}.md", timestamp_suffix),
    }
}
