//! Colored terminal report.
//!
//! Prints a "Summary" rule with one line per destination, then a "Details"
//! rule with one line per skipped or moved file. Empty sections are omitted.

use std::io::{self, Write};

use yansi::Paint;

use crate::organizer::{OrganizeStats, Report};

/// Width of the section rules, in characters.
pub const RULE_WIDTH: usize = 60;

/// Human-readable report writer.
#[derive(Debug, Clone)]
pub struct TextOutput<'a> {
    stats: &'a OrganizeStats,
    report: &'a Report,
    show_details: bool,
}

impl<'a> TextOutput<'a> {
    /// Create a writer showing both sections.
    #[must_use]
    pub fn new(stats: &'a OrganizeStats, report: &'a Report) -> Self {
        Self {
            stats,
            report,
            show_details: true,
        }
    }

    /// Toggle the per-file details section.
    #[must_use]
    pub fn with_details(mut self, show: bool) -> Self {
        self.show_details = show;
        self
    }

    /// Write the report.
    ///
    /// # Errors
    ///
    /// Returns any error from the writer.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        if !self.report.summary.is_empty() {
            writeln!(writer, "{}", rule("Summary"))?;
            for line in &self.report.summary {
                writeln!(writer, "{}", line)?;
            }
        }

        if self.show_details && !self.report.details.is_empty() {
            writeln!(writer, "\n{}", rule("Details"))?;
            for line in &self.report.details {
                writeln!(writer, "{}", line)?;
            }
            writeln!(writer)?;
        }

        writeln!(
            writer,
            "{}",
            format!(
                "{} of {} file(s) processed",
                self.stats.processed_files, self.stats.total_files
            )
            .dim()
        )
    }
}

/// A horizontal rule with a centered, highlighted title.
fn rule(title: &str) -> String {
    let label = format!(" {} ", title);
    let fill = RULE_WIDTH.saturating_sub(label.chars().count());
    let left = fill / 2;
    let right = fill - left;
    format!(
        "{}{}{}",
        "─".repeat(left),
        label.red().bold(),
        "─".repeat(right)
    )
}
