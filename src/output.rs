//! Output formatting for human and JSON modes
//!
//! Each command result can be rendered either as human-readable text or as
//! machine-parseable JSON. The human form is also available as a `String`
//! through `to_human` so it can be checked without a terminal.

use std::fmt::Write;

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{LocationGroup, MacAddress, Reconciliation};
use crate::core::services::Organized;
use crate::shared::list::ListFormat;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

impl OutputMode {
    /// `--json` wins; otherwise the configured default
    #[must_use]
    pub const fn from_flags(json_flag: bool, json_default: bool) -> Self {
        if json_flag || json_default {
            Self::Json
        } else {
            Self::Human
        }
    }
}

/// Result of the `reconcile` command
#[derive(Debug, Serialize)]
pub struct ReconcileOutput {
    /// Pipeline output with diagnostics
    #[serde(flatten)]
    pub reconciliation: Reconciliation,
    /// Matched MACs grouped by location
    pub groups: Vec<LocationGroup>,
    /// Full text report, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
    /// How MAC lists are printed in human output
    #[serde(skip)]
    pub format: ListFormat,
    /// Unmatched MACs previewed in the human summary
    #[serde(skip)]
    pub preview_limit: usize,
}

/// Result of the `organize` command
#[derive(Debug, Serialize)]
pub struct OrganizeOutput {
    /// Entries and block issues
    #[serde(flatten)]
    pub organized: Organized,
    /// Entries grouped by location
    pub groups: Vec<LocationGroup>,
    /// Every accepted MAC, in manifest order
    pub all_macs: Vec<MacAddress>,
    /// How MAC lists are printed in human output
    #[serde(skip)]
    pub format: ListFormat,
}

/// Result of the `normalize` command
#[derive(Debug, Serialize)]
pub struct NormalizeOutput {
    /// Valid normalized MACs, in input order
    pub valid: Vec<MacAddress>,
    /// Lines that are not valid MACs
    pub rejected: Vec<String>,
    /// Every non-empty line normalized, comma-joined, unvalidated
    pub loaded: String,
    /// Non-empty lines read
    pub lines: usize,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn indent(text: &str) -> String {
    text.lines().map(|line| format!("  {line}")).collect::<Vec<_>>().join("\n")
}

// Writing into a String cannot fail, so the results of writeln! below are
// discarded.

impl ReconcileOutput {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => print_json(self),
        }
    }

    /// Human-readable summary
    #[must_use]
    pub fn to_human(&self) -> String {
        let run = &self.reconciliation;
        let result = &run.result;
        let mut out = String::new();

        let _ = writeln!(out, "{}", "Summary".bold());
        let _ = writeln!(out, "  MACs checked:    {}", result.total());
        let _ = writeln!(out, "  Found:           {}", result.matched.len().to_string().green());
        let _ = writeln!(out, "  Not found:       {}", result.unmatched.len().to_string().red());
        let _ = writeln!(
            out,
            "  Blocks read:     {} ({} discarded)",
            run.extraction.blocks_attempted,
            run.extraction.blocks_discarded()
        );
        let _ = writeln!(out, "  Locations:       {}", run.extraction.distinct_locations());
        let unassigned = result.matched.iter().filter(|m| m.record.is_unassigned()).count();
        if unassigned > 0 {
            let _ = writeln!(out, "  No location:     {}", unassigned.to_string().yellow());
        }

        if !run.targets.rejected.is_empty() {
            let _ = writeln!(
                out,
                "\n{} {}",
                format!("Dropped {} invalid target line(s):", run.targets.rejected.len()).yellow(),
                run.targets.rejected.join(", ")
            );
        }

        if !self.groups.is_empty() {
            let _ = writeln!(out, "\n{}", "By location".bold());
            for group in &self.groups {
                let _ = writeln!(out, "{} ({})", group.location.cyan(), group.len());
                let _ = writeln!(out, "{}", indent(&self.format.render(&group.macs)));
            }
        }

        if !result.matched.is_empty() {
            let _ = writeln!(out, "\n{}", "Found MACs".bold());
            let _ = writeln!(out, "{}", self.format.render(&result.matched_macs()));
        }

        if result.unmatched.is_empty() {
            if result.total() > 0 {
                let _ = writeln!(out, "\n{}", "All MACs found.".green());
            }
        } else {
            let _ = writeln!(out, "\n{}", "Not found".bold());
            let shown = result.unmatched.len().min(self.preview_limit);
            for mac in &result.unmatched[..shown] {
                let _ = writeln!(out, "  {mac}");
            }
            if result.unmatched.len() > shown {
                let _ = writeln!(out, "  ... and {} more", result.unmatched.len() - shown);
            }

            let _ = writeln!(out, "\n{}", "Not found MACs".bold());
            let _ = writeln!(out, "{}", self.format.render(&result.unmatched));
        }

        if let Some(report) = &self.report {
            let _ = write!(out, "\n{report}");
        }

        out
    }
}

impl OrganizeOutput {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => print_json(self),
        }
    }

    /// Human-readable listing
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(
            out,
            "Organized {} MAC(s) from {} block(s)",
            self.organized.entries.len(),
            self.organized.blocks_attempted
        );

        for group in &self.groups {
            let _ = writeln!(out, "\n{} ({})", group.location.cyan(), group.len());
            let _ = writeln!(out, "{}", indent(&self.format.render(&group.macs)));
        }

        if !self.all_macs.is_empty() {
            let _ = writeln!(out, "\n{}", "All MACs".bold());
            let _ = writeln!(out, "{}", self.format.render(&self.all_macs));
        }

        if !self.organized.issues.is_empty() {
            let _ = writeln!(out, "\n{}", "Issues".bold().yellow());
            for issue in &self.organized.issues {
                let _ = writeln!(out, "  {issue}");
            }
        }

        out
    }
}

impl NormalizeOutput {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => print_json(self),
        }
    }

    /// Human-readable listing
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "Loaded {} line(s): {}", self.lines, self.loaded);
        let _ = writeln!(out, "\n{} ({})", "Valid".bold().green(), self.valid.len());
        for mac in &self.valid {
            let _ = writeln!(out, "  {mac}");
        }
        if !self.rejected.is_empty() {
            let _ = writeln!(out, "\n{} ({})", "Rejected".bold().red(), self.rejected.len());
            for line in &self.rejected {
                let _ = writeln!(out, "  {line}");
            }
        }

        out
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
