//! Plain-text report rendering
//!
//! The report is deterministic apart from the generation timestamp, which
//! the caller passes in.

use std::fmt::Write;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::core::models::ReconciliationResult;
use crate::core::services::grouping;
use crate::shared::list;

/// Report header settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// First line of the report
    pub title: String,
    /// chrono format for the date line
    pub date_format: String,
    /// chrono format for the time line
    pub time_format: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: "EQUIPMENT RECONCILIATION REPORT".to_string(),
            date_format: "%d/%m/%Y".to_string(),
            time_format: "%H:%M:%S".to_string(),
        }
    }
}

/// Whether `format` renders a date and time without error
///
/// Rejects unknown specifiers (`%Q`) and ones that need a time zone (`%z`).
#[must_use]
pub fn is_valid_format(format: &str) -> bool {
    NaiveDate::from_ymd_opt(2000, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .is_some_and(|at| write!(String::new(), "{}", at.format(format)).is_ok())
}

fn stamp(at: NaiveDateTime, format: &str, fallback: &str) -> String {
    let mut text = String::new();
    if write!(text, "{}", at.format(format)).is_ok() {
        return text;
    }
    log::warn!("Invalid date/time format {format:?}, using {fallback:?}");
    at.format(fallback).to_string()
}

/// Render the full copy-ready report
#[must_use]
pub fn render_report(
    result: &ReconciliationResult,
    options: &ReportOptions,
    generated_at: NaiveDateTime,
) -> String {
    let defaults = ReportOptions::default();
    let date = stamp(generated_at, &options.date_format, &defaults.date_format);
    let time = stamp(generated_at, &options.time_format, &defaults.time_format);
    let mut out = String::new();

    // Only plain strings are written below, so these writes cannot fail.
    let _ = writeln!(out, "{}", options.title);
    let _ = writeln!(out, "Date: {date}");
    let _ = writeln!(out, "Time: {time}");
    out.push('\n');

    out.push_str("SUMMARY:\n");
    let _ = writeln!(out, "- MACs checked: {}", result.total());
    let _ = writeln!(out, "- Equipment found: {}", result.matched.len());
    let _ = writeln!(out, "- MACs not found: {}", result.unmatched.len());
    out.push('\n');

    out.push_str("FOUND EQUIPMENT:\n");
    for m in &result.matched {
        let r = &m.record;
        let _ = writeln!(
            out,
            "{} - {} - {} - {} - {}",
            m.mac,
            r.location,
            r.model,
            r.sale_value.as_deref().unwrap_or_default(),
            r.kind.as_deref().unwrap_or_default()
        );
    }
    out.push('\n');

    out.push_str("MACS NOT FOUND:\n");
    for mac in &result.unmatched {
        let _ = writeln!(out, "{mac}");
    }
    out.push('\n');

    out.push_str("BY LOCATION:\n");
    for group in grouping::group_by_location(&result.matched) {
        let _ = writeln!(
            out,
            "{} ({}): {}",
            group.location,
            group.len(),
            list::comma_joined(&group.macs)
        );
    }
    out.push('\n');

    out.push_str("FOUND MAC LIST (comma-separated):\n");
    out.push_str(&list::comma_spaced(&result.matched_macs()));
    out.push_str("\n\n--- End of report ---\n");

    out
}
