//! MAC list normalizer
//!
//! Turns a newline-separated block of candidate MACs into normalized tokens.
//! Each line is processed independently: trimmed at its ends, colons
//! stripped, upper-cased. Whitespace inside a token is kept so malformed
//! lines stay invalid.

use crate::core::models::{MacAddress, TargetList, mac};

/// Normalize every non-empty line, valid or not
#[must_use]
pub fn normalize_lines(text: &str) -> Vec<String> {
    non_empty_lines(text).map(mac::normalize).collect()
}

/// Build the target list, dropping lines that are not valid MACs
#[must_use]
pub fn parse_targets(text: &str) -> TargetList {
    let mut list = TargetList::default();
    for line in non_empty_lines(text) {
        match MacAddress::parse(line) {
            Ok(mac) => list.entries.push(mac),
            Err(e) => {
                log::warn!("Dropping target line {line:?}: {e}");
                list.rejected.push(line.to_string());
            },
        }
    }
    log::debug!(
        "Parsed {} target MAC(s), {} rejected",
        list.entries.len(),
        list.rejected.len()
    );
    list
}

/// Every non-empty line in display form, comma-joined, without validation
#[must_use]
pub fn loaded_list(text: &str) -> String {
    crate::shared::list::comma_joined(&normalize_lines(text))
}

/// Count of non-empty lines
#[must_use]
pub fn count_lines(text: &str) -> usize {
    non_empty_lines(text).count()
}

fn non_empty_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}
