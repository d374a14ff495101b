//! Equipment record extractor
//!
//! Splits manifest text into blank-line-separated blocks and turns each
//! block into an [`EquipmentRecord`]. Field order inside a block does not
//! matter; missing fields are tolerated. A block without a valid MAC is
//! discarded whole.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::{EquipmentRecord, Extraction, UNASSIGNED_LOCATION};
use crate::parser::{FieldLabel, LabeledFields, MatcherChain, clean_location, is_field_line};

static BLANK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*\n").expect("valid regex"));

static MODEL_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:\((?P<code>[^)]*)\))?\s*(?P<name>.*?)\s*(?:-\s*ID\s+PR[ÓO]PRIO\s*:.*)?$")
        .expect("valid regex")
});

/// Split text into non-empty, trimmed blocks
///
/// Blocks are separated by a blank line (a line that is empty or holds only
/// spaces and tabs). Windows line endings are accepted.
#[must_use]
pub fn split_blocks(text: &str) -> Vec<String> {
    let text = text.replace("\r\n", "\n");
    BLANK_LINE
        .split(&text)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extract records using the built-in matcher chain
#[must_use]
pub fn extract(text: &str) -> Extraction {
    Extractor::default().extract(text)
}

/// Manifest extractor with a configurable MAC matcher chain
#[derive(Debug, Default)]
pub struct Extractor {
    chain: MatcherChain,
}

impl Extractor {
    /// Create an extractor with a custom matcher chain
    #[must_use]
    pub const fn new(chain: MatcherChain) -> Self {
        Self { chain }
    }

    /// Extract every record from manifest text
    #[must_use]
    pub fn extract(&self, text: &str) -> Extraction {
        let blocks = split_blocks(text);
        let records: Vec<EquipmentRecord> = blocks
            .iter()
            .enumerate()
            .filter_map(|(index, block)| {
                let record = self.extract_block(block);
                if record.is_none() {
                    log::warn!("Block {}: no valid MAC found, block discarded", index + 1);
                }
                record
            })
            .collect();

        log::info!("Extracted {} record(s) from {} block(s)", records.len(), blocks.len());

        Extraction {
            records,
            blocks_attempted: blocks.len(),
        }
    }

    /// Extract a record from a single block
    #[must_use]
    pub fn extract_block(&self, block: &str) -> Option<EquipmentRecord> {
        let lines: Vec<&str> = block.lines().collect();
        let hit = self.chain.find_in_lines(&lines)?;
        let fields = LabeledFields::from_lines(lines.iter().copied());
        log::debug!(
            "MAC {} found by {} matcher{}, {} labeled field(s)",
            hit.mac,
            hit.matcher,
            if hit.per_line { " (per line)" } else { "" },
            fields.len()
        );
        if !fields.is_empty() && !fields.contains(FieldLabel::Location) {
            log::debug!("No location label for {}, using {UNASSIGNED_LOCATION:?}", hit.mac);
        }

        let model = lines.first().map(|line| extract_model(line)).unwrap_or_default();
        let location = clean_location(fields.get(FieldLabel::Location).unwrap_or_default());
        let owned = |label: FieldLabel| fields.get(label).map(str::to_string);

        Some(
            EquipmentRecord::new(hit.mac, location)
                .with_model(model)
                .with_serial(fields.get(FieldLabel::SerialNumber).unwrap_or_default())
                .with_sale_value(owned(FieldLabel::SaleValue))
                .with_kind(owned(FieldLabel::Kind))
                .with_refurbished(owned(FieldLabel::Refurbished)),
        )
    }
}

/// Model text from a block's first line
///
/// An optional parenthesized code followed by free text, up to an
/// `ID Próprio:` marker or the end of the line. Empty when the first line
/// is a labeled field line.
#[must_use]
pub fn extract_model(first_line: &str) -> String {
    if is_field_line(first_line) {
        return String::new();
    }
    MODEL_LINE
        .captures(first_line.trim())
        .map(|caps| {
            let code = caps.name("code").map_or("", |m| m.as_str().trim());
            let name = caps.name("name").map_or("", |m| m.as_str().trim());
            format!("{code} {name}").trim().to_string()
        })
        .unwrap_or_default()
}
