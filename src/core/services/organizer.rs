//! Location organizer
//!
//! A stricter, simpler reading of a manifest: each block must carry both a
//! `MAC:` and a `LOCAL ESTOQUE:` field. Blocks that don't are reported with
//! the reason, by 1-based block number. The first occurrence of a MAC is
//! kept and later repeats are reported as duplicates.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::ReconcileError;
use crate::core::models::{LocationGroup, MacAddress, MacError};
use crate::core::services::{extractor, grouping};

static MAC_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)MAC:[ \t]*([A-Z0-9:]+)").expect("valid regex"));

static LOCATION_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)LOCAL ESTOQUE:[ \t]*([^\n\r\t]+)").expect("valid regex"));

/// A MAC and where it is stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacLocation {
    /// Stock location
    pub location: String,
    /// Normalized MAC
    pub mac: MacAddress,
}

/// Why a block was rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueKind {
    /// No `MAC:` field
    MissingMac,
    /// No `LOCAL ESTOQUE:` field, or it was blank
    MissingLocation,
    /// The MAC field did not hold 12 characters
    InvalidLength {
        /// The normalized value
        value: String,
    },
    /// The MAC field held a non-hex character
    InvalidFormat {
        /// The normalized value
        value: String,
    },
    /// The MAC already appeared in an earlier block
    Duplicate {
        /// The repeated MAC
        mac: MacAddress,
    },
}

/// A rejected block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockIssue {
    /// 1-based block number
    pub block: usize,
    /// What was wrong
    #[serde(flatten)]
    pub kind: IssueKind,
}

impl std::fmt::Display for BlockIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            IssueKind::MissingMac => write!(f, "Block {}: MAC not found", self.block),
            IssueKind::MissingLocation => write!(f, "Block {}: location not found", self.block),
            IssueKind::InvalidLength { value } => {
                write!(f, "Block {}: invalid MAC length ({value})", self.block)
            },
            IssueKind::InvalidFormat { value } => {
                write!(f, "Block {}: invalid MAC format ({value})", self.block)
            },
            IssueKind::Duplicate { mac } => write!(f, "Block {}: duplicate MAC ({mac})", self.block),
        }
    }
}

/// Result of organizing a manifest by location
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organized {
    /// Accepted entries, in manifest order
    pub entries: Vec<MacLocation>,
    /// Rejected blocks
    pub issues: Vec<BlockIssue>,
    /// Non-empty blocks read
    pub blocks_attempted: usize,
}

impl Organized {
    /// Accepted entries grouped by location
    #[must_use]
    pub fn groups(&self) -> Vec<LocationGroup> {
        grouping::group_pairs(self.entries.iter().map(|e| (e.location.as_str(), &e.mac)))
    }

    /// Every accepted MAC, in manifest order
    #[must_use]
    pub fn all_macs(&self) -> Vec<&MacAddress> {
        self.entries.iter().map(|e| &e.mac).collect()
    }
}

/// Organize a manifest into `(location, mac)` entries
pub fn organize(manifest_text: &str) -> Result<Organized, ReconcileError> {
    if manifest_text.trim().is_empty() {
        return Err(ReconcileError::EmptyManifest);
    }

    let blocks = extractor::split_blocks(manifest_text);
    let mut organized = Organized {
        blocks_attempted: blocks.len(),
        ..Organized::default()
    };
    let mut seen: HashSet<MacAddress> = HashSet::new();

    for (index, block) in blocks.iter().enumerate() {
        let number = index + 1;
        match read_block(block) {
            Ok(entry) if !seen.insert(entry.mac.clone()) => {
                organized.issues.push(BlockIssue {
                    block: number,
                    kind: IssueKind::Duplicate { mac: entry.mac },
                });
            },
            Ok(entry) => organized.entries.push(entry),
            Err(kind) => organized.issues.push(BlockIssue { block: number, kind }),
        }
    }

    for issue in &organized.issues {
        log::warn!("{issue}");
    }
    log::info!(
        "Organized {} MAC(s) from {} block(s), {} issue(s)",
        organized.entries.len(),
        organized.blocks_attempted,
        organized.issues.len()
    );

    Ok(organized)
}

fn read_block(block: &str) -> Result<MacLocation, IssueKind> {
    let raw_mac = MAC_FIELD
        .captures(block)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or(IssueKind::MissingMac)?;

    let location = LOCATION_FIELD
        .captures(block)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|l| !l.is_empty())
        .ok_or(IssueKind::MissingLocation)?;

    let mac = MacAddress::parse(raw_mac).map_err(|e| match e {
        MacError::Empty => IssueKind::MissingMac,
        MacError::InvalidLength { value, .. } => IssueKind::InvalidLength { value },
        MacError::InvalidCharacter { value } => IssueKind::InvalidFormat { value },
    })?;

    Ok(MacLocation {
        location: location.to_string(),
        mac,
    })
}
