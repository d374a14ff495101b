//! Reconciliation inputs and results
//!
//! All of these are derived values, recomputed from text on every run.

use serde::{Deserialize, Serialize};

use super::{EquipmentRecord, MacAddress};

/// Ordered list of MACs to verify, after invalid lines were dropped
///
/// Duplicates are kept; each produces its own result entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetList {
    /// Valid normalized MACs, in input order
    pub entries: Vec<MacAddress>,

    /// Non-empty lines that did not normalize to a valid MAC
    pub rejected: Vec<String>,
}

impl TargetList {
    /// Number of valid entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no valid entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of non-empty lines read (valid plus rejected)
    #[must_use]
    pub fn lines_read(&self) -> usize {
        self.entries.len() + self.rejected.len()
    }
}

/// Records extracted from a manifest plus block counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// Extracted records, in manifest order (duplicates kept)
    pub records: Vec<EquipmentRecord>,

    /// Non-empty blocks attempted
    pub blocks_attempted: usize,
}

impl Extraction {
    /// Blocks discarded because no valid MAC was found
    #[must_use]
    pub fn blocks_discarded(&self) -> usize {
        self.blocks_attempted.saturating_sub(self.records.len())
    }

    /// Number of distinct locations among the extracted records
    #[must_use]
    pub fn distinct_locations(&self) -> usize {
        let mut seen: Vec<&str> = self.records.iter().map(|r| r.location.as_str()).collect();
        seen.sort_unstable();
        seen.dedup();
        seen.len()
    }
}

/// A target MAC paired with the equipment it resolved to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedEquipment {
    /// The target MAC
    pub mac: MacAddress,
    /// The equipment record it matched
    pub record: EquipmentRecord,
}

/// Found / not-found partition of a target list
///
/// `matched.len() + unmatched.len()` always equals the target list length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationResult {
    /// Targets that have an equipment record, in target order
    pub matched: Vec<MatchedEquipment>,
    /// Targets with no equipment record, in target order
    pub unmatched: Vec<MacAddress>,
}

impl ReconciliationResult {
    /// Total MACs checked
    #[must_use]
    pub fn total(&self) -> usize {
        self.matched.len() + self.unmatched.len()
    }

    /// Whether every target was found
    #[must_use]
    pub fn all_found(&self) -> bool {
        self.unmatched.is_empty()
    }

    /// MACs of the matched entries, in order
    #[must_use]
    pub fn matched_macs(&self) -> Vec<&MacAddress> {
        self.matched.iter().map(|m| &m.mac).collect()
    }
}

/// Output of the full text-to-result pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reconciliation {
    /// Parsed target list
    pub targets: TargetList,
    /// Extraction diagnostics and records
    pub extraction: Extraction,
    /// The found / not-found partition
    pub result: ReconciliationResult,
}
