//! Reconciliation engine
//!
//! Matches a target list against extracted equipment records. Pure and
//! deterministic: the same inputs always give the same partitions, in
//! target order.

use std::collections::HashMap;

use crate::core::ReconcileError;
use crate::core::models::{
    EquipmentRecord, MacAddress, MatchedEquipment, Reconciliation, ReconciliationResult, TargetList,
};
use crate::core::services::{extractor, normalizer};

/// Index records by MAC
///
/// When the manifest lists the same MAC more than once, the last record
/// wins.
#[must_use]
pub fn index_by_mac(records: &[EquipmentRecord]) -> HashMap<&MacAddress, &EquipmentRecord> {
    let mut index = HashMap::with_capacity(records.len());
    for record in records {
        if let Some(previous) = index.insert(&record.mac, record) {
            log::debug!(
                "MAC {} listed again: {:?} replaces {:?}",
                record.mac,
                record.location,
                previous.location
            );
        }
    }
    index
}

/// Partition the target list into matched and unmatched entries
#[must_use]
pub fn reconcile(targets: &TargetList, records: &[EquipmentRecord]) -> ReconciliationResult {
    let index = index_by_mac(records);
    let mut result = ReconciliationResult::default();

    for mac in &targets.entries {
        if let Some(record) = index.get(mac) {
            log::debug!("MAC {mac}: found at {}", record.location);
            result.matched.push(MatchedEquipment {
                mac: mac.clone(),
                record: (*record).clone(),
            });
        } else {
            log::debug!("MAC {mac}: not found");
            result.unmatched.push(mac.clone());
        }
    }

    result
}

/// Run the whole pipeline on the two pasted texts
///
/// Blank inputs are refused; everything else is filtered, never an error.
pub fn reconcile_texts(target_text: &str, manifest_text: &str) -> Result<Reconciliation, ReconcileError> {
    if target_text.trim().is_empty() {
        return Err(ReconcileError::EmptyTargets);
    }
    if manifest_text.trim().is_empty() {
        return Err(ReconcileError::EmptyManifest);
    }

    let targets = normalizer::parse_targets(target_text);
    let extraction = extractor::extract(manifest_text);
    let result = reconcile(&targets, &extraction.records);

    log::info!(
        "Checked {} MAC(s): {} found, {} not found",
        result.total(),
        result.matched.len(),
        result.unmatched.len()
    );

    Ok(Reconciliation {
        targets,
        extraction,
        result,
    })
}
