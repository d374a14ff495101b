//! Tests for the location organizer

use macsep::core::ReconcileError;
use macsep::core::services::sample::{EXAMPLE_MANIFEST, EXAMPLE_MANIFEST_WITH_ERRORS};
use macsep::core::services::{IssueKind, organize};

use crate::common::{manifest, simple_block};

#[test]
fn test_clean_manifest() {
    let organized = organize(EXAMPLE_MANIFEST).unwrap();
    assert!(organized.issues.is_empty());
    assert_eq!(organized.blocks_attempted, 6);

    let groups = organized.groups();
    let names: Vec<&str> = groups.iter().map(|g| g.location.as_str()).collect();
    assert_eq!(names, vec!["Prateleira A1", "Gaveta B2", "Armário C3", "Caixa D4"]);
    assert_eq!(groups[0].len(), 2);
}

#[test]
fn test_error_manifest_issues() {
    let organized = organize(EXAMPLE_MANIFEST_WITH_ERRORS).unwrap();
    let blocks: Vec<usize> = organized.issues.iter().map(|i| i.block).collect();
    assert_eq!(blocks, vec![2, 3, 5]);
    assert!(matches!(organized.issues[1].kind, IssueKind::MissingLocation));
    assert!(matches!(organized.issues[2].kind, IssueKind::Duplicate { .. }));
}

#[test]
fn test_first_occurrence_kept() {
    let text = manifest([simple_block("001122334455", "A1"), simple_block("001122334455", "B2")]);
    let organized = organize(&text).unwrap();
    assert_eq!(organized.entries.len(), 1);
    assert_eq!(organized.entries[0].location, "A1");
}

#[test]
fn test_all_macs_in_manifest_order() {
    let text = manifest([
        simple_block("000000000002", "B"),
        simple_block("000000000001", "A"),
        simple_block("000000000003", "B"),
    ]);
    let organized = organize(&text).unwrap();
    let macs: Vec<&str> = organized.all_macs().iter().map(|m| m.as_str()).collect();
    assert_eq!(macs, vec!["000000000002", "000000000001", "000000000003"]);
}

#[test]
fn test_lowercase_labels() {
    let organized = organize("mac: aa:bb:cc:dd:ee:ff\nlocal estoque: Caixa D4").unwrap();
    assert_eq!(organized.entries[0].mac.as_str(), "AABBCCDDEEFF");
    assert_eq!(organized.entries[0].location, "Caixa D4");
}

#[test]
fn test_issue_json_shape() {
    let organized = organize("LOCAL ESTOQUE: A1").unwrap();
    let json = serde_json::to_value(&organized.issues[0]).unwrap();
    assert_eq!(json["block"], 1);
    assert_eq!(json["kind"], "missing_mac");
}

#[test]
fn test_blank_manifest_refused() {
    assert_eq!(organize("\n\n").unwrap_err(), ReconcileError::EmptyManifest);
}
